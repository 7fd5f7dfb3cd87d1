//! Loading component registries produced by discovery.
//!
//! A registry file is JSON: either a bare array of descriptors or an object
//! with a `components` array. Descriptor order is preserved; it drives the
//! order of every generated artifact.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::types::Component;

/// Errors while reading a component registry.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("error reading registry '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed JSON or a descriptor of the wrong shape.
    #[error("invalid component registry: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RegistryFile {
    List(Vec<Component>),
    Object { components: Vec<Component> },
}

/// Parse registry JSON text into component descriptors.
pub fn parse_registry(json: &str) -> Result<Vec<Component>, RegistryError> {
    let file: RegistryFile = serde_json::from_str(json)?;
    Ok(match file {
        RegistryFile::List(components) => components,
        RegistryFile::Object { components } => components,
    })
}

/// Read and parse a registry file.
pub fn load_registry(path: &Path) -> Result<Vec<Component>, RegistryError> {
    let json = std::fs::read_to_string(path).map_err(|source| RegistryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_registry(&json)
}
