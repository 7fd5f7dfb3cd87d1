//! Build configuration for the generators.
//!
//! Loaded from a `weave.toml` file. Every key is optional:
//!
//! ```toml
//! build_dir = ".weave"
//! framework_module = "vue"
//! runtime_module = "#app/nuxt"
//! plugin_factory = "defineNuxtPlugin"
//! plugin_name = "nuxt:global-components"
//! components_module = "#components"
//! global_components_module = "#build/components.global.mjs"
//! client_only_module = "#app/components/client-only"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::CodegenError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodegenConfig {
    /// Output directory; relative type-import paths are computed from here.
    pub build_dir: PathBuf,
    /// UI framework module: source of `defineAsyncComponent` and the module
    /// whose `GlobalComponents` interface the declarations augment.
    pub framework_module: String,
    /// Module providing the plugin factory.
    pub runtime_module: String,
    pub plugin_factory: String,
    /// Name the generated plugin identifies itself with.
    pub plugin_name: String,
    /// Module the plugin imports `Lazy*` bindings from.
    pub components_module: String,
    /// Shared module holding lazy bindings of global components.
    pub global_components_module: String,
    /// Module providing `createClientOnly`.
    pub client_only_module: String,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        CodegenConfig {
            build_dir: PathBuf::from(".weave"),
            framework_module: "vue".to_string(),
            runtime_module: "#app/nuxt".to_string(),
            plugin_factory: "defineNuxtPlugin".to_string(),
            plugin_name: "nuxt:global-components".to_string(),
            components_module: "#components".to_string(),
            global_components_module: "#build/components.global.mjs".to_string(),
            client_only_module: "#app/components/client-only".to_string(),
        }
    }
}

impl CodegenConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, CodegenError> {
        Ok(toml::from_str(s)?)
    }

    /// Load a config file; keys it leaves out keep their defaults.
    pub fn load(path: &Path) -> Result<Self, CodegenError> {
        let s = std::fs::read_to_string(path).map_err(|source| CodegenError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let config = CodegenConfig::from_toml_str("").unwrap();
        assert_eq!(config, CodegenConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = CodegenConfig::from_toml_str(
            r#"
build_dir = "/srv/app/.build"
plugin_name = "app:components"
"#,
        )
        .unwrap();
        assert_eq!(config.build_dir, PathBuf::from("/srv/app/.build"));
        assert_eq!(config.plugin_name, "app:components");
        assert_eq!(config.framework_module, "vue");
    }

    #[test]
    fn test_invalid_toml() {
        let result = CodegenConfig::from_toml_str("build_dir = [");
        assert!(matches!(result, Err(CodegenError::Config(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = CodegenConfig::load(&dir.path().join("weave.toml"));
        assert!(matches!(result, Err(CodegenError::ReadConfig { .. })));
    }
}
