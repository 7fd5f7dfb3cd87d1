use std::path::PathBuf;

/// Errors while loading configuration or writing generated artifacts.
///
/// Rendering itself never fails; malformed descriptors surface as malformed
/// generated code for the bundler or type-checker to report.
#[derive(Debug, thiserror::Error)]
pub enum CodegenError {
    #[error("failed to create build directory '{path}': {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error reading config '{path}': {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),
}
