mod generate;
mod names;
mod print;

pub(crate) use generate::cmd_generate;
pub(crate) use names::cmd_names;
pub(crate) use print::cmd_print;

use std::path::Path;
use std::process;

use tracing::debug;
use weave_codegen::CodegenConfig;
use weave_registry::Component;

use crate::{report_error, OutputFormat};

/// Config file picked up from the working directory when `--config` is absent.
const DEFAULT_CONFIG_FILE: &str = "weave.toml";

/// Load the registry or exit with an error report.
fn load_components(path: &Path, output: OutputFormat, quiet: bool) -> Vec<Component> {
    match weave_registry::load_registry(path) {
        Ok(components) => {
            debug!(path = %path.display(), count = components.len(), "loaded registry");
            components
        }
        Err(e) => {
            report_error(&e.to_string(), output, quiet);
            process::exit(1);
        }
    }
}

/// Resolve the codegen config: explicit file, then `./weave.toml`, then
/// defaults. `out` overrides the build directory, which is made absolute so
/// type-import paths can be computed against it.
fn load_config(
    config: Option<&Path>,
    out: Option<&Path>,
    output: OutputFormat,
    quiet: bool,
) -> CodegenConfig {
    let implicit = Path::new(DEFAULT_CONFIG_FILE);
    let path = match config {
        Some(p) => Some(p),
        None if implicit.is_file() => Some(implicit),
        None => None,
    };

    let mut cfg = match path {
        Some(p) => match CodegenConfig::load(p) {
            Ok(cfg) => {
                debug!(path = %p.display(), "loaded config");
                cfg
            }
            Err(e) => {
                report_error(&e.to_string(), output, quiet);
                process::exit(1);
            }
        },
        None => CodegenConfig::default(),
    };

    if let Some(out) = out {
        cfg.build_dir = out.to_path_buf();
    }
    if cfg.build_dir.is_relative() {
        if let Ok(cwd) = std::env::current_dir() {
            cfg.build_dir = cwd.join(&cfg.build_dir);
        }
    }
    cfg
}
