use std::path::Path;

use weave_codegen::components::component_names;
use weave_registry::{ComponentMode, ComponentsContext};

use super::load_components;
use crate::OutputFormat;

pub(crate) fn cmd_names(registry: &Path, output: OutputFormat, quiet: bool) {
    let ctx = ComponentsContext::new(load_components(registry, output, quiet), ComponentMode::All);
    let names = component_names(&ctx);

    match output {
        OutputFormat::Text => {
            for name in names {
                println!("{}", name);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::Value::from(names));
        }
    }
}
