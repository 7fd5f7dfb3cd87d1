use std::path::Path;

use weave_codegen::components::ComponentsTemplate;
use weave_codegen::declarations::DeclarationsTemplate;
use weave_codegen::global::GlobalComponentsTemplate;
use weave_codegen::islands::IslandsTemplate;
use weave_codegen::metadata::MetadataTemplate;
use weave_codegen::plugin::PluginTemplate;
use weave_codegen::{Template, TemplateContext};
use weave_registry::{ComponentMode, ComponentsContext};

use super::{load_components, load_config};
use crate::{OutputFormat, TemplateArg};

fn template_for(arg: TemplateArg) -> Box<dyn Template> {
    match arg {
        TemplateArg::Plugin => Box::new(PluginTemplate),
        TemplateArg::Global => Box::new(GlobalComponentsTemplate),
        TemplateArg::Components => Box::new(ComponentsTemplate),
        TemplateArg::Islands => Box::new(IslandsTemplate),
        TemplateArg::Declarations => Box::new(DeclarationsTemplate),
        TemplateArg::Metadata => Box::new(MetadataTemplate),
    }
}

pub(crate) fn cmd_print(
    template: TemplateArg,
    registry: &Path,
    mode: ComponentMode,
    config: Option<&Path>,
    output: OutputFormat,
    quiet: bool,
) {
    let components = load_components(registry, output, quiet);
    let config = load_config(config, None, output, quiet);
    let ctx = ComponentsContext::new(components, mode);

    let template = template_for(template);
    let contents = template.contents(&TemplateContext::new(&ctx, &config));

    match output {
        OutputFormat::Text => print!("{}", contents),
        OutputFormat::Json => {
            let json = serde_json::json!({
                "filename": template.filename(),
                "contents": contents,
            });
            println!(
                "{}",
                serde_json::to_string_pretty(&json).unwrap_or_default()
            );
        }
    }
}
