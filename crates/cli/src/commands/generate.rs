use std::path::Path;
use std::process;

use weave_codegen::TemplateContext;
use weave_registry::{ComponentMode, ComponentsContext};

use super::{load_components, load_config};
use crate::{report_error, OutputFormat};

pub(crate) fn cmd_generate(
    registry: &Path,
    out: Option<&Path>,
    mode: ComponentMode,
    config: Option<&Path>,
    output: OutputFormat,
    quiet: bool,
) {
    let components = load_components(registry, output, quiet);
    let config = load_config(config, out, output, quiet);
    let ctx = ComponentsContext::new(components, mode);

    match weave_codegen::write_templates(&TemplateContext::new(&ctx, &config)) {
        Ok(files) => {
            if quiet {
                return;
            }
            match output {
                OutputFormat::Text => {
                    println!(
                        "Generated {} file(s) in {} for {} component(s):",
                        files.len(),
                        config.build_dir.display(),
                        ctx.len()
                    );
                    for f in &files {
                        println!("  {}", f.display());
                    }
                }
                OutputFormat::Json => {
                    let file_list: Vec<String> =
                        files.iter().map(|f| f.display().to_string()).collect();
                    let json = serde_json::json!({
                        "build_dir": config.build_dir.display().to_string(),
                        "mode": mode.as_str(),
                        "files": file_list,
                    });
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&json).unwrap_or_default()
                    );
                }
            }
        }
        Err(e) => {
            report_error(
                &format!("code generation error: {}", e),
                output,
                quiet,
            );
            process::exit(1);
        }
    }
}
