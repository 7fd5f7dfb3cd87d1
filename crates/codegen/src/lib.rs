//! weave-codegen: virtual modules and type declarations for discovered
//! UI components.
//!
//! Every generator is a pure function from a [`TemplateContext`] (component
//! registry + build configuration) to the text of one artifact:
//!
//! - `components.plugin.mjs` registers global components on startup ([`plugin`])
//! - `components.global.mjs` holds lazy bindings for global components ([`global`])
//! - `components.mjs` exports every non-island component eagerly and lazily ([`components`])
//! - `components.islands.mjs` holds lazy bindings for islands ([`islands`])
//! - `components.d.ts` types all of the above for the type-checker ([`declarations`])
//! - `components.json` dumps the registry for external tooling ([`metadata`])
//!
//! [`write_templates`] renders all of them into the configured build directory.

pub mod components;
pub mod config;
pub mod declarations;
pub mod directives;
pub mod error;
pub mod global;
pub mod islands;
mod js;
pub mod metadata;
pub mod plugin;
pub mod template;

use std::path::PathBuf;

use tracing::{debug, info};

pub use config::CodegenConfig;
pub use error::CodegenError;
pub use template::{builtin_templates, Template, TemplateContext};

/// Render every built-in template that names a file, as `(filename, contents)`.
pub fn render_templates(ctx: &TemplateContext<'_>) -> Vec<(&'static str, String)> {
    builtin_templates()
        .iter()
        .filter_map(|template| {
            let filename = template.filename()?;
            let contents = template.contents(ctx);
            debug!(template = filename, bytes = contents.len(), "rendered template");
            Some((filename, contents))
        })
        .collect()
}

/// Write all built-in templates into `ctx.config.build_dir`.
///
/// Every call regenerates every artifact from scratch. Returns the written
/// paths in template order.
pub fn write_templates(ctx: &TemplateContext<'_>) -> Result<Vec<PathBuf>, CodegenError> {
    let build_dir = &ctx.config.build_dir;
    std::fs::create_dir_all(build_dir).map_err(|source| CodegenError::CreateDir {
        path: build_dir.clone(),
        source,
    })?;

    let mut written = Vec::new();
    for (filename, contents) in render_templates(ctx) {
        let path = build_dir.join(filename);
        std::fs::write(&path, contents).map_err(|source| CodegenError::Write {
            path: path.clone(),
            source,
        })?;
        written.push(path);
    }

    info!(
        build_dir = %build_dir.display(),
        components = ctx.components.len(),
        files = written.len(),
        "wrote component templates"
    );
    Ok(written)
}
