//! `components.d.ts` — ambient types for every non-island component.
//!
//! Carries no runtime code. Each component name and its `Lazy` variant map
//! to `typeof import("<path>")['<export>']`, both in the framework's
//! `GlobalComponents` interface and as top-level constants.

use std::path::Path;

use tracing::debug;
use weave_registry::{Component, ComponentMode};

use crate::js::quote;
use crate::template::{Template, TemplateContext};

pub struct DeclarationsTemplate;

impl Template for DeclarationsTemplate {
    fn filename(&self) -> Option<&'static str> {
        Some("components.d.ts")
    }

    fn contents(&self, ctx: &TemplateContext<'_>) -> String {
        generate_declarations(ctx)
    }
}

/// Import path used in the type expression for `file_path`.
///
/// Absolute paths become relative to `build_dir`, where the declaration
/// file lives. A trailing script extension is dropped; `.vue` is kept.
pub fn type_import_path(file_path: &str, build_dir: &Path) -> String {
    let path = Path::new(file_path);
    let resolved = if path.is_absolute() {
        match pathdiff::diff_paths(path, build_dir) {
            Some(relative) => {
                let relative = relative.to_string_lossy().replace('\\', "/");
                if relative.starts_with('.') || relative.starts_with('/') {
                    relative
                } else {
                    format!("./{}", relative)
                }
            }
            None => file_path.to_string(),
        }
    } else {
        file_path.to_string()
    };
    strip_script_extension(&resolved).to_string()
}

/// Drop a final `.ext` made of word characters that follows a word
/// character, unless the extension starts with `vue`.
fn strip_script_extension(path: &str) -> &str {
    let Some(dot) = path.rfind('.') else {
        return path;
    };
    let is_word = |ch: char| ch.is_ascii_alphanumeric() || ch == '_';
    let ext = &path[dot + 1..];
    let after_word = path[..dot].chars().next_back().is_some_and(is_word);
    if ext.is_empty() || !ext.chars().all(is_word) || !after_word || ext.starts_with("vue") {
        return path;
    }
    &path[..dot]
}

pub fn component_type(component: &Component, build_dir: &Path) -> String {
    format!(
        "typeof import({})['{}']",
        quote(&type_import_path(&component.file_path, build_dir)),
        component.export.name()
    )
}

pub fn generate_declarations(ctx: &TemplateContext<'_>) -> String {
    let build_dir = &ctx.config.build_dir;
    let types: Vec<(&str, String, String)> = ctx
        .components
        .get_components(Some(ComponentMode::All))
        .into_iter()
        .filter(|c| !c.island)
        .map(|c| {
            (
                c.pascal_name.as_str(),
                c.lazy_name(),
                component_type(c, build_dir),
            )
        })
        .collect();
    debug!(count = types.len(), "component type declarations");

    let mut interface_entries = Vec::with_capacity(types.len() * 2);
    let mut constants = Vec::with_capacity(types.len() * 2);
    for (name, _, ty) in &types {
        interface_entries.push(format!("    '{}': {}", name, ty));
        constants.push(format!("export const {}: {}", name, ty));
    }
    for (_, lazy_name, ty) in &types {
        interface_entries.push(format!("    '{}': {}", lazy_name, ty));
        constants.push(format!("export const {}: {}", lazy_name, ty));
    }

    let mut out = String::from("// Generated by weave component discovery. Do not edit.\n");
    out.push_str(&format!(
        "declare module {} {{\n",
        quote(&ctx.config.framework_module)
    ));
    out.push_str("  export interface GlobalComponents {\n");
    for entry in &interface_entries {
        out.push_str(entry);
        out.push('\n');
    }
    out.push_str("  }\n}\n\n");
    for constant in &constants {
        out.push_str(constant);
        out.push('\n');
    }
    out.push_str("\nexport const componentNames: string[]\n");
    out
}
