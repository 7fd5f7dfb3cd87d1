//! `components.json` — the discovered registry, for editors and devtools.

use crate::template::{Template, TemplateContext};

pub struct MetadataTemplate;

impl Template for MetadataTemplate {
    fn filename(&self) -> Option<&'static str> {
        Some("components.json")
    }

    fn contents(&self, ctx: &TemplateContext<'_>) -> String {
        generate_metadata(ctx)
    }
}

/// Pretty-printed JSON array of every component, whatever the build mode.
pub fn generate_metadata(ctx: &TemplateContext<'_>) -> String {
    let components = ctx.components.get_components(None);
    // Descriptors hold only strings, bools, integers and unit enums; they
    // always serialize.
    let mut out = serde_json::to_string_pretty(&components).unwrap_or_default();
    out.push('\n');
    out
}
