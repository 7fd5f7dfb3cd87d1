//! `components.global.mjs` — lazy bindings for globally registered components.

use indexmap::IndexSet;
use tracing::debug;

use crate::js::{async_component, client_only_import, define_async_import, render_lines};
use crate::template::{Template, TemplateContext};

pub struct GlobalComponentsTemplate;

impl Template for GlobalComponentsTemplate {
    fn filename(&self) -> Option<&'static str> {
        Some("components.global.mjs")
    }

    fn contents(&self, ctx: &TemplateContext<'_>) -> String {
        generate_global_components(ctx)
    }
}

/// One `Lazy<name>` async export per global, non-island component.
///
/// Client-only components get their loaded export wrapped in
/// `createClientOnly`; the adapter import is added only when one is present.
pub fn generate_global_components(ctx: &TemplateContext<'_>) -> String {
    let mut imports = IndexSet::new();
    imports.insert(define_async_import(ctx.config));

    let mut exports = Vec::new();
    for c in ctx.components.mode_components() {
        if c.island || !c.global {
            continue;
        }
        if c.is_client_only() {
            imports.insert(client_only_import(ctx.config));
        }
        exports.push(format!(
            "export const {} = {}",
            c.lazy_name(),
            async_component(c, c.is_client_only())
        ));
    }
    debug!(count = exports.len(), "lazy global component exports");

    render_lines(imports.into_iter().chain(exports))
}
