//! `components.islands.mjs` — lazy bindings for components rendered out of band.

use tracing::debug;
use weave_registry::{Component, ComponentMode};

use crate::js::{async_component, define_async_import, render_lines};
use crate::template::{Template, TemplateContext};

pub struct IslandsTemplate;

impl Template for IslandsTemplate {
    fn filename(&self) -> Option<&'static str> {
        Some("components.islands.mjs")
    }

    fn contents(&self, ctx: &TemplateContext<'_>) -> String {
        generate_islands(ctx)
    }
}

/// Explicit islands, plus server-only components without a client-mode
/// component of the same name anywhere in the registry.
pub fn island_components<'a>(ctx: &TemplateContext<'a>) -> Vec<&'a Component> {
    let all = ctx.components.get_components(None);
    all.iter()
        .copied()
        .filter(|c| {
            c.island
                || (c.mode == ComponentMode::Server
                    && !all.iter().any(|other| {
                        other.mode == ComponentMode::Client && other.pascal_name == c.pascal_name
                    }))
        })
        .collect()
}

/// Islands are never wrapped client-only; they hydrate through their own
/// mechanism whatever their mode.
pub fn generate_islands(ctx: &TemplateContext<'_>) -> String {
    let islands = island_components(ctx);
    debug!(count = islands.len(), "island components");

    let exports = islands
        .iter()
        .map(|c| format!("export const {} = {}", c.pascal_name, async_component(c, false)));
    render_lines(std::iter::once(define_async_import(ctx.config)).chain(exports))
}
