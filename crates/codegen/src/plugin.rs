//! `components.plugin.mjs` — registers global components on app startup.
//!
//! Each global component is registered twice, under its own name and under
//! `Lazy<name>`, both resolving to the same lazily loaded binding.

use indexmap::IndexSet;
use tracing::debug;

use crate::config::CodegenConfig;
use crate::js::{import_binding, import_names, quote};
use crate::template::{Template, TemplateContext};

pub struct PluginTemplate;

impl Template for PluginTemplate {
    fn filename(&self) -> Option<&'static str> {
        Some("components.plugin.mjs")
    }

    fn contents(&self, ctx: &TemplateContext<'_>) -> String {
        generate_plugin(ctx)
    }
}

/// Names of the global components registered by the plugin, first seen first.
///
/// A name is kept once even when several descriptors (e.g. a client and a
/// server variant) share it. Islands are left out: they have no `Lazy*`
/// binding to import.
pub fn global_component_names<'a>(ctx: &TemplateContext<'a>) -> IndexSet<&'a str> {
    ctx.components
        .mode_components()
        .into_iter()
        .filter(|c| c.global && !c.island)
        .map(|c| c.pascal_name.as_str())
        .collect()
}

/// Plugin body that registers nothing.
pub fn empty_plugin(config: &CodegenConfig) -> String {
    format!(
        r#"{import}

export default {factory}({{
  name: {name},
}})
"#,
        import = import_binding(
            &config.runtime_module,
            &config.plugin_factory,
            &config.plugin_factory
        ),
        factory = config.plugin_factory,
        name = quote(&config.plugin_name),
    )
}

pub fn generate_plugin(ctx: &TemplateContext<'_>) -> String {
    let config = ctx.config;
    let names = global_component_names(ctx);
    debug!(count = names.len(), "global components for plugin");
    if names.is_empty() {
        return empty_plugin(config);
    }

    let lazy_names: Vec<String> = names.iter().map(|name| format!("Lazy{}", name)).collect();
    let pairs: Vec<String> = names
        .iter()
        .zip(&lazy_names)
        .map(|(name, lazy_name)| format!("  [{}, {}]", quote(name), lazy_name))
        .collect();

    format!(
        r#"{runtime_import}
{components_import}

const lazyGlobalComponents = [
{pairs}
]

export default {factory}({{
  name: {name},
  setup (nuxtApp) {{
    for (const [name, component] of lazyGlobalComponents) {{
      nuxtApp.vueApp.component(name, component)
      nuxtApp.vueApp.component('Lazy' + name, component)
    }}
  }}
}})
"#,
        runtime_import = import_binding(
            &config.runtime_module,
            &config.plugin_factory,
            &config.plugin_factory
        ),
        components_import = import_names(&config.components_module, &lazy_names),
        pairs = pairs.join(",\n"),
        factory = config.plugin_factory,
        name = quote(&config.plugin_name),
    )
}
