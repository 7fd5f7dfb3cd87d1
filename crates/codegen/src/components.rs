//! `components.mjs` — eager and lazy exports for every non-island component,
//! plus the `componentNames` manifest.

use indexmap::IndexSet;
use tracing::debug;
use weave_registry::{ComponentMode, ComponentsContext};

use crate::js::{
    async_component, client_only_import, define_async_import, export_from, import_binding,
    render_lines,
};
use crate::template::{Template, TemplateContext};

pub struct ComponentsTemplate;

impl Template for ComponentsTemplate {
    fn filename(&self) -> Option<&'static str> {
        Some("components.mjs")
    }

    fn contents(&self, ctx: &TemplateContext<'_>) -> String {
        generate_components(ctx)
    }
}

/// Names of all non-island components in the whole registry.
///
/// Independent of the build mode: callers ask whether a name exists, not
/// whether it is available in the current environment.
pub fn component_names(components: &ComponentsContext) -> Vec<&str> {
    components
        .get_components(Some(ComponentMode::All))
        .into_iter()
        .filter(|c| !c.island)
        .map(|c| c.pascal_name.as_str())
        .collect()
}

pub fn generate_components(ctx: &TemplateContext<'_>) -> String {
    let config = ctx.config;
    let mut imports = IndexSet::new();
    imports.insert(define_async_import(config));

    let mut definitions = Vec::new();
    // Alias suffix for client-only imports; only needs to be unique per file.
    let mut client_alias = 0usize;

    for c in ctx.components.mode_components() {
        if c.island {
            continue;
        }

        if c.is_client_only() {
            client_alias += 1;
            let alias = format!("__weave_component_{}", client_alias);
            imports.insert(client_only_import(config));
            imports.insert(import_binding(&c.file_path, c.export.name(), &alias));
            definitions.push(format!(
                "export const {} = /*#__PURE__*/ createClientOnly({})",
                c.pascal_name, alias
            ));
        } else {
            definitions.push(export_from(&c.file_path, c.export.name(), &c.pascal_name));
        }

        let lazy_name = c.lazy_name();
        if c.global {
            definitions.push(export_from(
                &config.global_components_module,
                &lazy_name,
                &lazy_name,
            ));
        } else {
            definitions.push(format!(
                "export const {} = {}",
                lazy_name,
                async_component(c, c.is_client_only())
            ));
        }
    }

    let names = serde_json::Value::from(component_names(ctx.components));
    definitions.push(format!("export const componentNames = {}", names));
    debug!(
        imports = imports.len(),
        definitions = definitions.len(),
        "components module"
    );

    render_lines(imports.into_iter().chain(definitions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CodegenConfig;
    use weave_registry::{Component, ComponentExport};

    fn render(components: Vec<Component>, mode: ComponentMode) -> String {
        let ctx = ComponentsContext::new(components, mode);
        let config = CodegenConfig::default();
        generate_components(&TemplateContext::new(&ctx, &config))
    }

    fn with_mode(name: &str, mode: ComponentMode) -> Component {
        Component {
            mode,
            ..Component::new(name, format!("./{}.vue", name))
        }
    }

    #[test]
    fn test_universal_component() {
        let out = render(
            vec![Component::new("Foo", "./Foo.vue")],
            ComponentMode::All,
        );
        assert_eq!(
            out,
            concat!(
                "import { defineAsyncComponent } from \"vue\"\n",
                "export { default as Foo } from \"./Foo.vue\"\n",
                "export const LazyFoo = defineAsyncComponent(import(/* webpackChunkName: \"components/foo\" */ \"./Foo.vue\").then(c => c.default || c))\n",
                "export const componentNames = [\"Foo\"]\n",
            )
        );
        assert!(!out.contains("createClientOnly"));
        assert!(!out.contains("#build/components.global.mjs"));
    }

    #[test]
    fn test_client_components_get_distinct_aliases() {
        let out = render(
            vec![
                with_mode("Chart", ComponentMode::Client),
                with_mode("Map", ComponentMode::Client),
            ],
            ComponentMode::Client,
        );
        assert!(out.contains("import { default as __weave_component_1 } from \"./Chart.vue\""));
        assert!(out.contains("import { default as __weave_component_2 } from \"./Map.vue\""));
        assert!(out.contains("export const Chart = /*#__PURE__*/ createClientOnly(__weave_component_1)"));
        assert!(out.contains("export const Map = /*#__PURE__*/ createClientOnly(__weave_component_2)"));
        assert_eq!(out.matches("import { createClientOnly }").count(), 1);
        assert!(out.contains(".then(c => createClientOnly(c.default || c)))"));
    }

    #[test]
    fn test_imports_precede_definitions() {
        let out = render(
            vec![
                Component::new("Foo", "./Foo.vue"),
                with_mode("Chart", ComponentMode::Client),
            ],
            ComponentMode::All,
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "import { defineAsyncComponent } from \"vue\"");
        assert_eq!(
            lines[1],
            "import { createClientOnly } from \"#app/components/client-only\""
        );
        assert_eq!(
            lines[2],
            "import { default as __weave_component_1 } from \"./Chart.vue\""
        );
        assert_eq!(lines[3], "export { default as Foo } from \"./Foo.vue\"");
        assert!(lines.last().unwrap().starts_with("export const componentNames"));
    }

    #[test]
    fn test_global_lazy_reexported() {
        let c = Component {
            global: true,
            ..Component::new("Foo", "./Foo.vue")
        };
        let out = render(vec![c], ComponentMode::All);
        assert!(out.contains("export { LazyFoo } from \"#build/components.global.mjs\""));
        assert!(!out.contains("export const LazyFoo"));
    }

    #[test]
    fn test_named_export() {
        let c = Component {
            export: ComponentExport::Named("Chart".to_string()),
            ..Component::new("BarChart", "./charts.ts")
        };
        let out = render(vec![c], ComponentMode::All);
        assert!(out.contains("export { Chart as BarChart } from \"./charts.ts\""));
        assert!(out.contains(".then(c => c['Chart']))"));
    }

    #[test]
    fn test_islands_excluded() {
        let island = Component {
            island: true,
            ..Component::new("Map", "./Map.vue")
        };
        let out = render(vec![island, Component::new("Foo", "./Foo.vue")], ComponentMode::All);
        assert!(!out.contains("Map"));
        assert!(out.contains("export const componentNames = [\"Foo\"]"));
    }

    #[test]
    fn test_names_independent_of_mode() {
        let registry = vec![
            Component::new("Foo", "./Foo.vue"),
            with_mode("Chart", ComponentMode::Client),
            with_mode("Report", ComponentMode::Server),
        ];
        let manifest = |mode| {
            render(registry.clone(), mode)
                .lines()
                .last()
                .unwrap()
                .to_string()
        };
        let client = manifest(ComponentMode::Client);
        let server = manifest(ComponentMode::Server);
        assert_eq!(client, server);
        assert_eq!(
            client,
            "export const componentNames = [\"Foo\",\"Chart\",\"Report\"]"
        );
    }

    #[test]
    fn test_mode_filters_definitions() {
        let out = render(
            vec![
                with_mode("Chart", ComponentMode::Client),
                with_mode("Report", ComponentMode::Server),
            ],
            ComponentMode::Server,
        );
        assert!(out.contains("export { default as Report } from \"./Report.vue\""));
        assert!(!out.contains("export const Chart"));
        assert!(!out.contains("createClientOnly"));
    }
}
