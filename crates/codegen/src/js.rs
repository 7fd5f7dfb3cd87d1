//! Small JavaScript source builders shared by the generators.

use weave_registry::Component;

use crate::config::CodegenConfig;
use crate::directives::component_directives;

/// A JavaScript string literal for `s`.
pub(crate) fn quote(s: &str) -> String {
    serde_json::Value::String(s.to_string()).to_string()
}

fn binding(name: &str, alias: &str) -> String {
    if name == alias {
        name.to_string()
    } else {
        format!("{} as {}", name, alias)
    }
}

/// `import { a, b } from "specifier"`
pub(crate) fn import_names(specifier: &str, names: &[String]) -> String {
    format!("import {{ {} }} from {}", names.join(", "), quote(specifier))
}

/// `import { name as alias } from "specifier"`
pub(crate) fn import_binding(specifier: &str, name: &str, alias: &str) -> String {
    format!(
        "import {{ {} }} from {}",
        binding(name, alias),
        quote(specifier)
    )
}

/// `export { name as alias } from "specifier"`
pub(crate) fn export_from(specifier: &str, name: &str, alias: &str) -> String {
    format!(
        "export {{ {} }} from {}",
        binding(name, alias),
        quote(specifier)
    )
}

pub(crate) fn define_async_import(config: &CodegenConfig) -> String {
    import_binding(
        &config.framework_module,
        "defineAsyncComponent",
        "defineAsyncComponent",
    )
}

pub(crate) fn client_only_import(config: &CodegenConfig) -> String {
    import_binding(
        &config.client_only_module,
        "createClientOnly",
        "createClientOnly",
    )
}

/// Async component factory loading `component` through a dynamic import.
///
/// With `client_only`, the extracted export is wrapped in `createClientOnly`.
pub(crate) fn async_component(component: &Component, client_only: bool) -> String {
    let accessor = component.export.accessor();
    let extract = if client_only {
        format!("createClientOnly({})", accessor)
    } else {
        accessor
    };
    format!(
        "defineAsyncComponent(import(/* {} */ {}).then(c => {}))",
        component_directives(component),
        quote(&component.file_path),
        extract
    )
}

/// Join generated lines into a file body with a trailing newline.
pub(crate) fn render_lines<I>(lines: I) -> String
where
    I: IntoIterator<Item = String>,
{
    let mut out = lines.into_iter().collect::<Vec<_>>().join("\n");
    out.push('\n');
    out
}
