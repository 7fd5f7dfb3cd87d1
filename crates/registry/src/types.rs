//! Typed structs for component descriptors.
//!
//! Field names follow the camelCase wire format produced by component
//! discovery (`pascalName`, `filePath`, `chunkName`, ...). Everything except
//! `pascalName` and `filePath` is optional on the wire.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a component may execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentMode {
    Server,
    Client,
    #[default]
    All,
}

impl ComponentMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentMode::Server => "server",
            ComponentMode::Client => "client",
            ComponentMode::All => "all",
        }
    }
}

impl fmt::Display for ComponentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which export of the component module to bind.
///
/// Resolved once from the descriptor's `export` string: `"default"` becomes
/// [`ComponentExport::Default`], anything else a named export.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ComponentExport {
    #[default]
    Default,
    Named(String),
}

impl ComponentExport {
    /// The export name as written in an import/export clause.
    pub fn name(&self) -> &str {
        match self {
            ComponentExport::Default => "default",
            ComponentExport::Named(name) => name,
        }
    }

    /// Expression extracting this export from a loaded module bound to `c`.
    ///
    /// A default export that is falsy at evaluation time falls back to the
    /// whole module object.
    pub fn accessor(&self) -> String {
        match self {
            ComponentExport::Default => "c.default || c".to_string(),
            ComponentExport::Named(name) => format!("c['{}']", name),
        }
    }
}

impl TryFrom<String> for ComponentExport {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "" => Err("component export must not be empty".to_string()),
            "default" => Ok(ComponentExport::Default),
            _ => Ok(ComponentExport::Named(value)),
        }
    }
}

impl From<ComponentExport> for String {
    fn from(export: ComponentExport) -> Self {
        match export {
            ComponentExport::Default => "default".to_string(),
            ComponentExport::Named(name) => name,
        }
    }
}

/// A prefetch/preload bundler hint: a plain on/off flag or a numeric priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BundlerHint {
    Flag(bool),
    Priority(i64),
}

impl BundlerHint {
    /// `false` hints are omitted from directives; every priority is kept,
    /// including zero.
    pub fn is_enabled(&self) -> bool {
        !matches!(self, BundlerHint::Flag(false))
    }
}

impl Default for BundlerHint {
    fn default() -> Self {
        BundlerHint::Flag(false)
    }
}

impl fmt::Display for BundlerHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BundlerHint::Flag(flag) => write!(f, "{}", flag),
            BundlerHint::Priority(priority) => write!(f, "{}", priority),
        }
    }
}

/// A discovered UI component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    /// Identifier used for generated bindings (`X` and `LazyX`).
    pub pascal_name: String,
    /// Resolvable path or module specifier of the implementation.
    pub file_path: String,
    #[serde(default)]
    pub export: ComponentExport,
    #[serde(default)]
    pub mode: ComponentMode,
    /// Registered application-wide on startup.
    #[serde(default)]
    pub global: bool,
    /// Always rendered as an isolated, independently hydrated fragment.
    #[serde(default)]
    pub island: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunk_name: Option<String>,
    #[serde(default)]
    pub prefetch: BundlerHint,
    #[serde(default)]
    pub preload: BundlerHint,
}

impl Component {
    /// A universal, non-global, default-export component.
    pub fn new(pascal_name: impl Into<String>, file_path: impl Into<String>) -> Self {
        Component {
            pascal_name: pascal_name.into(),
            file_path: file_path.into(),
            export: ComponentExport::Default,
            mode: ComponentMode::All,
            global: false,
            island: false,
            chunk_name: None,
            prefetch: BundlerHint::default(),
            preload: BundlerHint::default(),
        }
    }

    /// Name of the lazily loaded binding (`Lazy<pascalName>`).
    pub fn lazy_name(&self) -> String {
        format!("Lazy{}", self.pascal_name)
    }

    /// Chunk label for the bundler, `components/<kebab-name>` when unset.
    pub fn chunk_name(&self) -> String {
        match &self.chunk_name {
            Some(name) => name.clone(),
            None => format!("components/{}", kebab_case(&self.pascal_name)),
        }
    }

    pub fn is_client_only(&self) -> bool {
        self.mode == ComponentMode::Client
    }
}

/// Convert a PascalCase identifier to kebab-case (`UIButtonGroup` -> `ui-button-group`).
pub fn kebab_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len() + 4);
    for (i, &ch) in chars.iter().enumerate() {
        if ch == '_' || ch == ' ' {
            if !out.is_empty() && !out.ends_with('-') {
                out.push('-');
            }
            continue;
        }
        if ch.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let boundary = prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_lower);
            if boundary && !out.ends_with('-') {
                out.push('-');
            }
        }
        out.extend(ch.to_lowercase());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kebab_case() {
        assert_eq!(kebab_case("FooBar"), "foo-bar");
        assert_eq!(kebab_case("UIButtonGroup"), "ui-button-group");
        assert_eq!(kebab_case("Icon2Large"), "icon2-large");
        assert_eq!(kebab_case("Foo"), "foo");
    }

    #[test]
    fn test_export_accessor() {
        assert_eq!(ComponentExport::Default.accessor(), "c.default || c");
        assert_eq!(
            ComponentExport::Named("Chart".to_string()).accessor(),
            "c['Chart']"
        );
    }

    #[test]
    fn test_chunk_name_fallback() {
        let mut c = Component::new("SiteHeader", "./SiteHeader.vue");
        assert_eq!(c.chunk_name(), "components/site-header");
        c.chunk_name = Some("layout".to_string());
        assert_eq!(c.chunk_name(), "layout");
    }

    #[test]
    fn test_hint_enabled() {
        assert!(!BundlerHint::Flag(false).is_enabled());
        assert!(BundlerHint::Flag(true).is_enabled());
        assert!(BundlerHint::Priority(0).is_enabled());
    }

    #[test]
    fn test_deserialize_descriptor() {
        let c: Component = serde_json::from_value(serde_json::json!({
            "pascalName": "Chart",
            "filePath": "/app/components/Chart.ts",
            "export": "Chart",
            "mode": "client",
            "global": true,
            "prefetch": true,
            "preload": 3
        }))
        .unwrap();
        assert_eq!(c.export, ComponentExport::Named("Chart".to_string()));
        assert_eq!(c.mode, ComponentMode::Client);
        assert!(c.global);
        assert!(!c.island);
        assert_eq!(c.prefetch, BundlerHint::Flag(true));
        assert_eq!(c.preload, BundlerHint::Priority(3));
        assert_eq!(c.chunk_name, None);
    }

    #[test]
    fn test_deserialize_defaults() {
        let c: Component = serde_json::from_value(serde_json::json!({
            "pascalName": "Foo",
            "filePath": "./Foo.vue"
        }))
        .unwrap();
        assert_eq!(c, Component::new("Foo", "./Foo.vue"));
    }

    #[test]
    fn test_empty_export_rejected() {
        let result: Result<Component, _> = serde_json::from_value(serde_json::json!({
            "pascalName": "Foo",
            "filePath": "./Foo.vue",
            "export": ""
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_camel_case() {
        let c = Component::new("Foo", "./Foo.vue");
        let v = serde_json::to_value(&c).unwrap();
        assert_eq!(v["pascalName"], "Foo");
        assert_eq!(v["export"], "default");
        assert_eq!(v["mode"], "all");
        assert_eq!(v["prefetch"], false);
        assert!(v.get("chunkName").is_none());
    }
}
