//! Bundler directive comments for dynamic imports.

use weave_registry::{BundlerHint, Component};

/// Comma-joined directive list to embed in `import(/* ... */ path)`.
///
/// Disabled hints are omitted; `true` renders as a bare flag and numeric
/// priorities render verbatim.
pub fn bundler_directives(chunk_name: &str, prefetch: BundlerHint, preload: BundlerHint) -> String {
    let mut parts = vec![format!("webpackChunkName: \"{}\"", chunk_name)];
    if prefetch.is_enabled() {
        parts.push(format!("webpackPrefetch: {}", prefetch));
    }
    if preload.is_enabled() {
        parts.push(format!("webpackPreload: {}", preload));
    }
    parts.join(", ")
}

pub fn component_directives(component: &Component) -> String {
    bundler_directives(
        &component.chunk_name(),
        component.prefetch,
        component.preload,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_hints() {
        assert_eq!(
            bundler_directives("x", BundlerHint::Flag(true), BundlerHint::Priority(2)),
            "webpackChunkName: \"x\", webpackPrefetch: true, webpackPreload: 2"
        );
    }

    #[test]
    fn test_chunk_name_only() {
        assert_eq!(
            bundler_directives("x", BundlerHint::default(), BundlerHint::default()),
            "webpackChunkName: \"x\""
        );
    }

    #[test]
    fn test_zero_priority_kept() {
        assert_eq!(
            bundler_directives("x", BundlerHint::Priority(0), BundlerHint::Flag(false)),
            "webpackChunkName: \"x\", webpackPrefetch: 0"
        );
    }

    #[test]
    fn test_component_directives_use_chunk_fallback() {
        let c = Component {
            preload: BundlerHint::Flag(true),
            ..Component::new("NavBar", "./NavBar.vue")
        };
        assert_eq!(
            component_directives(&c),
            "webpackChunkName: \"components/nav-bar\", webpackPreload: true"
        );
    }
}
