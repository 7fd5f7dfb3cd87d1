//! The template contract: an optional output filename plus a pure
//! contents function over the shared context.

use weave_registry::ComponentsContext;

use crate::components::ComponentsTemplate;
use crate::config::CodegenConfig;
use crate::declarations::DeclarationsTemplate;
use crate::global::GlobalComponentsTemplate;
use crate::islands::IslandsTemplate;
use crate::metadata::MetadataTemplate;
use crate::plugin::PluginTemplate;

/// Everything a generator reads.
#[derive(Debug, Clone, Copy)]
pub struct TemplateContext<'a> {
    pub components: &'a ComponentsContext,
    pub config: &'a CodegenConfig,
}

impl<'a> TemplateContext<'a> {
    pub fn new(components: &'a ComponentsContext, config: &'a CodegenConfig) -> Self {
        TemplateContext { components, config }
    }
}

/// A generated artifact.
pub trait Template {
    /// File name in the build directory, if the artifact is written to disk.
    fn filename(&self) -> Option<&'static str>;

    fn contents(&self, ctx: &TemplateContext<'_>) -> String;
}

/// All built-in templates, in write order.
pub fn builtin_templates() -> Vec<Box<dyn Template>> {
    vec![
        Box::new(PluginTemplate),
        Box::new(GlobalComponentsTemplate),
        Box::new(ComponentsTemplate),
        Box::new(IslandsTemplate),
        Box::new(DeclarationsTemplate),
        Box::new(MetadataTemplate),
    ]
}
