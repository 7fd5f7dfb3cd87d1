//! The registry view handed to every generator.

use crate::types::{Component, ComponentMode};

/// Component registry plus the mode selector of the calling build step.
#[derive(Debug, Clone, Default)]
pub struct ComponentsContext {
    components: Vec<Component>,
    mode: ComponentMode,
}

impl ComponentsContext {
    pub fn new(components: Vec<Component>, mode: ComponentMode) -> Self {
        ComponentsContext { components, mode }
    }

    /// Mode of the build step this context was created for.
    pub fn mode(&self) -> ComponentMode {
        self.mode
    }

    /// Components visible under `mode`, in registry order.
    ///
    /// `None` and `Some(All)` return the whole registry. A concrete mode keeps
    /// components declared for that mode plus universal (`all`) ones.
    pub fn get_components(&self, mode: Option<ComponentMode>) -> Vec<&Component> {
        match mode {
            None | Some(ComponentMode::All) => self.components.iter().collect(),
            Some(mode) => self
                .components
                .iter()
                .filter(|c| c.mode == mode || c.mode == ComponentMode::All)
                .collect(),
        }
    }

    /// Components visible under this context's own mode.
    pub fn mode_components(&self) -> Vec<&Component> {
        self.get_components(Some(self.mode))
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }
}
