//! weave-registry: component descriptors and the registry view shared by
//! every generator.
//!
//! Descriptors are produced by an external discovery step and handed over
//! as JSON. This crate deserializes them into [`Component`] values and
//! exposes the mode-filtered view ([`ComponentsContext::get_components`])
//! that the code generators consume.

pub mod context;
pub mod load;
pub mod types;

pub use context::ComponentsContext;
pub use load::{load_registry, parse_registry, RegistryError};
pub use types::*;
