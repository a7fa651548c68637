//! Renderer registry: tag-keyed field and template capabilities.
//!
//! Dispatch is case-sensitive exact match on the tag string. The set is
//! open: hosts register additional renderers at startup, and a lookup miss
//! is a designed fallback outcome rather than an error.

/// Stock renderer registrations for the built-in content model.
pub mod defaults;
/// Registry and capability trait definitions.
pub mod types;

pub use defaults::default_registry;
pub use types::{FieldRenderer, RendererRegistry, TemplateRenderer};
