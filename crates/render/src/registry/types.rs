//! Registry type definitions for field and template renderer capabilities.

use std::collections::HashMap;

use pageflow_core::{FieldSpec, RenderDiagnostics};

use crate::composer::types::RenderNode;
use crate::layout::Component;

/// A renderer capability for one field type tag.
///
/// Implementations receive the fully normalized spec plus the field's
/// position within its group, which gives the instruction a stable identity
/// across re-renders.
pub trait FieldRenderer: Send + Sync {
    /// Produces the render instruction for a dispatched field.
    fn render(&self, key: usize, spec: &FieldSpec) -> RenderNode;
}

/// A renderer capability for one component template tag.
pub trait TemplateRenderer: Send + Sync {
    /// Produces the render instruction for a classified component.
    ///
    /// The registry is passed back in so composite templates (forms) can
    /// dispatch their children; degraded-rendering warnings go into
    /// `diagnostics`.
    fn render(
        &self,
        key: usize,
        component: &Component,
        registry: &RendererRegistry,
        diagnostics: &mut RenderDiagnostics,
    ) -> RenderNode;
}

/// Tag-keyed lookup of renderer capabilities.
///
/// Registration happens once at startup (append-only); during a render
/// pass the registry is read-only shared state, so one instance may serve
/// concurrent renders across threads.
#[derive(Default)]
pub struct RendererRegistry {
    fields: HashMap<String, Box<dyn FieldRenderer>>,
    templates: HashMap<String, Box<dyn TemplateRenderer>>,
}

impl RendererRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a field renderer under a type tag, replacing any previous
    /// entry for that tag.
    pub fn register_field(&mut self, tag: impl Into<String>, renderer: Box<dyn FieldRenderer>) {
        self.fields.insert(tag.into(), renderer);
    }

    /// Registers a template renderer under a template tag, replacing any
    /// previous entry for that tag.
    pub fn register_template(
        &mut self,
        tag: impl Into<String>,
        renderer: Box<dyn TemplateRenderer>,
    ) {
        self.templates.insert(tag.into(), renderer);
    }

    /// Looks up the field renderer for a resolved type tag.
    pub fn field(&self, tag: &str) -> Option<&dyn FieldRenderer> {
        self.fields.get(tag).map(|renderer| renderer.as_ref())
    }

    /// Looks up the template renderer for a template tag.
    pub fn template(&self, tag: &str) -> Option<&dyn TemplateRenderer> {
        self.templates.get(tag).map(|renderer| renderer.as_ref())
    }

    /// Whether a field type tag is registered.
    pub fn supports_field(&self, tag: &str) -> bool {
        self.fields.contains_key(tag)
    }

    /// Whether a template tag is registered.
    pub fn supports_template(&self, tag: &str) -> bool {
        self.templates.contains_key(tag)
    }
}
