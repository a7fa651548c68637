//! Stock renderer registrations for the built-in content model.
//!
//! Mirrors the shipped content vocabulary: `text` and `select` field types,
//! plus the `button`, `content`, `image`, and `form` component templates.
//! Hosts with custom types build on [`RendererRegistry::with_defaults`] and
//! register their own capabilities alongside these.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use pageflow_core::{FieldSpec, RenderDiagnostics};
use serde_json::Value;

use super::types::{FieldRenderer, RendererRegistry, TemplateRenderer};
use crate::composer::fields::render_fields;
use crate::composer::types::RenderNode;
use crate::layout::Component;

/// Process-wide registry with the stock renderers, built once at startup
/// and read-only thereafter.
pub fn default_registry() -> &'static RendererRegistry {
    static REGISTRY: Lazy<RendererRegistry> = Lazy::new(RendererRegistry::with_defaults);
    &REGISTRY
}

impl RendererRegistry {
    /// Creates a registry preloaded with the stock renderers.
    pub fn with_defaults() -> Self {
        let mut registry = RendererRegistry::new();
        registry.register_field("text", Box::new(ControlRenderer { widget: "text" }));
        registry.register_field("select", Box::new(ControlRenderer { widget: "select" }));
        registry.register_template("button", Box::new(ButtonRenderer));
        registry.register_template("content", Box::new(ContentRenderer));
        registry.register_template("image", Box::new(ImageRenderer));
        registry.register_template("form", Box::new(FormRenderer));
        registry
    }
}

/// Thin adapter emitting a widget instruction for a dispatched field.
///
/// Painting the control is the backend's concern; the normalized spec rides
/// along unmodified.
struct ControlRenderer {
    widget: &'static str,
}

impl FieldRenderer for ControlRenderer {
    fn render(&self, key: usize, spec: &FieldSpec) -> RenderNode {
        RenderNode::Control {
            key,
            widget: self.widget.to_string(),
            spec: spec.clone(),
        }
    }
}

/// Renders `button` components as a leaf element instruction.
struct ButtonRenderer;

impl TemplateRenderer for ButtonRenderer {
    fn render(
        &self,
        key: usize,
        component: &Component,
        _registry: &RendererRegistry,
        _diagnostics: &mut RenderDiagnostics,
    ) -> RenderNode {
        let mut props = BTreeMap::new();
        if let Some(label) = &component.label {
            props.insert("label".to_string(), Value::String(label.clone()));
        }
        if let Some(url) = &component.url {
            props.insert("url".to_string(), Value::String(url.clone()));
        }
        RenderNode::Element {
            key,
            tag: "button".to_string(),
            props,
        }
    }
}

/// Renders `content` components as a leaf element instruction.
struct ContentRenderer;

impl TemplateRenderer for ContentRenderer {
    fn render(
        &self,
        key: usize,
        component: &Component,
        _registry: &RendererRegistry,
        _diagnostics: &mut RenderDiagnostics,
    ) -> RenderNode {
        let mut props = BTreeMap::new();
        if let Some(body) = &component.body {
            props.insert("body".to_string(), Value::String(body.clone()));
        }
        RenderNode::Element {
            key,
            tag: "content".to_string(),
            props,
        }
    }
}

/// Renders `image` components, passing the image reference through.
struct ImageRenderer;

impl TemplateRenderer for ImageRenderer {
    fn render(
        &self,
        key: usize,
        component: &Component,
        _registry: &RendererRegistry,
        _diagnostics: &mut RenderDiagnostics,
    ) -> RenderNode {
        let mut props = BTreeMap::new();
        if let Some(image) = &component.image {
            props.insert("src".to_string(), image.clone());
        }
        RenderNode::Element {
            key,
            tag: "image".to_string(),
            props,
        }
    }
}

/// Renders `form` components by delegating to the field dispatcher.
struct FormRenderer;

impl TemplateRenderer for FormRenderer {
    fn render(
        &self,
        key: usize,
        component: &Component,
        registry: &RendererRegistry,
        diagnostics: &mut RenderDiagnostics,
    ) -> RenderNode {
        render_fields(
            key,
            &component.form,
            component.heading.as_deref(),
            registry,
            diagnostics,
        )
    }
}
