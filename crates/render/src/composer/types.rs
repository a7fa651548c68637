//! Type definitions for the layout composer.

use std::collections::BTreeMap;

use pageflow_core::{FieldSpec, RenderDiagnostics, StyleDirective};
use serde::Serialize;
use serde_json::Value;

/// A render instruction handed to the painting backend.
///
/// One node per input node, in authored order. Wrapper variants carry the
/// resolved styling directives for their container; leaf variants carry a
/// tag for the backend to dispatch on. The tree is ephemeral: built per
/// render pass and discarded with it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum RenderNode {
    /// A section wrapper.
    Section {
        /// Authored section title.
        title: Option<String>,
        /// Resolved styling directives for the wrapper.
        directives: Vec<StyleDirective>,
        /// Child nodes in authored order.
        children: Vec<RenderNode>,
    },
    /// A column wrapper.
    Column {
        /// Resolved styling directives for the wrapper.
        directives: Vec<StyleDirective>,
        /// Child nodes in authored order.
        children: Vec<RenderNode>,
    },
    /// A group of dispatched form fields.
    FieldGroup {
        /// Position of the originating component within its column.
        key: usize,
        /// Optional heading displayed above the fields.
        heading: Option<String>,
        /// One node per descriptor, in authored order.
        children: Vec<RenderNode>,
    },
    /// A single form control for the backend to paint.
    Control {
        /// Position of the field within its group.
        key: usize,
        /// Widget tag the backend dispatches on.
        widget: String,
        /// The full canonical field spec.
        spec: FieldSpec,
    },
    /// A generic leaf element (button, content block, image, ...).
    Element {
        /// Position of the component within its column.
        key: usize,
        /// Element tag the backend dispatches on.
        tag: String,
        /// Template-specific properties.
        props: BTreeMap<String, Value>,
    },
    /// Visible diagnostic for an unrecognized type or template tag.
    ///
    /// Carries the literal unresolved tag and a pretty-printed dump of the
    /// offending descriptor, so misconfigured content is debuggable on
    /// screen instead of crashing or disappearing.
    Unsupported {
        /// Position within the parent group.
        key: usize,
        /// The unresolved tag, verbatim.
        tag: String,
        /// Pretty-printed JSON dump of the raw input.
        dump: String,
    },
}

/// Result of composing a page.
#[derive(Debug, Clone)]
pub struct ComposeResult {
    /// One render node per top-level layout node, in authored order.
    pub nodes: Vec<RenderNode>,
    /// Warnings from degraded rendering paths.
    pub diagnostics: RenderDiagnostics,
}
