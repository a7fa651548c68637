//! Field group rendering: normalize descriptors, dispatch via the registry.

use pageflow_core::{RawField, RenderDiagnostics, RenderWarning, normalize_fields};
use serde::Serialize;

use super::types::RenderNode;
use crate::registry::RendererRegistry;

/// Renders an ordered group of raw field descriptors.
///
/// Each descriptor is normalized and dispatched through the registry by its
/// resolved type (case-sensitive). A type with no registered renderer
/// degrades to a visible [`RenderNode::Unsupported`] carrying the literal
/// tag and the pretty-printed descriptor; the group is never truncated and
/// the pass never fails.
///
/// `key` is the group's own position within its parent (0 for a standalone
/// group); each child is keyed by its index within the group.
pub fn render_fields(
    key: usize,
    fields: &[RawField],
    heading: Option<&str>,
    registry: &RendererRegistry,
    diagnostics: &mut RenderDiagnostics,
) -> RenderNode {
    let specs = normalize_fields(fields);
    let mut children = Vec::with_capacity(specs.len());

    for (idx, (raw, spec)) in fields.iter().zip(&specs).enumerate() {
        match registry.field(&spec.field_type) {
            Some(renderer) => children.push(renderer.render(idx, spec)),
            None => {
                log::warn!("no renderer registered for field type: {}", spec.field_type);
                diagnostics.add_warning(RenderWarning::UnknownFieldType {
                    field_type: spec.field_type.clone(),
                    position: idx,
                });
                children.push(RenderNode::Unsupported {
                    key: idx,
                    tag: spec.field_type.clone(),
                    dump: pretty_dump(raw),
                });
            }
        }
    }

    RenderNode::FieldGroup {
        key,
        heading: heading.map(str::to_string),
        children,
    }
}

/// Pretty-prints a value for the unsupported-content fallback block.
pub(crate) fn pretty_dump<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "<unserializable>".to_string())
}
