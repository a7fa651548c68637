//! Layout composition engine.
//!
//! Walks a CMS page tree (sections → columns → components), resolves each
//! node's presentation config into styling directives, and dispatches leaf
//! components through the renderer registry; `form` components route their
//! descriptors through the field dispatcher. One pass is synchronous,
//! allocation-only, and total: unknown tags degrade to visible
//! [`RenderNode::Unsupported`] diagnostics instead of failing the render.
//!
//! # Module Structure
//!
//! - `types` - Render instruction tree and compose result
//! - `context` - Pass-local state (registry handle, diagnostics)
//! - `render` - Recursive node rendering functions
//! - `fields` - Field group normalization and dispatch

pub mod context;
pub mod fields;
pub mod render;
pub mod types;

pub use context::Context;
pub use fields::render_fields;
pub use types::{ComposeResult, RenderNode};

use pageflow_core::PageflowError;
use serde::Deserialize as _;

use crate::layout::Page;
use crate::registry::RendererRegistry;
use render::render_node;

/// Composes a typed page tree into render instructions.
///
/// Produces one render node per top-level layout node, in authored order,
/// plus the warnings accumulated along the way. Never fails.
pub fn compose_page(page: &Page, registry: &RendererRegistry) -> ComposeResult {
    let mut ctx = Context::new(registry);
    let nodes = page
        .sections
        .iter()
        .map(|node| render_node(node, &mut ctx))
        .collect();

    ComposeResult {
        nodes,
        diagnostics: ctx.finish(),
    }
}

/// Decodes a page-shaped JSON value and composes it.
///
/// Decoding is the only fallible step; composition itself always succeeds.
///
/// # Examples
///
/// ```
/// use pageflow_render::composer::compose;
/// use pageflow_render::registry::default_registry;
///
/// let page = serde_json::json!({
///     "title": "Contact",
///     "sections": [{
///         "sections": [{
///             "components": [{ "template": "content", "body": "Hello" }]
///         }]
///     }]
/// });
/// let result = compose(&page, default_registry()).unwrap();
/// assert_eq!(result.nodes.len(), 1);
/// ```
pub fn compose(
    value: &serde_json::Value,
    registry: &RendererRegistry,
) -> Result<ComposeResult, PageflowError> {
    let page = Page::deserialize(value)?;
    Ok(compose_page(&page, registry))
}
