//! Recursive rendering of layout nodes.

use pageflow_core::{RenderWarning, resolve_directives};

use super::context::Context;
use super::fields::pretty_dump;
use super::types::RenderNode;
use crate::layout::{Column, Component, LayoutNode, Section};

/// Renders one layout node, recursing into its children.
pub fn render_node(node: &LayoutNode, ctx: &mut Context<'_>) -> RenderNode {
    match node {
        LayoutNode::Section(section) => render_section(section, ctx),
        LayoutNode::Column(column) => render_column(column, ctx),
    }
}

/// Renders a section wrapper: resolves its styling directives and recurses
/// into child sections or columns in authored order.
pub fn render_section(section: &Section, ctx: &mut Context<'_>) -> RenderNode {
    let directives = resolve_directives(section.class_name.as_deref(), &section.config);
    let children = section
        .sections
        .iter()
        .map(|child| render_node(child, ctx))
        .collect();

    RenderNode::Section {
        title: section.title.clone(),
        directives,
        children,
    }
}

/// Renders a column wrapper and its components in array order, each keyed
/// by its index for stable identity across re-renders.
pub fn render_column(column: &Column, ctx: &mut Context<'_>) -> RenderNode {
    let directives = resolve_directives(column.class_name.as_deref(), &column.config);
    let children = column
        .components
        .iter()
        .enumerate()
        .map(|(idx, component)| render_component(idx, component, ctx))
        .collect();

    RenderNode::Column {
        directives,
        children,
    }
}

/// Classifies a component by its `template` tag and dispatches it through
/// the registry.
///
/// A missing or unregistered template degrades to a visible diagnostic
/// node, mirroring the field fallback: the literal tag plus a
/// pretty-printed dump of the component object.
pub fn render_component(key: usize, component: &Component, ctx: &mut Context<'_>) -> RenderNode {
    let template = component.template.as_deref().unwrap_or("");
    if let Some(renderer) = ctx.registry().template(template) {
        return renderer.render(key, component, ctx.registry(), ctx.diagnostics_mut());
    }

    log::warn!("no renderer registered for component template: {}", template);
    ctx.warn(RenderWarning::UnknownTemplate {
        template: template.to_string(),
        position: key,
    });
    RenderNode::Unsupported {
        key,
        tag: template.to_string(),
        dump: pretty_dump(component),
    }
}
