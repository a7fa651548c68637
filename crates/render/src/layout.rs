//! The CMS-authored layout tree consumed by the composer.
//!
//! The content API distinguishes columns from sections only by which child
//! list a node carries. That classification happens once, here, during
//! deserialization; the composer works on explicit [`LayoutNode`] variants
//! and never inspects shapes at render time.

use pageflow_core::{PresentationConfig, RawField};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A CMS page, the root of a layout tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Page {
    /// Stable content identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Page title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Top-level layout nodes in authored order.
    #[serde(deserialize_with = "null_as_empty")]
    pub sections: Vec<LayoutNode>,
}

// The content API emits every selected key, so absent lists arrive as
// explicit nulls rather than missing fields.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// One node of the layout tree.
///
/// Depth and branching are CMS-authored and unbounded; the engine recurses
/// without fixed depth assumptions.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LayoutNode {
    /// A titled container nesting further sections or columns.
    Section(Section),
    /// A terminal container holding renderable components.
    Column(Column),
}

/// A titled container nesting further layout nodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Section {
    /// Authored section title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Extra CSS hook added to the wrapping element.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    /// Presentational configuration for this node only.
    pub config: PresentationConfig,
    /// Child sections or columns in authored order.
    #[serde(deserialize_with = "null_as_empty")]
    pub sections: Vec<LayoutNode>,
}

/// A terminal container holding components.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Column {
    /// Extra CSS hook added to the wrapping element.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    /// Presentational configuration for this node only.
    pub config: PresentationConfig,
    /// Components in authored order.
    pub components: Vec<Component>,
}

/// A single renderable component, classified by its `template` tag.
///
/// Only the fields matching the active template are meaningful; the rest
/// arrive as nulls from the content API and are ignored by the renderers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Component {
    /// Template tag routed through the renderer registry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    /// Button label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Button link target.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Content block body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Heading shown above an embedded form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    /// Embedded form field descriptors.
    #[serde(deserialize_with = "null_as_empty")]
    pub form: Vec<RawField>,
    /// Image reference, passed through to the backend untouched.
    #[serde(rename = "src", skip_serializing_if = "Option::is_none")]
    pub image: Option<Value>,
    /// Anything else the CMS attached; kept so diagnostics can dump it.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// Columns are the nodes that carry a `components` list; everything else is
// a section. Deciding this once here lets the composer match exhaustively
// on the enum instead of sniffing key shapes mid-walk.
impl<'de> Deserialize<'de> for LayoutNode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize, Default)]
        #[serde(default)]
        struct AnyNode {
            title: Option<String>,
            class_name: Option<String>,
            config: PresentationConfig,
            #[serde(deserialize_with = "null_as_empty")]
            sections: Vec<LayoutNode>,
            components: Option<Vec<Component>>,
        }

        let node = AnyNode::deserialize(deserializer)?;
        match node.components {
            Some(components) => Ok(LayoutNode::Column(Column {
                class_name: node.class_name,
                config: node.config,
                components,
            })),
            None => Ok(LayoutNode::Section(Section {
                title: node.title,
                class_name: node.class_name,
                config: node.config,
                sections: node.sections,
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn components_key_classifies_as_column() {
        let node: LayoutNode = serde_json::from_value(json!({
            "config": { "width": "1/2" },
            "components": [{ "template": "content", "body": "Hello" }]
        }))
        .unwrap();

        match node {
            LayoutNode::Column(column) => {
                assert_eq!(column.components.len(), 1);
                assert_eq!(column.components[0].template.as_deref(), Some("content"));
            }
            LayoutNode::Section(_) => panic!("expected a column"),
        }
    }

    #[test]
    fn sections_key_classifies_as_section() {
        let node: LayoutNode = serde_json::from_value(json!({
            "title": "About",
            "sections": [
                { "components": [] }
            ]
        }))
        .unwrap();

        match node {
            LayoutNode::Section(section) => {
                assert_eq!(section.title.as_deref(), Some("About"));
                assert_eq!(section.sections.len(), 1);
                assert!(matches!(section.sections[0], LayoutNode::Column(_)));
            }
            LayoutNode::Column(_) => panic!("expected a section"),
        }
    }

    #[test]
    fn bare_object_is_an_empty_section() {
        let node: LayoutNode = serde_json::from_value(json!({})).unwrap();
        match node {
            LayoutNode::Section(section) => {
                assert_eq!(section.title, None);
                assert!(section.sections.is_empty());
            }
            LayoutNode::Column(_) => panic!("expected a section"),
        }
    }

    #[test]
    fn null_components_falls_back_to_section() {
        // The content API emits every key; a null list is the same as none.
        let node: LayoutNode = serde_json::from_value(json!({
            "title": "About",
            "components": null
        }))
        .unwrap();
        assert!(matches!(node, LayoutNode::Section(_)));
    }

    #[test]
    fn page_tolerates_absent_fields_at_every_level() {
        let page: Page = serde_json::from_value(json!({
            "sections": [
                {
                    "sections": [
                        {
                            "components": [
                                { "template": "form", "form": [{ "title": "Email" }] },
                                {}
                            ]
                        }
                    ]
                }
            ]
        }))
        .unwrap();

        assert_eq!(page.id, None);
        assert_eq!(page.sections.len(), 1);
    }

    #[test]
    fn null_lists_are_empty() {
        let component: Component = serde_json::from_value(json!({
            "template": "button",
            "label": "Go",
            "form": null
        }))
        .unwrap();
        assert!(component.form.is_empty());

        let node: LayoutNode = serde_json::from_value(json!({
            "title": "About",
            "sections": null
        }))
        .unwrap();
        match node {
            LayoutNode::Section(section) => assert!(section.sections.is_empty()),
            LayoutNode::Column(_) => panic!("expected a section"),
        }
    }

    #[test]
    fn unknown_component_keys_survive_for_diagnostics() {
        let component: Component = serde_json::from_value(json!({
            "template": "carousel",
            "slides": [1, 2, 3]
        }))
        .unwrap();
        assert_eq!(component.extra.get("slides"), Some(&json!([1, 2, 3])));
    }
}
