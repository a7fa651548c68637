//! Field descriptor normalization.
//!
//! CMS-authored form fields arrive as flat, loosely-typed descriptors whose
//! attributes are conditional on a `type` tag (`select_options`,
//! `text_placeholder`, ...). Normalization projects each descriptor into a
//! canonical [`FieldSpec`] with every default applied, ready for registry
//! dispatch.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::slug::parameterize;

/// Type tag assumed when a descriptor carries none.
pub const DEFAULT_FIELD_TYPE: &str = "Short Text";

/// Width applied when a descriptor has no usable width.
pub const DEFAULT_FIELD_WIDTH: &str = "full";

/// A raw CMS-authored field descriptor, before normalization.
///
/// Every attribute is optional; the engine tolerates whatever shape the
/// content API hands over. Type-prefixed attributes stay in [`RawField::extra`]
/// until normalization resolves which of them apply.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawField {
    /// The type tag controlling dispatch and attribute selection.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub field_type: Option<String>,
    /// Fallback for the label and the derived name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// name attribute submitted with the form data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Overrides the title as the visible label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Controls how wide the field renders on screen.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    /// Validates that the field is filled out before submitting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    /// If true, the field is placed on its own line regardless of width.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solo: Option<bool>,
    /// Type-prefixed attributes and anything else the CMS attached.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Lookup keys for the type-conditional attributes of one field type.
///
/// The content model stores these as `<type>_<attribute>` siblings of the
/// descriptor. Building the keys in one place keys every lookup off the
/// *resolved* type: a descriptor with no `type` consults `Short Text_*`
/// keys, and attributes prefixed for some other type are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeSchema {
    appearance: String,
    options: String,
    placeholder: String,
    validation: String,
}

impl AttributeSchema {
    /// Builds the attribute schema for a resolved type tag.
    pub fn for_type(field_type: &str) -> Self {
        Self {
            appearance: format!("{}_appearance", field_type),
            options: format!("{}_options", field_type),
            placeholder: format!("{}_placeholder", field_type),
            validation: format!("{}_validation", field_type),
        }
    }

    /// Key holding the appearance attribute.
    pub fn appearance(&self) -> &str {
        &self.appearance
    }

    /// Key holding the options list.
    pub fn options(&self) -> &str {
        &self.options
    }

    /// Key holding the placeholder text.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Key holding the validation rule.
    pub fn validation(&self) -> &str {
        &self.validation
    }
}

/// A fully-defaulted, type-resolved field ready for dispatch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSpec {
    /// Resolved type tag; the registry dispatch key.
    #[serde(rename = "type")]
    pub field_type: String,
    /// Submitted name, derived from the title when not explicit.
    pub name: String,
    /// Visible label placed above the field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Appearance attribute for the resolved type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appearance: Option<Value>,
    /// Options list for the resolved type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Value>,
    /// Placeholder text for the resolved type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<Value>,
    /// Validation rule for the resolved type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation: Option<Value>,
    /// Render width.
    pub width: String,
    /// Whether the field must be filled out before submitting.
    pub required: bool,
    /// Forces the field onto its own line regardless of width.
    pub solo: bool,
}

/// Normalizes one raw descriptor into its canonical spec.
///
/// Default resolution, in order:
/// - `type`: the raw tag, else [`DEFAULT_FIELD_TYPE`].
/// - `name`: the explicit name; else the parameterized title; else `""`.
/// - `label`: the explicit label, else the title.
/// - `width`: the explicit width when non-empty, else [`DEFAULT_FIELD_WIDTH`].
/// - `appearance` / `options` / `placeholder` / `validation`: read through
///   the [`AttributeSchema`] of the resolved type. Resolving `type` first
///   means defaulting changes which prefixed attributes are consulted.
pub fn normalize_field(raw: &RawField) -> FieldSpec {
    let field_type = raw
        .field_type
        .clone()
        .unwrap_or_else(|| DEFAULT_FIELD_TYPE.to_string());
    let schema = AttributeSchema::for_type(&field_type);

    let name = match &raw.name {
        Some(name) => name.clone(),
        None => parameterize(raw.title.as_deref().unwrap_or(""), '_'),
    };

    let width = match raw.width.as_deref() {
        Some(width) if !width.is_empty() => width.to_string(),
        _ => DEFAULT_FIELD_WIDTH.to_string(),
    };

    FieldSpec {
        name,
        label: raw.label.clone().or_else(|| raw.title.clone()),
        appearance: attribute(raw, schema.appearance()),
        options: attribute(raw, schema.options()),
        placeholder: attribute(raw, schema.placeholder()),
        validation: attribute(raw, schema.validation()),
        width,
        required: raw.required.unwrap_or(false),
        solo: raw.solo.unwrap_or(false),
        field_type,
    }
}

// Content APIs hand back explicit nulls for unset attributes; treat them
// the same as absent keys.
fn attribute(raw: &RawField, key: &str) -> Option<Value> {
    raw.extra.get(key).filter(|value| !value.is_null()).cloned()
}

/// Normalizes an ordered sequence of descriptors, one spec per input.
pub fn normalize_fields(fields: &[RawField]) -> Vec<FieldSpec> {
    fields.iter().map(normalize_field).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> RawField {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn missing_type_defaults_to_short_text() {
        let spec = normalize_field(&raw(json!({ "title": "Message" })));
        assert_eq!(spec.field_type, "Short Text");
    }

    #[test]
    fn name_derived_from_title() {
        let spec = normalize_field(&raw(json!({ "title": "Email Address" })));
        assert_eq!(spec.name, "email_address");
        assert_eq!(spec.label.as_deref(), Some("Email Address"));
    }

    #[test]
    fn explicit_name_wins_over_title() {
        let spec = normalize_field(&raw(json!({ "title": "Email Address", "name": "email" })));
        assert_eq!(spec.name, "email");
    }

    #[test]
    fn no_name_and_no_title_gives_empty_name() {
        let spec = normalize_field(&raw(json!({})));
        assert_eq!(spec.name, "");
        assert_eq!(spec.label, None);
        assert_eq!(spec.width, "full");
    }

    #[test]
    fn explicit_label_wins_over_title() {
        let spec = normalize_field(&raw(json!({ "title": "Email", "label": "Your email" })));
        assert_eq!(spec.label.as_deref(), Some("Your email"));
    }

    #[test]
    fn width_defaults_to_full() {
        let spec = normalize_field(&raw(json!({ "title": "Message" })));
        assert_eq!(spec.width, "full");

        let spec = normalize_field(&raw(json!({ "title": "Message", "width": "1/2" })));
        assert_eq!(spec.width, "1/2");

        // Empty string behaves as absent, matching the source fallback chain.
        let spec = normalize_field(&raw(json!({ "title": "Message", "width": "" })));
        assert_eq!(spec.width, "full");
    }

    #[test]
    fn prefixed_attributes_follow_the_resolved_type() {
        let spec = normalize_field(&raw(json!({
            "type": "select",
            "title": "Favorite Color",
            "select_options": ["Red", "Blue"],
            "select_appearance": "dropdown",
            "text_placeholder": "ignored"
        })));
        assert_eq!(spec.options, Some(json!(["Red", "Blue"])));
        assert_eq!(spec.appearance, Some(json!("dropdown")));
        // text_* attributes do not leak into a select field.
        assert_eq!(spec.placeholder, None);
    }

    #[test]
    fn mismatched_prefix_is_dropped() {
        // The type-mismatch trap: select_* attributes without type "select"
        // are silently lost, because lookups key off the resolved type.
        let spec = normalize_field(&raw(json!({
            "title": "Favorite Color",
            "select_options": ["Red", "Blue"]
        })));
        assert_eq!(spec.field_type, "Short Text");
        assert_eq!(spec.options, None);
    }

    #[test]
    fn defaulted_type_consults_short_text_keys() {
        let spec = normalize_field(&raw(json!({
            "title": "Message",
            "Short Text_placeholder": "Say hello"
        })));
        assert_eq!(spec.placeholder, Some(json!("Say hello")));
    }

    #[test]
    fn required_and_solo_default_to_false() {
        let spec = normalize_field(&raw(json!({ "title": "Message" })));
        assert!(!spec.required);
        assert!(!spec.solo);

        let spec = normalize_field(&raw(json!({ "title": "Message", "required": true, "solo": true })));
        assert!(spec.required);
        assert!(spec.solo);
    }

    #[test]
    fn one_spec_per_input_in_order() {
        let fields = vec![
            raw(json!({ "title": "First" })),
            raw(json!({ "title": "Second" })),
            raw(json!({ "title": "Third" })),
        ];
        let specs = normalize_fields(&fields);
        let names: Vec<&str> = specs.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["first", "second", "third"]);
    }

    #[test]
    fn normalization_is_pure() {
        let fields = vec![
            raw(json!({ "title": "Email Address" })),
            raw(json!({ "type": "select", "select_options": ["A"] })),
        ];
        assert_eq!(normalize_fields(&fields), normalize_fields(&fields));
    }

    #[test]
    fn null_prefixed_attribute_is_absent() {
        let spec = normalize_field(&raw(json!({
            "type": "text",
            "title": "Message",
            "text_placeholder": null
        })));
        assert_eq!(spec.placeholder, None);
    }

    #[test]
    fn tolerates_null_attributes() {
        let spec = normalize_field(&raw(json!({
            "type": null,
            "title": "Message",
            "name": null,
            "width": null
        })));
        assert_eq!(spec.field_type, "Short Text");
        assert_eq!(spec.name, "message");
        assert_eq!(spec.width, "full");
    }
}
