//! Presentation configuration and styling directive resolution.
//!
//! Sections and columns carry an optional, self-contained config block
//! (nothing is inherited between nodes). Resolution maps the authored
//! values onto a closed set of [`StyleDirective`]s; unrecognized or empty
//! values contribute no directive rather than failing.

use serde::{Deserialize, Serialize};

/// Horizontal text alignment an author can pick per container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    /// Left-aligned text.
    Left,
    /// Centered text.
    Center,
    /// Right-aligned text.
    Right,
}

impl TextAlign {
    /// Parses an authored value. Unknown or empty values resolve to `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "left" => Some(TextAlign::Left),
            "center" => Some(TextAlign::Center),
            "right" => Some(TextAlign::Right),
            _ => None,
        }
    }
}

/// Fractional container widths supported by the column grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnWidth {
    /// The full row.
    Full,
    /// One quarter of the row.
    Quarter,
    /// One third of the row.
    Third,
    /// Half the row.
    Half,
    /// Two thirds of the row.
    TwoThirds,
    /// Three quarters of the row.
    ThreeQuarters,
}

impl ColumnWidth {
    /// Parses an authored fractional width. Unknown values resolve to `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "full" => Some(ColumnWidth::Full),
            "1/4" => Some(ColumnWidth::Quarter),
            "1/3" => Some(ColumnWidth::Third),
            "1/2" => Some(ColumnWidth::Half),
            "2/3" => Some(ColumnWidth::TwoThirds),
            "3/4" => Some(ColumnWidth::ThreeQuarters),
            _ => None,
        }
    }
}

/// Per-node presentational attributes as authored in the CMS.
///
/// All attributes are optional loose strings; validation happens at
/// resolution time, not decode time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresentationConfig {
    /// Requested text alignment (`left`, `center`, `right`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<String>,
    /// Requested fractional width (`full`, `1/4`, ..., `3/4`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    /// Requested bottom margin step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_bottom: Option<String>,
}

/// A resolved styling instruction attached to a render node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "directive", rename_all = "snake_case")]
pub enum StyleDirective {
    /// Extra CSS hook passed through from the authored node.
    Class {
        /// The class name.
        name: String,
    },
    /// Bottom margin step; the vocabulary is owned by the style system.
    MarginBottom {
        /// The authored margin step, verbatim.
        value: String,
    },
    /// Horizontal text alignment.
    TextAlign {
        /// The resolved alignment.
        align: TextAlign,
    },
    /// Fractional container width.
    Width {
        /// The resolved width.
        width: ColumnWidth,
    },
}

/// Resolves a node's class hook and config into styling directives.
///
/// Directive order matches the wrapper-class order of the original style
/// bindings: class, margin, text alignment, width. Absent, empty, and
/// unrecognized values contribute nothing.
pub fn resolve_directives(
    class_name: Option<&str>,
    config: &PresentationConfig,
) -> Vec<StyleDirective> {
    let mut directives = Vec::new();

    if let Some(name) = class_name.filter(|name| !name.is_empty()) {
        directives.push(StyleDirective::Class {
            name: name.to_string(),
        });
    }
    if let Some(value) = config.margin_bottom.as_deref().filter(|v| !v.is_empty()) {
        directives.push(StyleDirective::MarginBottom {
            value: value.to_string(),
        });
    }
    if let Some(align) = config.text_align.as_deref().and_then(TextAlign::parse) {
        directives.push(StyleDirective::TextAlign { align });
    }
    if let Some(width) = config.width.as_deref().and_then(ColumnWidth::parse) {
        directives.push(StyleDirective::Width { width });
    }

    directives
}
