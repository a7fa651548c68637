use thiserror::Error;

/// Errors surfaced at the engine boundary.
///
/// Composition itself never fails: unknown tags degrade to visible
/// diagnostic nodes, and malformed attributes are absorbed by defaulting.
/// Decoding a content tree that is not page-shaped is the one fallible step.
#[derive(Debug, Error)]
pub enum PageflowError {
    /// The supplied content tree could not be decoded into the page model.
    #[error("invalid content tree: {0}")]
    InvalidTree(#[from] serde_json::Error),
}

/// Non-fatal warnings produced while composing a page.
///
/// Each warning has a visible counterpart in the output tree (an
/// `Unsupported` node); the collection exists so operators can audit a
/// render pass without walking the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderWarning {
    /// A field descriptor's resolved type had no registered renderer.
    UnknownFieldType {
        /// The unresolved type tag.
        field_type: String,
        /// Position of the field within its group.
        position: usize,
    },
    /// A component's template tag had no registered renderer.
    UnknownTemplate {
        /// The unresolved template tag; empty when the component had none.
        template: String,
        /// Position of the component within its column.
        position: usize,
    },
}

impl RenderWarning {
    /// The unresolved tag this warning is about.
    pub fn tag(&self) -> &str {
        match self {
            RenderWarning::UnknownFieldType { field_type, .. } => field_type,
            RenderWarning::UnknownTemplate { template, .. } => template,
        }
    }
}

impl std::fmt::Display for RenderWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderWarning::UnknownFieldType {
                field_type,
                position,
            } => {
                write!(f, "field not supported: {} (field {})", field_type, position)
            }
            RenderWarning::UnknownTemplate { template, position } => {
                write!(
                    f,
                    "template not supported: {} (component {})",
                    template, position
                )
            }
        }
    }
}

/// Collection of warnings accumulated during one composition pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderDiagnostics {
    /// Warnings in the order they were encountered.
    pub warnings: Vec<RenderWarning>,
}

impl RenderDiagnostics {
    /// Creates an empty diagnostics collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a warning.
    pub fn add_warning(&mut self, warning: RenderWarning) {
        self.warnings.push(warning);
    }

    /// Whether any warning was recorded.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Number of recorded warnings.
    pub fn count(&self) -> usize {
        self.warnings.len()
    }
}
