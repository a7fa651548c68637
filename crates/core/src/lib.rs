#![deny(missing_docs)]
//! Pageflow core: field descriptor normalization, slugs, and presentation config.

/// Core error and diagnostic types.
pub mod error;
/// Field descriptor normalization.
pub mod field;
/// Presentation config resolution into styling directives.
pub mod presentation;
/// Slug generation utilities.
pub mod slug;

pub use error::{PageflowError, RenderDiagnostics, RenderWarning};
pub use field::{
    AttributeSchema, DEFAULT_FIELD_TYPE, DEFAULT_FIELD_WIDTH, FieldSpec, RawField, normalize_field,
    normalize_fields,
};
pub use presentation::{
    ColumnWidth, PresentationConfig, StyleDirective, TextAlign, resolve_directives,
};
pub use slug::parameterize;
