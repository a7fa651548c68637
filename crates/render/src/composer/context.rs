//! Composition context threaded through the recursive walk.

use pageflow_core::{RenderDiagnostics, RenderWarning};

use crate::registry::RendererRegistry;

/// Pass-local state for one composition walk.
///
/// Holds the read-only registry and accumulates degraded-rendering
/// warnings; everything else lives on the call stack, so concurrent passes
/// sharing a registry never share mutable state.
pub struct Context<'a> {
    registry: &'a RendererRegistry,
    diagnostics: RenderDiagnostics,
}

impl<'a> Context<'a> {
    /// Creates a context for one composition pass.
    pub fn new(registry: &'a RendererRegistry) -> Self {
        Self {
            registry,
            diagnostics: RenderDiagnostics::new(),
        }
    }

    /// The registry dispatch runs against.
    pub fn registry(&self) -> &'a RendererRegistry {
        self.registry
    }

    /// Records a degraded-rendering warning.
    pub fn warn(&mut self, warning: RenderWarning) {
        self.diagnostics.add_warning(warning);
    }

    /// Mutable diagnostics access for delegating renderers.
    pub fn diagnostics_mut(&mut self) -> &mut RenderDiagnostics {
        &mut self.diagnostics
    }

    /// Consumes the context, returning the accumulated diagnostics.
    pub fn finish(self) -> RenderDiagnostics {
        self.diagnostics
    }
}
