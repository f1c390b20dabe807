//! Diagnostics sink backed by `tracing`.

use declq_core::{Diagnostic, DiagnosticSink, Severity};

/// Forwards diagnostics to the subscriber and remembers whether any error
/// was reported.
#[derive(Debug, Default)]
pub struct TracingSink {
    errors: usize,
}

impl TracingSink {
    #[must_use]
    pub const fn has_errors(&self) -> bool {
        self.errors > 0
    }
}

impl DiagnosticSink for TracingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            Severity::Warning => tracing::warn!("{}", diagnostic.message),
            Severity::Error => {
                self.errors += 1;
                tracing::error!("{}", diagnostic.message);
            }
        }
    }
}
