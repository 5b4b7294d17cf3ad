// checker/src/semantics/reporter.rs
use crate::semantics::errors::Diagnostic;

/// Ordered store of the diagnostics produced by one pass. Whether the pass
/// continues after an error is decided by the analyzer, not here.
#[derive(Debug, Clone, Default)]
pub struct ErrorReporter {
    diagnostics: Vec<Diagnostic>,
}

impl ErrorReporter {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    pub fn record(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.len()
    }

    /// Diagnostics in the order they were recorded.
    pub fn all(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn take(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
