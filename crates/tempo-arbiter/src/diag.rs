//! Diagnostics sinks for arbitration reporting
//!
//! Reporting is optional and must never fail or block an arbitration
//! operation: sink methods return nothing and implementations are
//! infallible by contract.

use std::cell::RefCell;
use std::rc::Rc;

/// Structured diagnostics with three severities and a category/message pair
pub trait DiagnosticsSink {
    fn info(&self, category: &str, message: &str);
    fn warning(&self, category: &str, message: &str);
    fn error(&self, category: &str, message: &str);
}

/// Discards everything
///
/// For builds where detailed arbitration tracing is undesired.
#[derive(Clone, Copy, Default)]
pub struct NoopDiagnostics;

impl DiagnosticsSink for NoopDiagnostics {
    fn info(&self, _category: &str, _message: &str) {}
    fn warning(&self, _category: &str, _message: &str) {}
    fn error(&self, _category: &str, _message: &str) {}
}

/// Emits through `tracing`, gated per severity
///
/// Per-severity toggles let a host keep warnings while silencing routine
/// transition logs.
#[derive(Clone, Copy)]
pub struct TracingDiagnostics {
    pub log_info: bool,
    pub log_warning: bool,
    pub log_error: bool,
}

impl TracingDiagnostics {
    /// All severities enabled
    pub fn all() -> Self {
        TracingDiagnostics {
            log_info: true,
            log_warning: true,
            log_error: true,
        }
    }

    /// Only warnings and errors
    pub fn warnings_only() -> Self {
        TracingDiagnostics {
            log_info: false,
            log_warning: true,
            log_error: true,
        }
    }
}

impl Default for TracingDiagnostics {
    fn default() -> Self {
        Self::all()
    }
}

impl DiagnosticsSink for TracingDiagnostics {
    fn info(&self, category: &str, message: &str) {
        if self.log_info {
            tracing::info!(category, "{}", message);
        }
    }

    fn warning(&self, category: &str, message: &str) {
        if self.log_warning {
            tracing::warn!(category, "{}", message);
        }
    }

    fn error(&self, category: &str, message: &str) {
        if self.log_error {
            tracing::error!(category, "{}", message);
        }
    }
}

/// Severity of a captured diagnostic event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// Cloneable in-memory sink that records events for inspection in tests
#[derive(Clone, Default)]
pub struct MemoryDiagnostics {
    events: Rc<RefCell<Vec<(Severity, String, String)>>>,
}

impl MemoryDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all captured (severity, category, message) events
    pub fn events(&self) -> Vec<(Severity, String, String)> {
        self.events.borrow().clone()
    }

    /// Number of captured events with the given severity
    pub fn count(&self, severity: Severity) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|(s, _, _)| *s == severity)
            .count()
    }

    fn record(&self, severity: Severity, category: &str, message: &str) {
        self.events
            .borrow_mut()
            .push((severity, category.to_owned(), message.to_owned()));
    }
}

impl DiagnosticsSink for MemoryDiagnostics {
    fn info(&self, category: &str, message: &str) {
        self.record(Severity::Info, category, message);
    }

    fn warning(&self, category: &str, message: &str) {
        self.record(Severity::Warning, category, message);
    }

    fn error(&self, category: &str, message: &str) {
        self.record(Severity::Error, category, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_records_in_order() {
        let diag = MemoryDiagnostics::new();

        diag.info("arbiter", "first");
        diag.warning("arbiter", "second");

        let events = diag.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], (Severity::Info, "arbiter".into(), "first".into()));
        assert_eq!(diag.count(Severity::Warning), 1);
    }

    #[test]
    fn test_severity_gating() {
        let diag = TracingDiagnostics::warnings_only();
        assert!(!diag.log_info);
        assert!(diag.log_warning);
    }
}
