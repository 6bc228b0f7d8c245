//! Non-fatal diagnostics
//!
//! Conversions that leave their accurate domain still return a value. They
//! report the excursion to a caller-supplied [`DiagnosticSink`] instead of
//! failing, so a real-time pipeline always gets a result.

use std::fmt;
use std::sync::Mutex;

/// Severity of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Informational, the result is still usable
    Info,
}

/// A diagnostic event emitted by a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Diagnostic {
    /// A value fell outside the range where the approximation is accurate
    OutOfRange {
        /// Name of the emitting operation
        operation: &'static str,
        /// The offending value, in Kelvin
        value: i32,
        /// Lower bound of the accurate domain (inclusive)
        accurate_min: i32,
        /// Upper bound of the accurate domain (inclusive)
        accurate_max: i32,
    },
}

impl Diagnostic {
    /// Severity of this event
    pub fn severity(&self) -> Severity {
        match self {
            Self::OutOfRange { .. } => Severity::Info,
        }
    }

    /// Short category tag, e.g. `"out-of-range"`
    pub fn category(&self) -> &'static str {
        match self {
            Self::OutOfRange { .. } => "out-of-range",
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange {
                operation,
                value,
                accurate_min,
                accurate_max,
            } => write!(
                f,
                "{}: conversion only accurate within {}K to {}K, got {}K",
                operation, accurate_min, accurate_max, value
            ),
        }
    }
}

/// Receiver for non-fatal diagnostics
///
/// Emission must not influence the numeric result of the caller.
pub trait DiagnosticSink {
    /// Handle one diagnostic event
    fn emit(&self, diagnostic: &Diagnostic);
}

impl<F> DiagnosticSink for F
where
    F: Fn(&Diagnostic),
{
    fn emit(&self, diagnostic: &Diagnostic) {
        self(diagnostic)
    }
}

/// Forwards diagnostics to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, diagnostic: &Diagnostic) {
        match diagnostic.severity() {
            Severity::Info => tracing::info!(
                category = diagnostic.category(),
                "{}",
                diagnostic
            ),
        }
    }
}

/// Discards all diagnostics
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn emit(&self, _diagnostic: &Diagnostic) {}
}

/// Buffers diagnostics for later inspection
#[derive(Debug, Default)]
pub struct CollectingSink {
    events: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of events received so far
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// True if nothing has been emitted
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Take all buffered events, leaving the sink empty
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Diagnostic>> {
        // A panic while holding the lock cannot leave the Vec inconsistent.
        self.events.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl DiagnosticSink for CollectingSink {
    fn emit(&self, diagnostic: &Diagnostic) {
        self.lock().push(*diagnostic);
    }
}

/// Emit an out-of-range event if `value` is outside `[min, max]`
pub(crate) fn check_range(
    sink: &dyn DiagnosticSink,
    operation: &'static str,
    value: i32,
    min: i32,
    max: i32,
) {
    if value < min || value > max {
        sink.emit(&Diagnostic::OutOfRange {
            operation,
            value,
            accurate_min: min,
            accurate_max: max,
        });
    }
}
