//! Diagnostic lines emitted for each constraint check, and the sinks that
//! receive them.

use serde::{Deserialize, Serialize};
use std::io::Write;
use std::sync::{Mutex, PoisonError};

/// Result of a single constraint check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckOutcome {
    /// The value satisfied the constraint.
    Success,
    /// The value violated the constraint.
    Failed,
}

impl CheckOutcome {
    /// Map a boolean check result to an outcome.
    pub const fn from_passed(passed: bool) -> Self {
        if passed { Self::Success } else { Self::Failed }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failed => "failed",
        }
    }
}

/// Rendering format for diagnostic lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticFormat {
    /// Human-readable sentence per check.
    #[default]
    Text,
    /// One JSON object per check.
    Json,
}

/// One evaluated constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckDiagnostic<'a> {
    /// Pass/fail outcome.
    pub outcome: CheckOutcome,
    /// Constraint kind label.
    pub constraint: &'a str,
    /// Field the constraint is attached to.
    pub field: &'a str,
    /// Value given.
    pub value: i64,
    /// Parameters the value was checked against.
    pub parameters: &'a str,
}

impl CheckDiagnostic<'_> {
    /// Render the diagnostic as a single line (no trailing newline).
    #[must_use]
    ///
    /// A JSON line that cannot be serialized falls back to the text line.
    pub fn render(&self, format: DiagnosticFormat) -> String {
        match format {
            DiagnosticFormat::Text => self.render_text(),
            DiagnosticFormat::Json => {
                serde_json::to_string(self).unwrap_or_else(|_| self.render_text())
            },
        }
    }

    fn render_text(&self) -> String {
        format!(
            "Check {} on {} ({}), value given: {} checked against: {}",
            self.outcome.label(),
            self.constraint,
            self.field,
            self.value,
            self.parameters
        )
    }
}

/// A sink that receives rendered diagnostic lines.
pub trait DiagnosticSink: Send + Sync {
    /// Write one line to the sink. `line` has no trailing newline.
    fn write_line(&self, line: &str);
}

/// Sink that writes to stdout.
#[derive(Debug, Default)]
pub struct StdoutDiagnosticSink;

impl DiagnosticSink for StdoutDiagnosticSink {
    fn write_line(&self, line: &str) {
        let mut stdout = std::io::stdout().lock();
        if let Err(error) = writeln!(stdout, "{line}") {
            eprintln!("diagnostic sink write failed: {error}");
        }
    }
}

/// Sink that writes to stderr.
#[derive(Debug, Default)]
pub struct StderrDiagnosticSink;

impl DiagnosticSink for StderrDiagnosticSink {
    fn write_line(&self, line: &str) {
        let mut stderr = std::io::stderr().lock();
        // Nowhere left to report a failed stderr write.
        let _ = writeln!(stderr, "{line}");
    }
}

/// Sink that discards every line.
#[derive(Debug, Default)]
pub struct SilentDiagnosticSink;

impl DiagnosticSink for SilentDiagnosticSink {
    fn write_line(&self, _line: &str) {}
}

/// Sink that keeps lines in memory.
#[derive(Debug, Default)]
pub struct MemoryDiagnosticSink {
    lines: Mutex<Vec<String>>,
}

impl MemoryDiagnosticSink {
    /// Snapshot of the captured lines.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Drain the captured lines.
    pub fn take(&self) -> Vec<String> {
        let mut guard = self.lines.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::take(&mut *guard)
    }
}

impl DiagnosticSink for MemoryDiagnosticSink {
    fn write_line(&self, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.to_string());
    }
}
