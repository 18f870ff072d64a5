use std::fmt;

use thiserror::Error;

/// Classification of a diagnostic event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    UndefinedFunction,
    MissingActions,
    MalformedAction,
    ModuleNotFound,
    ModuleParseError,
    ModuleFunctionNotFound,
    CallDepthExceeded,
    InvalidArgument,
    Arithmetic,
    IndexOutOfRange,
    Io,
    Structure,
}

/// Rich diagnostic information surfaced to end users.
///
/// The same type travels two ways: wrapped in [`JsonLangError`] for
/// load-time failures, and inside [`crate::value::ValueKind::Error`] for
/// failures that happen while a program runs.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
    pub notes: Vec<String>,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            notes: Vec::new(),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)?;
        for note in &self.notes {
            write!(f, "\n  note: {note}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Diagnostic {}

/// Unified error type for loading and running jsonlang programs.
#[derive(Debug, Error)]
pub enum JsonLangError {
    #[error("{0}")]
    Diagnostic(#[from] Diagnostic),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, JsonLangError>;
