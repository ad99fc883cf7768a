use std::fmt;

use thiserror::Error;

/// Classification of a lexical error. The set is closed: the scanner's
/// grammar cannot produce any other malformed lexeme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    UnexpectedCharacter,
    UnterminatedString,
}

/// A recoverable lexical error tied to a 1-based source line.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub line: usize,
    pub message: String,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, line: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            line,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}] error: {}", self.line, self.message)
    }
}

impl std::error::Error for Diagnostic {}

/// Receiver for lexical errors. The scanner reports each malformed lexeme
/// exactly once and never decides what the caller does with them.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Unified error type for the Loxide toolchain.
#[derive(Debug, Error)]
pub enum LoxError {
    #[error("{0}")]
    Diagnostic(#[from] Diagnostic),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LoxError>;
