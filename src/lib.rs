//! Core library for the Loxide toolchain. Scans Lox source text into an
//! ordered token sequence and carries the expression-tree scaffolding and
//! printing utilities consumed by later pipeline stages.

pub mod ast;
pub mod diagnostics;
pub mod printer;
pub mod repl;
pub mod scanner;
pub mod token;

pub use diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink, LoxError};
pub use repl::Repl;
pub use scanner::{Scanner, tokenize};
pub use token::{Keyword, Literal, Token, TokenKind};
