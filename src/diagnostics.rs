//! Typed compiler errors and the per-compilation step log.
//!
//! Errors carry source labels where a position exists and render through
//! miette.

use crate::common::Span;
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Convert our Span to miette's SourceSpan
impl From<Span> for SourceSpan {
    fn from(span: Span) -> Self {
        SourceSpan::new(span.start.into(), span.len())
    }
}

/// Attach the compiled source to an error for labeled reporting.
pub(crate) fn named_source(source: &str) -> NamedSource<String> {
    NamedSource::new("input", source.to_string())
}

/// Compiler diagnostic
#[derive(Error, Debug, Diagnostic, Clone)]
pub enum CompileError {
    // === Lex Errors ===
    #[error("Unexpected character: {ch}")]
    #[diagnostic(code(lex::unexpected_char))]
    UnexpectedChar {
        ch: char,
        #[label("this character matches no token class")]
        span: SourceSpan,
        #[source_code]
        src: NamedSource<String>,
    },

    // === Parse Errors ===
    #[error("Unexpected token type: {found}")]
    #[diagnostic(code(parse::unexpected_token))]
    UnexpectedToken {
        found: String,
        #[label("expected a number or `(` here")]
        span: SourceSpan,
        #[source_code]
        src: NamedSource<String>,
    },

    #[error("Expected closing parenthesis")]
    #[diagnostic(
        code(parse::unclosed_call),
        help("every `(` must have a matching `)`")
    )]
    UnclosedCall {
        #[label("call expression opened here")]
        span: SourceSpan,
        #[source_code]
        src: NamedSource<String>,
    },

    // === Codegen Errors ===
    #[error("Function \"{name}\" requires exactly {expected} arguments, but got {found}")]
    #[diagnostic(code(codegen::wrong_arity))]
    WrongArity {
        name: String,
        expected: usize,
        found: usize,
    },
}

/// Ordered log of step descriptions for one compile call.
///
/// Purely observational: nothing reads it back during compilation, and a
/// fresh log is created for every call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepLog {
    steps: Vec<String>,
}

impl StepLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, step: impl Into<String>) {
        self.steps.push(step.into());
    }

    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl std::fmt::Display for StepLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.steps.join("\n"))
    }
}
