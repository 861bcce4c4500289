//! A minimal Lisp-to-C compiler.
//!
//! Translates an s-expression arithmetic language (integer literals and a
//! fixed set of named/operator calls) into C source text, keeping every
//! intermediate artifact (tokens, AST, IR, step log) available for
//! inspection.
//!
//! # Architecture
//!
//! ```text
//! Source → Lexer → Parser → AST → Transform → IR → C Codegen
//! ```
//!
//! # Example
//!
//! ```
//! let compilation = lispc::compile("(add 1 2)");
//! let artifacts = compilation.artifacts.unwrap();
//! assert!(artifacts.c_code.contains("int result = (1 + 2);"));
//! ```

pub mod ast;
pub mod codegen;
pub mod common;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod transform;

// Re-exports for convenience
pub use ast::{Node, Program};
pub use diagnostics::{CompileError, StepLog};
pub use lexer::{Token, TokenKind};
pub use transform::Ir;

use serde::Serialize;

/// Compiler version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Everything a successful compile produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artifacts {
    pub tokens: Vec<Token>,
    pub ast: Program,
    pub ir: Ir,
    pub c_code: String,
}

/// Result of one compile call: the artifacts (or the first stage error)
/// plus the ordered step log. The log accompanies failures too.
#[derive(Debug)]
pub struct Compilation {
    pub artifacts: Result<Artifacts, CompileError>,
    pub log: StepLog,
}

impl Compilation {
    /// The generated C code, if compilation succeeded.
    pub fn c_code(&self) -> Option<&str> {
        self.artifacts.as_ref().ok().map(|a| a.c_code.as_str())
    }
}

/// Run the full pipeline over `source`.
///
/// Each stage is a pure function of its input and the first failure aborts
/// the remaining stages. Repeated calls with the same input produce
/// identical artifacts.
pub fn compile(source: &str) -> Compilation {
    let mut log = StepLog::new();
    let artifacts = run_pipeline(source, &mut log);
    if let Err(error) = &artifacts {
        log.push(format!("Error: {error}"));
    }
    Compilation { artifacts, log }
}

fn run_pipeline(source: &str, log: &mut StepLog) -> Result<Artifacts, CompileError> {
    let tokens = lexer::lex(source)?;
    log.push(format!("Tokenized input: {} tokens", tokens.len()));
    tracing::debug!("lexed {} tokens", tokens.len());

    let ast = parser::parse(&tokens, source, log)?;
    log.push("Parsed AST successfully.");
    tracing::debug!("parsed {} top-level expressions", ast.body.len());

    let ir = transform::transform(ast.clone());
    log.push("Transformed to IR.");

    let c_code = codegen::generate(&ir)?;
    tracing::debug!("generated {} bytes of C", c_code.len());

    Ok(Artifacts {
        tokens,
        ast,
        ir,
        c_code,
    })
}
