//! Lexer for the s-expression source language.
//!
//! A single left-to-right scan over the input. Whitespace is skipped and
//! never tokenized; every other character must open a parenthesis, start a
//! digit run, or start a name run.

mod tokens;

pub use tokens::{Token, TokenKind};

use crate::common::Span;
use crate::diagnostics::{self, CompileError};
use logos::Logos;

/// Tokenize source text into an ordered token sequence.
///
/// Fails on the first character that matches no recognized class.
pub fn lex(source: &str) -> Result<Vec<Token>, CompileError> {
    let mut lexer = TokenKind::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let span = Span::from(lexer.span());
        match result {
            Ok(kind) => tokens.push(Token {
                kind,
                span,
                text: lexer.slice().to_string(),
            }),
            Err(()) => {
                return Err(CompileError::UnexpectedChar {
                    ch: lexer.slice().chars().next().unwrap_or('\0'),
                    span: span.into(),
                    src: diagnostics::named_source(source),
                });
            }
        }
    }

    Ok(tokens)
}
