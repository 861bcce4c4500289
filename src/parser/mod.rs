//! Parser for the s-expression language
//!
//! A recursive descent parser that produces an AST from a token stream.
//! LL(1): one token of lookahead, no backtracking. The first error aborts
//! the whole parse; no partial AST is ever returned.

use crate::ast::{Node, Program};
use crate::common::Span;
use crate::diagnostics::{self, CompileError, StepLog};
use crate::lexer::{Token, TokenKind};

/// Parse a token stream into a `Program`.
///
/// `source` is only used to label errors; it never influences parsing.
pub fn parse(tokens: &[Token], source: &str, log: &mut StepLog) -> Result<Program, CompileError> {
    let mut parser = Parser::new(tokens, source, log);
    parser.parse_program()
}

/// Parser state
struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    source: &'a str,
    log: &'a mut StepLog,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token], source: &'a str, log: &'a mut StepLog) -> Self {
        Self {
            tokens,
            pos: 0,
            source,
            log,
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.peek().is_some_and(|t| t.kind == kind)
    }

    fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    // ==================== PROGRAM ====================

    fn parse_program(&mut self) -> Result<Program, CompileError> {
        let mut body = Vec::new();

        while self.peek().is_some() {
            body.push(self.parse_expr()?);
        }

        Ok(Program { body })
    }

    // ==================== EXPRESSIONS ====================

    fn parse_expr(&mut self) -> Result<Node, CompileError> {
        let Some(token) = self.peek() else {
            // Callers only enter an expression with a token in hand; end of
            // input still maps to a typed error rather than a panic.
            return Err(CompileError::UnexpectedToken {
                found: "<end of input>".to_string(),
                span: Span::new(self.source.len(), self.source.len()).into(),
                src: diagnostics::named_source(self.source),
            });
        };

        match token.kind {
            TokenKind::Number => {
                let value = token.text.clone();
                self.advance();
                self.log.push(format!("Parsed NumberLiteral: {value}"));
                Ok(Node::NumberLiteral { value })
            }
            TokenKind::LParen => {
                let open_span = token.span;
                self.advance();
                self.parse_call(open_span)
            }
            _ => Err(CompileError::UnexpectedToken {
                found: token.kind.to_string(),
                span: token.span.into(),
                src: diagnostics::named_source(self.source),
            }),
        }
    }

    fn parse_call(&mut self, open_span: Span) -> Result<Node, CompileError> {
        // The token after `(` is consumed as the callee name whatever its
        // kind: `(1 2)` is a call named "1".
        let name = match self.advance() {
            Some(token) => token.text.clone(),
            None => return Err(self.unclosed_call(open_span)),
        };
        self.log.push(format!("Begin CallExpression: {name}"));

        let mut params = Vec::new();
        loop {
            if self.at(TokenKind::RParen) {
                self.advance();
                break;
            }
            if self.peek().is_none() {
                return Err(self.unclosed_call(open_span));
            }
            params.push(self.parse_expr()?);
        }

        self.log.push(format!("End CallExpression: {name}"));
        Ok(Node::CallExpression { name, params })
    }

    fn unclosed_call(&self, open_span: Span) -> CompileError {
        CompileError::UnclosedCall {
            span: open_span.into(),
            src: diagnostics::named_source(self.source),
        }
    }
}
