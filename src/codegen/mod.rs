//! C code generator
//!
//! Renders IR into C expression text and wraps it into a minimal runnable
//! program. Rendering is bottom-up: parameters first, then the enclosing
//! call.

use std::fmt::Write;

use crate::ast::Node;
use crate::diagnostics::CompileError;
use crate::transform::Ir;

/// Known binary operators take exactly this many arguments.
const BINARY_ARITY: usize = 2;

/// Map a callee name to its C infix operator, if it has one.
///
/// Names outside this table render as ordinary function calls and carry no
/// arity constraint.
fn binary_operator(name: &str) -> Option<&'static str> {
    match name {
        "add" | "+" => Some("+"),
        "subtract" | "-" => Some("-"),
        "multiply" | "*" => Some("*"),
        "divide" | "/" => Some("/"),
        _ => None,
    }
}

/// C code generator
#[derive(Default)]
pub struct CodeGenerator {
    /// Output buffer for whole-program rendering
    output: String,
}

impl CodeGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render one expression node as C expression text.
    pub fn expression(&self, node: &Node) -> Result<String, CompileError> {
        match node {
            Node::NumberLiteral { value } => Ok(value.clone()),
            Node::CallExpression { name, params } => {
                let args = params
                    .iter()
                    .map(|param| self.expression(param))
                    .collect::<Result<Vec<_>, _>>()?;

                match binary_operator(name) {
                    Some(op) => {
                        if args.len() != BINARY_ARITY {
                            return Err(CompileError::WrongArity {
                                name: name.clone(),
                                expected: BINARY_ARITY,
                                found: args.len(),
                            });
                        }
                        Ok(format!("({} {} {})", args[0], op, args[1]))
                    }
                    None => Ok(format!("{}({})", name, args.join(", "))),
                }
            }
        }
    }

    /// Render a whole program as a `;`-joined expression fragment.
    ///
    /// This is the raw inspection artifact; it is not necessarily a
    /// compilable C unit on its own.
    pub fn program(&self, ir: &Ir) -> Result<String, CompileError> {
        let exprs = ir
            .body
            .iter()
            .map(|node| self.expression(node))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(format!("{};", exprs.join(";\n")))
    }

    /// Render a complete C program.
    ///
    /// Each top-level expression becomes its own statement and the last one
    /// initializes `result`, so multi-expression input still produces valid
    /// C. An empty program initializes `result` to 0.
    pub fn main_program(&mut self, ir: &Ir) -> Result<String, CompileError> {
        self.output.clear();

        writeln!(self.output, "#include <stdio.h>").unwrap();
        writeln!(self.output).unwrap();
        writeln!(self.output, "int main() {{").unwrap();

        match ir.body.split_last() {
            Some((last, rest)) => {
                for node in rest {
                    let expr = self.expression(node)?;
                    writeln!(self.output, "    {expr};").unwrap();
                }
                let expr = self.expression(last)?;
                writeln!(self.output, "    int result = {expr};").unwrap();
            }
            None => {
                writeln!(self.output, "    int result = 0;").unwrap();
            }
        }

        writeln!(self.output, "    printf(\"Result: %d\\n\", result);").unwrap();
        writeln!(self.output, "    return 0;").unwrap();
        writeln!(self.output, "}}").unwrap();

        Ok(self.output.clone())
    }
}

/// Render `ir` as a complete C program.
pub fn generate(ir: &Ir) -> Result<String, CompileError> {
    let mut codegen = CodeGenerator::new();
    codegen.main_program(ir)
}
