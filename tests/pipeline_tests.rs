//! Integration tests for the full pipeline

use lispc::{CompileError, compile};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn log_steps(compilation: &lispc::Compilation) -> Vec<&str> {
    compilation.log.steps().iter().map(String::as_str).collect()
}

#[test]
fn test_compile_call() {
    let compilation = compile("(multiply 3 4)");
    let artifacts = compilation.artifacts.expect("compilation failed");

    assert_eq!(artifacts.tokens.len(), 5);
    assert_eq!(artifacts.ast.body.len(), 1);
    assert!(artifacts.c_code.contains("int result = (3 * 4);"));
}

#[test]
fn test_compile_empty_input() {
    let artifacts = compile("").artifacts.unwrap();

    assert!(artifacts.tokens.is_empty());
    assert!(artifacts.ast.body.is_empty());
    assert!(artifacts.c_code.contains("int result = 0;"));
}

#[test]
fn test_ir_matches_ast() {
    let artifacts = compile("(add 1 (subtract 4 2))").artifacts.unwrap();
    assert_eq!(artifacts.ast, artifacts.ir);
}

#[test]
fn test_unknown_function_compiles() {
    let artifacts = compile("(foo 1 2)").artifacts.unwrap();
    assert!(artifacts.c_code.contains("int result = foo(1, 2);"));
}

#[test]
fn test_two_statement_program() {
    // Multi-expression input produces valid C: one statement per
    // expression, the last initializing `result`.
    let artifacts = compile("1 2").artifacts.unwrap();

    assert_eq!(
        artifacts.c_code,
        "#include <stdio.h>\n\nint main() {\n    1;\n    int result = 2;\n    printf(\"Result: %d\\n\", result);\n    return 0;\n}\n"
    );
}

#[test]
fn test_log_order() {
    let compilation = compile("(add 1 2)");
    assert!(compilation.artifacts.is_ok());

    assert_eq!(
        log_steps(&compilation),
        vec![
            "Tokenized input: 5 tokens",
            "Begin CallExpression: add",
            "Parsed NumberLiteral: 1",
            "Parsed NumberLiteral: 2",
            "End CallExpression: add",
            "Parsed AST successfully.",
            "Transformed to IR.",
        ]
    );
}

#[test]
fn test_log_resets_between_calls() {
    compile("(add 1 2)");
    let second = compile("7");

    assert_eq!(
        log_steps(&second),
        vec![
            "Tokenized input: 1 tokens",
            "Parsed NumberLiteral: 7",
            "Parsed AST successfully.",
            "Transformed to IR.",
        ]
    );
}

#[test]
fn test_lex_error_short_circuits() {
    let compilation = compile("(add 1 2]");
    let err = compilation.artifacts.as_ref().unwrap_err();

    assert!(matches!(err, CompileError::UnexpectedChar { .. }));
    assert!(err.to_string().contains(']'));
    // The lexer failed before the token-count step was logged.
    assert_eq!(
        log_steps(&compilation),
        vec!["Error: Unexpected character: ]"]
    );
}

#[test]
fn test_parse_error_short_circuits() {
    let compilation = compile("(add 1 2");
    let err = compilation.artifacts.as_ref().unwrap_err();
    assert!(matches!(err, CompileError::UnclosedCall { .. }));

    let steps = log_steps(&compilation);
    assert_eq!(steps.first(), Some(&"Tokenized input: 4 tokens"));
    assert_eq!(steps.last(), Some(&"Error: Expected closing parenthesis"));
}

#[test]
fn test_arity_error_from_codegen() {
    let compilation = compile("(+ 1 2 3)");
    let err = compilation.artifacts.as_ref().unwrap_err();

    assert!(matches!(
        err,
        CompileError::WrongArity {
            expected: 2,
            found: 3,
            ..
        }
    ));
    // Parsing succeeded; only codegen failed.
    let steps = log_steps(&compilation);
    assert!(steps.contains(&"Transformed to IR."));
}

#[test]
fn test_deterministic_artifacts() {
    let first = compile("(add 1 (subtract 4 2))");
    let second = compile("(add 1 (subtract 4 2))");

    assert_eq!(first.artifacts.unwrap(), second.artifacts.unwrap());
    assert_eq!(first.log, second.log);
}

#[test]
fn test_tokens_serialize_to_json() {
    let artifacts = compile("(add 1 2)").artifacts.unwrap();
    let json = serde_json::to_string(&artifacts.tokens).unwrap();
    assert!(json.contains("\"Name\""));
    assert!(json.contains("\"add\""));
}

#[test]
fn test_ast_serializes_with_type_tags() {
    let artifacts = compile("(add 1 2)").artifacts.unwrap();
    let json = serde_json::to_string(&artifacts.ast).unwrap();
    assert!(json.contains("\"type\":\"CallExpression\""));
    assert!(json.contains("\"type\":\"NumberLiteral\""));
}

fn arb_program() -> impl Strategy<Value = String> {
    let leaf = (0u32..10_000).prop_map(|n| n.to_string());
    leaf.prop_recursive(4, 32, 2, |inner| {
        (
            proptest::sample::select(vec![
                "add", "subtract", "multiply", "divide", "+", "-", "*", "/",
            ]),
            inner.clone(),
            inner,
        )
            .prop_map(|(op, lhs, rhs)| format!("({op} {lhs} {rhs})"))
    })
}

proptest! {
    #[test]
    fn compile_is_deterministic(source in arb_program()) {
        let first = compile(&source);
        let second = compile(&source);
        prop_assert_eq!(first.artifacts.ok(), second.artifacts.ok());
        prop_assert_eq!(first.log, second.log);
    }

    #[test]
    fn well_formed_programs_compile(source in arb_program()) {
        let compilation = compile(&source);
        prop_assert!(compilation.artifacts.is_ok());
    }
}
