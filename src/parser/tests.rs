//! Unit tests for the parser module.
//!
//! This module contains tests for parsing the language constructs:
//! - Program delimiters and the empty program
//! - Variable declarations, WAZZUP blocks, print, input, assignment
//! - Boolean, comparison, arithmetic and concatenation expressions
//! - Comment attachment metadata
//! - Fail-fast syntax errors

use crate::{lexer::lexer::tokenize, lexer::tokens::TokenKind, tree::tree::ParseTree};

use super::parser::parse;

fn parse_source(source: &str) -> ParseTree {
    parse(tokenize(source)).unwrap()
}

/// Unwraps Program -> StatementList and returns the statements.
fn statements_of(tree: &ParseTree) -> &[ParseTree] {
    let ParseTree::Program { body, .. } = tree else {
        panic!("root is not a Program: {}", tree.kind_name());
    };
    let ParseTree::StatementList { statements } = body.as_ref() else {
        panic!("Program body is not a StatementList");
    };
    statements
}

/// Unwraps the Statement wrapper around a parsed statement body.
fn body_of(statement: &ParseTree) -> &ParseTree {
    let ParseTree::Statement { body, .. } = statement else {
        panic!("not a Statement wrapper: {}", statement.kind_name());
    };
    body.as_ref()
}

#[test]
fn test_empty_program() {
    let tree = parse_source("HAI\nKTHXBYE");

    let ParseTree::Program { start, body, end } = &tree else {
        panic!("root is not a Program");
    };
    assert!(start.is_some());
    assert!(end.is_some());

    let ParseTree::StatementList { statements } = body.as_ref() else {
        panic!("Program body is not a StatementList");
    };
    assert!(statements.is_empty());
}

#[test]
fn test_program_without_delimiters() {
    let tree = parse_source("VISIBLE 1");

    let ParseTree::Program { start, end, .. } = &tree else {
        panic!("root is not a Program");
    };
    assert!(start.is_none());
    assert!(end.is_none());
    assert_eq!(statements_of(&tree).len(), 1);
}

#[test]
fn test_variable_declaration_with_init() {
    let tree = parse_source("HAI\nI HAS A x ITZ 42\nKTHXBYE");
    let statements = statements_of(&tree);
    assert_eq!(statements.len(), 1);

    let ParseTree::VariableDeclaration { name, init, .. } = body_of(&statements[0]) else {
        panic!("expected VariableDeclaration");
    };
    assert_eq!(name.value, "x");

    let ParseTree::Literal { token } = init.as_deref().unwrap() else {
        panic!("initializer is not a Literal");
    };
    assert_eq!(token.kind, TokenKind::NumbrLiteral);
    assert_eq!(token.value, "42");
}

#[test]
fn test_variable_declaration_without_init() {
    let tree = parse_source("I HAS A thing");
    let statements = statements_of(&tree);

    let ParseTree::VariableDeclaration { name, init, .. } = body_of(&statements[0]) else {
        panic!("expected VariableDeclaration");
    };
    assert_eq!(name.value, "thing");
    assert!(init.is_none());
}

#[test]
fn test_var_block() {
    let tree = parse_source("HAI\nWAZZUP\nI HAS A x\nI HAS A y ITZ WIN\nBUHBYE\nKTHXBYE");
    let statements = statements_of(&tree);
    assert_eq!(statements.len(), 1);

    let ParseTree::VarBlock { statements: inner, .. } = body_of(&statements[0]) else {
        panic!("expected VarBlock");
    };
    assert_eq!(inner.len(), 2);
    assert!(matches!(
        body_of(&inner[0]),
        ParseTree::VariableDeclaration { .. }
    ));
}

#[test]
fn test_var_block_missing_end_fails() {
    let result = parse(tokenize("HAI\nWAZZUP\nI HAS A x\nKTHXBYE"));
    assert!(result.is_err());
}

#[test]
fn test_print_statement() {
    let tree = parse_source("VISIBLE \"hello\"");
    let statements = statements_of(&tree);

    let ParseTree::PrintStatement { value, .. } = body_of(&statements[0]) else {
        panic!("expected PrintStatement");
    };
    let ParseTree::Literal { token } = value.as_ref() else {
        panic!("printed value is not a Literal");
    };
    assert_eq!(token.kind, TokenKind::YarnLiteral);
}

#[test]
fn test_input_single_target() {
    let tree = parse_source("GIMMEH name");
    let statements = statements_of(&tree);

    let ParseTree::InputStatement { targets, .. } = body_of(&statements[0]) else {
        panic!("expected InputStatement");
    };
    assert_eq!(targets.len(), 1);
    assert_eq!(targets[0].value, "name");
}

#[test]
fn test_input_multiple_targets_in_order() {
    let tree = parse_source("GIMMEH a AN b AN c");
    let statements = statements_of(&tree);

    let ParseTree::InputStatement { targets, .. } = body_of(&statements[0]) else {
        panic!("expected InputStatement");
    };
    assert_eq!(targets.len(), 3);
    assert_eq!(targets[0].value, "a");
    assert_eq!(targets[1].value, "b");
    assert_eq!(targets[2].value, "c");
}

#[test]
fn test_assignment() {
    let tree = parse_source("x R SUM OF 1 AN 2");
    let statements = statements_of(&tree);

    let ParseTree::Assignment { name, value } = body_of(&statements[0]) else {
        panic!("expected Assignment");
    };
    assert_eq!(name.value, "x");
    assert!(matches!(value.as_ref(), ParseTree::BinaryExpression { .. }));
}

#[test]
fn test_arithmetic_is_binary_and_right_associative() {
    let tree = parse_source("VISIBLE SUM OF 1 AN DIFF OF 2 AN 3");
    let statements = statements_of(&tree);

    let ParseTree::PrintStatement { value, .. } = body_of(&statements[0]) else {
        panic!("expected PrintStatement");
    };
    let ParseTree::BinaryExpression {
        operator,
        separator,
        left,
        right,
    } = value.as_ref()
    else {
        panic!("expected BinaryExpression");
    };
    assert_eq!(operator.value, "SUM OF");
    assert!(separator.is_some());
    assert!(matches!(left.as_ref(), ParseTree::Literal { .. }));

    // the chained operator nests on the right
    let ParseTree::BinaryExpression { operator: inner, .. } = right.as_ref() else {
        panic!("right operand is not the nested operator");
    };
    assert_eq!(inner.value, "DIFF OF");
}

#[test]
fn test_nested_comparison_shape() {
    let tree = parse_source("VISIBLE BOTH SAEM BOTH SAEM 1 AN 1 AN 0");
    let statements = statements_of(&tree);

    let ParseTree::PrintStatement { value, .. } = body_of(&statements[0]) else {
        panic!("expected PrintStatement");
    };
    let ParseTree::BinaryExpression { operator, left, right, .. } = value.as_ref() else {
        panic!("expected BinaryExpression");
    };
    assert_eq!(operator.value, "BOTH SAEM");

    let ParseTree::BinaryExpression { left: inner_left, right: inner_right, .. } = left.as_ref()
    else {
        panic!("left child is not a nested comparison");
    };
    let ParseTree::Literal { token } = inner_left.as_ref() else {
        panic!("inner left is not a literal");
    };
    assert_eq!(token.value, "1");
    let ParseTree::Literal { token } = inner_right.as_ref() else {
        panic!("inner right is not a literal");
    };
    assert_eq!(token.value, "1");

    let ParseTree::Literal { token } = right.as_ref() else {
        panic!("outer right is not a literal");
    };
    assert_eq!(token.value, "0");
}

#[test]
fn test_diffrint_with_arithmetic_operands() {
    let tree = parse_source("VISIBLE DIFFRINT SUM OF 1 AN 2 AN DIFFRINT 3 AN 4");
    let statements = statements_of(&tree);

    let ParseTree::PrintStatement { value, .. } = body_of(&statements[0]) else {
        panic!("expected PrintStatement");
    };
    let ParseTree::BinaryExpression { operator, left, right, .. } = value.as_ref() else {
        panic!("expected BinaryExpression");
    };
    assert_eq!(operator.value, "DIFFRINT");
    assert!(matches!(left.as_ref(), ParseTree::BinaryExpression { .. }));
    assert!(matches!(right.as_ref(), ParseTree::BinaryExpression { .. }));
}

#[test]
fn test_smoosh_nary() {
    let tree = parse_source("VISIBLE SMOOSH \"x\" AN y AN 42");
    let statements = statements_of(&tree);

    let ParseTree::PrintStatement { value, .. } = body_of(&statements[0]) else {
        panic!("expected PrintStatement");
    };
    let ParseTree::Smoosh { operands, .. } = value.as_ref() else {
        panic!("expected Smoosh");
    };
    assert_eq!(operands.len(), 3);
    assert!(matches!(&operands[0], ParseTree::Literal { token } if token.kind == TokenKind::YarnLiteral));
    assert!(matches!(&operands[1], ParseTree::Variable { token } if token.value == "y"));
    assert!(matches!(&operands[2], ParseTree::Literal { token } if token.kind == TokenKind::NumbrLiteral));
}

#[test]
fn test_smoosh_with_mkay() {
    let tree = parse_source("VISIBLE SMOOSH \"a\" AN \"b\" MKAY");
    let statements = statements_of(&tree);

    let ParseTree::PrintStatement { value, .. } = body_of(&statements[0]) else {
        panic!("expected PrintStatement");
    };
    let ParseTree::Smoosh { operands, .. } = value.as_ref() else {
        panic!("expected Smoosh");
    };
    assert_eq!(operands.len(), 2);
}

#[test]
fn test_plus_concatenation_sugar() {
    let tree = parse_source("VISIBLE \"a\" + \"b\" + c");
    let statements = statements_of(&tree);

    let ParseTree::PrintStatement { value, .. } = body_of(&statements[0]) else {
        panic!("expected PrintStatement");
    };
    let ParseTree::Smoosh { operands, .. } = value.as_ref() else {
        panic!("expected Smoosh from `+` sugar");
    };
    assert_eq!(operands.len(), 3);
}

#[test]
fn test_binary_boolean_has_two_operands() {
    let tree = parse_source("VISIBLE BOTH OF WIN AN FAIL");
    let statements = statements_of(&tree);

    let ParseTree::PrintStatement { value, .. } = body_of(&statements[0]) else {
        panic!("expected PrintStatement");
    };
    let ParseTree::BooleanExpression { operator, operands } = value.as_ref() else {
        panic!("expected BooleanExpression");
    };
    assert_eq!(operator.value, "BOTH OF");
    assert_eq!(operands.len(), 2);
}

#[test]
fn test_nary_boolean_flat_list() {
    let tree = parse_source("VISIBLE ALL OF WIN AN FAIL AN WIN MKAY");
    let statements = statements_of(&tree);

    let ParseTree::PrintStatement { value, .. } = body_of(&statements[0]) else {
        panic!("expected PrintStatement");
    };
    let ParseTree::BooleanExpression { operator, operands } = value.as_ref() else {
        panic!("expected BooleanExpression");
    };
    assert_eq!(operator.value, "ALL OF");
    assert_eq!(operands.len(), 3);
    for operand in operands {
        assert!(operand.is_leaf());
    }
}

#[test]
fn test_not_expression() {
    let tree = parse_source("VISIBLE NOT BOTH SAEM x AN 1");
    let statements = statements_of(&tree);

    let ParseTree::PrintStatement { value, .. } = body_of(&statements[0]) else {
        panic!("expected PrintStatement");
    };
    let ParseTree::Not { operand, .. } = value.as_ref() else {
        panic!("expected Not");
    };
    assert!(matches!(operand.as_ref(), ParseTree::BinaryExpression { .. }));
}

#[test]
fn test_pending_comment_attaches_to_next_statement() {
    let tree = parse_source("HAI\nBTW the note\nVISIBLE 1\nKTHXBYE");
    let statements = statements_of(&tree);

    let ParseTree::Statement { comment, inline_comment, .. } = &statements[0] else {
        panic!("expected Statement wrapper");
    };
    assert_eq!(comment.as_deref(), Some("the note"));
    assert!(inline_comment.is_none());
}

#[test]
fn test_inline_comment_attaches_to_same_statement() {
    let tree = parse_source("HAI\nVISIBLE 1 BTW say one\nVISIBLE 2\nKTHXBYE");
    let statements = statements_of(&tree);
    assert_eq!(statements.len(), 2);

    let ParseTree::Statement { comment, inline_comment, .. } = &statements[0] else {
        panic!("expected Statement wrapper");
    };
    assert!(comment.is_none());
    assert_eq!(inline_comment.as_deref(), Some("say one"));

    let ParseTree::Statement { comment, inline_comment, .. } = &statements[1] else {
        panic!("expected Statement wrapper");
    };
    assert!(comment.is_none());
    assert!(inline_comment.is_none());
}

#[test]
fn test_comment_consumed_by_one_statement_only() {
    let tree = parse_source("BTW once\nVISIBLE 1\nVISIBLE 2");
    let statements = statements_of(&tree);

    let ParseTree::Statement { comment, .. } = &statements[0] else {
        panic!("expected Statement wrapper");
    };
    assert_eq!(comment.as_deref(), Some("once"));

    let ParseTree::Statement { comment, .. } = &statements[1] else {
        panic!("expected Statement wrapper");
    };
    assert!(comment.is_none());
}

#[test]
fn test_declaration_missing_identifier_fails() {
    let error = parse(tokenize("I HAS A")).unwrap_err();
    assert_eq!(error.get_line(), 1);
    assert_eq!(error.get_error_name(), "UnexpectedEndOfInput");
}

#[test]
fn test_declaration_wrong_token_fails() {
    let error = parse(tokenize("I HAS A ITZ 4")).unwrap_err();
    assert_eq!(error.get_line(), 1);
    assert_eq!(error.get_error_name(), "UnexpectedToken");
}

#[test]
fn test_missing_separator_fails() {
    let error = parse(tokenize("VISIBLE SUM OF 1 2")).unwrap_err();
    assert_eq!(error.get_line(), 1);
}

#[test]
fn test_unknown_statement_fails() {
    let error = parse(tokenize("HAI\nGTFO\nKTHXBYE")).unwrap_err();
    assert_eq!(error.get_line(), 2);
    assert_eq!(error.get_error_name(), "UnexpectedToken");
}

#[test]
fn test_trailing_input_fails() {
    let error = parse(tokenize("HAI\nKTHXBYE\nVISIBLE 1")).unwrap_err();
    assert_eq!(error.get_line(), 3);
    assert_eq!(error.get_error_name(), "TrailingInput");
}

#[test]
fn test_trailing_comment_is_fine() {
    let result = parse(tokenize("HAI\nKTHXBYE\nBTW bye"));
    assert!(result.is_ok());
}

#[test]
fn test_statement_lines_recorded() {
    let tree = parse_source("HAI\nVISIBLE 1\nGIMMEH x\nKTHXBYE");
    let statements = statements_of(&tree);

    assert_eq!(statements[0].line(), Some(2));
    assert_eq!(statements[1].line(), Some(3));
}

#[test]
fn test_determinism() {
    let source = "HAI\nI HAS A x ITZ SMOOSH \"a\" AN 1\nx R SUM OF 2 AN 3\nKTHXBYE";

    let first = parse_source(source);
    let second = parse_source(source);
    assert_eq!(first.to_string(), second.to_string());
}
