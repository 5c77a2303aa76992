use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    tree::tree::ParseTree,
};

use super::parser::Parser;

/// Binary arithmetic operator keywords. Chained operators nest on the
/// right: the right operand recurses into the arithmetic level, so no
/// precedence climbing is needed.
const ARITHMETIC_OPERATORS: [&str; 7] = [
    "SUM OF",
    "DIFF OF",
    "PRODUKT OF",
    "QUOSHUNT OF",
    "MOD OF",
    "BIGGR OF",
    "SMALLR OF",
];

const COMPARISON_OPERATORS: [&str; 2] = ["BOTH SAEM", "DIFFRINT"];

const BINARY_BOOLEAN_OPERATORS: [&str; 3] = ["BOTH OF", "EITHER OF", "WON OF"];

const NARY_BOOLEAN_OPERATORS: [&str; 2] = ["ALL OF", "ANY OF"];

fn is_one_of(token: &Token, operators: &[&str]) -> bool {
    operators.iter().any(|operator| token.is_keyword(operator))
}

/// Expression := BooleanExpr | ComparisonExpr
pub fn parse_expr(parser: &mut Parser) -> Result<ParseTree, Error> {
    match parser.current_token() {
        Some(token) if token.is_keyword("NOT") => parse_not_expr(parser),
        Some(token) if is_one_of(token, &BINARY_BOOLEAN_OPERATORS) => {
            parse_binary_boolean_expr(parser)
        }
        Some(token) if is_one_of(token, &NARY_BOOLEAN_OPERATORS) => {
            parse_nary_boolean_expr(parser)
        }
        _ => parse_comparison_expr(parser),
    }
}

/// BooleanExpr := NOT Expression
pub fn parse_not_expr(parser: &mut Parser) -> Result<ParseTree, Error> {
    let keyword = parser.expect_keyword("NOT")?;
    let operand = parse_expr(parser)?;

    Ok(ParseTree::Not {
        keyword,
        operand: Box::new(operand),
    })
}

/// BooleanExpr := (BOTH OF | EITHER OF | WON OF) Expression AN Expression
pub fn parse_binary_boolean_expr(parser: &mut Parser) -> Result<ParseTree, Error> {
    // caller checked the operator is present
    let operator = advance_operator(parser, "a boolean operator")?;

    let left = parse_expr(parser)?;
    parser.expect_keyword("AN")?;
    let right = parse_expr(parser)?;

    Ok(ParseTree::BooleanExpression {
        operator,
        operands: vec![left, right],
    })
}

/// BooleanExpr := (ALL OF | ANY OF) Expression (AN Expression)* [MKAY]
///
/// The operand list is flat, not a nested binary chain.
pub fn parse_nary_boolean_expr(parser: &mut Parser) -> Result<ParseTree, Error> {
    let operator = advance_operator(parser, "a boolean operator")?;

    let mut operands = vec![parse_expr(parser)?];
    while parser.at_keyword("AN") {
        parser.advance();
        operands.push(parse_expr(parser)?);
    }
    consume_optional_mkay(parser);

    Ok(ParseTree::BooleanExpression { operator, operands })
}

/// ComparisonExpr := (BOTH SAEM | DIFFRINT) Expression AN Expression
///                 | ArithmeticExpr
pub fn parse_comparison_expr(parser: &mut Parser) -> Result<ParseTree, Error> {
    match parser.current_token() {
        Some(token) if is_one_of(token, &COMPARISON_OPERATORS) => {
            let operator = advance_operator(parser, "a comparison operator")?;

            let left = parse_expr(parser)?;
            let separator = parser.expect_keyword("AN")?;
            let right = parse_expr(parser)?;

            Ok(ParseTree::BinaryExpression {
                operator,
                separator: Some(separator),
                left: Box::new(left),
                right: Box::new(right),
            })
        }
        _ => parse_arithmetic_expr(parser),
    }
}

/// ArithmeticExpr := ArithOp PrimaryExpr AN ArithmeticExpr
///                 | SMOOSH PrimaryExpr (AN PrimaryExpr)* [MKAY]
///                 | PrimaryExpr
pub fn parse_arithmetic_expr(parser: &mut Parser) -> Result<ParseTree, Error> {
    match parser.current_token() {
        Some(token) if is_one_of(token, &ARITHMETIC_OPERATORS) => {
            let operator = advance_operator(parser, "an arithmetic operator")?;

            let left = parse_primary_expr(parser)?;
            let separator = parser.expect_keyword("AN")?;
            // right recursion makes chained operators right-associative
            let right = parse_arithmetic_expr(parser)?;

            Ok(ParseTree::BinaryExpression {
                operator,
                separator: Some(separator),
                left: Box::new(left),
                right: Box::new(right),
            })
        }
        Some(token) if token.is_keyword("SMOOSH") => parse_smoosh_expr(parser),
        _ => parse_primary_expr(parser),
    }
}

/// SMOOSH concatenation: one or more operands in source order.
pub fn parse_smoosh_expr(parser: &mut Parser) -> Result<ParseTree, Error> {
    let operator = parser.expect_keyword("SMOOSH")?;

    let mut operands = vec![parse_primary_expr(parser)?];
    while parser.at_keyword("AN") {
        parser.advance();
        operands.push(parse_primary_expr(parser)?);
    }
    consume_optional_mkay(parser);

    Ok(ParseTree::Smoosh { operator, operands })
}

/// PrimaryExpr := AtomicExpr (+ AtomicExpr)*
///
/// A bare `+` between atomics is concatenation sugar; it is not part of the
/// reference language and builds the same list node as SMOOSH.
pub fn parse_primary_expr(parser: &mut Parser) -> Result<ParseTree, Error> {
    let first = parse_atomic_expr(parser)?;

    match parser.current_token() {
        Some(token) if token.is_keyword("+") => {
            let operator = token.clone();
            let mut operands = vec![first];
            while parser.at_keyword("+") {
                parser.advance();
                operands.push(parse_atomic_expr(parser)?);
            }
            Ok(ParseTree::Smoosh { operator, operands })
        }
        _ => Ok(first),
    }
}

/// AtomicExpr := Literal | Identifier
pub fn parse_atomic_expr(parser: &mut Parser) -> Result<ParseTree, Error> {
    let token = match parser.current_token() {
        Some(token) => token.clone(),
        None => {
            return Err(Error::new(
                ErrorImpl::UnexpectedEndOfInput {
                    expected: String::from("an expression"),
                },
                parser.last_line(),
            ))
        }
    };

    if token.is_literal() {
        parser.advance();
        Ok(ParseTree::Literal { token })
    } else if token.kind == TokenKind::Identifier {
        parser.advance();
        Ok(ParseTree::Variable { token })
    } else {
        Err(Error::new(
            ErrorImpl::UnexpectedToken {
                expected: String::from("a literal or identifier"),
                found: token.value.clone(),
            },
            token.line,
        ))
    }
}

/// The reference language closes n-ary operand lists with an optional MKAY.
fn consume_optional_mkay(parser: &mut Parser) {
    if parser.at_keyword("MKAY") {
        parser.advance();
    }
}

fn advance_operator(parser: &mut Parser, expected: &str) -> Result<Token, Error> {
    match parser.advance() {
        Some(token) => Ok(token),
        None => Err(Error::new(
            ErrorImpl::UnexpectedEndOfInput {
                expected: String::from(expected),
            },
            parser.last_line(),
        )),
    }
}
