use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    tree::tree::ParseTree,
};

use super::{expr::parse_expr, parser::Parser};

/// StatementList := Statement*
///
/// Stops (without consuming) at a closing delimiter or end of input. An
/// empty program yields a list with zero statements. The pending comment
/// threads through explicitly and is consumed by at most one statement.
pub fn parse_statement_list(
    parser: &mut Parser,
    leading_comment: Option<String>,
) -> Result<ParseTree, Error> {
    let mut statements = Vec::new();
    let mut pending = leading_comment;

    loop {
        let token = match parser.current_token() {
            Some(token) => token,
            None => break,
        };

        if token.kind == TokenKind::Comment {
            if !token.is_inline {
                pending = Some(token.value.clone());
            }
            parser.advance();
            continue;
        }

        if token.is_keyword("KTHXBYE") || token.is_keyword("BUHBYE") {
            break;
        }

        statements.push(parse_stmt(parser, pending.take())?);
    }

    Ok(ParseTree::StatementList { statements })
}

/// Statement := VarBlock | VariableDecl | PrintStmt | InputStmt | Assignment
///
/// Dispatches on the current keyword (or on `peek(1)` being `R` for an
/// assignment). Anything else is a syntax error; malformed statements are
/// never skipped. The wrapped node records the pending comment, plus an
/// inline comment trailing the statement on its own source line.
pub fn parse_stmt(parser: &mut Parser, comment: Option<String>) -> Result<ParseTree, Error> {
    let token = match parser.current_token() {
        Some(token) => token.clone(),
        None => {
            return Err(Error::new(
                ErrorImpl::UnexpectedEndOfInput {
                    expected: String::from("a statement"),
                },
                parser.last_line(),
            ))
        }
    };
    let line = token.line;

    let body = if token.is_keyword("WAZZUP") {
        parse_var_block(parser)?
    } else if token.is_keyword("I HAS A") {
        parse_var_decl_stmt(parser)?
    } else if token.is_keyword("VISIBLE") {
        parse_print_stmt(parser)?
    } else if token.is_keyword("GIMMEH") {
        parse_input_stmt(parser)?
    } else if token.kind == TokenKind::Identifier
        && parser.peek(1).is_some_and(|next| next.is_keyword("R"))
    {
        parse_assignment_stmt(parser)?
    } else {
        return Err(Error::new(
            ErrorImpl::UnexpectedToken {
                expected: String::from("a statement"),
                found: token.value.clone(),
            },
            line,
        ));
    };

    let inline_comment = match parser.current_token() {
        Some(next) if next.kind == TokenKind::Comment && next.is_inline && next.line == line => {
            let text = next.value.clone();
            parser.advance();
            Some(text)
        }
        _ => None,
    };

    Ok(ParseTree::Statement {
        body: Box::new(body),
        comment,
        inline_comment,
        line,
    })
}

/// VarBlock := WAZZUP Statement* BUHBYE
pub fn parse_var_block(parser: &mut Parser) -> Result<ParseTree, Error> {
    let keyword = parser.expect_keyword("WAZZUP")?;

    let mut statements = Vec::new();
    let mut pending: Option<String> = None;

    loop {
        let token = match parser.current_token() {
            Some(token) => token,
            None => {
                return Err(Error::new(
                    ErrorImpl::UnexpectedEndOfInput {
                        expected: String::from("`BUHBYE`"),
                    },
                    parser.last_line(),
                ))
            }
        };

        if token.kind == TokenKind::Comment {
            if !token.is_inline {
                pending = Some(token.value.clone());
            }
            parser.advance();
            continue;
        }

        if token.is_keyword("BUHBYE") {
            break;
        }

        statements.push(parse_stmt(parser, pending.take())?);
    }

    parser.expect_keyword("BUHBYE")?;

    Ok(ParseTree::VarBlock {
        keyword,
        statements,
    })
}

/// VariableDecl := I HAS A Identifier [ITZ Expression]
pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<ParseTree, Error> {
    let keyword = parser.expect_keyword("I HAS A")?;
    let name = parser.expect_identifier("identifier after `I HAS A`")?;

    let init = if parser.at_keyword("ITZ") {
        parser.advance();
        Some(Box::new(parse_expr(parser)?))
    } else {
        None
    };

    Ok(ParseTree::VariableDeclaration {
        keyword,
        name,
        init,
    })
}

/// PrintStmt := VISIBLE Expression
pub fn parse_print_stmt(parser: &mut Parser) -> Result<ParseTree, Error> {
    let keyword = parser.expect_keyword("VISIBLE")?;
    let value = parse_expr(parser)?;

    Ok(ParseTree::PrintStatement {
        keyword,
        value: Box::new(value),
    })
}

/// InputStmt := GIMMEH Identifier (AN Identifier)*
///
/// Targets are collected in declaration order; downstream semantics fill
/// them in that same order.
pub fn parse_input_stmt(parser: &mut Parser) -> Result<ParseTree, Error> {
    let keyword = parser.expect_keyword("GIMMEH")?;

    let mut targets = vec![parser.expect_identifier("identifier after `GIMMEH`")?];
    while parser.at_keyword("AN") {
        parser.advance();
        targets.push(parser.expect_identifier("identifier after `AN`")?);
    }

    Ok(ParseTree::InputStatement { keyword, targets })
}

/// Assignment := Identifier R Expression
pub fn parse_assignment_stmt(parser: &mut Parser) -> Result<ParseTree, Error> {
    let name = parser.expect_identifier("identifier at assignment target")?;
    parser.expect_keyword("R")?;
    let value = parse_expr(parser)?;

    Ok(ParseTree::Assignment {
        name,
        value: Box::new(value),
    })
}
