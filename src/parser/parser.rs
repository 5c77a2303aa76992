//! Parser implementation for building the parse tree.
//!
//! Recursive descent over the token sequence: one parsing routine per
//! grammar nonterminal, a single forward cursor with arbitrary-offset
//! lookahead, and no backtracking. Each routine commits to a production
//! based on the current token alone.

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    tree::tree::ParseTree,
};

use super::stmt::parse_statement_list;

/// Cursor state over one token sequence. Scoped to a single `parse` call;
/// use a fresh instance (or an external lock) for concurrent parsing.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser { tokens, pos: 0 }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Looks ahead `offset` tokens without consuming; `peek(0)` is the
    /// current token.
    pub fn peek(&self, offset: usize) -> Option<&Token> {
        self.tokens.get(self.pos + offset)
    }

    /// Consumes and returns the current token, if any.
    pub fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// True when the current token is the given keyword.
    pub fn at_keyword(&self, word: &str) -> bool {
        self.current_token().is_some_and(|token| token.is_keyword(word))
    }

    /// Line to report when the input ends mid-construct.
    pub fn last_line(&self) -> u32 {
        self.tokens.last().map(|token| token.line).unwrap_or(1)
    }

    /// Consumes the given keyword or fails with an expected-vs-found error
    /// on the offending token's line.
    pub fn expect_keyword(&mut self, keyword: &str) -> Result<Token, Error> {
        match self.tokens.get(self.pos) {
            Some(token) if token.is_keyword(keyword) => {
                let token = token.clone();
                self.pos += 1;
                Ok(token)
            }
            Some(token) => Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: format!("`{}`", keyword),
                    found: token.value.clone(),
                },
                token.line,
            )),
            None => Err(Error::new(
                ErrorImpl::UnexpectedEndOfInput {
                    expected: format!("`{}`", keyword),
                },
                self.last_line(),
            )),
        }
    }

    /// Consumes an identifier token; `context` names the construct for the
    /// error message (e.g. "identifier after `I HAS A`").
    pub fn expect_identifier(&mut self, context: &str) -> Result<Token, Error> {
        match self.tokens.get(self.pos) {
            Some(token) if token.kind == TokenKind::Identifier => {
                let token = token.clone();
                self.pos += 1;
                Ok(token)
            }
            Some(token) => Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: String::from(context),
                    found: token.value.clone(),
                },
                token.line,
            )),
            None => Err(Error::new(
                ErrorImpl::UnexpectedEndOfInput {
                    expected: String::from(context),
                },
                self.last_line(),
            )),
        }
    }
}

/// Parses a token sequence into a parse tree rooted at a Program node.
///
/// Fails fast: the first failed expectation aborts the whole call with no
/// partial tree. Comments before the opening delimiter still attach to the
/// first statement.
pub fn parse(tokens: Vec<Token>) -> Result<ParseTree, Error> {
    let mut parser = Parser::new(tokens);

    let mut pending: Option<String> = None;
    skip_comments(&mut parser, &mut pending);

    let start = match parser.current_token() {
        Some(token) if token.is_keyword("HAI") => {
            let token = token.clone();
            parser.advance();
            Some(token)
        }
        _ => None,
    };

    let body = parse_statement_list(&mut parser, pending.take())?;

    let end = match parser.current_token() {
        Some(token) if token.is_keyword("KTHXBYE") => {
            let token = token.clone();
            parser.advance();
            Some(token)
        }
        _ => None,
    };

    // Only comments may follow the closing delimiter
    let mut trailing: Option<String> = None;
    skip_comments(&mut parser, &mut trailing);
    if let Some(token) = parser.current_token() {
        return Err(Error::new(
            ErrorImpl::TrailingInput {
                found: token.value.clone(),
            },
            token.line,
        ));
    }

    Ok(ParseTree::Program {
        start,
        body: Box::new(body),
        end,
    })
}

/// Consumes a run of comment tokens, remembering the text of the last
/// non-inline one in `pending`.
pub fn skip_comments(parser: &mut Parser, pending: &mut Option<String>) {
    while let Some(token) = parser.current_token() {
        if token.kind != TokenKind::Comment {
            break;
        }
        if !token.is_inline {
            *pending = Some(token.value.clone());
        }
        parser.advance();
    }
}
