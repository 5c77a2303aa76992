//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization using ordered, anchored regex patterns
//! - Multi-word keyword phrases matched before their shorter prefixes
//! - Token line/column tracking for error reporting
//! - BTW line comments and OBTW...TLDR block comments

pub mod lexer;
pub mod tokens;
