//! Parser module for building the parse tree.
//!
//! This module contains the recursive-descent parser that transforms a
//! stream of tokens into a parse tree mirroring the grammar. It handles:
//!
//! - Statement parsing (declarations, print, input, assignment, WAZZUP blocks)
//! - Expression parsing (boolean, comparison, arithmetic, concatenation)
//! - Comment attachment as statement metadata
//! - Fail-fast syntax errors with line and expected-vs-found detail
//!
//! One free function per nonterminal, all driven by a single forward cursor
//! with `peek(k)` lookahead and no backtracking.

pub mod expr;
pub mod parser;
pub mod stmt;

#[cfg(test)]
mod tests;
