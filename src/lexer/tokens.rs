use lazy_static::lazy_static;
use std::fmt::Display;

lazy_static! {
    /// Multi-word keyword spellings, in match order. A longer phrase must be
    /// listed before any shorter phrase that is a prefix of it, so the lexer
    /// never commits to the short form early.
    pub static ref MULTIWORD_KEYWORDS: Vec<&'static str> = vec![
        "I HAS A",
        "I IZ",
        "IS NOW A",
        "IM OUTTA YR",
        "IM IN YR",
        "IF U SAY SO",
        "HOW IZ I",
        "SUM OF",
        "DIFF OF",
        "PRODUKT OF",
        "QUOSHUNT OF",
        "MOD OF",
        "BIGGR OF",
        "SMALLR OF",
        "BOTH SAEM",
        "BOTH OF",
        "EITHER OF",
        "WON OF",
        "ALL OF",
        "ANY OF",
        "FOUND YR",
        "O RLY?",
        "YA RLY",
        "NO WAI",
    ];

    /// Single-word keywords and punctuation-words, in match order.
    /// `OMGWTF` precedes `OMG` for the same prefix reason as above.
    /// `+` is the concatenation-sugar mark; `BTW`/`OBTW`/`TLDR` normally
    /// never reach keyword matching because the comment machinery consumes
    /// them first, but stray markers still lex as keywords rather than
    /// identifiers.
    pub static ref SINGLEWORD_KEYWORDS: Vec<&'static str> = vec![
        "HAI",
        "KTHXBYE",
        "WAZZUP",
        "BUHBYE",
        "BTW",
        "OBTW",
        "TLDR",
        "ITZ",
        "R",
        "AN",
        "NOT",
        "DIFFRINT",
        "SMOOSH",
        "MAEK",
        "A",
        "MKAY",
        "VISIBLE",
        "GIMMEH",
        "MEBBE",
        "OIC",
        "WTF?",
        "OMGWTF",
        "OMG",
        "UPPIN",
        "NERFIN",
        "YR",
        "TIL",
        "WILE",
        "GTFO",
        "+",
    ];
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    MultiwordKeyword,
    Keyword,
    NumbrLiteral,
    NumbarLiteral,
    TroofLiteral,
    YarnLiteral,
    NoobLiteral,
    Identifier,
    Comment,
    Unknown,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A single lexeme. Keyword tokens carry the canonical keyword spelling in
/// `value` (uppercase, single-spaced) regardless of the raw source casing;
/// every other kind carries the matched text verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    /// 1-based source line.
    pub line: u32,
    /// 0-based byte column within the line.
    pub column: u32,
    /// True for a comment that shares its line with preceding code tokens.
    pub is_inline: bool,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{ kind: {}, value: {} }}", self.kind, self.value)
    }
}

impl Token {
    /// True when this token is the given keyword or punctuation-word.
    pub fn is_keyword(&self, word: &str) -> bool {
        matches!(self.kind, TokenKind::Keyword | TokenKind::MultiwordKeyword) && self.value == word
    }

    /// True for the five literal kinds: NUMBR, NUMBAR, TROOF, YARN, NOOB.
    pub fn is_literal(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::NumbrLiteral
                | TokenKind::NumbarLiteral
                | TokenKind::TroofLiteral
                | TokenKind::YarnLiteral
                | TokenKind::NoobLiteral
        )
    }

    pub fn debug(&self) {
        println!(
            "{:<17} {:>3}:{:<3} {}",
            self.kind.to_string(),
            self.line,
            self.column,
            self.value
        );
    }
}
