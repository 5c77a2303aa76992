use regex::Regex;

use crate::MK_TOKEN;

use super::tokens::{Token, TokenKind, MULTIWORD_KEYWORDS, SINGLEWORD_KEYWORDS};

/// One entry of the ordered match table. `canonical` is set for keyword
/// patterns so the emitted token carries the canonical spelling instead of
/// the raw (possibly oddly spaced or cased) source text.
#[derive(Clone)]
struct TokenPattern {
    kind: TokenKind,
    regex: Regex,
    canonical: Option<&'static str>,
}

#[derive(Debug, Clone, Copy)]
pub struct LexerOptions {
    /// Match keywords and literals case-insensitively. The canonical language
    /// is uppercase-only, so this defaults to false.
    pub ignore_case: bool,
}

impl Default for LexerOptions {
    fn default() -> Self {
        LexerOptions { ignore_case: false }
    }
}

/// Line-oriented tokenizer. Holds only the compiled pattern table; all
/// per-call state lives on the stack of `tokenize`, so one instance can be
/// reused across calls.
#[derive(Clone)]
pub struct Lexer {
    patterns: Vec<TokenPattern>,
    line_comment: Regex,
    block_open: Regex,
    block_close: Regex,
}

/// Builds the anchored pattern for one keyword phrase. Words are joined with
/// `\s+` so multi-word keywords tolerate any spacing, and a trailing word
/// boundary keeps `A` from matching the start of `ABC`. Phrases ending in
/// punctuation (`WTF?`, `+`) take no boundary.
fn keyword_pattern(flags: &str, phrase: &str) -> String {
    let words: Vec<String> = phrase.split(' ').map(|word| regex::escape(word)).collect();
    let mut pattern = format!("{}^{}", flags, words.join("\\s+"));

    if phrase.ends_with(|c: char| c.is_ascii_alphanumeric()) {
        pattern.push_str("\\b");
    }

    pattern
}

impl Lexer {
    pub fn new(options: LexerOptions) -> Lexer {
        let flags = if options.ignore_case { "(?i)" } else { "" };

        let mut patterns = vec![
            // YARN first: it may contain whitespace and keyword-shaped text,
            // so it must win before any keyword pattern gets a look.
            TokenPattern {
                kind: TokenKind::YarnLiteral,
                regex: Regex::new("^\"([^\"\\\\]*(?:\\\\.[^\"\\\\]*)*)\"").unwrap(),
                canonical: None,
            },
        ];

        for keyword in MULTIWORD_KEYWORDS.iter().copied() {
            patterns.push(TokenPattern {
                kind: TokenKind::MultiwordKeyword,
                regex: Regex::new(&keyword_pattern(flags, keyword)).unwrap(),
                canonical: Some(keyword),
            });
        }

        for keyword in SINGLEWORD_KEYWORDS.iter().copied() {
            patterns.push(TokenPattern {
                kind: TokenKind::Keyword,
                regex: Regex::new(&keyword_pattern(flags, keyword)).unwrap(),
                canonical: Some(keyword),
            });
        }

        patterns.push(TokenPattern {
            kind: TokenKind::TroofLiteral,
            regex: Regex::new(&format!("{}^(WIN|FAIL)\\b", flags)).unwrap(),
            canonical: None,
        });
        // NUMBAR before NUMBR so "3.14" is one float, not "3" plus a fragment
        patterns.push(TokenPattern {
            kind: TokenKind::NumbarLiteral,
            regex: Regex::new("^-?[0-9]+\\.[0-9]+\\b").unwrap(),
            canonical: None,
        });
        patterns.push(TokenPattern {
            kind: TokenKind::NumbrLiteral,
            regex: Regex::new("^-?[0-9]+\\b").unwrap(),
            canonical: None,
        });
        patterns.push(TokenPattern {
            kind: TokenKind::NoobLiteral,
            regex: Regex::new(&keyword_pattern(flags, "NOOB")).unwrap(),
            canonical: Some("NOOB"),
        });
        patterns.push(TokenPattern {
            kind: TokenKind::Identifier,
            regex: Regex::new("^[a-zA-Z][a-zA-Z0-9_]*").unwrap(),
            canonical: None,
        });
        // Fallback: any non-whitespace run becomes an Unknown token, so the
        // scan always makes progress and judgment is deferred to the parser
        patterns.push(TokenPattern {
            kind: TokenKind::Unknown,
            regex: Regex::new("^\\S+").unwrap(),
            canonical: None,
        });

        Lexer {
            patterns,
            line_comment: Regex::new(&format!("{}^BTW\\b", flags)).unwrap(),
            block_open: Regex::new(&format!("{}^\\s*OBTW\\b", flags)).unwrap(),
            block_close: Regex::new(&format!("{}\\bTLDR\\b", flags)).unwrap(),
        }
    }

    /// Tokenizes `source` into an ordered token sequence. Total and
    /// non-throwing: every non-whitespace, non-comment character run produces
    /// some token, with `Unknown` as the last resort.
    pub fn tokenize(&self, source: &str) -> Vec<Token> {
        let mut tokens: Vec<Token> = vec![];
        let mut in_block_comment = false;

        for (index, line) in source.lines().enumerate() {
            let line_number = index as u32 + 1;

            // 2-state comment machine: marker lines themselves emit nothing
            if in_block_comment {
                if self.block_close.is_match(line) {
                    in_block_comment = false;
                }
                continue;
            }
            if self.block_open.is_match(line) {
                in_block_comment = true;
                continue;
            }

            let line_start = tokens.len();
            let mut pos = 0usize;

            while pos < line.len() {
                let rest = &line[pos..];
                let next = match rest.chars().next() {
                    Some(c) => c,
                    None => break,
                };

                if next.is_whitespace() {
                    pos += next.len_utf8();
                    continue;
                }

                // A line-comment marker claims the remainder of the line
                if let Some(marker) = self.line_comment.find(rest) {
                    let text = rest[marker.end()..].trim().to_string();
                    let is_inline = tokens.len() > line_start;
                    tokens.push(MK_TOKEN!(
                        TokenKind::Comment,
                        text,
                        line_number,
                        pos as u32,
                        is_inline
                    ));
                    break;
                }

                let mut matched = false;
                for pattern in self.patterns.iter() {
                    if let Some(found) = pattern.regex.find(rest) {
                        let value = match pattern.canonical {
                            Some(canonical) => canonical.to_string(),
                            None => found.as_str().to_string(),
                        };
                        tokens.push(MK_TOKEN!(
                            pattern.kind,
                            value,
                            line_number,
                            pos as u32,
                            false
                        ));
                        pos += found.end();
                        matched = true;
                        break;
                    }
                }

                if !matched {
                    // The fallback pattern matches any non-whitespace run, so
                    // this only guards forward progress
                    pos += next.len_utf8();
                }
            }
        }

        tokens
    }
}

/// Tokenizes with the canonical (case-sensitive, uppercase-keyword) options.
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(LexerOptions::default()).tokenize(source)
}
