//! Utility macros for the front end.
//!
//! `MK_TOKEN!` builds a `Token` instance, reducing boilerplate in the lexer.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
/// * `$line` - 1-based source line
/// * `$column` - 0-based column within the line
/// * `$inline` - Whether the token shares its line with preceding code
///   (only meaningful for comment tokens)
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::NumbrLiteral, "42".to_string(), 1, 0, false);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $line:expr, $column:expr, $inline:expr) => {
        Token {
            kind: $kind,
            value: $value,
            line: $line,
            column: $column,
            is_inline: $inline,
        }
    };
}
