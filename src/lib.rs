#![allow(clippy::module_inception)]

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod tree;

extern crate regex;

/// Returns the 1-based `line_number`-th line of `source`, if it exists.
pub fn get_line(source: &str, line_number: u32) -> Option<&str> {
    if line_number == 0 {
        return None;
    }

    source.lines().nth(line_number as usize - 1)
}

pub fn display_error(error: &Error, source: &str, file_name: &str) {
    /*
        Error: UnexpectedToken (Expected identifier after `I HAS A`, found `ITZ`)
        -> final.lol
          |
        3 | I HAS A ITZ 4
          |
    */

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}", error.get_error_name());
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    println!("-> {}", file_name);

    let line_number = error.get_line();
    if let Some(line_text) = get_line(source, line_number) {
        let line_string = line_number.to_string();
        let padding = line_string.len() + 2;

        println!("{:>padding$}", "|");
        println!("{} | {}", line_string, line_text.trim());
        println!("{:>padding$}", "|");
    }
}
