//! Lexical analysis for the command line: plain whitespace splitting.
//!
//! There is no quoting, escaping or substitution. A token is any run of
//! characters that are not [`DELIMITERS`].

/// Characters that separate tokens: space, tab, carriage return, newline and bell.
pub const DELIMITERS: [char; 5] = [' ', '\t', '\r', '\n', '\x07'];

fn is_delimiter(ch: char) -> bool {
    DELIMITERS.contains(&ch)
}

/// Splits a line into tokens borrowed from it.
///
/// Runs of delimiters collapse, so no token is ever empty. A blank line
/// yields an empty vector. The first token, if any, is the command name.
pub fn split_line(line: &str) -> Vec<&str> {
    line.split(is_delimiter)
        .filter(|token| !token.is_empty())
        .collect()
}
