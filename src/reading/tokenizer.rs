//! Tokenizer - whitespace splitting and repeat emphasis

use super::token::Token;
use crate::engine::error::RsvpError;

/// Bytes that separate words: space, form-feed, newline, carriage return,
/// tab and vertical tab.
fn is_delimiter(byte: u8) -> bool {
    matches!(byte, b' ' | b'\x0c' | b'\n' | b'\r' | b'\t' | b'\x0b')
}

/// Splits `text` into words. Runs of delimiters collapse, so no token is empty.
///
/// The token table grows with fallible reservation; running out of memory is
/// reported as `RsvpError::Resource` instead of aborting the process.
pub fn tokenize(text: &[u8], emphasis: bool) -> Result<Vec<Token<'_>>, RsvpError> {
    let mut tokens: Vec<Token<'_>> = Vec::new();

    for word in text.split(|&b| is_delimiter(b)).filter(|w| !w.is_empty()) {
        if tokens.len() == tokens.capacity() {
            let additional = tokens.capacity().max(512);
            tokens
                .try_reserve(additional)
                .map_err(|_| RsvpError::Resource {
                    what: "growing the token table",
                })?;
        }
        tokens.push(Token::new(word));
    }

    if emphasis {
        mark_repeats(&mut tokens);
    }

    Ok(tokens)
}

/// A word identical to its predecessor flips the predecessor's emphasis, so
/// a run of repeats highlights every other word starting with the second.
fn mark_repeats(tokens: &mut [Token<'_>]) {
    for i in 1..tokens.len() {
        tokens[i].emphasis = tokens[i].text == tokens[i - 1].text && !tokens[i - 1].emphasis;
    }
}
