//! Shell-style word splitting for inventory body lines.
//!
//! Follows POSIX shell quoting: whitespace separates words, single quotes
//! are literal, double quotes allow `\"` and `\\`, and a backslash outside
//! quotes escapes the next character. A trailing lone backslash is kept
//! as-is.

use hostmap_common::error::InventoryError;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Quote {
    None,
    Single,
    Double,
}

pub fn split(line: &str) -> Result<Vec<String>, InventoryError> {
    let mut words: Vec<String> = Vec::new();
    let mut word = String::new();
    let mut in_word = false;
    let mut quote = Quote::None;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match quote {
            Quote::Single => {
                if c == '\'' {
                    quote = Quote::None;
                } else {
                    word.push(c);
                }
            }
            Quote::Double => match c {
                '"' => quote = Quote::None,
                '\\' => match chars.peek() {
                    Some(&next) if next == '"' || next == '\\' => {
                        word.push(next);
                        chars.next();
                    }
                    _ => word.push(c),
                },
                _ => word.push(c),
            },
            Quote::None => match c {
                c if c.is_whitespace() => {
                    if in_word {
                        words.push(std::mem::take(&mut word));
                        in_word = false;
                    }
                }
                '\'' => {
                    quote = Quote::Single;
                    in_word = true;
                }
                '"' => {
                    quote = Quote::Double;
                    in_word = true;
                }
                '\\' => {
                    word.push(chars.next().unwrap_or('\\'));
                    in_word = true;
                }
                _ => {
                    word.push(c);
                    in_word = true;
                }
            },
        }
    }

    if quote != Quote::None {
        return Err(InventoryError::UnbalancedQuote {
            line: line.to_string(),
        });
    }
    if in_word {
        words.push(word);
    }

    Ok(words)
}
