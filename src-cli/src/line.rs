//! Splitting an input line into words
//!
//! Words are separated by whitespace. Single or double quotes group a
//! word that contains spaces. After splitting, `\n` and `\t` inside a word
//! become a newline and a tab.

use anyhow::{bail, Result};

pub fn split_line(line: &str) -> Result<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_word = true;
            }
            None if c.is_whitespace() => {
                if in_word {
                    words.push(unescape(&current));
                    current.clear();
                    in_word = false;
                }
            }
            None => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if let Some(q) = quote {
        bail!("unterminated {q} quote");
    }
    if in_word {
        words.push(unescape(&current));
    }
    Ok(words)
}

fn unescape(word: &str) -> String {
    word.replace("\\n", "\n").replace("\\t", "\t")
}
