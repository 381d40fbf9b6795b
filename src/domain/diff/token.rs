use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenClass {
    Letter,
    Digit,
    Whitespace,
    Punctuation,
}

impl TokenClass {
    pub fn of(c: char) -> Self {
        if c.is_ascii_alphabetic() {
            TokenClass::Letter
        } else if c.is_ascii_digit() {
            TokenClass::Digit
        } else if c.is_whitespace() {
            TokenClass::Whitespace
        } else {
            TokenClass::Punctuation
        }
    }
}

/// A maximal run of characters sharing one [`TokenClass`], borrowed from the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token<'t> {
    pub text: &'t str,
    pub class: TokenClass,
}

/// Split a line into tokens, breaking wherever the character class changes.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut current: Option<(usize, TokenClass)> = None;

    for (idx, c) in text.char_indices() {
        let class = TokenClass::of(c);
        match current {
            Some((_, open)) if open == class => {}
            Some((start, open)) => {
                tokens.push(Token {
                    text: &text[start..idx],
                    class: open,
                });
                current = Some((idx, class));
            }
            None => current = Some((idx, class)),
        }
    }

    if let Some((start, class)) = current {
        tokens.push(Token {
            text: &text[start..],
            class,
        });
    }

    tokens
}
