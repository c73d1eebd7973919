//! Minimal lexer for CSS value-definition syntax
//!
//! Splits a grammar string into placeholder tokens (`<color>`,
//! `<length [0,∞]>`, `<'margin-top'>`) and the text between them. Nothing
//! else of the grammar mini-language is interpreted.
//!
//! A placeholder is a `<` followed by the nearest `>` with no other angle
//! bracket in between. A `<` that is followed by another `<` first is plain
//! text. Concatenating the lexed tokens always reproduces the input.

use std::borrow::Cow;

/// A lexed piece of a grammar string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrammarToken<'a> {
    /// Angle-bracket placeholder, brackets included
    Placeholder(&'a str),
    /// Keywords, combinators, multipliers, whitespace
    Text(&'a str),
}

impl<'a> GrammarToken<'a> {
    /// Source text of the token
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'a str {
        match self {
            Self::Placeholder(s) | Self::Text(s) => *s,
        }
    }

    /// Whether this is a placeholder equal to `token`
    #[inline]
    #[must_use]
    pub fn is_placeholder(&self, token: &str) -> bool {
        matches!(self, Self::Placeholder(p) if *p == token)
    }
}

/// Iterator over the tokens of a grammar string
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    /// Start lexing `input`
    #[inline]
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// End of the placeholder opening at `start`, if any
    fn placeholder_end(&self, start: usize) -> Option<usize> {
        let rest = &self.input[start + 1..];
        let close = rest.find(&['<', '>'][..])?;
        (rest.as_bytes()[close] == b'>').then_some(start + 1 + close + 1)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = GrammarToken<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.input.len() {
            return None;
        }
        let start = self.pos;

        if self.input.as_bytes()[start] == b'<' {
            if let Some(end) = self.placeholder_end(start) {
                self.pos = end;
                return Some(GrammarToken::Placeholder(&self.input[start..end]));
            }
        }

        // Text runs until the next '<' that opens a placeholder
        let mut end = start + self.input[start..].chars().next().map_or(1, char::len_utf8);
        loop {
            match self.input[end..].find('<') {
                None => {
                    end = self.input.len();
                    break;
                }
                Some(offset) => {
                    end += offset;
                    if self.placeholder_end(end).is_some() {
                        break;
                    }
                    end += 1;
                }
            }
        }
        self.pos = end;
        Some(GrammarToken::Text(&self.input[start..end]))
    }
}

/// Lex a grammar string into tokens
#[must_use]
pub fn lex(syntax: &str) -> Vec<GrammarToken<'_>> {
    Lexer::new(syntax).collect()
}

/// Whether `syntax` references the placeholder `token`
#[must_use]
pub fn contains_placeholder(syntax: &str, token: &str) -> bool {
    // Fast reject before lexing
    syntax.contains(token) && Lexer::new(syntax).any(|t| t.is_placeholder(token))
}

/// Replace every `token` placeholder in `syntax` with `replacement`
///
/// The replacement text is inserted verbatim and is not rescanned.
/// Borrows the input unchanged when the placeholder does not occur.
#[must_use]
pub fn replace_placeholder<'a>(syntax: &'a str, token: &str, replacement: &str) -> Cow<'a, str> {
    if !contains_placeholder(syntax, token) {
        return Cow::Borrowed(syntax);
    }

    let mut out = String::with_capacity(syntax.len() + replacement.len());
    for piece in Lexer::new(syntax) {
        if piece.is_placeholder(token) {
            out.push_str(replacement);
        } else {
            out.push_str(piece.as_str());
        }
    }
    Cow::Owned(out)
}
