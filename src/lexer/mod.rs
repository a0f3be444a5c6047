//! Character-level tokenizer for ASCII STL text.
//!
//! The lexer knows nothing about the grammar: it only classifies runs of
//! characters. Whitespace and newlines are emitted as tokens of their own so
//! the parser decides where they are significant.

mod scanner;

pub use scanner::Scanner;

use std::fmt;

/// Classification of a scanned lexeme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A character no other production accepts.
    Illegal,
    /// A run of spaces and tabs.
    Ws,
    Newline,
    Eof,

    Solid,
    EndSolid,
    Facet,
    EndFacet,
    Outer,
    Loop,
    EndLoop,
    Normal,
    Vertex,

    /// A run of letters that is not a keyword.
    Word,
    /// Digits with an optional fractional part.
    Number,
}

impl TokenKind {
    /// Maps the exact (case-sensitive) text of a keyword to its kind.
    #[must_use]
    pub fn keyword(text: &str) -> Option<Self> {
        let kind = match text {
            "solid" => Self::Solid,
            "endsolid" => Self::EndSolid,
            "facet" => Self::Facet,
            "endfacet" => Self::EndFacet,
            "outer" => Self::Outer,
            "loop" => Self::Loop,
            "endloop" => Self::EndLoop,
            "normal" => Self::Normal,
            "vertex" => Self::Vertex,
            _ => return None,
        };
        Some(kind)
    }
}

/// A token kind paired with the exact source text it was scanned from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// The end-of-input marker. Its text is empty.
    #[must_use]
    pub fn eof() -> Self {
        Self::new(TokenKind::Eof, String::new())
    }

    #[must_use]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => f.write_str("EOF"),
            TokenKind::Newline => f.write_str("newline"),
            _ => f.write_str(&self.text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_lookup_is_case_sensitive() {
        assert_eq!(TokenKind::keyword("endfacet"), Some(TokenKind::EndFacet));
        assert_eq!(TokenKind::keyword("Solid"), None);
        assert_eq!(TokenKind::keyword("foobar"), None);
    }

    #[test]
    fn display_names_invisible_tokens() {
        assert_eq!(Token::eof().to_string(), "EOF");
        assert_eq!(Token::new(TokenKind::Newline, "\n").to_string(), "newline");
        assert_eq!(Token::new(TokenKind::Illegal, "-").to_string(), "-");
    }
}
