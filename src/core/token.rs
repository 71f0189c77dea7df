// src/core/token.rs
use std::fmt;
use std::ops::Range;

/// Lexical category of a Diamond lexeme. Every character of a line ends up in
/// exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    Keyword,
    Identifier,
    Number,
    String,
    Whitespace,
    /// Punctuation, operators and anything else no rule claims (`=`, `<`, `(`, `.`).
    Unclassified,
}

impl TokenKind {
    pub const ALL: [TokenKind; 6] = [
        TokenKind::Keyword,
        TokenKind::Identifier,
        TokenKind::Number,
        TokenKind::String,
        TokenKind::Whitespace,
        TokenKind::Unclassified,
    ];

    /// Token class name as understood by Monaco themes.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Identifier => "identifier",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Whitespace => "white",
            TokenKind::Unclassified => "unclassified",
        }
    }

    /// Inverse of [`TokenKind::name`]; also accepts `whitespace` and ignores case.
    pub fn from_name(name: &str) -> Option<TokenKind> {
        match name.trim().to_ascii_lowercase().as_str() {
            "keyword" => Some(TokenKind::Keyword),
            "identifier" => Some(TokenKind::Identifier),
            "number" => Some(TokenKind::Number),
            "string" => Some(TokenKind::String),
            "white" | "whitespace" => Some(TokenKind::Whitespace),
            "unclassified" => Some(TokenKind::Unclassified),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Recoverable lexical condition attached to a token. The token still covers
/// its characters; the surface decides how to flag it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexProblem {
    /// A `"` with no closing quote on the same line.
    UnterminatedString,
}

/// One classified slice of a line. `lexeme` borrows from the line and `span`
/// holds its byte range, so `&line[span] == lexeme`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub lexeme: &'a str,
    pub span: Range<usize>,
    pub problem: Option<LexProblem>,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, lexeme: &'a str, start: usize) -> Self {
        Self {
            kind,
            lexeme,
            span: start..start + lexeme.len(),
            problem: None,
        }
    }

    pub fn with_problem(mut self, problem: LexProblem) -> Self {
        self.problem = Some(problem);
        self
    }

    pub fn is_keyword(&self, word: &str) -> bool {
        self.kind == TokenKind::Keyword && self.lexeme == word
    }

    /// 1-based character column of the token within `line`.
    pub fn column(&self, line: &str) -> usize {
        line.get(..self.span.start)
            .map(|prefix| prefix.chars().count())
            .unwrap_or(0)
            + 1
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?}) @{}..{}", self.kind, self.lexeme, self.span.start, self.span.end)?;
        if self.problem.is_some() {
            f.write_str(" unterminated")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for kind in TokenKind::ALL {
            assert_eq!(TokenKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(TokenKind::from_name("Whitespace"), Some(TokenKind::Whitespace));
        assert_eq!(TokenKind::from_name("comment"), None);
    }

    #[test]
    fn column_counts_chars_not_bytes() {
        let line = "é x";
        let tok = Token::new(TokenKind::Identifier, "x", 3);
        assert_eq!(tok.column(line), 3);
    }

    #[test]
    fn display_shows_kind_and_span() {
        let tok = Token::new(TokenKind::Keyword, "bana", 0);
        assert_eq!(tok.to_string(), "keyword(\"bana\") @0..4");
    }
}
