// lexer.rs

use std::iter::FusedIterator;

use serde_json::{json, Value};

use crate::core::keywords::KeywordSet;
use crate::core::token::{LexProblem, Token, TokenKind};

/// Scanning rule chosen by the first character at the current position.
///
/// Priority order is word, number, string, whitespace, then the single
/// character fallback. Start sets are disjoint, so the first character alone
/// decides the rule and each rule then takes its maximal run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rule {
    Word,
    Number,
    String,
    Whitespace,
    Single,
}

impl Rule {
    fn select(first: char) -> Rule {
        if is_word_start(first) {
            Rule::Word
        } else if first.is_ascii_digit() {
            Rule::Number
        } else if first == '"' {
            Rule::String
        } else if first.is_whitespace() {
            Rule::Whitespace
        } else {
            Rule::Single
        }
    }
}

/// Per-line token classifier for Diamond source.
///
/// Holds nothing but the keyword set; every call to [`Lexer::classify`] is
/// independent, so there is no multi-line string or comment state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Lexer {
    keywords: KeywordSet,
}

impl Lexer {
    pub fn new(keywords: KeywordSet) -> Self {
        Self { keywords }
    }

    pub fn diamond() -> Self {
        Self::new(KeywordSet::diamond())
    }

    pub fn keywords(&self) -> &KeywordSet {
        &self.keywords
    }

    /// Lazily classifies one line. Cloning the returned iterator restarts the
    /// scan from the clone's position.
    pub fn classify<'l>(&self, line: &'l str) -> Tokens<'_, 'l> {
        Tokens {
            keywords: &self.keywords,
            line,
            pos: 0,
        }
    }

    /// Eager form of [`Lexer::classify`].
    pub fn tokenize_line<'l>(&self, line: &'l str) -> Vec<Token<'l>> {
        self.classify(line).collect()
    }

    /// Monarch tokens-provider equivalent of the scanning rules, for hosts
    /// that run Monaco.
    pub fn to_monarch_json(&self) -> Value {
        let keywords: Vec<&str> = self.keywords.iter().collect();
        json!({
            "keywords": keywords,
            "tokenizer": {
                "root": [
                    ["[a-zA-Z_]\\w*", {
                        "cases": {
                            "@keywords": TokenKind::Keyword.name(),
                            "@default": TokenKind::Identifier.name(),
                        }
                    }],
                    ["\\d+", TokenKind::Number.name()],
                    ["\".*?\"", TokenKind::String.name()],
                    ["\\s+", TokenKind::Whitespace.name()],
                ]
            }
        })
    }
}

/// Iterator over the tokens of a single line.
#[derive(Debug, Clone)]
pub struct Tokens<'k, 'l> {
    keywords: &'k KeywordSet,
    line: &'l str,
    pos: usize,
}

impl<'k, 'l> Iterator for Tokens<'k, 'l> {
    type Item = Token<'l>;

    fn next(&mut self) -> Option<Token<'l>> {
        let rest = &self.line[self.pos..];
        let first = rest.chars().next()?;
        let start = self.pos;

        let (kind, len, problem) = match Rule::select(first) {
            Rule::Word => {
                let len = run_len(rest, is_word_continue);
                let kind = if self.keywords.contains(&rest[..len]) {
                    TokenKind::Keyword
                } else {
                    TokenKind::Identifier
                };
                (kind, len, None)
            }
            Rule::Number => (TokenKind::Number, run_len(rest, |c| c.is_ascii_digit()), None),
            // Non-greedy: stop at the nearest closing quote. No escapes.
            Rule::String => match rest[1..].find('"') {
                Some(close) => (TokenKind::String, close + 2, None),
                None => (
                    TokenKind::String,
                    rest.len(),
                    Some(LexProblem::UnterminatedString),
                ),
            },
            Rule::Whitespace => (TokenKind::Whitespace, run_len(rest, char::is_whitespace), None),
            Rule::Single => (TokenKind::Unclassified, first.len_utf8(), None),
        };

        self.pos += len;
        let token = Token::new(kind, &self.line[start..start + len], start);
        Some(match problem {
            Some(p) => token.with_problem(p),
            None => token,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.line.len() - self.pos;
        ((remaining > 0) as usize, Some(remaining))
    }
}

impl FusedIterator for Tokens<'_, '_> {}

// Character classes (ASCII, matching `[a-zA-Z_]\w*`)

fn is_word_start(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphabetic()
}
fn is_word_continue(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphanumeric()
}

/// Byte length of the leading run of `s` whose chars satisfy `pred`.
fn run_len(s: &str, pred: impl Fn(char) -> bool) -> usize {
    s.char_indices()
        .find(|&(_, c)| !pred(c))
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(line: &str) -> Vec<(TokenKind, &str)> {
        Lexer::diamond()
            .classify(line)
            .map(|t| (t.kind, t.lexeme))
            .collect()
    }

    #[test]
    fn empty_line_has_no_tokens() {
        assert!(Lexer::diamond().tokenize_line("").is_empty());
    }

    #[test]
    fn number_then_word_split() {
        assert_eq!(
            kinds("25abc"),
            vec![(TokenKind::Number, "25"), (TokenKind::Identifier, "abc")]
        );
    }

    #[test]
    fn decimal_is_two_numbers() {
        assert_eq!(
            kinds("3.14"),
            vec![
                (TokenKind::Number, "3"),
                (TokenKind::Unclassified, "."),
                (TokenKind::Number, "14"),
            ]
        );
    }

    #[test]
    fn string_stops_at_nearest_quote() {
        assert_eq!(
            kinds(r#""a" "b""#),
            vec![
                (TokenKind::String, "\"a\""),
                (TokenKind::Whitespace, " "),
                (TokenKind::String, "\"b\""),
            ]
        );
    }

    #[test]
    fn unterminated_string_takes_rest_of_line() {
        let toks = Lexer::diamond().tokenize_line("bata dost \"oops x");
        let last = toks.last().unwrap();
        assert_eq!(last.kind, TokenKind::String);
        assert_eq!(last.lexeme, "\"oops x");
        assert_eq!(last.problem, Some(LexProblem::UnterminatedString));
    }

    #[test]
    fn non_ascii_letter_is_single_unclassified_char() {
        assert_eq!(
            kinds("dé"),
            vec![(TokenKind::Identifier, "d"), (TokenKind::Unclassified, "é")]
        );
    }

    #[test]
    fn custom_keyword_set() {
        let lexer = Lexer::new(KeywordSet::new(["let"]));
        let toks = lexer.tokenize_line("let bana");
        assert_eq!(toks[0].kind, TokenKind::Keyword);
        assert_eq!(toks[2].kind, TokenKind::Identifier);
    }

    #[test]
    fn clone_restarts_from_position() {
        let lexer = Lexer::diamond();
        let mut it = lexer.classify("bana x");
        it.next();
        let resumed: Vec<_> = it.clone().map(|t| t.lexeme).collect();
        let rest: Vec<_> = it.map(|t| t.lexeme).collect();
        assert_eq!(resumed, rest);
        assert_eq!(rest, vec![" ", "x"]);
    }

    #[test]
    fn monarch_lists_keywords() {
        let v = Lexer::diamond().to_monarch_json();
        let kw = v["keywords"].as_array().unwrap();
        assert_eq!(kw.len(), 11);
        assert_eq!(kw[0], "kaam");
        assert_eq!(kw[1], "likh");
        assert_eq!(kw[10], "jabtak");
        assert_eq!(v["tokenizer"]["root"][1][0], "\\d+");
    }
}
