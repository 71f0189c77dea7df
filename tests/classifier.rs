use diamond_playground::core::lexer::Lexer;
use diamond_playground::core::token::{LexProblem, TokenKind};

fn kinds(line: &str) -> Vec<(TokenKind, String)> {
    Lexer::diamond()
        .classify(line)
        .map(|t| (t.kind, t.lexeme.to_string()))
        .collect()
}

#[test]
fn declaration_line() {
    use TokenKind::*;
    let got = kinds("bana dost x = 25");
    let want = vec![
        (Keyword, "bana"),
        (Whitespace, " "),
        (Keyword, "dost"),
        (Whitespace, " "),
        (Identifier, "x"),
        (Whitespace, " "),
        (Unclassified, "="),
        (Whitespace, " "),
        (Number, "25"),
    ];
    let want: Vec<_> = want.into_iter().map(|(k, s)| (k, s.to_string())).collect();
    assert_eq!(got, want);
}

#[test]
fn empty_string_literal() {
    assert_eq!(kinds("\"\""), vec![(TokenKind::String, "\"\"".to_string())]);
}

#[test]
fn comparison_without_spaces() {
    assert_eq!(
        kinds("i<5"),
        vec![
            (TokenKind::Identifier, "i".to_string()),
            (TokenKind::Unclassified, "<".to_string()),
            (TokenKind::Number, "5".to_string()),
        ]
    );
}

#[test]
fn concatenation_reproduces_the_line() {
    let lexer = Lexer::diamond();
    let lines = [
        "",
        "kaam dost greet(naam) {",
        "  bata dost \"namaste \" + naam",
        "jabtak dost i < 10 { i = i + 1 }",
        "likh dost \"open",
        "x9_y 007 ünï \"a\"\"b\"",
        "\t\t  ",
    ];
    for line in lines {
        let rebuilt: String = lexer.classify(line).map(|t| t.lexeme).collect();
        assert_eq!(rebuilt, line);
        let mut at = 0;
        for tok in lexer.classify(line) {
            assert_eq!(tok.span.start, at, "gap before {tok:?} in {line:?}");
            assert!(!tok.lexeme.is_empty());
            at = tok.span.end;
        }
        assert_eq!(at, line.len());
    }
}

#[test]
fn keywords_match_whole_words_only() {
    let got = kinds("dosti bas_ Kaam bas");
    let words: Vec<_> = got
        .into_iter()
        .filter(|(k, _)| *k != TokenKind::Whitespace)
        .collect();
    assert_eq!(
        words,
        vec![
            (TokenKind::Identifier, "dosti".to_string()),
            (TokenKind::Identifier, "bas_".to_string()),
            (TokenKind::Identifier, "Kaam".to_string()),
            (TokenKind::Keyword, "bas".to_string()),
        ]
    );
}

#[test]
fn strings_stop_at_nearest_quote() {
    let got = kinds("\"a\" x \"b\"");
    assert_eq!(got[0], (TokenKind::String, "\"a\"".to_string()));
    assert_eq!(got[4], (TokenKind::String, "\"b\"".to_string()));
}

#[test]
fn unterminated_string_covers_rest_of_line() {
    let lexer = Lexer::diamond();
    let toks = lexer.tokenize_line("bata dost \"oops 12");
    let last = toks.last().unwrap();
    assert_eq!(last.kind, TokenKind::String);
    assert_eq!(last.lexeme, "\"oops 12");
    assert_eq!(last.problem, Some(LexProblem::UnterminatedString));
    assert!(toks[..toks.len() - 1].iter().all(|t| t.problem.is_none()));
}

#[test]
fn cloned_iterator_restarts_from_its_position() {
    let lexer = Lexer::diamond();
    let mut it = lexer.classify("bana dost x");
    it.next();
    let fork = it.clone();
    let rest: Vec<_> = it.map(|t| t.lexeme).collect();
    let again: Vec<_> = fork.map(|t| t.lexeme).collect();
    assert_eq!(rest, again);
    assert_eq!(rest, vec![" ", "dost", " ", "x"]);
}

#[test]
fn classification_is_stateless_across_lines() {
    let lexer = Lexer::diamond();
    let _ = lexer.tokenize_line("bata dost \"never closed");
    assert_eq!(
        lexer.tokenize_line("x\"").first().map(|t| t.kind),
        Some(TokenKind::Identifier)
    );
}

#[test]
fn every_keyword_alone_and_extended() {
    use diamond_playground::core::keywords::DIAMOND_KEYWORDS;
    for kw in DIAMOND_KEYWORDS {
        assert_eq!(kinds(kw), vec![(TokenKind::Keyword, kw.to_string())]);
        for suffix in ["a", "7", "_"] {
            let word = format!("{kw}{suffix}");
            assert_eq!(kinds(&word), vec![(TokenKind::Identifier, word.clone())]);
        }
    }
}

#[test]
fn decimals_split_at_the_dot() {
    assert_eq!(
        kinds("3.14"),
        vec![
            (TokenKind::Number, "3".to_string()),
            (TokenKind::Unclassified, ".".to_string()),
            (TokenKind::Number, "14".to_string()),
        ]
    );
}

/// Tokens tile the line exactly: contiguous, non-empty, nothing left over.
fn tiles(line: &str) -> bool {
    let mut at = 0;
    for tok in Lexer::diamond().classify(line) {
        if tok.span.start != at || tok.lexeme.is_empty() || &line[tok.span.clone()] != tok.lexeme {
            return false;
        }
        at = tok.span.end;
    }
    at == line.len()
}

quickcheck::quickcheck! {
    fn any_line_is_covered(line: String) -> bool {
        tiles(&line)
    }

    // Arbitrary strings rarely contain quotes; bias towards the interesting characters.
    fn dense_lines_are_covered(picks: Vec<u8>) -> bool {
        const ALPHABET: [&str; 12] = ["\"", "a", "_", "7", " ", "\t", "\r", "é", ".", "<", "dost", "bas"];
        let line: String = picks.iter().map(|p| ALPHABET[*p as usize % ALPHABET.len()]).collect();
        tiles(&line)
    }
}
