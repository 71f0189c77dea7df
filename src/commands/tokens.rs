use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use super::read_source;
use crate::core::registry::LanguageDefinition;

#[derive(Debug, Serialize)]
pub struct TokenRecord<'a> {
    pub line: usize,
    pub column: usize,
    pub kind: &'static str,
    pub lexeme: &'a str,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub unterminated: bool,
}

pub fn records<'a>(language: &LanguageDefinition, source: &'a str) -> Vec<TokenRecord<'a>> {
    let mut out = Vec::new();
    for (idx, line) in source.lines().enumerate() {
        for tok in language.lexer.classify(line) {
            out.push(TokenRecord {
                line: idx + 1,
                column: tok.column(line),
                kind: tok.kind.name(),
                lexeme: tok.lexeme,
                unterminated: tok.problem.is_some(),
            });
        }
    }
    out
}

/// One token per output line: `line:col kind "lexeme"`.
pub fn render_plain(language: &LanguageDefinition, source: &str) -> String {
    records(language, source)
        .iter()
        .map(|r| {
            let mut row = format!("{}:{} {} {:?}", r.line, r.column, r.kind, r.lexeme);
            if r.unterminated {
                row.push_str(" (unterminated)");
            }
            row
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_json(language: &LanguageDefinition, source: &str) -> Result<String> {
    Ok(serde_json::to_string_pretty(&records(language, source))?)
}

pub fn main(language: &LanguageDefinition, input: &Path, json: bool) -> Result<()> {
    let source = read_source(input)?;
    if json {
        println!("{}", render_json(language, &source)?);
    } else {
        println!("{}", render_plain(language, &source));
    }
    Ok(())
}
