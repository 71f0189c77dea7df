use std::path::Path;

use anyhow::{bail, Result};
use colored::Colorize;

use super::read_source;
use crate::core::diagnostics::{print_error, scan, Span};
use crate::core::registry::LanguageDefinition;

pub fn main(language: &LanguageDefinition, input: &Path) -> Result<()> {
    let source = read_source(input)?;
    let filename = input.display().to_string();
    let findings = scan(&language.lexer, &source);
    for f in &findings {
        print_error(
            &filename,
            &source,
            &f.error.to_string(),
            Span { line: f.line, col: f.col, len: f.len },
        );
    }
    if !findings.is_empty() {
        bail!("{} unterminated string(s) in {}", findings.len(), filename);
    }
    println!("{} {}: no lexical problems", "ok:".green().bold(), filename);
    Ok(())
}
