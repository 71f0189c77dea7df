// src/core/diagnostics.rs
//! Pretty, colored, file+line diagnostics for lexical problems.

use colored::Colorize;

use crate::core::error::DiamondError;
use crate::core::lexer::Lexer;
use crate::core::token::LexProblem;

pub struct Span {
    pub line: usize,
    pub col: usize,
    pub len: usize, // underline length in chars (use 1 if unknown)
}

/// A lexical problem located in a multi-line source.
#[derive(Debug)]
pub struct Finding {
    pub line: usize,
    pub col: usize,
    pub len: usize,
    pub error: DiamondError,
}

/// Scans every line of `source` and reports tokens that carry a problem.
pub fn scan(lexer: &Lexer, source: &str) -> Vec<Finding> {
    let mut findings = Vec::new();
    for (idx, line) in source.lines().enumerate() {
        for tok in lexer.classify(line) {
            if let Some(LexProblem::UnterminatedString) = tok.problem {
                let col = tok.column(line);
                findings.push(Finding {
                    line: idx + 1,
                    col,
                    len: tok.lexeme.chars().count(),
                    error: DiamondError::UnterminatedString { column: col },
                });
            }
        }
    }
    findings
}

pub fn render_error(filename: &str, source: &str, title: &str, span: &Span) -> String {
    let (ln, col) = (span.line, span.col);
    let line_text = nth_line(source, ln).unwrap_or_default();
    let ln_str = format!("{:>4}", ln);
    let underline = " ".repeat(col.saturating_sub(1)) + &"^".repeat(span.len.max(1));

    let mut out = String::new();
    out.push_str(&format!("{} {}\n", "error:".bright_red().bold(), title.bright_white()));
    out.push_str(&format!(
        "{} {}\n",
        "-->".bright_blue(),
        format!("{}:{}:{}", filename, ln, col).bright_white()
    ));
    out.push_str(&format!(" {} {}\n", ln_str.dimmed(), "|".dimmed()));
    out.push_str(&format!("{} {} {}\n", ln_str.dimmed(), "|".dimmed(), line_text));
    out.push_str(&format!(
        " {} {} {}\n",
        " ".repeat(ln_str.len()).dimmed(),
        "|".dimmed(),
        underline.bright_red()
    ));
    out
}

pub fn print_error(filename: &str, source: &str, title: &str, span: Span) {
    eprintln!("{}", render_error(filename, source, title, &span));
}

fn nth_line(src: &str, n: usize) -> Option<String> {
    src.lines().nth(n.saturating_sub(1)).map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_locates_unterminated_strings() {
        let src = "bana dost a = \"ok\"\nbata dost \"oops\n";
        let findings = scan(&Lexer::diamond(), src);
        assert_eq!(findings.len(), 1);
        assert_eq!((findings[0].line, findings[0].col, findings[0].len), (2, 11, 5));
    }

    #[test]
    fn render_points_at_column() {
        colored::control::set_override(false);
        let out = render_error("demo.dia", "x\nbata \"a", "unterminated string", &Span { line: 2, col: 6, len: 2 });
        assert!(out.contains("demo.dia:2:6"));
        assert!(out.contains("     ^^"));
    }
}
