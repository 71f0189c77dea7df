use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

use crate::bridge::{ExecutionBackend, HttpBackend};
use crate::config::PlaygroundConfig;
use crate::core::registry::LanguageDefinition;
use crate::core::session::{OutputState, Playground};
use crate::core::token::TokenKind;

/// Word sequences that open a block. Branches inside a block (`nahi to dost`,
/// `warna dost`) do not; one `bas dost` closes the whole block.
const BLOCK_STARTERS: &[&[&str]] = &[
    &["kaam", "dost"],
    &["agar", "dost"],
    &["jabtak", "dost"],
    &["jab", "tak", "dost"],
    &["ghum", "dost"],
];

pub fn start(
    language: Arc<LanguageDefinition>,
    config: &PlaygroundConfig,
    endpoint: Option<String>,
) -> anyhow::Result<()> {
    set_console_title();
    let endpoint = endpoint.unwrap_or_else(|| config.endpoint());
    let backend: Arc<dyn ExecutionBackend> = Arc::new(HttpBackend::new(endpoint.clone(), config.timeout())?);
    let mut playground = Playground::new(language, backend);

    banner(&endpoint);
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_shell(&mut playground, stdin.lock(), stdout.lock(), config.timeout())
}

/// Line-mode surface over any reader/writer pair. Plain lines go into the
/// buffer and are echoed highlighted; `:`-commands drive run/clear.
pub fn run_shell<R: BufRead, W: Write>(
    playground: &mut Playground,
    input: R,
    mut out: W,
    wait_timeout: std::time::Duration,
) -> anyhow::Result<()> {
    let mut in_block = false;
    let mut lines = input.lines();
    loop {
        if playground.poll() {
            print_output(&mut out, playground.output())?;
        }
        write!(out, "{}", prompt(in_block))?;
        out.flush().ok();

        let line = match lines.next() {
            Some(line) => line?,
            None => {
                writeln!(out)?;
                break;
            }
        };
        let trimmed = line.trim();
        if trimmed == "exit dost" {
            break;
        }

        match trimmed {
            ":quit" | ":q" => break,
            ":help" | ":h" => print_help(&mut out)?,
            ":run" | ":r" => {
                let ticket = playground.run();
                writeln!(out, "{}", format!("running #{}…", ticket.generation).truecolor(130, 0, 200))?;
            }
            ":wait" | ":w" => {
                let settled = playground.wait(wait_timeout).clone();
                print_output(&mut out, &settled)?;
            }
            ":clear" | ":c" => {
                playground.clear();
                in_block = false;
                writeln!(out, "{}", "cleared".dimmed())?;
            }
            ":show" | ":s" => {
                if !playground.buffer().is_empty() {
                    writeln!(out, "{}", playground.highlight())?;
                }
                print_output(&mut out, playground.output())?;
            }
            ":tokens" | ":t" => {
                let source = playground.buffer().to_string();
                writeln!(out, "{}", crate::commands::tokens::render_plain(playground.language(), &source))?;
            }
            cmd if cmd.starts_with(':') => {
                writeln!(out, "{} unknown command {} (try :help)", "err:".red().bold(), cmd)?;
            }
            _ => {
                in_block = block_after(playground.language(), in_block, &line);
                let painted = playground.push_line(&line);
                writeln!(out, "{painted}")?;
            }
        }
    }

    // Do not leave a run dangling when input ends.
    if playground.output().is_pending() {
        let settled = playground.wait(wait_timeout).clone();
        print_output(&mut out, &settled)?;
    }
    Ok(())
}

fn print_output<W: Write>(out: &mut W, state: &OutputState) -> io::Result<()> {
    let shown = state.render();
    if shown.is_empty() {
        return Ok(());
    }
    match state {
        OutputState::Error(_) => writeln!(out, "{}", shown.red()),
        _ => writeln!(out, "{shown}"),
    }
}

fn prompt(in_block: bool) -> String {
    if in_block {
        format!("{} ", "...".truecolor(190, 190, 200))
    } else {
        format!("{} ", ">>>".truecolor(255, 165, 0).bold())
    }
}

/// Whether the shell is inside a block after `line`. Blocks do not nest:
/// a starter only counts outside a block and `bas dost` alone closes it.
fn block_after(language: &LanguageDefinition, in_block: bool, line: &str) -> bool {
    let words: Vec<&str> = language
        .lexer
        .classify(line)
        .filter(|t| t.kind != TokenKind::Whitespace)
        .map(|t| t.lexeme)
        .collect();
    if in_block {
        words != ["bas", "dost"]
    } else {
        BLOCK_STARTERS.iter().any(|starter| words.starts_with(starter))
    }
}

fn banner(endpoint: &str) {
    println!("{}", "💎 Diamond playground".bold().truecolor(255, 165, 0));
    println!(
        "{} {}",
        "interpreter:".truecolor(190, 190, 200),
        endpoint.truecolor(120, 220, 232)
    );
    println!("Type {} for commands, {} to quit.\n", ":help".bold(), "exit dost".bold());
}

fn print_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "Commands".bold())?;
    writeln!(out, "  :run    (:r)   send the buffer to the interpreter")?;
    writeln!(out, "  :wait   (:w)   block until the current run finishes")?;
    writeln!(out, "  :clear  (:c)   empty buffer and output, drop pending runs")?;
    writeln!(out, "  :show   (:s)   print the buffer and the output pane")?;
    writeln!(out, "  :tokens (:t)   dump classified tokens of the buffer")?;
    writeln!(out, "  :quit   (:q)   leave (also: exit dost)")?;
    writeln!(out, "Any other line is appended to the buffer.")
}

fn set_console_title() {
    use crossterm::{execute, terminal::SetTitle};
    let _ = execute!(std::io::stdout(), SetTitle("Diamond Playground"));
}
