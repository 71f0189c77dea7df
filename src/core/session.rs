//! Playground session: the buffer, the output pane, and run/clear control.
//!
//! Runs execute on a worker thread against a snapshot of the buffer. Every
//! `run` and every `clear` bumps the session generation; a completion is only
//! applied if it carries the current generation, so a response that arrives
//! after a clear or a newer run is dropped instead of repopulating output.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use log::{debug, info};

use crate::bridge::ExecutionBackend;
use crate::core::error::DiamondError;
use crate::core::registry::LanguageDefinition;

pub const OUTPUT_BANNER: &str = "Shandaar diamond 🎉";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputState {
    Empty,
    Pending { generation: u64 },
    Output(String),
    Error(String),
}

impl OutputState {
    pub fn is_pending(&self) -> bool {
        matches!(self, OutputState::Pending { .. })
    }

    /// What the output pane shows. Empty output shows nothing, not the banner.
    pub fn render(&self) -> String {
        match self {
            OutputState::Empty => String::new(),
            OutputState::Pending { generation } => format!("running #{generation}…"),
            OutputState::Output(text) if text.is_empty() => String::new(),
            OutputState::Output(text) => format!("{OUTPUT_BANNER}\n{text}"),
            OutputState::Error(msg) => format!("error: {msg}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunTicket {
    pub generation: u64,
}

#[derive(Debug)]
pub struct Completion {
    pub generation: u64,
    pub result: Result<String, DiamondError>,
}

pub struct Playground {
    language: Arc<LanguageDefinition>,
    backend: Arc<dyn ExecutionBackend>,
    buffer: String,
    output: OutputState,
    generation: u64,
    tx: Sender<Completion>,
    rx: Receiver<Completion>,
    stale_discards: usize,
}

impl Playground {
    pub fn new(language: Arc<LanguageDefinition>, backend: Arc<dyn ExecutionBackend>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            language,
            backend,
            buffer: String::new(),
            output: OutputState::Empty,
            generation: 0,
            tx,
            rx,
            stale_discards: 0,
        }
    }

    pub fn language(&self) -> &LanguageDefinition {
        &self.language
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn set_buffer(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
    }

    /// Appends one line and returns it painted. Only this line is classified.
    pub fn push_line(&mut self, line: &str) -> String {
        if !self.buffer.is_empty() && !self.buffer.ends_with('\n') {
            self.buffer.push('\n');
        }
        self.buffer.push_str(line);
        self.language.highlight_line(line)
    }

    /// Whole buffer, painted line by line.
    pub fn highlight(&self) -> String {
        self.buffer
            .lines()
            .map(|line| self.language.highlight_line(line))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn output(&self) -> &OutputState {
        &self.output
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn stale_discards(&self) -> usize {
        self.stale_discards
    }

    /// Sends a snapshot of the buffer to the backend without blocking.
    pub fn run(&mut self) -> RunTicket {
        self.generation += 1;
        let generation = self.generation;
        let snapshot = self.buffer.clone();
        let backend = Arc::clone(&self.backend);
        let tx = self.tx.clone();
        info!("run #{} via {} ({} bytes)", generation, backend.name(), snapshot.len());
        self.output = OutputState::Pending { generation };
        thread::spawn(move || {
            let result = backend.execute(&snapshot);
            // The session may be gone by now; nothing to deliver to.
            let _ = tx.send(Completion { generation, result });
        });
        RunTicket { generation }
    }

    /// Empties buffer and output and invalidates any run in flight.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.buffer.clear();
        self.output = OutputState::Empty;
        debug!("clear -> generation {}", self.generation);
    }

    /// Applies one completion if it belongs to the current run.
    pub fn apply(&mut self, completion: Completion) -> Result<&OutputState, DiamondError> {
        let current = self.generation;
        if !self.output.is_pending() || completion.generation != current {
            self.stale_discards += 1;
            debug!("dropping response for run #{} (current #{})", completion.generation, current);
            return Err(DiamondError::StaleResponse {
                generation: completion.generation,
                current,
            });
        }
        self.output = match completion.result {
            Ok(text) => OutputState::Output(text),
            Err(e) => OutputState::Error(e.to_string()),
        };
        Ok(&self.output)
    }

    /// Drains finished runs. Returns true if the current run settled.
    pub fn poll(&mut self) -> bool {
        let mut settled = false;
        while let Ok(completion) = self.rx.try_recv() {
            settled |= self.apply(completion).is_ok();
        }
        settled
    }

    /// Blocks until the current run settles or `timeout` passes.
    pub fn wait(&mut self, timeout: Duration) -> &OutputState {
        let deadline = Instant::now() + timeout;
        while self.output.is_pending() {
            let left = deadline.saturating_duration_since(Instant::now());
            match self.rx.recv_timeout(left) {
                Ok(completion) => {
                    let _ = self.apply(completion);
                }
                Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => break,
            }
        }
        &self.output
    }
}
