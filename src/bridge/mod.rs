//! Execution bridge: ships a buffer snapshot to the interpreter service and
//! brings back its textual output.
use serde::{Deserialize, Serialize};

use crate::core::error::DiamondError;

pub mod http;
pub use http::{HttpBackend, DEFAULT_ENDPOINT};

pub trait ExecutionBackend: Send + Sync {
    fn name(&self) -> &'static str;
    fn execute(&self, code: &str) -> Result<String, DiamondError>;
}

#[derive(Debug, Serialize)]
pub struct RunRequest<'a> {
    pub code: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct RunResponse {
    pub output: String,
}
