pub mod check;
pub mod export;
pub mod highlight;
pub mod run;
pub mod tokens;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

pub(crate) fn read_source(input: &Path) -> Result<String> {
    fs::read_to_string(input).with_context(|| format!("reading {}", input.display()))
}
