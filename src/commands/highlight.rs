use std::path::Path;

use anyhow::Result;

use super::read_source;
use crate::core::registry::LanguageDefinition;

pub fn main(language: &LanguageDefinition, input: &Path) -> Result<()> {
    let source = read_source(input)?;
    for line in source.lines() {
        println!("{}", language.highlight_line(line));
    }
    Ok(())
}
