use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::core::registry::LanguageDefinition;
use crate::io::atomic_write;

/// Writes `<id>.monarch.json` and `<theme>.theme.json` into `out`.
pub fn write_definitions(language: &LanguageDefinition, out: &Path) -> Result<Vec<PathBuf>> {
    let monarch = out.join(format!("{}.monarch.json", language.id));
    let theme = out.join(format!("{}.theme.json", language.theme.id()));

    let files = [
        (monarch, serde_json::to_string_pretty(&language.lexer.to_monarch_json())?),
        (theme, serde_json::to_string_pretty(&language.theme.to_monaco_json())?),
    ];
    let mut written = Vec::with_capacity(files.len());
    for (path, body) in files {
        atomic_write(&path, body + "\n").with_context(|| format!("writing {}", path.display()))?;
        written.push(path);
    }
    Ok(written)
}

pub fn main(language: &LanguageDefinition, out: &Path) -> Result<()> {
    for path in write_definitions(language, out)? {
        println!("wrote {}", path.display());
    }
    Ok(())
}
