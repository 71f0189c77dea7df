use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Result};

use super::read_source;
use crate::bridge::HttpBackend;
use crate::config::PlaygroundConfig;
use crate::core::registry::LanguageDefinition;
use crate::core::session::{OutputState, Playground};

pub fn main(
    language: Arc<LanguageDefinition>,
    config: &PlaygroundConfig,
    input: &Path,
    endpoint: Option<String>,
) -> Result<()> {
    let source = read_source(input)?;
    let endpoint = endpoint.unwrap_or_else(|| config.endpoint());
    let backend = HttpBackend::new(endpoint.clone(), config.timeout())?;

    let mut playground = Playground::new(language, Arc::new(backend));
    playground.set_buffer(source);
    playground.run();

    // The client timeout bounds the worker; the extra second covers the hand-off.
    match playground.wait(config.timeout() + Duration::from_secs(1)) {
        OutputState::Error(msg) => bail!("{msg}"),
        OutputState::Pending { .. } => bail!("no response from {endpoint}"),
        settled => {
            let shown = settled.render();
            if !shown.is_empty() {
                println!("{shown}");
            }
            Ok(())
        }
    }
}
