//! Playground configuration: built-in defaults + optional TOML file.
//!
//! ```toml
//! [bridge]
//! endpoint = "http://localhost:5000/run"
//! timeout_secs = 10
//!
//! [theme]
//! id = "my-theme"          # optional; overridden themes default to "diamond-dark-custom"
//! foreground = "#FFFFFF"
//! background = "#1E1E1E"
//!
//! [[theme.rules]]
//! token = "keyword"
//! foreground = "FFA500"
//! font_style = "bold"
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use log::warn;
use serde::Deserialize;

use crate::bridge::DEFAULT_ENDPOINT;
use crate::core::registry::LanguageDefinition;
use crate::core::theme::{FontWeight, Rgb, Theme, CUSTOM_THEME_ID};
use crate::core::token::TokenKind;
use crate::core::error::DiamondError;

pub const ENDPOINT_ENV: &str = "DIAMOND_ENDPOINT";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlaygroundConfig {
    pub bridge: BridgeConfig,
    pub theme: ThemeConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub id: Option<String>,
    pub foreground: Option<String>,
    pub background: Option<String>,
    pub rules: Vec<ThemeRuleConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ThemeRuleConfig {
    pub token: String,
    pub foreground: String,
    #[serde(default)]
    pub font_style: Option<String>,
}

impl PlaygroundConfig {
    pub fn from_toml_str(txt: &str) -> Result<Self> {
        Ok(toml::from_str(txt)?)
    }

    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let txt = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_toml_str(&txt).with_context(|| format!("parsing {}", path.display()))
    }

    /// Explicit path must load; otherwise ~/.diamond/playground.toml if present
    /// (falling back to built-ins with a warning); otherwise built-ins.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(p) = explicit {
            if !p.exists() {
                bail!("config path not found: {}", p.display());
            }
            return Self::from_toml_file(p);
        }
        if let Some(p) = default_config_path() {
            if p.exists() {
                match Self::from_toml_file(&p) {
                    Ok(cfg) => return Ok(cfg),
                    Err(e) => warn!("failed loading {}, using built-in settings: {e:#}", p.display()),
                }
            }
        }
        Ok(Self::default())
    }

    /// `DIAMOND_ENDPOINT` wins over the file.
    pub fn endpoint(&self) -> String {
        std::env::var(ENDPOINT_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| self.bridge.endpoint.clone())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.bridge.timeout_secs.max(1))
    }

    /// The built-in dark theme with this file's overrides applied on top.
    pub fn theme(&self) -> Result<Theme, DiamondError> {
        let mut theme = Theme::diamond_dark();
        let fg = match &self.theme.foreground {
            Some(c) => c.parse::<Rgb>()?,
            None => theme.foreground(),
        };
        let bg = match &self.theme.background {
            Some(c) => c.parse::<Rgb>()?,
            None => theme.background(),
        };
        theme = theme.with_base(fg, bg);
        for rule in &self.theme.rules {
            let kind = TokenKind::from_name(&rule.token)
                .ok_or_else(|| DiamondError::UnknownTokenKind(rule.token.clone()))?;
            let color = rule.foreground.parse::<Rgb>()?;
            let weight = rule
                .font_style
                .as_deref()
                .map(str::parse::<FontWeight>)
                .transpose()?;
            theme = theme.with_rule(kind, color, weight);
        }
        if let Some(id) = &self.theme.id {
            theme = theme.with_id(id.clone());
        } else if theme != Theme::diamond_dark() {
            theme = theme.with_id(CUSTOM_THEME_ID);
        }
        Ok(theme)
    }

    pub fn language(&self) -> Result<LanguageDefinition> {
        let theme = self.theme().context("invalid [theme] section")?;
        Ok(LanguageDefinition::diamond().with_theme(theme))
    }
}

/// ~/.diamond/playground.toml
pub fn default_config_path() -> Option<PathBuf> {
    dirs_next::home_dir().map(|h| h.join(".diamond").join("playground.toml"))
}
