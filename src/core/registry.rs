//! Language definition registry.
//!
//! A language moves `Unregistered -> Registered -> Active`; only one language
//! is active at a time and `unregister` drops it back to `Unregistered`.
//! [`Registry`] is a plain value for hosts that manage their own state; the
//! process-wide instance behind [`global`] is what the binary uses, filled
//! once at start-up by [`install`] before any line is classified.

use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, info};
use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::core::error::DiamondError;
use crate::core::lexer::Lexer;
use crate::core::theme::Theme;

pub const DIAMOND_LANGUAGE_ID: &str = "diamond";

/// The (identifier, classifier, theme) triple a surface needs to paint text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageDefinition {
    pub id: String,
    pub lexer: Lexer,
    pub theme: Theme,
}

impl LanguageDefinition {
    pub fn new(id: impl Into<String>, lexer: Lexer, theme: Theme) -> Self {
        Self {
            id: id.into(),
            lexer,
            theme,
        }
    }

    pub fn diamond() -> Self {
        Self::new(DIAMOND_LANGUAGE_ID, Lexer::diamond(), Theme::diamond_dark())
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Classifies and paints one line in one step.
    pub fn highlight_line(&self, line: &str) -> String {
        let tokens = self.lexer.tokenize_line(line);
        self.theme.paint_line(&tokens)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageState {
    Unregistered,
    Registered,
    Active,
}

/// Outcome of [`Registry::register`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    Inserted,
    /// Same id, same content; nothing changed.
    Unchanged,
    /// Same id, different content; swapped in place.
    Replaced,
}

#[derive(Debug, Default)]
pub struct Registry {
    languages: HashMap<String, Arc<LanguageDefinition>>,
    active: Option<String>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, definition: LanguageDefinition) -> Registration {
        let id = definition.id.clone();
        let outcome = match self.languages.get(&id) {
            Some(existing) if **existing == definition => Registration::Unchanged,
            Some(_) => Registration::Replaced,
            None => Registration::Inserted,
        };
        if outcome != Registration::Unchanged {
            self.languages.insert(id.clone(), Arc::new(definition));
        }
        debug!("register '{}': {:?}", id, outcome);
        outcome
    }

    pub fn activate(&mut self, id: &str) -> Result<Arc<LanguageDefinition>, DiamondError> {
        let definition = self
            .languages
            .get(id)
            .cloned()
            .ok_or_else(|| DiamondError::NotRegistered(id.to_string()))?;
        if self.active.as_deref() != Some(id) {
            info!("active language: {} (theme {})", id, definition.theme.id());
            self.active = Some(id.to_string());
        }
        Ok(definition)
    }

    /// Removes a definition. If it was active, nothing is active afterwards.
    pub fn unregister(&mut self, id: &str) -> Option<Arc<LanguageDefinition>> {
        let removed = self.languages.remove(id);
        if removed.is_some() && self.active.as_deref() == Some(id) {
            self.active = None;
        }
        debug!("unregister '{}': {}", id, removed.is_some());
        removed
    }

    pub fn state(&self, id: &str) -> LanguageState {
        if !self.languages.contains_key(id) {
            LanguageState::Unregistered
        } else if self.active.as_deref() == Some(id) {
            LanguageState::Active
        } else {
            LanguageState::Registered
        }
    }

    pub fn get(&self, id: &str) -> Option<Arc<LanguageDefinition>> {
        self.languages.get(id).cloned()
    }

    pub fn active(&self) -> Option<Arc<LanguageDefinition>> {
        self.active.as_deref().and_then(|id| self.get(id))
    }

    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.languages.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

static GLOBAL: Lazy<RwLock<Registry>> = Lazy::new(|| RwLock::new(Registry::new()));

pub fn global() -> &'static RwLock<Registry> {
    &GLOBAL
}

/// Registers and activates `definition` in the process-wide registry under a
/// single write lock. Calling it again with the same definition is a no-op.
pub fn install(definition: LanguageDefinition) -> Result<Arc<LanguageDefinition>, DiamondError> {
    let mut registry = GLOBAL.write();
    let id = definition.id.clone();
    registry.register(definition);
    registry.activate(&id)
}

/// Language currently active in the process-wide registry.
pub fn active() -> Option<Arc<LanguageDefinition>> {
    GLOBAL.read().active()
}
