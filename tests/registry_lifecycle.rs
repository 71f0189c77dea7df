use std::sync::Arc;

use diamond_playground::core::error::DiamondError;
use diamond_playground::core::keywords::KeywordSet;
use diamond_playground::core::lexer::Lexer;
use diamond_playground::core::registry::{
    self, LanguageDefinition, LanguageState, Registration, Registry, DIAMOND_LANGUAGE_ID,
};
use diamond_playground::core::theme::{Rgb, Theme};
use diamond_playground::core::token::TokenKind;

#[test]
fn register_activate_unregister() {
    let mut reg = Registry::new();
    assert_eq!(reg.state(DIAMOND_LANGUAGE_ID), LanguageState::Unregistered);

    assert_eq!(reg.register(LanguageDefinition::diamond()), Registration::Inserted);
    assert_eq!(reg.state(DIAMOND_LANGUAGE_ID), LanguageState::Registered);

    let active = reg.activate(DIAMOND_LANGUAGE_ID).unwrap();
    assert_eq!(active.id, DIAMOND_LANGUAGE_ID);
    assert_eq!(reg.state(DIAMOND_LANGUAGE_ID), LanguageState::Active);

    assert!(reg.unregister(DIAMOND_LANGUAGE_ID).is_some());
    assert_eq!(reg.state(DIAMOND_LANGUAGE_ID), LanguageState::Unregistered);
    assert!(reg.active().is_none());
}

#[test]
fn repeated_registration_is_idempotent() {
    let mut reg = Registry::new();
    reg.register(LanguageDefinition::diamond());
    let first = reg.get(DIAMOND_LANGUAGE_ID).unwrap();
    assert_eq!(reg.register(LanguageDefinition::diamond()), Registration::Unchanged);
    assert_eq!(reg.len(), 1);
    assert!(Arc::ptr_eq(&first, &reg.get(DIAMOND_LANGUAGE_ID).unwrap()));
}

#[test]
fn changed_definition_replaces() {
    let mut reg = Registry::new();
    reg.register(LanguageDefinition::diamond());
    reg.activate(DIAMOND_LANGUAGE_ID).unwrap();

    let loud = Theme::diamond_dark().with_rule(TokenKind::Number, Rgb(0xFF, 0, 0), None);
    let def = LanguageDefinition::diamond().with_theme(loud);
    assert_eq!(reg.register(def), Registration::Replaced);
    assert_eq!(reg.state(DIAMOND_LANGUAGE_ID), LanguageState::Active);
    let active = reg.active().unwrap();
    assert_eq!(active.theme.style_for(TokenKind::Number).color, Rgb(0xFF, 0, 0));
}

#[test]
fn activating_unknown_language_fails() {
    let mut reg = Registry::new();
    let err = reg.activate("klingon").unwrap_err();
    assert!(matches!(err, DiamondError::NotRegistered(ref id) if id == "klingon"));
    assert!(reg.active().is_none());
}

#[test]
fn only_one_language_is_active() {
    let mut reg = Registry::new();
    reg.register(LanguageDefinition::diamond());
    reg.register(LanguageDefinition::new(
        "tiny",
        Lexer::new(KeywordSet::new(["yes", "no"])),
        Theme::diamond_dark(),
    ));
    reg.activate("tiny").unwrap();
    reg.activate(DIAMOND_LANGUAGE_ID).unwrap();
    assert_eq!(reg.state("tiny"), LanguageState::Registered);
    assert_eq!(reg.ids(), vec!["diamond", "tiny"]);
}

#[test]
fn global_install_is_repeatable() {
    let a = registry::install(LanguageDefinition::diamond()).unwrap();
    let b = registry::install(LanguageDefinition::diamond()).unwrap();
    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(registry::active().map(|d| d.id.clone()).as_deref(), Some(DIAMOND_LANGUAGE_ID));
    assert_eq!(registry::global().read().state(DIAMOND_LANGUAGE_ID), LanguageState::Active);
}
