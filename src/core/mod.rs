//! Core module tree for the Diamond playground.

pub mod diagnostics;
pub mod error;
pub mod keywords;
pub mod lexer;
pub mod registry;
pub mod session;
pub mod theme;
pub mod token;
pub use token::{Token, TokenKind};
