//! Token category → display style mapping.
//!
//! - `Theme::diamond_dark()` → the built-in dark palette
//! - `Theme::style_for(kind)` → total over every `TokenKind`
//! - `Theme::paint_line(tokens)` → ANSI-colored rendering of one line
//! - `Theme::to_monaco_json()` → `defineTheme` payload for Monaco hosts

use std::fmt;
use std::str::FromStr;

use colored::{ColoredString, Colorize};
use serde_json::{json, Value};

use crate::core::error::DiamondError;
use crate::core::token::{Token, TokenKind};

pub const DIAMOND_DARK_THEME_ID: &str = "diamond-dark";
/// Id given to `diamond-dark` once a config file has changed any of its colors.
pub const CUSTOM_THEME_ID: &str = "diamond-dark-custom";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Uppercase hex without the leading `#` (`FFA500`).
    pub fn hex(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl FromStr for Rgb {
    type Err = DiamondError;

    /// Accepts `FFA500` and `#ffa500`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(DiamondError::InvalidColor(s.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| DiamondError::InvalidColor(s.to_string()))
        };
        Ok(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.hex())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FromStr for FontWeight {
    type Err = DiamondError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "normal" => Ok(FontWeight::Normal),
            "bold" => Ok(FontWeight::Bold),
            _ => Err(DiamondError::UnknownFontStyle(s.to_string())),
        }
    }
}

/// Resolved style for one token category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub color: Rgb,
    pub weight: FontWeight,
}

impl Style {
    pub fn paint(&self, text: &str) -> ColoredString {
        let Rgb(r, g, b) = self.color;
        let painted = text.truecolor(r, g, b);
        match self.weight {
            FontWeight::Bold => painted.bold(),
            FontWeight::Normal => painted,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeRule {
    pub kind: TokenKind,
    pub foreground: Rgb,
    pub weight: Option<FontWeight>,
}

/// Immutable once built; categories without a rule fall back to the base
/// foreground.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    id: String,
    foreground: Rgb,
    background: Rgb,
    rules: Vec<ThemeRule>,
}

impl Theme {
    pub fn new(id: impl Into<String>, foreground: Rgb, background: Rgb) -> Self {
        Self {
            id: id.into(),
            foreground,
            background,
            rules: Vec::new(),
        }
    }

    pub fn diamond_dark() -> Self {
        Self::new(DIAMOND_DARK_THEME_ID, Rgb(0xFF, 0xFF, 0xFF), Rgb(0x1E, 0x1E, 0x1E))
            .with_rule(TokenKind::Keyword, Rgb(0xFF, 0xA5, 0x00), Some(FontWeight::Bold))
            .with_rule(TokenKind::Identifier, Rgb(0xA9, 0xDC, 0x76), None)
            .with_rule(TokenKind::Number, Rgb(0xFF, 0xD8, 0x66), None)
            .with_rule(TokenKind::String, Rgb(0x78, 0xDC, 0xE8), None)
    }

    /// Adds a rule, replacing any earlier rule for the same category in place.
    pub fn with_rule(mut self, kind: TokenKind, foreground: Rgb, weight: Option<FontWeight>) -> Self {
        let rule = ThemeRule { kind, foreground, weight };
        match self.rules.iter_mut().find(|r| r.kind == kind) {
            Some(slot) => *slot = rule,
            None => self.rules.push(rule),
        }
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_base(mut self, foreground: Rgb, background: Rgb) -> Self {
        self.foreground = foreground;
        self.background = background;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn foreground(&self) -> Rgb {
        self.foreground
    }

    pub fn background(&self) -> Rgb {
        self.background
    }

    pub fn rules(&self) -> &[ThemeRule] {
        &self.rules
    }

    pub fn style_for(&self, kind: TokenKind) -> Style {
        let neutral = Style {
            color: self.foreground,
            weight: FontWeight::Normal,
        };
        if matches!(kind, TokenKind::Whitespace | TokenKind::Unclassified) {
            return neutral;
        }
        self.rules
            .iter()
            .find(|r| r.kind == kind)
            .map(|r| Style {
                color: r.foreground,
                weight: r.weight.unwrap_or_default(),
            })
            .unwrap_or(neutral)
    }

    /// Repaints a whole line. Whitespace is emitted untouched.
    pub fn paint_line(&self, tokens: &[Token<'_>]) -> String {
        let mut out = String::new();
        for tok in tokens {
            if tok.kind == TokenKind::Whitespace {
                out.push_str(tok.lexeme);
            } else {
                out.push_str(&self.style_for(tok.kind).paint(tok.lexeme).to_string());
            }
        }
        out
    }

    pub fn to_monaco_json(&self) -> Value {
        let rules: Vec<Value> = self
            .rules
            .iter()
            .map(|r| {
                let mut rule = json!({
                    "token": r.kind.name(),
                    "foreground": r.foreground.hex(),
                });
                if r.weight == Some(FontWeight::Bold) {
                    rule["fontStyle"] = json!("bold");
                }
                rule
            })
            .collect();
        json!({
            "base": "vs-dark",
            "inherit": true,
            "rules": rules,
            "colors": {
                "editor.foreground": self.foreground.to_string(),
                "editor.background": self.background.to_string(),
            }
        })
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::diamond_dark()
    }
}
