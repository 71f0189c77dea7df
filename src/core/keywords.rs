//! Reserved words of the Diamond surface syntax.

use std::collections::HashSet;

/// `kaam` defines a function, `bana` declares, `bata`/`likh` print, `bula`
/// calls, `wapas` returns, `agar`/`warna` branch, `jabtak` loops, `bas` closes
/// a block. `dost` follows nearly every one of them.
pub const DIAMOND_KEYWORDS: &[&str] = &[
    "kaam", "likh", "bas", "wapas", "bana", "bata", "dost", "bula", "agar", "warna", "jabtak",
];

/// Exact, case-sensitive keyword membership. Iteration follows declaration
/// order; duplicates are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSet {
    ordered: Vec<String>,
    lookup: HashSet<String>,
}

impl KeywordSet {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self {
            ordered: Vec::new(),
            lookup: HashSet::new(),
        };
        for word in words {
            let word: String = word.into();
            if set.lookup.insert(word.clone()) {
                set.ordered.push(word);
            }
        }
        set
    }

    pub fn diamond() -> Self {
        Self::new(DIAMOND_KEYWORDS.iter().copied())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.lookup.contains(word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

impl Default for KeywordSet {
    fn default() -> Self {
        Self::diamond()
    }
}
