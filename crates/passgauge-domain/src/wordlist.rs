use std::collections::BTreeSet;

/// Immutable common-password word set.
///
/// Loaded once and injected into the engine; the domain crate never touches
/// the filesystem itself.
#[derive(Clone, Debug, Default)]
pub struct Wordlist {
    words: BTreeSet<String>,
}

impl Wordlist {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse newline-delimited text: `#` comment lines and blanks are
    /// skipped, entries are trimmed and lower-cased.
    pub fn parse(text: &str) -> Self {
        let words = text
            .lines()
            .map(|line| line.trim().to_lowercase())
            .filter(|w| !w.is_empty() && !w.starts_with('#'))
            .collect();
        Self { words }
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}
