use std::collections::BTreeMap;

/// When to count findings against compliance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailOn {
    /// Only critical findings break compliance.
    #[default]
    Critical,
    /// Warnings break compliance too (strict mode).
    Warning,
}

/// Threshold and rule-selection configuration for one evaluation.
///
/// Immutable once constructed; the engine only reads it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Policy {
    /// Recommended minimum length; below it `LEN_WEAK` fires.
    pub min_length: usize,
    /// Length considered strong; at or above it `LEN_STRONG` fires.
    pub strong_length: usize,
    /// Window length for the ascending/descending sequence scan.
    pub forbid_sequences_len: usize,
    /// Longest tolerated run of one repeated character.
    pub max_repeated_run: usize,
    /// Whether the dictionary rule runs at all.
    pub forbid_dictionary: bool,
    /// Recommended number of character classes (carried for policy files;
    /// the charset rule buckets are fixed).
    pub min_classes: usize,
    /// Case-insensitive substrings that immediately fail the password.
    pub banned_words: Vec<String>,
    /// Rule name -> enabled. Empty map means everything runs; an absent
    /// name defaults to enabled.
    pub enabled_rules: BTreeMap<String, bool>,
    pub fail_on: FailOn,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            min_length: 12,
            strong_length: 16,
            forbid_sequences_len: 4,
            max_repeated_run: 2,
            forbid_dictionary: true,
            min_classes: 3,
            banned_words: Vec::new(),
            enabled_rules: BTreeMap::new(),
            fail_on: FailOn::Critical,
        }
    }
}

impl Policy {
    pub fn rule_enabled(&self, name: &str) -> bool {
        self.enabled_rules.get(name).copied().unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_map_enables_everything() {
        let policy = Policy::default();
        assert!(policy.rule_enabled("length"));
        assert!(policy.rule_enabled("dictionary"));
    }

    #[test]
    fn absent_name_defaults_to_enabled() {
        let mut policy = Policy::default();
        policy.enabled_rules.insert("dictionary".to_string(), false);
        assert!(!policy.rule_enabled("dictionary"));
        assert!(policy.rule_enabled("length"));
    }
}
