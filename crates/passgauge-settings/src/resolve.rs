use crate::model::PolicyFileV1;
use passgauge_domain::{FailOn, Policy};

/// CLI-level knobs; they take precedence over the policy file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub min_length: Option<usize>,
    pub strong_length: Option<usize>,
    /// Treat warnings as non-compliant.
    pub strict: bool,
}

/// Defaults <- policy file <- CLI overrides, in that order.
pub fn resolve_policy(file: PolicyFileV1, overrides: Overrides) -> Policy {
    let mut policy = Policy::default();

    if let Some(v) = file.min_length {
        policy.min_length = v;
    }
    if let Some(v) = file.strong_length {
        policy.strong_length = v;
    }
    if let Some(v) = file.forbid_sequences_len {
        policy.forbid_sequences_len = v;
    }
    if let Some(v) = file.max_repeated_run {
        policy.max_repeated_run = v;
    }
    if let Some(v) = file.forbid_dictionary {
        policy.forbid_dictionary = v;
    }
    if let Some(v) = file.min_classes {
        policy.min_classes = v;
    }
    policy.banned_words = file.banned_words;
    policy.enabled_rules = file.enabled_rules;

    if let Some(v) = overrides.min_length {
        policy.min_length = v;
    }
    if let Some(v) = overrides.strong_length {
        policy.strong_length = v;
    }
    if overrides.strict {
        policy.fail_on = FailOn::Warning;
    }

    policy
}
