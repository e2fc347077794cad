//! Policy file parsing and resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves policy
//! provided as strings. Reading files is the caller's job.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::PolicyFileV1;
pub use resolve::{resolve_policy, Overrides};

use passgauge_domain::Policy;

/// Loading a policy file can fail; evaluation itself cannot.
#[derive(Debug, thiserror::Error)]
pub enum PolicyLoadError {
    #[error("policy file is not a JSON object")]
    NotAnObject,
    #[error("malformed policy JSON: {0}")]
    Parse(#[source] serde_json::Error),
}

/// Parse `policy.json` (or equivalent) into a typed model.
///
/// Unknown keys are ignored; missing keys fall back to defaults at
/// resolution time.
pub fn parse_policy_json(input: &str) -> Result<PolicyFileV1, PolicyLoadError> {
    let value: serde_json::Value =
        serde_json::from_str(input).map_err(PolicyLoadError::Parse)?;
    if !value.is_object() {
        return Err(PolicyLoadError::NotAnObject);
    }
    serde_json::from_value(value).map_err(PolicyLoadError::Parse)
}

/// Serialize a resolved policy back into its file representation.
pub fn policy_to_json(policy: &Policy) -> String {
    let file = PolicyFileV1::from_policy(policy);
    // A struct of scalars, vecs, and string maps cannot fail to serialize.
    serde_json::to_string_pretty(&file).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_parses_to_all_defaults() {
        let file = parse_policy_json("{}").expect("parse");
        assert_eq!(file, PolicyFileV1::default());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let file = parse_policy_json(r#"{"min_length": 10, "never_heard_of_it": true}"#)
            .expect("parse");
        assert_eq!(file.min_length, Some(10));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = parse_policy_json("{oops").unwrap_err();
        assert!(matches!(err, PolicyLoadError::Parse(_)));
    }

    #[test]
    fn non_object_top_level_is_rejected() {
        let err = parse_policy_json("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, PolicyLoadError::NotAnObject));
    }

    #[test]
    fn wrong_typed_field_is_a_parse_error() {
        let err = parse_policy_json(r#"{"min_length": "twelve"}"#).unwrap_err();
        assert!(matches!(err, PolicyLoadError::Parse(_)));
    }

    #[test]
    fn policy_round_trips_through_json() {
        let text = r#"{
            "min_length": 10,
            "strong_length": 20,
            "forbid_sequences_len": 5,
            "max_repeated_run": 3,
            "forbid_dictionary": false,
            "min_classes": 2,
            "banned_words": ["acme", "Initech"],
            "enabled_rules": {"sequences": false}
        }"#;
        let file = parse_policy_json(text).expect("parse");
        let policy = resolve_policy(file, Overrides::default());

        let saved = policy_to_json(&policy);
        let reloaded = resolve_policy(
            parse_policy_json(&saved).expect("reparse"),
            Overrides::default(),
        );
        assert_eq!(reloaded, policy);
    }
}
