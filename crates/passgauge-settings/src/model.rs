use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use passgauge_domain::Policy;

/// `policy.json` schema v1.
///
/// This is a *user-facing* model: every key is optional so partial files and
/// forward-compat are easy. Unknown keys are dropped silently.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PolicyFileV1 {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strong_length: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forbid_sequences_len: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_repeated_run: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forbid_dictionary: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_classes: Option<usize>,

    /// Case-insensitive tokens the password must not contain.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub banned_words: Vec<String>,

    /// Map of rule name -> enabled. Empty means everything runs.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub enabled_rules: BTreeMap<String, bool>,
}

impl PolicyFileV1 {
    pub fn from_policy(policy: &Policy) -> Self {
        Self {
            min_length: Some(policy.min_length),
            strong_length: Some(policy.strong_length),
            forbid_sequences_len: Some(policy.forbid_sequences_len),
            max_repeated_run: Some(policy.max_repeated_run),
            forbid_dictionary: Some(policy.forbid_dictionary),
            min_classes: Some(policy.min_classes),
            banned_words: policy.banned_words.clone(),
            enabled_rules: policy.enabled_rules.clone(),
        }
    }
}
