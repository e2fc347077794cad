use crate::policy::Policy;
use passgauge_types::{ids, Finding, Severity};
use serde_json::json;

pub fn run(password: &str, policy: &Policy, out: &mut Vec<Finding>) {
    if !policy.rule_enabled(ids::RULE_BANNED_WORDS) || policy.banned_words.is_empty() {
        return;
    }

    let pw_lower = password.to_lowercase();
    for word in &policy.banned_words {
        let needle = word.trim().to_lowercase();
        if !needle.is_empty() && pw_lower.contains(&needle) {
            out.push(Finding {
                code: ids::CODE_BANNED_WORD.to_string(),
                message: format!("Contains a word banned by the policy: '{word}'."),
                severity: Severity::Critical,
                penalty: -40,
                meta: json!({ "word": word }),
            });
            return;
        }
    }
}
