use crate::policy::Policy;
use passgauge_types::{ids, Finding, Severity};
use serde_json::json;

const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";

fn has_sequence(password: &str, k: usize) -> bool {
    if k <= 1 || password.chars().count() < k {
        return false;
    }

    let lower = password.to_lowercase();
    let scan = |pool: &str| {
        pool.as_bytes().windows(k).any(|window| {
            let seq = std::str::from_utf8(window).unwrap_or_default();
            let rev: String = seq.chars().rev().collect();
            lower.contains(seq) || lower.contains(&rev)
        })
    };

    scan(ALPHABET) || scan(DIGITS)
}

pub fn run(password: &str, policy: &Policy, out: &mut Vec<Finding>) {
    if !policy.rule_enabled(ids::RULE_SEQUENCES) {
        return;
    }

    let k = policy.forbid_sequences_len;
    if has_sequence(password, k) {
        out.push(Finding {
            code: ids::CODE_SEQUENCE.to_string(),
            message: format!("Sequence detected (e.g. 1234/abcd) of {k}+ characters."),
            severity: Severity::Warning,
            penalty: -15,
            meta: json!({ "sequence_len": k }),
        });
    } else {
        out.push(Finding {
            code: ids::CODE_SEQUENCE_OK.to_string(),
            message: "No simple sequence detected.".to_string(),
            severity: Severity::Info,
            penalty: 0,
            meta: json!({ "sequence_len": k }),
        });
    }
}
