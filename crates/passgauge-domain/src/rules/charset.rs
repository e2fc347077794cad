use crate::policy::Policy;
use passgauge_types::{ids, Finding, Severity};
use serde_json::json;

pub fn run(password: &str, policy: &Policy, out: &mut Vec<Finding>) {
    if !policy.rule_enabled(ids::RULE_CHARSET) {
        return;
    }

    let has_lower = password.chars().any(|c| c.is_lowercase());
    let has_upper = password.chars().any(|c| c.is_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password.chars().any(|c| c.is_ascii_punctuation());

    let classes = [has_lower, has_upper, has_digit, has_symbol]
        .iter()
        .filter(|&&b| b)
        .count();

    let finding = if classes <= 1 {
        Finding {
            code: ids::CODE_CHARSET_POOR.to_string(),
            message: "Very low diversity (one character class).".to_string(),
            severity: Severity::Critical,
            penalty: -30,
            meta: json!({ "classes": classes }),
        }
    } else if classes == 2 {
        Finding {
            code: ids::CODE_CHARSET_LIMITED.to_string(),
            message: "Limited diversity (two character classes).".to_string(),
            severity: Severity::Warning,
            penalty: -15,
            meta: json!({ "classes": classes }),
        }
    } else {
        Finding {
            code: ids::CODE_CHARSET_GOOD.to_string(),
            message: format!("Good diversity ({classes} character classes)."),
            severity: Severity::Info,
            penalty: 0,
            meta: json!({ "classes": classes }),
        }
    };
    out.push(finding);
}
