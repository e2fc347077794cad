use crate::policy::Policy;
use passgauge_types::{ids, Finding, Severity};
use serde_json::json;

pub fn run(password: &str, policy: &Policy, out: &mut Vec<Finding>) {
    if !policy.rule_enabled(ids::RULE_LENGTH) {
        return;
    }

    let n = password.chars().count();
    let finding = if n < 8 {
        Finding {
            code: ids::CODE_LEN_TOO_SHORT.to_string(),
            message: "Fewer than 8 characters.".to_string(),
            severity: Severity::Critical,
            penalty: -40,
            meta: json!({ "length": n }),
        }
    } else if n < policy.min_length {
        Finding {
            code: ids::CODE_LEN_WEAK.to_string(),
            message: format!(
                "Length {} is below the recommended minimum ({}).",
                n, policy.min_length
            ),
            severity: Severity::Warning,
            penalty: -20,
            meta: json!({ "length": n, "recommended": policy.min_length }),
        }
    } else if n < policy.strong_length {
        Finding {
            code: ids::CODE_LEN_OK.to_string(),
            message: format!("Decent length ({n}), but {}+ is ideal.", policy.strong_length),
            severity: Severity::Info,
            penalty: 0,
            meta: json!({ "length": n }),
        }
    } else {
        Finding {
            code: ids::CODE_LEN_STRONG.to_string(),
            message: format!("Strong length ({n})."),
            severity: Severity::Info,
            penalty: 0,
            meta: json!({ "length": n }),
        }
    };
    out.push(finding);
}
