use crate::policy::Policy;
use passgauge_types::{ids, Finding, Severity};
use serde_json::json;

pub fn run(password: &str, policy: &Policy, out: &mut Vec<Finding>) {
    if !policy.rule_enabled(ids::RULE_REPEATS) {
        return;
    }
    if password.is_empty() {
        return;
    }

    let mut longest = 1usize;
    let mut run = 1usize;
    let mut prev: Option<char> = None;
    for c in password.chars() {
        if prev == Some(c) {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 1;
        }
        prev = Some(c);
    }

    if longest > policy.max_repeated_run {
        let (severity, penalty) = if longest <= 4 {
            (Severity::Warning, -10)
        } else {
            (Severity::Critical, -20)
        };
        out.push(Finding {
            code: ids::CODE_REPEAT_RUN.to_string(),
            message: format!("Repeated characters detected (max run = {longest})."),
            severity,
            penalty,
            meta: json!({ "max_run": longest }),
        });
    } else {
        out.push(Finding {
            code: ids::CODE_REPEAT_OK.to_string(),
            message: "No excessive repetition.".to_string(),
            severity: Severity::Info,
            penalty: 0,
            meta: json!({ "max_run": longest }),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(password: &str) -> Vec<Finding> {
        let mut out = Vec::new();
        run(password, &Policy::default(), &mut out);
        out
    }

    #[test]
    fn empty_password_yields_no_findings() {
        assert!(check("").is_empty());
    }

    #[test]
    fn short_run_within_limit_is_ok() {
        let findings = check("aabb");
        assert_eq!(findings[0].code, ids::CODE_REPEAT_OK);
    }

    #[test]
    fn run_of_three_is_a_warning() {
        let findings = check("xaaay");
        assert_eq!(findings[0].code, ids::CODE_REPEAT_RUN);
        assert_eq!(findings[0].severity, Severity::Warning);
        assert_eq!(findings[0].penalty, -10);
        assert_eq!(findings[0].meta["max_run"], 3);
    }

    #[test]
    fn run_over_four_is_critical() {
        let findings = check("aaaaa");
        assert_eq!(findings[0].severity, Severity::Critical);
        assert_eq!(findings[0].penalty, -20);
        assert_eq!(findings[0].meta["max_run"], 5);
    }

    #[test]
    fn respects_policy_max_run() {
        let mut policy = Policy::default();
        policy.max_repeated_run = 4;
        let mut out = Vec::new();
        run("aaaa", &policy, &mut out);
        assert_eq!(out[0].code, ids::CODE_REPEAT_OK);
    }
}
