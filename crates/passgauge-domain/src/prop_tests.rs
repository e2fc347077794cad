//! Property-based tests for the domain crate.
//!
//! Invariants under arbitrary input:
//! - score stays in 0..=100
//! - rules never panic and never exceed one finding each
//! - evaluation is deterministic

use crate::engine::evaluate;
use crate::policy::Policy;
use crate::scoring::label_for;
use crate::wordlist::Wordlist;
use proptest::prelude::*;

fn arb_password() -> impl Strategy<Value = String> {
    prop_oneof![
        // Printable ASCII up to 40 chars.
        prop::string::string_regex("[ -~]{0,40}").unwrap(),
        // Arbitrary unicode, including the empty string.
        prop::collection::vec(any::<char>(), 0..24).prop_map(|cs| cs.into_iter().collect()),
    ]
}

proptest! {
    #[test]
    fn score_is_always_in_bounds(password in arb_password()) {
        let wordlist = Wordlist::parse("password\nqwerty\nletmein\n");
        let report = evaluate(&password, &Policy::default(), &wordlist);
        prop_assert!(report.score <= 100);
        // Labels partition the whole range.
        let label = label_for(report.score);
        prop_assert!(["Very Weak", "Weak", "Fair", "Strong", "Very Strong"].contains(&label));
    }

    #[test]
    fn each_rule_emits_at_most_one_finding(password in arb_password()) {
        let wordlist = Wordlist::parse("password\n");
        let report = evaluate(&password, &Policy::default(), &wordlist);
        // Six rules, each 0 or 1 findings for this policy.
        prop_assert!(report.findings.len() <= 6);
        for finding in &report.findings {
            prop_assert!(finding.penalty <= 0);
        }
    }

    #[test]
    fn evaluation_is_deterministic(password in arb_password()) {
        let wordlist = Wordlist::parse("password\nqwerty\n");
        let policy = Policy::default();
        let a = evaluate(&password, &policy, &wordlist);
        let b = evaluate(&password, &policy, &wordlist);
        prop_assert_eq!(a.score, b.score);
        prop_assert_eq!(a.findings, b.findings);
        prop_assert_eq!(a.policy_violations, b.policy_violations);
    }

    #[test]
    fn short_passwords_never_score_above_thirty(password in "[ -~]{0,7}") {
        let report = evaluate(&password, &Policy::default(), &Wordlist::empty());
        prop_assert!(report.score <= 30, "score {} for {:?}", report.score, password);
    }

    #[test]
    fn estimates_always_have_four_rows(password in arb_password()) {
        let report = evaluate(&password, &Policy::default(), &Wordlist::empty());
        prop_assert_eq!(report.estimates.len(), 4);
        for row in &report.estimates {
            prop_assert!(row.seconds >= 0.0);
            prop_assert!(!row.time.is_empty());
        }
    }
}
