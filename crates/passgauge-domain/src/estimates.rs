//! Rough crack-time projections under fixed attacker scenarios.
//!
//! Keyspace is exact (big integer); the score factor and pattern multipliers
//! then shrink it in floating point. None of this models a real attacker;
//! the point is order-of-magnitude feedback.

use num_bigint::BigUint;
use num_traits::ToPrimitive;
use passgauge_types::{ids, EstimateRow, Finding};

#[derive(Clone, Copy, Debug)]
pub struct CrackScenario {
    pub name: &'static str,
    pub guesses_per_second: f64,
}

pub const DEFAULT_SCENARIOS: [CrackScenario; 4] = [
    CrackScenario {
        name: "Online (throttled ~10/s)",
        guesses_per_second: 10.0,
    },
    CrackScenario {
        name: "Online (unthrottled ~1k/s)",
        guesses_per_second: 1_000.0,
    },
    CrackScenario {
        name: "Offline (fast hash GPU ~1e10/s)",
        guesses_per_second: 1e10,
    },
    CrackScenario {
        name: "Offline (slow hash ~1e4/s)",
        guesses_per_second: 10_000.0,
    },
];

/// Keyspace approximation from the character classes present.
///
/// Exact exponentiation; the result grows without bound, hence `BigUint`.
pub fn estimate_keyspace(password: &str) -> BigUint {
    let has_lower = password.chars().any(|c| c.is_lowercase());
    let has_upper = password.chars().any(|c| c.is_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_other = password.chars().any(|c| !c.is_alphanumeric());

    let mut alphabet = 0u32;
    if has_lower {
        alphabet += 26;
    }
    if has_upper {
        alphabet += 26;
    }
    if has_digit {
        alphabet += 10;
    }
    if has_other {
        // approximate printable symbols
        alphabet += 33;
    }
    if alphabet <= 1 {
        alphabet = 1;
    }

    BigUint::from(alphabet).pow(password.chars().count() as u32)
}

/// Shrink factor applied when the password matches known weak patterns.
/// Attackers do not brute-force the whole space in those cases.
pub fn effective_space_multiplier(findings: &[Finding]) -> f64 {
    let has = |code: &str| findings.iter().any(|f| f.code == code);

    let mut mult = 1.0f64;

    // Dictionary hits are devastating.
    if has(ids::CODE_DICT_EXACT) {
        mult *= 1e-12;
    } else if has(ids::CODE_DICT_CONTAINS) {
        mult *= 1e-8;
    }

    if has(ids::CODE_SEQUENCE) {
        mult *= 1e-6;
    }
    if has(ids::CODE_REPEAT_RUN) {
        mult *= 1e-3;
    }

    mult.max(1e-15)
}

fn format_seconds(seconds: f64) -> String {
    if seconds < 1.0 {
        return "< 1s".to_string();
    }
    let units = [("s", 60.0), ("min", 60.0), ("h", 24.0), ("d", 365.0), ("y", 1000.0)];
    let mut v = seconds;
    for (unit, base) in units {
        if v < base {
            return if v < 10.0 {
                format!("~{v:.1}{unit}")
            } else {
                format!("~{v:.0}{unit}")
            };
        }
        v /= base;
    }
    "~1000y+".to_string()
}

fn format_rate(rate: f64) -> String {
    if rate >= 1e6 {
        format!("{rate:e}")
    } else {
        format!("{}", rate as u64)
    }
}

/// One row per scenario, in scenario order.
pub fn estimate_times(
    password: &str,
    score: u8,
    findings: &[Finding],
    scenarios: &[CrackScenario],
) -> Vec<EstimateRow> {
    // Exact keyspace, then shrink: saturates to +inf instead of failing for
    // absurdly long inputs.
    let keyspace = estimate_keyspace(password)
        .to_f64()
        .unwrap_or(f64::INFINITY);

    let factor = 10f64.powf((f64::from(score) - 100.0) / 20.0);
    let mult = effective_space_multiplier(findings);

    let effective = (keyspace * factor * mult).floor().max(1.0);

    scenarios
        .iter()
        .map(|s| {
            let seconds = effective / s.guesses_per_second;
            EstimateRow {
                scenario: s.name.to_string(),
                guesses_per_second: format_rate(s.guesses_per_second),
                time: format_seconds(seconds),
                seconds,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use passgauge_types::Severity;

    fn finding(code: &str) -> Finding {
        Finding {
            code: code.to_string(),
            message: String::new(),
            severity: Severity::Info,
            penalty: 0,
            meta: serde_json::Value::Null,
        }
    }

    #[test]
    fn keyspace_sums_present_class_sizes() {
        assert_eq!(estimate_keyspace("abcd"), BigUint::from(26u32).pow(4));
        assert_eq!(estimate_keyspace("aB1!"), BigUint::from(95u32).pow(4));
        assert_eq!(estimate_keyspace(""), BigUint::from(1u32));
    }

    #[test]
    fn keyspace_is_exact_for_long_inputs() {
        // 40 chars over a 95-char alphabet does not fit in u128.
        let space = estimate_keyspace(&"aB1!".repeat(10));
        assert_eq!(space, BigUint::from(95u32).pow(40));
    }

    #[test]
    fn multiplier_compounds_and_floors() {
        assert_eq!(effective_space_multiplier(&[]), 1.0);
        let findings = vec![finding(ids::CODE_DICT_CONTAINS), finding(ids::CODE_SEQUENCE)];
        let mult = effective_space_multiplier(&findings);
        assert!((mult - 1e-14).abs() < 1e-20);

        let floored = vec![
            finding(ids::CODE_DICT_EXACT),
            finding(ids::CODE_SEQUENCE),
            finding(ids::CODE_REPEAT_RUN),
        ];
        assert_eq!(effective_space_multiplier(&floored), 1e-15);
    }

    #[test]
    fn dict_exact_takes_precedence_over_contains() {
        let findings = vec![finding(ids::CODE_DICT_EXACT), finding(ids::CODE_DICT_CONTAINS)];
        assert_eq!(effective_space_multiplier(&findings), 1e-12);
    }

    #[test]
    fn formats_seconds_through_the_unit_chain() {
        assert_eq!(format_seconds(0.2), "< 1s");
        assert_eq!(format_seconds(5.0), "~5.0s");
        assert_eq!(format_seconds(42.0), "~42s");
        assert_eq!(format_seconds(120.0), "~2.0min");
        assert_eq!(format_seconds(7200.0), "~2.0h");
        assert_eq!(format_seconds(86_400.0 * 3.0), "~3.0d");
        assert_eq!(format_seconds(86_400.0 * 365.0 * 2.0), "~2.0y");
        assert_eq!(format_seconds(f64::INFINITY), "~1000y+");
    }

    #[test]
    fn one_row_per_scenario_in_order() {
        let rows = estimate_times("abc", 20, &[], &DEFAULT_SCENARIOS);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].scenario, "Online (throttled ~10/s)");
        assert_eq!(rows[2].scenario, "Offline (fast hash GPU ~1e10/s)");
        assert_eq!(rows[2].guesses_per_second, "1e10");
        assert_eq!(rows[1].guesses_per_second, "1000");
    }

    #[test]
    fn perfect_score_leaves_keyspace_untouched() {
        let rows = estimate_times("abcd", 100, &[], &DEFAULT_SCENARIOS);
        let expected = 26f64.powi(4);
        assert!((rows[0].seconds - expected / 10.0).abs() < 1e-6);
    }

    #[test]
    fn effective_guesses_never_drop_below_one() {
        let findings = vec![finding(ids::CODE_DICT_EXACT)];
        let rows = estimate_times("a", 0, &findings, &DEFAULT_SCENARIOS);
        for row in &rows {
            assert!(row.seconds > 0.0);
        }
    }
}
