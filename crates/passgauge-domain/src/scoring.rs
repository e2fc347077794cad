//! Findings + length -> 0..=100 score and qualitative label.

use passgauge_types::{ids, Finding};

fn clamp(n: i32, lo: i32, hi: i32) -> i32 {
    n.max(lo).min(hi)
}

/// Bucket a score into its qualitative label. Boundaries are half-open on
/// the lower bound: 30 is already "Weak".
pub fn label_for(score: u8) -> &'static str {
    match score {
        0..=29 => "Very Weak",
        30..=49 => "Weak",
        50..=69 => "Fair",
        70..=84 => "Strong",
        _ => "Very Strong",
    }
}

pub fn compute_score(password: &str, findings: &[Finding]) -> u8 {
    let n = password.chars().count();

    // Base score mainly from length.
    let base: i32 = if n >= 20 {
        90
    } else if n >= 16 {
        80
    } else if n >= 12 {
        65
    } else if n >= 8 {
        45
    } else {
        20
    };

    // Penalties are carried as non-positive numbers on the findings.
    let delta: i32 = findings.iter().map(|f| f.penalty).sum();

    let charset_good = findings.iter().any(|f| f.code == ids::CODE_CHARSET_GOOD);

    // Bonuses stay out of findings so findings stay focused on issues.
    let mut bonus = 0;
    if n >= 12 && charset_good {
        bonus += 10;
    }
    if n >= 16 && charset_good {
        bonus += 5;
    }

    clamp(base + delta + bonus, 0, 100) as u8
}
