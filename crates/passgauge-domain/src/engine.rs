use crate::estimates::{estimate_times, DEFAULT_SCENARIOS};
use crate::policy::{FailOn, Policy};
use crate::report::DomainReport;
use crate::rules;
use crate::scoring::{compute_score, label_for};
use crate::wordlist::Wordlist;
use passgauge_types::{Finding, Severity, SeverityCounts, Verdict};

/// Evaluate one password against a policy and word list.
///
/// Pure and deterministic: the same inputs always produce the same report,
/// and nothing here mutates shared state, so calls may run concurrently.
pub fn evaluate(password: &str, policy: &Policy, wordlist: &Wordlist) -> DomainReport {
    let mut findings: Vec<Finding> = Vec::new();
    rules::run_all(password, policy, wordlist, &mut findings);

    let score = compute_score(password, &findings);
    let label = label_for(score);

    let verdict = compute_verdict(&findings, policy.fail_on);
    let policy_violations = violations(&findings, policy.fail_on);
    let counts = SeverityCounts::from_findings(&findings);

    let recommendations = recommendations_for(score);
    let estimates = estimate_times(password, score, &findings, &DEFAULT_SCENARIOS);

    DomainReport {
        score,
        label,
        verdict,
        compliant: verdict != Verdict::Fail,
        policy_violations,
        counts,
        findings,
        recommendations,
        estimates,
    }
}

fn compute_verdict(findings: &[Finding], fail_on: FailOn) -> Verdict {
    let has_critical = findings.iter().any(|f| f.severity == Severity::Critical);
    if has_critical {
        return Verdict::Fail;
    }

    let has_warn = findings.iter().any(|f| f.severity == Severity::Warning);
    if has_warn {
        return match fail_on {
            FailOn::Warning => Verdict::Fail,
            FailOn::Critical => Verdict::Warn,
        };
    }

    Verdict::Pass
}

fn violations(findings: &[Finding], fail_on: FailOn) -> Vec<String> {
    findings
        .iter()
        .filter(|f| match f.severity {
            Severity::Critical => true,
            Severity::Warning => fail_on == FailOn::Warning,
            Severity::Info => false,
        })
        .map(|f| f.code.clone())
        .collect()
}

fn recommendations_for(score: u8) -> Vec<String> {
    if score >= 85 {
        return vec!["Nothing to flag. Just avoid reusing it across sites.".to_string()];
    }
    [
        "Use 16+ characters (ideally a passphrase).",
        "Avoid sequences (abcd/1234) and repetitions (aaaa).",
        "Avoid dictionary words, first names, brand names, years.",
        "Mix at least 3 classes (lower/UPPER/digits/symbols) if possible.",
        "Use a password manager to generate and store passwords.",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
