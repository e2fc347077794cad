//! The `check` use case: evaluate a password and produce a report.

use anyhow::Context;
use camino::Utf8Path;
use passgauge_domain::{evaluate, Policy, Wordlist};
use passgauge_settings::{parse_policy_json, resolve_policy, Overrides, PolicyFileV1};
use passgauge_types::{ReportEnvelope, ToolMeta, Verdict, SCHEMA_REPORT_V1};
use time::OffsetDateTime;

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// The candidate password.
    pub password: &'a str,
    /// Policy file contents (empty string if not provided).
    pub policy_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
    /// Common-password list location; a missing file degrades to an empty
    /// word set rather than failing.
    pub wordlist_path: Option<&'a Utf8Path>,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    /// The generated report.
    pub report: ReportEnvelope,
    /// The resolved policy used.
    pub policy: Policy,
}

/// Read and parse the word list. Absent files are fine; malformed content
/// cannot happen (every line is either a word, a comment, or blank).
pub fn load_wordlist(path: Option<&Utf8Path>) -> Wordlist {
    match path {
        Some(p) => match std::fs::read_to_string(p) {
            Ok(text) => Wordlist::parse(&text),
            Err(_) => Wordlist::empty(),
        },
        None => Wordlist::empty(),
    }
}

/// Run the check use case: resolve policy, load the word list, evaluate,
/// wrap in the report envelope.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    // Parse policy (empty is allowed, defaults apply).
    let file = if input.policy_text.trim().is_empty() {
        PolicyFileV1::default()
    } else {
        parse_policy_json(input.policy_text).context("parse policy")?
    };
    let policy = resolve_policy(file, input.overrides.clone());

    let wordlist = load_wordlist(input.wordlist_path);

    let domain = evaluate(input.password, &policy, &wordlist);

    let finished_at = OffsetDateTime::now_utc();

    let report = ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "passgauge".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at,
        score: domain.score,
        label: domain.label.to_string(),
        verdict: domain.verdict,
        compliant: domain.compliant,
        policy_violations: domain.policy_violations,
        counts: domain.counts,
        findings: domain.findings,
        recommendations: domain.recommendations,
        estimates: domain.estimates,
    };

    Ok(CheckOutput { report, policy })
}

/// Map verdict to exit code: 0 = pass/warn, 2 = fail.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Warn => 0,
        Verdict::Fail => 2,
    }
}
