//! Report serialization and conversion to the renderer model.

use anyhow::Context;
use passgauge_render::{
    RenderableEstimate, RenderableFinding, RenderableReport, RenderableSeverity, RenderableVerdict,
};
use passgauge_types::{ReportEnvelope, Severity, Verdict};

pub fn serialize_report(report: &ReportEnvelope) -> anyhow::Result<String> {
    let mut text = serde_json::to_string_pretty(report).context("serialize report")?;
    text.push('\n');
    Ok(text)
}

pub fn parse_report_json(text: &str) -> anyhow::Result<ReportEnvelope> {
    serde_json::from_str(text).context("parse report JSON")
}

pub fn to_renderable(report: &ReportEnvelope) -> RenderableReport {
    RenderableReport {
        score: report.score,
        label: report.label.clone(),
        verdict: match report.verdict {
            Verdict::Pass => RenderableVerdict::Pass,
            Verdict::Warn => RenderableVerdict::Warn,
            Verdict::Fail => RenderableVerdict::Fail,
        },
        compliant: report.compliant,
        policy_violations: report.policy_violations.clone(),
        findings: report
            .findings
            .iter()
            .map(|f| RenderableFinding {
                severity: match f.severity {
                    Severity::Info => RenderableSeverity::Info,
                    Severity::Warning => RenderableSeverity::Warning,
                    Severity::Critical => RenderableSeverity::Critical,
                },
                code: f.code.clone(),
                message: f.message.clone(),
                penalty: f.penalty,
            })
            .collect(),
        recommendations: report.recommendations.clone(),
        estimates: report
            .estimates
            .iter()
            .map(|e| RenderableEstimate {
                scenario: e.scenario.clone(),
                guesses_per_second: e.guesses_per_second.clone(),
                time: e.time.clone(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::{run_check, CheckInput};
    use passgauge_settings::Overrides;

    #[test]
    fn report_round_trips_through_json() {
        let output = run_check(CheckInput {
            password: "abc",
            policy_text: "",
            overrides: Overrides::default(),
            wordlist_path: None,
        })
        .expect("run_check");

        let text = serialize_report(&output.report).expect("serialize");
        let back = parse_report_json(&text).expect("parse");
        assert_eq!(back, output.report);
    }

    #[test]
    fn renderable_carries_findings_and_estimates() {
        let output = run_check(CheckInput {
            password: "abc",
            policy_text: "",
            overrides: Overrides::default(),
            wordlist_path: None,
        })
        .expect("run_check");

        let renderable = to_renderable(&output.report);
        assert_eq!(renderable.score, output.report.score);
        assert_eq!(renderable.findings.len(), output.report.findings.len());
        assert_eq!(renderable.estimates.len(), 4);
        assert_eq!(renderable.verdict, RenderableVerdict::Fail);
    }
}
