use crate::model::{RenderableReport, RenderableVerdict};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Passgauge report\n\n");
    let verdict = match report.verdict {
        RenderableVerdict::Pass => "PASS",
        RenderableVerdict::Warn => "WARN",
        RenderableVerdict::Fail => "FAIL",
    };
    out.push_str(&format!(
        "- Score: **{}**/100 ({})\n- Verdict: **{}**\n- Compliant: {}\n\n",
        report.score, report.label, verdict, report.compliant
    ));

    if !report.policy_violations.is_empty() {
        out.push_str(&format!(
            "> Policy violations: {}\n\n",
            report.policy_violations.join(", ")
        ));
    }

    if report.findings.is_empty() {
        out.push_str("No findings.\n");
    } else {
        out.push_str("## Findings\n\n");
        for f in &report.findings {
            out.push_str(&format!(
                "- [{}] `{}` — {} ({})\n",
                f.severity.tag(),
                f.code,
                f.message,
                f.penalty
            ));
        }
        out.push('\n');
    }

    if !report.estimates.is_empty() {
        out.push_str("## Crack-time estimates\n\n");
        out.push_str("| Scenario | Guesses/s | Time |\n");
        out.push_str("| --- | --- | --- |\n");
        for e in &report.estimates {
            out.push_str(&format!(
                "| {} | {} | {} |\n",
                e.scenario, e.guesses_per_second, e.time
            ));
        }
        out.push('\n');
    }

    out.push_str("## Recommendations\n\n");
    for rec in &report.recommendations {
        out.push_str(&format!("- {rec}\n"));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        RenderableEstimate, RenderableFinding, RenderableSeverity, RenderableVerdict,
    };

    #[test]
    fn renders_clean_report_without_findings_section() {
        let report = RenderableReport {
            score: 100,
            label: "Very Strong".to_string(),
            verdict: RenderableVerdict::Pass,
            compliant: true,
            policy_violations: Vec::new(),
            findings: Vec::new(),
            recommendations: vec!["Nothing to flag.".to_string()],
            estimates: Vec::new(),
        };
        let md = render_markdown(&report);
        assert!(md.contains("No findings."));
        assert!(md.contains("Score: **100**/100 (Very Strong)"));
        assert!(!md.contains("## Crack-time estimates"));
    }

    #[test]
    fn renders_findings_estimates_and_violations() {
        let report = RenderableReport {
            score: 5,
            label: "Very Weak".to_string(),
            verdict: RenderableVerdict::Fail,
            compliant: false,
            policy_violations: vec!["DICT_EXACT".to_string()],
            findings: vec![RenderableFinding {
                severity: RenderableSeverity::Critical,
                code: "DICT_EXACT".to_string(),
                message: "Password appears in a common-password list.".to_string(),
                penalty: -35,
            }],
            recommendations: vec!["Use a password manager.".to_string()],
            estimates: vec![RenderableEstimate {
                scenario: "Offline (fast hash GPU ~1e10/s)".to_string(),
                guesses_per_second: "1e10".to_string(),
                time: "< 1s".to_string(),
            }],
        };

        let md = render_markdown(&report);
        assert!(md.contains("Verdict: **FAIL**"));
        assert!(md.contains("> Policy violations: DICT_EXACT"));
        assert!(md.contains("[CRIT] `DICT_EXACT`"));
        assert!(md.contains("| Offline (fast hash GPU ~1e10/s) | 1e10 | < 1s |"));
        assert!(md.contains("- Use a password manager."));
    }
}
