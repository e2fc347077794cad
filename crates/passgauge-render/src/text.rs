use crate::model::{RenderableReport, RenderableVerdict};

fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let line = |cells: &[String]| {
        let mut out = String::new();
        for (i, cell) in cells.iter().enumerate() {
            out.push_str(&format!("{:<width$}  ", cell, width = widths[i]));
        }
        out.trim_end().to_string()
    };

    let mut out = String::new();
    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    out.push_str(&line(&header_cells));
    out.push('\n');
    out.push_str(&"-".repeat(widths.iter().sum::<usize>() + 2 * (widths.len() - 1)));
    out.push('\n');
    for row in rows {
        out.push_str(&line(row));
        out.push('\n');
    }
    out
}

/// Plain-text report for the console. Deterministic, no colors.
pub fn render_text(report: &RenderableReport) -> String {
    let mut out = String::new();

    let verdict = match report.verdict {
        RenderableVerdict::Pass => "PASS",
        RenderableVerdict::Warn => "WARN",
        RenderableVerdict::Fail => "FAIL",
    };
    out.push_str(&format!(
        "Score: {}/100  Level: {}  Verdict: {}\n\n",
        report.score, report.label, verdict
    ));

    if !report.findings.is_empty() {
        out.push_str("Diagnostics\n");
        let rows: Vec<Vec<String>> = report
            .findings
            .iter()
            .map(|f| {
                vec![
                    f.severity.tag().to_string(),
                    f.code.clone(),
                    f.message.clone(),
                    f.penalty.to_string(),
                ]
            })
            .collect();
        out.push_str(&table(&["Severity", "Code", "Message", "Impact"], &rows));
        out.push('\n');
    }

    if !report.estimates.is_empty() {
        out.push_str("Resistance estimate (approx.)\n");
        let rows: Vec<Vec<String>> = report
            .estimates
            .iter()
            .map(|e| {
                vec![
                    e.scenario.clone(),
                    e.guesses_per_second.clone(),
                    e.time.clone(),
                ]
            })
            .collect();
        out.push_str(&table(&["Scenario", "Guesses/s", "Time"], &rows));
        out.push('\n');
    }

    if !report.policy_violations.is_empty() {
        out.push_str(&format!(
            "Policy violations: {}\n\n",
            report.policy_violations.join(", ")
        ));
    }

    out.push_str("Recommendations\n");
    for rec in &report.recommendations {
        out.push_str(&format!("- {rec}\n"));
    }

    out
}
