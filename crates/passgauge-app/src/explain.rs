//! The `explain` use case: remediation guidance for a finding code.

use passgauge_types::{all_codes, lookup_explanation, Explanation};

pub enum ExplainOutput {
    Found(Explanation),
    NotFound {
        identifier: String,
        available_codes: &'static [&'static str],
    },
}

pub fn run_explain(identifier: &str) -> ExplainOutput {
    match lookup_explanation(identifier) {
        Some(exp) => ExplainOutput::Found(exp),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available_codes: all_codes(),
        },
    }
}

pub fn format_explanation(exp: &Explanation) -> String {
    format!(
        "{}\n\n{}\n\nRemediation: {}\n",
        exp.title, exp.description, exp.remediation
    )
}

pub fn format_not_found(identifier: &str, available_codes: &[&str]) -> String {
    let mut out = format!("unknown finding code: {identifier}\n\nKnown codes:\n");
    for code in available_codes {
        out.push_str(&format!("  {code}\n"));
    }
    out
}
