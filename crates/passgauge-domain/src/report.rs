use passgauge_types::{EstimateRow, Finding, SeverityCounts, Verdict};

/// Everything one evaluation produces, before envelope metadata is added.
#[derive(Clone, Debug)]
pub struct DomainReport {
    pub score: u8,
    pub label: &'static str,
    pub verdict: Verdict,
    pub compliant: bool,
    pub policy_violations: Vec<String>,
    pub counts: SeverityCounts,
    pub findings: Vec<Finding>,
    pub recommendations: Vec<String>,
    pub estimates: Vec<EstimateRow>,
}
