use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use time::OffsetDateTime;

/// Stable schema identifier for passgauge reports.
pub const SCHEMA_REPORT_V1: &str = "passgauge.report.v1";

/// Severity is intentionally small: it maps cleanly to exit codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

/// A single diagnostic emitted by one rule invocation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Finding {
    pub code: String,
    pub message: String,
    pub severity: Severity,

    /// Score impact; zero or negative.
    pub penalty: i32,

    /// Rule-specific structured payload (detected run length, matched word, ...).
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub meta: JsonValue,
}

/// One crack-time projection under a fixed attacker scenario.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EstimateRow {
    pub scenario: String,
    pub guesses_per_second: String,
    pub time: String,
    pub seconds: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Warn,
    Fail,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SeverityCounts {
    pub info: u32,
    pub warning: u32,
    pub critical: u32,
}

impl SeverityCounts {
    pub fn from_findings(findings: &[Finding]) -> Self {
        let mut counts = SeverityCounts::default();
        for f in findings {
            match f.severity {
                Severity::Info => counts.info += 1,
                Severity::Warning => counts.warning += 1,
                Severity::Critical => counts.critical += 1,
            }
        }
        counts
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// The full evaluation report as written to disk / stdout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportEnvelope {
    pub schema: String,
    pub tool: ToolMeta,

    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,

    pub score: u8,
    pub label: String,
    pub verdict: Verdict,
    pub compliant: bool,
    pub policy_violations: Vec<String>,
    pub counts: SeverityCounts,
    pub findings: Vec<Finding>,
    pub recommendations: Vec<String>,
    pub estimates: Vec<EstimateRow>,
}
