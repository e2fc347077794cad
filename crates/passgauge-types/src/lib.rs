//! Stable DTOs and IDs used across the passgauge workspace.
//!
//! This crate is intentionally boring:
//! - data types for the emitted report
//! - stable rule names and finding codes
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod explain;
pub mod ids;
pub mod report;

pub use explain::{all_codes, lookup_explanation, Explanation};
pub use report::{
    EstimateRow, Finding, ReportEnvelope, Severity, SeverityCounts, ToolMeta, Verdict,
    SCHEMA_REPORT_V1,
};
