//! Pure password evaluation (no IO).
//!
//! Input: a candidate password, a policy, and an injected word list.
//! Output: findings + score + label + crack-time estimates + verdict.

#![forbid(unsafe_code)]

pub mod estimates;
pub mod policy;
pub mod report;
pub mod scoring;
pub mod wordlist;

mod engine;
pub mod rules;

#[cfg(test)]
mod prop_tests;

pub use engine::evaluate;
pub use policy::{FailOn, Policy};
pub use report::DomainReport;
pub use wordlist::Wordlist;
