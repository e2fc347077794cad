//! The six heuristic rules.
//!
//! Each rule is a total function over arbitrary text: it appends zero or
//! more findings and never fails. Execution order is fixed; scorer and
//! estimator key off finding codes, not positions.

use crate::policy::Policy;
use crate::wordlist::Wordlist;
use passgauge_types::Finding;

mod banned_words;
mod charset;
mod dictionary;
mod length;
mod repeats;
mod sequences;

pub use dictionary::normalize;

pub fn run_all(password: &str, policy: &Policy, wordlist: &Wordlist, out: &mut Vec<Finding>) {
    length::run(password, policy, out);
    charset::run(password, policy, out);
    repeats::run(password, policy, out);
    sequences::run(password, policy, out);
    dictionary::run(password, policy, wordlist, out);
    banned_words::run(password, policy, out);
}
