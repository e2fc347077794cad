//! Explain registry for finding codes.
//!
//! Maps codes to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a finding code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the finding.
    pub title: &'static str,
    /// What the rule detected and why it matters.
    pub description: &'static str,
    /// How to fix it.
    pub remediation: &'static str,
}

/// Look up an explanation by finding code.
///
/// Returns `None` if the code is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    let exp = match identifier {
        ids::CODE_LEN_TOO_SHORT => Explanation {
            title: "Password shorter than 8 characters",
            description: "Anything under 8 characters falls to even throttled online \
                          guessing; length is the single biggest strength factor.",
            remediation: "Use at least 12 characters; a multi-word passphrase gets there easily.",
        },
        ids::CODE_LEN_WEAK => Explanation {
            title: "Password below the policy minimum length",
            description: "The password clears the 8-character floor but is shorter than the \
                          minimum the active policy recommends.",
            remediation: "Extend the password to the policy minimum or beyond.",
        },
        ids::CODE_CHARSET_POOR => Explanation {
            title: "Single character class",
            description: "Only one of lowercase/uppercase/digits/symbols is used, so the \
                          search space per character is tiny.",
            remediation: "Mix at least three character classes.",
        },
        ids::CODE_CHARSET_LIMITED => Explanation {
            title: "Two character classes",
            description: "Two classes is better than one but still a small per-character \
                          alphabet.",
            remediation: "Add a third class (digits or symbols usually).",
        },
        ids::CODE_REPEAT_RUN => Explanation {
            title: "Repeated character run",
            description: "Consecutive identical characters (aaaa, 1111) compress the \
                          effective search space and show up early in mangling rules.",
            remediation: "Break up repeated runs; avoid padding with one character.",
        },
        ids::CODE_SEQUENCE => Explanation {
            title: "Keyboard/alphabet sequence",
            description: "Ascending or descending runs such as abcd or 4321 are among the \
                          first candidates attackers try.",
            remediation: "Remove sequential fragments or replace them with unrelated characters.",
        },
        ids::CODE_DICT_EXACT => Explanation {
            title: "Common password",
            description: "After undoing trivial leetspeak, the password equals an entry in a \
                          common-password list. It will be cracked almost instantly.",
            remediation: "Pick a password that is not a known word or leaked password.",
        },
        ids::CODE_DICT_CONTAINS => Explanation {
            title: "Contains a common word",
            description: "A dictionary word of 5+ characters appears inside the password; \
                          wordlist+mangling attacks exploit this directly.",
            remediation: "Avoid embedding dictionary words; prefer random or multi-word passphrases.",
        },
        ids::CODE_BANNED_WORD => Explanation {
            title: "Banned word",
            description: "The password contains a token the active policy forbids \
                          (company name, product, ...).",
            remediation: "Remove the banned token entirely.",
        },
        _ => return None,
    };
    Some(exp)
}

/// List all codes with registered explanations.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_LEN_TOO_SHORT,
        ids::CODE_LEN_WEAK,
        ids::CODE_CHARSET_POOR,
        ids::CODE_CHARSET_LIMITED,
        ids::CODE_REPEAT_RUN,
        ids::CODE_SEQUENCE,
        ids::CODE_DICT_EXACT,
        ids::CODE_DICT_CONTAINS,
        ids::CODE_BANNED_WORD,
    ]
}
