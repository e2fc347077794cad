use crate::policy::Policy;
use crate::wordlist::Wordlist;
use passgauge_types::{ids, Finding, Severity};
use serde_json::json;

/// Lower-case the password and undo a fixed leetspeak substitution table.
pub fn normalize(password: &str) -> String {
    password
        .to_lowercase()
        .chars()
        .map(|c| match c {
            '@' => 'a',
            '0' => 'o',
            '1' => 'l',
            '!' => 'i',
            '$' => 's',
            '3' => 'e',
            '5' => 's',
            '7' => 't',
            other => other,
        })
        .collect()
}

pub fn run(password: &str, policy: &Policy, wordlist: &Wordlist, out: &mut Vec<Finding>) {
    if !policy.rule_enabled(ids::RULE_DICTIONARY) || !policy.forbid_dictionary {
        return;
    }

    let norm = normalize(password);

    if wordlist.contains(&norm) {
        out.push(Finding {
            code: ids::CODE_DICT_EXACT.to_string(),
            message: "Password appears in a common-password list.".to_string(),
            severity: Severity::Critical,
            penalty: -35,
            meta: json!({}),
        });
        return;
    }

    // First qualifying word wins; which one is unspecified.
    if let Some(word) = wordlist
        .iter()
        .find(|w| w.chars().count() >= 5 && norm.contains(*w))
    {
        out.push(Finding {
            code: ids::CODE_DICT_CONTAINS.to_string(),
            message: format!("Contains a common word: '{word}'."),
            severity: Severity::Warning,
            penalty: -20,
            meta: json!({ "word": word }),
        });
        return;
    }

    out.push(Finding {
        code: ids::CODE_DICT_OK.to_string(),
        message: "No common word detected.".to_string(),
        severity: Severity::Info,
        penalty: 0,
        meta: json!({}),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wordlist() -> Wordlist {
        Wordlist::parse("password\nqwerty\nadmin\ndragon\nletmein\n")
    }

    fn check(password: &str) -> Vec<Finding> {
        let mut out = Vec::new();
        run(password, &Policy::default(), &wordlist(), &mut out);
        out
    }

    #[test]
    fn normalization_undoes_leetspeak() {
        assert_eq!(normalize("P@55w0rd"), "password");
        assert_eq!(normalize("L3tM3!n"), "letmein");
    }

    #[test]
    fn exact_match_after_normalization_is_critical() {
        let findings = check("P@ssw0rd");
        assert_eq!(findings[0].code, ids::CODE_DICT_EXACT);
        assert_eq!(findings[0].severity, Severity::Critical);
    }

    #[test]
    fn embedded_long_word_is_a_warning() {
        let findings = check("xdragonx42");
        assert_eq!(findings[0].code, ids::CODE_DICT_CONTAINS);
        assert_eq!(findings[0].meta["word"], "dragon");
    }

    #[test]
    fn short_words_never_match_as_substrings() {
        // "admin" is 5 chars and matches; "qwerty" embedded matches; a 4-char
        // fragment of a listed word does not trigger the substring scan.
        let findings = check("xqwerx!42A");
        assert_eq!(findings[0].code, ids::CODE_DICT_OK);
    }

    #[test]
    fn empty_wordlist_always_reports_ok() {
        let mut out = Vec::new();
        run("password", &Policy::default(), &Wordlist::empty(), &mut out);
        assert_eq!(out[0].code, ids::CODE_DICT_OK);
    }

    #[test]
    fn disabled_by_policy_flag_emits_nothing() {
        let mut policy = Policy::default();
        policy.forbid_dictionary = false;
        let mut out = Vec::new();
        run("password", &policy, &wordlist(), &mut out);
        assert!(out.is_empty());
    }
}
