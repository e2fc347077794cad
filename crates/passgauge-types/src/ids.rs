//! Stable identifiers for rules and finding codes.
//!
//! Rule names double as keys in the policy `enabled_rules` map. Codes are the
//! SCREAMING_SNAKE discriminators carried on findings; automation keys off
//! them, so they never change.

// Rules, in engine execution order.
pub const RULE_LENGTH: &str = "length";
pub const RULE_CHARSET: &str = "charset";
pub const RULE_REPEATS: &str = "repeats";
pub const RULE_SEQUENCES: &str = "sequences";
pub const RULE_DICTIONARY: &str = "dictionary";
pub const RULE_BANNED_WORDS: &str = "banned_words";

// Codes: length
pub const CODE_LEN_TOO_SHORT: &str = "LEN_TOO_SHORT";
pub const CODE_LEN_WEAK: &str = "LEN_WEAK";
pub const CODE_LEN_OK: &str = "LEN_OK";
pub const CODE_LEN_STRONG: &str = "LEN_STRONG";

// Codes: charset
pub const CODE_CHARSET_POOR: &str = "CHARSET_POOR";
pub const CODE_CHARSET_LIMITED: &str = "CHARSET_LIMITED";
pub const CODE_CHARSET_GOOD: &str = "CHARSET_GOOD";

// Codes: repeats
pub const CODE_REPEAT_RUN: &str = "REPEAT_RUN";
pub const CODE_REPEAT_OK: &str = "REPEAT_OK";

// Codes: sequences
pub const CODE_SEQUENCE: &str = "SEQUENCE";
pub const CODE_SEQUENCE_OK: &str = "SEQUENCE_OK";

// Codes: dictionary
pub const CODE_DICT_EXACT: &str = "DICT_EXACT";
pub const CODE_DICT_CONTAINS: &str = "DICT_CONTAINS";
pub const CODE_DICT_OK: &str = "DICT_OK";

// Codes: banned words
pub const CODE_BANNED_WORD: &str = "BANNED_WORD";
