use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Common misspellings of relational operator words, keyed by the word a
/// user actually typed inside a `[...]` condition.
pub static RELATIONAL_TYPOS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("e", "eq"),
        ("g", "gt"),
        ("l", "lt"),
        ("n", "ne"),
        ("igual", "eq"),
        ("maior", "gt"),
        ("menor", "lt"),
    ])
});

/// Common misspellings of reserved words.
pub static RESERVED_WORD_TYPOS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("wr", "wrt"),
        ("wt", "wrt"),
        ("write", "wrt"),
        ("inp", "input"),
        ("read", "input"),
        ("scanf", "input"),
        ("int", "intn"),
        ("cd", "cdt"),
        ("if", "cdt"),
        ("else", "!cdt"),
        ("elseif", "!cdt+"),
        ("al", "als"),
        ("start", "als"),
        ("function", "func"),
        ("fn", "func"),
    ])
});
