//! English rule table.
//!
//! Same pipeline and category skeleton as the French table, with the
//! coverage envelope kept deliberately parallel: curated number
//! phrases, punctuation names, bracket/quote names, layout commands and
//! symbol names. Anything not listed verbatim passes through.

use lazy_static::lazy_static;

use crate::rewrite::types::{RuleCategory, RuleTable};

lazy_static! {
    /// Built-in English table.
    pub static ref ENGLISH: RuleTable = build();
}

// Longest phrase first: "ninety" before "nine", "seventeen" before
// "seven", "two thousand" before "thousand" before "two".
const QUANTITIES: &[(&str, &str)] = &[
    ("twelve thousand", "12000"),
    ("ten thousand", "10000"),
    ("nine thousand", "9000"),
    ("eight thousand", "8000"),
    ("seven thousand", "7000"),
    ("six thousand", "6000"),
    ("five thousand", "5000"),
    ("four thousand", "4000"),
    ("three thousand", "3000"),
    ("two thousand", "2000"),
    ("thousand", "1000"),
    ("six hundred ninety five", "695"),
    ("four hundred twenty", "420"),
    ("nine hundred", "900"),
    ("eight hundred", "800"),
    ("seven hundred", "700"),
    ("six hundred", "600"),
    ("five hundred", "500"),
    ("four hundred", "400"),
    ("three hundred", "300"),
    ("two hundred", "200"),
    ("hundred", "100"),
    ("ninety five", "95"),
    ("ninety", "90"),
    ("eighty", "80"),
    ("seventy five", "75"),
    ("seventy", "70"),
    ("fifty five", "55"),
    ("forty two", "42"),
    ("thirty three", "33"),
    ("twenty three", "23"),
    ("twenty one", "21"),
    ("fifty", "50"),
    ("forty", "40"),
    ("thirty", "30"),
    ("twenty", "20"),
    ("nineteen", "19"),
    ("eighteen", "18"),
    ("seventeen", "17"),
    ("sixteen", "16"),
    ("fifteen", "15"),
    ("fourteen", "14"),
    ("thirteen", "13"),
    ("twelve", "12"),
    ("eleven", "11"),
    ("ten", "10"),
    ("nine", "9"),
    ("eight", "8"),
    ("seven", "7"),
    ("six", "6"),
    ("five", "5"),
    ("four", "4"),
    ("three", "3"),
    ("two", "2"),
    ("one", "1"),
    ("zero", "0"),
];

const PUNCTUATION: &[(&str, &str)] = &[
    (" question mark", "?"),
    (" exclamation mark", "!"),
    (" exclamation point", "!"),
    (" full stop", "."),
    (" period", "."),
    (" comma", ","),
    (" semicolon", ";"),
    (" colon", ":"),
    (" dash", "-"),
    (" hyphen", "-"),
];

// " open paren" is a prefix of " open parenthesis"; the long form goes
// first or it would come out as "(thesis".
const BRACKETS: &[(&str, &str)] = &[
    (" open parenthesis", " ("),
    (" close parenthesis", ")"),
    (" open paren", " ("),
    (" close paren", ")"),
    (" open quote", " \""),
    (" close quote", "\""),
    (" apostrophe", "'"),
];

const FORMATTING: &[(&str, &str)] = &[
    (" new paragraph", "\n\n"),
    (" newline", "\n"),
    (" new line", "\n"),
    (" tab", "\t"),
    (" space", " "),
];

// " dot com" before bare " dot", " forward slash" before " slash",
// " hashtag" / " hash sign" before " hash".
const SYMBOLS: &[(&str, &str)] = &[
    (" at sign", "@"),
    (" hashtag", "#"),
    (" hash sign", "#"),
    (" hash", "#"),
    (" percent sign", "%"),
    (" percent", "%"),
    (" ampersand", "&"),
    (" asterisk", "*"),
    (" plus sign", "+"),
    (" plus", "+"),
    (" equals sign", "="),
    (" equals", "="),
    (" minus sign", "-"),
    (" minus", "-"),
    (" divided by", "/"),
    (" forward slash", "/"),
    (" slash", "/"),
    (" underscore", "_"),
    (" dot com", ".com"),
    (" dot", "."),
];

const CLEANUP: &[(&str, &str)] = &[
    (" ,", ","),
    (" .", "."),
    ("( ", "("),
    (" \"", "\""),
    ("@ ", "@"),
];

fn build() -> RuleTable {
    let mut table = RuleTable::new("en");
    table.extend_group(QUANTITIES, RuleCategory::Quantities);
    table.extend_group(PUNCTUATION, RuleCategory::Punctuation);
    table.extend_group(BRACKETS, RuleCategory::Brackets);
    table.extend_group(FORMATTING, RuleCategory::Formatting);
    table.extend_group(SYMBOLS, RuleCategory::Symbols);
    table.extend_group(CLEANUP, RuleCategory::SpacingCleanup);
    table
}
