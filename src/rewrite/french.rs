//! French rule table.
//!
//! Hand-curated data: a fixed enumerated set of number phrases, spoken
//! punctuation with its common variants, bracket/quote names, layout
//! commands and symbol names. Phrases not listed verbatim pass through
//! unmodified; widening the coverage is a data change, not an engine
//! change.

use lazy_static::lazy_static;

use crate::rewrite::types::{RuleCategory, RuleTable};

lazy_static! {
    /// Built-in French table.
    pub static ref FRENCH: RuleTable = build();
}

// Thousands, full hundreds, precomposed compounds, tens, teens, units.
// Longest phrase first throughout: a long phrase that ran after one of
// its own substrings would come out mangled ("sept cent" -> "7 100").
const QUANTITIES: &[(&str, &str)] = &[
    ("douze mille", "12000"),
    ("dix mille", "10000"),
    ("neuf mille", "9000"),
    ("huit mille", "8000"),
    ("sept mille", "7000"),
    ("six mille", "6000"),
    ("cinq mille", "5000"),
    ("quatre mille", "4000"),
    ("trois mille", "3000"),
    ("deux mille", "2000"),
    ("mille", "1000"),
    ("six cent quatre-vingt-quinze", "695"),
    ("quatre cent vingt", "420"),
    ("neuf cent", "900"),
    ("huit cent", "800"),
    ("sept cent", "700"),
    ("six cent", "600"),
    ("cinq cent", "500"),
    ("quatre cent", "400"),
    ("trois cent", "300"),
    ("deux cent", "200"),
    ("cent", "100"),
    ("quatre-vingt-quinze", "95"),
    ("quatre-vingt-dix", "90"),
    ("quatre-vingts", "80"),
    ("soixante-quinze", "75"),
    ("soixante-dix", "70"),
    ("cinquante-cinq", "55"),
    ("quarante-deux", "42"),
    ("trente-trois", "33"),
    ("vingt-trois", "23"),
    ("vingt-et-un", "21"),
    ("cinquante", "50"),
    ("quarante", "40"),
    ("trente", "30"),
    ("vingt", "20"),
    ("dix-neuf", "19"),
    ("dix-huit", "18"),
    ("dix-sept", "17"),
    ("seize", "16"),
    ("quinze", "15"),
    ("quatorze", "14"),
    ("treize", "13"),
    ("douze", "12"),
    ("onze", "11"),
    ("dix", "10"),
    ("neuf", "9"),
    ("huit", "8"),
    ("sept", "7"),
    ("six", "6"),
    ("cinq", "5"),
    ("quatre", "4"),
    ("trois", "3"),
    ("deux", "2"),
    ("un", "1"),
    ("zéro", "0"),
];

// Multi-word commands before the bare words they contain: " point"
// must not fire while " point d'interrogation" or " point virgule" is
// still spelled out.
const PUNCTUATION: &[(&str, &str)] = &[
    (" point d'interrogation", " ?"),
    (" point interrogation", " ?"),
    (" point d'exclamation", " !"),
    (" point exclamation", " !"),
    (" point virgule", " ;"),
    (" deux points", " :"),
    (" interrogation", " ?"),
    (" exclamation", " !"),
    (" question", " ?"),
    (" virgule", ","),
    (" point", "."),
    (" tiret", "-"),
];

const BRACKETS: &[(&str, &str)] = &[
    (" parenthèse ouverte", " ("),
    (" parenthèse fermée", ")"),
    (" guillemet ouvrant", " \""),
    (" guillemet fermant", "\""),
    (" apostrophe", "'"),
];

const FORMATTING: &[(&str, &str)] = &[
    (" nouvelle ligne", "\n"),
    (" retour à la ligne", "\n"),
    (" tabulation", "\t"),
    (" espace", " "),
];

const SYMBOLS: &[(&str, &str)] = &[
    (" arobase", "@"),
    (" diese", "#"),
    (" pourcentage", "%"),
    (" et commercial", "&"),
    (" étoile", "*"),
    (" plus", "+"),
    (" égal", "="),
    (" moins", "-"),
    (" divisé par", "/"),
    (" barre oblique", "/"),
];

// Strictly last: strips the stray space every " word" pattern leaves
// behind. Run earlier it would eat the leading space a later phrase
// still needs to match.
const CLEANUP: &[(&str, &str)] = &[
    (" ,", ","),
    (" .", "."),
    ("( ", "("),
    (" \"", "\""),
];

fn build() -> RuleTable {
    let mut table = RuleTable::new("fr");
    table.extend_group(QUANTITIES, RuleCategory::Quantities);
    table.extend_group(PUNCTUATION, RuleCategory::Punctuation);
    table.extend_group(BRACKETS, RuleCategory::Brackets);
    table.extend_group(FORMATTING, RuleCategory::Formatting);
    table.extend_group(SYMBOLS, RuleCategory::Symbols);
    table.extend_group(CLEANUP, RuleCategory::SpacingCleanup);
    table
}
