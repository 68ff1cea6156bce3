use crate::domain::model::Advocate;
use deunicode::deunicode;
use std::collections::HashSet;

/// Sort key approximating a locale-aware alphabetical comparison.
///
/// Levels, compared in order:
/// 1. base letters: transliterated to ASCII and lowercased, so `Ångström` sits with `Angstrom`
/// 2. accents: the lowercased original, so `e` sorts before `é`
/// 3. case: lowercase before uppercase at the same position
///
/// Equal strings always produce equal keys, which keeps stable sorts stable.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey {
    primary: String,
    secondary: String,
    tertiary: Vec<bool>,
}

impl CollationKey {
    pub fn new(s: &str) -> Self {
        Self {
            primary: deunicode(s).to_lowercase(),
            secondary: s.to_lowercase(),
            tertiary: s.chars().map(char::is_uppercase).collect(),
        }
    }
}

/// Orders advocates by last name, ascending. Stable, and operates on the caller's
/// vector of references, never on the repository's backing collection.
pub fn by_last_name(records: &mut [&Advocate]) {
    records.sort_by_cached_key(|advocate| CollationKey::new(&advocate.last_name));
}

/// Sorts and deduplicates plain strings with the same collation.
pub fn sorted_unique<'a, I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    let mut out: Vec<String> = values
        .into_iter()
        .filter(|value| seen.insert(*value))
        .map(str::to_string)
        .collect();
    out.sort_by_cached_key(|s| CollationKey::new(s));
    out
}
