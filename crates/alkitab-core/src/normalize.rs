//! Book-name normalization.
//!
//! Source documents spell book names inconsistently: Roman ordinals
//! (`II Raja-raja`), glued digits (`1Samuel`), stray non-breaking spaces, or
//! extended titles (`Kidung Agung Salomo`). [`Normalizer::normalize`] rewrites
//! them into the spelling used by the [`Catalog`](crate::Catalog). The result
//! is not guaranteed to resolve; callers skip names the catalog does not know.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static ROMAN_ORDINAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(i{1,3})[\s.\-]+(.+)$").expect("roman ordinal pattern is valid")
});

static GLUED_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9])([A-Za-z])").expect("glued digit pattern is valid"));

/// Extended titles the ordinal and digit rules do not cover.
pub static STANDARD_ALIASES: [(&str, &str); 2] = [
    ("Kidung Agung Salomo", "Kidung Agung"),
    ("Wahyu Yohanes", "Wahyu"),
];

/// A book name that has been through [`Normalizer::normalize`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedName(String);

impl NormalizedName {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for NormalizedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NormalizedName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Rewrites raw source book names into canonical spelling.
#[derive(Debug, Clone)]
pub struct Normalizer {
    aliases: HashMap<&'static str, &'static str>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::standard()
    }
}

impl Normalizer {
    /// Build a normalizer with the given alias table.
    #[must_use]
    pub fn new(aliases: &[(&'static str, &'static str)]) -> Self {
        Self {
            aliases: aliases.iter().copied().collect(),
        }
    }

    /// Normalizer with [`STANDARD_ALIASES`].
    #[must_use]
    pub fn standard() -> Self {
        Self::new(&STANDARD_ALIASES)
    }

    /// Normalize a raw book name.
    ///
    /// 1. Non-breaking spaces become spaces, whitespace is trimmed and collapsed.
    /// 2. A leading `I`/`II`/`III` plus separator becomes `1`/`2`/`3` and a space.
    /// 3. A leading digit glued to a letter gets a space inserted.
    /// 4. Known aliases are substituted.
    #[must_use]
    pub fn normalize(&self, raw: &str) -> NormalizedName {
        let mut name = raw
            .replace('\u{a0}', " ")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");

        if let Some(caps) = ROMAN_ORDINAL.captures(&name) {
            let digit = match caps[1].to_ascii_uppercase().as_str() {
                "I" => "1",
                "II" => "2",
                _ => "3",
            };
            name = format!("{digit} {}", caps[2].trim());
        }

        let name = GLUED_DIGIT.replacen(&name, 1, "$1 $2").into_owned();

        match self.aliases.get(name.as_str()) {
            Some(target) => NormalizedName((*target).to_string()),
            None => NormalizedName(name),
        }
    }
}
