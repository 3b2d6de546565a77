//! Display-name → alpha-2 code resolution.
//!
//! The table is closed: it enumerates the countries the UI offers, it is not
//! queried from the API. A name outside the table is an error, never a
//! pass-through, so typos surface instead of producing an empty fetch.

use crate::error::{Error, Result};

/// API-specific country code (lowercase alpha-2).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CountryCode(String);

impl CountryCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CountryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Closed mapping of supported display names to alpha-2 codes.
const COUNTRY_CODES: &[(&str, &str)] = &[
    ("Argentina", "ar"),
    ("Australia", "au"),
    ("Austria", "at"),
    ("Bangladesh", "bd"),
    ("Belgium", "be"),
    ("Brazil", "br"),
    ("Canada", "ca"),
    ("Chile", "cl"),
    ("China", "cn"),
    ("Colombia", "co"),
    ("Czechia", "cz"),
    ("Denmark", "dk"),
    ("Egypt", "eg"),
    ("Ethiopia", "et"),
    ("Finland", "fi"),
    ("France", "fr"),
    ("Germany", "de"),
    ("Ghana", "gh"),
    ("Greece", "gr"),
    ("India", "in"),
    ("Indonesia", "id"),
    ("Iran", "ir"),
    ("Ireland", "ie"),
    ("Israel", "il"),
    ("Italy", "it"),
    ("Japan", "jp"),
    ("Kenya", "ke"),
    ("Malaysia", "my"),
    ("Mexico", "mx"),
    ("Morocco", "ma"),
    ("Netherlands", "nl"),
    ("New Zealand", "nz"),
    ("Nigeria", "ng"),
    ("Norway", "no"),
    ("Pakistan", "pk"),
    ("Peru", "pe"),
    ("Philippines", "ph"),
    ("Poland", "pl"),
    ("Portugal", "pt"),
    ("Romania", "ro"),
    ("Russia", "ru"),
    ("Saudi Arabia", "sa"),
    ("Senegal", "sn"),
    ("Singapore", "sg"),
    ("South Africa", "za"),
    ("South Korea", "kr"),
    ("Spain", "es"),
    ("Sweden", "se"),
    ("Switzerland", "ch"),
    ("Tanzania", "tz"),
    ("Thailand", "th"),
    ("Turkey", "tr"),
    ("Uganda", "ug"),
    ("Ukraine", "ua"),
    ("United Kingdom", "gb"),
    ("United States", "us"),
    ("Vietnam", "vn"),
];

/// Resolve a user-supplied display name to its API code.
///
/// Matching ignores ASCII case and surrounding whitespace; anything else must
/// match the table exactly. No side effects.
pub fn resolve(display_name: &str) -> Result<CountryCode> {
    let wanted = display_name.trim();
    COUNTRY_CODES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(wanted))
        .map(|(_, code)| CountryCode(code.to_string()))
        .ok_or_else(|| Error::UnknownCountry(display_name.to_string()))
}

/// Display names in table order, for the UI to enumerate.
pub fn supported_countries() -> impl Iterator<Item = &'static str> {
    COUNTRY_CODES.iter().map(|(name, _)| *name)
}
