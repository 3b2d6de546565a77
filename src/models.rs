use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What to do with a numeric field that is absent from the source payload.
///
/// The two call sites intentionally differ: the bulk path sums across
/// countries and wants zeros, the single-country path renders to a user and
/// wants an honest "N/A". The choice is a parameter, never implicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingPolicy {
    /// Absent numerics become `Some(0)`.
    Zero,
    /// Absent numerics stay `None`; `CountryStats::display` renders "N/A".
    Absent,
}

/// Canonical per-country record (one row = one country's latest snapshot).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CountryStats {
    pub country: String,
    pub confirmed: Option<u64>,
    pub deaths: Option<u64>,
    pub recovered: Option<u64>,
    pub active: Option<u64>,
    pub critical: Option<u64>,
    pub last_update: Option<DateTime<Utc>>,
}

impl CountryStats {
    /// Metric value for sorting/summing; an absent field counts as 0.
    pub fn metric(&self, metric: Metric) -> u64 {
        let v = match metric {
            Metric::Confirmed => self.confirmed,
            Metric::Deaths => self.deaths,
            Metric::Recovered => self.recovered,
            Metric::Active => self.active,
        };
        v.unwrap_or(0)
    }

    /// Render an optional count for display ("N/A" when absent).
    pub fn display(v: Option<u64>) -> String {
        match v {
            Some(n) => n.to_string(),
            None => "N/A".to_string(),
        }
    }
}

/// Field to rank countries by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Confirmed,
    Deaths,
    Recovered,
    Active,
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Metric::Confirmed => "confirmed",
            Metric::Deaths => "deaths",
            Metric::Recovered => "recovered",
            Metric::Active => "active",
        };
        f.write_str(s)
    }
}

/// Totals across every country in one snapshot. Derived on each bulk fetch,
/// never stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GlobalSummary {
    pub confirmed: u64,
    pub deaths: u64,
    pub recovered: u64,
    pub active: u64,
}
