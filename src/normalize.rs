//! Mapping raw API payloads into [`CountryStats`].
//!
//! The upstream API serves two record shapes depending on endpoint: flat keys
//! (`confirmed`, `deaths`, `recovered`, …) on the per-country endpoint and
//! nested keys (`cases.total`, `deaths.total`, …) on the bulk endpoint. Both
//! land in the same canonical record here.

use crate::error::{Error, Result};
use crate::models::{CountryStats, MissingPolicy};
use chrono::{DateTime, Utc};
use serde_json::Value;

/// Normalize one raw record.
///
/// `policy` decides what an absent numeric field becomes (see
/// [`MissingPolicy`]). A present but non-numeric value is always
/// [`Error::Schema`], regardless of policy.
pub fn normalize_record(raw: &Value, policy: MissingPolicy) -> Result<CountryStats> {
    let country = raw
        .get("country")
        .and_then(Value::as_str)
        .ok_or_else(|| Error::Schema("record has no country name".into()))?
        .to_string();

    // Shape detection: the bulk endpoint nests counts under a "cases" object.
    let nested = raw.get("cases").is_some_and(Value::is_object);

    let (confirmed, deaths, recovered, active, critical, last_update) = if nested {
        (
            count_at(raw, &["cases", "total"])?,
            count_at(raw, &["deaths", "total"])?,
            count_at(raw, &["cases", "recovered"])?,
            count_at(raw, &["cases", "active"])?,
            count_at(raw, &["cases", "critical"])?,
            timestamp(raw, &["time", "day"]),
        )
    } else {
        (
            count_at(raw, &["confirmed"])?,
            count_at(raw, &["deaths"])?,
            count_at(raw, &["recovered"])?,
            count_at(raw, &["active"])?,
            count_at(raw, &["critical"])?,
            timestamp(raw, &["lastUpdate", "lastChange"]),
        )
    };

    let fill = |v: Option<u64>| match policy {
        MissingPolicy::Zero => v.or(Some(0)),
        MissingPolicy::Absent => v,
    };

    Ok(CountryStats {
        country,
        confirmed: fill(confirmed),
        deaths: fill(deaths),
        recovered: fill(recovered),
        active: fill(active),
        critical: fill(critical),
        last_update,
    })
}

/// Normalize a whole bulk payload. The first malformed record aborts the
/// fetch; there is no partial-success state.
pub fn normalize_records(raw: &[Value], policy: MissingPolicy) -> Result<Vec<CountryStats>> {
    raw.iter().map(|v| normalize_record(v, policy)).collect()
}

/// Read a non-negative count at `path`. Absent and `null` are `None`; a
/// present value must be a non-negative integer, though the API sometimes
/// serializes counts as strings, so numeric strings are accepted too.
fn count_at(raw: &Value, path: &[&str]) -> Result<Option<u64>> {
    let mut cur = raw;
    for key in path {
        match cur.get(key) {
            Some(v) => cur = v,
            None => return Ok(None),
        }
    }
    match cur {
        Value::Null => Ok(None),
        Value::Number(n) => n.as_u64().map(Some).ok_or_else(|| {
            Error::Schema(format!("{}: expected a non-negative integer, got {}", path.join("."), n))
        }),
        Value::String(s) => s.parse::<u64>().map(Some).map_err(|_| {
            Error::Schema(format!("{}: expected a non-negative integer, got {:?}", path.join("."), s))
        }),
        other => Err(Error::Schema(format!(
            "{}: expected a non-negative integer, got {}",
            path.join("."),
            other
        ))),
    }
}

/// Best-effort timestamp from the first present key. The API is inconsistent
/// here (RFC 3339 with and without offset, or a bare date); an unparsable
/// value is treated as absent rather than failing the record.
fn timestamp(raw: &Value, keys: &[&str]) -> Option<DateTime<Utc>> {
    let s = keys.iter().find_map(|k| raw.get(*k).and_then(Value::as_str))?;
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(date) = chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(DateTime::from_naive_utc_and_offset(
            date.and_hms_opt(0, 0, 0)?,
            Utc,
        ));
    }
    None
}
