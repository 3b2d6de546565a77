use crate::models::CountryStats;
use anyhow::Result;
use csv::WriterBuilder;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Save a snapshot as CSV with header.
pub fn save_csv<P: AsRef<Path>>(records: &[CountryStats], path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.serialize(("country", "confirmed", "deaths", "recovered", "active", "critical", "last_update"))?;
    for r in records {
        wtr.serialize((
            &r.country,
            r.confirmed,
            r.deaths,
            r.recovered,
            r.active,
            r.critical,
            r.last_update.map(|t| t.to_rfc3339()),
        ))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Save a snapshot as pretty JSON array.
pub fn save_json<P: AsRef<Path>>(records: &[CountryStats], path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(records)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}
