use crate::models::{CountryStats, GlobalSummary, Metric};

/// Sum confirmed/deaths/recovered/active across a snapshot.
///
/// Absent fields count as 0 (the bulk path zero-fills them anyway). An empty
/// snapshot yields the all-zero summary; order of the input never matters.
pub fn summarize(records: &[CountryStats]) -> GlobalSummary {
    let mut out = GlobalSummary::default();
    for r in records {
        out.confirmed += r.metric(Metric::Confirmed);
        out.deaths += r.metric(Metric::Deaths);
        out.recovered += r.metric(Metric::Recovered);
        out.active += r.metric(Metric::Active);
    }
    out
}

/// Top `top_n` countries by `metric`, descending.
///
/// The sort is stable, so ties keep their input order. A `top_n` past the end
/// returns every record.
pub fn rank(records: &[CountryStats], metric: Metric, top_n: usize) -> Vec<CountryStats> {
    let mut out = records.to_vec();
    out.sort_by(|a, b| b.metric(metric).cmp(&a.metric(metric)));
    out.truncate(top_n);
    out
}
