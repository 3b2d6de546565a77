use covstats_rs::normalize::{normalize_record, normalize_records};
use covstats_rs::{CountryStats, Error, MissingPolicy};

#[test]
fn parse_sample_flat_payload() {
    let sample = r#"
    [
      {
        "country": "Ghana",
        "code": "GH",
        "confirmed": 171657,
        "recovered": 170142,
        "critical": 2,
        "deaths": 1462,
        "lastChange": "2023-03-21T09:30:16+01:00",
        "lastUpdate": "2023-03-23T08:45:02+00:00"
      }
    ]
    "#;
    let v: serde_json::Value = serde_json::from_str(sample).unwrap();
    let rec = normalize_record(&v.as_array().unwrap()[0], MissingPolicy::Absent).unwrap();
    assert_eq!(rec.country, "Ghana");
    assert_eq!(rec.confirmed, Some(171_657));
    assert_eq!(rec.deaths, Some(1_462));
    assert_eq!(rec.recovered, Some(170_142));
    // Not in the payload, and the single-country policy keeps it that way.
    assert_eq!(rec.active, None);
    assert_eq!(CountryStats::display(rec.active), "N/A");
    let updated = rec.last_update.expect("lastUpdate should parse");
    assert_eq!(updated.to_rfc3339(), "2023-03-23T08:45:02+00:00");
}

#[test]
fn parse_sample_nested_payload() {
    let sample = r#"
    {
      "results": 2,
      "response": [
        {
          "country": "Ghana",
          "cases": { "new": null, "active": 15, "critical": 2, "recovered": 150, "total": 170 },
          "deaths": { "new": null, "total": 5 },
          "day": "2023-03-23"
        },
        {
          "country": "Kenya",
          "cases": { "active": 100, "recovered": 900, "total": 1010 },
          "deaths": { "total": 10 },
          "day": "2023-03-23"
        }
      ]
    }
    "#;
    let v: serde_json::Value = serde_json::from_str(sample).unwrap();
    let raw = v.get("response").unwrap().as_array().unwrap();
    let recs = normalize_records(raw, MissingPolicy::Zero).unwrap();
    assert_eq!(recs.len(), 2);
    assert_eq!(recs[0].country, "Ghana");
    assert_eq!(recs[0].confirmed, Some(170));
    assert_eq!(recs[0].deaths, Some(5));
    assert_eq!(recs[1].country, "Kenya");
    // Kenya has no critical count; the bulk policy zero-fills it.
    assert_eq!(recs[1].critical, Some(0));
}

#[test]
fn one_bad_record_aborts_the_whole_batch() {
    let raw = vec![
        serde_json::json!({ "country": "Ghana", "confirmed": 170 }),
        serde_json::json!({ "country": "Kenya", "confirmed": { "oops": true } }),
    ];
    match normalize_records(&raw, MissingPolicy::Zero) {
        Err(Error::Schema(msg)) => assert!(msg.contains("confirmed")),
        other => panic!("expected Schema error, got {:?}", other),
    }
}

#[test]
fn negative_and_fractional_counts_are_schema_errors() {
    for bad in [serde_json::json!(-5), serde_json::json!(1.5)] {
        let raw = serde_json::json!({ "country": "Ghana", "deaths": bad });
        assert!(matches!(
            normalize_record(&raw, MissingPolicy::Zero),
            Err(Error::Schema(_))
        ));
    }
}

#[test]
fn null_counts_follow_the_missing_policy() {
    let raw = serde_json::json!({ "country": "Ghana", "confirmed": 170, "deaths": null });
    let zero = normalize_record(&raw, MissingPolicy::Zero).unwrap();
    assert_eq!(zero.deaths, Some(0));
    let absent = normalize_record(&raw, MissingPolicy::Absent).unwrap();
    assert_eq!(absent.deaths, None);
}
