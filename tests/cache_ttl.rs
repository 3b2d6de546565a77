use covstats_rs::{Client, Config, CountryStats, RawResponse, ResponseCache, Transport, countries};
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

const FLAT_BODY: &str = r#"[{"country":"Ghana","confirmed":170,"deaths":5,"recovered":150}]"#;

/// Always answers 200 with the same body; counts how often it is asked.
struct Counting {
    calls: Arc<AtomicU32>,
}

impl Transport for Counting {
    fn get(&self, _url: &str, _headers: &[(&str, &str)]) -> covstats_rs::Result<RawResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(RawResponse {
            status: 200,
            body: FLAT_BODY.to_string(),
        })
    }
}

fn client_with_ttl(ttl: Duration) -> (Client, Arc<AtomicU32>) {
    let calls = Arc::new(AtomicU32::new(0));
    let config = Config {
        api_key: "test-key".into(),
        api_host: "test-host".into(),
    };
    let client = Client::new(config)
        .with_transport(Box::new(Counting {
            calls: Arc::clone(&calls),
        }))
        .with_cache_ttl(ttl);
    (client, calls)
}

fn ghana() -> CountryStats {
    CountryStats {
        country: "Ghana".into(),
        confirmed: Some(170),
        deaths: Some(5),
        recovered: Some(150),
        active: Some(15),
        critical: None,
        last_update: None,
    }
}

#[test]
fn repeated_fetch_within_ttl_hits_the_cache() {
    let (client, calls) = client_with_ttl(Duration::from_secs(3600));
    let code = countries::resolve("Ghana").unwrap();
    let first = client.fetch_country(&code).unwrap();
    let second = client.fetch_country(&code).unwrap();
    assert_eq!(first, second);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn different_keys_do_not_share_entries() {
    let (client, calls) = client_with_ttl(Duration::from_secs(3600));
    let gh = countries::resolve("Ghana").unwrap();
    let ke = countries::resolve("Kenya").unwrap();
    client.fetch_country(&gh).unwrap();
    client.fetch_country(&ke).unwrap();
    client.fetch_country(&gh).unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn expired_entries_trigger_a_refetch() {
    let (client, calls) = client_with_ttl(Duration::from_millis(10));
    let code = countries::resolve("Ghana").unwrap();
    client.fetch_country(&code).unwrap();
    std::thread::sleep(Duration::from_millis(20));
    client.fetch_country(&code).unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn cache_get_put_expire_roundtrip() {
    let cache = ResponseCache::new(Duration::from_millis(10));
    assert!(cache.is_empty());
    assert!(cache.get("code:gh").is_none());

    cache.put("code:gh", vec![ghana()]);
    assert_eq!(cache.len(), 1);
    assert_eq!(cache.get("code:gh").unwrap()[0].country, "Ghana");

    std::thread::sleep(Duration::from_millis(20));
    // Past the TTL the value is unreachable even before housekeeping runs.
    assert!(cache.get("code:gh").is_none());
    cache.expire();
    assert!(cache.is_empty());
}
