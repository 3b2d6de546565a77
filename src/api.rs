//! Synchronous client for the COVID-19 statistics API (RapidAPI).
//!
//! Two endpoints are covered: `country/code` (one country, flat payload) and
//! `statistics` (all countries, nested payload). Responses are cached per
//! request key for a fixed TTL, so repeated UI actions within the window cost
//! no network call.
//!
//! ### Notes
//! - Credentials travel as `x-rapidapi-key` / `x-rapidapi-host` headers and
//!   come from [`Config`], never from source.
//! - Transient statuses (429/500/503) are retried twice with doubling
//!   backoff; every other failure is surfaced on the first attempt.
//! - The API signals authorization failures inside HTTP 200 bodies; those are
//!   classified as [`Error::Auth`] here, not passed to the normalizer.
//!
//! Typical usage:
//! ```no_run
//! # use covstats_rs::{Client, Config, countries};
//! let client = Client::new(Config::from_env()?);
//! let code = countries::resolve("Ghana")?;
//! let stats = client.fetch_country(&code)?;
//! # Ok::<(), covstats_rs::Error>(())
//! ```

use crate::cache::ResponseCache;
use crate::config::Config;
use crate::countries::CountryCode;
use crate::error::{Error, Result};
use crate::models::{CountryStats, MissingPolicy};
use crate::normalize;
use log::{debug, warn};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use serde_json::Value;
use std::time::Duration;

/// Statuses worth a retry: rate limit and temporary server-side conditions.
const TRANSIENT: [u16; 3] = [429, 500, 503];

/// Attempts per logical request (1 initial + 2 retries).
const MAX_ATTEMPTS: u32 = 3;

/// Raw outcome of one HTTP attempt.
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Seam between the retry loop and the wire. Production uses
/// [`HttpTransport`]; tests substitute a scripted fake.
pub trait Transport: Send + Sync {
    /// Perform one GET. Network-level failure (refused connection, DNS,
    /// timeout) is [`Error::Network`]; any HTTP status is an `Ok`.
    fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<RawResponse>;
}

/// Blocking `reqwest` transport with the bounded per-call timeout.
pub struct HttpTransport {
    http: HttpClient,
}

impl Default for HttpTransport {
    fn default() -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(10)) // total request timeout
            .connect_timeout(Duration::from_secs(5))
            .redirect(Policy::limited(5))
            .user_agent(concat!("covstats_rs/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("reqwest client build");
        Self { http }
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<RawResponse> {
        let mut req = self.http.get(url);
        for (name, value) in headers {
            req = req.header(*name, *value);
        }
        let resp = req.send().map_err(|e| Error::Network(e.to_string()))?;
        let status = resp.status().as_u16();
        let body = resp.text().map_err(|e| Error::Network(e.to_string()))?;
        Ok(RawResponse { status, body })
    }
}

// Allow - and _ unescaped in query values (common in country codes).
const SAFE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_');

fn enc(s: &str) -> String {
    percent_encoding::utf8_percent_encode(s.trim(), SAFE).to_string()
}

pub struct Client {
    pub base_url: String,
    config: Config,
    transport: Box<dyn Transport>,
    cache: ResponseCache,
    backoff_unit: Duration,
}

impl Client {
    pub fn new(config: Config) -> Self {
        Self {
            base_url: "https://covid-19-data.p.rapidapi.com".into(),
            config,
            transport: Box::new(HttpTransport::default()),
            cache: ResponseCache::default(),
            backoff_unit: Duration::from_secs(1),
        }
    }

    /// Swap the wire implementation (tests).
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = transport;
        self
    }

    /// Override the cache TTL.
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache = ResponseCache::new(ttl);
        self
    }

    /// Override the base backoff delay (tests shrink it to stay fast).
    pub fn with_backoff_unit(mut self, unit: Duration) -> Self {
        self.backoff_unit = unit;
        self
    }

    /// Fetch the latest snapshot for one country.
    ///
    /// Absent numeric fields stay `None` so the presentation layer can render
    /// "N/A" instead of a fabricated zero.
    pub fn fetch_country(&self, code: &CountryCode) -> Result<CountryStats> {
        let key = format!("code:{}", code);
        if let Some(cached) = self.cache.get(&key) {
            debug!("cache hit for {}", key);
            if let Some(stats) = cached.into_iter().next() {
                return Ok(stats);
            }
        }

        let url = format!(
            "{}/country/code?code={}&format=json",
            self.base_url,
            enc(code.as_str())
        );
        let body = self.get_with_retry(&url)?;
        let records = parse_records(&body)?;
        let stats = normalize::normalize_record(&records[0], MissingPolicy::Absent)?;
        self.cache.put(&key, vec![stats.clone()]);
        Ok(stats)
    }

    /// Fetch the latest snapshot for every country the API knows.
    ///
    /// Absent numeric fields become 0 so the aggregator can sum rows without
    /// special cases.
    pub fn fetch_all(&self) -> Result<Vec<CountryStats>> {
        const KEY: &str = "all";
        if let Some(cached) = self.cache.get(KEY) {
            debug!("cache hit for {}", KEY);
            return Ok(cached);
        }

        let url = format!("{}/statistics", self.base_url);
        let body = self.get_with_retry(&url)?;
        let records = parse_records(&body)?;
        let stats = normalize::normalize_records(&records, MissingPolicy::Zero)?;
        self.cache.put(KEY, stats.clone());
        Ok(stats)
    }

    /// One GET with the transient-status retry policy.
    ///
    /// 429/500/503 sleep 1, 2 backoff units between attempts, three attempts
    /// total. Any other non-200 status and all network-level failures fail on
    /// the spot; a backoff will not fix a 404 or an unplugged cable.
    fn get_with_retry(&self, url: &str) -> Result<String> {
        let headers = [
            ("x-rapidapi-key", self.config.api_key.as_str()),
            ("x-rapidapi-host", self.config.api_host.as_str()),
        ];
        let mut delay = self.backoff_unit;
        let mut last_status = 0;
        for attempt in 1..=MAX_ATTEMPTS {
            let resp = self.transport.get(url, &headers)?;
            match resp.status {
                200 => {
                    debug!("GET {} succeeded on attempt {}", url, attempt);
                    return Ok(resp.body);
                }
                s if TRANSIENT.contains(&s) => {
                    last_status = s;
                    if attempt < MAX_ATTEMPTS {
                        warn!(
                            "HTTP {} from {}, retrying in {:?} (attempt {}/{})",
                            s, url, delay, attempt, MAX_ATTEMPTS
                        );
                        std::thread::sleep(delay);
                        delay *= 2;
                    }
                }
                s => {
                    return Err(Error::Http {
                        status: s,
                        body: resp.body,
                    });
                }
            }
        }
        Err(Error::RetriesExhausted {
            attempts: MAX_ATTEMPTS,
            last_status,
        })
    }
}

/// Classify a 200 body: auth failure in disguise, empty result, or a list of
/// raw records ready for the normalizer.
fn parse_records(body: &str) -> Result<Vec<Value>> {
    let v: Value = serde_json::from_str(body)
        .map_err(|e| Error::Schema(format!("response is not JSON: {}", e)))?;

    // Authorization failures arrive as 200s with a message field.
    if let Some(msg) = v.get("message").and_then(Value::as_str) {
        if msg.contains("Unauthorized") || msg.contains("not subscribed") {
            return Err(Error::Auth);
        }
    }

    let records = match v {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("response") {
            Some(Value::Array(items)) => items,
            _ => return Err(Error::EmptyResult),
        },
        _ => return Err(Error::EmptyResult),
    };
    if records.is_empty() {
        return Err(Error::EmptyResult);
    }
    Ok(records)
}
