//! covstats_rs
//!
//! A lightweight Rust library for retrieving, caching, and summarizing
//! COVID-19 country statistics. Pairs with the `covstats` CLI.
//!
//! ### Features
//! - Resolve display names to API country codes from a closed table
//! - Fetch one country or all countries, with transient-status retry and a
//!   TTL response cache
//! - Normalize flat and nested payload shapes into one canonical record
//! - Global totals and top-N rankings by metric
//! - Save snapshots as CSV or JSON
//!
//! ### Example
//! ```no_run
//! use covstats_rs::{Client, Config, Metric, countries, stats};
//!
//! let client = Client::new(Config::from_env()?);
//! let code = countries::resolve("Ghana")?;
//! let one = client.fetch_country(&code)?;
//! println!("{}: {}", one.country, covstats_rs::CountryStats::display(one.confirmed));
//!
//! let all = client.fetch_all()?;
//! let summary = stats::summarize(&all);
//! let top = stats::rank(&all, Metric::Confirmed, 10);
//! println!("{:?} / {} ranked rows", summary, top.len());
//! # Ok::<(), covstats_rs::Error>(())
//! ```

pub mod api;
pub mod cache;
pub mod config;
pub mod countries;
pub mod error;
pub mod models;
pub mod normalize;
pub mod stats;
pub mod storage;

pub use api::{Client, HttpTransport, RawResponse, Transport};
pub use cache::ResponseCache;
pub use config::Config;
pub use countries::CountryCode;
pub use error::{Error, Result};
pub use models::{CountryStats, GlobalSummary, Metric, MissingPolicy};
