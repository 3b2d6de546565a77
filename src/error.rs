use thiserror::Error;

/// Everything that can go wrong between a user-supplied country name and a
/// normalized record. All variants are recoverable at the caller; the CLI maps
/// each one to a message and exits nonzero, a GUI would show a banner.
#[derive(Debug, Error)]
pub enum Error {
    /// The display name is not in the resolver's table.
    #[error("unknown country: {0:?} is not in the supported country table")]
    UnknownCountry(String),

    /// Connection refused, DNS failure, or the per-call timeout elapsed.
    /// Not retried: transport-level failures tend to outlive a 4s backoff.
    #[error("network error: {0}")]
    Network(String),

    /// A non-200, non-transient HTTP status. Failed on the first attempt.
    #[error("request failed with HTTP {status}")]
    Http { status: u16, body: String },

    /// HTTP 200 whose body carries the API's "Unauthorized"/"not subscribed"
    /// marker. Usually a missing or revoked API key.
    #[error("API rejected the credentials (check COVID_API_KEY / COVID_API_HOST)")]
    Auth,

    /// HTTP 200 whose body is empty or not a recognizable record list.
    #[error("API returned no data for this query")]
    EmptyResult,

    /// A numeric field held something that is not a number.
    #[error("malformed record: {0}")]
    Schema(String),

    /// All attempts saw a transient status (429/500/503).
    #[error("gave up after {attempts} attempts, last status HTTP {last_status}")]
    RetriesExhausted { attempts: u32, last_status: u16 },

    /// A required environment variable is unset. Startup-time error, surfaced
    /// to the operator rather than falling back to a placeholder key.
    #[error("missing configuration: set the {0} environment variable")]
    MissingConfig(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
