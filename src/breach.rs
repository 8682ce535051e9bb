use std::time::Duration;

use log::{debug, info, warn};
use sha1::{Digest, Sha1};
use zeroize::Zeroizing;

pub use crate::error::{Error, Result};

pub const DEFAULT_ENDPOINT: &str = "https://api.pwnedpasswords.com/range/";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Length of the part of the hash that is sent to the range service.
pub const PREFIX_LENGTH: usize = 5;

/// The outcome of a completed breach check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BreachResult {
    /// How many times the password has been seen in breaches, 0 if never.
    pub count: u64,
}

impl BreachResult {
    pub fn is_compromised(&self) -> bool {
        self.count > 0
    }
}

/// An uppercase hex SHA-1 digest split at `PREFIX_LENGTH`.
#[derive(Clone, PartialEq, Eq)]
pub struct HashRange {
    pub prefix: String,
    pub suffix: String,
}

impl std::fmt::Debug for HashRange {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "HashRange({}…)", self.prefix)
    }
}

impl HashRange {
    pub fn new(candidate: &str) -> HashRange {
        let digest = Sha1::digest(candidate.as_bytes());
        let hex = Zeroizing::new(hex::encode_upper(digest));

        HashRange {
            prefix: hex[..PREFIX_LENGTH].to_owned(),
            suffix: hex[PREFIX_LENGTH..].to_owned(),
        }
    }
}

/// Something that can answer a range query: given the first five hex characters of a SHA-1
/// hash, return the text body listing every known `SUFFIX:COUNT` sharing that prefix.
pub trait RangeClient {
    fn fetch_range(&self, prefix: &str) -> Result<String>;
}

/// Range client backed by a blocking http client.
pub struct HttpRangeClient {
    client: reqwest::blocking::Client,
    endpoint: String,
    add_padding: bool,
}

impl HttpRangeClient {
    pub fn new(endpoint: &str, timeout: Duration, add_padding: bool) -> Result<HttpRangeClient> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("passgan/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(HttpRangeClient {
            client,
            endpoint: endpoint.to_owned(),
            add_padding,
        })
    }

    pub fn url(&self, prefix: &str) -> String {
        format!("{}{}", self.endpoint, prefix)
    }
}

impl RangeClient for HttpRangeClient {
    fn fetch_range(&self, prefix: &str) -> Result<String> {
        let mut request = self.client.get(self.url(prefix));
        if self.add_padding {
            request = request.header("Add-Padding", "true");
        }

        let response = request.send()?.error_for_status()?;
        Ok(response.text()?)
    }
}

/// Scans a range response for `suffix` and returns its count, 0 if the suffix isn't listed.
///
/// Only the matching record has to be well formed, other lines are skipped.
pub fn find_count(body: &str, suffix: &str) -> Result<u64> {
    for line in body.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (record_suffix, count) = match line.split_once(':') {
            Some(parts) => parts,
            None => continue,
        };
        if record_suffix == suffix {
            return Ok(count.trim().parse::<u64>()?);
        }
    }

    Ok(0)
}

/// Checks `candidate` against the breach corpus behind `client`.
///
/// Only the five character hash prefix is handed to the client, the password and the rest of
/// the hash stay in this process.
pub fn check<C: RangeClient + ?Sized>(client: &C, candidate: &str) -> Result<BreachResult> {
    if candidate.is_empty() {
        return Err(Error::EmptyCandidate);
    }

    let range = HashRange::new(candidate);
    debug!("querying range {}", range.prefix);

    let body = client.fetch_range(&range.prefix).map_err(|err| {
        warn!("range query for {} failed: {}", range.prefix, err);
        err
    })?;

    let count = find_count(&body, &range.suffix)?;
    info!("range {} answered, breach count {}", range.prefix, count);

    Ok(BreachResult { count })
}

#[cfg(test)]
#[path = "tests/breach.rs"]
mod breach_tests;
