// src/pwned/mod.rs
use std::time::Duration;
use thiserror::Error;
use log::{debug, warn};
use crate::crypto;
use crate::models::PwnedReport;

/// Number of hash characters sent to the range API.
const PREFIX_LEN: usize = 5;

#[derive(Debug, Error)]
pub enum PwnedError {
    #[error("Network error while contacting HIBP: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Unexpected error: {0}")]
    MalformedResponse(String),
}

pub type Result<T> = std::result::Result<T, PwnedError>;

/// Client for the Have I Been Pwned range API (k-anonymity model).
///
/// Only the first five characters of the SHA-1 hash leave the process.
#[derive(Clone)]
pub struct PwnedChecker {
    client: reqwest::Client,
    base_url: String,
}

impl PwnedChecker {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Look the password up and return a report, failures included.
    pub async fn check(&self, password: &str) -> PwnedReport {
        match self.lookup(password).await {
            Ok(report) => report,
            Err(e) => {
                warn!("⚠️ Breach lookup failed: {}", e);
                PwnedReport::error(e.to_string())
            }
        }
    }

    pub async fn lookup(&self, password: &str) -> Result<PwnedReport> {
        let sha1 = crypto::sha1_hex(password);
        let (prefix, suffix) = sha1.split_at(PREFIX_LEN);

        let url = format!("{}/range/{}", self.base_url, prefix);
        debug!("🔍 Querying range API for prefix {}", prefix);

        let body = self.client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(match find_breach_count(&body, suffix)? {
            Some(count) => PwnedReport::found(&sha1, &count),
            None => PwnedReport::not_found(&sha1),
        })
    }
}

/// Scan a range response (`SUFFIX:COUNT` per line) for `suffix`.
pub fn find_breach_count(body: &str, suffix: &str) -> Result<Option<String>> {
    for line in body.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut parts = line.split(':');
        let (hash, count) = match (parts.next(), parts.next(), parts.next()) {
            (Some(hash), Some(count), None) => (hash, count),
            _ => {
                return Err(PwnedError::MalformedResponse(format!(
                    "unexpected range line '{}'",
                    line
                )))
            }
        };

        if hash.eq_ignore_ascii_case(suffix) {
            return Ok(Some(count.trim().to_string()));
        }
    }

    Ok(None)
}
