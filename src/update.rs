//! Release update checks.
//!
//! Queries a release-metadata endpoint (crates.io by default) for the latest
//! published version of upcheck. Checks run on a background thread and
//! deliver a [`CheckOutcome`] over a channel so the event loop stays
//! responsive; every check carries a request id so the app can discard
//! results from superseded attempts.

use semver::Version;
use serde::Deserialize;
use std::sync::mpsc::Sender;
use std::thread;
use std::time::Duration;
use thiserror::Error;
use ureq::Agent;

/// Ways a version lookup can fail.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CheckError {
    /// The endpoint answered with a non-success status code.
    #[error("release endpoint returned status {0}")]
    Http(u16),
    /// The endpoint could not be reached (DNS, TLS, timeout, ...).
    #[error("failed to reach release endpoint: {0}")]
    Transport(String),
    /// The response body was not the expected release metadata.
    #[error("malformed release metadata: {0}")]
    MalformedResponse(String),
    /// The reported version is not a valid semantic version.
    #[error("release endpoint reported unparsable version {0:?}")]
    BadVersion(String),
}

/// Result of a single version lookup, tagged with the request that issued it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    /// Request id handed out when the check was triggered.
    pub request: u64,
    /// The latest published version, or why it could not be determined.
    pub result: Result<Version, CheckError>,
}

#[derive(Debug, Deserialize)]
struct CratesIoResponse {
    #[serde(rename = "crate")]
    krate: CratesIoCrate,
}

#[derive(Debug, Deserialize)]
struct CratesIoCrate {
    max_version: String,
}

/// Spawns version lookups against a fixed endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checker {
    endpoint: String,
    user_agent: String,
}

impl Checker {
    /// Create a checker for the given endpoint, identifying as the given
    /// running version in the User-Agent header.
    #[must_use]
    pub fn new(endpoint: impl Into<String>, running: &Version) -> Self {
        Self {
            endpoint: endpoint.into(),
            user_agent: format!("upcheck/{running}"),
        }
    }

    /// Run a lookup on a background thread, delivering the outcome on `tx`.
    ///
    /// A send failure means the receiver is gone (the UI already shut
    /// down), so it is ignored.
    pub fn spawn(&self, request: u64, tx: Sender<CheckOutcome>) {
        let endpoint = self.endpoint.clone();
        let user_agent = self.user_agent.clone();

        thread::spawn(move || {
            tracing::debug!(request, endpoint = %endpoint, "starting version check");
            let result = fetch_latest(&endpoint, &user_agent);
            if let Err(err) = &result {
                tracing::warn!(request, error = %err, "version check failed");
            }
            let _ = tx.send(CheckOutcome { request, result });
        });
    }
}

/// Fetch the latest published version from `url`.
fn fetch_latest(url: &str, user_agent: &str) -> Result<Version, CheckError> {
    let config = ureq::config::Config::builder()
        .timeout_global(Some(Duration::from_secs(3)))
        .build();
    let agent: Agent = config.new_agent();

    let response = match agent.get(url).header("User-Agent", user_agent).call() {
        Ok(response) => response,
        Err(ureq::Error::StatusCode(status)) => return Err(CheckError::Http(status)),
        Err(err) => return Err(CheckError::Transport(err.to_string())),
    };

    let body: CratesIoResponse = response
        .into_body()
        .read_json()
        .map_err(|err| CheckError::MalformedResponse(err.to_string()))?;

    Version::parse(&body.krate.max_version)
        .map_err(|_| CheckError::BadVersion(body.krate.max_version))
}
