//! # Tracker environment state
//!
//! [`TrackerEnv`] owns the blocking HTTP client used to reach the upstream ephemeris feed.
//! It is cheap to clone and is shared by every fetch performed by the process.
//!
//! ```text
//! TrackerEnv
//! ├── http_client  (ureq::Agent, global timeout)
//! └── feed_url     (String)
//! ```
//!
//! The agent is built once; each call to [`TrackerEnv::get_from_url`] still performs a
//! complete, independent GET.
use std::convert::TryFrom;
use std::time::Duration;
use ureq::{
    http::{self, Uri},
    Agent,
};

use crate::{
    constants::{DEFAULT_FETCH_TIMEOUT, ISS_URL},
    tracker_errors::TrackerError,
};

#[derive(Debug, Clone)]
pub struct TrackerEnv {
    pub http_client: Agent,
    pub feed_url: String,
}

impl Default for TrackerEnv {
    fn default() -> Self {
        Self::new(ISS_URL, DEFAULT_FETCH_TIMEOUT)
    }
}

impl TrackerEnv {
    /// Create a new environment
    ///
    /// Arguments
    /// ---------
    /// * `feed_url`: location of the OEM XML document
    /// * `timeout`: global timeout of one retrieval (connect + transfer)
    pub fn new(feed_url: impl Into<String>, timeout: Duration) -> Self {
        let config = Agent::config_builder()
            .timeout_global(Some(timeout))
            .build();
        let agent: Agent = config.into();

        TrackerEnv {
            http_client: agent,
            feed_url: feed_url.into(),
        }
    }

    /// Blocking GET returning the response body.
    ///
    /// Transport failures and non 2xx statuses are both reported as
    /// [`TrackerError::UpstreamHttp`].
    pub fn get_from_url<U>(&self, url: U) -> Result<String, TrackerError>
    where
        Uri: TryFrom<U>,
        <Uri as TryFrom<U>>::Error: Into<http::Error>,
    {
        let body = self
            .http_client
            .get(url)
            .call()?
            .body_mut()
            .read_to_string()?;
        Ok(body)
    }

    /// Download the configured feed.
    pub fn get_feed(&self) -> Result<String, TrackerError> {
        self.get_from_url(self.feed_url.as_str())
    }
}
