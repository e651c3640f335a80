//! # Feed fetcher
//!
//! An [`EphemerisSource`] produces a freshly decoded [`OemDocument`] on every call. Nothing is
//! cached here: callers that want the samples twice fetch twice.
//!
//! * [`HttpFeed`] – the live feed, retrieved through [`TrackerEnv`].
//! * [`FileFeed`] – a local copy of the XML document (offline runs, fixtures).
use camino::{Utf8Path, Utf8PathBuf};
use tracing::debug;

use crate::{
    env_state::TrackerEnv,
    oem::{parse_oem, OemDocument},
    tracker_errors::TrackerError,
};

pub trait EphemerisSource: Send + Sync {
    /// Retrieve and decode the ephemeris document.
    fn fetch(&self) -> Result<OemDocument, TrackerError>;

    /// Human readable location of the source, for logs.
    fn describe(&self) -> String;
}

#[derive(Debug, Clone, Default)]
pub struct HttpFeed {
    env: TrackerEnv,
}

impl HttpFeed {
    pub fn new(env: TrackerEnv) -> Self {
        HttpFeed { env }
    }
}

impl EphemerisSource for HttpFeed {
    fn fetch(&self) -> Result<OemDocument, TrackerError> {
        let xml = self.env.get_feed()?;
        debug!(bytes = xml.len(), url = %self.env.feed_url, "ephemeris feed downloaded");
        parse_oem(&xml)
    }

    fn describe(&self) -> String {
        self.env.feed_url.clone()
    }
}

#[derive(Debug, Clone)]
pub struct FileFeed {
    path: Utf8PathBuf,
}

impl FileFeed {
    pub fn new(path: impl AsRef<Utf8Path>) -> Self {
        FileFeed {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl EphemerisSource for FileFeed {
    fn fetch(&self) -> Result<OemDocument, TrackerError> {
        let xml = std::fs::read_to_string(&self.path)?;
        debug!(bytes = xml.len(), path = %self.path, "ephemeris feed read from disk");
        parse_oem(&xml)
    }

    fn describe(&self) -> String {
        format!("file://{}", self.path)
    }
}
