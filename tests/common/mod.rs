#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};

use camino::Utf8Path;
use iss_tracker::{
    feed::EphemerisSource,
    oem::{parse_oem, OemDocument},
    tracker_errors::TrackerError,
};

pub const SAMPLE_FEED: &str = "tests/data/ISS.OEM_J2K_EPH.sample.xml";

pub fn sample_feed_path() -> &'static Utf8Path {
    Utf8Path::new(SAMPLE_FEED)
}

pub fn sample_feed_xml() -> String {
    std::fs::read_to_string(SAMPLE_FEED).expect("sample feed fixture is readable")
}

/// One `<stateVector>` element; `None` drops the velocity component.
pub fn state_vector_xml(epoch: &str, velocity: [Option<&str>; 3]) -> String {
    let mut xml = format!(
        "<stateVector><EPOCH>{epoch}</EPOCH>\
         <X units=\"km\">-4738.9</X><Y units=\"km\">3812.4</Y><Z units=\"km\">2833.2</Z>"
    );
    for (name, value) in ["X_DOT", "Y_DOT", "Z_DOT"].iter().zip(velocity) {
        if let Some(value) = value {
            xml.push_str(&format!("<{name} units=\"km/s\">{value}</{name}>"));
        }
    }
    xml.push_str("</stateVector>");
    xml
}

/// Wrap state vector elements into a complete OEM document.
pub fn oem_xml(state_vectors: &[String]) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
         <ndm><oem id=\"CCSDS_OEM_VERS\" version=\"2.0\"><body><segment>\
         <metadata><OBJECT_NAME>ISS</OBJECT_NAME></metadata>\
         <data><COMMENT>fixture</COMMENT>{}</data>\
         </segment></body></oem></ndm>",
        state_vectors.concat()
    )
}

/// In-memory feed counting how many times it was fetched.
pub struct FixtureFeed {
    xml: String,
    fetches: AtomicUsize,
}

impl FixtureFeed {
    pub fn new(xml: impl Into<String>) -> Self {
        FixtureFeed {
            xml: xml.into(),
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl EphemerisSource for FixtureFeed {
    fn fetch(&self) -> Result<OemDocument, TrackerError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        parse_oem(&self.xml)
    }

    fn describe(&self) -> String {
        "fixture".to_string()
    }
}

/// Feed whose every retrieval fails like an unreachable host.
pub struct DownFeed;

impl EphemerisSource for DownFeed {
    fn fetch(&self) -> Result<OemDocument, TrackerError> {
        Err(TrackerError::IoError(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "feed host unreachable",
        )))
    }

    fn describe(&self) -> String {
        "down".to_string()
    }
}
