//! # CCSDS Orbit Ephemeris Message (XML)
//!
//! Typed model of the ISS trajectory feed. The document is decoded with
//! [`quick_xml::de`] into the structures below instead of being walked as a generic tree:
//! a feed missing one of the mandatory containers is rejected with a
//! [`TrackerError::FeedSchema`] naming the element, rather than failing later on a lookup.
//!
//! ```text
//! ndm
//! └── oem (@id, @version)
//!     ├── header   CREATION_DATE, ORIGINATOR
//!     └── body
//!         └── segment
//!             ├── metadata  OBJECT_NAME, OBJECT_ID, CENTER_NAME, REF_FRAME, TIME_SYSTEM, ...
//!             └── data
//!                 ├── COMMENT*
//!                 └── stateVector*  EPOCH, X, Y, Z, X_DOT, Y_DOT, Z_DOT
//! ```
//!
//! Numeric coordinates are kept as text inside [`Quantity`] and validated lazily by
//! [`StateVector::velocity`] / [`StateVector::position`].
mod state_vector;

pub use state_vector::{Quantity, StateVector};

use quick_xml::de::from_str;
use serde::Deserialize;

use crate::{constants::EphemerisSet, tracker_errors::TrackerError};

/// Root `<ndm>` element.
#[derive(Debug, Clone, Deserialize)]
pub struct OemDocument {
    pub oem: Oem,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Oem {
    #[serde(rename = "@id", default)]
    pub id: Option<String>,
    #[serde(rename = "@version", default)]
    pub version: Option<String>,
    #[serde(default)]
    pub header: Option<OemHeader>,
    pub body: OemBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OemHeader {
    #[serde(rename = "CREATION_DATE", default)]
    pub creation_date: Option<String>,
    #[serde(rename = "ORIGINATOR", default)]
    pub originator: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OemBody {
    pub segment: OemSegment,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OemSegment {
    #[serde(default)]
    pub metadata: Option<OemMetadata>,
    pub data: OemData,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OemMetadata {
    #[serde(rename = "OBJECT_NAME", default)]
    pub object_name: Option<String>,
    #[serde(rename = "OBJECT_ID", default)]
    pub object_id: Option<String>,
    #[serde(rename = "CENTER_NAME", default)]
    pub center_name: Option<String>,
    #[serde(rename = "REF_FRAME", default)]
    pub ref_frame: Option<String>,
    #[serde(rename = "TIME_SYSTEM", default)]
    pub time_system: Option<String>,
    #[serde(rename = "START_TIME", default)]
    pub start_time: Option<String>,
    #[serde(rename = "STOP_TIME", default)]
    pub stop_time: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OemData {
    #[serde(rename = "COMMENT", default)]
    pub comments: Vec<String>,
    #[serde(rename = "stateVector", default)]
    pub state_vectors: EphemerisSet,
}

impl OemDocument {
    /// Samples of the (single) segment, in feed order.
    pub fn state_vectors(&self) -> &[StateVector] {
        &self.oem.body.segment.data.state_vectors
    }

    pub fn into_state_vectors(self) -> EphemerisSet {
        self.oem.body.segment.data.state_vectors
    }

    pub fn metadata(&self) -> Option<&OemMetadata> {
        self.oem.body.segment.metadata.as_ref()
    }

    pub fn comments(&self) -> &[String] {
        &self.oem.body.segment.data.comments
    }
}

/// Decode an OEM XML document.
///
/// Arguments
/// ---------
/// * `xml`: the raw feed content
///
/// Return
/// ------
/// * the typed document, possibly with zero state vectors
/// * [`TrackerError::FeedSchema`] if the document is not well formed or a mandatory container
///   (`oem`, `body`, `segment`, `data`, `EPOCH`) is missing
pub fn parse_oem(xml: &str) -> Result<OemDocument, TrackerError> {
    Ok(from_str(xml)?)
}

/// First and last epoch of the set, as delivered by the feed.
pub fn data_range(entries: &[StateVector]) -> Option<(&str, &str)> {
    let first = entries.first()?;
    let last = entries.last()?;
    Some((first.epoch.as_str(), last.epoch.as_str()))
}

/// First sample whose epoch text is exactly `epoch`.
pub fn find_by_epoch<'a>(entries: &'a [StateVector], epoch: &str) -> Option<&'a StateVector> {
    entries.iter().find(|sv| sv.epoch == epoch)
}

#[cfg(test)]
mod oem_test {
    use super::*;

    const SMALL_OEM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ndm xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
  <oem id="CCSDS_OEM_VERS" version="2.0">
    <header>
      <CREATION_DATE>2024-065T02:24:05.166Z</CREATION_DATE>
      <ORIGINATOR>JSC</ORIGINATOR>
    </header>
    <body>
      <segment>
        <metadata>
          <OBJECT_NAME>ISS</OBJECT_NAME>
          <OBJECT_ID>1998-067-A</OBJECT_ID>
          <CENTER_NAME>EARTH</CENTER_NAME>
          <REF_FRAME>EME2000</REF_FRAME>
          <TIME_SYSTEM>UTC</TIME_SYSTEM>
          <START_TIME>2024-065T12:00:00.000Z</START_TIME>
          <STOP_TIME>2024-065T12:04:00.000Z</STOP_TIME>
        </metadata>
        <data>
          <COMMENT>Units are in kg and m^2</COMMENT>
          <COMMENT>MASS=459325.00</COMMENT>
          <stateVector>
            <EPOCH>2024-065T12:00:00.000Z</EPOCH>
            <X units="km">-4738.96</X>
            <Y units="km">3812.43</Y>
            <Z units="km">2833.22</Z>
            <X_DOT units="km/s">-3.00</X_DOT>
            <Y_DOT units="km/s">4.00</Y_DOT>
            <Z_DOT units="km/s">0.00</Z_DOT>
          </stateVector>
          <stateVector>
            <EPOCH>2024-065T12:04:00.000Z</EPOCH>
            <X units="km">-5301.12</X>
            <Y units="km">2711.90</Y>
            <Z units="km">3012.75</Z>
            <X_DOT units="km/s">1.0</X_DOT>
            <Z_DOT units="km/s">2.0</Z_DOT>
          </stateVector>
        </data>
      </segment>
    </body>
  </oem>
</ndm>
"#;

    #[test]
    fn test_parse_small_oem() {
        let doc = parse_oem(SMALL_OEM).unwrap();
        assert_eq!(doc.oem.version.as_deref(), Some("2.0"));
        assert_eq!(
            doc.oem.header.as_ref().and_then(|h| h.originator.as_deref()),
            Some("JSC")
        );
        assert_eq!(
            doc.metadata().and_then(|m| m.object_name.as_deref()),
            Some("ISS")
        );
        assert_eq!(doc.comments().len(), 2);

        let vectors = doc.state_vectors();
        assert_eq!(vectors.len(), 2);
        assert_eq!(vectors[0].epoch, "2024-065T12:00:00.000Z");
        assert_eq!(
            vectors[0].x_dot,
            Some(Quantity::new("-3.00", Some("km/s")))
        );
        assert!(vectors[1].y_dot.is_none());
    }

    #[test]
    fn test_missing_container_is_schema_error() {
        let xml = r#"<ndm><oem><header/></oem></ndm>"#;
        let err = parse_oem(xml).unwrap_err();
        assert!(matches!(err, TrackerError::FeedSchema(_)));
        assert!(err.to_string().contains("body"));
    }

    #[test]
    fn test_empty_data_section() {
        let xml = r#"<ndm><oem><body><segment><data></data></segment></body></oem></ndm>"#;
        let doc = parse_oem(xml).unwrap();
        assert!(doc.state_vectors().is_empty());
        assert_eq!(data_range(doc.state_vectors()), None);
    }

    #[test]
    fn test_range_and_lookup() {
        let doc = parse_oem(SMALL_OEM).unwrap();
        let vectors = doc.state_vectors();
        assert_eq!(
            data_range(vectors),
            Some(("2024-065T12:00:00.000Z", "2024-065T12:04:00.000Z"))
        );
        assert_eq!(
            find_by_epoch(vectors, "2024-065T12:04:00.000Z").map(|sv| sv.epoch.as_str()),
            Some("2024-065T12:04:00.000Z")
        );
        assert!(find_by_epoch(vectors, "2024-065T12:08:00.000Z").is_none());
    }
}
