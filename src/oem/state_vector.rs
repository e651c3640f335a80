use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::{
    constants::{Kilometer, KilometerPerSecond},
    tracker_errors::TrackerError,
};

/// A scalar element of the OEM (`<X_DOT units="km/s">-4.63</X_DOT>`).
///
/// The numeric text is kept verbatim; it is only interpreted on demand so that one bad sample
/// never prevents the rest of the feed from being decoded. On the JSON side the element keeps the
/// `@units` / `#text` shape used by the cache.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    #[serde(rename = "@units", default, skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,

    #[serde(
        rename(serialize = "#text", deserialize = "$text"),
        alias = "#text",
        default
    )]
    pub text: String,
}

impl Quantity {
    pub fn new(text: impl Into<String>, units: Option<&str>) -> Self {
        Quantity {
            units: units.map(str::to_string),
            text: text.into(),
        }
    }

    /// Numeric value of the element, `None` if the text is not a number.
    pub fn value(&self) -> Option<f64> {
        self.text.trim().parse::<f64>().ok()
    }
}

/// One sample of the ephemeris: the position and velocity of the object at `epoch`.
///
/// `epoch` is the exact string delivered by the feed; it doubles as the cache key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateVector {
    #[serde(rename = "EPOCH")]
    pub epoch: String,

    #[serde(rename = "X", default, skip_serializing_if = "Option::is_none")]
    pub x: Option<Quantity>,
    #[serde(rename = "Y", default, skip_serializing_if = "Option::is_none")]
    pub y: Option<Quantity>,
    #[serde(rename = "Z", default, skip_serializing_if = "Option::is_none")]
    pub z: Option<Quantity>,

    #[serde(rename = "X_DOT", default, skip_serializing_if = "Option::is_none")]
    pub x_dot: Option<Quantity>,
    #[serde(rename = "Y_DOT", default, skip_serializing_if = "Option::is_none")]
    pub y_dot: Option<Quantity>,
    #[serde(rename = "Z_DOT", default, skip_serializing_if = "Option::is_none")]
    pub z_dot: Option<Quantity>,
}

impl StateVector {
    /// Build a sample from numeric components, with the units used by the ISS feed.
    pub fn new(
        epoch: impl Into<String>,
        position: Vector3<Kilometer>,
        velocity: Vector3<KilometerPerSecond>,
    ) -> Self {
        let km = |v: f64| Some(Quantity::new(v.to_string(), Some("km")));
        let kms = |v: f64| Some(Quantity::new(v.to_string(), Some("km/s")));
        StateVector {
            epoch: epoch.into(),
            x: km(position.x),
            y: km(position.y),
            z: km(position.z),
            x_dot: kms(velocity.x),
            y_dot: kms(velocity.y),
            z_dot: kms(velocity.z),
        }
    }

    fn component(
        &self,
        quantity: &Option<Quantity>,
        field: &'static str,
    ) -> Result<f64, TrackerError> {
        let quantity = quantity
            .as_ref()
            .ok_or_else(|| TrackerError::MissingComponent {
                epoch: self.epoch.clone(),
                field,
            })?;
        quantity
            .value()
            .ok_or_else(|| TrackerError::InvalidComponent {
                epoch: self.epoch.clone(),
                field,
                value: quantity.text.clone(),
            })
    }

    /// Velocity vector (`X_DOT`, `Y_DOT`, `Z_DOT`).
    ///
    /// Return
    /// ------
    /// * the velocity components, in the feed units (km/s for the ISS)
    /// * [`TrackerError::MissingComponent`] if a component element is absent
    /// * [`TrackerError::InvalidComponent`] if a component is not a number
    pub fn velocity(&self) -> Result<Vector3<KilometerPerSecond>, TrackerError> {
        Ok(Vector3::new(
            self.component(&self.x_dot, "X_DOT")?,
            self.component(&self.y_dot, "Y_DOT")?,
            self.component(&self.z_dot, "Z_DOT")?,
        ))
    }

    /// Position vector (`X`, `Y`, `Z`), same failure modes as [`StateVector::velocity`].
    pub fn position(&self) -> Result<Vector3<Kilometer>, TrackerError> {
        Ok(Vector3::new(
            self.component(&self.x, "X")?,
            self.component(&self.y, "Y")?,
            self.component(&self.z, "Z")?,
        ))
    }

    /// JSON record stored in the epoch cache.
    pub fn to_record(&self) -> Result<String, TrackerError> {
        Ok(serde_json::to_string(self)?)
    }
}
