//! # Speed from state vectors
//!
//! The speed of one sample is the Euclidean norm of its velocity vector. Over a whole set,
//! [`average_speed`] reports both the speed of the **last** sample of the set and the mean speed
//! of every sample whose velocity can be read.
use tracing::{debug, warn};

use crate::{constants::KilometerPerSecond, oem::StateVector, tracker_errors::TrackerError};

/// Instantaneous speed of one sample.
///
/// Return
/// ------
/// * `sqrt(x_dot² + y_dot² + z_dot²)` in the feed velocity unit
/// * [`TrackerError::MissingComponent`] / [`TrackerError::InvalidComponent`] if one
///   velocity component cannot be read
pub fn speed_of(entry: &StateVector) -> Result<KilometerPerSecond, TrackerError> {
    Ok(entry.velocity()?.norm())
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpeedSummary {
    /// Speed of the last sample of the set
    pub instantaneous: Option<KilometerPerSecond>,
    /// Mean speed over the samples with a readable velocity
    pub average: Option<KilometerPerSecond>,
}

/// Instantaneous and average speed of a set of samples.
///
/// Arguments
/// ---------
/// * `entries`: samples in feed order
///
/// Return
/// ------
/// * `instantaneous`: speed of the last sample, `None` for an empty set or when that sample has
///   no readable velocity
/// * `average`: mean over the readable samples, `None` when there are none; unreadable samples
///   are left out of both the sum and the count
pub fn average_speed(entries: &[StateVector]) -> SpeedSummary {
    let Some(latest) = entries.last() else {
        debug!("no speed data available");
        return SpeedSummary::default();
    };

    let instantaneous = speed_of(latest)
        .inspect_err(|err| warn!(%err, "invalid velocity on the latest state vector"))
        .ok();

    let (sum, count) = entries
        .iter()
        .filter_map(|entry| speed_of(entry).ok())
        .fold((0.0, 0usize), |(sum, count), speed| (sum + speed, count + 1));

    let average = (count > 0).then(|| sum / count as f64);
    if count < entries.len() {
        debug!(
            skipped = entries.len() - count,
            "state vectors without readable velocity left out of the average"
        );
    }

    SpeedSummary {
        instantaneous,
        average,
    }
}
