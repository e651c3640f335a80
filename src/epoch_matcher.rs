//! # Closest epoch search
//!
//! Linear scan over a set of state vectors, selecting the sample whose epoch is nearest to a
//! reference instant. Every epoch is parsed with [`parse_epoch`]; a single unparseable epoch
//! aborts the whole search.
use hifitime::{Duration, Epoch};

use crate::{oem::StateVector, time::parse_epoch, tracker_errors::TrackerError};

/// Result of [`find_closest`].
#[derive(Debug, Clone, PartialEq)]
pub struct ClosestMatch<'a> {
    pub state_vector: &'a StateVector,
    /// Parsed epoch of `state_vector`
    pub epoch: Epoch,
    /// Absolute distance between `epoch` and the reference instant
    pub offset: Duration,
}

/// Find the state vector closest in time to `reference`.
///
/// Arguments
/// ---------
/// * `entries`: samples to scan, in feed order
/// * `reference`: the instant to match, usually the current UTC time
///
/// Return
/// ------
/// * `Ok(Some(_))` with the sample minimizing `|epoch - reference|`; on ties the first one in
///   `entries` wins
/// * `Ok(None)` when `entries` is empty
/// * [`TrackerError::MalformedTimestamp`] as soon as one epoch cannot be parsed
pub fn find_closest(
    entries: &[StateVector],
    reference: Epoch,
) -> Result<Option<ClosestMatch<'_>>, TrackerError> {
    let mut best: Option<ClosestMatch> = None;

    for state_vector in entries {
        let epoch = parse_epoch(&state_vector.epoch)?;
        let offset = (epoch - reference).abs();

        match &best {
            Some(current) if offset >= current.offset => {}
            _ => {
                best = Some(ClosestMatch {
                    state_vector,
                    epoch,
                    offset,
                })
            }
        }
    }

    Ok(best)
}
