//! Plain text summary of one ephemeris download: covered range, closest sample to a reference
//! instant, and speeds.
use std::io::Write;

use hifitime::Epoch;

use crate::{
    epoch_matcher::find_closest,
    oem::{data_range, OemDocument},
    speed::average_speed,
    time::format_epoch,
    tracker_errors::TrackerError,
};

/// Write the summary of `document` to `out`.
///
/// An empty feed is reported as such and is not an error; a malformed epoch is.
pub fn write_report<W: Write>(
    out: &mut W,
    document: &OemDocument,
    reference: Epoch,
) -> Result<(), TrackerError> {
    let entries = document.state_vectors();

    if let Some(name) = document.metadata().and_then(|m| m.object_name.as_deref()) {
        writeln!(out, "Object: {name}")?;
    }

    let Some((start, end)) = data_range(entries) else {
        writeln!(out, "No state vector data available.")?;
        return Ok(());
    };
    writeln!(out, "Data range: {start} to {end} ({} samples)", entries.len())?;

    if let Some(closest) = find_closest(entries, reference)? {
        writeln!(
            out,
            "Closest epoch to {}: {} (off by {})",
            format_epoch(reference),
            format_epoch(closest.epoch),
            closest.offset
        )?;
    }

    let speeds = average_speed(entries);
    match speeds.instantaneous {
        Some(speed) => writeln!(out, "Instantaneous speed: {speed:.3} km/s")?,
        None => writeln!(out, "Instantaneous speed: unavailable")?,
    }
    match speeds.average {
        Some(speed) => writeln!(out, "Average speed: {speed:.3} km/s")?,
        None => writeln!(out, "No valid data points for average speed calculation.")?,
    }

    Ok(())
}
