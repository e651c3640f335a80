//! # Epoch timestamps
//!
//! The ISS OEM labels each state vector with a textual UTC epoch. Two encodings are found in the
//! wild and both must be accepted for the same field:
//!
//! ```text
//! calendar     2024-03-05T12:00:00.000Z
//! day-of-year  2024-065T12:00:00.000Z
//! ```
//!
//! [`parse_epoch`] tries the calendar form first and falls back to the day-of-year form. Both
//! produce a [`hifitime::Epoch`] in the UTC time scale, so the two spellings of one instant
//! compare equal.
use hifitime::Epoch;
use nom::{
    bytes::complete::take_while_m_n,
    character::complete::char,
    combinator::{all_consuming, map, map_res, verify},
    IResult, Parser,
};

use crate::tracker_errors::TrackerError;

type TimeOfDay = (u8, u8, u8, u32);

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn year(input: &str) -> IResult<&str, i32> {
    map_res(take_while_m_n(4, 4, is_digit), str::parse::<i32>).parse(input)
}

/// Month, day, hour, minute or second: one or two digits, as `strptime` accepts them.
fn short_field(input: &str) -> IResult<&str, u8> {
    map_res(take_while_m_n(1, 2, is_digit), str::parse::<u8>).parse(input)
}

fn month(input: &str) -> IResult<&str, u8> {
    verify(short_field, |m: &u8| (1..=12).contains(m)).parse(input)
}

fn hour(input: &str) -> IResult<&str, u8> {
    verify(short_field, |h: &u8| *h <= 23).parse(input)
}

fn minute(input: &str) -> IResult<&str, u8> {
    verify(short_field, |m: &u8| *m <= 59).parse(input)
}

/// Seconds up to 61, the `strptime` bound that leaves room for leap seconds.
fn second(input: &str) -> IResult<&str, u8> {
    verify(short_field, |s: &u8| *s <= 61).parse(input)
}

fn ordinal_day(input: &str) -> IResult<&str, u16> {
    map_res(take_while_m_n(1, 3, is_digit), str::parse::<u16>).parse(input)
}

/// Fractional seconds (microsecond resolution at most), returned in nanoseconds.
fn fraction(input: &str) -> IResult<&str, u32> {
    map_res(take_while_m_n(1, 6, is_digit), |digits: &str| {
        digits
            .parse::<u32>()
            .map(|value| value * 10u32.pow(9 - digits.len() as u32))
    })
    .parse(input)
}

fn time_of_day(input: &str) -> IResult<&str, TimeOfDay> {
    map(
        (
            char('T'),
            hour,
            char(':'),
            minute,
            char(':'),
            second,
            char('.'),
            fraction,
            char('Z'),
        ),
        |(_, hour, _, minute, _, second, _, nanos, _)| (hour, minute, second, nanos),
    )
    .parse(input)
}

fn calendar_stamp(input: &str) -> IResult<&str, ((i32, u8, u8), TimeOfDay)> {
    all_consuming((
        map(
            (year, char('-'), month, char('-'), short_field),
            |(year, _, month, _, day)| (year, month, day),
        ),
        time_of_day,
    ))
    .parse(input)
}

fn day_of_year_stamp(input: &str) -> IResult<&str, ((i32, u16), TimeOfDay)> {
    all_consuming((
        map((year, char('-'), ordinal_day), |(year, _, ordinal)| {
            (year, ordinal)
        }),
        time_of_day,
    ))
    .parse(input)
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Convert a day of year (1-based) into a (month, day) pair.
fn ordinal_to_month_day(year: i32, ordinal: u16) -> Option<(u8, u8)> {
    let february = if is_leap_year(year) { 29 } else { 28 };
    let month_lengths: [u16; 12] = [31, february, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

    if ordinal == 0 {
        return None;
    }

    let mut remaining = ordinal;
    for (month_idx, length) in month_lengths.iter().enumerate() {
        if remaining <= *length {
            return Some((month_idx as u8 + 1, remaining as u8));
        }
        remaining -= length;
    }
    None
}

fn build_epoch(
    raw: &str,
    (year, month, day): (i32, u8, u8),
    (hour, minute, second, nanos): TimeOfDay,
) -> Result<Epoch, TrackerError> {
    Epoch::maybe_from_gregorian_utc(year, month, day, hour, minute, second, nanos)
        .map_err(|_| TrackerError::MalformedTimestamp(raw.to_string()))
}

fn parse_calendar(raw: &str) -> Result<Epoch, TrackerError> {
    let (_, (date, time)) =
        calendar_stamp(raw).map_err(|_| TrackerError::MalformedTimestamp(raw.to_string()))?;
    build_epoch(raw, date, time)
}

fn parse_day_of_year(raw: &str) -> Result<Epoch, TrackerError> {
    let (_, ((year, ordinal), time)) =
        day_of_year_stamp(raw).map_err(|_| TrackerError::MalformedTimestamp(raw.to_string()))?;
    let (month, day) = ordinal_to_month_day(year, ordinal)
        .ok_or_else(|| TrackerError::MalformedTimestamp(raw.to_string()))?;
    build_epoch(raw, (year, month, day), time)
}

/// Parse an OEM epoch string into a UTC [`Epoch`].
///
/// Arguments
/// ---------
/// * `raw`: the epoch text, either `YYYY-MM-DDTHH:MM:SS.ffffffZ` or `YYYY-DDDTHH:MM:SS.ffffffZ`
///
/// Return
/// ------
/// * the parsed instant
/// * [`TrackerError::MalformedTimestamp`] when neither form matches
pub fn parse_epoch(raw: &str) -> Result<Epoch, TrackerError> {
    parse_calendar(raw).or_else(|_| parse_day_of_year(raw))
}

/// Render an instant in the calendar form used by the feed (millisecond precision).
pub fn format_epoch(epoch: Epoch) -> String {
    let (year, month, day, hour, minute, second, nanos) = epoch.to_gregorian_utc();
    format!(
        "{year:04}-{month:02}-{day:02}T{hour:02}:{minute:02}:{second:02}.{:03}Z",
        nanos / 1_000_000
    )
}

/// Current instant read from the system clock, in UTC.
pub fn now_utc() -> Result<Epoch, TrackerError> {
    Epoch::now().map_err(|e| TrackerError::ClockUnavailable(e.to_string()))
}
