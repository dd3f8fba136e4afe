//! Calendar helpers: catalog dates, fractional years
//! and decimal year intervals.
use hifitime::{Epoch, TimeScale, Unit};

use crate::error::ParsingError;

/// Conventional year length, used to express intervals in decimal years
pub const DAYS_PER_YEAR: f64 = 365.25;

/// All catalog epochs are expressed in a uniform time scale,
/// so intervals are pure calendar intervals.
pub(crate) const TIME_SCALE: TimeScale = TimeScale::TAI;

/// Two digit years are pivoted on 1970:
/// 00..=69 stand for 2000..=2069, 70..=99 stand for 1970..=1999.
pub fn pivot_year(yy: u32) -> i32 {
    if yy < 70 {
        2000 + yy as i32
    } else {
        1900 + yy as i32
    }
}

pub(crate) fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Builds an [Epoch] from year, day of year (1 = January 1st)
/// and seconds of day.
/// Fields are not validated: day of year or seconds overflowing
/// simply roll over.
pub fn from_year_doy_seconds(year: i32, doy: u32, seconds: u32) -> Epoch {
    Epoch::from_gregorian_at_midnight(year, 1, 1, TIME_SCALE)
        + (doy as i64 - 1) * Unit::Day
        + seconds as i64 * Unit::Second
}

/// Fractional years we accept as reference epochs
pub(crate) const REFERENCE_YEARS: std::ops::Range<f64> = 1.0..10_000.0;

/// Expresses `t` the way catalog dates are expressed: UTC calendar fields,
/// labelled in the catalog time scale. Epochs already expressed in
/// that time scale (like those built by [from_year_doy_seconds]) are left untouched.
pub fn catalog_epoch(t: Epoch) -> Epoch {
    if t.time_scale == TIME_SCALE {
        return t;
    }
    let (y, m, d, hh, mm, ss, ns) = t.to_gregorian_utc();
    Epoch::maybe_from_gregorian(y, m, d, hh, mm, ss, ns, TIME_SCALE).unwrap_or(t)
}

/// Converts a fractional year (like 2010.0 or 2005.5) to an [Epoch].
/// The fraction is scaled over the length of that year.
pub fn epoch_from_fractional_year(year: f64) -> Epoch {
    let integer = year.floor();
    let fraction = year - integer;
    let integer = integer as i32;
    let days = if is_leap_year(integer) { 366.0 } else { 365.0 };
    Epoch::from_gregorian_at_midnight(integer, 1, 1, TIME_SCALE) + fraction * days * Unit::Day
}

/// Returns (to - from) expressed in decimal years
/// (elapsed days / 365.25). Negative when `to` precedes `from`.
pub fn decimal_years(from: Epoch, to: Epoch) -> f64 {
    let dt = to - from;
    dt.to_seconds() / 86_400.0 / DAYS_PER_YEAR
}

fn parse_digits(content: &str) -> Result<u32, ParsingError> {
    content
        .trim()
        .parse::<u32>()
        .map_err(|_| ParsingError::IntegerParsing(content.to_string()))
}

/// Splits a "YY:DDD:SSSSS" descriptor into its raw (yy, doy, seconds) fields.
/// Seconds may have any number of digits.
pub(crate) fn parse_date_fields(content: &str) -> Result<(u32, u32, u32), ParsingError> {
    let mut items = content.trim().split(':');
    let (yy, doy, secs) = match (items.next(), items.next(), items.next(), items.next()) {
        (Some(yy), Some(doy), Some(secs), None) => (yy, doy, secs),
        _ => return Err(ParsingError::Date(content.to_string())),
    };
    if yy.len() != 2 || doy.len() != 3 || secs.is_empty() {
        return Err(ParsingError::Date(content.to_string()));
    }
    Ok((parse_digits(yy)?, parse_digits(doy)?, parse_digits(secs)?))
}

/// Parses a "YY:DDD:SSSSS" catalog date.
/// An all zero descriptor ("00:000:00000") means "unbounded" and returns None.
pub fn parse_catalog_date(content: &str) -> Result<Option<Epoch>, ParsingError> {
    let (yy, doy, secs) = parse_date_fields(content)?;
    if yy == 0 && doy == 0 && secs == 0 {
        Ok(None)
    } else {
        Ok(Some(from_year_doy_seconds(pivot_year(yy), doy, secs)))
    }
}

/// Parses a "YYYY-DDD" (year, day of year) descriptor, at midnight.
pub fn parse_year_doy(content: &str) -> Result<Epoch, ParsingError> {
    let (year, doy) = content
        .trim()
        .split_once('-')
        .ok_or(ParsingError::Date(content.to_string()))?;
    if year.len() != 4 || !year.chars().all(|c| c.is_ascii_digit()) {
        return Err(ParsingError::Date(content.to_string()));
    }
    if doy.is_empty() || doy.len() > 3 {
        return Err(ParsingError::Date(content.to_string()));
    }
    let year = year
        .parse::<i32>()
        .map_err(|_| ParsingError::Date(content.to_string()))?;
    let doy = parse_digits(doy)?;
    Ok(from_year_doy_seconds(year, doy, 0))
}
