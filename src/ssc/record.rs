//! SSC (two lines) station record
use crate::{
    epoch::parse_catalog_date,
    error::ParsingError,
    parsing::FieldCursor,
    site::{SiteId, DOMES_LEN},
    Vector3D,
};

use hifitime::Epoch;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Both lines have numerical fields starting at this column
const NUMERICS_COLUMN: usize = 36;

/// Numerical field window width
const FIELD_WIDTH: usize = 20;

/// Site name columns (position line)
const NAME_COLUMNS: std::ops::Range<usize> = 10..27;

/// Observation technique columns (position line)
const TECHNIQUE_COLUMNS: std::ops::Range<usize> = 27..31;

/// Site code columns (position line)
const CODE_COLUMNS: std::ops::Range<usize> = 32..36;

/// [Validity] is the half open time interval [start, end)
/// during which a [StationRecord] applies.
/// None stands for an unbounded side.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Validity {
    pub start: Option<Epoch>,
    pub end: Option<Epoch>,
}

impl Validity {
    /// Returns true if `t` lies within [start, end)
    pub fn contains(&self, t: Epoch) -> bool {
        let after_start = self.start.map_or(true, |start| t >= start);
        let before_end = self.end.map_or(true, |end| t < end);
        after_start && before_end
    }
    /// Returns true if this interval is not limited at all
    pub fn is_unlimited(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

/// [StationRecord] is one catalog entry: position and velocity
/// of a station, that apply within a [Validity] interval.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StationRecord {
    pub site: SiteId,
    /// Site name (free text, may be empty)
    pub name: String,
    /// Observation technique, like "GNSS" or "VLBI"
    pub technique: String,
    /// ECEF position (m)
    pub position: Vector3D,
    /// ECEF velocity (m/y)
    pub velocity: Vector3D,
    /// Position sigmas (m)
    pub position_sigma: Vector3D,
    /// Velocity sigmas (m/y)
    pub velocity_sigma: Vector3D,
    pub validity: Validity,
}

/// Parses 3 values then 3 sigmas
fn parse_vectors(cursor: &mut FieldCursor) -> Result<(Vector3D, Vector3D), ParsingError> {
    let x = cursor.next_float(FIELD_WIDTH)?;
    let y = cursor.next_float(FIELD_WIDTH)?;
    let z = cursor.next_float(FIELD_WIDTH)?;
    let sx = cursor.next_float(FIELD_WIDTH)?;
    let sy = cursor.next_float(FIELD_WIDTH)?;
    let sz = cursor.next_float(FIELD_WIDTH)?;
    Ok(((x, y, z), (sx, sy, sz)))
}

/// Validity interval is described past the sigmas, as
/// `YY:DDD:SSSSS YY:DDD:SSSSS`. Its absence means unlimited validity.
fn parse_validity(content: &str) -> Result<Validity, ParsingError> {
    let colon = match content.find(':') {
        Some(colon) => colon,
        None => return Ok(Validity::default()),
    };
    let start = colon
        .checked_sub(2)
        .ok_or(ParsingError::Date(content.to_string()))?;

    let dates = content
        .get(start..)
        .ok_or(ParsingError::Date(content.to_string()))?;

    let mut items = dates.split_whitespace();
    let (from, to) = match (items.next(), items.next()) {
        (Some(from), Some(to)) => (from, to),
        _ => return Err(ParsingError::Date(dates.to_string())),
    };

    Ok(Validity {
        start: parse_catalog_date(from)?,
        end: parse_catalog_date(to)?,
    })
}

/// Content of the position line, waiting for its velocity line
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PositionLine {
    pub site: SiteId,
    pub name: String,
    pub technique: String,
    pub position: Vector3D,
    pub sigma: Vector3D,
    pub validity: Validity,
}

impl PositionLine {
    /// Completes the record with its velocity line
    pub fn with_velocity_line(self, line: &str) -> Result<StationRecord, ParsingError> {
        let (velocity, velocity_sigma) = parse_velocity_line(line, &self.site)?;
        Ok(StationRecord {
            site: self.site,
            name: self.name,
            technique: self.technique,
            position: self.position,
            velocity,
            position_sigma: self.sigma,
            velocity_sigma,
            validity: self.validity,
        })
    }
}

/// Parses the position line.
/// Columns [0, 9) hold the DOMES number, [10, 27) the site name,
/// [27, 31) the technique and [32, 36) the site code.
/// Six numerical fields follow (x, y, z, sx, sy, sz)
/// and the optional validity interval.
pub(crate) fn parse_position_line(line: &str) -> Result<PositionLine, ParsingError> {
    if line.len() < NUMERICS_COLUMN {
        return Err(ParsingError::LineTooShort);
    }
    let domes = line.get(0..DOMES_LEN).ok_or(ParsingError::LineTooShort)?;
    let name = line.get(NAME_COLUMNS).ok_or(ParsingError::LineTooShort)?;
    let technique = line.get(TECHNIQUE_COLUMNS).ok_or(ParsingError::LineTooShort)?;
    let code = line.get(CODE_COLUMNS).ok_or(ParsingError::LineTooShort)?;

    let mut cursor = FieldCursor::new(line, NUMERICS_COLUMN);
    let (position, sigma) = parse_vectors(&mut cursor)?;
    let validity = parse_validity(cursor.remainder())?;

    Ok(PositionLine {
        site: SiteId::new(code, domes),
        name: name.trim().to_string(),
        technique: technique.trim().to_string(),
        position,
        sigma,
        validity,
    })
}

/// Parses the velocity line, which must describe the same DOMES number.
fn parse_velocity_line(
    line: &str,
    site: &SiteId,
) -> Result<(Vector3D, Vector3D), ParsingError> {
    if line.len() < NUMERICS_COLUMN {
        return Err(ParsingError::LineTooShort);
    }
    let domes = line.get(0..DOMES_LEN).ok_or(ParsingError::LineTooShort)?;
    if domes != site.domes() {
        return Err(ParsingError::DomesMismatch {
            expected: site.domes().to_string(),
            found: domes.to_string(),
        });
    }
    let mut cursor = FieldCursor::new(line, NUMERICS_COLUMN);
    parse_vectors(&mut cursor)
}

impl StationRecord {
    /// Builds a [StationRecord] from its two lines
    pub fn from_lines(position_line: &str, velocity_line: &str) -> Result<Self, ParsingError> {
        parse_position_line(position_line)?.with_velocity_line(velocity_line)
    }
    /// Linear extrapolation of the position, `dyr` decimal years
    /// away from the reference epoch.
    pub fn position_at(&self, dyr: f64) -> Vector3D {
        (
            self.position.0 + self.velocity.0 * dyr,
            self.position.1 + self.velocity.1 * dyr,
            self.position.2 + self.velocity.2 * dyr,
        )
    }
}
