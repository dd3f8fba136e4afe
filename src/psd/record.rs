//! PSD (three lines) record
use crate::{
    epoch::{from_year_doy_seconds, parse_date_fields, pivot_year},
    error::ParsingError,
    parsing::FieldCursor,
    psd::PsdModel,
    site::SiteId,
};

use hifitime::Epoch;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const CODE_COLUMNS: std::ops::Range<usize> = 1..5;
const DOMES_COLUMNS: std::ops::Range<usize> = 9..18;
const DATE_COLUMNS: std::ops::Range<usize> = 19..31;
const COMPONENT_COLUMN: usize = 32;
const MODEL_COLUMN: usize = 34;
const COEFFICIENT_WIDTH: usize = 10;

/// Topocentric component
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Component {
    East,
    North,
    Up,
}

impl Component {
    /// Catalog tag
    pub fn tag(&self) -> char {
        match self {
            Self::East => 'E',
            Self::North => 'N',
            Self::Up => 'U',
        }
    }
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// [PsdRecord] describes the post seismic deformation of a site,
/// following one earthquake.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PsdRecord {
    pub site: SiteId,
    /// Earthquake epoch
    pub earthquake: Epoch,
    pub east: PsdModel,
    pub north: PsdModel,
    pub up: PsdModel,
}

impl PsdRecord {
    /// Correction (mm) per (east, north, up) component,
    /// `dt` decimal years after the earthquake.
    pub fn correction(&self, dt: f64) -> (f64, f64, f64) {
        (
            self.east.correction(dt),
            self.north.correction(dt),
            self.up.correction(dt),
        )
    }
}

/// Parses site identity and earthquake epoch, described by the East line.
fn parse_identity(line: &str) -> Result<(SiteId, Epoch), ParsingError> {
    let code = line.get(CODE_COLUMNS).ok_or(ParsingError::LineTooShort)?;
    let domes = line.get(DOMES_COLUMNS).ok_or(ParsingError::LineTooShort)?;
    let date = line.get(DATE_COLUMNS).ok_or(ParsingError::LineTooShort)?;
    let (yy, doy, secs) = parse_date_fields(date)?;
    let epoch = from_year_doy_seconds(pivot_year(yy), doy, secs);
    Ok((SiteId::new(code, domes), epoch))
}

/// Parses the [PsdModel] of one component line,
/// verifying its component tag.
fn parse_component(line: &str, component: Component) -> Result<PsdModel, ParsingError> {
    let tag = line
        .get(COMPONENT_COLUMN..COMPONENT_COLUMN + 1)
        .and_then(|s| s.chars().next())
        .ok_or(ParsingError::LineTooShort)?;
    if tag != component.tag() {
        return Err(ParsingError::ComponentMismatch {
            expected: component.tag(),
            found: tag,
        });
    }

    let model = line
        .get(MODEL_COLUMN..MODEL_COLUMN + 1)
        .ok_or(ParsingError::LineTooShort)?;
    let model = model
        .parse::<u8>()
        .map_err(|_| ParsingError::InvalidModel(model.to_string()))?;
    let nb_coefficients =
        PsdModel::nb_coefficients(model).ok_or(ParsingError::InvalidModel(model.to_string()))?;

    let mut coefficients = [0.0_f64; 4];
    let mut cursor = FieldCursor::new(line, MODEL_COLUMN + 1);
    for coefficient in coefficients.iter_mut().take(nb_coefficients) {
        *coefficient = cursor.next_float(COEFFICIENT_WIDTH)?;
    }

    PsdModel::new(model, &coefficients[..nb_coefficients])
}

impl PsdRecord {
    /// Builds a [PsdRecord] from its East, North and Up lines
    pub fn from_lines(east: &str, north: &str, up: &str) -> Result<Self, ParsingError> {
        let (site, earthquake) = parse_identity(east)?;
        Ok(Self {
            site,
            earthquake,
            east: parse_component(east, Component::East)?,
            north: parse_component(north, Component::North)?,
            up: parse_component(up, Component::Up)?,
        })
    }
}
