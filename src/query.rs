//! Station coordinates queries, combining both catalogs.
use std::path::Path;

use hifitime::Epoch;

#[cfg(feature = "log")]
use log::{debug, info};

use crate::{
    coordinates::{GroundPosition, StationCoordinates},
    error::Error,
    extrapolation::extrapolate,
    merge::merge,
    psd::{accumulate, PsdReader},
    site::Matching,
    ssc::SscReader,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [Query] describes the requested sites and target epoch.
/// Sites may be requested by 4 character code, or by DOMES number.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    /// Requested site codes
    pub stations: Vec<String>,
    /// Requested DOMES numbers
    pub domes: Vec<String>,
    /// Target epoch
    pub epoch: Epoch,
}

impl Query {
    pub fn new(epoch: Epoch) -> Self {
        Self {
            stations: Vec::new(),
            domes: Vec::new(),
            epoch,
        }
    }
    /// Adds one site code to the request
    pub fn with_station(&self, code: &str) -> Self {
        let mut s = self.clone();
        s.stations.push(code.to_string());
        s
    }
    /// Adds one DOMES number to the request
    pub fn with_domes(&self, domes: &str) -> Self {
        let mut s = self.clone();
        s.domes.push(domes.to_string());
        s
    }
    /// Total number of requested sites
    pub fn len(&self) -> usize {
        self.stations.len() + self.domes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// [Solution] gathers the extrapolated coordinates, and the
/// frame they are expressed in.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Solution {
    /// Reference frame (like "ITRF2014")
    pub frame: String,
    /// Catalog reference epoch
    pub reference_epoch: Epoch,
    /// Target epoch
    pub epoch: Epoch,
    /// Resolved sites, sorted by identity
    pub stations: Vec<StationCoordinates>,
}

/// Extrapolates the requested sites using given SSC catalog.
/// The catalog is browsed once for site codes, then once more for DOMES
/// numbers, and both results are merged.
pub fn station_positions(ssc: impl AsRef<Path>, query: &Query) -> Result<Solution, Error> {
    let mut reader = SscReader::from_path(ssc)?;
    let header = reader.read_header()?;
    let reference_epoch = header.reference_epoch();

    #[cfg(feature = "log")]
    info!(
        "ssc: {} reference epoch {}",
        header.frame, reference_epoch
    );

    let by_code = if query.stations.is_empty() {
        Vec::new()
    } else {
        extrapolate(
            &mut reader,
            &query.stations,
            Matching::Code,
            query.epoch,
            reference_epoch,
        )?
    };

    let by_domes = if query.domes.is_empty() {
        Vec::new()
    } else {
        reader.read_header()?;
        extrapolate(
            &mut reader,
            &query.domes,
            Matching::Domes,
            query.epoch,
            reference_epoch,
        )?
    };

    let stations = merge(by_code, by_domes);

    #[cfg(feature = "log")]
    debug!("ssc: resolved {}/{} site(s)", stations.len(), query.len());

    Ok(Solution {
        frame: header.frame,
        reference_epoch,
        epoch: query.epoch,
        stations,
    })
}

/// Accumulates the post seismic corrections (mm, east/north/up stored in x/y/z)
/// of the requested sites, using given PSD catalog.
pub fn psd_corrections(
    psd: impl AsRef<Path>,
    query: &Query,
) -> Result<Vec<StationCoordinates>, Error> {
    let mut reader = PsdReader::from_path(psd)?;

    let by_code = if query.stations.is_empty() {
        Vec::new()
    } else {
        accumulate(&mut reader, &query.stations, Matching::Code, query.epoch)?
    };

    let by_domes = if query.domes.is_empty() {
        Vec::new()
    } else {
        reader.rewind()?;
        accumulate(&mut reader, &query.domes, Matching::Domes, query.epoch)?
    };

    Ok(merge(by_code, by_domes))
}

/// Applies post seismic corrections (mm, east/north/up) to extrapolated
/// positions (m). Each correction is rotated into the geocentric frame, at
/// the position of the site it applies to. Corrections are matched on
/// full site identity, positions without correction are left untouched.
pub fn apply_psd(stations: &mut [StationCoordinates], corrections: &[StationCoordinates]) {
    for station in stations.iter_mut() {
        let correction = match corrections.iter().find(|c| c.site == station.site) {
            Some(correction) => correction,
            None => continue,
        };
        let enu = (
            correction.x * 1.0E-3,
            correction.y * 1.0E-3,
            correction.z * 1.0E-3,
        );
        let delta = GroundPosition::from_ecef(station.xyz()).enu_to_ecef_delta(enu);
        station.add(delta);
    }
}
