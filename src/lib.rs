#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate gnss_rs as gnss;

pub mod coordinates;
pub mod epoch;
pub mod extrapolation;
pub mod merge;
pub mod psd;
pub mod query;
pub mod site;
pub mod ssc;

mod error;
mod parsing;
mod reader;

#[cfg(test)]
mod tests;

pub use error::{Error, ParsingError};

/*
 * 3D position
 */
pub type Vector3D = (f64, f64, f64);

pub mod prelude {
    pub use crate::coordinates::{GroundPosition, StationCoordinates};
    pub use crate::epoch::{catalog_epoch, decimal_years, from_year_doy_seconds, parse_year_doy};
    pub use crate::extrapolation::extrapolate;
    pub use crate::merge::merge;
    pub use crate::psd::{accumulate, Component, PsdModel, PsdReader, PsdRecord};
    pub use crate::query::{apply_psd, psd_corrections, station_positions, Query, Solution};
    pub use crate::site::{Matching, SiteId};
    pub use crate::ssc::{CatalogHeader, SscReader, StationRecord, Validity};
    pub use crate::{Error, ParsingError, Vector3D};
    // Pub re-export
    pub use gnss::prelude::DOMES;
    pub use hifitime::{Duration, Epoch, TimeScale};
}
