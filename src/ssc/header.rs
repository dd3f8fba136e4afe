//! SSC header line parsing
use crate::error::ParsingError;
use crate::epoch::{epoch_from_fractional_year, REFERENCE_YEARS};

use hifitime::Epoch;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const POSITIONS_LABEL: &str = "STATION POSITIONS AT EPOCH";
const VELOCITIES_LABEL: &str = "AND VELOCITIES";

/// Number of (non informative) lines following the header line
pub(crate) const PREAMBLE_LINES: usize = 6;

/// [CatalogHeader] is resolved from the first line of a SSC catalog:
/// `<frame> STATION POSITIONS AT EPOCH <year> AND VELOCITIES`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CatalogHeader {
    /// Reference frame name, like "ITRF2014"
    pub frame: String,
    /// Reference epoch, as fractional year
    pub reference_year: f64,
}

impl CatalogHeader {
    /// Reference epoch, at which catalog positions apply
    pub fn reference_epoch(&self) -> Epoch {
        epoch_from_fractional_year(self.reference_year)
    }
}

impl std::str::FromStr for CatalogHeader {
    type Err = ParsingError;
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_start_matches(' ');
        let (frame, rem) = line.split_once(' ').ok_or(ParsingError::MalformedHeader)?;
        if frame.is_empty() {
            return Err(ParsingError::MalformedHeader);
        }

        let rem = rem
            .strip_prefix(POSITIONS_LABEL)
            .and_then(|rem| rem.strip_prefix(' '))
            .ok_or(ParsingError::MissingPositionsLabel)?;

        let (epoch, rem) = rem
            .split_once(' ')
            .ok_or(ParsingError::MissingVelocitiesLabel)?;

        if !rem.starts_with(VELOCITIES_LABEL) {
            return Err(ParsingError::MissingVelocitiesLabel);
        }

        let reference_year = epoch
            .parse::<f64>()
            .map_err(|_| ParsingError::ReferenceEpoch(epoch.to_string()))?;

        if !REFERENCE_YEARS.contains(&reference_year) {
            return Err(ParsingError::ReferenceEpoch(epoch.to_string()));
        }

        Ok(Self {
            frame: frame.to_string(),
            reference_year,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::epoch::from_year_doy_seconds;
    use std::str::FromStr;
    #[test]
    fn header_parsing() {
        for (content, frame, year) in [
            (
                "ITRF2014 STATION POSITIONS AT EPOCH 2010.0 AND VELOCITIES",
                "ITRF2014",
                2010.0,
            ),
            (
                "ITRF2008 STATION POSITIONS AT EPOCH 2005.0 AND VELOCITIES",
                "ITRF2008",
                2005.0,
            ),
            (
                "  ITRF2020 STATION POSITIONS AT EPOCH 2015.0 AND VELOCITIES  ",
                "ITRF2020",
                2015.0,
            ),
        ] {
            let header = CatalogHeader::from_str(content).unwrap();
            assert_eq!(header.frame, frame);
            assert_eq!(header.reference_year, year);
        }
        let header =
            CatalogHeader::from_str("ITRF2014 STATION POSITIONS AT EPOCH 2010.0 AND VELOCITIES")
                .unwrap();
        assert_eq!(header.reference_epoch(), from_year_doy_seconds(2010, 1, 0));
    }
    #[test]
    fn malformed_headers() {
        for (content, error) in [
            ("", ParsingError::MalformedHeader),
            ("ITRF2014", ParsingError::MalformedHeader),
            (
                "ITRF2014 STATION POSITION AT EPOCH 2010.0 AND VELOCITIES",
                ParsingError::MissingPositionsLabel,
            ),
            (
                "ITRF2014  STATION POSITIONS AT EPOCH 2010.0 AND VELOCITIES",
                ParsingError::MissingPositionsLabel,
            ),
            (
                "ITRF2014 STATION POSITIONS AT EPOCH 2010.0",
                ParsingError::MissingVelocitiesLabel,
            ),
            (
                "ITRF2014 STATION POSITIONS AT EPOCH 2010.0 AND VELOCITY",
                ParsingError::MissingVelocitiesLabel,
            ),
            (
                "ITRF2014 STATION POSITIONS AT EPOCH 20l0.0 AND VELOCITIES",
                ParsingError::ReferenceEpoch("20l0.0".to_string()),
            ),
            (
                "ITRF2014 STATION POSITIONS AT EPOCH -1.0 AND VELOCITIES",
                ParsingError::ReferenceEpoch("-1.0".to_string()),
            ),
            (
                "ITRF2014 STATION POSITIONS AT EPOCH NaN AND VELOCITIES",
                ParsingError::ReferenceEpoch("NaN".to_string()),
            ),
            (
                "ITRF2014 STATION POSITIONS AT EPOCH inf AND VELOCITIES",
                ParsingError::ReferenceEpoch("inf".to_string()),
            ),
            (
                "ITRF2014 STATION POSITIONS AT EPOCH 1e12 AND VELOCITIES",
                ParsingError::ReferenceEpoch("1e12".to_string()),
            ),
            (
                "ITRF2014 STATION POSITIONS AT EPOCH 0.0 AND VELOCITIES",
                ParsingError::ReferenceEpoch("0.0".to_string()),
            ),
        ] {
            assert_eq!(
                CatalogHeader::from_str(content),
                Err(error),
                "\"{}\" should not parse",
                content
            );
        }
    }
}
