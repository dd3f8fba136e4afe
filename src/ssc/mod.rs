//! SSC (station positions and velocities) catalogs.
use std::fs::File;
use std::io::{BufRead, BufReader, Seek};
use std::path::Path;

#[cfg(feature = "log")]
use log::{trace, warn};

use crate::{error::Error, reader::LineReader};

mod header;
mod record;

pub use header::CatalogHeader;
pub use record::{StationRecord, Validity};

use header::PREAMBLE_LINES;
use record::parse_position_line;

/// [SscReader] browses a SSC catalog one [StationRecord] at a time.
/// ```
/// use itrf::prelude::*;
/// use std::io::Cursor;
///
/// let content = "ITRF2014 STATION POSITIONS AT EPOCH 2010.0 AND VELOCITIES\n";
/// let mut reader = SscReader::new(Cursor::new(content));
/// let header = reader.read_header().unwrap();
/// assert_eq!(header.frame, "ITRF2014");
/// assert_eq!(header.reference_year, 2010.0);
/// assert!(reader.next_record().unwrap().is_none());
/// ```
#[derive(Debug)]
pub struct SscReader<R> {
    lines: LineReader<R>,
}

impl SscReader<BufReader<File>> {
    /// Opens a local SSC catalog
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        Ok(Self {
            lines: LineReader::from_path(path)?,
        })
    }
}

impl<R: BufRead> SscReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: LineReader::new(reader),
        }
    }
    /// Reads next two lines record.
    /// Returns Ok(None) once the catalog is exhausted, either line missing.
    /// A blank position line also terminates the catalog.
    pub fn next_record(&mut self) -> Result<Option<StationRecord>, Error> {
        let position = match self.lines.next_line()? {
            Some(line) if line.trim().is_empty() => {
                #[cfg(feature = "log")]
                warn!("ssc: blank line, ending catalog");
                return Ok(None);
            },
            Some(line) => parse_position_line(line)?,
            None => return Ok(None),
        };

        let record = match self.lines.next_line()? {
            Some(line) => position.with_velocity_line(line)?,
            None => return Ok(None),
        };

        #[cfg(feature = "log")]
        trace!("ssc: {} ({}) {:?}", record.site, record.name, record.validity);

        Ok(Some(record))
    }
}

impl<R: BufRead + Seek> SscReader<R> {
    /// Reads the catalog header.
    /// Moves back to start of stream, parses the first line and skips
    /// the preamble, so the next line to be read is the first record.
    pub fn read_header(&mut self) -> Result<CatalogHeader, Error> {
        self.lines.rewind()?;
        let header = self
            .lines
            .next_line()?
            .unwrap_or("")
            .parse::<CatalogHeader>()?;
        self.lines.skip_lines(PREAMBLE_LINES)?;
        Ok(header)
    }
}

impl<R: BufRead> Iterator for SscReader<R> {
    type Item = Result<StationRecord, Error>;
    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}
