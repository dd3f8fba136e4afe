//! PSD (post seismic deformation) catalogs.
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Seek};
use std::path::Path;

use hifitime::Epoch;

#[cfg(feature = "log")]
use log::{debug, trace};

use crate::{
    coordinates::StationCoordinates,
    epoch::{catalog_epoch, decimal_years},
    error::Error,
    reader::LineReader,
    site::{Matching, SiteId},
};

mod model;
mod record;

pub use model::PsdModel;
pub use record::{Component, PsdRecord};

/// [PsdReader] browses a PSD catalog one [PsdRecord] at a time.
/// PSD catalogs have no header: records start on the very first line.
#[derive(Debug)]
pub struct PsdReader<R> {
    lines: LineReader<R>,
}

impl PsdReader<BufReader<File>> {
    /// Opens a local PSD catalog
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        Ok(Self {
            lines: LineReader::from_path(path)?,
        })
    }
}

impl<R: BufRead> PsdReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: LineReader::new(reader),
        }
    }
    /// Reads next three lines record (East, North, Up).
    /// Returns Ok(None) once the catalog is exhausted, any line missing.
    pub fn next_record(&mut self) -> Result<Option<PsdRecord>, Error> {
        let mut lines: [String; 3] = Default::default();
        for line in lines.iter_mut() {
            match self.lines.next_line()? {
                Some(content) => line.push_str(content),
                None => return Ok(None),
            }
        }

        let [east, north, up] = &lines;
        let record = PsdRecord::from_lines(east, north, up)?;

        #[cfg(feature = "log")]
        trace!("psd: {} earthquake {}", record.site, record.earthquake);

        Ok(Some(record))
    }
}

impl<R: BufRead + Seek> PsdReader<R> {
    /// Moves back to the first record
    pub fn rewind(&mut self) -> Result<(), Error> {
        self.lines.rewind()?;
        Ok(())
    }
}

impl<R: BufRead> Iterator for PsdReader<R> {
    type Item = Result<PsdRecord, Error>;
    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}

/// Browses the entire PSD catalog and accumulates, per requested site,
/// the corrections (mm, east/north/up stored in x/y/z) of every earthquake
/// that occurred at or before `t`.
/// A site accumulates as many earthquakes as the catalog describes,
/// so requests are never retired. An entry is created for any
/// requested site present in the catalog, even if all of its
/// earthquakes are posterior to `t` (null correction).
/// Entries are returned in order of first appearance in the catalog.
pub fn accumulate<R: BufRead>(
    reader: &mut PsdReader<R>,
    requests: &[String],
    matching: Matching,
    t: Epoch,
) -> Result<Vec<StationCoordinates>, Error> {
    let requests = requests
        .iter()
        .map(|request| SiteId::from_request(request, matching))
        .collect::<Vec<_>>();

    let t = catalog_epoch(t);
    let mut corrections = Vec::<StationCoordinates>::new();
    let mut index = HashMap::<SiteId, usize>::new();

    while let Some(record) = reader.next_record()? {
        if !requests.iter().any(|req| matching.matches(&record.site, req)) {
            continue;
        }

        let entry = *index.entry(record.site.clone()).or_insert_with(|| {
            corrections.push(StationCoordinates::new(record.site.clone(), (0.0, 0.0, 0.0)));
            corrections.len() - 1
        });

        if t < record.earthquake {
            continue;
        }

        let dt = decimal_years(record.earthquake, t);
        let correction = record.correction(dt);

        #[cfg(feature = "log")]
        debug!(
            "psd: {} earthquake {} (+{:.4}y): {:?} mm",
            record.site, record.earthquake, dt, correction
        );

        corrections[entry].add(correction);
    }

    Ok(corrections)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::epoch::from_year_doy_seconds;
    use std::io::Cursor;

    const CATALOG: &str = " ANTC  A 41713S001 10:058:23656 E 2   10.00  1.0000
                                N 0
                                U 1   -5.00  0.5000
 GRAS  A 10002M006 10:058:23656 E 0
                                N 0
                                U 0
 ANTC  A 41713S001 15:259:82693 E 2    2.00  1.0000
                                N 2   -3.00  2.0000
                                U 0
 ANTC  A 41713S001 65:001:00000 E 2  100.00  1.0000
                                N 0
                                U 0
";

    #[test]
    fn reader() {
        let reader = PsdReader::new(Cursor::new(CATALOG));
        let records = reader.collect::<Result<Vec<_>, _>>().unwrap();
        assert_eq!(records.len(), 4);
        assert_eq!(records[0].site, SiteId::new("ANTC", "41713S001"));
        assert_eq!(records[0].east, PsdModel::Exponential { a1: 10.0, t1: 1.0 });
        assert_eq!(records[0].north, PsdModel::PiecewiseLinear);
        assert_eq!(records[2].earthquake, from_year_doy_seconds(2015, 259, 82693));
        assert_eq!(records[3].earthquake, from_year_doy_seconds(2065, 1, 0));
    }
    #[test]
    fn reader_builds_records_from_lines() {
        let lines = CATALOG.lines().collect::<Vec<_>>();
        let mut reader = PsdReader::new(Cursor::new(CATALOG));
        for block in lines.chunks(3) {
            let expected = PsdRecord::from_lines(block[0], block[1], block[2]).unwrap();
            assert_eq!(reader.next_record().unwrap(), Some(expected));
        }
        assert!(reader.next_record().unwrap().is_none());
    }
    #[test]
    fn truncated_catalog() {
        let content = " ANTC  A 41713S001 10:058:23656 E 2   10.00  1.0000
                                N 0
";
        let mut reader = PsdReader::new(Cursor::new(content));
        assert!(reader.next_record().unwrap().is_none());
    }
    #[test]
    fn misordered_components() {
        let content = " ANTC  A 41713S001 10:058:23656 E 2   10.00  1.0000
                                U 0
                                N 0
";
        let mut reader = PsdReader::new(Cursor::new(content));
        assert!(reader.next_record().is_err());
    }
    #[test]
    fn accumulation() {
        let mut reader = PsdReader::new(Cursor::new(CATALOG));
        let t = from_year_doy_seconds(2017, 143, 0);
        let corrections =
            accumulate(&mut reader, &["antc".to_string()], Matching::Code, t).unwrap();
        assert_eq!(corrections.len(), 1);

        let dt1 = decimal_years(from_year_doy_seconds(2010, 58, 23656), t);
        let dt2 = decimal_years(from_year_doy_seconds(2015, 259, 82693), t);
        let east = 10.0 * (1.0 - (-dt1).exp()) + 2.0 * (1.0 - (-dt2).exp());
        let north = -3.0 * (1.0 - (-dt2 / 2.0).exp());
        let up = -5.0 * (1.0 + dt1 / 0.5).ln();

        let (e, n, u) = corrections[0].xyz();
        assert!((e - east).abs() < 1.0E-9, "bad east correction {}", e);
        assert!((n - north).abs() < 1.0E-9, "bad north correction {}", n);
        assert!((u - up).abs() < 1.0E-9, "bad up correction {}", u);
    }
    #[test]
    fn entry_created_on_contact() {
        let mut reader = PsdReader::new(Cursor::new(CATALOG));
        let t = from_year_doy_seconds(2005, 1, 0);
        let corrections = accumulate(
            &mut reader,
            &["41713S001".to_string(), "10002M006".to_string()],
            Matching::Domes,
            t,
        )
        .unwrap();
        assert_eq!(corrections.len(), 2);
        assert_eq!(corrections[0].site.code(), "ANTC");
        assert_eq!(corrections[1].site.code(), "GRAS");
        for entry in corrections {
            assert_eq!(entry.xyz(), (0.0, 0.0, 0.0));
        }
    }
    #[test]
    fn lookup_miss() {
        let mut reader = PsdReader::new(Cursor::new(CATALOG));
        let t = from_year_doy_seconds(2017, 143, 0);
        let corrections =
            accumulate(&mut reader, &["NRMD".to_string()], Matching::Code, t).unwrap();
        assert!(corrections.is_empty());
    }
}
