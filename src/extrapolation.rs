//! Linear extrapolation of catalog positions
use std::io::BufRead;

use hifitime::Epoch;

#[cfg(feature = "log")]
use log::debug;

use crate::{
    coordinates::StationCoordinates,
    epoch::{catalog_epoch, decimal_years},
    error::Error,
    site::{Matching, SiteId},
    ssc::SscReader,
};

/// Browses the SSC catalog (positioned past its header) and extrapolates
/// each requested site to `t`, from the catalog reference epoch `t0`.
/// Only the record whose validity contains `t` applies. A request is
/// retired on its first match, browsing stops once every request is resolved.
/// Requests that are not resolved when the catalog is exhausted are
/// dropped: compare returned and requested sizes to detect them.
/// `t` may be expressed in any time scale, see [catalog_epoch].
pub fn extrapolate<R: BufRead>(
    reader: &mut SscReader<R>,
    requests: &[String],
    matching: Matching,
    t: Epoch,
    t0: Epoch,
) -> Result<Vec<StationCoordinates>, Error> {
    let mut outstanding = requests
        .iter()
        .map(|request| SiteId::from_request(request, matching))
        .collect::<Vec<_>>();

    let t = catalog_epoch(t);
    let dyr = decimal_years(t0, t);
    let mut stations = Vec::with_capacity(outstanding.len());

    while !outstanding.is_empty() {
        let record = match reader.next_record()? {
            Some(record) => record,
            None => break,
        };

        if !record.validity.contains(t) {
            continue;
        }

        let pending = outstanding
            .iter()
            .position(|request| matching.matches(&record.site, request));

        if let Some(pending) = pending {
            outstanding.swap_remove(pending);
            let position = record.position_at(dyr);

            #[cfg(feature = "log")]
            debug!("ssc: {} {:.4}y: {:?}", record.site, dyr, position);

            stations.push(StationCoordinates::new(record.site, position));
        }
    }

    Ok(stations)
}
