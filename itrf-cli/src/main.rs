//! Command line tool to extrapolate station coordinates
//! from ITRF (SSC and PSD) catalogs.
mod cli;

use cli::Cli;

use itrf::prelude::*;

use env_logger::{Builder, Target};

#[macro_use]
extern crate log;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("catalog error")]
    CatalogError(#[from] itrf::Error),
    #[error("json error")]
    JsonError(#[from] serde_json::Error),
    #[error("invalid epoch \"{0}\"")]
    InvalidEpoch(String),
    #[error("failed to determine system time")]
    SystemTime,
    #[error("missing SSC catalog")]
    MissingSscCatalog,
    #[error("missing PSD catalog")]
    MissingPsdCatalog,
}

/*
 * Prints one table, as "NAME DOMES X Y Z EPOCH"
 */
fn print_table(stations: &[StationCoordinates], epoch: Epoch, unit: &str) {
    println!(
        "NAME   DOMES         X({})          Y({})           Z({})        EPOCH",
        unit, unit, unit
    );
    for station in stations {
        println!(
            "{} {:15.5} {:15.5} {:15.5} {}",
            station.site, station.x, station.y, station.z, epoch
        );
    }
}

/*
 * Prints one table, as "NAME DOMES LAT LON HEIGHT EPOCH"
 */
fn print_geodetic_table(stations: &[StationCoordinates], epoch: Epoch) {
    println!("NAME   DOMES        LAT(ddeg)      LON(ddeg)      HEIGHT(m)     EPOCH");
    for station in stations {
        let (lat, lon, height) = GroundPosition::from_ecef(station.xyz()).to_geodetic();
        println!(
            "{} {:14.9} {:14.9} {:12.4} {}",
            station.site, lat, lon, height, epoch
        );
    }
}

fn warn_on_shortfall(query: &Query, found: usize) {
    if found < query.len() {
        warn!(
            "only {}/{} requested station(s) were resolved",
            found,
            query.len()
        );
    }
}

pub fn main() -> Result<(), Error> {
    let mut builder = Builder::from_default_env();
    builder
        .target(Target::Stdout)
        .format_timestamp_secs()
        .format_module_path(false)
        .init();

    let cli = Cli::new();
    let epoch = cli.epoch()?;

    let mut query = Query::new(epoch);
    query.stations = cli.stations();
    query.domes = cli.domes();

    for domes in query.domes.iter() {
        if SiteId::from_request(domes, Matching::Domes)
            .domes_number()
            .is_none()
        {
            warn!("\"{}\" does not look like a DOMES number", domes);
        }
    }

    if !cli.quiet() {
        info!("itrf-cli v{}", env!("CARGO_PKG_VERSION"));
        info!("target epoch: {}", epoch);
    }

    let corrections = match cli.psd_path() {
        Some(psd) => Some(psd_corrections(psd, &query)?),
        None => None,
    };

    if cli.psd_only() {
        let corrections = corrections.ok_or(Error::MissingPsdCatalog)?;
        warn_on_shortfall(&query, corrections.len());
        if cli.json() {
            println!("{}", serde_json::to_string_pretty(&corrections)?);
        } else {
            print_table(&corrections, epoch, "mm");
        }
        return Ok(());
    }

    let ssc = cli.ssc_path().ok_or(Error::MissingSscCatalog)?;
    let mut solution = station_positions(ssc, &query)?;

    if !cli.quiet() {
        info!(
            "{} reference epoch: {}",
            solution.frame, solution.reference_epoch
        );
    }

    warn_on_shortfall(&query, solution.stations.len());

    if let Some(corrections) = corrections {
        apply_psd(&mut solution.stations, &corrections);
    }

    if cli.json() {
        println!("{}", serde_json::to_string_pretty(&solution)?);
    } else if cli.geodetic() {
        print_geodetic_table(&solution.stations, epoch);
    } else {
        print_table(&solution.stations, epoch, "m");
    }

    Ok(())
}
