use clap::{Arg, ArgAction, ArgMatches, ColorChoice, Command};
use itrf::prelude::{parse_year_doy, Epoch};
use std::str::FromStr;

use crate::Error;

pub struct Cli {
    /// Arguments passed by user
    pub matches: ArgMatches,
}

impl Default for Cli {
    fn default() -> Self {
        Self::new()
    }
}

impl Cli {
    /// Build new command line interface
    pub fn new() -> Self {
        Self {
            matches: {
                Command::new("itrf-cli")
                    .author("Guillaume W. Bres <guillaume.bressaix@gmail.com>")
                    .version(env!("CARGO_PKG_VERSION"))
                    .about("Station coordinates extrapolation from ITRF catalogs")
                    .long_about("itrf-cli extrapolates station coordinates to the desired epoch,
using the positions and velocities of a SSC catalog, and optionally
the post seismic deformation models of a PSD catalog.")
                    .arg_required_else_help(true)
                    .color(ColorChoice::Always)
                    .next_help_heading("Catalogs")
                    .arg(
                        Arg::new("ssc")
                            .long("ssc")
                            .value_name("FILE")
                            .action(ArgAction::Set)
                            .required_unless_present("psd-only")
                            .help("SSC catalog (station positions and velocities)"),
                    )
                    .arg(
                        Arg::new("psd")
                            .long("psd")
                            .value_name("FILE")
                            .action(ArgAction::Set)
                            .help("PSD catalog (post seismic deformation models).
Corrections are applied to the extrapolated positions."),
                    )
                    .next_help_heading("Stations")
                    .arg(
                        Arg::new("station")
                            .short('s')
                            .long("station")
                            .value_name("CODE")
                            .action(ArgAction::Append)
                            .required_unless_present("domes")
                            .help("Request one station by its 4 character code. Can be repeated."),
                    )
                    .arg(
                        Arg::new("domes")
                            .short('d')
                            .long("domes")
                            .value_name("DOMES")
                            .action(ArgAction::Append)
                            .help("Request one station by its DOMES number. Can be repeated."),
                    )
                    .next_help_heading("Epoch")
                    .arg(
                        Arg::new("epoch")
                            .short('e')
                            .long("epoch")
                            .action(ArgAction::Set)
                            .help("Target epoch, either YYYY-DDD (year and day of year)
or any Epoch description (like \"2017-05-23T00:00:00 UTC\").
Defaults to now."),
                    )
                    .next_help_heading("Output")
                    .arg(
                        Arg::new("psd-only")
                            .long("psd-only")
                            .requires("psd")
                            .action(ArgAction::SetTrue)
                            .help("Only report the post seismic corrections (mm, east/north/up)"),
                    )
                    .arg(
                        Arg::new("geodetic")
                            .long("geodetic")
                            .conflicts_with_all(["psd-only", "json"])
                            .action(ArgAction::SetTrue)
                            .help("Report geodetic coordinates (latitude, longitude in ddeg
and height above the WGS84 ellipsoid in m) instead of ECEF"),
                    )
                    .arg(
                        Arg::new("json")
                            .long("json")
                            .action(ArgAction::SetTrue)
                            .help("Report results in JSON format"),
                    )
                    .arg(
                        Arg::new("quiet")
                            .short('q')
                            .long("quiet")
                            .action(ArgAction::SetTrue)
                            .help("Disable the informational banner"),
                    )
                    .get_matches()
            },
        }
    }
    pub fn ssc_path(&self) -> Option<&String> {
        self.matches.get_one::<String>("ssc")
    }
    pub fn psd_path(&self) -> Option<&String> {
        self.matches.get_one::<String>("psd")
    }
    pub fn stations(&self) -> Vec<String> {
        self.matches
            .get_many::<String>("station")
            .map(|codes| codes.cloned().collect())
            .unwrap_or_default()
    }
    pub fn domes(&self) -> Vec<String> {
        self.matches
            .get_many::<String>("domes")
            .map(|domes| domes.cloned().collect())
            .unwrap_or_default()
    }
    /// Target epoch
    pub fn epoch(&self) -> Result<Epoch, Error> {
        match self.matches.get_one::<String>("epoch") {
            Some(descriptor) => {
                if let Ok(t) = parse_year_doy(descriptor) {
                    Ok(t)
                } else {
                    Epoch::from_str(descriptor.trim())
                        .map_err(|_| Error::InvalidEpoch(descriptor.to_string()))
                }
            },
            None => Epoch::now().map_err(|_| Error::SystemTime),
        }
    }
    pub fn psd_only(&self) -> bool {
        self.matches.get_flag("psd-only")
    }
    pub fn geodetic(&self) -> bool {
        self.matches.get_flag("geodetic")
    }
    pub fn json(&self) -> bool {
        self.matches.get_flag("json")
    }
    pub fn quiet(&self) -> bool {
        self.matches.get_flag("quiet")
    }
}
