use map_3d::{ecef2geodetic, enu2uvw, rad2deg, Ellipsoid};

use crate::{site::SiteId, Vector3D};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [StationCoordinates] is one result entry.
/// (x, y, z) are either geocentric coordinates (m), or, for
/// post seismic corrections, (east, north, up) offsets (mm).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StationCoordinates {
    pub site: SiteId,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl StationCoordinates {
    pub fn new(site: SiteId, xyz: Vector3D) -> Self {
        Self {
            site,
            x: xyz.0,
            y: xyz.1,
            z: xyz.2,
        }
    }
    /// Returns (x, y, z) triplet
    pub fn xyz(&self) -> Vector3D {
        (self.x, self.y, self.z)
    }
    /// Adds given triplet to Self
    pub fn add(&mut self, delta: Vector3D) {
        self.x += delta.0;
        self.y += delta.1;
        self.z += delta.2;
    }
}

/// Geocentric (ECEF) position, in meters, used to
/// rotate local topocentric vectors into the catalog frame.
#[derive(Default, Copy, Debug, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GroundPosition(f64, f64, f64);

impl GroundPosition {
    /// Builds Self from ECEF coordinates (m)
    pub fn from_ecef(pos: Vector3D) -> Self {
        Self(pos.0, pos.1, pos.2)
    }
    /// Converts Self to geodetic coordinates, in radians (latitude, longitude)
    /// and meters (height above ellipsoid)
    fn to_geodetic_rad(&self) -> Vector3D {
        ecef2geodetic(self.0, self.1, self.2, Ellipsoid::WGS84)
    }
    /// Converts Self to geodetic coordinates in ddeg
    pub fn to_geodetic(&self) -> Vector3D {
        let (lat, lon, alt) = self.to_geodetic_rad();
        (rad2deg(lat), rad2deg(lon), alt)
    }
    /// Rotates a local (east, north, up) vector, expressed at this
    /// position, into a geocentric (dx, dy, dz) vector. Units are preserved.
    pub fn enu_to_ecef_delta(&self, enu: Vector3D) -> Vector3D {
        let (lat, lon, _) = self.to_geodetic_rad();
        enu2uvw(enu.0, enu.1, enu.2, lat, lon)
    }
}
