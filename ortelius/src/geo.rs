//! Basic geographic types used by the widget.

use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

/// Position on the screen in pixels, measured from the top left corner.
pub type ScreenPoint = Point2<f64>;

/// Offset on the screen in pixels.
pub type ScreenVector = Vector2<f64>;

/// Size of a screen area in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
pub struct ScreenSize {
    width: f64,
    height: f64,
}

impl ScreenSize {
    /// Creates a new size instance.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width in pixels.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Half of the width in pixels.
    pub fn half_width(&self) -> f64 {
        self.width / 2.0
    }

    /// Half of the height in pixels.
    pub fn half_height(&self) -> f64 {
        self.height / 2.0
    }
}

/// 2d point on the surface of the Earth.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct GeoPoint {
    lat: f64,
    lon: f64,
}

impl GeoPoint {
    /// Creates a point from latitude and longitude values (in degrees).
    pub fn latlon(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }
}

/// Creates a new [`GeoPoint`] from latitude and longitude values (in degrees).
///
/// ```
/// use ortelius::latlon;
///
/// let point = latlon!(38.0, 52.0);
/// assert_eq!(point.lat(), 38.0);
/// ```
#[macro_export]
macro_rules! latlon {
    ($lat:expr, $lon:expr) => {
        $crate::geo::GeoPoint::latlon($lat, $lon)
    };
}

/// Geographical extent of a rectangular screen area.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct GeoBounds {
    west: f64,
    south: f64,
    east: f64,
    north: f64,
}

impl GeoBounds {
    /// Creates bounds from the coordinates of the corners.
    pub fn new(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self {
            west,
            south,
            east,
            north,
        }
    }

    /// Western boundary in degrees of longitude.
    pub fn west(&self) -> f64 {
        self.west
    }

    /// Southern boundary in degrees of latitude.
    pub fn south(&self) -> f64 {
        self.south
    }

    /// Eastern boundary in degrees of longitude.
    pub fn east(&self) -> f64 {
        self.east
    }

    /// Northern boundary in degrees of latitude.
    pub fn north(&self) -> f64 {
        self.north
    }

    /// The bounds as a `[west, south, east, north]` array.
    pub fn to_array(&self) -> [f64; 4] {
        [self.west, self.south, self.east, self.north]
    }

    /// Returns true if the point lies within the bounds.
    pub fn contains(&self, point: &GeoPoint) -> bool {
        point.lon() >= self.west
            && point.lon() <= self.east
            && point.lat() >= self.south
            && point.lat() <= self.north
    }
}
