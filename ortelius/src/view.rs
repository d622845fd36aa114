//! Viewport state of the map widget.

use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;

/// Longitude the viewport looks at when the host does not provide one.
pub const DEFAULT_LONGITUDE: f64 = -122.405293;
/// Latitude the viewport looks at when the host does not provide one.
pub const DEFAULT_LATITUDE: f64 = 37.772123;
/// Zoom level used when the host does not provide one.
pub const DEFAULT_ZOOM: f64 = 11.0;

/// Camera state of the map: where it looks, how close, and whether the user is
/// dragging it right now.
///
/// A viewport is a value. Interaction does not mutate it in place but produces
/// a new instance that replaces the previous one wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    longitude: f64,
    latitude: f64,
    zoom: f64,
    drag_origin: GeoPoint,
    is_dragging: bool,
}

impl Viewport {
    /// Creates a viewport looking at the given coordinates. The drag origin
    /// starts at the center and no drag is in progress.
    pub fn new(longitude: f64, latitude: f64, zoom: f64) -> Self {
        Self {
            longitude,
            latitude,
            zoom,
            drag_origin: GeoPoint::latlon(latitude, longitude),
            is_dragging: false,
        }
    }

    /// Longitude of the center in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Latitude of the center in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Zoom level of the map.
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// The center as a geographical point.
    pub fn center(&self) -> GeoPoint {
        GeoPoint::latlon(self.latitude, self.longitude)
    }

    /// The point the center was at when the current drag started.
    ///
    /// Outside of a drag this is the current center.
    pub fn drag_origin(&self) -> GeoPoint {
        self.drag_origin
    }

    /// True while the user is dragging the map.
    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    /// Returns a viewport with the center moved to the given point.
    pub fn with_center(&self, center: GeoPoint) -> Self {
        Self {
            longitude: center.lon(),
            latitude: center.lat(),
            ..*self
        }
    }

    /// Returns a viewport with the given zoom level.
    pub fn with_zoom(&self, zoom: f64) -> Self {
        Self { zoom, ..*self }
    }

    /// Returns a viewport marked as dragging, remembering the current center
    /// as the drag origin.
    pub fn with_drag_started(&self) -> Self {
        Self {
            drag_origin: self.center(),
            is_dragging: true,
            ..*self
        }
    }

    /// Returns a viewport with the drag finished and the drag origin reset to
    /// the current center.
    pub fn with_drag_ended(&self) -> Self {
        Self {
            drag_origin: self.center(),
            is_dragging: false,
            ..*self
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(DEFAULT_LONGITUDE, DEFAULT_LATITUDE, DEFAULT_ZOOM)
    }
}
