//! Web Mercator conversions between screen pixels and geographical coordinates.

use std::f64::consts::PI;

use nalgebra::Point2;

use crate::geo::{GeoBounds, GeoPoint, ScreenPoint, ScreenSize, ScreenVector};

const TILE_SIZE: f64 = 512.0;

/// Converter between screen pixel positions and geographical coordinates for a
/// viewport fixed at a center point and zoom level.
///
/// The world is scaled so that at zoom level `z` it is `512 * 2^z` pixels wide,
/// and the center point maps to the middle of the screen.
///
/// ```
/// use ortelius::geo::{ScreenPoint, ScreenSize};
/// use ortelius::{latlon, Mercator};
///
/// let mercator = Mercator::new(latlon!(0.0, 0.0), 0.0, ScreenSize::new(512.0, 512.0));
/// let center = mercator.project(&latlon!(0.0, 0.0));
/// assert_eq!(center, ScreenPoint::new(256.0, 256.0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Mercator {
    size: ScreenSize,
    world_size: f64,
    center_world: Point2<f64>,
}

impl Mercator {
    /// Creates a converter for a viewport of the given pixel size, looking at
    /// `center` with the given zoom level.
    pub fn new(center: GeoPoint, zoom: f64, size: ScreenSize) -> Self {
        let world_size = TILE_SIZE * 2f64.powf(zoom);
        Self {
            size,
            world_size,
            center_world: geo_to_world(&center, world_size),
        }
    }

    /// Converts a geographical point to its position on the screen.
    pub fn project(&self, point: &GeoPoint) -> ScreenPoint {
        let world = geo_to_world(point, self.world_size);
        self.screen_center() + (world - self.center_world)
    }

    /// Converts a screen position to the geographical point under it.
    pub fn unproject(&self, point: ScreenPoint) -> GeoPoint {
        let world = self.center_world + (point - self.screen_center());
        world_to_geo(world, self.world_size)
    }

    /// Geographical extent visible on the screen, from the top left to the
    /// bottom right corner.
    pub fn bounds(&self) -> GeoBounds {
        let top_left = self.unproject(ScreenPoint::new(0.0, 0.0));
        let bottom_right =
            self.unproject(ScreenPoint::new(self.size.width(), self.size.height()));

        GeoBounds::new(
            top_left.lon(),
            bottom_right.lat(),
            bottom_right.lon(),
            top_left.lat(),
        )
    }

    /// Center point after the map content is dragged by `delta` pixels.
    pub fn shifted_center(&self, delta: ScreenVector) -> GeoPoint {
        self.unproject(self.screen_center() - delta)
    }

    /// Center point that keeps the geography under `anchor` fixed when the
    /// zoom level changes to `zoom`.
    pub fn zoomed_center(&self, zoom: f64, anchor: ScreenPoint) -> GeoPoint {
        let anchor_geo = self.unproject(anchor);
        let world_size = TILE_SIZE * 2f64.powf(zoom);
        let anchor_world = geo_to_world(&anchor_geo, world_size);
        let center_world = anchor_world - (anchor - self.screen_center());

        world_to_geo(center_world, world_size)
    }

    fn screen_center(&self) -> ScreenPoint {
        ScreenPoint::new(self.size.half_width(), self.size.half_height())
    }
}

fn geo_to_world(point: &GeoPoint, world_size: f64) -> Point2<f64> {
    let lat_rad = point.lat().to_radians();
    let x = (point.lon() / 360.0 + 0.5) * world_size;
    let y = (0.5 - (PI / 4.0 + lat_rad / 2.0).tan().ln() / (2.0 * PI)) * world_size;

    Point2::new(x, y)
}

fn world_to_geo(point: Point2<f64>, world_size: f64) -> GeoPoint {
    let lon = (point.x / world_size - 0.5) * 360.0;
    let lat_rad = 2.0 * ((0.5 - point.y / world_size) * 2.0 * PI).exp().atan() - PI / 2.0;

    GeoPoint::latlon(lat_rad.to_degrees(), lon)
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;
    use crate::latlon;

    fn whole_world() -> Mercator {
        Mercator::new(latlon!(0.0, 0.0), 0.0, ScreenSize::new(512.0, 512.0))
    }

    #[test]
    fn center_projects_to_screen_midpoint() {
        let mercator = Mercator::new(
            latlon!(37.772123, -122.405293),
            11.0,
            ScreenSize::new(800.0, 600.0),
        );
        let projected = mercator.project(&latlon!(37.772123, -122.405293));

        assert_abs_diff_eq!(projected.x, 400.0, epsilon = 1e-9);
        assert_abs_diff_eq!(projected.y, 300.0, epsilon = 1e-9);
    }

    #[test]
    fn known_positions_at_low_zoom() {
        let mercator = whole_world();

        let null_island = mercator.project(&latlon!(0.0, 0.0));
        assert_abs_diff_eq!(null_island.x, 256.0, epsilon = 1e-9);
        assert_abs_diff_eq!(null_island.y, 256.0, epsilon = 1e-9);

        let date_line = mercator.project(&latlon!(0.0, 180.0));
        assert_abs_diff_eq!(date_line.x, 512.0, epsilon = 1e-9);

        let zoomed = Mercator::new(latlon!(0.0, 0.0), 1.0, ScreenSize::new(512.0, 512.0));
        let east = zoomed.project(&latlon!(0.0, 90.0));
        assert_abs_diff_eq!(east.x, 512.0, epsilon = 1e-9);
        assert_abs_diff_eq!(east.y, 256.0, epsilon = 1e-9);
    }

    #[test]
    fn unproject_inverts_project() {
        let mercator = Mercator::new(
            latlon!(37.772123, -122.405293),
            11.0,
            ScreenSize::new(800.0, 600.0),
        );

        for point in [
            latlon!(37.772123, -122.405293),
            latlon!(37.8, -122.3),
            latlon!(37.7, -122.5),
        ] {
            let roundtrip = mercator.unproject(mercator.project(&point));
            assert_relative_eq!(roundtrip.lat(), point.lat(), epsilon = 1e-9);
            assert_relative_eq!(roundtrip.lon(), point.lon(), epsilon = 1e-9);
        }
    }

    #[test]
    fn whole_world_bounds() {
        let bounds = whole_world().bounds();

        assert_abs_diff_eq!(bounds.west(), -180.0, epsilon = 1e-6);
        assert_abs_diff_eq!(bounds.south(), -85.051129, epsilon = 1e-6);
        assert_abs_diff_eq!(bounds.east(), 180.0, epsilon = 1e-6);
        assert_abs_diff_eq!(bounds.north(), 85.051129, epsilon = 1e-6);
    }

    #[test]
    fn bounds_array_is_west_south_east_north() {
        let mercator = Mercator::new(
            latlon!(37.772123, -122.405293),
            11.0,
            ScreenSize::new(800.0, 600.0),
        );
        let bounds = mercator.bounds();
        let [west, south, east, north] = bounds.to_array();

        assert!(west < east);
        assert!(south < north);
        assert!(bounds.contains(&latlon!(37.772123, -122.405293)));
    }

    #[test]
    fn dragging_east_moves_center_west() {
        let mercator = Mercator::new(latlon!(0.0, 0.0), 4.0, ScreenSize::new(512.0, 512.0));
        let center = mercator.shifted_center(ScreenVector::new(100.0, 0.0));

        assert!(center.lon() < 0.0);
        assert_abs_diff_eq!(center.lat(), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn zooming_keeps_anchor_geography_fixed() {
        let size = ScreenSize::new(800.0, 600.0);
        let mercator = Mercator::new(latlon!(37.772123, -122.405293), 11.0, size);
        let anchor = ScreenPoint::new(0.0, 0.0);
        let under_anchor = mercator.unproject(anchor);

        let new_center = mercator.zoomed_center(12.0, anchor);
        let zoomed = Mercator::new(new_center, 12.0, size);
        let after = zoomed.unproject(anchor);

        assert_relative_eq!(after.lat(), under_anchor.lat(), epsilon = 1e-9);
        assert_relative_eq!(after.lon(), under_anchor.lon(), epsilon = 1e-9);
    }

    #[test]
    fn zooming_about_screen_center_keeps_the_center() {
        let size = ScreenSize::new(800.0, 600.0);
        let mercator = Mercator::new(latlon!(37.772123, -122.405293), 11.0, size);
        let new_center = mercator.zoomed_center(13.0, ScreenPoint::new(400.0, 300.0));

        assert_relative_eq!(new_center.lat(), 37.772123, epsilon = 1e-9);
        assert_relative_eq!(new_center.lon(), -122.405293, epsilon = 1e-9);
    }
}
