//! Builder for the map widget.

use geojson::FeatureCollection;
use ortelius_style::GeoJsonOverlay;
use serde::{Deserialize, Serialize};

use super::MapViz;
use crate::color::RgbColor;
use crate::control::ViewportController;
use crate::error::OrteliusError;
use crate::geo::ScreenSize;
use crate::inputs::InputSink;
use crate::messenger::Messenger;
use crate::style_source::{RestStyleSource, StyleSource};
use crate::view::{Viewport, DEFAULT_LATITUDE, DEFAULT_LONGITUDE, DEFAULT_ZOOM};

/// Color of feature outlines in the overlay.
const OVERLAY_STROKE: &str = "black";

const DEFAULT_MAP_STYLE: &str = "mapbox://styles/mapbox/streets-v9";
const DEFAULT_WIDTH: f64 = 800.0;
const DEFAULT_HEIGHT: f64 = 600.0;

/// Options an embedding host supplies to create the widget.
///
/// The field names follow the host JSON convention:
///
/// ```json
/// {
///     "mapboxApiKey": "pk.secret",
///     "mapStyle": "mapbox://styles/mapbox/streets-v9",
///     "geoJSON": {"type": "FeatureCollection", "features": []},
///     "color": "rgb(0, 122, 135)",
///     "globalOpacity": 0.8,
///     "viewportZoom": 13.5
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VizConfig {
    /// Access token for the style service.
    pub mapbox_api_key: String,
    /// Style URL. Only the last `/` separated segment is passed to the style
    /// source.
    pub map_style: String,
    /// Features drawn on top of the basemap.
    #[serde(rename = "geoJSON")]
    pub geo_json: FeatureCollection,
    /// Fill color of the drawn features in the `rgb(r, g, b)` form.
    pub color: String,
    /// Opacity of the drawn features.
    pub global_opacity: f64,
    /// Longitude of the initial viewport center.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewport_longitude: Option<f64>,
    /// Latitude of the initial viewport center.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewport_latitude: Option<f64>,
    /// Initial zoom level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewport_zoom: Option<f64>,
}

/// Builder for [`MapViz`].
///
/// # Example
///
/// ```
/// use ortelius::{MapVizBuilder, RestStyleSource};
///
/// # tokio_test::block_on(async {
/// let map = MapVizBuilder::new()
///     .with_style_source(RestStyleSource::mapbox("pk.token"))
///     .with_color("rgb(0, 122, 135)")
///     .with_zoom(12.0)
///     .build()
///     .expect("invalid map configuration");
/// assert_eq!(map.viewport().zoom(), 12.0);
/// # });
/// ```
pub struct MapVizBuilder {
    style_source: Option<Box<dyn StyleSource>>,
    map_style: String,
    geo_json: FeatureCollection,
    color: String,
    opacity: f64,
    size: ScreenSize,
    viewport_longitude: Option<f64>,
    viewport_latitude: Option<f64>,
    viewport_zoom: Option<f64>,
    controller: ViewportController,
    messenger: Option<Box<dyn Messenger>>,
    input_sink: Option<Box<dyn InputSink>>,
}

impl MapVizBuilder {
    /// Creates a new builder instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder preconfigured from the host options.
    ///
    /// The style source is set to the Mapbox styles API addressed with the
    /// configured access token.
    pub fn from_config(config: VizConfig) -> Self {
        let VizConfig {
            mapbox_api_key,
            map_style,
            geo_json,
            color,
            global_opacity,
            viewport_longitude,
            viewport_latitude,
            viewport_zoom,
        } = config;

        let mut builder = Self::new().with_style_source(RestStyleSource::mapbox(mapbox_api_key));
        builder.map_style = map_style;
        builder.geo_json = geo_json;
        builder.color = color;
        builder.opacity = global_opacity;
        builder.viewport_longitude = viewport_longitude;
        builder.viewport_latitude = viewport_latitude;
        builder.viewport_zoom = viewport_zoom;

        builder
    }

    /// Sets the source of basemap styles.
    pub fn with_style_source(mut self, source: impl StyleSource + 'static) -> Self {
        self.style_source = Some(Box::new(source));
        self
    }

    /// Sets the style URL. Only the last `/` separated segment is passed to
    /// the style source.
    pub fn with_map_style(mut self, style: impl Into<String>) -> Self {
        self.map_style = style.into();
        self
    }

    /// Sets the features drawn on top of the basemap.
    pub fn with_geo_json(mut self, data: FeatureCollection) -> Self {
        self.geo_json = data;
        self
    }

    /// Sets the fill color of the drawn features.
    ///
    /// The value must be in the `rgb(r, g, b)` form, otherwise
    /// [`MapVizBuilder::build`] fails with
    /// [`OrteliusError::InvalidColorFormat`].
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Sets the opacity of the drawn features.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Sets the size of the rendering surface in pixels.
    pub fn with_size(mut self, size: ScreenSize) -> Self {
        self.size = size;
        self
    }

    /// Sets the longitude of the initial viewport center.
    pub fn with_longitude(mut self, longitude: f64) -> Self {
        self.viewport_longitude = Some(longitude);
        self
    }

    /// Sets the latitude of the initial viewport center.
    pub fn with_latitude(mut self, latitude: f64) -> Self {
        self.viewport_latitude = Some(latitude);
        self
    }

    /// Sets the initial zoom level.
    pub fn with_zoom(mut self, zoom: f64) -> Self {
        self.viewport_zoom = Some(zoom);
        self
    }

    /// Sets the interaction controller of the map.
    pub fn with_controller(mut self, controller: ViewportController) -> Self {
        self.controller = controller;
        self
    }

    /// Sets the messenger notified when the map must be redrawn.
    pub fn with_messenger(mut self, messenger: impl Messenger + 'static) -> Self {
        self.messenger = Some(Box::new(messenger));
        self
    }

    /// Sets the sink receiving the viewport values on every frame.
    pub fn with_input_sink(mut self, sink: impl InputSink + 'static) -> Self {
        self.input_sink = Some(Box::new(sink));
        self
    }

    /// Builds the widget and starts loading its basemap style.
    ///
    /// The basemap request runs on the ambient asynchronous runtime, so this
    /// method must be called within one.
    pub fn build(self) -> Result<MapViz, OrteliusError> {
        let Self {
            style_source,
            map_style,
            geo_json,
            color,
            opacity,
            size,
            viewport_longitude,
            viewport_latitude,
            viewport_zoom,
            controller,
            messenger,
            input_sink,
        } = self;

        let Some(style_source) = style_source else {
            return Err(OrteliusError::Configuration(
                "style source is not set".into(),
            ));
        };
        let color = RgbColor::try_from_css(&color).ok_or(OrteliusError::InvalidColorFormat)?;

        let viewport = Viewport::new(
            viewport_longitude.unwrap_or(DEFAULT_LONGITUDE),
            viewport_latitude.unwrap_or(DEFAULT_LATITUDE),
            viewport_zoom.unwrap_or(DEFAULT_ZOOM),
        );
        let overlay = GeoJsonOverlay::new()
            .with_fill(color.to_css())
            .with_stroke(OVERLAY_STROKE)
            .with_opacity(opacity)
            .with_data(geo_json);

        Ok(MapViz::new(
            viewport,
            size,
            controller,
            overlay,
            map_style,
            style_source.into(),
            messenger.map(|messenger| messenger.into()),
            input_sink.map(|sink| sink.into()),
        ))
    }
}

impl Default for MapVizBuilder {
    fn default() -> Self {
        Self {
            style_source: None,
            map_style: DEFAULT_MAP_STYLE.to_owned(),
            geo_json: FeatureCollection {
                bbox: None,
                features: vec![],
                foreign_members: None,
            },
            color: String::new(),
            opacity: 1.0,
            size: ScreenSize::new(DEFAULT_WIDTH, DEFAULT_HEIGHT),
            viewport_longitude: None,
            viewport_latitude: None,
            viewport_zoom: None,
            controller: ViewportController::default(),
            messenger: None,
            input_sink: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use async_trait::async_trait;
    use ortelius_style::StyleDocument;
    use serde_json::json;

    use super::*;

    struct NullStyleSource;

    #[async_trait]
    impl StyleSource for NullStyleSource {
        async fn load_style(&self, _style_id: &str) -> Result<StyleDocument, OrteliusError> {
            std::future::pending().await
        }
    }

    fn test_builder() -> MapVizBuilder {
        MapVizBuilder::new().with_style_source(NullStyleSource)
    }

    fn empty_features() -> FeatureCollection {
        FeatureCollection {
            bbox: None,
            features: vec![],
            foreign_members: None,
        }
    }

    #[test]
    fn build_without_style_source_fails() {
        let error = MapVizBuilder::new()
            .with_color("rgb(1, 2, 3)")
            .build()
            .unwrap_err();

        assert_matches!(error, OrteliusError::Configuration(_));
    }

    #[test]
    fn build_rejects_malformed_colors() {
        for color in ["", "red", "rgb(1, 2)", "rgba(1, 2, 3)", "rgb(1234, 5, 6)"] {
            let error = test_builder().with_color(color).build().unwrap_err();
            assert_matches!(error, OrteliusError::InvalidColorFormat, "color: {color}");
        }
    }

    #[test]
    fn defaults_position_the_viewport() {
        tokio_test::block_on(async {
            let map = test_builder()
                .with_color("rgb(0, 122, 135)")
                .build()
                .expect("failed to build the map widget");

            let viewport = map.viewport();
            assert_eq!(viewport.longitude(), DEFAULT_LONGITUDE);
            assert_eq!(viewport.latitude(), DEFAULT_LATITUDE);
            assert_eq!(viewport.zoom(), DEFAULT_ZOOM);
            assert!(!viewport.is_dragging());
        });
    }

    #[test]
    fn explicit_viewport_overrides_the_defaults() {
        tokio_test::block_on(async {
            let map = test_builder()
                .with_color("rgb(0, 122, 135)")
                .with_longitude(2.35)
                .with_latitude(48.86)
                .with_zoom(12.0)
                .build()
                .expect("failed to build the map widget");

            let viewport = map.viewport();
            assert_eq!(viewport.longitude(), 2.35);
            assert_eq!(viewport.latitude(), 48.86);
            assert_eq!(viewport.zoom(), 12.0);
        });
    }

    #[test]
    fn zero_is_a_valid_initial_coordinate() {
        tokio_test::block_on(async {
            let map = test_builder()
                .with_color("rgb(0, 122, 135)")
                .with_longitude(0.0)
                .with_latitude(0.0)
                .build()
                .expect("failed to build the map widget");

            assert_eq!(map.viewport().longitude(), 0.0);
            assert_eq!(map.viewport().latitude(), 0.0);
        });
    }

    #[test]
    fn config_parses_host_json() {
        let config: VizConfig = serde_json::from_value(json!({
            "mapboxApiKey": "pk.secret",
            "mapStyle": "mapbox://styles/mapbox/light-v9",
            "geoJSON": {"type": "FeatureCollection", "features": []},
            "color": "rgb(0, 122, 135)",
            "globalOpacity": 0.8,
            "viewportZoom": 13.5,
        }))
        .expect("failed to parse the host config");

        assert_eq!(config.mapbox_api_key, "pk.secret");
        assert_eq!(config.map_style, "mapbox://styles/mapbox/light-v9");
        assert_eq!(config.color, "rgb(0, 122, 135)");
        assert_eq!(config.global_opacity, 0.8);
        assert_eq!(config.viewport_zoom, Some(13.5));
        assert_eq!(config.viewport_longitude, None);
        assert_eq!(config.viewport_latitude, None);
    }

    #[test]
    fn from_config_builds_the_widget() {
        tokio_test::block_on(async {
            let config = VizConfig {
                mapbox_api_key: "pk.secret".to_owned(),
                map_style: "mapbox://styles/mapbox/dark-v9".to_owned(),
                geo_json: empty_features(),
                color: "rgb(255, 0, 0)".to_owned(),
                global_opacity: 0.5,
                viewport_longitude: Some(2.35),
                viewport_latitude: Some(48.86),
                viewport_zoom: Some(12.0),
            };

            let map = MapVizBuilder::from_config(config)
                .build()
                .expect("failed to build the map widget");

            assert_eq!(map.viewport().longitude(), 2.35);
            assert_eq!(map.viewport().latitude(), 48.86);
            assert_eq!(map.viewport().zoom(), 12.0);
        });
    }

    #[test]
    fn from_config_rejects_a_malformed_color() {
        let config = VizConfig {
            mapbox_api_key: "pk.secret".to_owned(),
            map_style: "mapbox://styles/mapbox/dark-v9".to_owned(),
            geo_json: empty_features(),
            color: "#ff0000".to_owned(),
            global_opacity: 1.0,
            viewport_longitude: None,
            viewport_latitude: None,
            viewport_zoom: None,
        };

        let error = MapVizBuilder::from_config(config).build().unwrap_err();
        assert_matches!(error, OrteliusError::InvalidColorFormat);
    }
}
