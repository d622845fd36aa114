use geojson::{FeatureCollection, GeoJson};
use serde_json::json;

use crate::document::{JsonObject, LayerType, Source, StyleDocument, StyleLayer};

/// Identifier of the GeoJSON source all overlay layers read from.
pub const OVERLAY_SOURCE_ID: &str = "geojson-overlay";
/// Identifier of the polygon fill layer.
pub const FILL_LAYER_ID: &str = "geojson-fill";
/// Identifier of the outline layer.
pub const LINE_LAYER_ID: &str = "geojson-line";
/// Identifier of the point layer.
pub const CIRCLE_LAYER_ID: &str = "geojson-circle";
/// Identifier of the label layer.
pub const LABEL_LAYER_ID: &str = "geojson-label";

/// Composes a style fragment that draws a GeoJSON feature collection.
///
/// The fragment contains a single GeoJSON source and four layers referencing
/// it: polygon fill, outline, point and label. Merge it into a basemap with
/// [`StyleDocument::merge_overlay`].
///
/// ```
/// use ortelius_style::GeoJsonOverlay;
///
/// let fragment = GeoJsonOverlay::new()
///     .with_fill("rgb(0, 122, 135)")
///     .with_stroke("black")
///     .with_opacity(0.8)
///     .compose();
/// assert_eq!(fragment.layers.len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct GeoJsonOverlay {
    fill: String,
    stroke: String,
    opacity: f64,
    data: FeatureCollection,
}

impl GeoJsonOverlay {
    /// Creates an overlay with default styling and no features.
    pub fn new() -> Self {
        Self::default()
    }

    /// Color of polygon interiors and points. Any CSS color string.
    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Color of polygon outlines. Any CSS color string.
    pub fn with_stroke(mut self, stroke: impl Into<String>) -> Self {
        self.stroke = stroke.into();
        self
    }

    /// Opacity applied to fills, outlines and points, in `0.0..=1.0`.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// The features to draw. The geometry is embedded into the fragment as is.
    pub fn with_data(mut self, data: FeatureCollection) -> Self {
        self.data = data;
        self
    }

    /// Builds the style fragment.
    pub fn compose(&self) -> StyleDocument {
        log::debug!(
            "Composing overlay style for {} feature(s)",
            self.data.features.len()
        );

        let mut fill_paint = JsonObject::new();
        fill_paint.insert("fill-color".to_owned(), self.fill.clone().into());
        fill_paint.insert("fill-opacity".to_owned(), self.opacity.into());

        let mut line_paint = JsonObject::new();
        line_paint.insert("line-color".to_owned(), self.stroke.clone().into());
        line_paint.insert("line-width".to_owned(), 4.into());
        line_paint.insert("line-opacity".to_owned(), self.opacity.into());

        let mut circle_paint = JsonObject::new();
        circle_paint.insert("circle-radius".to_owned(), 5.into());
        circle_paint.insert("circle-color".to_owned(), self.fill.clone().into());
        circle_paint.insert("circle-opacity".to_owned(), self.opacity.into());

        let mut label_layout = JsonObject::new();
        label_layout.insert("text-field".to_owned(), "{label}".into());
        label_layout.insert(
            "text-font".to_owned(),
            json!(["DIN Offc Pro Medium", "Arial Unicode MS Bold"]),
        );
        label_layout.insert("text-anchor".to_owned(), "top".into());
        label_layout.insert("text-offset".to_owned(), json!([0, 1.5]));
        label_layout.insert("text-size".to_owned(), 12.into());

        let mut document = StyleDocument::new();
        document.sources.insert(
            OVERLAY_SOURCE_ID.to_owned(),
            Source::geojson(GeoJson::FeatureCollection(self.data.clone())),
        );
        document.layers = vec![
            StyleLayer::new(FILL_LAYER_ID, LayerType::Fill)
                .with_source(OVERLAY_SOURCE_ID)
                .with_paint(fill_paint)
                .with_interactive(true),
            StyleLayer::new(LINE_LAYER_ID, LayerType::Line)
                .with_source(OVERLAY_SOURCE_ID)
                .with_paint(line_paint)
                .with_interactive(false),
            StyleLayer::new(CIRCLE_LAYER_ID, LayerType::Circle)
                .with_source(OVERLAY_SOURCE_ID)
                .with_paint(circle_paint)
                .with_interactive(false),
            StyleLayer::new(LABEL_LAYER_ID, LayerType::Symbol)
                .with_source(OVERLAY_SOURCE_ID)
                .with_layout(label_layout),
        ];

        document
    }
}

impl Default for GeoJsonOverlay {
    fn default() -> Self {
        Self {
            fill: "red".to_owned(),
            stroke: "blue".to_owned(),
            opacity: 1.0,
            data: FeatureCollection {
                bbox: None,
                features: Vec::new(),
                foreign_members: None,
            },
        }
    }
}
