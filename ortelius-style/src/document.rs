use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON object used for paint, layout and metadata blocks.
pub type JsonObject = serde_json::Map<String, Value>;

/// A declarative map style: sources of geographic data plus an ordered list of
/// layers describing how to draw them.
///
/// The document follows the Mapbox GL style schema. Only the fields this crate
/// operates on are typed; everything else is captured by `extra` and written
/// back unchanged on serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleDocument {
    pub version: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "JsonObject::is_empty")]
    pub metadata: JsonObject,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub sources: BTreeMap<String, Source>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sprite: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glyphs: Option<String>,
    #[serde(default)]
    pub layers: Vec<StyleLayer>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl StyleDocument {
    /// Style schema version this crate produces.
    pub const VERSION: u32 = 8;

    /// Creates an empty document with no sources or layers.
    pub fn new() -> Self {
        Self {
            version: Self::VERSION,
            name: None,
            metadata: JsonObject::new(),
            sources: BTreeMap::new(),
            sprite: None,
            glyphs: None,
            layers: Vec::new(),
            extra: JsonObject::new(),
        }
    }

    /// Built-in basemap shown until a remote style becomes available: a single
    /// background layer over the standard street source.
    pub fn fallback() -> Self {
        let mut metadata = JsonObject::new();
        metadata.insert("mapbox:autocomposite".to_owned(), Value::Bool(true));

        let mut background_paint = JsonObject::new();
        background_paint.insert("background-color".to_owned(), "#dedede".into());

        let mut document = Self::new();
        document.name = Some("Basic".to_owned());
        document.metadata = metadata;
        document.sources.insert(
            "mapbox".to_owned(),
            Source::vector_url("mapbox://mapbox.mapbox-streets-v7"),
        );
        document.sprite = Some("mapbox://sprites/mapbox/basic-v8".to_owned());
        document.glyphs = Some("mapbox://fonts/mapbox/{fontstack}/{range}.pbf".to_owned());
        document.layers = vec![StyleLayer::new("background", LayerType::Background)
            .with_paint(background_paint)
            .with_interactive(true)];

        document
    }

    pub fn layer(&self, id: &str) -> Option<&StyleLayer> {
        self.layers.iter().find(|layer| layer.id == id)
    }

    pub fn source(&self, id: &str) -> Option<&Source> {
        self.sources.get(id)
    }
}

impl Default for StyleDocument {
    fn default() -> Self {
        Self::new()
    }
}

/// A source of geographic data referenced by layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    #[serde(rename = "type")]
    pub kind: SourceType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<GeoJsonSourceData>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl Source {
    /// Creates a vector tile source addressed by URL.
    pub fn vector_url(url: impl Into<String>) -> Self {
        Self {
            kind: SourceType::Vector,
            url: Some(url.into()),
            data: None,
            extra: JsonObject::new(),
        }
    }

    /// Creates a source with inline GeoJSON data.
    pub fn geojson(data: geojson::GeoJson) -> Self {
        Self {
            kind: SourceType::GeoJson,
            url: None,
            data: Some(GeoJsonSourceData::Inline(data)),
            extra: JsonObject::new(),
        }
    }
}

/// Payload of a GeoJSON source: a document embedded in the style, or a URL
/// string pointing at one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GeoJsonSourceData {
    Inline(geojson::GeoJson),
    Url(String),
}

/// Kind of data a [`Source`] provides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SourceType {
    Vector,
    Raster,
    GeoJson,
    Image,
    Video,
    /// Source type this crate does not know about, kept as is.
    Other(String),
}

impl SourceType {
    pub fn as_str(&self) -> &str {
        match self {
            SourceType::Vector => "vector",
            SourceType::Raster => "raster",
            SourceType::GeoJson => "geojson",
            SourceType::Image => "image",
            SourceType::Video => "video",
            SourceType::Other(v) => v,
        }
    }
}

impl From<String> for SourceType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "vector" => SourceType::Vector,
            "raster" => SourceType::Raster,
            "geojson" => SourceType::GeoJson,
            "image" => SourceType::Image,
            "video" => SourceType::Video,
            _ => SourceType::Other(value),
        }
    }
}

impl From<SourceType> for String {
    fn from(value: SourceType) -> Self {
        match value {
            SourceType::Other(v) => v,
            known => known.as_str().to_owned(),
        }
    }
}

/// A single drawing instruction of a style. Layer order is paint order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleLayer {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: LayerType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(rename = "source-layer", skip_serializing_if = "Option::is_none")]
    pub source_layer: Option<String>,
    #[serde(default, skip_serializing_if = "JsonObject::is_empty")]
    pub paint: JsonObject,
    #[serde(default, skip_serializing_if = "JsonObject::is_empty")]
    pub layout: JsonObject,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interactive: Option<bool>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl StyleLayer {
    pub fn new(id: impl Into<String>, kind: LayerType) -> Self {
        Self {
            id: id.into(),
            kind,
            source: None,
            source_layer: None,
            paint: JsonObject::new(),
            layout: JsonObject::new(),
            interactive: None,
            extra: JsonObject::new(),
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_paint(mut self, paint: JsonObject) -> Self {
        self.paint = paint;
        self
    }

    pub fn with_layout(mut self, layout: JsonObject) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_interactive(mut self, interactive: bool) -> Self {
        self.interactive = Some(interactive);
        self
    }
}

/// Kind of drawing a [`StyleLayer`] performs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LayerType {
    Background,
    Fill,
    Line,
    Symbol,
    Circle,
    FillExtrusion,
    Raster,
    Heatmap,
    Hillshade,
    /// Layer type this crate does not know about, kept as is.
    Other(String),
}

impl LayerType {
    pub fn as_str(&self) -> &str {
        match self {
            LayerType::Background => "background",
            LayerType::Fill => "fill",
            LayerType::Line => "line",
            LayerType::Symbol => "symbol",
            LayerType::Circle => "circle",
            LayerType::FillExtrusion => "fill-extrusion",
            LayerType::Raster => "raster",
            LayerType::Heatmap => "heatmap",
            LayerType::Hillshade => "hillshade",
            LayerType::Other(v) => v,
        }
    }
}

impl Display for LayerType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<String> for LayerType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "background" => LayerType::Background,
            "fill" => LayerType::Fill,
            "line" => LayerType::Line,
            "symbol" => LayerType::Symbol,
            "circle" => LayerType::Circle,
            "fill-extrusion" => LayerType::FillExtrusion,
            "raster" => LayerType::Raster,
            "heatmap" => LayerType::Heatmap,
            "hillshade" => LayerType::Hillshade,
            _ => LayerType::Other(value),
        }
    }
}

impl From<LayerType> for String {
    fn from(value: LayerType) -> Self {
        match value {
            LayerType::Other(v) => v,
            known => known.as_str().to_owned(),
        }
    }
}
