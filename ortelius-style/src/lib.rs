//! Declarative map style documents and GeoJSON overlay composition.
//!
//! A [`StyleDocument`] is the JSON description of a map that a rendering
//! surface consumes: named [`Source`]s of geographic data plus an ordered list
//! of [`StyleLayer`]s drawing them. Documents fetched from a style service keep
//! their unrecognized fields intact through deserialization, so editing a
//! document here never strips information a renderer may rely on.
//!
//! [`GeoJsonOverlay`] builds the fragment that draws user data on top of a
//! basemap, and [`StyleDocument::merge_overlay`] combines the two.

pub mod document;
mod merge;
pub mod overlay;

pub use document::{
    GeoJsonSourceData, JsonObject, LayerType, Source, SourceType, StyleDocument, StyleLayer,
};
pub use overlay::GeoJsonOverlay;
