//! Ortelius is an interactive map widget for data applications. It shows a basemap fetched from
//! a style service with a GeoJSON overlay composed on top, and keeps the embedding host in sync
//! with the viewport as the user pans and zooms.
//!
//! # Quick start
//!
//! You can create a map over the Mapbox streets basemap by this code:
//!
//! ```no_run
//! use ortelius::{MapVizBuilder, RestStyleSource};
//!
//! # tokio_test::block_on(async {
//! let map = MapVizBuilder::new()
//!     .with_style_source(RestStyleSource::mapbox("pk.your-access-token"))
//!     .with_map_style("mapbox://styles/mapbox/streets-v9")
//!     .with_color("rgb(0, 122, 135)")
//!     .build()
//!     .expect("invalid map configuration");
//!
//! let frame = map.render();
//! println!("drawing {} layers", frame.style().layers.len());
//! # });
//! ```
//!
//! The widget starts loading the named style in the background as soon as it is built. Until the
//! request resolves, frames carry a built-in placeholder document, so the map can be drawn
//! immediately. Once the style arrives it is merged with the overlay and the configured
//! [`Messenger`] is asked for a redraw.
//!
//! # Main components
//!
//! * [`MapViz`] holds the [`Viewport`] and the basemap state, and produces a [`MapFrame`]
//!   describing each frame. It does not draw anything itself; the embedding application takes
//!   the frame to its rendering surface.
//! * [`StyleDocument`](ortelius_style::StyleDocument) is the declarative description of the map
//!   contents, fetched through a [`StyleSource`] and extended with the overlay layers of
//!   [`GeoJsonOverlay`](ortelius_style::GeoJsonOverlay).
//! * [`ViewportController`](control::ViewportController) turns user events into viewport
//!   replacements, and [`InputSink`](inputs::InputSink) mirrors the viewport into externally
//!   addressed host inputs on every frame.

#![warn(clippy::unwrap_used)]
#![warn(missing_docs)]

pub(crate) mod async_runtime;
mod color;
pub mod control;
pub mod error;
pub mod geo;
pub mod inputs;
mod map;
mod mercator;
mod messenger;
pub mod style_source;
pub mod view;

pub use color::RgbColor;
pub use map::{BasemapState, MapFrame, MapViz, MapVizBuilder, VizConfig};
pub use mercator::Mercator;
pub use messenger::Messenger;
pub use style_source::{RestStyleSource, StyleSource};
pub use view::Viewport;

// Reexport ortelius_style
pub use ortelius_style;
