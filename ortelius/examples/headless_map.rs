//! This example shows how to drive the map widget without a window or a remote style service.
//! The basemap comes from an embedded style source, and user interaction is simulated with
//! synthetic events.
//!
//! ```shell
//! cargo run --example headless_map
//! ```

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use geojson::{Feature, FeatureCollection, Geometry, Value};
use ortelius::control::UserEvent;
use ortelius::error::OrteliusError;
use ortelius::geo::{ScreenPoint, ScreenSize, ScreenVector};
use ortelius::inputs::{
    MemoryInputSink, VIEWPORT_LATITUDE_INPUT, VIEWPORT_LONGITUDE_INPUT, VIEWPORT_ZOOM_INPUT,
};
use ortelius::{MapVizBuilder, StyleSource};
use ortelius_style::{LayerType, StyleDocument, StyleLayer};
use serde_json::json;

struct EmbeddedStyleSource;

#[async_trait]
impl StyleSource for EmbeddedStyleSource {
    async fn load_style(&self, _style_id: &str) -> Result<StyleDocument, OrteliusError> {
        let mut style = StyleDocument::new();
        style.name = Some("Embedded".to_owned());
        style.layers = vec![
            StyleLayer::new("land", LayerType::Background),
            StyleLayer::new("towers-3d", LayerType::FillExtrusion),
        ];

        Ok(style)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let sink = Arc::new(MemoryInputSink::new());
    let mut map = MapVizBuilder::new()
        .with_style_source(EmbeddedStyleSource)
        .with_geo_json(sample_features())
        .with_color("rgb(0, 122, 135)")
        .with_opacity(0.8)
        .with_size(ScreenSize::new(800.0, 600.0))
        .with_input_sink(sink.clone())
        .build()?;

    // The style request runs in the background; let it resolve before the first frame.
    tokio::time::sleep(Duration::from_millis(10)).await;

    let frame = map.render();
    println!(
        "style '{}' with {} layers, visible bounds {:?}",
        frame.style().name.as_deref().unwrap_or("placeholder"),
        frame.style().layers.len(),
        frame.bounds().to_array()
    );

    map.handle_event(&UserEvent::Scroll(2.0, ScreenPoint::new(400.0, 300.0)));
    map.handle_event(&UserEvent::DragStarted(ScreenPoint::new(400.0, 300.0)));
    map.handle_event(&UserEvent::Drag(
        ScreenVector::new(-120.0, 45.0),
        ScreenPoint::new(280.0, 345.0),
    ));
    map.handle_event(&UserEvent::DragEnded);

    map.render();
    println!(
        "after interaction: longitude {:.6}, latitude {:.6}, zoom {:.1}",
        sink.value(VIEWPORT_LONGITUDE_INPUT).unwrap_or_default(),
        sink.value(VIEWPORT_LATITUDE_INPUT).unwrap_or_default(),
        sink.value(VIEWPORT_ZOOM_INPUT).unwrap_or_default()
    );

    Ok(())
}

fn sample_features() -> FeatureCollection {
    let features = [
        ("Ferry Building", vec![-122.3937, 37.7955]),
        ("Mission Dolores Park", vec![-122.4275, 37.7596]),
    ]
    .into_iter()
    .map(|(label, position)| Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::Point(position))),
        id: None,
        properties: json!({ "label": label }).as_object().cloned(),
        foreign_members: None,
    })
    .collect();

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}
