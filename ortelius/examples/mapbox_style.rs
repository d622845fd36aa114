//! This example runs the full widget flow against the real Mapbox styles API: the named style is
//! fetched, merged with an empty overlay and reported to the console.
//!
//! Run this example with a Mapbox access token:
//!
//! ```shell
//! MAPBOX_ACCESS_TOKEN=pk.your-token cargo run --example mapbox_style
//! ```

use std::time::Duration;

use anyhow::{anyhow, Result};
use ortelius::geo::ScreenSize;
use ortelius::{BasemapState, MapVizBuilder, RestStyleSource};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let token = std::env::var("MAPBOX_ACCESS_TOKEN").map_err(|_| {
        anyhow!("This example must be run with the MAPBOX_ACCESS_TOKEN environment variable set")
    })?;

    let map = MapVizBuilder::new()
        .with_style_source(RestStyleSource::mapbox(token))
        .with_map_style("mapbox://styles/mapbox/streets-v9")
        .with_color("rgb(0, 122, 135)")
        .with_size(ScreenSize::new(1024.0, 768.0))
        .build()?;

    for _ in 0..100 {
        if !matches!(map.basemap_state(), BasemapState::Loading) {
            break;
        }
        tokio::time::sleep(Duration::from_millis(100)).await;
    }

    match map.basemap_state() {
        BasemapState::Ready(style) => println!(
            "loaded '{}' with {} layers",
            style.name.as_deref().unwrap_or("unnamed"),
            style.layers.len()
        ),
        BasemapState::Failed(error) => return Err(anyhow!("style request failed: {error}")),
        BasemapState::Loading => return Err(anyhow!("style request timed out")),
    }

    let frame = map.render();
    println!("visible bounds: {:?}", frame.bounds().to_array());

    Ok(())
}
