//! Map widget combining viewport state, basemap loading and the GeoJSON
//! overlay.

mod builder;

pub use builder::{MapVizBuilder, VizConfig};

use std::sync::{Arc, Weak};

use ortelius_style::{GeoJsonOverlay, StyleDocument};
use parking_lot::Mutex;

use crate::control::{UserEvent, ViewportController};
use crate::error::OrteliusError;
use crate::geo::{GeoBounds, ScreenSize};
use crate::inputs::{
    InputSink, VIEWPORT_LATITUDE_INPUT, VIEWPORT_LONGITUDE_INPUT, VIEWPORT_ZOOM_INPUT,
};
use crate::mercator::Mercator;
use crate::messenger::Messenger;
use crate::style_source::StyleSource;
use crate::view::Viewport;

/// State of the basemap style request.
#[derive(Debug, Clone)]
pub enum BasemapState {
    /// The request has not resolved yet. Frames use the fallback document.
    Loading,
    /// The merged document is ready for rendering.
    Ready(Arc<StyleDocument>),
    /// The request failed. Frames keep using the fallback document.
    Failed(Arc<OrteliusError>),
}

/// Interactive map widget.
///
/// The widget keeps the viewport state, runs the interaction controller and
/// tracks the basemap style request it starts on construction. It does not
/// draw anything itself. Instead, [`MapViz::render`] produces a [`MapFrame`]
/// describing what the embedding application should put on screen.
///
/// Use [`MapVizBuilder`] to create an instance.
pub struct MapViz {
    viewport: Viewport,
    size: ScreenSize,
    controller: ViewportController,
    basemap: Arc<Mutex<BasemapState>>,
    fallback: Arc<StyleDocument>,
    messenger: Option<Arc<dyn Messenger>>,
    input_sink: Option<Arc<dyn InputSink>>,
}

impl MapViz {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        viewport: Viewport,
        size: ScreenSize,
        controller: ViewportController,
        overlay: GeoJsonOverlay,
        style_id: String,
        style_source: Arc<dyn StyleSource>,
        messenger: Option<Arc<dyn Messenger>>,
        input_sink: Option<Arc<dyn InputSink>>,
    ) -> Self {
        let basemap = Arc::new(Mutex::new(BasemapState::Loading));

        let slot = Arc::downgrade(&basemap);
        let overlay_fragment = overlay.compose();
        let style_key = style_key(&style_id).to_owned();
        let task_messenger = messenger.clone();
        crate::async_runtime::spawn(async move {
            let outcome = style_source
                .load_style(&style_key)
                .await
                .map(|base| base.merge_overlay(&overlay_fragment));
            deliver_basemap(&slot, outcome, task_messenger.as_ref());
        });

        Self {
            viewport,
            size,
            controller,
            basemap,
            fallback: Arc::new(StyleDocument::fallback()),
            messenger,
            input_sink,
        }
    }

    /// Current viewport of the map.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Size of the rendering surface in pixels.
    pub fn size(&self) -> ScreenSize {
        self.size
    }

    /// Current state of the basemap style request.
    pub fn basemap_state(&self) -> BasemapState {
        self.basemap.lock().clone()
    }

    /// Replaces the viewport and requests a redraw.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.redraw();
    }

    /// Sets the size of the rendering surface in pixels.
    pub fn set_size(&mut self, size: ScreenSize) {
        self.size = size;
        self.redraw();
    }

    /// Runs the interaction controller over the event.
    ///
    /// Returns true if the event changed the viewport.
    pub fn handle_event(&mut self, event: &UserEvent) -> bool {
        match self.controller.handle(event, &self.viewport, self.size) {
            Some(viewport) => {
                self.set_viewport(viewport);
                true
            }
            None => false,
        }
    }

    /// Produces the description of the next frame and mirrors the viewport
    /// into the host inputs.
    pub fn render(&self) -> MapFrame {
        let viewport = self.viewport;
        let mercator = Mercator::new(viewport.center(), viewport.zoom(), self.size);

        if let Some(sink) = &self.input_sink {
            sink.set_value(VIEWPORT_LONGITUDE_INPUT, viewport.longitude());
            sink.set_value(VIEWPORT_LATITUDE_INPUT, viewport.latitude());
            sink.set_value(VIEWPORT_ZOOM_INPUT, viewport.zoom());
        }

        MapFrame {
            style: self.current_style(),
            viewport,
            size: self.size,
            bounds: mercator.bounds(),
        }
    }

    fn current_style(&self) -> Arc<StyleDocument> {
        match &*self.basemap.lock() {
            BasemapState::Ready(merged) => merged.clone(),
            BasemapState::Loading | BasemapState::Failed(_) => self.fallback.clone(),
        }
    }

    fn redraw(&self) {
        if let Some(messenger) = &self.messenger {
            messenger.request_redraw();
        }
    }
}

impl std::fmt::Debug for MapViz {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapViz")
            .field("viewport", &self.viewport)
            .field("size", &self.size)
            .finish()
    }
}

/// Declarative description of one frame of the map.
#[derive(Debug, Clone)]
pub struct MapFrame {
    style: Arc<StyleDocument>,
    viewport: Viewport,
    size: ScreenSize,
    bounds: GeoBounds,
}

impl MapFrame {
    /// Style document the surface should draw.
    pub fn style(&self) -> &StyleDocument {
        &self.style
    }

    /// Viewport the frame was produced for.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Size of the rendering surface in pixels.
    pub fn size(&self) -> ScreenSize {
        self.size
    }

    /// Geographic extent visible in the frame.
    pub fn bounds(&self) -> GeoBounds {
        self.bounds
    }
}

fn style_key(style_id: &str) -> &str {
    style_id.rsplit_once('/').map_or(style_id, |(_, key)| key)
}

fn deliver_basemap(
    slot: &Weak<Mutex<BasemapState>>,
    outcome: Result<StyleDocument, OrteliusError>,
    messenger: Option<&Arc<dyn Messenger>>,
) -> bool {
    let Some(basemap) = slot.upgrade() else {
        log::debug!("Basemap style resolved after the map was dropped");
        return false;
    };

    match outcome {
        Ok(merged) => {
            *basemap.lock() = BasemapState::Ready(Arc::new(merged));
            if let Some(messenger) = messenger {
                messenger.request_redraw();
            }
        }
        Err(error) => {
            log::error!("Failed to load basemap style: {error}");
            *basemap.lock() = BasemapState::Failed(Arc::new(error));
        }
    }

    true
}
