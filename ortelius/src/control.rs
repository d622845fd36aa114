//! User interaction handling for the map widget.

use crate::geo::{ScreenPoint, ScreenSize, ScreenVector};
use crate::mercator::Mercator;
use crate::view::Viewport;

/// Highest zoom level the widget allows by default.
pub const DEFAULT_MAX_ZOOM: f64 = 16.0;

const DEFAULT_MIN_ZOOM: f64 = 0.0;
const DEFAULT_ZOOM_SPEED: f64 = 0.2;

/// User interaction event in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UserEvent {
    /// Drag started at the given pointer position.
    DragStarted(ScreenPoint),
    /// Pointer moved while dragging. The first parameter is the offset from
    /// the previous pointer position in pixels, the second is the current
    /// pointer position.
    Drag(ScreenVector, ScreenPoint),
    /// The drag was released.
    DragEnded,
    /// Scroll by the given number of lines around the pointer position.
    /// Positive values zoom in.
    Scroll(f64, ScreenPoint),
}

/// Maps interaction events to viewport replacements, providing panning and
/// zooming with configurable limits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportController {
    zoom_speed: f64,
    min_zoom: f64,
    max_zoom: f64,
}

impl Default for ViewportController {
    fn default() -> Self {
        Self {
            zoom_speed: DEFAULT_ZOOM_SPEED,
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
        }
    }
}

impl ViewportController {
    /// Zoom level change for every scrolled line.
    pub fn zoom_speed(&self) -> f64 {
        self.zoom_speed
    }

    /// Sets the zoom level change for every scrolled line.
    pub fn with_zoom_speed(mut self, speed: f64) -> Self {
        self.zoom_speed = speed;
        self
    }

    /// Lowest allowed zoom level.
    pub fn min_zoom(&self) -> f64 {
        self.min_zoom
    }

    /// Sets the lowest allowed zoom level.
    pub fn with_min_zoom(mut self, zoom: f64) -> Self {
        self.min_zoom = zoom;
        self
    }

    /// Highest allowed zoom level.
    pub fn max_zoom(&self) -> f64 {
        self.max_zoom
    }

    /// Sets the highest allowed zoom level.
    pub fn with_max_zoom(mut self, zoom: f64) -> Self {
        self.max_zoom = zoom;
        self
    }

    /// Produces the viewport replacing the current one after the event, or
    /// `None` if the event changes nothing.
    pub fn handle(
        &self,
        event: &UserEvent,
        viewport: &Viewport,
        size: ScreenSize,
    ) -> Option<Viewport> {
        match event {
            UserEvent::DragStarted(_) => {
                if viewport.is_dragging() {
                    None
                } else {
                    Some(viewport.with_drag_started())
                }
            }
            UserEvent::Drag(delta, _) => {
                let mercator = Mercator::new(viewport.center(), viewport.zoom(), size);
                Some(viewport.with_center(mercator.shifted_center(*delta)))
            }
            UserEvent::DragEnded => {
                if viewport.is_dragging() {
                    Some(viewport.with_drag_ended())
                } else {
                    None
                }
            }
            UserEvent::Scroll(delta, cursor) => {
                let target = self.adjust_zoom(viewport.zoom() + delta * self.zoom_speed);
                if target == viewport.zoom() {
                    return None;
                }

                let mercator = Mercator::new(viewport.center(), viewport.zoom(), size);
                let center = mercator.zoomed_center(target, *cursor);
                Some(viewport.with_center(center).with_zoom(target))
            }
        }
    }

    fn adjust_zoom(&self, mut target: f64) -> f64 {
        if target < self.min_zoom {
            target = self.min_zoom;
        }

        if target > self.max_zoom {
            target = self.max_zoom;
        }

        target
    }
}
