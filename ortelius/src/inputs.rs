//! Host inputs mirroring the viewport state.

use std::collections::BTreeMap;
use std::sync::Arc;

use maybe_sync::{MaybeSend, MaybeSync};
use parking_lot::RwLock;

/// Identifier of the input receiving the viewport longitude.
pub const VIEWPORT_LONGITUDE_INPUT: &str = "viewport_longitude";
/// Identifier of the input receiving the viewport latitude.
pub const VIEWPORT_LATITUDE_INPUT: &str = "viewport_latitude";
/// Identifier of the input receiving the viewport zoom level.
pub const VIEWPORT_ZOOM_INPUT: &str = "viewport_zoom";

/// Receiver of viewport values addressed by well known input identifiers.
///
/// On every render the widget writes its longitude, latitude and zoom into the
/// inputs named by the constants of this module. In a browser host these are
/// form fields on the surrounding page; headless hosts can collect the values
/// with a [`MemoryInputSink`].
pub trait InputSink: MaybeSend + MaybeSync {
    /// Sets the value of the input with the given identifier.
    fn set_value(&self, input_id: &str, value: f64);
}

impl<T: InputSink + ?Sized> InputSink for Arc<T> {
    fn set_value(&self, input_id: &str, value: f64) {
        (**self).set_value(input_id, value)
    }
}

/// An [`InputSink`] that keeps the latest values in memory.
#[derive(Debug, Default)]
pub struct MemoryInputSink {
    values: RwLock<BTreeMap<String, f64>>,
}

impl MemoryInputSink {
    /// Creates a sink with no values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the last value written to the input, if there was one.
    pub fn value(&self, input_id: &str) -> Option<f64> {
        self.values.read().get(input_id).copied()
    }
}

impl InputSink for MemoryInputSink {
    fn set_value(&self, input_id: &str, value: f64) {
        self.values.write().insert(input_id.to_owned(), value);
    }
}
