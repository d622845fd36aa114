use std::sync::Arc;

use maybe_sync::{MaybeSend, MaybeSync};

/// Notifies the embedding application that the map must be redrawn.
pub trait Messenger: MaybeSend + MaybeSync {
    /// Requests a redraw of the map.
    fn request_redraw(&self);
}

impl<T: Messenger + ?Sized> Messenger for Arc<T> {
    fn request_redraw(&self) {
        (**self).request_redraw()
    }
}
