//! Spawning of background tasks.

use std::future::Future;

use maybe_sync::MaybeSend;

/// Spawns the future on the ambient asynchronous runtime.
pub fn spawn<T>(future: T)
where
    T: Future + MaybeSend + 'static,
    T::Output: MaybeSend + 'static,
{
    tokio::spawn(future);
}
