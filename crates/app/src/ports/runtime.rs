//! Runtime port — task spawning and timers.

use std::future::Future;
use std::time::Duration;

/// The event loop the dashboard runs on.
///
/// Spawned tasks run concurrently with the caller on the same thread;
/// nothing is cancelled once spawned.
pub trait Runtime {
    /// Run `task` in the background.
    fn spawn<F>(&self, task: F)
    where
        F: Future<Output = ()> + 'static;

    /// Resolve after `duration` has elapsed.
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}
