//! Task spawning port.

use futures::future::BoxFuture;

/// Runs detached tasks.
///
/// Callback accessors synthesised on top of a unified accessor return before
/// the answer is known; the future that produces the answer and invokes the
/// completion is handed to a spawner. Any closure taking the boxed future is a
/// spawner, which keeps wiring to an existing executor a one-liner:
///
/// ```ignore
/// use futures::future::BoxFuture;
///
/// let bridge = Bridge::new(|task: BoxFuture<'static, ()>| {
///     tokio::spawn(task);
/// });
/// ```
pub trait Spawner: Send + Sync {
    /// Run `task` to completion in the background.
    fn spawn(&self, task: BoxFuture<'static, ()>);
}

impl<F> Spawner for F
where
    F: Fn(BoxFuture<'static, ()>) + Send + Sync,
{
    fn spawn(&self, task: BoxFuture<'static, ()>) {
        self(task)
    }
}
