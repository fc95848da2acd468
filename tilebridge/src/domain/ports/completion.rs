//! Completion handler of the callback convention.

use crate::domain::error::SourceError;
use alloc::boxed::Box;
use futures::channel::oneshot;

/// Error-first completion handler for one callback-convention request.
///
/// A completion is consumed when it is invoked, so every request is answered
/// at most once. Sources must answer exactly once; a completion that is
/// dropped unanswered is reported to bridged callers as
/// [`SourceError::Abandoned`].
///
/// # Examples
///
/// ```
/// use tilebridge::Completion;
///
/// let done = Completion::new(|result: Result<u32, _>| {
///     assert_eq!(result.unwrap(), 7);
/// });
/// done.succeed(7);
/// ```
pub struct Completion<T> {
    handler: Box<dyn FnOnce(Result<T, SourceError>) + Send + 'static>,
}

impl<T> Completion<T> {
    /// Wrap a handler.
    pub fn new<F>(handler: F) -> Self
    where
        F: FnOnce(Result<T, SourceError>) + Send + 'static,
    {
        Self {
            handler: Box::new(handler),
        }
    }

    /// Answer the request.
    pub fn complete(self, result: Result<T, SourceError>) {
        (self.handler)(result)
    }

    /// Answer the request successfully.
    pub fn succeed(self, value: T) {
        self.complete(Ok(value))
    }

    /// Answer the request with an error.
    pub fn fail(self, err: SourceError) {
        self.complete(Err(err))
    }
}

impl<T: Send + 'static> Completion<T> {
    /// A completion whose outcome is delivered through a oneshot channel.
    ///
    /// The receiver yields `Err(Canceled)` if the completion is dropped
    /// without being invoked.
    pub fn channel() -> (Self, oneshot::Receiver<Result<T, SourceError>>) {
        let (tx, rx) = oneshot::channel();
        let completion = Self::new(move |result| {
            // The receiver is gone only if the caller stopped waiting.
            let _ = tx.send(result);
        });
        (completion, rx)
    }
}

impl<T> core::fmt::Debug for Completion<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Completion").finish_non_exhaustive()
    }
}
