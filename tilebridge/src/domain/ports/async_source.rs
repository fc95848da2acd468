//! Async-convention port.

use crate::domain::{
    error::SourceError,
    value_objects::{Envelope, RequestOptions},
};
use futures::future::BoxFuture;

/// Future returned by the unified accessor.
pub type EnvelopeFuture = BoxFuture<'static, Result<Envelope, SourceError>>;

/// A tile source exposing a single accessor parameterised by [`RequestOptions`].
///
/// The returned future owns everything it needs, so callers may hold it past
/// the borrow of the source.
pub trait AsyncSource: Send + Sync {
    /// Serve one request.
    fn get_async(&self, options: RequestOptions) -> EnvelopeFuture;
}
