//! Unified accessor synthesised over the three callback accessors.

use crate::domain::{
    entities::{AsyncFn, InfoFn, TileFn},
    error::SourceError,
    ports::{AsyncSource, Completion, CoordinateCodec, EnvelopeFuture},
    value_objects::{Envelope, Payload, RequestOptions, ResourceKind},
};
use alloc::sync::Arc;
use futures::{channel::oneshot, future, FutureExt};

/// Implements [`AsyncSource`] on top of callback accessors.
///
/// The native accessor is invoked synchronously inside `get_async`; the
/// returned future only waits for its completion. Metadata requests are
/// dispatched before coordinates are looked at, so whatever `x`, `y` or
/// `index` accompanies an `info` request is never decoded or validated.
pub struct AsyncFromCallback {
    get_tile: TileFn,
    get_grid: TileFn,
    get_info: InfoFn,
    codec: Arc<dyn CoordinateCodec + Send + Sync>,
}

impl AsyncFromCallback {
    /// Wrap the three callback accessors.
    pub fn new(
        get_tile: TileFn,
        get_grid: TileFn,
        get_info: InfoFn,
        codec: Arc<dyn CoordinateCodec + Send + Sync>,
    ) -> Self {
        Self {
            get_tile,
            get_grid,
            get_info,
            codec,
        }
    }

    /// Turn this adapter into a shareable unified accessor.
    pub fn into_async_fn(self) -> AsyncFn {
        let this = Arc::new(self);
        Arc::new(move |options: RequestOptions| this.get_async(options))
    }

    fn info(&self) -> EnvelopeFuture {
        let (done, rx) = Completion::channel();
        (self.get_info)(done);
        settle(rx, ResourceKind::Info, Envelope::Info)
    }
}

impl AsyncSource for AsyncFromCallback {
    fn get_async(&self, options: RequestOptions) -> EnvelopeFuture {
        let kind = match options.resource_kind() {
            Ok(kind) => kind,
            Err(err) => return future::ready(Err(err)).boxed(),
        };

        let (accessor, wrap): (&TileFn, fn(Payload) -> Envelope) = match kind {
            ResourceKind::Info => return self.info(),
            ResourceKind::Tile => (&self.get_tile, Envelope::Tile),
            ResourceKind::Grid => (&self.get_grid, Envelope::Grid),
        };

        let (x, y) = match options.resolve_xy(self.codec.as_ref()) {
            Ok(xy) => xy,
            Err(err) => return future::ready(Err(err)).boxed(),
        };

        trace!("dispatching {:?} {}/{}/{} to callback accessor", kind, options.z, x, y);
        let (done, rx) = Completion::channel();
        accessor(options.z, x, y, done);
        settle(rx, kind, wrap)
    }
}

fn settle<T: Send + 'static>(
    rx: oneshot::Receiver<Result<T, SourceError>>,
    kind: ResourceKind,
    wrap: fn(T) -> Envelope,
) -> EnvelopeFuture {
    async move {
        match rx.await {
            Ok(result) => result.map(wrap),
            Err(oneshot::Canceled) => {
                warn!("{:?} completion dropped without an answer", kind);
                Err(SourceError::Abandoned(kind))
            }
        }
    }
    .boxed()
}
