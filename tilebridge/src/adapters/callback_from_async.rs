//! Callback accessors synthesised over the unified accessor.

use crate::domain::{
    entities::{AsyncFn, InfoFn, TileFn},
    error::SourceError,
    ports::{CallbackSource, Completion, Spawner},
    value_objects::{Envelope, Metadata, Payload, RequestOptions, ResourceKind},
};
use alloc::sync::Arc;
use futures::FutureExt;

/// Implements [`CallbackSource`] on top of a unified accessor.
///
/// Each accessor issues its own `get_async` request at call time and hands
/// the pending future to the spawner, which invokes the completion once the
/// future settles.
pub struct CallbackFromAsync {
    get_async: AsyncFn,
    spawner: Arc<dyn Spawner>,
}

impl CallbackFromAsync {
    /// Wrap a unified accessor.
    pub fn new(get_async: AsyncFn, spawner: Arc<dyn Spawner>) -> Self {
        Self { get_async, spawner }
    }

    /// Shareable tile accessor backed by `this`.
    pub fn tile_fn(this: &Arc<Self>) -> TileFn {
        let this = this.clone();
        Arc::new(move |z: u8, x: u32, y: u32, done: Completion<Payload>| {
            this.get_tile(z, x, y, done)
        })
    }

    /// Shareable grid accessor backed by `this`.
    pub fn grid_fn(this: &Arc<Self>) -> TileFn {
        let this = this.clone();
        Arc::new(move |z: u8, x: u32, y: u32, done: Completion<Payload>| {
            this.get_grid(z, x, y, done)
        })
    }

    /// Shareable metadata accessor backed by `this`.
    pub fn info_fn(this: &Arc<Self>) -> InfoFn {
        let this = this.clone();
        Arc::new(move |done: Completion<Metadata>| this.get_info(done))
    }

    fn forward<T: Send + 'static>(
        &self,
        options: RequestOptions,
        kind: ResourceKind,
        unwrap: fn(Envelope) -> Result<T, SourceError>,
        done: Completion<T>,
    ) {
        trace!("forwarding {:?} callback request at zoom {} to unified accessor", kind, options.z);
        let pending = (self.get_async)(options);
        let done = Pending::new(done, kind);
        self.spawner
            .spawn(async move { done.complete(pending.await.and_then(unwrap)) }.boxed());
    }
}

/// Completion held by a spawned task. Answers [`SourceError::Abandoned`] if
/// the task is dropped before it settles.
struct Pending<T> {
    done: Option<Completion<T>>,
    kind: ResourceKind,
}

impl<T> Pending<T> {
    fn new(done: Completion<T>, kind: ResourceKind) -> Self {
        Self {
            done: Some(done),
            kind,
        }
    }

    fn complete(mut self, result: Result<T, SourceError>) {
        if let Some(done) = self.done.take() {
            done.complete(result);
        }
    }
}

impl<T> Drop for Pending<T> {
    fn drop(&mut self) {
        if let Some(done) = self.done.take() {
            warn!("{:?} task dropped before the unified accessor settled", self.kind);
            done.fail(SourceError::Abandoned(self.kind));
        }
    }
}

impl CallbackSource for CallbackFromAsync {
    fn get_tile(&self, z: u8, x: u32, y: u32, done: Completion<Payload>) {
        self.forward(RequestOptions::tile(z, x, y), ResourceKind::Tile, Envelope::into_tile, done)
    }

    fn get_grid(&self, z: u8, x: u32, y: u32, done: Completion<Payload>) {
        self.forward(RequestOptions::grid(z, x, y), ResourceKind::Grid, Envelope::into_grid, done)
    }

    fn get_info(&self, done: Completion<Metadata>) {
        self.forward(RequestOptions::info(), ResourceKind::Info, Envelope::into_info, done)
    }
}
