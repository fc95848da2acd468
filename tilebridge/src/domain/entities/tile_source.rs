//! Member table of a tile source.

use crate::domain::{
    entities::{Member, MemberName, MemberState},
    ports::{AsyncSource, CallbackSource, Completion, EnvelopeFuture},
    value_objects::{Metadata, Payload, RequestOptions},
};
use alloc::boxed::Box;
use alloc::sync::Arc;
use core::any::Any;

/// Shared tile or grid accessor: `(z, x, y, completion)`.
pub type TileFn = Arc<dyn Fn(u8, u32, u32, Completion<Payload>) + Send + Sync>;

/// Shared metadata accessor.
pub type InfoFn = Arc<dyn Fn(Completion<Metadata>) + Send + Sync>;

/// Shared unified accessor.
pub type AsyncFn = Arc<dyn Fn(RequestOptions) -> EnvelopeFuture + Send + Sync>;

/// A tile source as a table of named members.
///
/// Each of `getTile`, `getGrid`, `getInfo` and `getAsync` may be absent,
/// callable, or bound to a non-callable value. The bridge classifies the table
/// and fills in whichever convention is missing.
///
/// # Examples
///
/// ```
/// use tilebridge::{Completion, MemberName, MemberState, Payload, TileSource};
///
/// let source = TileSource::new()
///     .with_get_tile(|z, x, y, done: Completion<Payload>| {
///         done.succeed(Payload::new(format!("tile:{z}:{x}:{y}")));
///     })
///     .with_value(MemberName::GetGrid, 42);
///
/// assert_eq!(source.state(MemberName::GetTile), MemberState::Callable);
/// assert_eq!(source.state(MemberName::GetGrid), MemberState::NotCallable);
/// assert_eq!(source.state(MemberName::GetAsync), MemberState::Absent);
/// ```
#[derive(Debug, Default)]
pub struct TileSource {
    pub(crate) get_tile: Member<TileFn>,
    pub(crate) get_grid: Member<TileFn>,
    pub(crate) get_info: Member<InfoFn>,
    pub(crate) get_async: Member<AsyncFn>,
}

impl TileSource {
    /// An empty table. Not a valid source until accessors are added.
    pub fn new() -> Self {
        Self::default()
    }

    /// Table exposing the callback convention of `source`.
    pub fn from_callbacks<S>(source: Arc<S>) -> Self
    where
        S: CallbackSource + 'static,
    {
        let tiles = source.clone();
        let grids = source.clone();
        Self::new()
            .with_get_tile(move |z: u8, x: u32, y: u32, done: Completion<Payload>| {
                tiles.get_tile(z, x, y, done)
            })
            .with_get_grid(move |z: u8, x: u32, y: u32, done: Completion<Payload>| {
                grids.get_grid(z, x, y, done)
            })
            .with_get_info(move |done: Completion<Metadata>| source.get_info(done))
    }

    /// Table exposing the async convention of `source`.
    pub fn from_async<S>(source: Arc<S>) -> Self
    where
        S: AsyncSource + 'static,
    {
        Self::new().with_get_async(move |options: RequestOptions| source.get_async(options))
    }

    /// Bind the tile accessor.
    #[must_use]
    pub fn with_get_tile<F>(mut self, f: F) -> Self
    where
        F: Fn(u8, u32, u32, Completion<Payload>) + Send + Sync + 'static,
    {
        self.get_tile = Member::Callable(Arc::new(f));
        self
    }

    /// Bind the grid accessor.
    #[must_use]
    pub fn with_get_grid<F>(mut self, f: F) -> Self
    where
        F: Fn(u8, u32, u32, Completion<Payload>) + Send + Sync + 'static,
    {
        self.get_grid = Member::Callable(Arc::new(f));
        self
    }

    /// Bind the metadata accessor.
    #[must_use]
    pub fn with_get_info<F>(mut self, f: F) -> Self
    where
        F: Fn(Completion<Metadata>) + Send + Sync + 'static,
    {
        self.get_info = Member::Callable(Arc::new(f));
        self
    }

    /// Bind the unified accessor.
    #[must_use]
    pub fn with_get_async<F>(mut self, f: F) -> Self
    where
        F: Fn(RequestOptions) -> EnvelopeFuture + Send + Sync + 'static,
    {
        self.get_async = Member::Callable(Arc::new(f));
        self
    }

    /// Bind a non-callable value under an accessor's name.
    ///
    /// Such a table is always rejected by the bridge; this exists for sources
    /// assembled from dynamic descriptions, where a wrong-typed entry must be
    /// reported rather than silently skipped.
    #[must_use]
    pub fn with_value<V>(mut self, name: MemberName, value: V) -> Self
    where
        V: Any + Send + Sync,
    {
        let value: Box<dyn Any + Send + Sync> = Box::new(value);
        match name {
            MemberName::GetTile => self.get_tile = Member::Value(value),
            MemberName::GetGrid => self.get_grid = Member::Value(value),
            MemberName::GetInfo => self.get_info = Member::Value(value),
            MemberName::GetAsync => self.get_async = Member::Value(value),
        }
        self
    }

    /// Remove a member.
    #[must_use]
    pub fn without(mut self, name: MemberName) -> Self {
        match name {
            MemberName::GetTile => self.get_tile = Member::Absent,
            MemberName::GetGrid => self.get_grid = Member::Absent,
            MemberName::GetInfo => self.get_info = Member::Absent,
            MemberName::GetAsync => self.get_async = Member::Absent,
        }
        self
    }

    /// Presence state of a member.
    pub fn state(&self, name: MemberName) -> MemberState {
        match name {
            MemberName::GetTile => self.get_tile.state(),
            MemberName::GetGrid => self.get_grid.state(),
            MemberName::GetInfo => self.get_info.state(),
            MemberName::GetAsync => self.get_async.state(),
        }
    }
}
