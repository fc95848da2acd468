//! A tile source speaking both conventions.

use crate::domain::{
    entities::{AsyncFn, InfoFn, Member, TileFn, TileSource},
    ports::{AsyncSource, CallbackSource, Completion, EnvelopeFuture},
    value_objects::{Metadata, Payload, RequestOptions},
};
use alloc::sync::Arc;
use core::fmt;

/// Result of bridging: all four accessors, each either the source's own or
/// a synthesised one.
///
/// Cloning is cheap; clones share the same accessors. Converting back into a
/// [`TileSource`] and bridging again yields a source whose accessors are the
/// very same, see [`DualSource::ptr_eq`].
#[derive(Clone)]
pub struct DualSource {
    get_tile: TileFn,
    get_grid: TileFn,
    get_info: InfoFn,
    get_async: AsyncFn,
}

impl DualSource {
    pub(crate) fn new(get_tile: TileFn, get_grid: TileFn, get_info: InfoFn, get_async: AsyncFn) -> Self {
        Self {
            get_tile,
            get_grid,
            get_info,
            get_async,
        }
    }

    /// Whether both sources share every accessor.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.get_tile, &other.get_tile)
            && Arc::ptr_eq(&self.get_grid, &other.get_grid)
            && Arc::ptr_eq(&self.get_info, &other.get_info)
            && Arc::ptr_eq(&self.get_async, &other.get_async)
    }

    /// Member table with all four accessors bound.
    pub fn into_source(self) -> TileSource {
        TileSource {
            get_tile: Member::Callable(self.get_tile),
            get_grid: Member::Callable(self.get_grid),
            get_info: Member::Callable(self.get_info),
            get_async: Member::Callable(self.get_async),
        }
    }
}

impl CallbackSource for DualSource {
    fn get_tile(&self, z: u8, x: u32, y: u32, done: Completion<Payload>) {
        (self.get_tile)(z, x, y, done)
    }

    fn get_grid(&self, z: u8, x: u32, y: u32, done: Completion<Payload>) {
        (self.get_grid)(z, x, y, done)
    }

    fn get_info(&self, done: Completion<Metadata>) {
        (self.get_info)(done)
    }
}

impl AsyncSource for DualSource {
    fn get_async(&self, options: RequestOptions) -> EnvelopeFuture {
        (self.get_async)(options)
    }
}

impl From<DualSource> for TileSource {
    fn from(source: DualSource) -> Self {
        source.into_source()
    }
}

impl fmt::Debug for DualSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DualSource").finish_non_exhaustive()
    }
}
