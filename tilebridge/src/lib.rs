//! Calling-convention bridge for map tile sources.
//!
//! A tile source serves raster or vector tiles, UTF grids and metadata. Two
//! calling conventions exist for it:
//!
//! - the **callback** convention: `getTile(z, x, y, done)`,
//!   `getGrid(z, x, y, done)` and `getInfo(done)`, each answering through an
//!   error-first completion
//! - the **unified** convention: a single `getAsync(options)` returning a
//!   future that resolves to an [`Envelope`]
//!
//! [`bridge`] takes a source speaking either one and returns a [`DualSource`]
//! speaking both. Accessors the source already has are kept untouched.
//!
//! # Architecture
//!
//! ## Domain Layer (`domain`)
//! - **Value Objects**: `RequestOptions`, `Envelope`, `Payload`, `Headers`, `Metadata`
//! - **Entities**: `TileSource`, the member table being adapted
//! - **Ports**: `CallbackSource`, `AsyncSource`, `CoordinateCodec`, `Spawner`
//! - **Classifier**: `classify`
//!
//! ## Adapter Layer (`adapters`)
//! - **`Bridge`**: classifies and synthesises
//! - **`AsyncFromCallback`** / **`CallbackFromAsync`**: the two directions
//!
//! # Quick Start
//!
//! ```
//! use futures::future::BoxFuture;
//! use futures::FutureExt;
//! use tilebridge::{bridge, CallbackSource, Completion, Envelope, Payload, RequestOptions, TileSource};
//!
//! let modern = TileSource::new().with_get_async(|options: RequestOptions| {
//!     async move { Ok(Envelope::Tile(Payload::new(format!("tile:{}", options.z)))) }.boxed()
//! });
//!
//! let inline = |task: BoxFuture<'static, ()>| futures::executor::block_on(task);
//! let source = bridge(Some(modern), inline).unwrap();
//!
//! source.get_tile(3, 0, 0, Completion::new(|result: Result<Payload, _>| {
//!     assert_eq!(result.unwrap().data, b"tile:3");
//! }));
//! ```
//!
//! # Features
//!
//! - `std`: Enable standard library support in dependencies
//! - `log`: Enable logging support
//! - `defmt`: Enable defmt logging for embedded
//! - `runtime-tokio`: `TokioSpawner` and `Bridge::tokio`

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

// Must come first so the macros are visible to the modules below
#[macro_use]
mod fmt;

pub mod domain;
pub mod adapters;

pub use domain::{
    classify, AsyncSource, Axis, BridgeError, CallbackSource, Completion, Convention,
    CoordinateCodec, Envelope, EnvelopeFuture, Headers, InvalidReason, MemberName, MemberState,
    Metadata, Payload, RequestOptions, ResourceKind, SourceError, Spawner, TileSource,
};

pub use adapters::{bridge, AsyncFromCallback, Bridge, CallbackFromAsync, DualSource, QuadtileCodec};

#[cfg(feature = "runtime-tokio")]
pub use adapters::TokioSpawner;

pub use tilebridge_quadtile::{index_to_xy, xy_to_index};
