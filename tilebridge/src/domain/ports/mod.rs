//! Ports define the interfaces between the domain and the outside world.
//!
//! - **Primary ports** are the two calling conventions a tile source can
//!   speak: [`CallbackSource`] and [`AsyncSource`].
//! - **Secondary ports** are what the adapters need from their environment:
//!   a [`CoordinateCodec`] to expand quadtile indices and a [`Spawner`] to
//!   drive futures behind callback accessors.

mod async_source;
mod callback_source;
mod completion;
mod coordinate_codec;
mod spawner;

pub use async_source::{AsyncSource, EnvelopeFuture};
pub use callback_source::CallbackSource;
pub use completion::Completion;
pub use coordinate_codec::CoordinateCodec;
pub use spawner::Spawner;
