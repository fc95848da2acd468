//! Adapter layer - synthesised accessors and the bridge that wires them up.
//!
//! ```text
//!     ┌──────────────────────────────────┐
//!     │      Domain Layer                │
//!     │  - TileSource (member table)     │
//!     │  - classify (verdict)            │
//!     └────────────┬─────────────────────┘
//!                  │
//!                  │ consumed by
//!                  ▼
//!     ┌──────────────────────────────────┐
//!     │      Adapter Layer               │  ◄── This module
//!     │  - Bridge                        │
//!     │  - AsyncFromCallback             │
//!     │  - CallbackFromAsync             │
//!     └────────────┬─────────────────────┘
//!                  │
//!                  │ produces
//!                  ▼
//!     ┌──────────────────────────────────┐
//!     │  DualSource (both conventions)   │
//!     └──────────────────────────────────┘
//! ```
//!
//! # Available Adapters
//!
//! - **`AsyncFromCallback`**: `getAsync` over `getTile`/`getGrid`/`getInfo`
//! - **`CallbackFromAsync`**: the three callback accessors over `getAsync`
//! - **`QuadtileCodec`**: default [`CoordinateCodec`](crate::domain::CoordinateCodec)
//! - **`TokioSpawner`**: [`Spawner`](crate::domain::Spawner) on a tokio runtime (requires `runtime-tokio`)

mod async_from_callback;
mod bridge;
mod callback_from_async;
mod dual_source;
mod quadtile_codec;

#[cfg(feature = "runtime-tokio")]
mod tokio_spawner;

pub use async_from_callback::AsyncFromCallback;
pub use bridge::{bridge, Bridge};
pub use callback_from_async::CallbackFromAsync;
pub use dual_source::DualSource;
pub use quadtile_codec::QuadtileCodec;

#[cfg(feature = "runtime-tokio")]
pub use tokio_spawner::TokioSpawner;
