//! Domain layer - the two calling conventions and the rules that relate them.
//!
//! Nothing here spawns tasks or touches an executor:
//! - **Value objects**: [`RequestOptions`], [`Envelope`], [`Payload`],
//!   [`Headers`], [`Metadata`], [`ResourceKind`]
//! - **Entities**: [`TileSource`], the member table being adapted
//! - **Ports**: [`CallbackSource`], [`AsyncSource`], [`CoordinateCodec`], [`Spawner`]
//! - **Classifier**: [`classify`], producing a [`Convention`] verdict
//! - **Errors**: [`SourceError`], [`BridgeError`]
//!
//! ```text
//!     ┌──────────────────────────────────┐
//!     │      Domain Layer                │
//!     │  - TileSource (entity)           │
//!     │  - classify (verdict)            │
//!     │  - CallbackSource / AsyncSource  │
//!     └────────────┬─────────────────────┘
//!                  │
//!                  │ implemented by
//!                  ▼
//!     ┌──────────────────────────────────┐
//!     │      Adapter Layer               │
//!     │  - AsyncFromCallback             │
//!     │  - CallbackFromAsync             │
//!     │  - DualSource, Bridge            │
//!     └──────────────────────────────────┘
//! ```

pub mod classifier;
pub mod entities;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use classifier::{classify, Convention};
pub use entities::{AsyncFn, InfoFn, Member, MemberName, MemberState, TileFn, TileSource};
pub use error::{Axis, BoxError, BridgeError, InvalidReason, Message, SourceError};
pub use ports::{AsyncSource, CallbackSource, Completion, CoordinateCodec, EnvelopeFuture, Spawner};
pub use value_objects::{Envelope, Headers, Metadata, Payload, RequestOptions, ResourceKind};
