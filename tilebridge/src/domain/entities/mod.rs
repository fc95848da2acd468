//! Domain entities.
//!
//! The central entity is [`TileSource`]: the member table of a source as
//! handed to the bridge, before anyone knows which convention it speaks.

mod member;
mod tile_source;

pub use member::{Member, MemberName, MemberState};
pub use tile_source::{AsyncFn, InfoFn, TileFn, TileSource};
