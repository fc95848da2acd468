//! Default coordinate codec.

use crate::domain::ports::CoordinateCodec;

/// Standard quadtile codec: even index bits form `x`, odd bits form `y`.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuadtileCodec;

impl CoordinateCodec for QuadtileCodec {
    fn index_to_xy(&self, index: u64) -> (u32, u32) {
        tilebridge_quadtile::index_to_xy(index)
    }
}
