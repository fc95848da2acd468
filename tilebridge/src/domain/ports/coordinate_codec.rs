//! Coordinate codec port.

/// Decodes a compact tile index into tile coordinates.
///
/// The unified accessor accepts tiles addressed by a single `index`; the
/// callback convention only understands `x`/`y`. Implementations must be pure.
pub trait CoordinateCodec {
    /// Decode `index` into `(x, y)`.
    fn index_to_xy(&self, index: u64) -> (u32, u32);
}
