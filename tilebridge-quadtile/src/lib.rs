//! Quadtile index codec.
//!
//! A quadtile index packs the column and row of a slippy-map tile into a
//! single integer by interleaving their bits: bit `2n` of the index is bit `n`
//! of `x`, bit `2n + 1` is bit `n` of `y`. Tiles that are close on the map stay
//! close in index order, which makes the index a convenient compact key.
//!
//! The index carries no zoom level. Callers pair it with the zoom they already
//! know; at zoom `z` every valid index is below `4^z`.
//!
//! ```
//! use tilebridge_quadtile::{index_to_xy, xy_to_index};
//!
//! assert_eq!(index_to_xy(11), (1, 3));
//! assert_eq!(xy_to_index(1, 3), 11);
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

const EVEN_BITS: u64 = 0x5555_5555_5555_5555;

/// Decode a quadtile index into its `(x, y)` tile coordinates.
///
/// Every `u64` is a valid index, so decoding never fails.
///
/// # Examples
///
/// ```
/// use tilebridge_quadtile::index_to_xy;
///
/// assert_eq!(index_to_xy(0), (0, 0));
/// assert_eq!(index_to_xy(1), (1, 0));
/// assert_eq!(index_to_xy(2), (0, 1));
/// ```
#[inline]
#[must_use]
pub const fn index_to_xy(index: u64) -> (u32, u32) {
    (compact(index), compact(index >> 1))
}

/// Encode `(x, y)` tile coordinates into a quadtile index.
///
/// # Examples
///
/// ```
/// use tilebridge_quadtile::xy_to_index;
///
/// assert_eq!(xy_to_index(3, 3), 15);
/// ```
#[inline]
#[must_use]
pub const fn xy_to_index(x: u32, y: u32) -> u64 {
    spread(x) | (spread(y) << 1)
}

// Gathers the even bits of `v` into the low 32 bits.
const fn compact(v: u64) -> u32 {
    let mut v = v & EVEN_BITS;
    v = (v | (v >> 1)) & 0x3333_3333_3333_3333;
    v = (v | (v >> 2)) & 0x0F0F_0F0F_0F0F_0F0F;
    v = (v | (v >> 4)) & 0x00FF_00FF_00FF_00FF;
    v = (v | (v >> 8)) & 0x0000_FFFF_0000_FFFF;
    v = (v | (v >> 16)) & 0x0000_0000_FFFF_FFFF;
    v as u32
}

// Inverse of `compact`: moves bit n of `v` to bit 2n.
const fn spread(v: u32) -> u64 {
    let mut v = v as u64;
    v = (v | (v << 16)) & 0x0000_FFFF_0000_FFFF;
    v = (v | (v << 8)) & 0x00FF_00FF_00FF_00FF;
    v = (v | (v << 4)) & 0x0F0F_0F0F_0F0F_0F0F;
    v = (v | (v << 2)) & 0x3333_3333_3333_3333;
    v = (v | (v << 1)) & EVEN_BITS;
    v
}
