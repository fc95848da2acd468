//! Request options for the unified accessor.

use crate::domain::{
    error::{Axis, SourceError},
    ports::CoordinateCodec,
    value_objects::ResourceKind,
};
use alloc::string::String;

/// Parameters of a unified-accessor request.
///
/// Mirrors the loose option bag callers hand to `get_async`: a resource kind,
/// a zoom level, and a tile position given either as explicit `x`/`y` or as a
/// compact quadtile `index`.
///
/// # Examples
///
/// ```
/// use tilebridge::domain::RequestOptions;
///
/// let by_xy = RequestOptions::tile(2, 1, 3);
/// let by_index = RequestOptions::indexed(2, 11);
/// let grid = RequestOptions::grid(2, 1, 3);
/// let info = RequestOptions::info();
/// assert_eq!(grid.kind.as_deref(), Some("grid"));
/// assert!(info.x.is_none() && by_index.x.is_none() && by_xy.index.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Resource kind as passed by the caller; `None` selects tiles.
    pub kind: Option<String>,
    /// Zoom level.
    pub z: u8,
    /// Tile column.
    pub x: Option<u32>,
    /// Tile row.
    pub y: Option<u32>,
    /// Compact quadtile index, used only when both `x` and `y` are absent.
    pub index: Option<i64>,
}

impl RequestOptions {
    /// Tile request by coordinates, with the kind left to its default.
    pub fn tile(z: u8, x: u32, y: u32) -> Self {
        Self {
            z,
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    /// Grid request by coordinates.
    pub fn grid(z: u8, x: u32, y: u32) -> Self {
        Self::tile(z, x, y).with_kind(ResourceKind::Grid.as_str())
    }

    /// Metadata request.
    pub fn info() -> Self {
        Self::default().with_kind(ResourceKind::Info.as_str())
    }

    /// Tile request addressed by quadtile index.
    pub fn indexed(z: u8, index: i64) -> Self {
        Self {
            z,
            index: Some(index),
            ..Self::default()
        }
    }

    /// Set the kind string verbatim. Unknown kinds are only rejected at dispatch.
    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Set the quadtile index.
    #[must_use]
    pub fn with_index(mut self, index: i64) -> Self {
        self.index = Some(index);
        self
    }

    /// Parse the kind string.
    ///
    /// # Errors
    ///
    /// [`SourceError::UnknownType`] for an unrecognised kind.
    pub fn resource_kind(&self) -> Result<ResourceKind, SourceError> {
        ResourceKind::parse(self.kind.as_deref())
    }

    /// Resolve the tile column and row.
    ///
    /// Explicit coordinates win: if either `x` or `y` is set the index is not
    /// looked at. Otherwise the index is decoded with `codec`.
    ///
    /// # Errors
    ///
    /// - [`SourceError::InvalidIndex`] for a negative index
    /// - [`SourceError::MissingCoordinate`] when a coordinate cannot be determined
    pub fn resolve_xy<C>(&self, codec: &C) -> Result<(u32, u32), SourceError>
    where
        C: CoordinateCodec + ?Sized,
    {
        match (self.x, self.y, self.index) {
            (Some(x), Some(y), _) => Ok((x, y)),
            (None, None, Some(index)) => {
                let index = u64::try_from(index).map_err(|_| SourceError::InvalidIndex(index))?;
                Ok(codec.index_to_xy(index))
            }
            (None, _, _) => Err(SourceError::MissingCoordinate(Axis::X)),
            (Some(_), None, _) => Err(SourceError::MissingCoordinate(Axis::Y)),
        }
    }
}
