//! Resource kind value object.

use crate::domain::error::SourceError;
use alloc::string::ToString;
use core::fmt;

/// The kind of resource a tile source serves.
///
/// Requests name the kind as a string so that sources written against either
/// calling convention can forward whatever the caller passed; [`ResourceKind::parse`]
/// turns that string into a closed set.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResourceKind {
    /// Rendered tile imagery (or a vector tile). The default kind.
    #[default]
    Tile,
    /// Interactivity grid overlay for a tile.
    Grid,
    /// Descriptive metadata of the whole source.
    Info,
}

impl ResourceKind {
    /// Parse a request kind. `None` means the caller omitted it and selects [`ResourceKind::Tile`].
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::UnknownType`] naming the value for anything other
    /// than `"tile"`, `"grid"` or `"info"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tilebridge::domain::ResourceKind;
    ///
    /// assert_eq!(ResourceKind::parse(None).unwrap(), ResourceKind::Tile);
    /// assert_eq!(ResourceKind::parse(Some("grid")).unwrap(), ResourceKind::Grid);
    /// assert_eq!(
    ///     ResourceKind::parse(Some("bad")).unwrap_err().to_string(),
    ///     "Unknown type \"bad\""
    /// );
    /// ```
    pub fn parse(kind: Option<&str>) -> Result<Self, SourceError> {
        match kind {
            None | Some("tile") => Ok(Self::Tile),
            Some("grid") => Ok(Self::Grid),
            Some("info") => Ok(Self::Info),
            Some(other) => Err(SourceError::UnknownType(other.to_string())),
        }
    }

    /// The wire name of this kind.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tile => "tile",
            Self::Grid => "grid",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
