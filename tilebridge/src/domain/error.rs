//! Domain-level errors.
//!
//! Two channels exist. [`BridgeError`] is returned synchronously by the entry
//! point when a source cannot be adapted. [`SourceError`] travels through the
//! accessors themselves: the `Err` of a unified-accessor future, or the `Err`
//! handed to a completion.

use crate::domain::{entities::MemberName, value_objects::ResourceKind};
use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

/// Boxed error of a wrapped source.
pub type BoxError = Box<dyn core::error::Error + Send + Sync + 'static>;

/// Coordinate axis, used to report which tile coordinate is missing.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Tile column.
    X,
    /// Tile row.
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => f.write_str("x"),
            Self::Y => f.write_str("y"),
        }
    }
}

/// Errors surfaced by tile source accessors.
#[derive(Debug)]
#[non_exhaustive]
pub enum SourceError {
    /// The request named a resource kind that is not tile, grid or info.
    UnknownType(String),

    /// The quadtile index cannot be decoded (it is negative).
    InvalidIndex(i64),

    /// A spatial request did not determine both tile coordinates.
    MissingCoordinate(Axis),

    /// The unified accessor answered with an envelope for another kind.
    MismatchedEnvelope {
        /// Kind that was requested.
        expected: ResourceKind,
        /// Kind the envelope carries.
        actual: ResourceKind,
    },

    /// The source dropped the completion for a request without answering it.
    Abandoned(ResourceKind),

    /// Error reported by the wrapped source, passed through untouched.
    ///
    /// Displays exactly as the inner error does.
    Upstream(BoxError),
}

impl SourceError {
    /// Wrap any error reported by a source.
    pub fn upstream<E>(err: E) -> Self
    where
        E: core::error::Error + Send + Sync + 'static,
    {
        Self::Upstream(Box::new(err))
    }

    /// Upstream error carrying only a message.
    ///
    /// # Examples
    ///
    /// ```
    /// use tilebridge::SourceError;
    ///
    /// let err = SourceError::message("tile");
    /// assert_eq!(err.to_string(), "tile");
    /// ```
    pub fn message(msg: impl Into<String>) -> Self {
        Self::upstream(Message(msg.into()))
    }

    /// Whether this error came from the wrapped source rather than the adapter.
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::Upstream(_))
    }

    /// The wrapped source's error, if this is one.
    pub fn as_upstream(&self) -> Option<&(dyn core::error::Error + Send + Sync + 'static)> {
        match self {
            Self::Upstream(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownType(kind) => write!(f, "Unknown type \"{}\"", kind),
            Self::InvalidIndex(index) => write!(f, "Invalid quadtile index {}", index),
            Self::MissingCoordinate(axis) => write!(f, "Missing tile coordinate {}", axis),
            Self::MismatchedEnvelope { expected, actual } => write!(
                f,
                "Expected a {} envelope but the source answered with {}",
                expected, actual
            ),
            Self::Abandoned(kind) => {
                write!(f, "Source dropped the {} request without answering", kind)
            }
            Self::Upstream(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl core::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Upstream(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

/// Plain-text upstream error built by [`SourceError::message`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message(String);

impl Message {
    /// The message text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl core::error::Error for Message {}

/// Why a source was rejected by the classifier.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    /// A member exists but is not callable.
    NotCallable(MemberName),
    /// No member of either convention exists.
    NoConvention,
    /// Some callback members exist, this one does not, and there is no
    /// unified accessor to cover the gap.
    PartialLegacy {
        /// First callback member that is missing.
        missing: MemberName,
    },
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotCallable(name) => write!(f, "{} is not callable", name),
            Self::NoConvention => f.write_str("no accessor of either convention"),
            Self::PartialLegacy { missing } => {
                write!(f, "{} is missing and there is no getAsync", missing)
            }
        }
    }
}

/// Errors returned by the entry point.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum BridgeError {
    /// No source was passed.
    InvalidArgument,
    /// The source does not implement a convention correctly.
    InvalidInstance(InvalidReason),
}

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument => f.write_str("Invalid source argument"),
            Self::InvalidInstance(reason) => write!(
                f,
                "Argument is not a valid tile source instance: {}",
                reason
            ),
        }
    }
}

impl core::error::Error for BridgeError {}
