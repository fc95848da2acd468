//! Result envelope of the unified accessor.

use crate::domain::{
    error::SourceError,
    value_objects::{Headers, Metadata, ResourceKind},
};
use alloc::vec::Vec;

/// Tile or grid payload with the headers the source reported alongside it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Payload {
    /// Raw payload bytes (encoded image, vector tile, or grid JSON).
    pub data: Vec<u8>,
    /// Headers, when the source provides any.
    pub headers: Option<Headers>,
}

impl Payload {
    /// Payload without headers.
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: data.into(),
            headers: None,
        }
    }

    /// Attach headers.
    #[must_use]
    pub fn with_headers(mut self, headers: Headers) -> Self {
        self.headers = Some(headers);
        self
    }
}

/// Successful outcome of a unified-accessor request, keyed by resource kind.
///
/// Failures never travel inside an envelope; they are the `Err` side of the
/// accessor's future.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Envelope {
    /// Answer to a tile request.
    Tile(Payload),
    /// Answer to a grid request.
    Grid(Payload),
    /// Answer to a metadata request.
    Info(Metadata),
}

impl Envelope {
    /// The resource kind this envelope answers.
    pub const fn kind(&self) -> ResourceKind {
        match self {
            Self::Tile(_) => ResourceKind::Tile,
            Self::Grid(_) => ResourceKind::Grid,
            Self::Info(_) => ResourceKind::Info,
        }
    }

    /// Headers of a tile or grid envelope.
    pub fn headers(&self) -> Option<&Headers> {
        match self {
            Self::Tile(payload) | Self::Grid(payload) => payload.headers.as_ref(),
            Self::Info(_) => None,
        }
    }

    /// Unwrap a tile payload.
    ///
    /// # Errors
    ///
    /// [`SourceError::MismatchedEnvelope`] if this envelope answers another kind.
    pub fn into_tile(self) -> Result<Payload, SourceError> {
        match self {
            Self::Tile(payload) => Ok(payload),
            other => Err(other.mismatch(ResourceKind::Tile)),
        }
    }

    /// Unwrap a grid payload.
    ///
    /// # Errors
    ///
    /// [`SourceError::MismatchedEnvelope`] if this envelope answers another kind.
    pub fn into_grid(self) -> Result<Payload, SourceError> {
        match self {
            Self::Grid(payload) => Ok(payload),
            other => Err(other.mismatch(ResourceKind::Grid)),
        }
    }

    /// Unwrap metadata.
    ///
    /// # Errors
    ///
    /// [`SourceError::MismatchedEnvelope`] if this envelope answers another kind.
    pub fn into_info(self) -> Result<Metadata, SourceError> {
        match self {
            Self::Info(metadata) => Ok(metadata),
            other => Err(other.mismatch(ResourceKind::Info)),
        }
    }

    fn mismatch(&self, expected: ResourceKind) -> SourceError {
        SourceError::MismatchedEnvelope {
            expected,
            actual: self.kind(),
        }
    }
}
