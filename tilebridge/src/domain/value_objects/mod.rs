//! Value objects for the domain layer.
//!
//! Immutable request and response shapes shared by both calling conventions.

mod envelope;
mod headers;
mod metadata;
mod request;
mod resource_kind;

pub use envelope::{Envelope, Payload};
pub use headers::Headers;
pub use metadata::Metadata;
pub use request::RequestOptions;
pub use resource_kind::ResourceKind;
