//! Callback-convention port.

use crate::domain::{
    ports::Completion,
    value_objects::{Metadata, Payload},
};

/// A tile source exposing one completion-based accessor per resource kind.
///
/// This is the older of the two conventions. Every accessor returns
/// immediately and answers later through its [`Completion`].
///
/// # Examples
///
/// ```
/// use tilebridge::{CallbackSource, Completion, Metadata, Payload};
///
/// struct Checkerboard;
///
/// impl CallbackSource for Checkerboard {
///     fn get_tile(&self, z: u8, x: u32, y: u32, done: Completion<Payload>) {
///         let shade = if (x + y) % 2 == 0 { b"dark" } else { b"lite" };
///         let _ = z;
///         done.succeed(Payload::new(*shade));
///     }
///
///     fn get_grid(&self, _z: u8, _x: u32, _y: u32, done: Completion<Payload>) {
///         done.succeed(Payload::new(*b"{}"));
///     }
///
///     fn get_info(&self, done: Completion<Metadata>) {
///         done.succeed(Metadata::new().with("name", "checkerboard"));
///     }
/// }
/// ```
pub trait CallbackSource: Send + Sync {
    /// Fetch the tile at `z`/`x`/`y`.
    fn get_tile(&self, z: u8, x: u32, y: u32, done: Completion<Payload>);

    /// Fetch the interactivity grid at `z`/`x`/`y`.
    fn get_grid(&self, z: u8, x: u32, y: u32, done: Completion<Payload>);

    /// Fetch the source metadata.
    fn get_info(&self, done: Completion<Metadata>);
}
