//! Convention classifier.
//!
//! Decides which calling convention a [`TileSource`] speaks natively, or why
//! it speaks none. Classification only reads member states; it never calls a
//! member.

use crate::domain::{
    entities::{MemberName, MemberState, TileSource},
    error::InvalidReason,
};

/// Classification verdict.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Convention {
    /// All three callback accessors, no unified accessor.
    LegacyOnly,
    /// A unified accessor; callback accessors absent or incomplete.
    ModernOnly,
    /// Both conventions complete. Nothing to synthesise.
    Both,
    /// Not a usable source.
    Invalid(InvalidReason),
}

impl Convention {
    /// Whether the source can be adapted.
    pub const fn is_valid(self) -> bool {
        !matches!(self, Self::Invalid(_))
    }
}

/// Classify a member table.
///
/// Rules, first match wins:
///
/// 1. A member bound to something that is not callable is fatal, whatever
///    the other members look like.
/// 2. A table with no member at all is invalid.
/// 3. A callable `getAsync` makes the source modern; if all three callback
///    accessors are present as well it speaks both conventions.
/// 4. Without `getAsync`, the callback convention counts only when all three
///    of its accessors are present. Any smaller subset is invalid.
///
/// # Examples
///
/// ```
/// use tilebridge::domain::{classify, Convention};
/// use tilebridge::{EnvelopeFuture, RequestOptions, TileSource};
///
/// let modern = TileSource::new()
///     .with_get_async(|_: RequestOptions| -> EnvelopeFuture { unimplemented!() });
/// assert_eq!(classify(&modern), Convention::ModernOnly);
/// assert!(!classify(&TileSource::new()).is_valid());
/// ```
pub fn classify(source: &TileSource) -> Convention {
    for name in MemberName::ALL {
        if source.state(name) == MemberState::NotCallable {
            return Convention::Invalid(InvalidReason::NotCallable(name));
        }
    }

    let missing_callback = MemberName::CALLBACKS
        .into_iter()
        .find(|&name| source.state(name) == MemberState::Absent);
    let callbacks_present = MemberName::CALLBACKS
        .into_iter()
        .filter(|&name| source.state(name) == MemberState::Callable)
        .count();
    let has_async = source.state(MemberName::GetAsync) == MemberState::Callable;

    match (missing_callback, has_async) {
        (None, true) => Convention::Both,
        (None, false) => Convention::LegacyOnly,
        (Some(_), true) => Convention::ModernOnly,
        (Some(_), false) if callbacks_present == 0 => {
            Convention::Invalid(InvalidReason::NoConvention)
        }
        (Some(missing), false) => Convention::Invalid(InvalidReason::PartialLegacy { missing }),
    }
}
