//! Named members of a tile source and their presence state.

use alloc::boxed::Box;
use core::any::Any;
use core::fmt;

/// The four members the bridge knows about.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberName {
    /// Callback-convention tile accessor.
    GetTile,
    /// Callback-convention grid accessor.
    GetGrid,
    /// Callback-convention metadata accessor.
    GetInfo,
    /// Unified accessor of the async convention.
    GetAsync,
}

impl MemberName {
    /// The three callback-convention members, in classification order.
    pub const CALLBACKS: [MemberName; 3] = [Self::GetTile, Self::GetGrid, Self::GetInfo];

    /// All members, in classification order.
    pub const ALL: [MemberName; 4] = [Self::GetTile, Self::GetGrid, Self::GetInfo, Self::GetAsync];

    /// Conventional member name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GetTile => "getTile",
            Self::GetGrid => "getGrid",
            Self::GetInfo => "getInfo",
            Self::GetAsync => "getAsync",
        }
    }
}

impl fmt::Display for MemberName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presence state of a member, as seen by the classifier.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberState {
    /// Not present at all.
    Absent,
    /// Present and callable.
    Callable,
    /// Present but holding something that cannot be called.
    NotCallable,
}

/// One member slot of a [`TileSource`](super::TileSource).
pub enum Member<F> {
    /// Nothing is bound under this name.
    Absent,
    /// A callable accessor.
    Callable(F),
    /// A non-callable value bound under an accessor's name.
    Value(Box<dyn Any + Send + Sync>),
}

impl<F> Member<F> {
    /// Presence state of this slot.
    pub fn state(&self) -> MemberState {
        match self {
            Self::Absent => MemberState::Absent,
            Self::Callable(_) => MemberState::Callable,
            Self::Value(_) => MemberState::NotCallable,
        }
    }

    /// The accessor, if this slot is callable.
    pub fn as_callable(&self) -> Option<&F> {
        match self {
            Self::Callable(f) => Some(f),
            _ => None,
        }
    }

    /// Take the accessor, discarding absent or non-callable slots.
    pub fn into_callable(self) -> Option<F> {
        match self {
            Self::Callable(f) => Some(f),
            _ => None,
        }
    }
}

// Not derived: the derive would require `F: Default`, which accessor `Arc`s lack.
impl<F> Default for Member<F> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<F> fmt::Debug for Member<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => f.write_str("Absent"),
            Self::Callable(_) => f.write_str("Callable(..)"),
            Self::Value(_) => f.write_str("Value(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_states() {
        assert_eq!(Member::<()>::Absent.state(), MemberState::Absent);
        assert_eq!(Member::Callable(()).state(), MemberState::Callable);
        assert_eq!(Member::<()>::Value(Box::new(42)).state(), MemberState::NotCallable);
    }

    #[test]
    fn test_into_callable_drops_values() {
        assert_eq!(Member::Callable(7).into_callable(), Some(7));
        assert_eq!(Member::<i32>::Value(Box::new("7")).into_callable(), None);
        assert_eq!(Member::<i32>::default().into_callable(), None);
    }

    #[test]
    fn test_member_names() {
        let names: Vec<_> = MemberName::ALL.iter().map(|m| m.to_string()).collect();
        assert_eq!(names, ["getTile", "getGrid", "getInfo", "getAsync"]);
    }
}
