//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// A card keeps its identity while every other field changes.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + Ord + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}
