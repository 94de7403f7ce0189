//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Stores look entities up by this identifier; it must never change once assigned.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
