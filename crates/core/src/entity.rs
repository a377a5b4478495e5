//! Entity trait: identity that survives state changes.

/// Entity marker + minimal interface.
///
/// A stock account is an entity: its quantities and policy change over a
/// request, its ticket identity does not.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
