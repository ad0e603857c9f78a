//! List Item Trait
//!
//! Accessors the list needs from a domain entity.

use std::fmt::Debug;
use std::hash::Hash;

/// An entry that can live in a soft-delete list.
///
/// Ids must be unique within one snapshot. This is not checked at runtime;
/// duplicate ids are a caller error.
pub trait ListItem: Clone {
    /// Stable unique identifier
    type Id: Copy + Eq + Hash + Debug;

    fn id(&self) -> Self::Id;

    /// Text shown to the user
    fn label(&self) -> String;
}
