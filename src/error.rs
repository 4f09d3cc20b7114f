//! Error types for xsd-tree
//!
//! The element tree has exactly one runtime failure mode: attaching a node
//! that already belongs to another element. Kind mismatches are rejected at
//! the call site by the type system and namespace lookup misses are ordinary
//! `None` results, so neither shows up here.

use thiserror::Error;

use crate::elements::ElementKind;

/// Result type alias using the xsd-tree Error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for xsd-tree operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Exclusive-ownership violation during attachment
    #[error(transparent)]
    Ownership(#[from] OwnershipError),
}

/// Attachment was refused because the child already has an owner.
///
/// Carries the kind of the rejected child and the kind of the element that
/// tried to take ownership of it. A failed attach performs no mutation, so
/// the tree is exactly as it was before the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "the '{child}' element cannot be added to the '{parent}' element \
     because it already belongs to another element"
)]
pub struct OwnershipError {
    /// Kind of the child that was being attached
    pub child: ElementKind,
    /// Kind of the element that tried to take ownership
    pub parent: ElementKind,
}

impl OwnershipError {
    /// Create a new ownership violation for the given kinds.
    pub fn new(child: ElementKind, parent: ElementKind) -> Self {
        Self { child, parent }
    }
}
