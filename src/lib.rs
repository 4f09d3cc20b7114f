//! # xsd-tree
//!
//! A strongly-typed in-memory element tree for XML Schema (XSD 1.0)
//! documents.
//!
//! The tree encodes the XSD content-model grammar in its attachment rules:
//! every parent kind exposes typed set/add operations for exactly the child
//! kinds the grammar allows there, and capability-role traits cover the
//! attachment points many kinds share. Attaching a child transfers
//! ownership of it to the parent; a node belongs to at most one element
//! over its lifetime and re-attaching it fails with an ownership violation
//! without mutating the tree. Namespace prefixes declared on any node
//! resolve on all of its descendants by walking the ownership chain.
//!
//! The tree models schema *structure* only. Parsing XSD text into nodes
//! and validating instance documents against the finished tree belong to
//! external components that drive this crate through its construction and
//! read operations.
//!
//! ## Example
//!
//! ```rust
//! use xsd_tree::elements::{
//!     TypeNaming, XsdComplexType, XsdElement, XsdNode, XsdSequence,
//! };
//!
//! # fn main() -> xsd_tree::Result<()> {
//! let complex_type = XsdComplexType::new();
//! complex_type.set_name("personType");
//!
//! let sequence = XsdSequence::new();
//! let element = XsdElement::new();
//! element.set_name("givenName");
//! sequence.add_element(element.clone())?;
//! complex_type.set_particle(sequence)?;
//!
//! complex_type.bind_namespace("p", "http://example.com/person");
//! assert_eq!(
//!     element.lookup_namespace("p").as_deref(),
//!     Some("http://example.com/person"),
//! );
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod elements;
pub mod error;
pub mod namespaces;

// Re-exports for convenience
pub use elements::{ElementKind, XsdNode};
pub use error::{Error, OwnershipError, Result};

/// Version of the xsd-tree library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// XSD 1.0 namespace
pub const XSD_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema";

/// XML namespace
pub const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

/// XMLNS namespace
pub const XMLNS_NAMESPACE: &str = "http://www.w3.org/2000/xmlns/";
