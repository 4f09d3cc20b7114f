//! XSD element tree
//!
//! One strongly-typed struct per element of the XSD 1.0 schema vocabulary,
//! the capability roles they share and the attachment plumbing connecting
//! them. Parents own their children exclusively; every set/add operation
//! transfers ownership and rejects a child that already belongs to another
//! element (see [`crate::error::OwnershipError`]).

// Foundation
pub mod base;
pub mod kinds;
pub mod roles;

// Element kinds
pub mod annotations;
pub mod attributes;
pub mod complex_types;
pub mod elements;
pub mod facets;
pub mod groups;
pub mod identities;
pub mod schema;
pub mod simple_types;
pub mod wildcards;

// Re-exports
pub use annotations::{XsdAnnotation, XsdAppInfo, XsdDocumentation};
pub use attributes::{XsdAttribute, XsdAttributeGroup};
pub use base::{same_element, ElementBase, NodeList, Slot, XsdNode};
pub use complex_types::{
    XsdComplexContent, XsdComplexContentExtension, XsdComplexContentRestriction, XsdComplexType,
    XsdSimpleContent, XsdSimpleContentExtension, XsdSimpleContentRestriction,
};
pub use elements::XsdElement;
pub use facets::{
    Facet, FacetList, XsdEnumerationFacet, XsdFractionDigitsFacet, XsdLengthFacet,
    XsdMaxExclusiveFacet, XsdMaxInclusiveFacet, XsdMaxLengthFacet, XsdMinExclusiveFacet,
    XsdMinInclusiveFacet, XsdMinLengthFacet, XsdPatternFacet, XsdTotalDigitsFacet,
    XsdWhiteSpaceFacet,
};
pub use groups::{GroupParticle, ParticleList, XsdAll, XsdChoice, XsdGroup, XsdSequence};
pub use identities::{XsdField, XsdKey, XsdKeyref, XsdSelector, XsdUnique};
pub use kinds::ElementKind;
pub use roles::{
    Annotated, AttributeNaming, ModelGroupParticle, ParticleSlot, SimpleTyped, TypeNaming,
};
pub use schema::{XsdImport, XsdInclude, XsdNotation, XsdRedefine, XsdSchema};
pub use simple_types::{XsdList, XsdSimpleType, XsdSimpleTypeRestriction, XsdUnion};
pub use wildcards::{XsdAny, XsdAnyAttribute};
