//! XSD constraining facets
//!
//! The twelve facet elements of XSD 1.0 (xs:enumeration, xs:pattern, the
//! length and digit constraints, bounds and xs:whiteSpace). Facet values
//! are opaque literals here; parsing and enforcing them against instance
//! values is the validator's job. The [`Facet`] enum closes the set of
//! kinds a restriction's facet relation accepts.
//!
//! Reference: https://www.w3.org/TR/xmlschema-2/#rf-facets

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::Result;

use super::annotations::XsdAnnotation;
use super::base::{ElementBase, Slot, XsdNode};
use super::kinds::ElementKind;
use super::roles::Annotated;

macro_rules! facet_element {
    ($(#[$meta:meta])* $name:ident, $kind:ident) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $name {
            base: ElementBase,
            annotation: Slot<XsdAnnotation>,
            value: RefCell<String>,
        }

        impl $name {
            /// Create a new, unattached facet node with the given literal
            /// value.
            pub fn new(value: impl Into<String>) -> Rc<Self> {
                Rc::new_cyclic(|weak| Self {
                    base: ElementBase::new(ElementKind::$kind, weak.clone() as std::rc::Weak<dyn XsdNode>),
                    annotation: Slot::new(),
                    value: RefCell::new(value.into()),
                })
            }

            /// The literal facet value.
            pub fn value(&self) -> String {
                self.value.borrow().clone()
            }

            /// Replace the literal facet value.
            pub fn set_value(&self, value: impl Into<String>) {
                *self.value.borrow_mut() = value.into();
            }
        }

        impl XsdNode for $name {
            fn base(&self) -> &ElementBase {
                &self.base
            }
        }

        impl Annotated for $name {
            fn annotation_slot(&self) -> &Slot<XsdAnnotation> {
                &self.annotation
            }
        }
    };
}

facet_element!(
    /// xs:enumeration facet
    XsdEnumerationFacet,
    Enumeration
);
facet_element!(
    /// xs:pattern facet
    XsdPatternFacet,
    Pattern
);
facet_element!(
    /// xs:length facet
    XsdLengthFacet,
    Length
);
facet_element!(
    /// xs:minLength facet
    XsdMinLengthFacet,
    MinLength
);
facet_element!(
    /// xs:maxLength facet
    XsdMaxLengthFacet,
    MaxLength
);
facet_element!(
    /// xs:whiteSpace facet
    XsdWhiteSpaceFacet,
    WhiteSpace
);
facet_element!(
    /// xs:minInclusive facet
    XsdMinInclusiveFacet,
    MinInclusive
);
facet_element!(
    /// xs:maxInclusive facet
    XsdMaxInclusiveFacet,
    MaxInclusive
);
facet_element!(
    /// xs:minExclusive facet
    XsdMinExclusiveFacet,
    MinExclusive
);
facet_element!(
    /// xs:maxExclusive facet
    XsdMaxExclusiveFacet,
    MaxExclusive
);
facet_element!(
    /// xs:totalDigits facet
    XsdTotalDigitsFacet,
    TotalDigits
);
facet_element!(
    /// xs:fractionDigits facet
    XsdFractionDigitsFacet,
    FractionDigits
);

/// A facet child of a restriction.
#[derive(Debug, Clone)]
pub enum Facet {
    /// xs:enumeration
    Enumeration(Rc<XsdEnumerationFacet>),
    /// xs:pattern
    Pattern(Rc<XsdPatternFacet>),
    /// xs:length
    Length(Rc<XsdLengthFacet>),
    /// xs:minLength
    MinLength(Rc<XsdMinLengthFacet>),
    /// xs:maxLength
    MaxLength(Rc<XsdMaxLengthFacet>),
    /// xs:whiteSpace
    WhiteSpace(Rc<XsdWhiteSpaceFacet>),
    /// xs:minInclusive
    MinInclusive(Rc<XsdMinInclusiveFacet>),
    /// xs:maxInclusive
    MaxInclusive(Rc<XsdMaxInclusiveFacet>),
    /// xs:minExclusive
    MinExclusive(Rc<XsdMinExclusiveFacet>),
    /// xs:maxExclusive
    MaxExclusive(Rc<XsdMaxExclusiveFacet>),
    /// xs:totalDigits
    TotalDigits(Rc<XsdTotalDigitsFacet>),
    /// xs:fractionDigits
    FractionDigits(Rc<XsdFractionDigitsFacet>),
}

impl Facet {
    /// The kind of the wrapped node.
    pub fn kind(&self) -> ElementKind {
        self.as_node().kind()
    }

    /// The literal value of the wrapped facet.
    pub fn value(&self) -> String {
        match self {
            Self::Enumeration(f) => f.value(),
            Self::Pattern(f) => f.value(),
            Self::Length(f) => f.value(),
            Self::MinLength(f) => f.value(),
            Self::MaxLength(f) => f.value(),
            Self::WhiteSpace(f) => f.value(),
            Self::MinInclusive(f) => f.value(),
            Self::MaxInclusive(f) => f.value(),
            Self::MinExclusive(f) => f.value(),
            Self::MaxExclusive(f) => f.value(),
            Self::TotalDigits(f) => f.value(),
            Self::FractionDigits(f) => f.value(),
        }
    }

    /// The wrapped node as a plain tree node.
    pub fn as_node(&self) -> &dyn XsdNode {
        match self {
            Self::Enumeration(f) => f.as_ref(),
            Self::Pattern(f) => f.as_ref(),
            Self::Length(f) => f.as_ref(),
            Self::MinLength(f) => f.as_ref(),
            Self::MaxLength(f) => f.as_ref(),
            Self::WhiteSpace(f) => f.as_ref(),
            Self::MinInclusive(f) => f.as_ref(),
            Self::MaxInclusive(f) => f.as_ref(),
            Self::MinExclusive(f) => f.as_ref(),
            Self::MaxExclusive(f) => f.as_ref(),
            Self::TotalDigits(f) => f.as_ref(),
            Self::FractionDigits(f) => f.as_ref(),
        }
    }
}

macro_rules! facet_from {
    ($struct:ident, $variant:ident) => {
        impl From<Rc<$struct>> for Facet {
            fn from(node: Rc<$struct>) -> Self {
                Self::$variant(node)
            }
        }
    };
}

facet_from!(XsdEnumerationFacet, Enumeration);
facet_from!(XsdPatternFacet, Pattern);
facet_from!(XsdLengthFacet, Length);
facet_from!(XsdMinLengthFacet, MinLength);
facet_from!(XsdMaxLengthFacet, MaxLength);
facet_from!(XsdWhiteSpaceFacet, WhiteSpace);
facet_from!(XsdMinInclusiveFacet, MinInclusive);
facet_from!(XsdMaxInclusiveFacet, MaxInclusive);
facet_from!(XsdMinExclusiveFacet, MinExclusive);
facet_from!(XsdMaxExclusiveFacet, MaxExclusive);
facet_from!(XsdTotalDigitsFacet, TotalDigits);
facet_from!(XsdFractionDigitsFacet, FractionDigits);

/// Ordered-collection relation restricted to facet kinds.
#[derive(Debug)]
pub struct FacetList {
    inner: RefCell<Vec<Facet>>,
}

impl FacetList {
    pub(crate) fn new() -> Self {
        Self {
            inner: RefCell::new(Vec::new()),
        }
    }

    /// Adopt the facet's node into `owner` and append the facet.
    pub(crate) fn attach(&self, owner: &ElementBase, facet: Facet) -> Result<()> {
        owner.adopt(facet.as_node())?;
        self.inner.borrow_mut().push(facet);
        Ok(())
    }

    /// Snapshot of the facets in document order.
    pub fn items(&self) -> Vec<Facet> {
        self.inner.borrow().clone()
    }

    /// Number of facets attached through this relation.
    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    /// Whether no facets have been attached.
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }
}
