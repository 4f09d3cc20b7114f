//! The closed set of element kinds
//!
//! Every node in the tree carries exactly one of these kinds, fixed at
//! construction. The set covers the XSD 1.0 schema vocabulary: structures,
//! model groups, simple type derivation, constraining facets, identity
//! constraints and schema composition elements.
//!
//! Reference: https://www.w3.org/TR/xmlschema-1/

use std::fmt;

/// Kind identifier for a node in the element tree.
///
/// The kind determines which attachment operations a node supports and
/// which capability roles it satisfies; it never changes after the node is
/// constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// xs:schema, the document root
    Schema,
    /// xs:element declaration
    Element,
    /// xs:attribute declaration
    Attribute,
    /// xs:attributeGroup definition or reference
    AttributeGroup,
    /// xs:anyAttribute wildcard
    AnyAttribute,
    /// xs:any element wildcard
    Any,
    /// xs:complexType definition
    ComplexType,
    /// xs:simpleType definition
    SimpleType,
    /// xs:sequence model group
    Sequence,
    /// xs:choice model group
    Choice,
    /// xs:all model group
    All,
    /// xs:group definition or reference
    Group,
    /// xs:annotation
    Annotation,
    /// xs:documentation inside an annotation
    Documentation,
    /// xs:appinfo inside an annotation
    AppInfo,
    /// xs:simpleContent of a complex type
    SimpleContent,
    /// xs:complexContent of a complex type
    ComplexContent,
    /// xs:restriction inside xs:simpleContent
    SimpleContentRestriction,
    /// xs:extension inside xs:simpleContent
    SimpleContentExtension,
    /// xs:restriction inside xs:complexContent
    ComplexContentRestriction,
    /// xs:extension inside xs:complexContent
    ComplexContentExtension,
    /// xs:restriction inside xs:simpleType
    SimpleTypeRestriction,
    /// xs:list derivation of a simple type
    List,
    /// xs:union derivation of a simple type
    Union,
    /// xs:enumeration facet
    Enumeration,
    /// xs:pattern facet
    Pattern,
    /// xs:length facet
    Length,
    /// xs:minLength facet
    MinLength,
    /// xs:maxLength facet
    MaxLength,
    /// xs:whiteSpace facet
    WhiteSpace,
    /// xs:minInclusive facet
    MinInclusive,
    /// xs:maxInclusive facet
    MaxInclusive,
    /// xs:minExclusive facet
    MinExclusive,
    /// xs:maxExclusive facet
    MaxExclusive,
    /// xs:totalDigits facet
    TotalDigits,
    /// xs:fractionDigits facet
    FractionDigits,
    /// xs:key identity constraint
    Key,
    /// xs:keyref identity constraint
    Keyref,
    /// xs:unique identity constraint
    Unique,
    /// xs:selector of an identity constraint
    Selector,
    /// xs:field of an identity constraint
    Field,
    /// xs:import composition element
    Import,
    /// xs:include composition element
    Include,
    /// xs:redefine composition element
    Redefine,
    /// xs:notation declaration
    Notation,
}

/// Every kind, in declaration order.
const ALL_KINDS: [ElementKind; 45] = [
    ElementKind::Schema,
    ElementKind::Element,
    ElementKind::Attribute,
    ElementKind::AttributeGroup,
    ElementKind::AnyAttribute,
    ElementKind::Any,
    ElementKind::ComplexType,
    ElementKind::SimpleType,
    ElementKind::Sequence,
    ElementKind::Choice,
    ElementKind::All,
    ElementKind::Group,
    ElementKind::Annotation,
    ElementKind::Documentation,
    ElementKind::AppInfo,
    ElementKind::SimpleContent,
    ElementKind::ComplexContent,
    ElementKind::SimpleContentRestriction,
    ElementKind::SimpleContentExtension,
    ElementKind::ComplexContentRestriction,
    ElementKind::ComplexContentExtension,
    ElementKind::SimpleTypeRestriction,
    ElementKind::List,
    ElementKind::Union,
    ElementKind::Enumeration,
    ElementKind::Pattern,
    ElementKind::Length,
    ElementKind::MinLength,
    ElementKind::MaxLength,
    ElementKind::WhiteSpace,
    ElementKind::MinInclusive,
    ElementKind::MaxInclusive,
    ElementKind::MinExclusive,
    ElementKind::MaxExclusive,
    ElementKind::TotalDigits,
    ElementKind::FractionDigits,
    ElementKind::Key,
    ElementKind::Keyref,
    ElementKind::Unique,
    ElementKind::Selector,
    ElementKind::Field,
    ElementKind::Import,
    ElementKind::Include,
    ElementKind::Redefine,
    ElementKind::Notation,
];

impl ElementKind {
    /// Stable string identifier, unique across the whole enumeration.
    ///
    /// Most kinds use their XSD local name. The restriction and extension
    /// variants are qualified by their enclosing content model because the
    /// local name alone would be ambiguous.
    pub const fn as_str(self) -> &'static str {
        match self {
            ElementKind::Schema => "schema",
            ElementKind::Element => "element",
            ElementKind::Attribute => "attribute",
            ElementKind::AttributeGroup => "attributeGroup",
            ElementKind::AnyAttribute => "anyAttribute",
            ElementKind::Any => "any",
            ElementKind::ComplexType => "complexType",
            ElementKind::SimpleType => "simpleType",
            ElementKind::Sequence => "sequence",
            ElementKind::Choice => "choice",
            ElementKind::All => "all",
            ElementKind::Group => "group",
            ElementKind::Annotation => "annotation",
            ElementKind::Documentation => "documentation",
            ElementKind::AppInfo => "appinfo",
            ElementKind::SimpleContent => "simpleContent",
            ElementKind::ComplexContent => "complexContent",
            ElementKind::SimpleContentRestriction => "simpleContent.restriction",
            ElementKind::SimpleContentExtension => "simpleContent.extension",
            ElementKind::ComplexContentRestriction => "complexContent.restriction",
            ElementKind::ComplexContentExtension => "complexContent.extension",
            ElementKind::SimpleTypeRestriction => "simpleType.restriction",
            ElementKind::List => "list",
            ElementKind::Union => "union",
            ElementKind::Enumeration => "enumeration",
            ElementKind::Pattern => "pattern",
            ElementKind::Length => "length",
            ElementKind::MinLength => "minLength",
            ElementKind::MaxLength => "maxLength",
            ElementKind::WhiteSpace => "whiteSpace",
            ElementKind::MinInclusive => "minInclusive",
            ElementKind::MaxInclusive => "maxInclusive",
            ElementKind::MinExclusive => "minExclusive",
            ElementKind::MaxExclusive => "maxExclusive",
            ElementKind::TotalDigits => "totalDigits",
            ElementKind::FractionDigits => "fractionDigits",
            ElementKind::Key => "key",
            ElementKind::Keyref => "keyref",
            ElementKind::Unique => "unique",
            ElementKind::Selector => "selector",
            ElementKind::Field => "field",
            ElementKind::Import => "import",
            ElementKind::Include => "include",
            ElementKind::Redefine => "redefine",
            ElementKind::Notation => "notation",
        }
    }

    /// Every kind in the enumeration, in declaration order.
    pub const fn all() -> &'static [ElementKind] {
        &ALL_KINDS
    }

    /// Whether this kind is a constraining facet.
    pub const fn is_facet(self) -> bool {
        matches!(
            self,
            ElementKind::Enumeration
                | ElementKind::Pattern
                | ElementKind::Length
                | ElementKind::MinLength
                | ElementKind::MaxLength
                | ElementKind::WhiteSpace
                | ElementKind::MinInclusive
                | ElementKind::MaxInclusive
                | ElementKind::MinExclusive
                | ElementKind::MaxExclusive
                | ElementKind::TotalDigits
                | ElementKind::FractionDigits
        )
    }

    /// Whether this kind is an identity constraint (key, keyref, unique).
    pub const fn is_identity_constraint(self) -> bool {
        matches!(
            self,
            ElementKind::Key | ElementKind::Keyref | ElementKind::Unique
        )
    }

    /// Whether this kind is a model group compositor (all, choice, sequence).
    pub const fn is_model_group(self) -> bool {
        matches!(
            self,
            ElementKind::All | ElementKind::Choice | ElementKind::Sequence
        )
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
