//! Integration tests for the element tree
//!
//! Builds realistic schema fragments across many kinds and checks the
//! ownership protocol: fresh nodes are unattached, attachment records the
//! parent by identity, a second attach fails without mutating the tree and
//! ordered relations preserve document order.

use std::collections::HashSet;
use std::rc::Rc;

use pretty_assertions::assert_eq;

use xsd_tree::elements::{
    same_element, Annotated, AttributeNaming, ElementKind, SimpleTyped, TypeNaming, XsdAll,
    XsdAnnotation, XsdAny, XsdAnyAttribute, XsdAppInfo, XsdAttribute, XsdAttributeGroup,
    XsdChoice, XsdComplexContent, XsdComplexContentExtension, XsdComplexContentRestriction,
    XsdComplexType, XsdDocumentation, XsdElement, XsdEnumerationFacet, XsdField,
    XsdFractionDigitsFacet, XsdGroup, XsdImport, XsdInclude, XsdKey, XsdKeyref, XsdLengthFacet,
    XsdList, XsdMaxExclusiveFacet, XsdMaxInclusiveFacet, XsdMaxLengthFacet, XsdMinExclusiveFacet,
    XsdMinInclusiveFacet, XsdMinLengthFacet, XsdNode, XsdNotation, XsdPatternFacet, XsdRedefine,
    XsdSchema, XsdSelector, XsdSequence, XsdSimpleContent, XsdSimpleContentExtension,
    XsdSimpleContentRestriction, XsdSimpleType, XsdSimpleTypeRestriction, XsdTotalDigitsFacet,
    XsdUnion, XsdUnique, XsdWhiteSpaceFacet,
};
use xsd_tree::Error;

/// One freshly constructed node of every kind in the enumeration.
fn one_of_each_kind() -> Vec<Rc<dyn XsdNode>> {
    vec![
        XsdSchema::new(),
        XsdElement::new(),
        XsdAttribute::new(),
        XsdAttributeGroup::new(),
        XsdAnyAttribute::new(),
        XsdAny::new(),
        XsdComplexType::new(),
        XsdSimpleType::new(),
        XsdSequence::new(),
        XsdChoice::new(),
        XsdAll::new(),
        XsdGroup::new(),
        XsdAnnotation::new(),
        XsdDocumentation::new(),
        XsdAppInfo::new(),
        XsdSimpleContent::new(),
        XsdComplexContent::new(),
        XsdSimpleContentRestriction::new(),
        XsdSimpleContentExtension::new(),
        XsdComplexContentRestriction::new(),
        XsdComplexContentExtension::new(),
        XsdSimpleTypeRestriction::new(),
        XsdList::new(),
        XsdUnion::new(),
        XsdEnumerationFacet::new("value"),
        XsdPatternFacet::new("[a-z]+"),
        XsdLengthFacet::new("4"),
        XsdMinLengthFacet::new("1"),
        XsdMaxLengthFacet::new("8"),
        XsdWhiteSpaceFacet::new("collapse"),
        XsdMinInclusiveFacet::new("0"),
        XsdMaxInclusiveFacet::new("10"),
        XsdMinExclusiveFacet::new("-1"),
        XsdMaxExclusiveFacet::new("11"),
        XsdTotalDigitsFacet::new("5"),
        XsdFractionDigitsFacet::new("2"),
        XsdKey::new(),
        XsdKeyref::new(),
        XsdUnique::new(),
        XsdSelector::new(),
        XsdField::new(),
        XsdImport::new(),
        XsdInclude::new(),
        XsdRedefine::new(),
        XsdNotation::new(),
    ]
}

#[test]
fn every_kind_constructs_unattached() {
    for node in one_of_each_kind() {
        assert!(
            !node.has_parent(),
            "freshly constructed '{}' node reports a parent",
            node.kind()
        );
        assert!(node.parent().is_none());
    }
}

#[test]
fn constructors_cover_the_whole_enumeration() {
    let constructed: HashSet<ElementKind> =
        one_of_each_kind().iter().map(|n| n.kind()).collect();
    let expected: HashSet<ElementKind> = ElementKind::all().iter().copied().collect();
    assert_eq!(constructed, expected);
}

#[test]
fn kind_identifiers_are_globally_unique() {
    let mut seen = HashSet::new();
    for kind in ElementKind::all() {
        assert!(
            seen.insert(kind.as_str()),
            "kind identifier '{}' is not unique",
            kind.as_str()
        );
    }
    assert_eq!(seen.len(), 45);
}

#[test]
fn group_belongs_to_the_first_choice_only() {
    let group = XsdGroup::new();
    group.set_name("nameGroup");
    let first_choice = XsdChoice::new();
    let second_choice = XsdChoice::new();

    first_choice.add_group(group.clone()).unwrap();
    assert!(group.has_parent());
    assert!(same_element(
        group.parent().unwrap().as_ref(),
        first_choice.as_ref()
    ));

    let err = second_choice.add_group(group.clone()).unwrap_err();
    let Error::Ownership(violation) = err;
    assert_eq!(violation.child, ElementKind::Group);
    assert_eq!(violation.parent, ElementKind::Choice);
    assert_eq!(
        violation.to_string(),
        "the 'group' element cannot be added to the 'choice' element \
         because it already belongs to another element"
    );

    // The failed call mutated nothing on either side.
    assert!(same_element(
        group.parent().unwrap().as_ref(),
        first_choice.as_ref()
    ));
    assert!(second_choice.particles().is_empty());
}

#[test]
fn single_slot_rejects_owned_child_regardless_of_slot_state() {
    let owner = XsdComplexType::new();
    let rival = XsdComplexType::new();
    let annotation = XsdAnnotation::new();

    owner.set_annotation(annotation.clone()).unwrap();

    // The rival's slot is empty, but the child is already owned.
    let err = rival.set_annotation(annotation.clone()).unwrap_err();
    let Error::Ownership(violation) = err;
    assert_eq!(violation.child, ElementKind::Annotation);
    assert_eq!(violation.parent, ElementKind::ComplexType);
    assert!(rival.annotation().is_none());
}

#[test]
fn ordered_relations_preserve_call_order() {
    let sequence = XsdSequence::new();
    let a = XsdElement::new();
    a.set_name("a");
    let b = XsdElement::new();
    b.set_name("b");

    sequence.add_element(a.clone()).unwrap();
    sequence.add_element(b.clone()).unwrap();

    let particles = sequence.particles();
    assert_eq!(particles.len(), 2);
    assert!(same_element(particles[0].as_node(), a.as_ref()));
    assert!(same_element(particles[1].as_node(), b.as_ref()));
}

#[test]
fn builds_a_complete_person_schema() {
    // <xs:schema targetNamespace="http://example.com/person">
    //   <xs:simpleType name="sizeType">...</xs:simpleType>
    //   <xs:complexType name="personType">...</xs:complexType>
    //   <xs:element name="person" type="personType">...</xs:element>
    // </xs:schema>
    let schema = XsdSchema::new();
    schema.set_target_namespace("http://example.com/person");
    schema.bind_namespace("xs", xsd_tree::XSD_NAMESPACE);
    schema.bind_namespace("p", "http://example.com/person");

    let size_type = XsdSimpleType::new();
    size_type.set_name("sizeType");
    let restriction = XsdSimpleTypeRestriction::new();
    restriction.set_base_type("xs:string");
    restriction
        .add_facet(XsdEnumerationFacet::new("small"))
        .unwrap();
    restriction
        .add_facet(XsdEnumerationFacet::new("large"))
        .unwrap();
    size_type.set_restriction(restriction.clone()).unwrap();
    schema.add_simple_type(size_type).unwrap();

    let person_type = XsdComplexType::new();
    person_type.set_name("personType");
    let sequence = XsdSequence::new();
    let given_name = XsdElement::new();
    given_name.set_name("givenName");
    given_name.set_type_name("xs:string");
    sequence.add_element(given_name.clone()).unwrap();
    person_type.set_particle(sequence).unwrap();

    let id_attribute = XsdAttribute::new();
    id_attribute.set_name("id");
    let size_attribute = XsdAttribute::new();
    size_attribute.set_name("size");
    size_attribute.set_type_name("p:sizeType");
    person_type.add_attribute(id_attribute).unwrap();
    person_type.add_attribute(size_attribute).unwrap();
    schema.add_complex_type(person_type.clone()).unwrap();

    let person = XsdElement::new();
    person.set_name("person");
    person.set_type_name("p:personType");
    let key = XsdKey::new();
    key.set_name("personKey");
    let selector = XsdSelector::new();
    selector.set_xpath(".//person");
    key.set_selector(selector).unwrap();
    let field = XsdField::new();
    field.set_xpath("@id");
    key.add_field(field).unwrap();
    person.add_key(key).unwrap();
    schema.add_element(person.clone()).unwrap();

    // Deeply nested nodes resolve prefixes declared on the root.
    assert_eq!(
        given_name.lookup_namespace("xs").as_deref(),
        Some(xsd_tree::XSD_NAMESPACE)
    );
    assert_eq!(
        restriction.facets()[0].value(),
        "small".to_string()
    );
    assert_eq!(
        person_type
            .attributes()
            .iter()
            .map(|a| a.name().unwrap())
            .collect::<Vec<_>>(),
        vec!["id".to_string(), "size".to_string()]
    );

    // Ownership chain walks back to the schema root.
    let mut current: Rc<dyn XsdNode> = given_name;
    let mut depth = 0;
    while let Some(parent) = current.parent() {
        current = parent;
        depth += 1;
    }
    assert!(same_element(current.as_ref(), schema.as_ref()));
    assert_eq!(depth, 3);
}

#[test]
fn simple_typed_role_is_exclusive_across_kinds() {
    let simple_type = XsdSimpleType::new();
    let attribute = XsdAttribute::new();
    let list = XsdList::new();

    attribute.set_simple_type(simple_type.clone()).unwrap();
    let err = list.set_simple_type(simple_type.clone()).unwrap_err();

    let Error::Ownership(violation) = err;
    assert_eq!(violation.child, ElementKind::SimpleType);
    assert_eq!(violation.parent, ElementKind::List);
    assert!(list.simple_type().is_none());
    assert!(same_element(
        simple_type.parent().unwrap().as_ref(),
        attribute.as_ref()
    ));
}

#[test]
fn attribute_group_wildcard_is_single_slot() {
    let group = XsdAttributeGroup::new();
    let first = XsdAnyAttribute::new();
    first.set_namespace("##any");
    let second = XsdAnyAttribute::new();
    second.set_namespace("##other");

    group.set_any_attribute(first.clone()).unwrap();
    // Writing the slot again with a fresh node replaces the reference.
    group.set_any_attribute(second.clone()).unwrap();

    let held = group.any_attribute().unwrap();
    assert!(same_element(held.as_ref(), second.as_ref()));
    // The replaced occupant still records this group as its owner.
    assert!(same_element(
        first.parent().unwrap().as_ref(),
        group.as_ref()
    ));
}

#[test]
fn annotation_hierarchy_round_trip() {
    let annotation = XsdAnnotation::new();
    let documentation = XsdDocumentation::new();
    documentation.set_source("http://example.com/docs");
    documentation.set_text("Describes the person element.");
    let app_info = XsdAppInfo::new();
    app_info.set_text("tooling-hint");

    annotation.add_documentation(documentation).unwrap();
    annotation.add_app_info(app_info).unwrap();

    let element = XsdElement::new();
    element.set_annotation(annotation.clone()).unwrap();

    let held = element.annotation().unwrap();
    assert_eq!(held.documentations().len(), 1);
    assert_eq!(held.app_infos().len(), 1);
    assert_eq!(
        held.documentations()[0].text().as_deref(),
        Some("Describes the person element.")
    );
}
