//! Namespace scoping tests
//!
//! Exercises the scoped prefix resolution: local bindings shadow ancestor
//! bindings, bindings declared before or after attachment are equally
//! visible, and an exhausted chain yields a miss rather than an error.
//! The property tests drive the same behavior with arbitrary prefixes and
//! URIs over a three-level chain.

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use xsd_tree::elements::{
    TypeNaming, XsdComplexType, XsdElement, XsdNode, XsdSchema, XsdSequence,
};

/// Builds schema -> complexType -> sequence -> element and returns the
/// four nodes.
fn three_level_chain() -> (
    std::rc::Rc<XsdSchema>,
    std::rc::Rc<XsdComplexType>,
    std::rc::Rc<XsdSequence>,
    std::rc::Rc<XsdElement>,
) {
    let schema = XsdSchema::new();
    let complex_type = XsdComplexType::new();
    let sequence = XsdSequence::new();
    let element = XsdElement::new();

    sequence.add_element(element.clone()).unwrap();
    complex_type.set_particle(sequence.clone()).unwrap();
    schema.add_complex_type(complex_type.clone()).unwrap();

    (schema, complex_type, sequence, element)
}

#[test]
fn binding_before_attach_is_visible_to_descendants() {
    let schema = XsdSchema::new();
    schema.bind_namespace("foo", "http://example.org/foo");

    let complex_type = XsdComplexType::new();
    schema.add_complex_type(complex_type.clone()).unwrap();

    assert_eq!(
        complex_type.lookup_namespace("foo").as_deref(),
        Some("http://example.org/foo")
    );
}

#[test]
fn binding_after_attach_is_visible_to_descendants() {
    let schema = XsdSchema::new();
    let complex_type = XsdComplexType::new();
    schema.add_complex_type(complex_type.clone()).unwrap();

    schema.bind_namespace("foo", "http://example.org/foo");

    assert_eq!(
        complex_type.lookup_namespace("foo").as_deref(),
        Some("http://example.org/foo")
    );
}

#[test]
fn closer_binding_shadows_ancestor_binding() {
    let (schema, complex_type, _sequence, element) = three_level_chain();

    schema.bind_namespace("p", "http://example.com/outer");
    complex_type.bind_namespace("p", "http://example.com/inner");

    assert_eq!(
        element.lookup_namespace("p").as_deref(),
        Some("http://example.com/inner")
    );
    assert_eq!(
        schema.lookup_namespace("p").as_deref(),
        Some("http://example.com/outer")
    );
}

#[test]
fn rebinding_on_the_same_node_overwrites() {
    let schema = XsdSchema::new();
    schema.bind_namespace("p", "http://example.com/old");
    schema.bind_namespace("p", "http://example.com/new");

    assert_eq!(
        schema.lookup_namespace("p").as_deref(),
        Some("http://example.com/new")
    );
}

#[test]
fn unattached_node_without_binding_misses() {
    let element = XsdElement::new();
    assert_eq!(element.lookup_namespace("foo"), None);
}

#[test]
fn exhausted_chain_misses() {
    let (schema, _complex_type, _sequence, element) = three_level_chain();
    schema.bind_namespace("bound", "http://example.com/bound");

    assert_eq!(element.lookup_namespace("unbound"), None);
}

#[test]
fn miss_is_not_cached() {
    let (schema, _complex_type, _sequence, element) = three_level_chain();

    assert_eq!(element.lookup_namespace("late"), None);
    schema.bind_namespace("late", "http://example.com/late");
    assert_eq!(
        element.lookup_namespace("late").as_deref(),
        Some("http://example.com/late")
    );
}

fn prefix_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,7}"
}

fn uri_strategy() -> impl Strategy<Value = String> {
    "http://example\\.com/[a-z0-9]{1,12}"
}

proptest! {
    #[test]
    fn root_binding_resolves_from_any_depth(
        prefix in prefix_strategy(),
        uri in uri_strategy(),
    ) {
        let (schema, complex_type, sequence, element) = three_level_chain();
        schema.bind_namespace(&prefix, &uri);

        for node in [
            schema.as_ref() as &dyn XsdNode,
            complex_type.as_ref(),
            sequence.as_ref(),
            element.as_ref(),
        ] {
            let resolved = node.lookup_namespace(&prefix);
            prop_assert_eq!(resolved.as_deref(), Some(uri.as_str()));
        }
    }

    #[test]
    fn nearest_binding_wins(
        prefix in prefix_strategy(),
        outer_uri in uri_strategy(),
        mid_uri in uri_strategy(),
        inner_uri in uri_strategy(),
    ) {
        let (schema, complex_type, sequence, element) = three_level_chain();
        schema.bind_namespace(&prefix, &outer_uri);
        complex_type.bind_namespace(&prefix, &mid_uri);
        sequence.bind_namespace(&prefix, &inner_uri);

        let at_element = element.lookup_namespace(&prefix);
        let at_sequence = sequence.lookup_namespace(&prefix);
        let at_complex_type = complex_type.lookup_namespace(&prefix);
        let at_schema = schema.lookup_namespace(&prefix);
        prop_assert_eq!(at_element.as_deref(), Some(inner_uri.as_str()));
        prop_assert_eq!(at_sequence.as_deref(), Some(inner_uri.as_str()));
        prop_assert_eq!(at_complex_type.as_deref(), Some(mid_uri.as_str()));
        prop_assert_eq!(at_schema.as_deref(), Some(outer_uri.as_str()));
    }

    #[test]
    fn unbound_prefixes_always_miss(
        bound in prefix_strategy(),
        probe in prefix_strategy(),
        uri in uri_strategy(),
    ) {
        prop_assume!(bound != probe);

        let (schema, _complex_type, _sequence, element) = three_level_chain();
        schema.bind_namespace(&bound, &uri);

        prop_assert_eq!(element.lookup_namespace(&probe), None);
    }
}
