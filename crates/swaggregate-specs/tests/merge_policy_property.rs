//! Property-based tests for the namespace merge policy
//!
//! Pins the ordering and precedence contract: list slots concatenate in
//! merge order, mapping slots take the last writer per key, and passthrough
//! attributes survive only from the root document.

use std::collections::BTreeMap;

use proptest::prelude::*;
use serde_yaml::{Mapping, Value};
use swaggregate_specs::models::is_recognized;
use swaggregate_specs::SpecNamespace;

// ============================================================================
// Generators
// ============================================================================

fn arb_token() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,11}".prop_map(|s| s)
}

fn arb_tokens() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(arb_token(), 0..6)
}

fn arb_entries() -> impl Strategy<Value = BTreeMap<String, String>> {
    proptest::collection::btree_map(arb_token(), arb_token(), 0..6)
}

fn arb_passthrough_key() -> impl Strategy<Value = String> {
    arb_token().prop_filter("must not collide with a recognized slot", |name| {
        !is_recognized(name)
    })
}

fn sequence_of(items: &[String]) -> Value {
    Value::Sequence(items.iter().map(|item| Value::from(item.as_str())).collect())
}

fn mapping_of(entries: &BTreeMap<String, String>) -> Value {
    let mut mapping = Mapping::new();
    for (key, value) in entries {
        mapping.insert(Value::from(key.as_str()), Value::from(value.as_str()));
    }
    Value::Mapping(mapping)
}

fn document(entries: &[(&str, Value)]) -> Mapping {
    let mut doc = Mapping::new();
    for (key, value) in entries {
        doc.insert(Value::from(*key), value.clone());
    }
    doc
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// For any pair of documents, a list-typed slot merges to the exact
    /// concatenation of the root's values followed by the include's values.
    #[test]
    fn prop_list_slots_concatenate_in_merge_order(
        root_schemes in arb_tokens(),
        included_schemes in arb_tokens(),
    ) {
        let mut namespace = SpecNamespace::from_document(
            document(&[("schemes", sequence_of(&root_schemes))]),
        ).unwrap();
        namespace
            .merge(document(&[("schemes", sequence_of(&included_schemes))]))
            .unwrap();

        let expected: Vec<Value> = root_schemes
            .iter()
            .chain(included_schemes.iter())
            .map(|item| Value::from(item.as_str()))
            .collect();
        prop_assert_eq!(namespace.schemes, expected);
    }

    /// For any pair of documents, a mapping-typed slot holds the include's
    /// value for every key the include defines, and the root's value for
    /// every key it does not.
    #[test]
    fn prop_mapping_slots_take_the_last_writer_per_key(
        root_entries in arb_entries(),
        included_entries in arb_entries(),
    ) {
        let mut namespace = SpecNamespace::from_document(
            document(&[("parameters", mapping_of(&root_entries))]),
        ).unwrap();
        namespace
            .merge(document(&[("parameters", mapping_of(&included_entries))]))
            .unwrap();

        for (key, value) in &included_entries {
            prop_assert_eq!(
                namespace.parameters.get(&Value::from(key.as_str())),
                Some(&Value::from(value.as_str()))
            );
        }
        for (key, value) in &root_entries {
            if !included_entries.contains_key(key) {
                prop_assert_eq!(
                    namespace.parameters.get(&Value::from(key.as_str())),
                    Some(&Value::from(value.as_str()))
                );
            }
        }
        prop_assert_eq!(
            namespace.parameters.len(),
            root_entries
                .keys()
                .chain(included_entries.keys())
                .collect::<std::collections::BTreeSet<_>>()
                .len()
        );
    }

    /// Passthrough attributes survive from the root document and never from
    /// an included one.
    #[test]
    fn prop_passthrough_attributes_are_root_only(
        key in arb_passthrough_key(),
        root_value in arb_token(),
        included_value in arb_token(),
    ) {
        let mut namespace = SpecNamespace::from_document(
            document(&[(key.as_str(), Value::from(root_value.as_str()))]),
        ).unwrap();

        let mut other_key = key.clone();
        other_key.push('x');
        namespace
            .merge(document(&[
                (other_key.as_str(), Value::from(included_value.as_str())),
            ]))
            .unwrap();

        prop_assert_eq!(
            namespace.extra.get(&Value::from(key.as_str())),
            Some(&Value::from(root_value.as_str()))
        );
        prop_assert!(!namespace.extra.contains_key(&Value::from(other_key.as_str())));
    }

    /// Serializing a namespace and re-seeding from the parsed text yields
    /// the same namespace.
    #[test]
    fn prop_serialized_namespace_reparses_to_itself(
        schemes in arb_tokens(),
        parameters in arb_entries(),
        passthrough_key in arb_passthrough_key(),
        passthrough_value in arb_token(),
    ) {
        let namespace = SpecNamespace::from_document(document(&[
            ("schemes", sequence_of(&schemes)),
            ("parameters", mapping_of(&parameters)),
            (passthrough_key.as_str(), Value::from(passthrough_value.as_str())),
        ]))
        .unwrap();

        let text = namespace.to_yaml().unwrap();
        let reparsed: Mapping = serde_yaml::from_str(&text).unwrap();
        let round_tripped = SpecNamespace::from_document(reparsed).unwrap();

        prop_assert_eq!(namespace, round_tripped);
    }
}
