use crate::expansion::ExpansionError;
use crate::expansion::FieldExpansion;
use crate::expansion::SelectionExpansion;
use crate::expansion::TypeExpansion;
use crate::expansion::merge_field_expansions;
use crate::test::expansion_json;
use serde_json::json;

fn type_expansion(entries: Vec<(&str, SelectionExpansion)>) -> TypeExpansion {
    entries
        .into_iter()
        .map(|(key, selection)| (key.to_string(), selection))
        .collect()
}

fn field_expansion(entries: Vec<(&str, TypeExpansion)>) -> FieldExpansion {
    entries
        .into_iter()
        .map(|(type_name, expansion)| (type_name.to_string(), expansion))
        .collect()
}

fn leaves(type_name: &str, keys: &[&str]) -> FieldExpansion {
    field_expansion(vec![(
        type_name,
        type_expansion(keys.iter().map(|key| (*key, SelectionExpansion::Leaf)).collect()),
    )])
}

#[test]
fn leaf_merged_with_leaf_stays_leaf() {
    let a = leaves("Foo", &["a"]);
    let b = leaves("Foo", &["a"]);

    let merged = merge_field_expansions(&a, &b).unwrap();
    assert_eq!(merged, a);
    assert!(merged.get("Foo").unwrap().get("a").unwrap().is_leaf());
}

#[test]
fn disjoint_keys_are_unioned() {
    let a = leaves("Foo", &["a", "b"]);
    let b = leaves("Foo", &["c"]);

    let merged = merge_field_expansions(&a, &b).unwrap();
    assert_eq!(expansion_json(&merged), json!({
        "Foo": { "a": true, "b": true, "c": true },
    }));
}

#[test]
fn merged_response_keys_keep_first_seen_order() {
    let a = leaves("Foo", &["b", "a"]);
    let b = leaves("Foo", &["c", "a"]);

    let merged = merge_field_expansions(&a, &b).unwrap();
    let keys = merged.get("Foo").unwrap().iter().map(|(key, _)| key).collect::<Vec<_>>();
    assert_eq!(keys, vec!["b", "a", "c"]);
}

#[test]
fn disjoint_type_names_are_unioned() {
    let a = leaves("Bar1", &["b1"]);
    let b = leaves("Bar2", &["b2"]);

    let merged = merge_field_expansions(&a, &b).unwrap();
    assert_eq!(merged.type_names().collect::<Vec<_>>(), vec!["Bar1", "Bar2"]);
}

#[test]
fn nested_expansions_merge_recursively() {
    let a = field_expansion(vec![(
        "Image",
        type_expansion(vec![("tags", SelectionExpansion::Nested(leaves("Tag", &["name"])))]),
    )]);
    let b = field_expansion(vec![(
        "Image",
        type_expansion(vec![("tags", SelectionExpansion::Nested(leaves("Tag", &["id"])))]),
    )]);

    let merged = merge_field_expansions(&a, &b).unwrap();
    assert_eq!(expansion_json(&merged), json!({
        "Image": { "tags": { "Tag": { "id": true, "name": true } } },
    }));
}

#[test]
fn leaf_merged_with_nested_is_an_error() {
    let leaf = leaves("Foo", &["d"]);
    let nested = field_expansion(vec![(
        "Foo",
        type_expansion(vec![("d", SelectionExpansion::Nested(leaves("Bar", &["e"])))]),
    )]);

    let expected_err = ExpansionError::MismatchedSelectionShape {
        response_key: "d".to_string(),
    };
    assert_eq!(merge_field_expansions(&leaf, &nested), Err(expected_err.clone()));
    assert_eq!(merge_field_expansions(&nested, &leaf), Err(expected_err));
}

#[test]
fn merge_does_not_modify_inputs() {
    let a = leaves("Foo", &["a"]);
    let b = leaves("Foo", &["b"]);

    merge_field_expansions(&a, &b).unwrap();
    assert_eq!(a, leaves("Foo", &["a"]));
    assert_eq!(b, leaves("Foo", &["b"]));
}

#[test]
fn absorb_matches_pure_merge() {
    let a = field_expansion(vec![
        ("Foo", type_expansion(vec![
            ("a", SelectionExpansion::Leaf),
            ("d", SelectionExpansion::Nested(leaves("Bar", &["e"]))),
        ])),
    ]);
    let b = field_expansion(vec![
        ("Foo", type_expansion(vec![
            ("d", SelectionExpansion::Nested(leaves("Bar", &["f"]))),
        ])),
        ("Baz", TypeExpansion::new()),
    ]);

    let merged = merge_field_expansions(&a, &b).unwrap();
    let mut absorbed = a.clone();
    absorbed.absorb(b).unwrap();
    assert_eq!(absorbed, merged);
}

#[test]
fn map_equality_ignores_insertion_order() {
    let ab = leaves("Foo", &["a", "b"]);
    let ba = leaves("Foo", &["b", "a"]);
    assert_eq!(ab, ba);
}

#[test]
fn serializes_leaves_as_true_and_empty_types_as_empty_objects() {
    let expansion = field_expansion(vec![
        ("Foo", type_expansion(vec![
            ("a", SelectionExpansion::Leaf),
            ("d", SelectionExpansion::Nested(leaves("Bar", &["e"]))),
        ])),
        ("Other", TypeExpansion::new()),
    ]);

    assert_eq!(
        serde_json::to_string(&expansion).unwrap(),
        r#"{"Foo":{"a":true,"d":{"Bar":{"e":true}}},"Other":{}}"#,
    );
}

#[test]
fn with_type_names_seeds_empty_entries() {
    let expansion = FieldExpansion::with_type_names(["IBar", "Bar1", "Bar2"]);
    assert_eq!(expansion.len(), 3);
    assert!(expansion.iter().all(|(_, type_expansion)| type_expansion.is_empty()));
    assert!(expansion.contains_type("Bar2"));
    assert!(!expansion.contains_type("Baz"));
}
