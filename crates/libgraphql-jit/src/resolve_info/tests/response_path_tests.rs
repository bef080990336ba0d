use crate::resolve_info::PathSegment;
use crate::resolve_info::ResponsePath;

#[test]
fn root_path_is_empty() {
    let root = ResponsePath::root();
    assert!(root.is_root());
    assert!(root.to_vec().is_empty());
    assert_eq!(root.to_string(), "");
    assert!(root.parent().is_none());
}

#[test]
fn segments_are_listed_root_first() {
    let path = ResponsePath::root()
        .append_key("elements", Some("Query"))
        .append_index(3)
        .append_key("children", Some("Div"));

    assert_eq!(path.to_vec(), vec![
        PathSegment::Key("elements".to_string()),
        PathSegment::Index(3),
        PathSegment::Key("children".to_string()),
    ]);
    assert_eq!(path.to_string(), "elements.3.children");
    assert_eq!(path.type_name(), Some("Div"));
    assert_eq!(path.last_segment(), Some(&PathSegment::Key("children".to_string())));
}

#[test]
fn appending_leaves_the_prefix_untouched() {
    let list = ResponsePath::root().append_key("users", None);
    let first = list.append_index(0);
    let second = list.append_index(1);

    assert_eq!(list.to_string(), "users");
    assert_eq!(first.to_string(), "users.0");
    assert_eq!(second.to_string(), "users.1");
    assert_eq!(first.parent(), Some(&list));
    assert_eq!(second.parent(), Some(&list));
    assert_eq!(first.type_name(), None);
}

#[test]
fn segments_serialize_as_keys_and_indices() {
    let path = ResponsePath::root().append_key("users", None).append_index(7);
    assert_eq!(
        serde_json::to_string(&path.to_vec()).unwrap(),
        r#"["users",7]"#,
    );
}
