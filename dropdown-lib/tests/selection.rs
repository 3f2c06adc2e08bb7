use dropdown_lib::{Item, Selection};
use serde_json::json;

fn item(id: i64, name: &str) -> Item {
    json!({"id": id, "name": name}).as_object().cloned().unwrap()
}

#[test]
fn test_multi_toggle_roundtrip_restores_selection() {
    let mut selection = Selection::multi("id");
    selection.toggle(&item(1, "Ann"), true);
    selection.toggle(&item(2, "Bob"), true);
    let before = selection.items().to_vec();

    selection.toggle(&item(3, "Cara"), true);
    selection.toggle(&item(3, "Cara"), false);

    assert_eq!(selection.items(), before.as_slice());
    assert_eq!(selection.ids(), &[json!(1), json!(2)]);
}

#[test]
fn test_multi_toggle_keeps_ids_parallel() {
    let mut selection = Selection::multi("id");
    for id in 0..5 {
        selection.toggle(&item(id, "x"), true);
        assert_eq!(selection.ids().len(), selection.items().len());
    }
    selection.toggle(&item(2, "x"), false);
    assert_eq!(selection.ids().len(), selection.items().len());
    assert_eq!(selection.ids(), &[json!(0), json!(1), json!(3), json!(4)]);
}

#[test]
fn test_multi_add_existing_key_is_noop() {
    let mut selection = Selection::multi("id");
    assert!(selection.toggle(&item(1, "Ann"), true));
    assert!(!selection.toggle(&item(1, "Ann"), true));
    assert_eq!(selection.len(), 1);
}

#[test]
fn test_single_replaces() {
    let mut selection = Selection::single("id");
    selection.toggle(&item(1, "Ann"), true);
    selection.toggle(&item(2, "Bob"), true);
    assert_eq!(selection.items(), &[item(2, "Bob")]);
    assert_eq!(selection.ids(), &[json!(2)]);
}

#[test]
fn test_single_deselect_empties() {
    let mut selection = Selection::single("id");
    selection.toggle(&item(1, "Ann"), true);
    selection.toggle(&item(1, "Ann"), false);
    assert!(selection.is_empty());
    assert!(selection.ids().is_empty());
}

#[test]
fn test_select_all_and_clear() {
    let data = vec![item(1, "Ann"), item(2, "Bob")];
    let mut selection = Selection::multi("id");
    selection.select_all(&data);
    assert!(selection.is_all_selected(data.len()));
    assert_eq!(selection.ids(), &[json!(1), json!(2)]);

    selection.clear();
    assert!(selection.is_empty());
    assert!(!selection.is_all_selected(data.len()));
}

#[test]
fn test_all_selected_needs_non_empty() {
    let selection = Selection::multi("id");
    assert!(!selection.is_all_selected(0));
}

#[test]
fn test_custom_key_field() {
    let mut selection = Selection::multi("code");
    let a = json!({"code": "A", "id": 1}).as_object().cloned().unwrap();
    let b = json!({"code": "B", "id": 1}).as_object().cloned().unwrap();
    selection.toggle(&a, true);
    selection.toggle(&b, true);
    assert_eq!(selection.len(), 2);
    assert!(selection.is_selected(&json!("B")));
}
