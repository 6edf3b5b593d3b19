use expect_test::expect;
use linked_list::iter::{IntoIter, Iter, IterMut};
use linked_list::LinkedList;

#[test]
fn test_fresh_list_is_empty() {
    let list = LinkedList::<i32>::new();

    assert!(list.is_empty());
    assert!(list.front().is_none());
    assert!(list.back().is_none());
    assert!(list.to_vec().is_empty());
}

#[test]
fn test_append_five_in_order() {
    let mut list = LinkedList::new();

    for i in 0..=4 {
        list.push_back(i);
    }

    assert_eq!(list.to_vec(), [0, 1, 2, 3, 4]);
    assert_eq!(list.len(), 5);
    assert_eq!(list.back(), Some(&4));
}

#[test]
fn test_append_single_value() {
    let mut list = LinkedList::new();

    list.push_back(7);

    assert_eq!(list.to_vec(), [7]);
}

#[test]
fn test_append_preserves_existing_elements() {
    let mut list = LinkedList::new();

    list.push_back(1);
    list.push_back(1);
    let before = list.to_vec();

    list.push_back(2);
    let after = list.to_vec();

    assert_eq!(before, [1, 1]);
    assert_eq!(after, [1, 1, 2]);
}

#[test]
fn test_snapshot_is_idempotent() {
    let mut list = LinkedList::new();
    list.extend([3, 1, 4, 1, 5]);

    assert_eq!(list.to_vec(), list.to_vec());
}

#[test]
fn test_debug_renders_like_a_slice() {
    let mut list = LinkedList::new();

    expect!["[]"].assert_eq(&format!("{list:?}"));

    list.extend(0..=4);
    expect!["[0, 1, 2, 3, 4]"].assert_eq(&format!("{list:?}"));
}

#[test]
fn test_pop_returns_insertion_order() {
    let mut list: LinkedList<_> = (0..3).collect();

    assert_eq!(list.pop_front(), Some(0));
    assert_eq!(list.pop_front(), Some(1));
    assert_eq!(list.pop_front(), Some(2));
    assert_eq!(list.pop_front(), None);
}

#[test]
fn test_works_with_owned_values() {
    let mut list = LinkedList::new();

    list.push_back(String::from("hello"));
    list.push_back(String::from("world"));

    assert_eq!(list.to_vec(), ["hello", "world"]);
    assert_eq!(list.pop_front().as_deref(), Some("hello"));
}

#[test]
fn test_clone_and_compare() {
    let list: LinkedList<_> = (0..3).collect();
    let cloned = list.clone();

    assert_eq!(list, cloned);

    let mut extended = cloned.clone();
    extended.push_back(3);
    assert!(list < extended);
}

#[test]
fn test_cursor_round_trip() {
    let mut list: LinkedList<_> = (0..=4).collect();

    let mut cursor = list.cursor_front_mut();
    cursor.move_next();
    cursor.move_next();
    assert_eq!(cursor.remove_current(), Some(2));
    cursor.insert_before(20);

    assert_eq!(list.to_vec(), [0, 1, 20, 3, 4]);
}

#[test]
fn test_types_are_send_and_sync() {
    fn is_send<T: Send>() {}
    fn is_sync<T: Sync>() {}

    is_send::<LinkedList<i32>>();
    is_sync::<LinkedList<i32>>();

    is_send::<Iter<'static, i32>>();
    is_sync::<Iter<'static, i32>>();

    is_send::<IterMut<'static, i32>>();
    is_sync::<IterMut<'static, i32>>();

    is_send::<IntoIter<i32>>();
    is_sync::<IntoIter<i32>>();
}
