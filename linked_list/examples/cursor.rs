use linked_list::LinkedList;

fn main() {
    let mut list = LinkedList::new();

    list.push_back(1);
    list.push_back(2);
    println!("{list:?}"); // > [1, 2]

    let mut cursor = list.cursor_front_mut();
    cursor.move_next();
    assert_eq!(cursor.current(), Some(&mut 2));
    cursor.insert_after(3);
    cursor.move_next();
    cursor.move_next();
    assert!(cursor.current().is_none());
    println!("{:?}", cursor.as_list()); // > [1, 2, 3]

    let mut cursor = list.cursor_back_mut();
    cursor.move_previous();
    let removed = cursor.remove_current();
    println!("{removed:?}"); // > Some(2)

    println!("{list:?}"); // > [1, 3]
}
