use ds::SinglyLinkedList;

fn main() {
    println!("Example 1: Singly Linked List with i32");
    let mut int_list = SinglyLinkedList::new();
    int_list.push_back(10);
    int_list.push_back(20);
    int_list.push_back(30);
    println!("{int_list}");

    int_list.pop_back();
    println!("{int_list}");

    int_list.push_front(5);
    println!("{int_list}");

    int_list.pop_front();
    println!("{int_list}");

    int_list.insert(1, 15);
    println!("{int_list}");

    int_list.reverse();
    println!("{int_list}");

    println!("\nExample 2: Singly Linked List with String");
    let mut string_list = SinglyLinkedList::new();
    string_list.push_back("A".to_owned());
    string_list.push_back("B".to_owned());
    string_list.push_back("C".to_owned());
    println!("{string_list}");

    string_list.pop_back();
    println!("{string_list}");

    string_list.push_front("Z".to_owned());
    println!("{string_list}");

    string_list.pop_front();
    println!("{string_list}");

    string_list.insert(1, "Y".to_owned());
    println!("{string_list}");

    string_list.reverse();
    println!("{string_list}");
}
