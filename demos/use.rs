use avl_string_map::AvlTree;

fn main() {
    let mut tree = AvlTree::new();
    for (value, key) in ["d", "b", "f", "a", "c", "e", "g"].into_iter().enumerate() {
        tree.insert(key, value);
    }
    tree.insert("b", 42);
    assert_eq!(tree.search("b"), Some(&42));

    tree.delete("d");
    assert!(tree.search("d").is_none());

    let root = tree.root().map(|root| root.key());
    println!("root: {root:?}, height: {}", tree.height());
    println!("{tree:?}");
}
