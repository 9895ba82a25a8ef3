use crate::document::PartCollection;
use crate::document::PartId;

#[test]
fn first_entry_wins_and_duplicates_are_kept() {
    let mut collection = PartCollection::new();
    assert!(collection.insert(Some("A"), PartId(0)));
    assert!(collection.insert(Some("B"), PartId(1)));
    assert!(!collection.insert(Some("A"), PartId(2)));

    assert_eq!(collection.get("A"), Some(PartId(0)));
    assert_eq!(collection.len(), 3);
    let duplicates: Vec<_> = collection.duplicates().collect();
    assert_eq!(duplicates, vec![("A", &[PartId(0), PartId(2)][..])]);
}

#[test]
fn anonymous_entries_never_collide() {
    let mut collection = PartCollection::new();
    assert!(collection.insert(None, PartId(0)));
    assert!(collection.insert(None, PartId(1)));
    assert_eq!(collection.anonymous(), &[PartId(0), PartId(1)]);
    assert_eq!(collection.duplicates().count(), 0);
    assert!(!collection.contains(""));
}

#[test]
fn iteration_follows_insertion_order() {
    let mut collection = PartCollection::new();
    collection.insert(Some("Z"), PartId(4));
    collection.insert(None, PartId(2));
    collection.insert(Some("A"), PartId(7));

    assert_eq!(collection.iter().collect::<Vec<_>>(), vec![PartId(4), PartId(2), PartId(7)]);
    assert_eq!(collection.names().collect::<Vec<_>>(), vec!["Z", "A"]);
}
