use program_catalogue::{programs, ProgramListing, PROGRAM_COUNT};
use std::collections::BTreeMap;

#[test]
fn test_catalogue_shape() {
    let catalogue = programs();
    assert_eq!(catalogue.len(), PROGRAM_COUNT);

    for listing in catalogue {
        assert_eq!(listing.fields().len(), ProgramListing::FIELD_NAMES.len());
        for ((name, value), expected) in listing.fields().iter().zip(ProgramListing::FIELD_NAMES) {
            assert_eq!(*name, expected);
            assert!(!value.is_empty());
        }
    }
}

#[test]
fn test_catalogue_shared_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| programs().iter().map(|p| p.title).collect::<Vec<_>>()))
        .collect();

    let expected: Vec<&str> = programs().iter().map(|p| p.title).collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_faculty_grouping() {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for listing in programs() {
        *counts.entry(listing.faculty).or_default() += 1;
    }

    let expected: BTreeMap<&str, usize> = [
        ("Business Administration", 3),
        ("Chemistry", 1),
        ("Computer Science", 8),
        ("Economics", 1),
        ("Education", 1),
        ("Engineering", 5),
        ("Geography", 2),
        ("Language Science", 3),
        ("Law", 2),
        ("Life Sciences", 2),
        ("Mathematics", 1),
        ("Medicine", 4),
        ("Philosophy", 1),
        ("Physics", 1),
        ("Psychology", 2),
    ]
    .into_iter()
    .collect();

    assert_eq!(counts, expected);
}
