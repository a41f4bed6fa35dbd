//! Tests for catalog lookup and title disambiguation.

use catalog_core::{Catalog, CourseId, CourseRecord};

fn course(id: &str, title: &str) -> CourseRecord {
    CourseRecord {
        id: CourseId::new(id),
        title: title.to_string(),
        day: "Lunedì".to_string(),
        start_time: None,
        end_time: None,
        start_date: None,
        end_date: None,
        teacher: String::new(),
        room: String::new(),
    }
}

#[test]
fn get_finds_by_canonical_id() {
    let catalog = Catalog::new(vec![course("1", "Yoga"), course("2", "Coro")]);

    assert_eq!(catalog.get(&CourseId::new("2")).unwrap().title, "Coro");
    assert!(catalog.get(&CourseId::new("3")).is_none());
}

#[test]
fn duplicate_titles_get_occurrence_suffixes() {
    let catalog = Catalog::new(vec![
        course("1", "Yoga"),
        course("2", "Coro"),
        course("3", "Yoga"),
        course("4", "Yoga"),
    ]);

    let labels: Vec<String> = catalog
        .display_labels()
        .into_iter()
        .map(|(_, label)| label)
        .collect();

    assert_eq!(labels, vec!["Yoga", "Coro", "Yoga (2)", "Yoga (3)"]);
}

#[test]
fn every_label_maps_to_exactly_one_record() {
    let catalog = Catalog::new(vec![
        course("a", "Yoga"),
        course("b", "Yoga"),
        course("c", "Yoga"),
    ]);

    let entries = catalog.display_labels();
    let mut labels: Vec<&str> = entries.iter().map(|(_, l)| l.as_str()).collect();
    labels.sort_unstable();
    labels.dedup();

    assert_eq!(labels.len(), catalog.len(), "labels must be unique");

    // And each entry's id resolves back to a record.
    for (id, _) in &entries {
        assert!(catalog.get(id).is_some());
    }
}

#[test]
fn labels_preserve_catalog_order() {
    let catalog = Catalog::new(vec![course("9", "Zeta"), course("1", "Alfa")]);

    let entries = catalog.display_labels();
    assert_eq!(entries[0].0, CourseId::new("9"));
    assert_eq!(entries[1].0, CourseId::new("1"));
}
