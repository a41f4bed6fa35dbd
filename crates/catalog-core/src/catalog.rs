//! The loaded, immutable course catalog.

use std::collections::HashMap;

use crate::record::{CourseId, CourseRecord};

/// An ordered, read-only collection of course records.
///
/// Built once by a loader and never mutated afterwards. Queries over a
/// shared catalog are pure reads, so concurrent sessions need no locking.
/// Derived values (the disambiguated display labels) are computed here,
/// once, at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    records: Vec<CourseRecord>,
    labels: Vec<String>,
}

impl Catalog {
    /// Build a catalog from normalized records, preserving their order.
    ///
    /// Callers are expected to provide unique ids; the loaders enforce
    /// this for file-sourced catalogs.
    pub fn new(records: Vec<CourseRecord>) -> Self {
        let labels = disambiguate(&records);
        Self { records, labels }
    }

    /// Look up a record by its canonical id.
    pub fn get(&self, id: &CourseId) -> Option<&CourseRecord> {
        self.records.iter().find(|r| &r.id == id)
    }

    /// Iterate the records in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, CourseRecord> {
        self.records.iter()
    }

    /// All records in catalog order.
    pub fn records(&self) -> &[CourseRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the catalog holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Unambiguous display labels for every record, in catalog order.
    ///
    /// Titles are not unique, so repeated titles get an occurrence-counter
    /// suffix: the first "Yoga" stays `Yoga`, the second becomes
    /// `Yoga (2)`, and so on. Every label therefore maps to exactly one
    /// record, which makes labels safe as a selection key for sources
    /// that lack a stable id column.
    pub fn display_labels(&self) -> Vec<(CourseId, String)> {
        self.records
            .iter()
            .zip(&self.labels)
            .map(|(record, label)| (record.id.clone(), label.clone()))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CourseRecord;
    type IntoIter = std::slice::Iter<'a, CourseRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Apply the occurrence-counter suffix to colliding titles.
fn disambiguate(records: &[CourseRecord]) -> Vec<String> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    records
        .iter()
        .map(|record| {
            let count = seen.entry(record.title.as_str()).or_insert(0);
            *count += 1;
            let occurrence = *count;
            if occurrence == 1 {
                record.title.clone()
            } else {
                format!("{} ({})", record.title, occurrence)
            }
        })
        .collect()
}
