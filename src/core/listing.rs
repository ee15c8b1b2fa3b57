//! Client-side listing pipeline: sort, filter, and the state they read.
//!
//! All functions here are pure. Sorting and filtering return new vectors
//! and never reorder the held list, so the server's original order stays
//! available for the next resort.

use std::cmp::Ordering;

use super::collate::Collation;
use crate::models::{FileRecord, SortKey, SortSpec};

// ============================================================================
// ListingState
// ============================================================================

/// The last fetched listing plus the active sort.
///
/// `files` keeps the server response order. It is only ever replaced as a
/// whole; readers derive sorted and filtered views from it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListingState {
    files: Vec<FileRecord>,
    sort: SortSpec,
}

impl ListingState {
    pub fn new(files: Vec<FileRecord>, sort: SortSpec) -> Self {
        Self { files, sort }
    }

    /// Files in server response order.
    pub fn files(&self) -> &[FileRecord] {
        &self.files
    }

    pub fn sort(&self) -> &SortSpec {
        &self.sort
    }

    /// Swap in a freshly fetched listing, keeping the active sort.
    pub fn replace(&mut self, files: Vec<FileRecord>) {
        self.files = files;
    }

    /// Apply a header click on `key`.
    pub fn toggle_sort(&mut self, key: SortKey) {
        self.sort = self.sort.toggled(key);
    }

    /// Sorted, then filtered, copy of the listing for display.
    pub fn visible(&self, query: &str, collation: &Collation) -> Vec<FileRecord> {
        let sorted = sort_files(&self.files, &self.sort, collation);
        filter_files(&sorted, query)
    }
}

// ============================================================================
// Sorter
// ============================================================================

/// Return a copy of `files` ordered by `spec`.
///
/// The sort is stable: records with equal keys keep their input order in
/// both directions.
pub fn sort_files(files: &[FileRecord], spec: &SortSpec, collation: &Collation) -> Vec<FileRecord> {
    let mut sorted = files.to_vec();
    sorted.sort_by(|a, b| {
        let (a, b) = if spec.ascending { (a, b) } else { (b, a) };
        compare_by(&spec.key, a, b, collation)
    });
    sorted
}

fn compare_by(key: &SortKey, a: &FileRecord, b: &FileRecord, collation: &Collation) -> Ordering {
    match key {
        SortKey::Size => a.size.cmp(&b.size),
        SortKey::Modified => a.modified.cmp_instant(&b.modified),
        SortKey::Name => collation.compare(&a.name, &b.name),
        SortKey::Other(field) => collation.compare(&a.field_text(field), &b.field_text(field)),
    }
}

// ============================================================================
// Filter
// ============================================================================

/// Keep the files whose name contains `query`, ignoring case.
///
/// An empty query keeps everything. Only the name is searched.
pub fn filter_files(files: &[FileRecord], query: &str) -> Vec<FileRecord> {
    let query = query.to_lowercase();
    if query.is_empty() {
        return files.to_vec();
    }

    files
        .iter()
        .filter(|f| f.name.to_lowercase().contains(&query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, size: i64, modified: &str) -> FileRecord {
        FileRecord {
            name: name.to_string(),
            size,
            modified: modified.into(),
            sha256: "0".repeat(64),
        }
    }

    fn names(files: &[FileRecord]) -> Vec<&str> {
        files.iter().map(|f| f.name.as_str()).collect()
    }

    fn sample() -> Vec<FileRecord> {
        vec![
            file("notes.md", 700, "2024-02-10T08:00:00"),
            file("Archive.zip", 1_048_576, "2023-12-01T17:30:00"),
            file("école.pdf", 12, "2024-05-05T12:00:00"),
            file("data.csv", 4096, "2024-01-20T10:00:00"),
        ]
    }

    fn collation() -> Collation {
        Collation::new("fr-FR")
    }

    #[test]
    fn test_end_to_end_scenario() {
        let mut state = ListingState::default();
        state.replace(vec![
            file("b.txt", 500, "2024-01-02T00:00:00"),
            file("a.txt", 2048, "2024-01-01T00:00:00"),
        ]);
        let c = collation();

        assert_eq!(names(&state.visible("", &c)), ["a.txt", "b.txt"]);
        assert_eq!(names(&state.visible("a", &c)), ["a.txt"]);

        state.toggle_sort(SortKey::Size);
        assert_eq!(names(&state.visible("", &c)), ["b.txt", "a.txt"]);

        // Held list keeps server order.
        assert_eq!(names(state.files()), ["b.txt", "a.txt"]);
    }

    #[test]
    fn test_sort_by_name_is_collation_aware() {
        let sorted = sort_files(&sample(), &SortSpec::default(), &collation());
        assert_eq!(
            names(&sorted),
            ["Archive.zip", "data.csv", "école.pdf", "notes.md"]
        );
    }

    #[test]
    fn test_sort_by_size_is_monotonic() {
        let spec = SortSpec::new(SortKey::Size, true);
        let sorted = sort_files(&sample(), &spec, &collation());
        assert!(sorted.windows(2).all(|w| w[0].size <= w[1].size));
    }

    #[test]
    fn test_sort_by_modified() {
        let spec = SortSpec::new(SortKey::Modified, true);
        let sorted = sort_files(&sample(), &spec, &collation());
        assert_eq!(
            names(&sorted),
            ["Archive.zip", "data.csv", "notes.md", "école.pdf"]
        );
    }

    #[test]
    fn test_direction_flip_reverses() {
        let c = collation();
        for key in [SortKey::Name, SortKey::Size, SortKey::Modified] {
            let asc = sort_files(&sample(), &SortSpec::new(key.clone(), true), &c);
            let desc = sort_files(&asc, &SortSpec::new(key, false), &c);
            let mut reversed = asc.clone();
            reversed.reverse();
            assert_eq!(desc, reversed);
        }
    }

    #[test]
    fn test_sort_is_idempotent() {
        let c = collation();
        let spec = SortSpec::new(SortKey::Modified, false);
        let once = sort_files(&sample(), &spec, &c);
        let twice = sort_files(&once, &spec, &c);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let files = vec![file("A.txt", 1, "x"), file("a.txt", 1, "x"), file("á.txt", 1, "x")];
        let c = collation();
        for ascending in [true, false] {
            let sorted = sort_files(&files, &SortSpec::new(SortKey::Name, ascending), &c);
            assert_eq!(names(&sorted), ["A.txt", "a.txt", "á.txt"]);
        }
    }

    #[test]
    fn test_unknown_key_falls_back_to_strings() {
        let mut files = sample();
        files[0].sha256 = "f".repeat(64);
        files[1].sha256 = "a".repeat(64);
        let spec = SortSpec::new(SortKey::Other("sha256".into()), true);
        let sorted = sort_files(&files, &spec, &collation());
        assert_eq!(sorted[0].name, "école.pdf");
        assert_eq!(sorted.last().map(|f| f.name.as_str()), Some("notes.md"));

        let spec = SortSpec::new(SortKey::Other("owner".into()), true);
        assert_eq!(sort_files(&files, &spec, &collation()), files);
    }

    #[test]
    fn test_sort_empty() {
        assert!(sort_files(&[], &SortSpec::default(), &collation()).is_empty());
    }

    #[test]
    fn test_filter_empty_query_is_identity() {
        assert_eq!(filter_files(&sample(), ""), sample());
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let filtered = filter_files(&sample(), "ARCH");
        assert_eq!(names(&filtered), ["Archive.zip"]);
        assert!(filter_files(&sample(), "zzz").is_empty());
    }

    #[test]
    fn test_filter_contains_and_idempotent() {
        for query in ["a", "D", ".", "école"] {
            let once = filter_files(&sample(), query);
            let q = query.to_lowercase();
            assert!(once.iter().all(|f| f.name.to_lowercase().contains(&q)));
            assert_eq!(filter_files(&once, query), once);
        }
    }

    #[test]
    fn test_filter_searches_name_only() {
        assert!(filter_files(&sample(), "4096").is_empty());
    }
}
