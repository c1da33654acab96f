#![allow(dead_code)]

use std::collections::BTreeSet;

use assert_call::call;
use ordered_updates::{EditKind, IndexPath, Operation, TableView, Targets};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Animation {
    Fade,
    Top,
    None,
}

/// Table widget stand-in that applies batch updates the way a native table
/// does.
///
/// `shown` is what the table displays. `source` is the data source it reads
/// when it needs new content: for inserted and reloaded rows and sections.
/// Kept rows are never re-read, so `shown == source` after an update only
/// holds if every edit was replayed at the right position.
pub struct FakeTable {
    pub shown: Vec<Vec<String>>,
    pub source: Vec<Vec<String>>,
    pending: Option<Pending>,
    pub update_count: usize,
}

#[derive(Default)]
struct Pending {
    insert_sections: BTreeSet<usize>,
    delete_sections: BTreeSet<usize>,
    reload_sections: BTreeSet<usize>,
    insert_rows: BTreeSet<IndexPath>,
    delete_rows: BTreeSet<IndexPath>,
    reload_rows: BTreeSet<IndexPath>,
    inserted: bool,
}

impl FakeTable {
    pub fn new(sections: &[&[&str]]) -> Self {
        let source: Vec<Vec<String>> = sections
            .iter()
            .map(|rows| rows.iter().map(|s| s.to_string()).collect())
            .collect();
        Self {
            shown: source.clone(),
            source,
            pending: None,
            update_count: 0,
        }
    }
    pub fn with_row_counts(row_counts: &[usize]) -> Self {
        let source: Vec<Vec<String>> = row_counts
            .iter()
            .enumerate()
            .map(|(s, &n)| (0..n).map(|r| format!("{s}.{r}")).collect())
            .collect();
        Self {
            shown: source.clone(),
            source,
            pending: None,
            update_count: 0,
        }
    }

    fn pending(&mut self) -> &mut Pending {
        self.pending
            .as_mut()
            .expect("edit outside of begin_updates/end_updates")
    }
    fn removal(&mut self) -> &mut Pending {
        let pending = self.pending();
        assert!(!pending.inserted, "deletion or reload after insertion");
        pending
    }

    fn apply(&mut self, p: Pending) {
        let old = &self.shown;
        for &s in p.delete_sections.iter().chain(&p.reload_sections) {
            assert!(s < old.len(), "section {s} out of range");
        }
        assert!(
            p.delete_sections.is_disjoint(&p.reload_sections),
            "section deleted and reloaded"
        );
        assert!(
            p.delete_rows.is_disjoint(&p.reload_rows),
            "row deleted and reloaded"
        );
        for path in p.delete_rows.iter().chain(&p.reload_rows) {
            assert!(path.section < old.len(), "row {path} out of range");
            assert!(path.row < old[path.section].len(), "row {path} out of range");
            assert!(
                !p.delete_sections.contains(&path.section)
                    && !p.reload_sections.contains(&path.section),
                "row {path} edited inside a deleted or reloaded section"
            );
        }

        // `None` marks content to read from the data source.
        let mut sections: Vec<Option<Vec<Option<String>>>> = Vec::new();
        for (s, rows) in old.iter().enumerate() {
            if p.delete_sections.contains(&s) {
                continue;
            }
            if p.reload_sections.contains(&s) {
                sections.push(None);
                continue;
            }
            let rows = rows
                .iter()
                .enumerate()
                .filter(|&(r, _)| !p.delete_rows.contains(&IndexPath::new(s, r)))
                .map(|(r, value)| {
                    if p.reload_rows.contains(&IndexPath::new(s, r)) {
                        None
                    } else {
                        Some(value.clone())
                    }
                })
                .collect();
            sections.push(Some(rows));
        }
        for &s in &p.insert_sections {
            assert!(s <= sections.len(), "inserted section {s} out of range");
            sections.insert(s, None);
        }
        for path in &p.insert_rows {
            let rows = sections
                .get_mut(path.section)
                .unwrap_or_else(|| panic!("inserted row {path} out of range"))
                .as_mut()
                .unwrap_or_else(|| panic!("row {path} inserted into a new section"));
            assert!(path.row <= rows.len(), "inserted row {path} out of range");
            rows.insert(path.row, None);
        }

        assert_eq!(sections.len(), self.source.len(), "number of sections");
        let source = &self.source;
        self.shown = sections
            .into_iter()
            .enumerate()
            .map(|(s, section)| match section {
                None => source[s].clone(),
                Some(rows) => {
                    assert_eq!(rows.len(), source[s].len(), "number of rows in section {s}");
                    rows.into_iter()
                        .enumerate()
                        .map(|(r, value)| value.unwrap_or_else(|| source[s][r].clone()))
                        .collect()
                }
            })
            .collect();
    }
}

fn record<T: Ord + Copy + std::fmt::Display>(set: &mut BTreeSet<T>, items: &[T]) {
    for &item in items {
        assert!(set.insert(item), "{item} passed twice");
    }
}

impl TableView for FakeTable {
    type Animation = Animation;

    fn number_of_sections(&self) -> usize {
        self.shown.len()
    }
    fn number_of_rows(&self, section: usize) -> usize {
        self.shown[section].len()
    }
    fn begin_updates(&mut self) {
        assert!(self.pending.is_none(), "nested begin_updates");
        self.pending = Some(Pending::default());
        call!("begin");
    }
    fn end_updates(&mut self) {
        let pending = self.pending.take().expect("end_updates without begin_updates");
        self.apply(pending);
        self.update_count += 1;
        call!("end");
    }
    fn insert_sections(&mut self, sections: &[usize], animation: Animation) {
        let pending = self.pending();
        pending.inserted = true;
        record(&mut pending.insert_sections, sections);
        call!("insert sections {:?} {:?}", sections, animation);
    }
    fn delete_sections(&mut self, sections: &[usize], animation: Animation) {
        record(&mut self.removal().delete_sections, sections);
        call!("delete sections {:?} {:?}", sections, animation);
    }
    fn reload_sections(&mut self, sections: &[usize], animation: Animation) {
        record(&mut self.removal().reload_sections, sections);
        call!("reload sections {:?} {:?}", sections, animation);
    }
    fn insert_rows(&mut self, index_paths: &[IndexPath], animation: Animation) {
        let pending = self.pending();
        pending.inserted = true;
        record(&mut pending.insert_rows, index_paths);
        call!("insert rows {} {:?}", paths(index_paths), animation);
    }
    fn delete_rows(&mut self, index_paths: &[IndexPath], animation: Animation) {
        record(&mut self.removal().delete_rows, index_paths);
        call!("delete rows {} {:?}", paths(index_paths), animation);
    }
    fn reload_rows(&mut self, index_paths: &[IndexPath], animation: Animation) {
        record(&mut self.removal().reload_rows, index_paths);
        call!("reload rows {} {:?}", paths(index_paths), animation);
    }
}

/// Applies `op` to a data source with mutable-array semantics.
///
/// Inserted rows get labels from `next_label`; reloaded rows get a new label
/// so that a missing reload shows up as stale content.
pub fn apply_to_source(
    source: &mut Vec<Vec<String>>,
    op: &Operation<Animation>,
    next_label: &mut impl FnMut() -> String,
) {
    match (&op.kind, &op.targets) {
        (EditKind::Insert, Targets::Sections(sections)) => {
            for &s in &sorted(sections) {
                source.insert(s, Vec::new());
            }
        }
        (EditKind::Delete, Targets::Sections(sections)) => {
            for &s in sorted(sections).iter().rev() {
                source.remove(s);
            }
        }
        (EditKind::Reload, Targets::Sections(sections)) => {
            for &s in &sorted(sections) {
                for row in &mut source[s] {
                    *row = format!("{row}'");
                }
            }
        }
        (EditKind::Insert, Targets::Rows(paths)) => {
            for path in &sorted(paths) {
                source[path.section].insert(path.row, next_label());
            }
        }
        (EditKind::Delete, Targets::Rows(paths)) => {
            for path in sorted(paths).iter().rev() {
                source[path.section].remove(path.row);
            }
        }
        (EditKind::Reload, Targets::Rows(paths)) => {
            for path in &sorted(paths) {
                let row = &mut source[path.section][path.row];
                *row = format!("{row}'");
            }
        }
    }
}

fn paths(index_paths: &[IndexPath]) -> String {
    let items: Vec<String> = index_paths.iter().map(|p| p.to_string()).collect();
    format!("[{}]", items.join(", "))
}

fn sorted<T: Ord + Copy>(items: &[T]) -> Vec<T> {
    let mut items = items.to_vec();
    items.sort();
    items.dedup();
    items
}

pub fn labels(source: &[Vec<String>]) -> Vec<Vec<&str>> {
    source
        .iter()
        .map(|rows| rows.iter().map(|s| s.as_str()).collect())
        .collect()
}
