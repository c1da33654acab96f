use assert_call::call;

use crate::{IndexPath, TableView, Targets};

/// Table that reports every call through `assert_call`.
///
/// Row counts stay as given; the table never applies the edits.
pub struct RecordingTable {
    row_counts: Vec<usize>,
}

impl RecordingTable {
    pub fn new(row_counts: impl IntoIterator<Item = usize>) -> Self {
        Self {
            row_counts: row_counts.into_iter().collect(),
        }
    }
}

impl TableView for RecordingTable {
    type Animation = &'static str;

    fn number_of_sections(&self) -> usize {
        self.row_counts.len()
    }
    fn number_of_rows(&self, section: usize) -> usize {
        self.row_counts[section]
    }
    fn begin_updates(&mut self) {
        call!("begin");
    }
    fn end_updates(&mut self) {
        call!("end");
    }
    fn insert_sections(&mut self, sections: &[usize], animation: &'static str) {
        call!("insert {} {}", Targets::Sections(sections.to_vec()), animation);
    }
    fn delete_sections(&mut self, sections: &[usize], animation: &'static str) {
        call!("delete {} {}", Targets::Sections(sections.to_vec()), animation);
    }
    fn reload_sections(&mut self, sections: &[usize], animation: &'static str) {
        call!("reload {} {}", Targets::Sections(sections.to_vec()), animation);
    }
    fn insert_rows(&mut self, index_paths: &[IndexPath], animation: &'static str) {
        call!("insert {} {}", Targets::Rows(index_paths.to_vec()), animation);
    }
    fn delete_rows(&mut self, index_paths: &[IndexPath], animation: &'static str) {
        call!("delete {} {}", Targets::Rows(index_paths.to_vec()), animation);
    }
    fn reload_rows(&mut self, index_paths: &[IndexPath], animation: &'static str) {
        call!("reload {} {}", Targets::Rows(index_paths.to_vec()), animation);
    }
}
