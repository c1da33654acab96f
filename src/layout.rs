use slabmap::SlabMap;

use crate::{
    utils::{check_insert_positions, group_by_section},
    Error, IndexPath, NestedRowPolicy,
};


/// Index of the recorded operation responsible for a change.
pub(crate) type OpId = usize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Origin {
    /// Present before the session, at this index.
    Original(usize),
    Inserted(OpId),
}

#[derive(Debug)]
struct Row {
    origin: Origin,
    reloaded_by: Option<OpId>,
}

#[derive(Debug)]
struct Section {
    origin: Origin,
    reloaded_by: Option<OpId>,
    rows: Vec<usize>,
    deleted_rows: Vec<(usize, OpId)>,
}
impl Section {
    fn original(index: usize, row_count: usize, row_slots: &mut SlabMap<Row>) -> Self {
        let rows = (0..row_count)
            .map(|row| {
                row_slots.insert(Row {
                    origin: Origin::Original(row),
                    reloaded_by: None,
                })
            })
            .collect();
        Self {
            origin: Origin::Original(index),
            reloaded_by: None,
            rows,
            deleted_rows: Vec::new(),
        }
    }
    fn inserted(op: OpId) -> Self {
        Self {
            origin: Origin::Inserted(op),
            reloaded_by: None,
            rows: Vec::new(),
            deleted_rows: Vec::new(),
        }
    }

    /// Row edits inside this section are already covered by a section-level
    /// insertion or reload.
    fn absorbs_rows(&self) -> bool {
        matches!(self.origin, Origin::Inserted(_)) || self.reloaded_by.is_some()
    }
    fn row_edit_count(&self, row_slots: &SlabMap<Row>) -> usize {
        let edited = self
            .rows
            .iter()
            .filter(|&&key| {
                let row = &row_slots[key];
                matches!(row.origin, Origin::Inserted(_)) || row.reloaded_by.is_some()
            })
            .count();
        edited + self.deleted_rows.len()
    }
}

/// A position in the widget's index convention, owned by one recorded operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Emit {
    Section(usize),
    Row(IndexPath),
}

/// Simulated two-level array of sections and rows.
///
/// Every section and row is a slot with a stable identity (its slab key).
/// Slots remember where they came from, so the position a table widget
/// expects can be derived for each of them at any time:
///
/// - deleted and reloaded slots that existed before the session use their
///   original index;
/// - slots inserted during the session use their current index.
#[derive(Debug)]
pub(crate) struct Layout {
    sections: Vec<usize>,
    section_slots: SlabMap<Section>,
    row_slots: SlabMap<Row>,
    deleted_sections: Vec<(usize, OpId)>,
}

impl Layout {
    pub fn new(row_counts: impl IntoIterator<Item = usize>) -> Self {
        let mut section_slots = SlabMap::new();
        let mut row_slots = SlabMap::new();
        let sections = row_counts
            .into_iter()
            .enumerate()
            .map(|(index, row_count)| {
                section_slots.insert(Section::original(index, row_count, &mut row_slots))
            })
            .collect();
        Self {
            sections,
            section_slots,
            row_slots,
            deleted_sections: Vec::new(),
        }
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }
    pub fn row_count(&self, section: usize) -> Option<usize> {
        let key = *self.sections.get(section)?;
        Some(self.section_slots[key].rows.len())
    }

    /// Identity tokens of all live slots, section by section.
    #[cfg(test)]
    pub fn tokens(&self) -> Vec<(usize, Vec<usize>)> {
        self.sections
            .iter()
            .map(|&key| (key, self.section_slots[key].rows.clone()))
            .collect()
    }

    fn section(&self, index: usize) -> Result<&Section, Error> {
        match self.sections.get(index) {
            Some(&key) => Ok(&self.section_slots[key]),
            None => Err(Error::SectionOutOfRange {
                index,
                len: self.sections.len(),
            }),
        }
    }
    fn row(&self, path: IndexPath) -> Result<&Row, Error> {
        let section = self.section(path.section)?;
        match section.rows.get(path.row) {
            Some(&key) => Ok(&self.row_slots[key]),
            None => Err(Error::RowOutOfRange {
                path,
                len: section.rows.len(),
            }),
        }
    }

    /// `sections` must be sorted and free of duplicates.
    pub fn insert_sections(&mut self, sections: &[usize], op: OpId) -> Result<(), Error> {
        let len = self.sections.len();
        check_insert_positions(sections, len)
            .map_err(|index| Error::SectionOutOfRange { index, len })?;
        for &index in sections {
            let key = self.section_slots.insert(Section::inserted(op));
            self.sections.insert(index, key);
        }
        Ok(())
    }

    /// `sections` must be sorted and free of duplicates.
    pub fn delete_sections(
        &mut self,
        sections: &[usize],
        op: OpId,
        policy: NestedRowPolicy,
    ) -> Result<(), Error> {
        for &index in sections {
            let section = self.section(index)?;
            if let Origin::Inserted(_) = section.origin {
                continue;
            }
            if section.reloaded_by.is_some() {
                return Err(Error::SectionDeletedAndReloaded(index));
            }
            if policy == NestedRowPolicy::Reject && section.row_edit_count(&self.row_slots) != 0 {
                return Err(Error::RowsEditedInSection(index));
            }
        }
        for &index in sections.iter().rev() {
            let key = self.sections.remove(index);
            let Some(section) = self.section_slots.remove(key) else {
                unreachable!("section slot {key} is missing");
            };
            let discarded = section.row_edit_count(&self.row_slots);
            for row in section.rows {
                self.row_slots.remove(row);
            }
            if let Origin::Original(original) = section.origin {
                if discarded != 0 {
                    log::debug!("discarding {discarded} row edits in deleted section {original}");
                }
                self.deleted_sections.push((original, op));
            }
        }
        Ok(())
    }

    /// `sections` must be sorted and free of duplicates.
    pub fn reload_sections(
        &mut self,
        sections: &[usize],
        op: OpId,
        policy: NestedRowPolicy,
    ) -> Result<(), Error> {
        for &index in sections {
            let section = self.section(index)?;
            if section.absorbs_rows() {
                continue;
            }
            if policy == NestedRowPolicy::Reject && section.row_edit_count(&self.row_slots) != 0 {
                return Err(Error::RowsEditedInSection(index));
            }
        }
        for &index in sections {
            let section = &mut self.section_slots[self.sections[index]];
            if section.absorbs_rows() {
                continue;
            }
            section.reloaded_by = Some(op);
            let discarded = section.row_edit_count(&self.row_slots);
            if discarded != 0 {
                log::debug!("discarding {discarded} row edits in reloaded section {index}");
            }
        }
        Ok(())
    }

    /// `paths` must be sorted and free of duplicates.
    pub fn insert_rows(&mut self, paths: &[IndexPath], op: OpId) -> Result<(), Error> {
        let groups = group_by_section(paths);
        for (section, rows) in &groups {
            let len = self.section(*section)?.rows.len();
            check_insert_positions(rows, len).map_err(|row| Error::RowOutOfRange {
                path: IndexPath::new(*section, row),
                len,
            })?;
        }
        for (section, rows) in groups {
            let section_key = self.sections[section];
            for row in rows {
                let key = self.row_slots.insert(Row {
                    origin: Origin::Inserted(op),
                    reloaded_by: None,
                });
                self.section_slots[section_key].rows.insert(row, key);
            }
        }
        Ok(())
    }

    /// `paths` must be sorted and free of duplicates.
    pub fn delete_rows(&mut self, paths: &[IndexPath], op: OpId) -> Result<(), Error> {
        for &path in paths {
            let row = self.row(path)?;
            if row.reloaded_by.is_some() && !self.section(path.section)?.absorbs_rows() {
                return Err(Error::RowDeletedAndReloaded(path));
            }
        }
        for &path in paths.iter().rev() {
            let section = &mut self.section_slots[self.sections[path.section]];
            let key = section.rows.remove(path.row);
            let Some(row) = self.row_slots.remove(key) else {
                unreachable!("row slot {key} is missing");
            };
            if let Origin::Original(original) = row.origin {
                if !section.absorbs_rows() {
                    section.deleted_rows.push((original, op));
                }
            }
        }
        Ok(())
    }

    /// `paths` must be sorted and free of duplicates.
    pub fn reload_rows(&mut self, paths: &[IndexPath], op: OpId) -> Result<(), Error> {
        for &path in paths {
            self.row(path)?;
        }
        for &path in paths {
            let section = &self.section_slots[self.sections[path.section]];
            if section.absorbs_rows() {
                continue;
            }
            let row = &mut self.row_slots[section.rows[path.row]];
            if let (Origin::Original(_), None) = (row.origin, row.reloaded_by) {
                row.reloaded_by = Some(op);
            }
        }
        Ok(())
    }

    /// Widget-convention positions of every pending change, with the operation
    /// each one belongs to.
    ///
    /// Changes cancelled within the session (an inserted slot deleted again, a
    /// reload of an inserted slot, row edits covered by a section operation)
    /// produce nothing.
    pub fn emits(&self) -> Vec<(OpId, Emit)> {
        let mut emits = Vec::new();
        for &(original, op) in &self.deleted_sections {
            emits.push((op, Emit::Section(original)));
        }
        for (section_index, &section_key) in self.sections.iter().enumerate() {
            let section = &self.section_slots[section_key];
            let original_section = match section.origin {
                Origin::Inserted(op) => {
                    emits.push((op, Emit::Section(section_index)));
                    continue;
                }
                Origin::Original(original) => original,
            };
            if let Some(op) = section.reloaded_by {
                emits.push((op, Emit::Section(original_section)));
                continue;
            }
            for &(original_row, op) in &section.deleted_rows {
                emits.push((op, Emit::Row(IndexPath::new(original_section, original_row))));
            }
            for (row_index, &row_key) in section.rows.iter().enumerate() {
                let row = &self.row_slots[row_key];
                match (row.origin, row.reloaded_by) {
                    (Origin::Inserted(op), _) => {
                        emits.push((op, Emit::Row(IndexPath::new(section_index, row_index))));
                    }
                    (Origin::Original(original_row), Some(op)) => {
                        emits.push((op, Emit::Row(IndexPath::new(original_section, original_row))));
                    }
                    (Origin::Original(_), None) => {}
                }
            }
        }
        emits
    }
}
