use crate::{
    layout::{Emit, Layout},
    Batch, EditKind, Error, IndexPath, Operation, Options, TableView, Targets,
};


/// Records edits expressed with mutable-array indices and translates them into
/// a [`Batch`] a table widget can replay.
///
/// Each recorded position is interpreted against the table as left by all
/// previously recorded operations, the way indices of a `Vec` shift after
/// `insert` and `remove`. Within one operation, positions form a set:
///
/// - delete and reload positions refer to the table before the operation;
/// - insert positions are the positions of the new items after the operation.
///
/// Recording validates positions against the simulated table. A rejected
/// operation leaves the session unchanged.
#[derive(Debug)]
pub struct Session<A> {
    layout: Layout,
    operations: Vec<Operation<A>>,
    options: Options,
}

impl<A> Session<A> {
    /// Starts a session on a table with `row_counts[i]` rows in section `i`.
    pub fn new(row_counts: impl IntoIterator<Item = usize>) -> Self {
        Self::with_options(row_counts, Options::default())
    }
    pub fn with_options(row_counts: impl IntoIterator<Item = usize>, options: Options) -> Self {
        Self {
            layout: Layout::new(row_counts),
            operations: Vec::new(),
            options,
        }
    }

    /// Starts a session on the rows currently displayed by `table`.
    pub fn from_table<T>(table: &T, options: Options) -> Self
    where
        T: TableView<Animation = A> + ?Sized,
    {
        let row_counts = (0..table.number_of_sections()).map(|section| table.number_of_rows(section));
        Self::with_options(row_counts, options)
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Number of sections once all recorded operations are applied.
    pub fn number_of_sections(&self) -> usize {
        self.layout.section_count()
    }

    /// Number of rows in `section` once all recorded operations are applied.
    pub fn number_of_rows(&self, section: usize) -> Option<usize> {
        self.layout.row_count(section)
    }

    /// Recorded operations, in request order.
    ///
    /// Targets are sorted and deduplicated.
    pub fn operations(&self) -> &[Operation<A>] {
        &self.operations
    }
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn record(&mut self, op: Operation<A>) -> Result<(), Error> {
        let mut op = op;
        op.targets.normalize();
        if op.targets.is_empty() {
            return Ok(());
        }
        let id = self.operations.len();
        let policy = self.options.nested_rows;
        let layout = &mut self.layout;
        match (op.kind, &op.targets) {
            (EditKind::Insert, Targets::Sections(s)) => layout.insert_sections(s, id)?,
            (EditKind::Delete, Targets::Sections(s)) => layout.delete_sections(s, id, policy)?,
            (EditKind::Reload, Targets::Sections(s)) => layout.reload_sections(s, id, policy)?,
            (EditKind::Insert, Targets::Rows(r)) => layout.insert_rows(r, id)?,
            (EditKind::Delete, Targets::Rows(r)) => layout.delete_rows(r, id)?,
            (EditKind::Reload, Targets::Rows(r)) => layout.reload_rows(r, id)?,
        }
        log::trace!("recorded #{id}: {op}");
        self.operations.push(op);
        Ok(())
    }

    pub fn insert_sections(&mut self, sections: &[usize], animation: A) -> Result<(), Error> {
        self.record(Operation::insert_sections(sections.iter().copied(), animation))
    }
    pub fn delete_sections(&mut self, sections: &[usize], animation: A) -> Result<(), Error> {
        self.record(Operation::delete_sections(sections.iter().copied(), animation))
    }
    pub fn reload_sections(&mut self, sections: &[usize], animation: A) -> Result<(), Error> {
        self.record(Operation::reload_sections(sections.iter().copied(), animation))
    }
    pub fn insert_rows(&mut self, index_paths: &[IndexPath], animation: A) -> Result<(), Error> {
        self.record(Operation::insert_rows(index_paths.iter().copied(), animation))
    }
    pub fn delete_rows(&mut self, index_paths: &[IndexPath], animation: A) -> Result<(), Error> {
        self.record(Operation::delete_rows(index_paths.iter().copied(), animation))
    }
    pub fn reload_rows(&mut self, index_paths: &[IndexPath], animation: A) -> Result<(), Error> {
        self.record(Operation::reload_rows(index_paths.iter().copied(), animation))
    }

    /// Ends the session and returns the operations in widget order.
    ///
    /// Deletions and reloads come first, then insertions. Operations of the
    /// same kind and scope with equal animations are merged, in order of
    /// first appearance, and their targets sorted.
    pub fn finish(self) -> Batch<A>
    where
        A: PartialEq,
    {
        let mut targets: Vec<Targets> = self
            .operations
            .iter()
            .map(|op| op.targets.empty_like())
            .collect();
        for (id, emit) in self.layout.emits() {
            match (emit, &mut targets[id]) {
                (Emit::Section(section), Targets::Sections(sections)) => sections.push(section),
                (Emit::Row(path), Targets::Rows(rows)) => rows.push(path),
                (emit, targets) => unreachable!("{emit:?} emitted for {targets}"),
            }
        }

        let recorded = self.operations.len();
        let mut removals = Batch::new();
        let mut insertions = Batch::new();
        for (op, targets) in self.operations.into_iter().zip(targets) {
            let op = Operation::new(op.kind, targets, op.animation);
            match op.kind {
                EditKind::Insert => insertions.push_coalesced(op),
                EditKind::Delete | EditKind::Reload => removals.push_coalesced(op),
            }
        }
        let mut batch = removals;
        batch.append(insertions);
        batch.normalize();
        log::debug!(
            "translated {recorded} recorded operations into {} table operations",
            batch.len()
        );
        batch
    }
}
