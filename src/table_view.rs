use crate::{Error, IndexPath, Operation, Options, Session};


/// Native batch-update interface of a sectioned list widget.
///
/// Between [`begin_updates`](Self::begin_updates) and
/// [`end_updates`](Self::end_updates), delete and reload positions refer to
/// the rows displayed before the update, and insert positions refer to the
/// rows displayed after it.
pub trait TableView {
    /// Presentation hint passed through to the edit calls.
    type Animation;

    /// Number of sections currently displayed.
    fn number_of_sections(&self) -> usize;

    /// Number of rows currently displayed in `section`.
    fn number_of_rows(&self, section: usize) -> usize;

    fn begin_updates(&mut self);
    fn end_updates(&mut self);

    fn insert_sections(&mut self, sections: &[usize], animation: Self::Animation);
    fn delete_sections(&mut self, sections: &[usize], animation: Self::Animation);
    fn reload_sections(&mut self, sections: &[usize], animation: Self::Animation);

    fn insert_rows(&mut self, index_paths: &[IndexPath], animation: Self::Animation);
    fn delete_rows(&mut self, index_paths: &[IndexPath], animation: Self::Animation);
    fn reload_rows(&mut self, index_paths: &[IndexPath], animation: Self::Animation);
}

/// Ordered counterparts of the [`TableView`] batch-update calls.
pub trait TableViewExt: TableView {
    /// Starts recording edits expressed with mutable-array indices.
    ///
    /// The returned session borrows the table until
    /// [`end_ordered_updates`](OrderedUpdates::end_ordered_updates) replays
    /// the edits. Dropping it discards them.
    fn begin_ordered_updates(&mut self) -> OrderedUpdates<'_, Self> {
        self.begin_ordered_updates_with(Options::default())
    }
    fn begin_ordered_updates_with(&mut self, options: Options) -> OrderedUpdates<'_, Self> {
        OrderedUpdates::new(self, options)
    }
}
impl<T: TableView + ?Sized> TableViewExt for T {}

/// Ordered update session on a borrowed table.
///
/// Method names and arguments mirror [`TableView`], with indices interpreted
/// like those of a `Vec` being edited in call order. See [`Session`] for the
/// exact rules.
pub struct OrderedUpdates<'a, T: TableView + ?Sized> {
    table: &'a mut T,
    session: Session<T::Animation>,
}

impl<'a, T: TableView + ?Sized> OrderedUpdates<'a, T> {
    pub fn new(table: &'a mut T, options: Options) -> Self {
        let session = Session::from_table(&*table, options);
        Self { table, session }
    }

    pub fn table(&self) -> &T {
        self.table
    }
    pub fn session(&self) -> &Session<T::Animation> {
        &self.session
    }
    pub fn record(&mut self, op: Operation<T::Animation>) -> Result<(), Error> {
        self.session.record(op)
    }

    pub fn insert_ordered_sections(
        &mut self,
        sections: &[usize],
        animation: T::Animation,
    ) -> Result<(), Error> {
        self.session.insert_sections(sections, animation)
    }
    pub fn delete_ordered_sections(
        &mut self,
        sections: &[usize],
        animation: T::Animation,
    ) -> Result<(), Error> {
        self.session.delete_sections(sections, animation)
    }
    pub fn reload_ordered_sections(
        &mut self,
        sections: &[usize],
        animation: T::Animation,
    ) -> Result<(), Error> {
        self.session.reload_sections(sections, animation)
    }
    pub fn insert_ordered_rows(
        &mut self,
        index_paths: &[IndexPath],
        animation: T::Animation,
    ) -> Result<(), Error> {
        self.session.insert_rows(index_paths, animation)
    }
    pub fn delete_ordered_rows(
        &mut self,
        index_paths: &[IndexPath],
        animation: T::Animation,
    ) -> Result<(), Error> {
        self.session.delete_rows(index_paths, animation)
    }
    pub fn reload_ordered_rows(
        &mut self,
        index_paths: &[IndexPath],
        animation: T::Animation,
    ) -> Result<(), Error> {
        self.session.reload_rows(index_paths, animation)
    }

    /// Replays the recorded edits on the table inside one update block.
    ///
    /// Nothing is called on the table when no edit remains after translation.
    pub fn end_ordered_updates(self)
    where
        T::Animation: PartialEq,
    {
        self.session.finish().apply(self.table);
    }
}
