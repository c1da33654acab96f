use crate::{Error, IndexPath, Operation, Options, Session, TableView};


/// Owns a table and at most one pending ordered update session.
///
/// Useful when edits arrive through separate callbacks, such as change
/// notifications of the data source, so no session value can be kept on the
/// stack between them. Calls fail with [`Error::SessionAlreadyOpen`] or
/// [`Error::NoSession`] when made out of order.
pub struct OrderedTableView<T: TableView> {
    table: T,
    session: Option<Session<T::Animation>>,
    options: Options,
}

impl<T: TableView> OrderedTableView<T> {
    pub fn new(table: T) -> Self {
        Self::with_options(table, Options::default())
    }
    pub fn with_options(table: T, options: Options) -> Self {
        Self {
            table,
            session: None,
            options,
        }
    }

    pub fn get_ref(&self) -> &T {
        &self.table
    }
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.table
    }
    pub fn into_inner(self) -> T {
        self.table
    }
    pub fn options(&self) -> &Options {
        &self.options
    }
    pub fn set_options(&mut self, options: Options) {
        self.options = options;
    }

    pub fn is_updating(&self) -> bool {
        self.session.is_some()
    }
    pub fn session(&self) -> Option<&Session<T::Animation>> {
        self.session.as_ref()
    }
    fn session_mut(&mut self) -> Result<&mut Session<T::Animation>, Error> {
        self.session.as_mut().ok_or(Error::NoSession)
    }

    pub fn begin_ordered_updates(&mut self) -> Result<(), Error> {
        if self.session.is_some() {
            return Err(Error::SessionAlreadyOpen);
        }
        self.session = Some(Session::from_table(&self.table, self.options.clone()));
        Ok(())
    }

    /// Replays the pending edits on the table and closes the session.
    pub fn end_ordered_updates(&mut self) -> Result<(), Error>
    where
        T::Animation: PartialEq,
    {
        let session = self.session.take().ok_or(Error::NoSession)?;
        session.finish().apply(&mut self.table);
        Ok(())
    }

    /// Closes the session without touching the table and returns it.
    pub fn cancel_ordered_updates(&mut self) -> Result<Session<T::Animation>, Error> {
        self.session.take().ok_or(Error::NoSession)
    }

    pub fn record(&mut self, op: Operation<T::Animation>) -> Result<(), Error> {
        self.session_mut()?.record(op)
    }

    pub fn insert_ordered_sections(
        &mut self,
        sections: &[usize],
        animation: T::Animation,
    ) -> Result<(), Error> {
        self.session_mut()?.insert_sections(sections, animation)
    }
    pub fn delete_ordered_sections(
        &mut self,
        sections: &[usize],
        animation: T::Animation,
    ) -> Result<(), Error> {
        self.session_mut()?.delete_sections(sections, animation)
    }
    pub fn reload_ordered_sections(
        &mut self,
        sections: &[usize],
        animation: T::Animation,
    ) -> Result<(), Error> {
        self.session_mut()?.reload_sections(sections, animation)
    }
    pub fn insert_ordered_rows(
        &mut self,
        index_paths: &[IndexPath],
        animation: T::Animation,
    ) -> Result<(), Error> {
        self.session_mut()?.insert_rows(index_paths, animation)
    }
    pub fn delete_ordered_rows(
        &mut self,
        index_paths: &[IndexPath],
        animation: T::Animation,
    ) -> Result<(), Error> {
        self.session_mut()?.delete_rows(index_paths, animation)
    }
    pub fn reload_ordered_rows(
        &mut self,
        index_paths: &[IndexPath],
        animation: T::Animation,
    ) -> Result<(), Error> {
        self.session_mut()?.reload_rows(index_paths, animation)
    }
}
