use std::fmt;

use derive_ex::Ex;
use parse_display::Display;
use serde::{Deserialize, Serialize};

use crate::{utils::to_set, IndexPath, TableView};


#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[display(style = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EditKind {
    Insert,
    Delete,
    Reload,
}

/// Positions an [`Operation`] applies to.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Targets {
    Sections(Vec<usize>),
    Rows(Vec<IndexPath>),
}

impl Targets {
    pub fn len(&self) -> usize {
        match self {
            Targets::Sections(sections) => sections.len(),
            Targets::Rows(rows) => rows.len(),
        }
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    pub fn is_sections(&self) -> bool {
        matches!(self, Targets::Sections(_))
    }
    pub fn is_rows(&self) -> bool {
        matches!(self, Targets::Rows(_))
    }

    /// Returns an empty value of the same scope.
    pub(crate) fn empty_like(&self) -> Self {
        match self {
            Targets::Sections(_) => Targets::Sections(Vec::new()),
            Targets::Rows(_) => Targets::Rows(Vec::new()),
        }
    }
    pub(crate) fn normalize(&mut self) {
        match self {
            Targets::Sections(sections) => *sections = to_set(sections),
            Targets::Rows(rows) => *rows = to_set(rows),
        }
    }

    /// Moves all positions of `other` into `self`.
    ///
    /// Returns `other` unchanged if the scopes differ.
    pub(crate) fn append(&mut self, other: Self) -> Result<(), Self> {
        match (self, other) {
            (Targets::Sections(this), Targets::Sections(mut other)) => this.append(&mut other),
            (Targets::Rows(this), Targets::Rows(mut other)) => this.append(&mut other),
            (_, other) => return Err(other),
        }
        Ok(())
    }
}

impl fmt::Display for Targets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
            write!(f, "[")?;
            for (i, item) in items.iter().enumerate() {
                if i != 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{item}")?;
            }
            write!(f, "]")
        }
        match self {
            Targets::Sections(sections) => {
                write!(f, "sections ")?;
                list(f, sections)
            }
            Targets::Rows(rows) => {
                write!(f, "rows ")?;
                list(f, rows)
            }
        }
    }
}

/// One structural edit of a table, together with its presentation hint.
///
/// The six native edit calls of a table widget (insert, delete and reload of
/// sections or rows) are all expressed by this type. `animation` is never
/// inspected; it is handed to the widget as is.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation<A> {
    pub kind: EditKind,
    pub targets: Targets,
    pub animation: A,
}

impl<A> Operation<A> {
    pub fn new(kind: EditKind, targets: Targets, animation: A) -> Self {
        Self {
            kind,
            targets,
            animation,
        }
    }
    pub fn insert_sections(sections: impl IntoIterator<Item = usize>, animation: A) -> Self {
        Self::sections(EditKind::Insert, sections, animation)
    }
    pub fn delete_sections(sections: impl IntoIterator<Item = usize>, animation: A) -> Self {
        Self::sections(EditKind::Delete, sections, animation)
    }
    pub fn reload_sections(sections: impl IntoIterator<Item = usize>, animation: A) -> Self {
        Self::sections(EditKind::Reload, sections, animation)
    }
    pub fn insert_rows(rows: impl IntoIterator<Item = IndexPath>, animation: A) -> Self {
        Self::rows(EditKind::Insert, rows, animation)
    }
    pub fn delete_rows(rows: impl IntoIterator<Item = IndexPath>, animation: A) -> Self {
        Self::rows(EditKind::Delete, rows, animation)
    }
    pub fn reload_rows(rows: impl IntoIterator<Item = IndexPath>, animation: A) -> Self {
        Self::rows(EditKind::Reload, rows, animation)
    }
    fn sections(kind: EditKind, sections: impl IntoIterator<Item = usize>, animation: A) -> Self {
        Self::new(
            kind,
            Targets::Sections(sections.into_iter().collect()),
            animation,
        )
    }
    fn rows(kind: EditKind, rows: impl IntoIterator<Item = IndexPath>, animation: A) -> Self {
        Self::new(kind, Targets::Rows(rows.into_iter().collect()), animation)
    }

    /// Calls the matching native edit method of `table`.
    ///
    /// This does not open an update block; see [`Batch::apply`].
    pub fn apply<T>(self, table: &mut T)
    where
        T: TableView<Animation = A> + ?Sized,
    {
        let animation = self.animation;
        match (self.kind, self.targets) {
            (EditKind::Insert, Targets::Sections(s)) => table.insert_sections(&s, animation),
            (EditKind::Delete, Targets::Sections(s)) => table.delete_sections(&s, animation),
            (EditKind::Reload, Targets::Sections(s)) => table.reload_sections(&s, animation),
            (EditKind::Insert, Targets::Rows(r)) => table.insert_rows(&r, animation),
            (EditKind::Delete, Targets::Rows(r)) => table.delete_rows(&r, animation),
            (EditKind::Reload, Targets::Rows(r)) => table.reload_rows(&r, animation),
        }
    }
}

impl<A> fmt::Display for Operation<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.targets)
    }
}

/// Operations in the order and index convention a table widget requires.
///
/// Deletions and reloads come first and use positions from before the update.
/// Insertions follow and use positions from after the update.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Ex)]
#[derive_ex(Default(bound()))]
#[serde(transparent)]
pub struct Batch<A> {
    operations: Vec<Operation<A>>,
}

impl<A> Batch<A> {
    pub fn new() -> Self {
        Self {
            operations: Vec::new(),
        }
    }
    pub fn len(&self) -> usize {
        self.operations.len()
    }
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
    pub fn operations(&self) -> &[Operation<A>] {
        &self.operations
    }
    pub fn iter(&self) -> std::slice::Iter<'_, Operation<A>> {
        self.operations.iter()
    }
    pub fn into_operations(self) -> Vec<Operation<A>> {
        self.operations
    }

    /// Adds `op`, merging it into an earlier operation of the same kind, scope
    /// and animation when there is one.
    ///
    /// Only valid for operations of the same phase: merging a deletion with an
    /// insertion's positions would change their meaning.
    pub(crate) fn push_coalesced(&mut self, op: Operation<A>)
    where
        A: PartialEq,
    {
        if op.targets.is_empty() {
            return;
        }
        let mut op = op;
        for target in &mut self.operations {
            if target.kind == op.kind && target.animation == op.animation {
                match target.targets.append(op.targets) {
                    Ok(()) => return,
                    Err(targets) => op.targets = targets,
                }
            }
        }
        self.operations.push(op);
    }
    pub(crate) fn append(&mut self, other: Self) {
        let mut other = other;
        self.operations.append(&mut other.operations);
    }
    pub(crate) fn normalize(&mut self) {
        for op in &mut self.operations {
            op.targets.normalize();
        }
    }

    /// Replays the operations on `table` inside one update block.
    ///
    /// An empty batch makes no calls at all.
    pub fn apply<T>(self, table: &mut T)
    where
        T: TableView<Animation = A> + ?Sized,
    {
        if self.is_empty() {
            return;
        }
        table.begin_updates();
        for op in self.operations {
            op.apply(table);
        }
        table.end_updates();
    }
}

impl<A> IntoIterator for Batch<A> {
    type Item = Operation<A>;
    type IntoIter = std::vec::IntoIter<Operation<A>>;

    fn into_iter(self) -> Self::IntoIter {
        self.operations.into_iter()
    }
}
impl<'a, A> IntoIterator for &'a Batch<A> {
    type Item = &'a Operation<A>;
    type IntoIter = std::slice::Iter<'a, Operation<A>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
impl<A> fmt::Display for Batch<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, op) in self.operations.iter().enumerate() {
            if i != 0 {
                write!(f, "; ")?;
            }
            write!(f, "{op}")?;
        }
        Ok(())
    }
}
