use parse_display::Display;

use crate::IndexPath;

/// Error returned when an ordered update cannot be recorded.
///
/// Every variant describes a mistake by the caller. A failed call leaves the
/// session exactly as it was before the call.
#[non_exhaustive]
#[derive(Display, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[display("an ordered update session is already open")]
    SessionAlreadyOpen,

    #[display("no ordered update session is open")]
    NoSession,

    #[display("section {index} is out of range (section count: {len})")]
    SectionOutOfRange { index: usize, len: usize },

    #[display("row {path} is out of range (row count: {len})")]
    RowOutOfRange { path: IndexPath, len: usize },

    #[display("section {0} is both reloaded and deleted")]
    SectionDeletedAndReloaded(usize),

    #[display("row {0} is both reloaded and deleted")]
    RowDeletedAndReloaded(IndexPath),

    /// A section-level delete or reload targets a section whose rows were
    /// already edited in the same session.
    #[display("section {0} contains rows edited in the same session")]
    RowsEditedInSection(usize),
}

impl std::error::Error for Error {}
