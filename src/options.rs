use derive_ex::Ex;
use parse_display::{Display, FromStr};
use serde::{Deserialize, Serialize};

/// What happens to row edits when their section is deleted or reloaded later
/// in the same session.
#[derive(
    Clone, Copy, Debug, Display, FromStr, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[display(style = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum NestedRowPolicy {
    /// Fail the section operation with [`Error::RowsEditedInSection`](crate::Error::RowsEditedInSection).
    #[default]
    Reject,
    /// Drop the row edits; the section operation already covers them.
    Discard,
}

/// Translator configuration.
///
/// Missing fields take their default when deserialized.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Ex)]
#[derive_ex(Default)]
#[default(Self::new())]
#[serde(default)]
pub struct Options {
    pub nested_rows: NestedRowPolicy,
}

impl Options {
    pub const fn new() -> Self {
        Self {
            nested_rows: NestedRowPolicy::Reject,
        }
    }
    pub const fn with_nested_rows(mut self, nested_rows: NestedRowPolicy) -> Self {
        self.nested_rows = nested_rows;
        self
    }
}
