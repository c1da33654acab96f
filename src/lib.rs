//! Batch updates for table widgets, expressed with mutable-array indices.
//!
//! A sectioned list widget applies a batch of structural edits with two
//! different index conventions: deletions and reloads use the positions from
//! before the batch, insertions use the positions from after it. A data source
//! backed by a `Vec` sees edits differently: every index is relative to the
//! array as left by the previous edit, and edits may arrive in any order.
//!
//! This crate records edits in the array convention and replays them on the
//! widget in the order and convention it requires:
//!
//! - [`TableView`] is the widget interface;
//! - [`TableViewExt::begin_ordered_updates`] starts an [`OrderedUpdates`]
//!   session whose methods mirror the widget's own;
//! - [`OrderedTableView`] keeps the session inside a wrapper for callers that
//!   receive edits through separate callbacks;
//! - [`Session`] does the recording and translation without any widget, and
//!   produces a [`Batch`].
//!
//! ```
//! use ordered_updates::{IndexPath, Operation, Session};
//!
//! // One section holding [A, B, C, D].
//! let mut session = Session::new([4]);
//! session.delete_rows(&[IndexPath::new(0, 1)], ()).unwrap(); // [A, C, D]
//! session.insert_rows(&[IndexPath::new(0, 1)], ()).unwrap(); // [A, X, C, D]
//! session.delete_rows(&[IndexPath::new(0, 3)], ()).unwrap(); // [A, X, C]
//!
//! let batch = session.finish();
//! assert_eq!(
//!     batch.operations(),
//!     &[
//!         Operation::delete_rows([IndexPath::new(0, 1), IndexPath::new(0, 3)], ()),
//!         Operation::insert_rows([IndexPath::new(0, 1)], ()),
//!     ]
//! );
//! ```
mod error;
mod index_path;
mod layout;
mod operation;
mod options;
mod ordered_table;
mod session;
mod table_view;
mod utils;

pub use error::*;
pub use index_path::*;
pub use operation::*;
pub use options::*;
pub use ordered_table::*;
pub use session::*;
pub use table_view::*;
