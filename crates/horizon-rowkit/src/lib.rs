//! Horizon RowKit - list-view adapter widgets for Horizon UI hosts.
//!
//! RowKit is a thin glue layer between a hosting list view and the
//! controller that feeds it. It ships two independent pieces:
//!
//! - **[`model::ListConverter`]**: lets one controller drive a list view
//!   without subclassing. The host forwards its standard callbacks; the
//!   converter dispatches override-first against registered closures and
//!   falls back to row-model-driven behavior.
//! - **[`widget::refresh`]**: a pull-to-refresh indicator (view + animator)
//!   that maps an external gesture controller's state transitions onto a
//!   spinning-ring animation and caption updates.
//!
//! There is no rendering, no I/O and no background work in this crate;
//! everything runs synchronously on the UI execution context in direct
//! response to host callbacks.
//!
//! # Example
//!
//! ```no_run
//! use horizon_rowkit::prelude::*;
//!
//! const TEXT_ROW: RendererKind = RendererKind::new("TextRow");
//!
//! let mut converter = ListConverter::new();
//! converter.set_rows(vec![
//!     RowModel::new(TEXT_ROW, RowData::from("Profile")),
//!     RowModel::new(TEXT_ROW, RowData::from("Sign out")).with_height(60.0),
//! ]);
//! assert_eq!(converter.row_count(), 2);
//! ```

pub mod error;
pub mod geometry;
pub mod model;
pub mod prelude;
pub mod signal;
pub mod widget;

pub use error::{Result, RowKitError};
