//! Row models and the converter that dispatches over them.
//!
//! The converter side of rowkit follows a flat Model/Converter split:
//!
//! - `RowModel` describes one row: payload, renderer kind, height and an
//!   optional explicit reuse identifier.
//! - `ListConverter` owns the row sequence plus per-callback override
//!   closures, and answers the host's standard list-view callbacks
//!   override-first with a model-driven fallback.
//! - `RendererRegistry` and the `ReusePool`/`RowRenderer` traits are the
//!   seams to the host's rendering side.
//!
//! # Core Types
//!
//! - `RowData`: type-erased per-row payload
//! - `RowModel`: one row's description
//! - `ListConverter`: the callback dispatcher
//! - `ListCallback` / `CallbackOverride`: the closed callback set and its
//!   typed override closures
//! - `RowRenderer` / `ReusePool` / `ListHost`: host-side seams

mod converter;
mod data;
mod renderer;
mod row;

pub use converter::{
    CallbackOverride, ConverterSignals, ListCallback, ListConverter, ListHost, RowCellFn,
    RowHeightFn, RowSelectedFn, ScrolledFn, separator_visible,
};
pub use data::RowData;
pub use renderer::{
    RendererFactory, RendererKind, RendererPool, RendererRegistry, ReusePool, RowEventDelegate,
    RowRenderer,
};
pub use row::{DEFAULT_ROW_HEIGHT, RowModel};
