//! The list converter: override-first callback dispatch over row models.
//!
//! A `ListConverter` lets a single controller drive a list view without
//! subclassing anything. The host forwards its standard callbacks (row
//! count, row height, cell request, selection, scroll) to the converter,
//! which first consults a registry of per-callback override closures and
//! falls back to model-driven behavior when no override answers.
//!
//! Callbacks are a closed enumeration ([`ListCallback`]); overrides are
//! typed per-callback closures ([`CallbackOverride`]), so a registration
//! can never target a callback that does not exist.
//!
//! The hosting list view is never stored. Every dispatch receives the
//! host as an explicit `&mut dyn ListHost`, which keeps ownership flat
//! and makes the dispatch surface obvious at the call site.
//!
//! # Example
//!
//! ```ignore
//! use horizon_rowkit::model::{
//!     CallbackOverride, ListConverter, RendererKind, RowData, RowModel,
//! };
//!
//! const TEXT_ROW: RendererKind = RendererKind::new("TextRow");
//!
//! let mut converter = ListConverter::new();
//! converter.register_renderer(TEXT_ROW, || Box::new(TextRowRenderer::default()));
//! converter.set_rows(vec![
//!     RowModel::new(TEXT_ROW, RowData::from("Profile")),
//!     RowModel::new(TEXT_ROW, RowData::from("Sign out")).with_height(60.0),
//! ]);
//!
//! // Tall first row, everything else model-driven.
//! converter.register(CallbackOverride::row_height(|_host, index| {
//!     (index == 0).then_some(96.0)
//! }));
//! ```

use crate::error::{Result, RowKitError};
use crate::geometry::{Point, Rect};
use crate::signal::Signal;

use super::renderer::{RendererKind, RendererRegistry, ReusePool, RowEventDelegate, RowRenderer};
use super::row::RowModel;

/// The list-view surface a converter dispatches against.
///
/// Implemented by the hosting list view. The converter only reads scroll
/// geometry and borrows the renderer reuse pool; it never retains the
/// host beyond a single dispatch.
pub trait ListHost {
    /// The host's current viewport rectangle.
    fn viewport(&self) -> Rect;

    /// The host's current scroll offset.
    fn scroll_offset(&self) -> Point;

    /// The host-owned renderer reuse pool.
    fn reuse_pool(&mut self) -> &mut dyn ReusePool;
}

/// The closed set of host callbacks a converter dispatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListCallback {
    /// Per-row height query.
    RowHeight,
    /// Per-row render request.
    RowCell,
    /// Row selection notification.
    RowSelected,
    /// Scroll-position notification.
    Scrolled,
}

/// Handler signature for [`ListCallback::RowHeight`].
pub type RowHeightFn = Box<dyn Fn(&mut dyn ListHost, usize) -> Option<f32> + Send + Sync>;
/// Handler signature for [`ListCallback::RowCell`].
pub type RowCellFn =
    Box<dyn Fn(&mut dyn ListHost, usize) -> Option<Box<dyn RowRenderer>> + Send + Sync>;
/// Handler signature for [`ListCallback::RowSelected`].
pub type RowSelectedFn = Box<dyn Fn(&mut dyn ListHost, usize) + Send + Sync>;
/// Handler signature for [`ListCallback::Scrolled`].
pub type ScrolledFn = Box<dyn Fn(&mut dyn ListHost) + Send + Sync>;

/// A typed override closure for one callback kind.
///
/// `RowHeight` and `RowCell` handlers may return `None` to decline, in
/// which case dispatch falls back to the model-driven path. `RowSelected`
/// and `Scrolled` have no fallback; without an override they are no-ops.
pub enum CallbackOverride {
    /// Answer height queries.
    RowHeight(RowHeightFn),
    /// Answer cell requests.
    RowCell(RowCellFn),
    /// Observe row selection.
    RowSelected(RowSelectedFn),
    /// Observe scrolling.
    Scrolled(ScrolledFn),
}

impl CallbackOverride {
    /// Wrap a height handler.
    pub fn row_height<F>(f: F) -> Self
    where
        F: Fn(&mut dyn ListHost, usize) -> Option<f32> + Send + Sync + 'static,
    {
        Self::RowHeight(Box::new(f))
    }

    /// Wrap a cell handler.
    pub fn row_cell<F>(f: F) -> Self
    where
        F: Fn(&mut dyn ListHost, usize) -> Option<Box<dyn RowRenderer>> + Send + Sync + 'static,
    {
        Self::RowCell(Box::new(f))
    }

    /// Wrap a selection handler.
    pub fn row_selected<F>(f: F) -> Self
    where
        F: Fn(&mut dyn ListHost, usize) + Send + Sync + 'static,
    {
        Self::RowSelected(Box::new(f))
    }

    /// Wrap a scroll handler.
    pub fn scrolled<F>(f: F) -> Self
    where
        F: Fn(&mut dyn ListHost) + Send + Sync + 'static,
    {
        Self::Scrolled(Box::new(f))
    }

    /// The callback kind this override answers.
    pub fn callback(&self) -> ListCallback {
        match self {
            Self::RowHeight(_) => ListCallback::RowHeight,
            Self::RowCell(_) => ListCallback::RowCell,
            Self::RowSelected(_) => ListCallback::RowSelected,
            Self::Scrolled(_) => ListCallback::Scrolled,
        }
    }
}

/// One slot per callback kind; `register` overwrites, nothing removes.
#[derive(Default)]
struct OverrideTable {
    row_height: Option<RowHeightFn>,
    row_cell: Option<RowCellFn>,
    row_selected: Option<RowSelectedFn>,
    scrolled: Option<ScrolledFn>,
}

/// Signals emitted by a converter.
pub struct ConverterSignals {
    /// Emitted by `set_rows` with the new row count.
    pub rows_reset: Signal<usize>,
    /// Emitted after every `row_selected` dispatch with the row index.
    pub row_selected: Signal<usize>,
}

impl ConverterSignals {
    fn new() -> Self {
        Self {
            rows_reset: Signal::new(),
            row_selected: Signal::new(),
        }
    }
}

/// Whether the separator under `index` is visible in a list of `count` rows.
///
/// Every row shows its separator except the last one.
pub fn separator_visible(index: usize, count: usize) -> bool {
    index + 1 != count
}

/// Override-first callback dispatcher over an owned row sequence.
///
/// See the [module documentation](self) for the dispatch rules.
pub struct ListConverter {
    rows: Vec<RowModel>,
    renderers: RendererRegistry,
    overrides: OverrideTable,
    signals: ConverterSignals,
}

impl Default for ListConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl ListConverter {
    /// Creates an empty converter.
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            renderers: RendererRegistry::new(),
            overrides: OverrideTable::default(),
            signals: ConverterSignals::new(),
        }
    }

    /// Sets the initial rows using builder pattern.
    pub fn with_rows(mut self, rows: Vec<RowModel>) -> Self {
        self.rows = rows;
        self
    }

    // =========================================================================
    // Rows
    // =========================================================================

    /// The current row sequence, in render order.
    pub fn rows(&self) -> &[RowModel] {
        &self.rows
    }

    /// Replaces the whole row sequence and emits `rows_reset`.
    ///
    /// This is the only way the row collection changes; the converter owns
    /// the rows outright and shares nothing with the host.
    pub fn set_rows(&mut self, rows: Vec<RowModel>) {
        self.rows = rows;
        tracing::debug!(
            target: "horizon_rowkit::converter",
            count = self.rows.len(),
            "rows replaced"
        );
        self.signals.rows_reset.emit(self.rows.len());
    }

    // =========================================================================
    // Renderers and overrides
    // =========================================================================

    /// The renderer registration table.
    pub fn renderers(&self) -> &RendererRegistry {
        &self.renderers
    }

    /// Mutable access to the renderer registration table.
    pub fn renderers_mut(&mut self) -> &mut RendererRegistry {
        &mut self.renderers
    }

    /// Registers a renderer factory for a kind (convenience for
    /// `renderers_mut().register(..)`).
    pub fn register_renderer<F>(&mut self, kind: RendererKind, factory: F)
    where
        F: Fn() -> Box<dyn RowRenderer> + Send + Sync + 'static,
    {
        self.renderers.register(kind, factory);
    }

    /// Stores an override, replacing any prior handler for the same
    /// callback kind. Overrides are never removed.
    pub fn register(&mut self, handler: CallbackOverride) {
        tracing::debug!(
            target: "horizon_rowkit::converter",
            callback = ?handler.callback(),
            "registering callback override"
        );
        match handler {
            CallbackOverride::RowHeight(f) => self.overrides.row_height = Some(f),
            CallbackOverride::RowCell(f) => self.overrides.row_cell = Some(f),
            CallbackOverride::RowSelected(f) => self.overrides.row_selected = Some(f),
            CallbackOverride::Scrolled(f) => self.overrides.scrolled = Some(f),
        }
    }

    /// Returns `true` if an override is registered for the callback.
    pub fn has_override(&self, callback: ListCallback) -> bool {
        match callback {
            ListCallback::RowHeight => self.overrides.row_height.is_some(),
            ListCallback::RowCell => self.overrides.row_cell.is_some(),
            ListCallback::RowSelected => self.overrides.row_selected.is_some(),
            ListCallback::Scrolled => self.overrides.scrolled.is_some(),
        }
    }

    /// The converter's signals.
    pub fn signals(&self) -> &ConverterSignals {
        &self.signals
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    /// Number of rows. Always model-driven; there is no override hook.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Height of the row at `index`.
    ///
    /// Override-first: a registered handler returning `Some` wins
    /// verbatim. Otherwise the model height is used. An out-of-bounds
    /// index is a configuration error.
    pub fn row_height(&self, host: &mut dyn ListHost, index: usize) -> Result<f32> {
        if let Some(handler) = &self.overrides.row_height
            && let Some(height) = handler(&mut *host, index)
        {
            return Ok(height);
        }

        let len = self.rows.len();
        self.rows
            .get(index)
            .map(|row| row.height())
            .ok_or_else(|| RowKitError::row_out_of_bounds(index, len))
    }

    /// Renderer for the row at `index`, bound and ready to display.
    ///
    /// Override-first: a registered handler returning `Some` wins
    /// verbatim. The fallback path resolves the row's reuse identifier,
    /// registers the kind's factory with the host pool on first sight,
    /// dequeues an instance, binds the payload with `delegate` attached
    /// and sets separator visibility from the row position.
    ///
    /// A row naming a kind absent from the registry yields
    /// [`RowKitError::UnknownRendererKind`].
    pub fn row_cell(
        &self,
        host: &mut dyn ListHost,
        delegate: &dyn RowEventDelegate,
        index: usize,
    ) -> Result<Box<dyn RowRenderer>> {
        if let Some(handler) = &self.overrides.row_cell
            && let Some(cell) = handler(&mut *host, index)
        {
            tracing::trace!(
                target: "horizon_rowkit::converter",
                index,
                "cell served by override"
            );
            return Ok(cell);
        }

        let len = self.rows.len();
        let row = self
            .rows
            .get(index)
            .ok_or_else(|| RowKitError::row_out_of_bounds(index, len))?;

        let identifier = row.effective_reuse_identifier();
        let pool = host.reuse_pool();
        if !pool.has_factory(&identifier) {
            let factory = self
                .renderers
                .factory(row.renderer())
                .ok_or_else(|| RowKitError::unknown_renderer_kind(row.renderer().name()))?;
            pool.register_factory(&identifier, factory);
        }
        let mut cell = pool
            .dequeue(&identifier)
            .ok_or_else(|| RowKitError::unknown_renderer_kind(row.renderer().name()))?;

        cell.bind(row.payload(), delegate);
        cell.set_separator_visible(separator_visible(index, len));
        tracing::trace!(
            target: "horizon_rowkit::converter",
            index,
            identifier = %identifier,
            "cell served from model"
        );
        Ok(cell)
    }

    /// Row selection notification. Override-only; a no-op without one.
    ///
    /// The `row_selected` signal is emitted either way.
    pub fn row_selected(&self, host: &mut dyn ListHost, index: usize) {
        if let Some(handler) = &self.overrides.row_selected {
            handler(&mut *host, index);
        } else {
            tracing::trace!(
                target: "horizon_rowkit::converter",
                index,
                "row selected with no override"
            );
        }
        self.signals.row_selected.emit(index);
    }

    /// Scroll notification. Override-only; a no-op without one.
    pub fn scrolled(&self, host: &mut dyn ListHost) {
        if let Some(handler) = &self.overrides.scrolled {
            handler(&mut *host);
        }
    }
}

impl std::fmt::Debug for ListConverter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListConverter")
            .field("rows", &self.rows.len())
            .field("renderers", &self.renderers)
            .finish()
    }
}
