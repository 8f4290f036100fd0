//! Row models: the per-row description a converter renders from.
//!
//! A `RowModel` pairs a payload with the renderer kind that knows how to
//! display it, plus the row height and an optional explicit reuse
//! identifier. Models are built by the owning screen before binding and
//! are read-only to the converter.

use super::data::RowData;
use super::renderer::RendererKind;

/// Default row height when none is specified.
pub const DEFAULT_ROW_HEIGHT: f32 = 44.0;

/// Description of a single list row.
///
/// # Example
///
/// ```
/// use horizon_rowkit::model::{RendererKind, RowData, RowModel};
///
/// const TEXT_ROW: RendererKind = RendererKind::new("TextRow");
///
/// let row = RowModel::new(TEXT_ROW, RowData::from("Sign out"))
///     .with_height(60.0)
///     .with_reuse_identifier("sign-out");
/// assert_eq!(row.height(), 60.0);
/// assert_eq!(row.effective_reuse_identifier(), "sign-out");
/// ```
#[derive(Debug, Clone)]
pub struct RowModel {
    payload: RowData,
    renderer: RendererKind,
    height: f32,
    reuse_identifier: Option<String>,
}

impl RowModel {
    /// Creates a row for the given renderer kind with the default height.
    pub fn new(renderer: RendererKind, payload: RowData) -> Self {
        Self {
            payload,
            renderer,
            height: DEFAULT_ROW_HEIGHT,
            reuse_identifier: None,
        }
    }

    /// Sets the row height.
    pub fn with_height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    /// Sets an explicit reuse identifier, overriding the derived one.
    pub fn with_reuse_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.reuse_identifier = Some(identifier.into());
        self
    }

    /// The row payload bound into the renderer.
    #[inline]
    pub fn payload(&self) -> &RowData {
        &self.payload
    }

    /// The renderer kind this row is displayed with.
    #[inline]
    pub fn renderer(&self) -> RendererKind {
        self.renderer
    }

    /// The row height.
    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// The explicit reuse identifier, if one was set.
    pub fn reuse_identifier(&self) -> Option<&str> {
        self.reuse_identifier.as_deref()
    }

    /// The reuse identifier used for pooling this row's renderer.
    ///
    /// Either the explicit identifier, or the kind's derived identifier.
    /// The derived form is deterministic: the same kind always yields the
    /// same identifier.
    pub fn effective_reuse_identifier(&self) -> String {
        match &self.reuse_identifier {
            Some(id) => id.clone(),
            None => self.renderer.default_reuse_identifier(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: RendererKind = RendererKind::new("PlainRow");

    #[test]
    fn test_defaults() {
        let row = RowModel::new(PLAIN, RowData::None);
        assert_eq!(row.height(), DEFAULT_ROW_HEIGHT);
        assert!(row.reuse_identifier().is_none());
    }

    #[test]
    fn test_derived_identifier_is_stable() {
        let a = RowModel::new(PLAIN, RowData::None);
        let b = RowModel::new(PLAIN, RowData::from("other"));
        assert_eq!(
            a.effective_reuse_identifier(),
            b.effective_reuse_identifier()
        );
        assert_eq!(a.effective_reuse_identifier(), "PlainRowID");
    }

    #[test]
    fn test_explicit_identifier_wins() {
        let row = RowModel::new(PLAIN, RowData::None).with_reuse_identifier("hero");
        assert_eq!(row.effective_reuse_identifier(), "hero");
    }
}
