//! Prelude module for rowkit.
//!
//! Re-exports the most commonly used types for convenient importing:
//!
//! ```ignore
//! use horizon_rowkit::prelude::*;
//! ```

// ============================================================================
// Converter and Row Models
// ============================================================================

pub use crate::model::{
    CallbackOverride, ListCallback, ListConverter, ListHost, RendererKind, RendererPool,
    RendererRegistry, ReusePool, RowData, RowEventDelegate, RowModel, RowRenderer,
};

// ============================================================================
// Refresh Widget
// ============================================================================

pub use crate::widget::refresh::{
    IndicatorAnimator, PullToRefresh, RefreshAnimator, RefreshIndicatorView, RefreshPosition,
    RefreshState, SpringTuning,
};

// ============================================================================
// Signals
// ============================================================================

pub use crate::signal::{ConnectionId, Signal};

// ============================================================================
// Geometry Types and Errors
// ============================================================================

pub use crate::error::{Result, RowKitError};
pub use crate::geometry::{Color, Point, Rect, Size};

#[cfg(test)]
mod tests {
    #![allow(unused)]
    use super::*;

    /// Verify that the prelude exports are accessible and usable together.
    #[test]
    fn test_prelude_types_exist() {
        let _signal: Signal<usize> = Signal::new();
        let _converter = ListConverter::new();
        let _refresh = PullToRefresh::new(RefreshPosition::Top);

        let _point = Point::new(0.0, 0.0);
        let _size = Size::new(100.0, 100.0);
        let _rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        let _color = Color::from_rgb8(255, 255, 255);
    }
}
