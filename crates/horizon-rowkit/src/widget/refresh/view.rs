//! The refresh indicator view: spinner ring, badge icon and caption.
//!
//! Layout is recomputed on every bounds change, centered relative to the
//! view's own frame. The view knows nothing about the gesture; it only
//! exposes `start_animation` and `stop_animation`, which the animator
//! drives from refresh-state transitions.

use std::time::Instant;

use crate::geometry::{Color, Point, Rect, Size};

use super::spinner::SpinAnimation;

/// Default view frame.
const DEFAULT_FRAME: Rect = Rect::new(0.0, 0.0, 50.0, 50.0);
/// Spinner ring size.
const SPINNER_SIZE: Size = Size::new(24.0, 24.0);
/// Badge icon size, drawn concentric with the ring.
const ICON_SIZE: Size = Size::new(15.0, 15.0);
/// Caption label size.
const CAPTION_SIZE: Size = Size::new(100.0, 20.0);
/// Horizontal shift of the ring center from the frame center.
const RING_CENTER_SHIFT: f32 = -42.0;
/// Horizontal shift of the caption's left edge from the frame center.
const CAPTION_LEFT_SHIFT: f32 = -10.0;

/// Default caption shown while idle.
pub const IDLE_CAPTION: &str = "Pull down to refresh";
/// Default caption shown while loading.
pub const LOADING_CAPTION: &str = "Refreshing\u{2026}";

/// Caption font size in points.
pub const CAPTION_FONT_SIZE: f32 = 13.0;

/// The pull-to-refresh indicator view.
///
/// Hosts draw it by reading the frames, asset names, caption text and the
/// current spinner angle; this type owns no rendering resources itself.
#[derive(Debug, Clone)]
pub struct RefreshIndicatorView {
    bounds: Rect,
    spinner_frame: Rect,
    icon_frame: Rect,
    caption_frame: Rect,
    caption: String,
    idle_caption: String,
    loading_caption: String,
    caption_color: Color,
    spinner_asset: String,
    icon_asset: String,
    spinner: SpinAnimation,
}

impl Default for RefreshIndicatorView {
    fn default() -> Self {
        Self::new()
    }
}

impl RefreshIndicatorView {
    /// Creates the view with its default 50x50 frame.
    pub fn new() -> Self {
        let mut view = Self {
            bounds: DEFAULT_FRAME,
            spinner_frame: Rect::ZERO,
            icon_frame: Rect::ZERO,
            caption_frame: Rect::ZERO,
            caption: IDLE_CAPTION.to_string(),
            idle_caption: IDLE_CAPTION.to_string(),
            loading_caption: LOADING_CAPTION.to_string(),
            caption_color: Color::from_rgb8(153, 153, 153),
            spinner_asset: "refresh-ring".to_string(),
            icon_asset: "refresh-badge".to_string(),
            spinner: SpinAnimation::new(),
        };
        view.layout();
        view
    }

    /// The view's bounds.
    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Sets the bounds and repositions every subview.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.layout();
    }

    /// The spinner ring frame.
    #[inline]
    pub fn spinner_frame(&self) -> Rect {
        self.spinner_frame
    }

    /// The badge icon frame.
    #[inline]
    pub fn icon_frame(&self) -> Rect {
        self.icon_frame
    }

    /// The caption label frame.
    #[inline]
    pub fn caption_frame(&self) -> Rect {
        self.caption_frame
    }

    /// The caption currently displayed.
    pub fn caption(&self) -> &str {
        &self.caption
    }

    /// The caption text color.
    #[inline]
    pub fn caption_color(&self) -> Color {
        self.caption_color
    }

    /// The asset name of the spinner ring image.
    pub fn spinner_asset(&self) -> &str {
        &self.spinner_asset
    }

    /// The asset name of the badge icon image.
    pub fn icon_asset(&self) -> &str {
        &self.icon_asset
    }

    /// Replaces both caption strings.
    ///
    /// The displayed caption updates immediately to match the current
    /// animation state.
    pub fn set_captions(&mut self, idle: impl Into<String>, loading: impl Into<String>) {
        self.idle_caption = idle.into();
        self.loading_caption = loading.into();
        self.caption = if self.spinner.is_running() {
            self.loading_caption.clone()
        } else {
            self.idle_caption.clone()
        };
    }

    /// Replaces the image asset names.
    pub fn set_assets(&mut self, spinner: impl Into<String>, icon: impl Into<String>) {
        self.spinner_asset = spinner.into();
        self.icon_asset = icon.into();
    }

    /// Whether the spinner is currently rotating.
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.spinner.is_running()
    }

    /// The spinner rotation angle at the given instant, in radians.
    pub fn spinner_angle_at(&self, at: Instant) -> f32 {
        self.spinner.angle_at(at)
    }

    /// Starts the repeating spinner rotation and shows the loading caption.
    ///
    /// Idempotent; a running spinner keeps its phase.
    pub fn start_animation(&mut self) {
        if !self.spinner.is_running() {
            tracing::trace!(target: "horizon_rowkit::refresh", "spinner start");
        }
        self.spinner.start();
        self.caption = self.loading_caption.clone();
    }

    /// Removes the spinner rotation and shows the idle caption.
    ///
    /// Idempotent.
    pub fn stop_animation(&mut self) {
        if self.spinner.is_running() {
            tracing::trace!(target: "horizon_rowkit::refresh", "spinner stop");
        }
        self.spinner.stop();
        self.caption = self.idle_caption.clone();
    }

    fn layout(&mut self) {
        let center = Point::new(
            self.bounds.width() / 2.0 + RING_CENTER_SHIFT,
            self.bounds.height() / 2.0,
        );
        self.spinner_frame = Rect::from_center(center, SPINNER_SIZE);
        self.icon_frame = Rect::from_center(center, ICON_SIZE);
        self.caption_frame = Rect::new(
            self.bounds.width() / 2.0 + CAPTION_LEFT_SHIFT,
            (self.bounds.height() - CAPTION_SIZE.height) / 2.0,
            CAPTION_SIZE.width,
            CAPTION_SIZE.height,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let view = RefreshIndicatorView::new();
        assert_eq!(view.bounds(), Rect::new(0.0, 0.0, 50.0, 50.0));

        // Ring and icon are concentric, shifted left of the frame center
        assert_eq!(view.spinner_frame().center(), Point::new(-17.0, 25.0));
        assert_eq!(view.icon_frame().center(), view.spinner_frame().center());
        assert_eq!(view.caption_frame(), Rect::new(15.0, 15.0, 100.0, 20.0));
    }

    #[test]
    fn test_relayout_on_bounds_change() {
        let mut view = RefreshIndicatorView::new();
        view.set_bounds(Rect::new(0.0, 0.0, 320.0, 50.0));

        assert_eq!(view.spinner_frame().center(), Point::new(118.0, 25.0));
        assert_eq!(view.icon_frame().center(), Point::new(118.0, 25.0));
        assert_eq!(view.caption_frame().left(), 150.0);
        assert_eq!(view.caption_frame().top(), 15.0);
    }

    #[test]
    fn test_start_and_stop_animation() {
        let mut view = RefreshIndicatorView::new();
        assert!(!view.is_animating());
        assert_eq!(view.caption(), IDLE_CAPTION);

        view.start_animation();
        assert!(view.is_animating());
        assert_eq!(view.caption(), LOADING_CAPTION);

        view.stop_animation();
        assert!(!view.is_animating());
        assert_eq!(view.caption(), IDLE_CAPTION);
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut view = RefreshIndicatorView::new();
        view.stop_animation();
        view.stop_animation();
        assert!(!view.is_animating());
        assert_eq!(view.caption(), IDLE_CAPTION);
    }

    #[test]
    fn test_custom_captions_follow_state() {
        let mut view = RefreshIndicatorView::new();
        view.start_animation();
        view.set_captions("drag me", "working");
        assert_eq!(view.caption(), "working");

        view.stop_animation();
        assert_eq!(view.caption(), "drag me");
    }
}
