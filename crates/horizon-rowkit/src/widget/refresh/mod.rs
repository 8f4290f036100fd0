//! Pull-to-refresh indicator widget.
//!
//! This module packages a [`RefreshIndicatorView`] with an
//! [`IndicatorAnimator`] and the tuning parameters an external
//! pull-to-refresh gesture controller consumes: widget height, docking
//! position and spring tuning. The gesture itself (tracking the drag,
//! deciding when loading begins and ends) is entirely the controller's
//! business; this widget only reacts to its [`RefreshState`] transitions.
//!
//! # Example
//!
//! ```
//! use horizon_rowkit::signal::Signal;
//! use horizon_rowkit::widget::refresh::{PullToRefresh, RefreshPosition, RefreshState};
//!
//! let refresh = PullToRefresh::new(RefreshPosition::Top);
//!
//! // The gesture controller publishes state transitions on a signal.
//! let states = Signal::<RefreshState>::new();
//! refresh.bind(&states);
//!
//! states.emit(RefreshState::Loading);
//! assert!(refresh.view().lock().is_animating());
//!
//! states.emit(RefreshState::Finished);
//! assert!(!refresh.view().lock().is_animating());
//! ```

mod animator;
mod spinner;
mod view;

pub use animator::{IndicatorAnimator, RefreshAnimator};
pub use spinner::{DEFAULT_SPIN_PERIOD, SpinAnimation};
pub use view::{CAPTION_FONT_SIZE, IDLE_CAPTION, LOADING_CAPTION, RefreshIndicatorView};

use std::sync::Arc;

use parking_lot::Mutex;

use crate::signal::{ConnectionId, Signal};

/// Phase of a pull-to-refresh gesture, owned by the external controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RefreshState {
    /// Resting; no gesture in progress.
    Initial,
    /// Being dragged out, with the drag progress in `0.0..=1.0`.
    Releasing {
        /// How far the drag has pulled the widget out.
        progress: f32,
    },
    /// The refresh action is running.
    Loading,
    /// The refresh action completed; the widget is retracting.
    Finished,
}

/// Where the refresh widget docks on the scroll view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefreshPosition {
    /// Docked above the content (pull down).
    #[default]
    Top,
    /// Docked below the content (pull up).
    Bottom,
}

/// Spring parameters for the controller's snap-back animation.
///
/// Damping runs from 0.0 (maximum bounce) to 1.0 (no bounce) and is
/// clamped to that range; the initial velocity sets how fast the snap-back
/// starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringTuning {
    damping: f32,
    initial_velocity: f32,
}

impl Default for SpringTuning {
    fn default() -> Self {
        Self {
            damping: 1.0,
            initial_velocity: 0.0,
        }
    }
}

impl SpringTuning {
    /// Creates a tuning, clamping damping into `0.0..=1.0`.
    pub fn new(damping: f32, initial_velocity: f32) -> Self {
        Self {
            damping: damping.clamp(0.0, 1.0),
            initial_velocity,
        }
    }

    /// The spring damping ratio.
    #[inline]
    pub fn damping(&self) -> f32 {
        self.damping
    }

    /// The initial spring velocity.
    #[inline]
    pub fn initial_velocity(&self) -> f32 {
        self.initial_velocity
    }
}

/// An assembled pull-to-refresh widget.
///
/// Bundles the view and its animator together with everything the external
/// gesture controller asks for when installing the widget.
#[derive(Debug, Clone)]
pub struct PullToRefresh {
    view: Arc<Mutex<RefreshIndicatorView>>,
    animator: IndicatorAnimator,
    position: RefreshPosition,
    spring: SpringTuning,
}

impl PullToRefresh {
    /// Assembles the widget for the given docking position.
    pub fn new(position: RefreshPosition) -> Self {
        let view = Arc::new(Mutex::new(RefreshIndicatorView::new()));
        let animator = IndicatorAnimator::new(view.clone());
        Self {
            view,
            animator,
            position,
            spring: SpringTuning::default(),
        }
    }

    /// The shared indicator view.
    pub fn view(&self) -> &Arc<Mutex<RefreshIndicatorView>> {
        &self.view
    }

    /// The animator receiving state transitions.
    pub fn animator(&self) -> &IndicatorAnimator {
        &self.animator
    }

    /// The widget height the controller reserves, taken from the view frame.
    pub fn height(&self) -> f32 {
        self.view.lock().bounds().height()
    }

    /// The docking position.
    #[inline]
    pub fn position(&self) -> RefreshPosition {
        self.position
    }

    /// The spring tuning handed to the controller.
    #[inline]
    pub fn spring(&self) -> SpringTuning {
        self.spring
    }

    /// Replaces the spring tuning.
    pub fn set_spring(&mut self, spring: SpringTuning) {
        self.spring = spring;
    }

    /// Connects the animator to a controller's state stream.
    ///
    /// Every emitted state is forwarded to
    /// [`RefreshAnimator::animate`]. Returns the connection id so the
    /// owner can disconnect when tearing the widget down.
    pub fn bind(&self, states: &Signal<RefreshState>) -> ConnectionId {
        let animator = self.animator.clone();
        states.connect(move |state| animator.animate(*state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assembly_defaults() {
        let refresh = PullToRefresh::new(RefreshPosition::Top);
        assert_eq!(refresh.height(), 50.0);
        assert_eq!(refresh.position(), RefreshPosition::Top);
        assert_eq!(refresh.spring(), SpringTuning::default());
        assert_eq!(refresh.spring().damping(), 1.0);
        assert_eq!(refresh.spring().initial_velocity(), 0.0);
    }

    #[test]
    fn test_spring_damping_is_clamped() {
        assert_eq!(SpringTuning::new(1.5, 2.0).damping(), 1.0);
        assert_eq!(SpringTuning::new(-0.5, 0.0).damping(), 0.0);
        assert_eq!(SpringTuning::new(0.6, 3.0).initial_velocity(), 3.0);
    }

    #[test]
    fn test_bind_forwards_states() {
        let refresh = PullToRefresh::new(RefreshPosition::Bottom);
        let states = Signal::<RefreshState>::new();
        let id = refresh.bind(&states);

        states.emit(RefreshState::Loading);
        assert!(refresh.view().lock().is_animating());

        states.emit(RefreshState::Finished);
        assert!(!refresh.view().lock().is_animating());

        // After disconnecting, transitions no longer reach the widget
        states.emit(RefreshState::Loading);
        states.disconnect(id);
        states.emit(RefreshState::Finished);
        assert!(refresh.view().lock().is_animating());
    }

    #[test]
    fn test_animator_shares_the_view() {
        let refresh = PullToRefresh::new(RefreshPosition::Top);
        refresh.animator().animate(RefreshState::Loading);
        assert!(refresh.view().lock().is_animating());
    }
}
