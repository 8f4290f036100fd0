//! State-to-visual mapping for the refresh indicator.

use std::sync::Arc;

use parking_lot::Mutex;

use super::RefreshState;
use super::view::RefreshIndicatorView;

/// Receives refresh-state transitions from the gesture controller.
///
/// Implementations map each state to a visual effect; they own no state of
/// their own and must tolerate repeated transitions to the same state.
pub trait RefreshAnimator {
    /// React to a state transition.
    fn animate(&self, state: RefreshState);
}

/// The stock animator for [`RefreshIndicatorView`].
///
/// The mapping is fixed: `Loading` starts the spinner, every other state
/// stops it. Nothing else is tracked.
#[derive(Debug, Clone)]
pub struct IndicatorAnimator {
    view: Arc<Mutex<RefreshIndicatorView>>,
}

impl IndicatorAnimator {
    /// Creates an animator driving the given view.
    pub fn new(view: Arc<Mutex<RefreshIndicatorView>>) -> Self {
        Self { view }
    }

    /// The view this animator drives.
    pub fn view(&self) -> &Arc<Mutex<RefreshIndicatorView>> {
        &self.view
    }
}

impl RefreshAnimator for IndicatorAnimator {
    fn animate(&self, state: RefreshState) {
        tracing::trace!(target: "horizon_rowkit::refresh", ?state, "refresh state transition");
        let mut view = self.view.lock();
        match state {
            RefreshState::Loading => view.start_animation(),
            RefreshState::Initial | RefreshState::Releasing { .. } | RefreshState::Finished => {
                view.stop_animation()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::refresh::view::{IDLE_CAPTION, LOADING_CAPTION};

    fn animator() -> IndicatorAnimator {
        IndicatorAnimator::new(Arc::new(Mutex::new(RefreshIndicatorView::new())))
    }

    #[test]
    fn test_loading_starts_spinner() {
        let animator = animator();
        animator.animate(RefreshState::Loading);

        let view = animator.view().lock();
        assert!(view.is_animating());
        assert_eq!(view.caption(), LOADING_CAPTION);
    }

    #[test]
    fn test_non_loading_states_stop_spinner() {
        let animator = animator();
        for state in [
            RefreshState::Initial,
            RefreshState::Releasing { progress: 0.4 },
            RefreshState::Finished,
        ] {
            animator.animate(RefreshState::Loading);
            animator.animate(state);

            let view = animator.view().lock();
            assert!(!view.is_animating());
            assert_eq!(view.caption(), IDLE_CAPTION);
        }
    }

    #[test]
    fn test_consecutive_stops_without_loading() {
        let animator = animator();
        animator.animate(RefreshState::Initial);
        animator.animate(RefreshState::Releasing { progress: 0.9 });
        animator.animate(RefreshState::Finished);

        let view = animator.view().lock();
        assert!(!view.is_animating());
        assert_eq!(view.caption(), IDLE_CAPTION);
    }
}
