use std::time::Duration;

use tracing::trace;

use crate::core::ValueBounds;

/// Default length of one bounds transition.
pub const DEFAULT_BOUNDS_ANIMATION: Duration = Duration::from_millis(200);

/// One in-flight interpolation from `start` towards `target`.
///
/// A transition is never patched: a new target replaces it wholesale. A
/// pending transition has no start time yet and is anchored by the first
/// frame that samples it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundsTransition {
    start: ValueBounds,
    target: ValueBounds,
    started_at: Option<Duration>,
    duration: Duration,
}

impl BoundsTransition {
    #[must_use]
    pub fn new(
        start: ValueBounds,
        target: ValueBounds,
        started_at: Duration,
        duration: Duration,
    ) -> Self {
        Self {
            start,
            target,
            started_at: Some(started_at),
            duration,
        }
    }

    #[must_use]
    pub fn pending(start: ValueBounds, target: ValueBounds, duration: Duration) -> Self {
        Self {
            start,
            target,
            started_at: None,
            duration,
        }
    }

    #[must_use]
    pub fn start(&self) -> ValueBounds {
        self.start
    }

    #[must_use]
    pub fn target(&self) -> ValueBounds {
        self.target
    }

    /// `None` while the transition waits for its first frame.
    #[must_use]
    pub fn started_at(&self) -> Option<Duration> {
        self.started_at
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.started_at.is_none()
    }

    /// Fixes the start time of a pending transition; started ones are kept.
    #[must_use]
    pub fn anchored(self, now: Duration) -> Self {
        Self {
            started_at: Some(self.started_at.unwrap_or(now)),
            ..self
        }
    }

    /// Progress `t` in `[0, 1]` at time `now`. A pending transition sits at 0.
    #[must_use]
    pub fn progress(&self, now: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let Some(started_at) = self.started_at else {
            return 0.0;
        };
        let elapsed = now.saturating_sub(started_at);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Returns the bounds to display at `now` and whether the transition is done.
    #[must_use]
    pub fn sample(&self, now: Duration) -> (ValueBounds, bool) {
        let t = self.progress(now);
        if t >= 1.0 {
            return (self.target, true);
        }
        (self.start.lerp(self.target, t), false)
    }
}

/// Tracks settled (target) and displayed value bounds for one viewport.
///
/// Targets are recomputed synchronously by the caller; the engine only owns
/// the animated approach of the displayed bounds towards them.
#[derive(Debug, Clone, PartialEq)]
pub struct AutoscaleEngine {
    duration: Duration,
    target: Option<ValueBounds>,
    displayed: Option<ValueBounds>,
    transition: Option<BoundsTransition>,
}

impl Default for AutoscaleEngine {
    fn default() -> Self {
        Self::new(DEFAULT_BOUNDS_ANIMATION)
    }
}

impl AutoscaleEngine {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            target: None,
            displayed: None,
            transition: None,
        }
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    /// Latest settled bounds; `None` when no series is enabled.
    #[must_use]
    pub fn target(&self) -> Option<ValueBounds> {
        self.target
    }

    /// Bounds to draw this frame; `None` until a first target arrives.
    #[must_use]
    pub fn displayed(&self) -> Option<ValueBounds> {
        self.displayed
    }

    #[must_use]
    pub fn transition(&self) -> Option<BoundsTransition> {
        self.transition
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Drops every bound, as on dataset reload.
    pub fn reset(&mut self) {
        self.target = None;
        self.displayed = None;
        self.transition = None;
    }

    /// Points the displayed bounds at a new target.
    ///
    /// The first target is adopted immediately. Later targets start a fresh
    /// transition from whatever is displayed at `now`. A `None` target
    /// freezes the displayed bounds and cancels any transition.
    pub fn retarget(&mut self, target: Option<ValueBounds>, now: Duration) {
        self.tick(now);
        self.apply_target(target, Some(now));
    }

    /// Like [`Self::retarget`], for callers without a frame time at hand.
    ///
    /// The transition starts from the bounds displayed by the last tick and
    /// is anchored by the next [`Self::tick`], so an idle host never loses
    /// the animation to a stale clock.
    pub fn retarget_pending(&mut self, target: Option<ValueBounds>) {
        self.apply_target(target, None);
    }

    fn apply_target(&mut self, target: Option<ValueBounds>, now: Option<Duration>) {
        self.target = target;

        let Some(target) = target else {
            self.transition = None;
            return;
        };

        match self.displayed {
            None => {
                self.displayed = Some(target);
                self.transition = None;
            }
            Some(displayed) if displayed == target => {
                self.transition = None;
            }
            Some(_) if self.duration.is_zero() => {
                self.displayed = Some(target);
                self.transition = None;
            }
            Some(displayed) => {
                trace!(
                    from_min = displayed.min,
                    from_max = displayed.max,
                    to_min = target.min,
                    to_max = target.max,
                    pending = now.is_none(),
                    "start bounds transition"
                );
                self.transition = Some(match now {
                    Some(now) => BoundsTransition::new(displayed, target, now, self.duration),
                    None => BoundsTransition::pending(displayed, target, self.duration),
                });
            }
        }
    }

    /// Samples the running transition at `now`.
    ///
    /// Returns `true` while another frame is needed.
    pub fn tick(&mut self, now: Duration) -> bool {
        let Some(transition) = self.transition else {
            return false;
        };
        let transition = transition.anchored(now);
        let (bounds, finished) = transition.sample(now);
        self.displayed = Some(bounds);
        self.transition = (!finished).then_some(transition);
        trace!(min = bounds.min, max = bounds.max, finished, "bounds tick");
        !finished
    }
}
