use alloc::vec::Vec;

/// Drag threshold in logical pixels.
///
/// Pointer motion below this distance from the press position is treated as
/// a tap; beyond it the gesture becomes a drag and starts moving the row.
/// Matches common platform touch-slop conventions.
pub const TOUCH_SLOP: f32 = 8.0;

/// Maximum fling velocity in logical pixels per second.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;

/// Per-millisecond deceleration rate used to project momentum.
///
/// The projected travel for a release velocity `v` (px/ms) is
/// `v * rate / (1 - rate)`, the closed form of an exponentially decaying
/// scroll.
pub const DECELERATION_RATE: f32 = 0.998;

/// Trailing window over which release velocity is estimated.
const VELOCITY_WINDOW_MS: u64 = 100;

/// What a finished pointer sequence turned out to be.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragOutcome {
    /// Motion stayed within [`TOUCH_SLOP`]; the row never moved.
    Tap,
    /// A real drag; feed both values to `Pager::drag_ended`.
    Drag {
        translation: f32,
        predicted_end: f32,
    },
}

/// Accumulates pointer samples for one drag gesture and supplies the
/// momentum-projected end translation the pager's drag-end path expects.
///
/// Hosts whose gesture system already provides a predicted end translation
/// can bypass this type and call `Pager::drag_ended` directly.
#[derive(Clone, Debug, Default)]
pub struct DragTracker {
    origin: Option<f32>,
    translation: f32,
    passed_slop: bool,
    samples: Vec<(u64, f32)>,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts tracking at the pointer-down position.
    pub fn begin(&mut self, position: f32, now_ms: u64) {
        self.reset();
        self.origin = Some(position);
        self.samples.push((now_ms, 0.0));
    }

    /// Feeds a pointer-move sample.
    ///
    /// Returns the current translation once the gesture has passed
    /// [`TOUCH_SLOP`], `None` while it still counts as a tap (or when no
    /// gesture is being tracked).
    pub fn move_to(&mut self, position: f32, now_ms: u64) -> Option<f32> {
        let origin = self.origin?;
        let translation = position - origin;
        self.translation = translation;
        self.samples.push((now_ms, translation));
        self.samples
            .retain(|&(t, _)| now_ms.saturating_sub(t) <= VELOCITY_WINDOW_MS);

        if !self.passed_slop && (translation > TOUCH_SLOP || translation < -TOUCH_SLOP) {
            self.passed_slop = true;
        }
        self.passed_slop.then_some(translation)
    }

    /// Whether the gesture has committed to being a drag.
    pub fn is_active(&self) -> bool {
        self.passed_slop
    }

    pub fn translation(&self) -> f32 {
        self.translation
    }

    /// Release velocity in px/s over the trailing sample window, clamped to
    /// ±[`MAX_FLING_VELOCITY`].
    pub fn velocity(&self) -> f32 {
        let (first, last) = match (self.samples.first(), self.samples.last()) {
            (Some(f), Some(l)) if l.0 > f.0 => (*f, *l),
            _ => return 0.0,
        };
        let v = (last.1 - first.1) / (last.0 - first.0) as f32 * 1000.0;
        v.clamp(-MAX_FLING_VELOCITY, MAX_FLING_VELOCITY)
    }

    /// Momentum-projected end translation for the current gesture.
    pub fn predicted_end_translation(&self) -> f32 {
        let velocity_per_ms = self.velocity() / 1000.0;
        self.translation + velocity_per_ms * DECELERATION_RATE / (1.0 - DECELERATION_RATE)
    }

    /// Ends the gesture and reports what it was.
    pub fn finish(&mut self) -> DragOutcome {
        let outcome = if self.passed_slop {
            DragOutcome::Drag {
                translation: self.translation,
                predicted_end: self.predicted_end_translation(),
            }
        } else {
            DragOutcome::Tap
        };
        self.reset();
        outcome
    }

    /// Discards the gesture (host-side cancellation).
    pub fn cancel(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.origin = None;
        self.translation = 0.0;
        self.passed_slop = false;
        self.samples.clear();
    }
}
