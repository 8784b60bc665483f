use tilepager::{Pager, PagerOptions, Snap};

use crate::{DragOutcome, DragTracker, Easing, Tween};

const DEFAULT_SNAP_DURATION_MS: u64 = 250;

/// A framework-neutral controller that wraps a [`Pager`] and provides the
/// plumbing a UI binding needs: pointer-event handling with tap/drag
/// separation and momentum projection, plus tween-driven snap animation.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `pointer_down` / `pointer_move` / `pointer_up` when pointer events
///   occur (or the `Pager` drag methods directly, if the host supplies its
///   own predicted end translation)
/// - `indicator_tap` when a page marker is tapped
/// - `tick(now_ms)` each frame while `is_animating()`
///
/// The pager's state settles synchronously; the tween only interpolates the
/// *visual* offset from `snap.from` to `snap.to`. Render with
/// `visual_offset(now_ms)` in place of `Pager::scroll_offset` and the two
/// agree again as soon as the tween finishes. Wraparound corrections are
/// reported with `animated == false` and never start a tween.
#[derive(Clone, Debug)]
pub struct Controller {
    pager: Pager,
    tracker: DragTracker,
    tween: Option<Tween>,
    snap_duration_ms: u64,
    easing: Easing,
}

impl Controller {
    pub fn new(options: PagerOptions) -> Self {
        Self::from_pager(Pager::new(options))
    }

    pub fn from_pager(pager: Pager) -> Self {
        Self {
            pager,
            tracker: DragTracker::new(),
            tween: None,
            snap_duration_ms: DEFAULT_SNAP_DURATION_MS,
            easing: Easing::Linear,
        }
    }

    pub fn with_snap_duration_ms(mut self, duration_ms: u64) -> Self {
        self.snap_duration_ms = duration_ms;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    pub fn pager_mut(&mut self) -> &mut Pager {
        &mut self.pager
    }

    pub fn into_pager(self) -> Pager {
        self.pager
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn cancel_animation(&mut self) {
        self.tween = None;
    }

    /// Call on pointer press. Grabbing the row stops any snap in flight.
    pub fn pointer_down(&mut self, position: f32, now_ms: u64) {
        self.cancel_animation();
        self.tracker.begin(position, now_ms);
    }

    /// Call on pointer motion; drives the pager once the gesture passes the
    /// touch slop.
    pub fn pointer_move(&mut self, position: f32, now_ms: u64) {
        if let Some(translation) = self.tracker.move_to(position, now_ms) {
            self.pager.drag_changed(translation);
        }
    }

    /// Call on pointer release.
    ///
    /// Returns the resulting snap for a real drag, or `None` for a tap
    /// (which leaves the pager untouched — tap-to-select is the indicator
    /// row's job).
    pub fn pointer_up(&mut self, now_ms: u64) -> Option<Snap> {
        match self.tracker.finish() {
            DragOutcome::Tap => None,
            DragOutcome::Drag {
                translation,
                predicted_end,
            } => {
                let snap = self.pager.drag_ended(translation, predicted_end);
                self.apply_snap(snap, now_ms);
                Some(snap)
            }
        }
    }

    /// Call when the host cancels the gesture (e.g. a system interruption).
    pub fn drag_cancel(&mut self) {
        self.tracker.cancel();
        self.pager.drag_cancelled();
        self.cancel_animation();
    }

    /// Taps the indicator for a real page; fully animated.
    pub fn indicator_tap(&mut self, page: usize, now_ms: u64) -> Snap {
        let snap = self.pager.select_page(page);
        self.apply_snap(snap, now_ms);
        snap
    }

    /// Selects a real page without animation.
    pub fn jump_to_page(&mut self, page: usize) -> Snap {
        self.cancel_animation();
        self.pager.select_page(page)
    }

    /// Advances the animation.
    ///
    /// Returns the visual offset while a tween is active, `None` once idle.
    pub fn tick(&mut self, now_ms: u64) -> Option<f32> {
        let tween = self.tween?;
        let offset = tween.sample(now_ms);
        if tween.is_done(now_ms) {
            self.tween = None;
        }
        Some(offset)
    }

    /// The offset to render with: the in-flight tween sample, or the
    /// pager's settled offset.
    pub fn visual_offset(&self, now_ms: u64) -> f32 {
        match &self.tween {
            Some(t) => t.sample(now_ms),
            None => self.pager.scroll_offset(),
        }
    }

    fn apply_snap(&mut self, snap: Snap, now_ms: u64) {
        if !snap.animated || snap.to == snap.from || self.snap_duration_ms == 0 {
            self.tween = None;
            return;
        }
        // Retarget from the in-flight sample so back-to-back snaps stay
        // continuous; the pager itself has already settled at snap.to.
        let from = match &self.tween {
            Some(t) => t.sample(now_ms),
            None => snap.from,
        };
        self.tween = Some(Tween::new(
            from,
            snap.to,
            now_ms,
            self.snap_duration_ms,
            self.easing,
        ));
    }
}
