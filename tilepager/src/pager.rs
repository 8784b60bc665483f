use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cell::Cell;

use crate::layout::TileLayout;
use crate::{GesturePhase, Indicator, PagerOptions, PagerSnapshot, Snap, TileSlot};

/// Number of aliasing slots padded onto each end of the row in carousel
/// mode. The last `CAROUSEL_BUFFER` real pages occupy the leading slots and
/// the first `CAROUSEL_BUFFER` real pages occupy the trailing slots, so
/// index arithmetic can wrap by jumping across real data without genuine
/// circular indexing.
pub const CAROUSEL_BUFFER: usize = 2;

/// A headless paging/carousel engine.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any renderable items; adapters render
///   `items[slot_to_page(slot)]` for each slot.
/// - Your adapter drives it with drag translations and selection calls.
/// - Rendering is exposed via zero-allocation iteration APIs
///   (`for_each_tile`, `for_each_indicator`).
///
/// State transitions are synchronous: selection settles `scroll_offset`
/// immediately and reports a [`Snap`] for the presentation layer to
/// interpolate. For a tween-driven frame loop and pointer-event plumbing,
/// see the `tilepager-adapter` crate.
///
/// Outside of an active wraparound correction the pager maintains
/// `scroll_offset == layout.offset_for_index(selected_slot) + drag_offset`.
#[derive(Clone, Debug)]
pub struct Pager {
    options: PagerOptions,
    layout: TileLayout,
    selected: usize,
    scroll_offset: f32,
    drag_offset: f32,
    dragging: bool,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl Pager {
    /// Creates a new pager from options.
    ///
    /// The caller-supplied `initial_page` is shifted into padded slot space
    /// and the scroll offset is initialized without animation.
    ///
    /// Carousel mode requires `count >= CAROUSEL_BUFFER` so each buffer
    /// region can alias real pages; violating this is a precondition error,
    /// not a recoverable state.
    pub fn new(options: PagerOptions) -> Self {
        debug_assert!(
            !options.carousel || options.count >= CAROUSEL_BUFFER,
            "carousel mode needs at least {CAROUSEL_BUFFER} real pages"
        );

        let buffer = if options.carousel { CAROUSEL_BUFFER } else { 0 };
        let layout = TileLayout::new(
            options.count + 2 * buffer,
            options.page_width,
            options.tile_width,
            options.tile_padding,
        );
        let selected = options.initial_page.min(options.count.saturating_sub(1)) + buffer;
        let scroll_offset = layout.offset_for_index(selected);
        pdebug!(
            count = options.count,
            carousel = options.carousel,
            selected,
            "Pager::new"
        );

        Self {
            options,
            layout,
            selected,
            scroll_offset,
            drag_offset: 0.0,
            dragging: false,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        }
    }

    pub fn options(&self) -> &PagerOptions {
        &self.options
    }

    pub fn layout(&self) -> &TileLayout {
        &self.layout
    }

    /// Buffer width on each end: `CAROUSEL_BUFFER` in carousel mode, else 0.
    pub fn buffer(&self) -> usize {
        if self.options.carousel {
            CAROUSEL_BUFFER
        } else {
            0
        }
    }

    /// Number of real pages.
    pub fn real_count(&self) -> usize {
        self.options.count
    }

    /// Number of slots in the padded sequence.
    pub fn slot_count(&self) -> usize {
        self.layout.count
    }

    /// Selected index in padded slot space.
    pub fn selected_slot(&self) -> usize {
        self.selected
    }

    /// The externally-observable selected index, in unpadded page space.
    ///
    /// This is the value to write back to a host binding; it differs from
    /// [`Self::selected_slot`] by [`Self::buffer`] in carousel mode.
    pub fn page(&self) -> usize {
        self.selected - self.buffer()
    }

    /// Current horizontal translation of the tile row.
    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// Live drag translation; 0 while idle.
    pub fn drag_offset(&self) -> f32 {
        self.drag_offset
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn phase(&self) -> GesturePhase {
        if self.dragging {
            GesturePhase::Dragging
        } else {
            GesturePhase::Idle
        }
    }

    /// Maps a padded slot to the real page whose content it shows.
    ///
    /// Buffer slots alias the opposite boundary: the leading buffer shows
    /// the last real pages, the trailing buffer shows the first.
    pub fn slot_to_page(&self, slot: usize) -> usize {
        debug_assert!(slot < self.slot_count(), "slot out of range");
        let buffer = self.buffer();
        if slot < buffer {
            self.options.count - buffer + slot
        } else if slot >= buffer + self.options.count {
            slot - buffer - self.options.count
        } else {
            slot - buffer
        }
    }

    fn compute_scroll_offset(&self) -> f32 {
        self.layout.offset_for_index(self.selected) + self.drag_offset
    }

    /// Applies a drag-change event with horizontal translation `translation`.
    ///
    /// Purely visual tracking; the selected index does not change until
    /// [`Self::drag_ended`].
    pub fn drag_changed(&mut self, translation: f32) {
        self.dragging = true;
        self.drag_offset = translation;
        self.scroll_offset = self.compute_scroll_offset();
        ptrace!(translation, "drag_changed");
        self.notify();
    }

    /// Applies a drag-end event.
    ///
    /// `predicted_end` is the momentum-projected end translation supplied by
    /// the host framework (or by `tilepager-adapter`'s drag tracker). The
    /// overshoot `(predicted_end - translation)` is damped by
    /// `fling_damping` and the result snapped to the nearest index; this is
    /// the only place momentum influences the final page.
    pub fn drag_ended(&mut self, translation: f32, predicted_end: f32) -> Snap {
        let mut snap = Snap {
            from: self.scroll_offset,
            to: self.scroll_offset,
            animated: false,
        };
        self.batch_update(|p| {
            p.drag_offset = translation;
            p.scroll_offset = p.compute_scroll_offset();

            let adjustment = (predicted_end - translation) * p.options.fling_damping;
            let target = p.layout.index_for_offset(p.scroll_offset + adjustment);
            pdebug!(translation, predicted_end, target, "drag_ended");

            p.dragging = false;
            p.drag_offset = 0.0;
            snap = p.select_slot(target);
        });
        snap
    }

    /// Resets an interrupted gesture with no committed index change.
    pub fn drag_cancelled(&mut self) {
        if !self.dragging && self.drag_offset == 0.0 {
            return;
        }
        self.dragging = false;
        self.drag_offset = 0.0;
        self.scroll_offset = self.layout.offset_for_index(self.selected);
        ptrace!("drag_cancelled");
        self.notify();
    }

    /// Selects a padded slot; every index change funnels through here.
    ///
    /// In carousel mode a slot inside either buffer region is silently
    /// remapped across the row (`animated == false`): landing before the
    /// leading buffer boundary maps "scrolled past the start" onto the real
    /// tail, landing in the trailing buffer maps "scrolled past the end"
    /// onto the real head. Both rely on buffer slots showing duplicate
    /// boundary content, so the jump lands on an identical-looking tile.
    pub fn select_slot(&mut self, slot: usize) -> Snap {
        let from = self.scroll_offset;
        let buffer = self.buffer();
        let slot_count = self.slot_count();

        let (slot, animated) = if buffer > 0 && slot < buffer {
            (slot_count - buffer - 1, false)
        } else if buffer > 0 && slot >= slot_count - buffer {
            (buffer, false)
        } else {
            (slot.min(slot_count.saturating_sub(1)), true)
        };

        self.selected = slot;
        self.scroll_offset = self.compute_scroll_offset();
        pdebug!(slot, animated, "select_slot");
        self.notify();

        Snap {
            from,
            to: self.scroll_offset,
            animated,
        }
    }

    /// Selects a real page (unpadded index); the indicator-tap path.
    pub fn select_page(&mut self, page: usize) -> Snap {
        let page = page.min(self.real_count().saturating_sub(1));
        self.select_slot(page + self.buffer())
    }

    /// Advances one slot forward, wrapping in carousel mode.
    pub fn next_page(&mut self) -> Snap {
        self.select_slot(self.selected + 1)
    }

    /// Steps one slot back, wrapping in carousel mode.
    pub fn previous_page(&mut self) -> Snap {
        self.select_slot(self.selected.saturating_sub(1))
    }

    /// Visits every slot of the padded row with its aliased page and the
    /// leading-edge x position inside the visible page.
    pub fn for_each_tile(&self, mut f: impl FnMut(TileSlot)) {
        let stride = self.layout.stride();
        for slot in 0..self.slot_count() {
            f(TileSlot {
                slot,
                page: self.slot_to_page(slot),
                x: self.scroll_offset + slot as f32 * stride,
            });
        }
    }

    /// Visits one indicator entry per real page.
    pub fn for_each_indicator(&self, mut f: impl FnMut(Indicator)) {
        let active = self.page();
        for page in 0..self.real_count() {
            f(Indicator {
                page,
                active: page == active,
            });
        }
    }

    /// Collects the padded row into `out` (clears `out` first).
    ///
    /// Convenience wrapper around [`Self::for_each_tile`]; prefer the
    /// iteration API and a reused scratch buffer in hot adapter paths.
    pub fn collect_tiles(&self, out: &mut Vec<TileSlot>) {
        out.clear();
        self.for_each_tile(|t| out.push(t));
    }

    /// Collects the indicator row into `out` (clears `out` first).
    pub fn collect_indicators(&self, out: &mut Vec<Indicator>) {
        out.clear();
        self.for_each_indicator(|i| out.push(i));
    }

    pub fn set_fling_damping(&mut self, fling_damping: f32) {
        self.options.fling_damping = fling_damping;
        self.notify();
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&Pager, bool) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
        self.notify();
    }

    /// Returns a lightweight snapshot of the settled position.
    pub fn snapshot(&self) -> PagerSnapshot {
        PagerSnapshot {
            slot: self.selected,
            offset: self.scroll_offset,
        }
    }

    /// Restores a previously captured snapshot, resetting any live gesture.
    pub fn restore(&mut self, snapshot: PagerSnapshot) {
        if snapshot.slot >= self.slot_count() {
            pwarn!(slot = snapshot.slot, "restore: slot out of range, clamping");
        }
        self.selected = snapshot.slot.min(self.slot_count().saturating_sub(1));
        self.dragging = false;
        self.drag_offset = 0.0;
        self.scroll_offset = snapshot.offset;
        self.notify();
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self, self.dragging);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    ///
    /// Recommended when a host event mutates several fields at once and the
    /// callback drives rendering.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }
}
