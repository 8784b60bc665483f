use alloc::sync::Arc;

use crate::pager::Pager;

/// A callback fired when a pager state update occurs.
///
/// The second argument is `is_dragging`. Read [`Pager::page`] inside the
/// callback for the externally-observable (unpadded) index to write back to
/// the host; it only changes on settled index changes, never during an
/// active drag.
pub type OnChangeCallback = Arc<dyn Fn(&Pager, bool) + Send + Sync>;

/// Damping applied to the momentum overshoot on drag end.
///
/// Tuned empirically, not physically derived; it softens overshoot from
/// fast flicks.
pub const DEFAULT_FLING_DAMPING: f32 = 0.66;

/// Configuration for [`Pager`].
///
/// Layout constants are fixed at construction. `count` is the number of
/// *real* pages; in carousel mode the pager pads it with
/// [`crate::CAROUSEL_BUFFER`] aliasing slots on each side.
#[derive(Clone)]
pub struct PagerOptions {
    pub count: usize,
    pub page_width: f32,
    pub tile_width: f32,
    pub tile_padding: f32,
    /// Enables infinite-loop wraparound via buffer regions.
    pub carousel: bool,
    /// Initial selection, in unpadded page space.
    pub initial_page: usize,
    /// Multiplier for `(predicted_end - translation)` on drag end.
    pub fling_damping: f32,
    /// Optional callback fired when the pager's internal state changes.
    pub on_change: Option<OnChangeCallback>,
}

impl PagerOptions {
    pub fn new(count: usize, page_width: f32, tile_width: f32, tile_padding: f32) -> Self {
        Self {
            count,
            page_width,
            tile_width,
            tile_padding,
            carousel: false,
            initial_page: 0,
            fling_damping: DEFAULT_FLING_DAMPING,
            on_change: None,
        }
    }

    pub fn with_carousel(mut self, carousel: bool) -> Self {
        self.carousel = carousel;
        self
    }

    pub fn with_initial_page(mut self, initial_page: usize) -> Self {
        self.initial_page = initial_page;
        self
    }

    pub fn with_fling_damping(mut self, fling_damping: f32) -> Self {
        self.fling_damping = fling_damping;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&Pager, bool) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl core::fmt::Debug for PagerOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PagerOptions")
            .field("count", &self.count)
            .field("page_width", &self.page_width)
            .field("tile_width", &self.tile_width)
            .field("tile_padding", &self.tile_padding)
            .field("carousel", &self.carousel)
            .field("initial_page", &self.initial_page)
            .field("fling_damping", &self.fling_damping)
            .finish_non_exhaustive()
    }
}
