/// Pure index ↔ offset arithmetic over a fixed-stride tile row.
///
/// All queries are closed-form over the layout constants; the type holds no
/// mutable state. `count` is the number of *slots* (in carousel mode that is
/// the real page count plus both buffer regions).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileLayout {
    pub tile_width: f32,
    pub tile_padding: f32,
    pub page_width: f32,
    pub count: usize,
}

impl TileLayout {
    pub fn new(count: usize, page_width: f32, tile_width: f32, tile_padding: f32) -> Self {
        Self {
            tile_width,
            tile_padding,
            page_width,
            count,
        }
    }

    /// Distance between the leading edges of two adjacent tiles.
    pub fn stride(&self) -> f32 {
        self.tile_width + self.tile_padding
    }

    /// Offset that centers the tile at index 0 in the visible page.
    pub fn leading_offset(&self) -> f32 {
        (self.page_width - self.tile_width - self.tile_padding * 2.0) / 2.0 + self.tile_padding
    }

    /// Total width of the tile row.
    pub fn content_width(&self) -> f32 {
        self.stride() * self.count as f32
    }

    /// Compensating shift for center-aligned layout containers.
    ///
    /// A container that centers its content must be shifted by this amount so
    /// index 0 aligns with left-aligned indexing. Left-aligned renderers can
    /// ignore it.
    pub fn stack_offset(&self) -> f32 {
        (self.content_width() - self.page_width - self.tile_padding) / 2.0
    }

    /// Row translation that centers the tile at `index`.
    ///
    /// Monotonically decreasing in `index`; index 0 maps to
    /// [`Self::leading_offset`].
    pub fn offset_for_index(&self, index: usize) -> f32 {
        self.leading_offset() - index as f32 * self.stride()
    }

    /// Inverts [`Self::offset_for_index`] with rounding.
    ///
    /// For an offset exactly equal to `offset_for_index(i)` this returns `i`;
    /// between two tile centers it returns whichever index's center is
    /// closer. Ties resolve to the higher index (round-half-up on the
    /// logical axis). The result is clamped to `[0, count - 1]` regardless
    /// of input magnitude; `count == 0` returns 0.
    pub fn index_for_offset(&self, offset: f32) -> usize {
        if self.count == 0 {
            return 0;
        }

        let logical = self.logical_offset(offset);
        let index = round_half_up(logical / self.stride());
        index.clamp(0, self.count as i64 - 1) as usize
    }

    /// Maps a row translation onto the logical scroll axis, where the value
    /// grows as the row moves toward higher indexes.
    fn logical_offset(&self, offset: f32) -> f32 {
        (offset - self.leading_offset()) * -1.0
    }
}

/// `floor(x + 0.5)` without the `std` float intrinsics.
///
/// Saturates at the `i64` range so non-finite inputs stay clampable.
fn round_half_up(x: f32) -> i64 {
    let shifted = x + 0.5;
    let truncated = shifted as i64;
    if shifted < truncated as f32 {
        truncated.saturating_sub(1)
    } else {
        truncated
    }
}
