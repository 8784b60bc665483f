/// The gesture phase of a [`crate::Pager`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GesturePhase {
    Idle,
    Dragging,
}

/// A settled-offset transition reported by selection operations.
///
/// `animated` tells the presentation layer whether to interpolate from
/// `from` to `to` (a normal snap) or to jump hard (a carousel wraparound
/// correction, which must be visually imperceptible because the buffer slot
/// it leaves shows the same content as the slot it lands on).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snap {
    pub from: f32,
    pub to: f32,
    pub animated: bool,
}

/// One tile of the padded row, positioned for rendering.
///
/// `x` is the leading edge of the tile inside the visible page for a
/// left-aligned renderer. Center-aligned layout containers additionally need
/// [`crate::TileLayout::stack_offset`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileSlot {
    /// Index into the padded sequence.
    pub slot: usize,
    /// The real page whose content this slot shows (buffer slots alias the
    /// opposite boundary).
    pub page: usize,
    pub x: f32,
}

/// One entry of the indicator row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Indicator {
    pub page: usize,
    pub active: bool,
}
