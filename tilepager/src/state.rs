/// A lightweight, serializable snapshot of a pager's settled position.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
/// Capture with [`crate::Pager::snapshot`] and rehydrate with
/// [`crate::Pager::restore`] to keep the selected page across frames or
/// sessions without coupling the pager to any specific UI framework.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PagerSnapshot {
    /// Selected index in padded slot space.
    pub slot: usize,
    /// Horizontal translation of the tile row.
    pub offset: f32,
}
