//! Per-cell classification.

use keymaze_core::Color;

/// What a cell is, as far as movement is concerned.
///
/// Variants are declared in ordinal order; the derived `Ord` follows it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RegionType {
    /// Not classified yet.
    #[default]
    Unset,
    Wall,
    Free,
    /// Part of an exactly key-sized region; entering it picks up the key of
    /// its colour.
    Key,
    /// Locked until the key of the same colour is held.
    Zone,
    Start,
    End,
}

/// A maze cell: its image colour and its (lazily computed) region type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub color: Color,
    pub kind: RegionType,
}

impl Cell {
    /// An unclassified cell of the given colour.
    #[inline]
    pub const fn new(color: Color) -> Self {
        Self {
            color,
            kind: RegionType::Unset,
        }
    }

    /// Whether the cell's colour is a shade of grey.
    #[inline]
    pub const fn is_grey(&self) -> bool {
        self.color.is_grey()
    }

    /// Whether the cell has been classified.
    #[inline]
    pub fn is_classified(&self) -> bool {
        self.kind != RegionType::Unset
    }
}
