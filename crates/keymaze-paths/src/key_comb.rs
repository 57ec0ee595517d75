//! The set of keys held at a search state.

use std::cmp::Ordering;
use std::fmt;

use crate::error::MazeError;

/// An immutable bitmask of held keys. Bit `i` set means key `i` is held.
///
/// Key indices are handed out densely from 0 by
/// [`RegionGrid`](crate::RegionGrid) in the order keys are discovered.
///
/// There is no `Ord` impl. Frontier ordering goes through
/// [`priority_cmp`](Self::priority_cmp), which ranks by key count only.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyCombination(u64);

impl KeyCombination {
    /// No keys held. Every search starts here.
    pub const EMPTY: Self = Self(0);

    /// Number of distinct keys a combination can track.
    pub const CAPACITY: i32 = u64::BITS as i32;

    /// Wrap a raw bitmask.
    #[inline]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    /// The raw bitmask.
    #[inline]
    pub const fn bits(self) -> u64 {
        self.0
    }

    #[inline]
    fn mask(pos: i32) -> Result<u64, MazeError> {
        if !(0..Self::CAPACITY).contains(&pos) {
            return Err(MazeError::InvalidKeyPosition(pos));
        }
        Ok(1 << pos)
    }

    /// Return a combination with every bit in `positions` set.
    pub fn set_at(self, positions: impl IntoIterator<Item = i32>) -> Result<Self, MazeError> {
        positions
            .into_iter()
            .try_fold(self, |comb, pos| Ok(Self(comb.0 | Self::mask(pos)?)))
    }

    /// Return a combination with every bit in `positions` cleared.
    pub fn unset_at(self, positions: impl IntoIterator<Item = i32>) -> Result<Self, MazeError> {
        positions
            .into_iter()
            .try_fold(self, |comb, pos| Ok(Self(comb.0 & !Self::mask(pos)?)))
    }

    /// Whether key `pos` is held.
    pub fn is_set_at(self, pos: i32) -> Result<bool, MazeError> {
        Ok((self.0 & Self::mask(pos)?) != 0)
    }

    /// Number of keys held.
    #[inline]
    pub const fn keys_count(self) -> u32 {
        self.0.count_ones()
    }

    /// Whether no key is held.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Frontier tie-break: a combination holding more keys comes first.
    ///
    /// Returns `Less` when `self` holds more keys than `other`. Two
    /// different combinations with the same count compare `Equal`.
    #[inline]
    pub fn priority_cmp(&self, other: &Self) -> Ordering {
        other.keys_count().cmp(&self.keys_count())
    }
}

impl fmt::Display for KeyCombination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#b}", self.0)
    }
}
