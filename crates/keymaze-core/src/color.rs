//! RGB colours as read from a maze image.

use std::fmt;

/// An RGB colour packed into a `u32` (0x00RRGGBB). There is no alpha
/// channel; maze images are treated as opaque.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color(pub u32);

impl Color {
    /// Pure black (0, 0, 0).
    pub const BLACK: Self = Self::from_rgb(0, 0, 0);

    /// Pure white (255, 255, 255).
    pub const WHITE: Self = Self::from_rgb(255, 255, 255);

    /// Construct from individual RGB components.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    /// Red component.
    #[inline]
    pub const fn r(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    /// Green component.
    #[inline]
    pub const fn g(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    /// Blue component.
    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    /// The `(r, g, b)` triple.
    #[inline]
    pub const fn rgb(self) -> (u8, u8, u8) {
        (self.r(), self.g(), self.b())
    }

    /// Whether all three channels are equal (black, white and every grey
    /// in between).
    #[inline]
    pub const fn is_grey(self) -> bool {
        self.r() == self.g() && self.g() == self.b()
    }
}

impl From<(u8, u8, u8)> for Color {
    #[inline]
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::from_rgb(r, g, b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0 & 0x00FF_FFFF)
    }
}
