//! Marker colours and key geometry.

use keymaze_core::{Color, Point};

/// Designated colours and sizes that give a colour grid its meaning.
///
/// The defaults match the maze images the tool was built around: black
/// walls, near-grey start and end markers and 20×20 keys.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MazeConfig {
    /// Impassable cells.
    pub wall: Color,
    /// The start marker.
    pub start: Color,
    /// The end marker.
    pub end: Color,
    /// Exact bounding-box size (width, height) of a key region.
    pub key_size: Point,
    /// Colour a renderer paints the final path with.
    pub path: Color,
    /// Colour a renderer paints visited nodes with.
    pub iteration_node: Color,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            wall: Color::from_rgb(0, 0, 0),
            start: Color::from_rgb(195, 195, 196),
            end: Color::from_rgb(126, 127, 127),
            key_size: Point::new(20, 20),
            path: Color::from_rgb(0, 0, 255),
            iteration_node: Color::from_rgb(255, 0, 255),
        }
    }
}

impl MazeConfig {
    /// Set the wall colour (builder).
    #[inline]
    pub const fn with_wall(mut self, wall: Color) -> Self {
        self.wall = wall;
        self
    }

    /// Set the start and end marker colours (builder).
    #[inline]
    pub const fn with_markers(mut self, start: Color, end: Color) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    /// Set the key size (builder).
    #[inline]
    pub const fn with_key_size(mut self, width: i32, height: i32) -> Self {
        self.key_size = Point::new(width, height);
        self
    }

    /// Number of cells in a key region.
    #[inline]
    pub fn key_area(&self) -> usize {
        (self.key_size.x.max(0) as usize) * (self.key_size.y.max(0) as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = MazeConfig::default();
        assert_eq!(c.wall.rgb(), (0, 0, 0));
        assert_eq!(c.start.rgb(), (195, 195, 196));
        assert_eq!(c.end.rgb(), (126, 127, 127));
        assert_eq!(c.key_size, Point::new(20, 20));
        assert_eq!(c.key_area(), 400);
        // Markers must not be grey, or they would classify as free space.
        assert!(!c.start.is_grey());
        assert!(!c.end.is_grey());
    }

    #[test]
    fn builder() {
        let c = MazeConfig::default()
            .with_key_size(2, 3)
            .with_wall(Color::from_rgb(1, 2, 3))
            .with_markers(Color::from_rgb(0, 255, 0), Color::from_rgb(255, 0, 0));
        assert_eq!(c.key_area(), 6);
        assert_eq!(c.wall, Color::from_rgb(1, 2, 3));
        assert_eq!(c.start, Color::from_rgb(0, 255, 0));
        assert_eq!(c.end, Color::from_rgb(255, 0, 0));
    }
}
