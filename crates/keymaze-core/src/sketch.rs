//! Mazes drawn as text.
//!
//! A [`Sketch`] parses an ASCII art string and turns it into a
//! [`ColorGrid`] through a character → colour legend. It stands in for a
//! decoded bitmap wherever a maze is easier to write down than to paint.

use thiserror::Error;

use crate::color::Color;
use crate::geom::Point;
use crate::grid::ColorGrid;

/// A rectangular block of characters, one per grid cell.
///
/// Lines are separated by `'\n'` and must all have the same width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sketch {
    content: String,
    size: Point,
}

impl Sketch {
    /// Parse a sketch. Leading and trailing whitespace of the whole string
    /// is trimmed, individual lines are kept as written.
    pub fn new(s: &str) -> Result<Self, SketchError> {
        let s = s.trim();
        let mut width: Option<i32> = None;
        let mut height = 0;

        for line in s.split('\n') {
            let w = line.chars().count() as i32;
            match width {
                None => width = Some(w),
                Some(prev) if prev != w => {
                    return Err(SketchError::InconsistentSize {
                        line: height,
                        expected: prev,
                        found: w,
                    });
                }
                Some(_) => {}
            }
            height += 1;
        }

        let width = width.unwrap_or(0);
        if width == 0 {
            height = 0;
        }
        Ok(Self {
            content: s.to_string(),
            size: Point::new(width, height),
        })
    }

    /// The sketch text after trimming.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// The (width, height) size of the sketch in cells.
    pub fn size(&self) -> Point {
        self.size
    }

    /// Call `f` for every position and its character, row by row.
    pub fn iter(&self, mut f: impl FnMut(Point, char)) {
        let mut x: i32 = 0;
        let mut y: i32 = 0;
        for ch in self.content.chars() {
            if ch == '\n' {
                x = 0;
                y += 1;
                continue;
            }
            f(Point::new(x, y), ch);
            x += 1;
        }
    }

    /// Render the sketch into a colour grid. `legend` maps each character
    /// to its colour; a character without a mapping is an error.
    pub fn to_grid(&self, legend: impl Fn(char) -> Option<Color>) -> Result<ColorGrid, SketchError> {
        let mut grid = ColorGrid::new(self.size.x, self.size.y, Color::default());
        let mut unmapped = None;
        self.iter(|p, ch| {
            if unmapped.is_some() {
                return;
            }
            match legend(ch) {
                Some(color) => grid.set(p, color),
                None => unmapped = Some(SketchError::UnmappedChar { ch, pos: p }),
            }
        });
        match unmapped {
            Some(err) => Err(err),
            None => Ok(grid),
        }
    }
}

/// Errors that can occur when parsing or rendering a sketch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SketchError {
    /// Lines have different widths.
    #[error("sketch line {line} is {found} cells wide, expected {expected}")]
    InconsistentSize { line: i32, expected: i32, found: i32 },
    /// The legend has no colour for a character.
    #[error("sketch character \u{201c}{ch}\u{201d} at {pos} has no colour")]
    UnmappedChar { ch: char, pos: Point },
}
