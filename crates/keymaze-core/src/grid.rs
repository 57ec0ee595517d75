//! The [`ColorGrid`] type — a fixed-size 2D grid of [`Color`]s.
//!
//! This is the decoded image a maze is built from. Decoding itself happens
//! elsewhere; callers fill the grid from pixels, from a closure or from a
//! [`Sketch`](crate::Sketch).

use crate::color::Color;
use crate::geom::{Point, Range, RangeIter};

/// A width × height grid of colours, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorGrid {
    cells: Vec<Color>,
    bounds: Range,
}

impl ColorGrid {
    /// Create a new grid of the given dimensions filled with `fill`.
    pub fn new(width: i32, height: i32, fill: Color) -> Self {
        let bounds = Range::new(0, 0, width.max(0), height.max(0));
        Self {
            cells: vec![fill; bounds.len()],
            bounds,
        }
    }

    /// Create a grid by asking `f` for the colour of every position.
    pub fn from_fn(width: i32, height: i32, mut f: impl FnMut(Point) -> Color) -> Self {
        let bounds = Range::new(0, 0, width.max(0), height.max(0));
        Self {
            cells: bounds.iter().map(&mut f).collect(),
            bounds,
        }
    }

    /// The bounding range of the grid, always anchored at the origin.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Width.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Height.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some((p.y as usize) * (self.bounds.width() as usize) + (p.x as usize))
    }

    /// Read the colour at `p`, or `None` if `p` is outside the grid.
    pub fn at(&self, p: Point) -> Option<Color> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Set the colour at `p`. No-op if `p` is outside the grid.
    pub fn set(&mut self, p: Point, color: Color) {
        if let Some(i) = self.index(p) {
            self.cells[i] = color;
        }
    }

    /// Fill every cell of `r` (clipped to the grid) with `color`.
    pub fn fill_range(&mut self, r: Range, color: Color) {
        for p in r.iter() {
            self.set(p, color);
        }
    }

    /// Row-major iterator over `(Point, Color)` pairs.
    pub fn iter(&self) -> ColorGridIter<'_> {
        ColorGridIter {
            grid: self,
            inner: self.bounds.iter(),
        }
    }
}

/// Iterator over `(Point, Color)` pairs in a [`ColorGrid`].
pub struct ColorGridIter<'a> {
    grid: &'a ColorGrid,
    inner: RangeIter,
}

impl Iterator for ColorGridIter<'_> {
    type Item = (Point, Color);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let p = self.inner.next()?;
        let i = self.grid.index(p)?;
        Some((p, self.grid.cells[i]))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_new_and_at() {
        let g = ColorGrid::new(4, 3, Color::WHITE);
        assert_eq!(g.width(), 4);
        assert_eq!(g.height(), 3);
        assert_eq!(g.at(Point::new(0, 0)), Some(Color::WHITE));
        assert_eq!(g.at(Point::new(3, 2)), Some(Color::WHITE));
        assert_eq!(g.at(Point::new(4, 0)), None);
        assert_eq!(g.at(Point::new(-1, 0)), None);
    }

    #[test]
    fn grid_set_and_get() {
        let mut g = ColorGrid::new(4, 3, Color::WHITE);
        g.set(Point::new(2, 1), Color::BLACK);
        assert_eq!(g.at(Point::new(2, 1)), Some(Color::BLACK));
        // out of bounds is ignored
        g.set(Point::new(10, 10), Color::BLACK);
        assert_eq!(g.iter().filter(|&(_, c)| c == Color::BLACK).count(), 1);
    }

    #[test]
    fn grid_from_fn_is_row_major() {
        let g = ColorGrid::from_fn(3, 2, |p| Color::from_rgb(p.x as u8, p.y as u8, 0));
        let cells: Vec<_> = g.iter().collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[1], (Point::new(1, 0), Color::from_rgb(1, 0, 0)));
        assert_eq!(cells[4], (Point::new(1, 1), Color::from_rgb(1, 1, 0)));
    }

    #[test]
    fn grid_fill_range_clips() {
        let mut g = ColorGrid::new(3, 3, Color::WHITE);
        g.fill_range(Range::new(1, 1, 5, 5), Color::BLACK);
        assert_eq!(g.iter().filter(|&(_, c)| c == Color::BLACK).count(), 4);
        assert_eq!(g.at(Point::new(0, 0)), Some(Color::WHITE));
    }

    #[test]
    fn negative_dimensions_are_empty() {
        let g = ColorGrid::new(-2, 5, Color::WHITE);
        assert_eq!(g.iter().count(), 0);
        assert!(!g.contains(Point::ZERO));
    }
}
