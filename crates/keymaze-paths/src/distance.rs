use std::f64::consts::SQRT_2;
use std::fmt;

use keymaze_core::Point;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

/// Squared Euclidean distance between two points.
#[inline]
pub fn squared_euclidean(a: Point, b: Point) -> i32 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}

/// Octile distance: the exact cost of an unobstructed walk with unit
/// straight steps and √2 diagonal steps.
#[inline]
pub fn octile(a: Point, b: Point) -> f64 {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    let (lo, hi) = if dx < dy { (dx, dy) } else { (dy, dx) };
    f64::from(hi - lo) + SQRT_2 * f64::from(lo)
}

/// Estimate of the remaining cost from a cell to the end, used by
/// [`AStar`](crate::AStar) and [`Greedy`](crate::Greedy).
///
/// Only [`Octile`](Self::Octile) and [`Chebyshev`](Self::Chebyshev) never
/// overestimate on an 8-connected grid with √2 diagonals; the others trade
/// optimality for a stronger pull towards the end.
#[derive(Copy, Clone, Default)]
pub enum Heuristic {
    #[default]
    Manhattan,
    Chebyshev,
    SquaredEuclidean,
    Octile,
    Custom(fn(Point, Point) -> f64),
}

impl Heuristic {
    /// Estimated cost from `from` to `to`.
    #[inline]
    pub fn estimate(self, from: Point, to: Point) -> f64 {
        match self {
            Self::Manhattan => f64::from(manhattan(from, to)),
            Self::Chebyshev => f64::from(chebyshev(from, to)),
            Self::SquaredEuclidean => f64::from(squared_euclidean(from, to)),
            Self::Octile => octile(from, to),
            Self::Custom(f) => f(from, to),
        }
    }
}

impl fmt::Debug for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Manhattan => f.write_str("Manhattan"),
            Self::Chebyshev => f.write_str("Chebyshev"),
            Self::SquaredEuclidean => f.write_str("SquaredEuclidean"),
            Self::Octile => f.write_str("Octile"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}
