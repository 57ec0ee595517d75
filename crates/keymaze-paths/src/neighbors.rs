use keymaze_core::{Point, Range};

/// Offsets of the eight surrounding cells, column by column.
const OFFSETS: [Point; 8] = [
    Point::new(-1, -1),
    Point::new(-1, 0),
    Point::new(-1, 1),
    Point::new(0, -1),
    Point::new(0, 1),
    Point::new(1, -1),
    Point::new(1, 0),
    Point::new(1, 1),
];

/// Iterator over the in-bounds 8-neighbours of a point.
///
/// Cheap to create; call [`RegionGrid::adjacent_coords`](crate::RegionGrid::adjacent_coords)
/// again to restart.
#[derive(Clone, Debug)]
pub struct AdjacentCoords {
    center: Point,
    bounds: Range,
    next: usize,
}

impl AdjacentCoords {
    pub(crate) fn new(center: Point, bounds: Range) -> Self {
        Self {
            center,
            bounds,
            next: 0,
        }
    }
}

impl Iterator for AdjacentCoords {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        while let Some(&d) = OFFSETS.get(self.next) {
            self.next += 1;
            let n = self.center + d;
            if self.bounds.contains(n) {
                return Some(n);
            }
        }
        None
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(OFFSETS.len() - self.next.min(OFFSETS.len())))
    }
}
