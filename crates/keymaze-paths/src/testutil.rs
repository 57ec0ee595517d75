//! Sketch-based mazes shared by the unit tests.
//!
//! Legend: `#` wall, `.` white floor, `-` grey floor, `S` start, `E` end,
//! `r`/`b` red and blue regions (keys or zones depending on
//! their shape). Keys are 2×2.

use keymaze_core::{Color, Point, Sketch};

use crate::config::MazeConfig;
use crate::maze::RegionGrid;
use crate::region::RegionType;

pub(crate) const RED: Color = Color::from_rgb(220, 30, 30);
pub(crate) const BLUE: Color = Color::from_rgb(30, 30, 220);

pub(crate) fn config() -> MazeConfig {
    MazeConfig::default().with_key_size(2, 2)
}

pub(crate) fn legend(ch: char) -> Option<Color> {
    let config = config();
    match ch {
        '#' => Some(config.wall),
        '.' => Some(Color::WHITE),
        '-' => Some(Color::from_rgb(128, 128, 128)),
        'S' => Some(config.start),
        'E' => Some(config.end),
        'r' => Some(RED),
        'b' => Some(BLUE),
        _ => None,
    }
}

pub(crate) fn maze(s: &str) -> RegionGrid {
    let colors = Sketch::new(s).unwrap().to_grid(legend).unwrap();
    RegionGrid::with_config(&colors, config())
}

/// A red key on the left and a one-cell red zone that is the only gap in
/// the wall between the start and the end.
pub(crate) const GATED: &str = "\
rr.S.#...
rr...r...
.....#..E";

/// The red zone cell of [`GATED`].
pub(crate) const GATED_ZONE: Point = Point::new(5, 1);

/// [`GATED`] followed by a second wall whose gap is a blue zone. The blue
/// key sits between the two walls, so it is only reachable with red.
pub(crate) const TWO_KEYS: &str = "\
rr.S.#.....#...
rr...r..bb.b..E
.....#..bb.#...";

/// The red and blue zone cells of [`TWO_KEYS`].
pub(crate) const RED_ZONE: Point = Point::new(5, 1);
pub(crate) const BLUE_ZONE: Point = Point::new(11, 1);

/// Checks that `path` through [`TWO_KEYS`] picks up red, crosses the red
/// zone, picks up blue and crosses the blue zone, in that order.
pub(crate) fn assert_two_keys_order(grid: &RegionGrid, path: &[Point]) {
    let key_of = |color: Color| {
        path.iter()
            .position(|&p| {
                let cell = grid.pixel_at(p).unwrap();
                cell.kind == RegionType::Key && cell.color == color
            })
            .expect("key not on path")
    };
    let at = |q: Point| path.iter().position(|&p| p == q).expect("zone not on path");
    let order = [key_of(RED), at(RED_ZONE), key_of(BLUE), at(BLUE_ZONE)];
    assert!(order.is_sorted(), "red key, red zone, blue key, blue zone at {order:?}");
}

pub(crate) fn path_cost(path: &[Point]) -> f64 {
    path.windows(2)
        .map(|w| if w[0].is_diagonal_to(w[1]) { std::f64::consts::SQRT_2 } else { 1.0 })
        .sum()
}

/// Checks that `path` starts on a start cell, ends on the end marker and
/// only takes single 8-directional steps.
pub(crate) fn assert_valid_path(grid: &RegionGrid, path: &[Point]) {
    let first = *path.first().expect("empty path");
    let last = *path.last().expect("empty path");
    assert_eq!(grid.pixel_at(first).unwrap().kind, RegionType::Start);
    assert_eq!(Ok(last), grid.find_end());
    for w in path.windows(2) {
        assert!(w[0].touches(w[1]), "{} and {} are not adjacent", w[0], w[1]);
    }
}
