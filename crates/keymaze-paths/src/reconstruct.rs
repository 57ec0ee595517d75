//! Walking a [`DistanceTable`] back from the end to the start.

use keymaze_core::Point;

use crate::error::MazeError;
use crate::key_comb::KeyCombination;
use crate::maze::RegionGrid;
use crate::region::RegionType;
use crate::table::DistanceTable;

/// Rebuild the path to `end` from the costs a search recorded.
///
/// The walk starts from the cheapest combination recorded at `end` and
/// repeatedly steps to the neighbour with the smallest cost below the
/// current one under the same combination. When no neighbour improves and
/// the current cell is a key whose bit is held, the bit is dropped and the
/// cell is tried again. The walk ends on a start cell holding no keys.
///
/// The returned path runs from that start cell to `end`, both included.
/// Fails with [`MazeError::NoPath`] if `end` was never recorded, and with
/// [`MazeError::Unreachable`] if the table has no descending chain from a
/// recorded cell.
pub fn reconstruct(
    grid: &RegionGrid,
    table: &DistanceTable,
    end: Point,
) -> Result<Vec<Point>, MazeError> {
    let Some((mut comb, mut cost)) = table.best_at(end) else {
        return Err(MazeError::NoPath);
    };

    let mut path = vec![end];
    let mut cur = end;
    while !(grid.pixel_at(cur)?.kind == RegionType::Start && comb == KeyCombination::EMPTY) {
        let mut next = cur;
        for n in grid.adjacent_coords(cur) {
            if let Some(c) = table.get(n, comb) {
                if c < cost {
                    next = n;
                    cost = c;
                }
            }
        }

        if next != cur {
            path.push(next);
            cur = next;
            continue;
        }

        let cell = grid.pixel_at(cur)?;
        let held = match grid.key_index(cell.color) {
            Some(k) if cell.kind == RegionType::Key => comb.is_set_at(k)?.then_some(k),
            _ => None,
        };
        match held {
            Some(k) => comb = comb.unset_at([k])?,
            None => {
                log::error!("no cheaper neighbour of {cur} under keys {comb} at cost {cost}");
                return Err(MazeError::Unreachable(cur));
            }
        }
    }

    path.reverse();
    Ok(path)
}

/// [`reconstruct`] towards the grid's end marker.
pub fn reconstruct_to_end(grid: &RegionGrid, table: &DistanceTable) -> Result<Vec<Point>, MazeError> {
    reconstruct(grid, table, grid.find_end()?)
}
