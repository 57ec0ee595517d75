//! The frontier loop shared by every algorithm.

use keymaze_core::Point;

use crate::cancel::CancelToken;
use crate::distance::Heuristic;
use crate::error::MazeError;
use crate::frontier::{Frontier, FrontierEntry};
use crate::key_comb::KeyCombination;
use crate::maze::RegionGrid;
use crate::reconstruct::reconstruct;
use crate::table::DistanceTable;
use crate::traits::Observer;

/// How a newly reached state is ranked in the frontier.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Priority {
    /// Cost from the start.
    Cost,
    /// Cost from the start plus the estimate to the end.
    CostAndEstimate(Heuristic),
    /// Estimate to the end only.
    Estimate(Heuristic),
}

impl Priority {
    fn of(self, cost: f64, p: Point, end: Point) -> f64 {
        match self {
            Priority::Cost => cost,
            Priority::CostAndEstimate(h) => cost + h.estimate(p, end),
            Priority::Estimate(h) => h.estimate(p, end),
        }
    }
}

/// When a reached state overwrites the table.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Relax {
    /// When it beats the recorded cost and the best cost to the end.
    Improve,
    /// Only the first time the state is reached.
    FirstWrite,
}

/// When the search stops.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum EndRule {
    /// Run until the frontier is empty, skipping states that cannot beat
    /// the best cost to the end. The end is never pushed.
    Bound,
    /// Stop as soon as a state on the end is popped.
    StopOnPop,
}

#[derive(Copy, Clone, Debug)]
pub(crate) struct Rules {
    pub(crate) priority: Priority,
    pub(crate) relax: Relax,
    pub(crate) end: EndRule,
}

/// Explore the grid from its start marker and return the recorded costs
/// together with the end coordinate.
pub(crate) fn explore(
    name: &str,
    grid: &mut RegionGrid,
    rules: Rules,
    observer: &mut dyn Observer,
    cancel: Option<&CancelToken>,
) -> Result<(DistanceTable, Point), MazeError> {
    let start = grid.find_start()?;
    grid.classify_region(start)?;
    let end = grid.find_end()?;
    grid.classify_region(end)?;
    log::debug!("{name}: searching from {start} to {end}");

    let mut table = DistanceTable::with_start(start);
    let mut frontier = Frontier::default();
    frontier.push(0.0, KeyCombination::EMPTY, start);
    let mut best_end = f64::INFINITY;
    let mut expanded = 0usize;

    while let Some(FrontierEntry {
        priority,
        comb,
        pos,
    }) = frontier.pop()
    {
        if cancel.is_some_and(CancelToken::is_cancelled) {
            log::warn!("{name}: cancelled after {expanded} states");
            return Err(MazeError::Cancelled);
        }
        match rules.end {
            EndRule::Bound if priority >= best_end => continue,
            EndRule::StopOnPop if pos == end => break,
            _ => {}
        }

        observer.visit(pos, comb);
        expanded += 1;

        // Every pushed state was recorded first.
        let cost = table.get(pos, comb).ok_or(MazeError::Unreachable(pos))?;
        for edge in grid.adjacent_edges(pos, comb)? {
            let edge = edge?;
            let next_cost = cost + edge.weight;
            let written = match rules.relax {
                Relax::Improve => {
                    next_cost < best_end && table.improve(edge.to, edge.comb, next_cost)
                }
                Relax::FirstWrite => table.insert_new(edge.to, edge.comb, next_cost),
            };
            if !written {
                continue;
            }
            if rules.end == EndRule::Bound && edge.to == end {
                best_end = next_cost;
                continue;
            }
            frontier.push(rules.priority.of(next_cost, edge.to, end), edge.comb, edge.to);
        }
    }

    log::debug!("{name}: expanded {expanded} states, recorded {}", table.len());
    if rules.end == EndRule::Bound && best_end.is_infinite() {
        return Err(MazeError::NoPath);
    }
    Ok((table, end))
}

/// Explore, then rebuild the path to the end.
pub(crate) fn find_path(
    name: &str,
    grid: &mut RegionGrid,
    rules: Rules,
    observer: &mut dyn Observer,
    cancel: Option<&CancelToken>,
) -> Result<Vec<Point>, MazeError> {
    let (table, end) = explore(name, grid, rules, observer, cancel)?;
    let path = reconstruct(grid, &table, end)?;
    log::debug!("{name}: path of {} cells", path.len());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{BLUE, RED, TWO_KEYS, maze};
    use crate::traits::NoObserver;

    const DIJKSTRA: Rules = Rules {
        priority: Priority::Cost,
        relax: Relax::Improve,
        end: EndRule::Bound,
    };

    #[test]
    fn table_holds_optimal_costs() {
        let mut grid = maze("S...E");
        let (table, end) = explore("test", &mut grid, DIJKSTRA, &mut NoObserver, None).unwrap();
        assert_eq!(end, Point::new(4, 0));
        for x in 0..5 {
            assert_eq!(table.get(Point::new(x, 0), KeyCombination::EMPTY), Some(x as f64));
        }
    }

    #[test]
    fn end_is_recorded_but_never_expanded() {
        let mut grid = maze("S.E.");
        let mut popped = Vec::new();
        let mut obs = |p: Point, _: KeyCombination| popped.push(p);
        explore("test", &mut grid, DIJKSTRA, &mut obs, None).unwrap();
        assert!(!popped.contains(&Point::new(2, 0)));
        // (3, 0) is only reachable through the end.
        assert!(!popped.contains(&Point::new(3, 0)));
    }

    #[test]
    fn greedy_stops_on_end() {
        let rules = Rules {
            priority: Priority::Estimate(Heuristic::Manhattan),
            relax: Relax::FirstWrite,
            end: EndRule::StopOnPop,
        };
        let mut grid = maze("S..E");
        let mut popped = Vec::new();
        let mut obs = |p: Point, _: KeyCombination| popped.push(p);
        let (table, _) = explore("test", &mut grid, rules, &mut obs, None).unwrap();
        assert_eq!(popped, vec![Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)]);
        assert_eq!(table.get(Point::new(3, 0), KeyCombination::EMPTY), Some(3.0));
    }

    #[test]
    fn same_cell_under_several_combinations() {
        let mut grid = maze(TWO_KEYS);
        let (table, _) = explore("test", &mut grid, DIJKSTRA, &mut NoObserver, None).unwrap();
        let red = KeyCombination::EMPTY
            .set_at([grid.key_index(RED).unwrap()])
            .unwrap();
        let both = red.set_at([grid.key_index(BLUE).unwrap()]).unwrap();

        // Left of the red zone: walked before and after the red key.
        let combs: Vec<_> = table.states_at(Point::new(4, 1)).map(|(c, _)| c).collect();
        assert!(combs.contains(&KeyCombination::EMPTY));
        assert!(combs.contains(&red));
        // Each combination keeps its own cost.
        let before = table.get(Point::new(4, 1), KeyCombination::EMPTY).unwrap();
        let after = table.get(Point::new(4, 1), red).unwrap();
        assert!(before < after);

        // Between the walls: walked with red, then with red and blue.
        let combs: Vec<_> = table.states_at(Point::new(10, 1)).map(|(c, _)| c).collect();
        assert!(combs.contains(&red));
        assert!(combs.contains(&both));
        assert!(!combs.contains(&KeyCombination::EMPTY));
    }

    #[test]
    fn every_expanded_state_is_recorded() {
        for rules in [
            DIJKSTRA,
            Rules {
                priority: Priority::Estimate(Heuristic::Manhattan),
                relax: Relax::FirstWrite,
                end: EndRule::StopOnPop,
            },
        ] {
            let mut grid = maze(TWO_KEYS);
            let mut popped = Vec::new();
            let mut obs = |p: Point, c: KeyCombination| popped.push((p, c));
            let (table, _) = explore("test", &mut grid, rules, &mut obs, None).unwrap();
            assert!(!popped.is_empty());
            assert!(popped.iter().all(|&(p, c)| table.contains(p, c)));
        }
    }
}
