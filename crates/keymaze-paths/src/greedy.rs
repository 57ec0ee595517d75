use keymaze_core::Point;

use crate::cancel::CancelToken;
use crate::distance::Heuristic;
use crate::error::MazeError;
use crate::maze::RegionGrid;
use crate::search::{EndRule, Priority, Relax, Rules, find_path};
use crate::traits::{Observer, ShortestPath};

/// Greedy best-first search: always expands the state that looks closest
/// to the end.
///
/// Each state keeps the cost it was first reached with and the search
/// stops as soon as it pops the end, so the path is usually short to find
/// but not necessarily cheap.
#[derive(Copy, Clone, Debug, Default)]
pub struct Greedy {
    pub heuristic: Heuristic,
}

impl Greedy {
    /// Greedy search with a custom heuristic.
    pub const fn new(heuristic: Heuristic) -> Self {
        Self { heuristic }
    }
}

impl ShortestPath for Greedy {
    fn name(&self) -> &'static str {
        "Greedy best-first"
    }

    fn run_with(
        &self,
        grid: &mut RegionGrid,
        observer: &mut dyn Observer,
        cancel: Option<&CancelToken>,
    ) -> Result<Vec<Point>, MazeError> {
        let rules = Rules {
            priority: Priority::Estimate(self.heuristic),
            relax: Relax::FirstWrite,
            end: EndRule::StopOnPop,
        };
        find_path(self.name(), grid, rules, observer, cancel)
    }
}
