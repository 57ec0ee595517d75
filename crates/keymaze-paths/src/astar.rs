use keymaze_core::Point;

use crate::cancel::CancelToken;
use crate::distance::Heuristic;
use crate::error::MazeError;
use crate::maze::RegionGrid;
use crate::search::{EndRule, Priority, Relax, Rules, find_path};
use crate::traits::{Observer, ShortestPath};

/// A* search: states are ranked by cost so far plus a heuristic estimate
/// to the end.
///
/// The result is a cheapest path only when the heuristic never
/// overestimates. Steps may be diagonal, so the default
/// [`Manhattan`](Heuristic::Manhattan) estimate can overshoot;
/// [`Octile`](Heuristic::Octile) and [`Chebyshev`](Heuristic::Chebyshev)
/// do not.
#[derive(Copy, Clone, Debug, Default)]
pub struct AStar {
    pub heuristic: Heuristic,
}

impl AStar {
    /// A* with a custom heuristic.
    pub const fn new(heuristic: Heuristic) -> Self {
        Self { heuristic }
    }

    pub(crate) const fn rules(&self) -> Rules {
        Rules {
            priority: Priority::CostAndEstimate(self.heuristic),
            relax: Relax::Improve,
            end: EndRule::Bound,
        }
    }
}

impl ShortestPath for AStar {
    fn name(&self) -> &'static str {
        "A*"
    }

    fn run_with(
        &self,
        grid: &mut RegionGrid,
        observer: &mut dyn Observer,
        cancel: Option<&CancelToken>,
    ) -> Result<Vec<Point>, MazeError> {
        find_path(self.name(), grid, self.rules(), observer, cancel)
    }
}
