use keymaze_core::Point;

use crate::cancel::CancelToken;
use crate::error::MazeError;
use crate::maze::RegionGrid;
use crate::search::{EndRule, Priority, Relax, Rules, find_path};
use crate::traits::{Observer, ShortestPath};

/// Uniform-cost search over (cell, keys held) states.
///
/// Always finds a cheapest path. Once the end has been reached, states
/// that cannot beat it are dropped.
#[derive(Copy, Clone, Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    pub(crate) const RULES: Rules = Rules {
        priority: Priority::Cost,
        relax: Relax::Improve,
        end: EndRule::Bound,
    };
}

impl ShortestPath for Dijkstra {
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn run_with(
        &self,
        grid: &mut RegionGrid,
        observer: &mut dyn Observer,
        cancel: Option<&CancelToken>,
    ) -> Result<Vec<Point>, MazeError> {
        find_path(self.name(), grid, Self::RULES, observer, cancel)
    }
}
