use keymaze_core::Point;

use crate::cancel::CancelToken;
use crate::error::MazeError;
use crate::key_comb::KeyCombination;
use crate::maze::RegionGrid;

/// Receives every state a search pops from its frontier, in pop order.
///
/// Any `FnMut(Point, KeyCombination)` closure is an observer. Use
/// [`NoObserver`] when nothing needs to watch.
pub trait Observer {
    /// Called once per expanded state.
    fn visit(&mut self, p: Point, comb: KeyCombination);
}

impl<F: FnMut(Point, KeyCombination)> Observer for F {
    #[inline]
    fn visit(&mut self, p: Point, comb: KeyCombination) {
        self(p, comb)
    }
}

/// An observer that ignores everything.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoObserver;

impl Observer for NoObserver {
    #[inline]
    fn visit(&mut self, _: Point, _: KeyCombination) {}
}

/// A search from the start marker to the end marker of a [`RegionGrid`].
pub trait ShortestPath {
    /// Display name of the algorithm.
    fn name(&self) -> &'static str;

    /// Search with an observer and an optional cancellation token.
    ///
    /// Returns the path from the start cell to the end cell, both included.
    /// Classification done during the search stays on the grid.
    fn run_with(
        &self,
        grid: &mut RegionGrid,
        observer: &mut dyn Observer,
        cancel: Option<&CancelToken>,
    ) -> Result<Vec<Point>, MazeError>;

    /// Search without observation or cancellation.
    fn run(&self, grid: &mut RegionGrid) -> Result<Vec<Point>, MazeError> {
        self.run_with(grid, &mut NoObserver, None)
    }
}
