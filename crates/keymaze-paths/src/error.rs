use keymaze_core::Point;
use thiserror::Error;

/// Failures reported by the maze model and the searches.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    /// A coordinate outside `[0, width) × [0, height)` was queried.
    #[error("coordinate {0} is outside the maze")]
    OutOfBounds(Point),
    /// No cell has the start marker colour.
    #[error("maze has no starting point")]
    NoStart,
    /// No cell has the end marker colour.
    #[error("maze has no ending point")]
    NoEnd,
    /// A key bit position outside `0..KeyCombination::CAPACITY`.
    #[error("invalid key position {0}")]
    InvalidKeyPosition(i32),
    /// The search ran out of states without reaching the end.
    #[error("no path to the end node")]
    NoPath,
    /// The distance table has no way back from this coordinate. Only a bug
    /// in the search bookkeeping produces this.
    #[error("end node is reachable but no path leads back from {0}")]
    Unreachable(Point),
    /// The search was cancelled through its [`CancelToken`](crate::CancelToken).
    #[error("search cancelled")]
    Cancelled,
}
