//! Shortest paths through key-gated colour mazes.
//!
//! A maze is a grid of RGB cells. Black cells are walls, grey cells are
//! open floor, and two marker colours tag the start and the end. Every
//! other colour forms regions: a solid region exactly the size of a key is
//! a **key**, anything else of that colour is a **zone** that can only be
//! entered while holding the key of the same colour.
//!
//! Searches run over `(cell, keys held)` states, so the same cell may be
//! visited once per key combination. Movement is 8-directional with cost 1
//! for straight steps and √2 for diagonals.
//!
//! - **Dijkstra** ([`Dijkstra`]) finds a cheapest path.
//! - **A\*** ([`AStar`]) adds a pluggable [`Heuristic`].
//! - **Greedy best-first** ([`Greedy`]) follows the heuristic alone.
//!
//! All three implement [`ShortestPath`]. Regions are classified lazily as
//! searches reach them, and the results stay on the [`RegionGrid`] so
//! later searches on the same grid reuse them.
//!
//! ```
//! use keymaze_core::{Color, Point};
//! use keymaze_paths::{Dijkstra, MazeConfig, RegionGrid, ShortestPath};
//!
//! let config = MazeConfig::default();
//! let mut grid = RegionGrid::from_fn(5, 1, |p| match p.x {
//!     0 => config.start,
//!     4 => config.end,
//!     _ => Color::WHITE,
//! });
//! let path = Dijkstra.run(&mut grid).unwrap();
//! assert_eq!(path.first(), Some(&Point::new(0, 0)));
//! assert_eq!(path.len(), 5);
//! ```

mod astar;
mod cancel;
mod config;
mod dijkstra;
mod distance;
mod error;
mod frontier;
mod greedy;
mod key_comb;
mod maze;
mod neighbors;
mod reconstruct;
mod region;
mod search;
mod table;
#[cfg(test)]
mod testutil;
mod traits;

pub use astar::AStar;
pub use cancel::CancelToken;
pub use config::MazeConfig;
pub use dijkstra::Dijkstra;
pub use distance::{Heuristic, chebyshev, manhattan, octile, squared_euclidean};
pub use error::MazeError;
pub use greedy::Greedy;
pub use key_comb::KeyCombination;
pub use maze::{Edge, Edges, RegionGrid};
pub use neighbors::AdjacentCoords;
pub use reconstruct::{reconstruct, reconstruct_to_end};
pub use region::{Cell, RegionType};
pub use table::DistanceTable;
pub use traits::{NoObserver, Observer, ShortestPath};
