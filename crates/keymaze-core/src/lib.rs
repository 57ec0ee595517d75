//! **keymaze-core** — core types for key-gated maze search.
//!
//! This crate provides the foundational types used across the *keymaze*
//! crates: geometry primitives, RGB colours, the colour grid a maze is
//! decoded into, and text sketches for writing mazes by hand.

pub mod color;
pub mod geom;
pub mod grid;
pub mod sketch;

pub use color::Color;
pub use geom::{Point, Range};
pub use grid::ColorGrid;
pub use sketch::{Sketch, SketchError};
