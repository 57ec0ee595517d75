//! The maze model: cells, lazy region classification and key-gated edges.

use std::collections::HashMap;
use std::f64::consts::SQRT_2;

use keymaze_core::{Color, ColorGrid, Point, Range};

use crate::config::MazeConfig;
use crate::error::MazeError;
use crate::key_comb::KeyCombination;
use crate::neighbors::AdjacentCoords;
use crate::region::{Cell, RegionType};

/// A transition out of a search state.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Edge {
    /// 1 for a straight step, √2 for a diagonal one.
    pub weight: f64,
    /// Keys held after the step.
    pub comb: KeyCombination,
    /// Destination cell.
    pub to: Point,
}

/// A maze built from a colour grid.
///
/// Cells start [`Unset`](RegionType::Unset) and are classified region by
/// region the first time a search looks at them. Classifications and the
/// key colour → key index map are kept for the lifetime of the grid, so
/// later searches on the same grid reuse them.
#[derive(Debug, Clone)]
pub struct RegionGrid {
    cells: Vec<Cell>,
    bounds: Range,
    config: MazeConfig,
    keys: HashMap<Color, i32>,
}

impl RegionGrid {
    /// Build a maze with the default [`MazeConfig`].
    pub fn new(colors: &ColorGrid) -> Self {
        Self::with_config(colors, MazeConfig::default())
    }

    /// Build a maze with custom marker colours and key size.
    pub fn with_config(colors: &ColorGrid, config: MazeConfig) -> Self {
        Self {
            cells: colors.iter().map(|(_, color)| Cell::new(color)).collect(),
            bounds: colors.bounds(),
            config,
            keys: HashMap::new(),
        }
    }

    /// Build a maze by asking `f` for the colour of every position.
    pub fn from_fn(width: i32, height: i32, f: impl FnMut(Point) -> Color) -> Self {
        Self::new(&ColorGrid::from_fn(width, height, f))
    }

    /// The configuration the maze was built with.
    #[inline]
    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    /// The grid rectangle, anchored at the origin.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Width.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Height.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Flat index of an in-bounds point.
    #[inline]
    fn flat(&self, p: Point) -> usize {
        (p.y as usize) * (self.bounds.width() as usize) + (p.x as usize)
    }

    #[inline]
    fn index(&self, p: Point) -> Result<usize, MazeError> {
        if !self.bounds.contains(p) {
            return Err(MazeError::OutOfBounds(p));
        }
        Ok(self.flat(p))
    }

    /// The cell at `p`.
    pub fn pixel_at(&self, p: Point) -> Result<Cell, MazeError> {
        Ok(self.cells[self.index(p)?])
    }

    fn find_color(&self, color: Color) -> Option<Point> {
        self.bounds
            .iter()
            .zip(self.cells.iter())
            .find(|(_, cell)| cell.color == color)
            .map(|(p, _)| p)
    }

    /// First cell (row-major) with the start marker colour. Looks at raw
    /// colours, so it works before any classification.
    pub fn find_start(&self) -> Result<Point, MazeError> {
        self.find_color(self.config.start).ok_or(MazeError::NoStart)
    }

    /// First cell (row-major) with the end marker colour.
    pub fn find_end(&self) -> Result<Point, MazeError> {
        self.find_color(self.config.end).ok_or(MazeError::NoEnd)
    }

    /// The in-bounds cells surrounding `p`, diagonals included.
    #[inline]
    pub fn adjacent_coords(&self, p: Point) -> AdjacentCoords {
        AdjacentCoords::new(p, self.bounds)
    }

    /// The index assigned to the key of `color`, if that key has been
    /// picked up by any search on this grid.
    pub fn key_index(&self, color: Color) -> Option<i32> {
        self.keys.get(&color).copied()
    }

    /// Number of distinct keys discovered so far.
    pub fn key_count(&self) -> usize {
        self.keys.len()
    }

    fn key_index_or_assign(&mut self, color: Color) -> i32 {
        let next = self.keys.len() as i32;
        *self.keys.entry(color).or_insert_with(|| {
            log::trace!("key {color} assigned index {next}");
            next
        })
    }

    /// Classify the region containing `p` and return the type of `p`.
    ///
    /// Walls and grey cells are classified on their own. Any other colour
    /// is flood-filled (8-connected, same colour) and the whole region gets
    /// one type: [`Start`](RegionType::Start) or [`End`](RegionType::End)
    /// for the marker colours, [`Key`](RegionType::Key) for a solid region
    /// whose bounding box is exactly the configured key size, and
    /// [`Zone`](RegionType::Zone) otherwise.
    ///
    /// Already classified cells are returned as is.
    pub fn classify_region(&mut self, p: Point) -> Result<RegionType, MazeError> {
        let i = self.index(p)?;
        let cell = self.cells[i];
        if cell.is_classified() {
            return Ok(cell.kind);
        }

        let kind = if cell.color == self.config.wall {
            RegionType::Wall
        } else if cell.is_grey() {
            RegionType::Free
        } else if cell.color == self.config.start {
            RegionType::Start
        } else if cell.color == self.config.end {
            RegionType::End
        } else {
            RegionType::Zone
        };
        self.cells[i].kind = kind;

        if matches!(kind, RegionType::Start | RegionType::End | RegionType::Zone) {
            self.flood_region(p, i, kind);
        }
        Ok(self.cells[i].kind)
    }

    /// Tag the unclassified same-colour region around `seed` with `kind`,
    /// then promote it to a key if it is exactly key-shaped.
    fn flood_region(&mut self, seed: Point, seed_idx: usize, kind: RegionType) {
        let color = self.cells[seed_idx].color;
        let key_size = self.config.key_size;
        let key_area = self.config.key_area();

        let mut bbox = Range::unit(seed);
        let mut size = 1usize;
        // Cells that may still form a key. Once the region outgrows the key
        // size the list is cleared and never refilled.
        let mut key_eligible = kind == RegionType::Zone;
        let mut candidates: Vec<usize> = Vec::new();
        if key_eligible {
            candidates.push(seed_idx);
        }

        let mut stack = vec![seed];
        while let Some(cur) = stack.pop() {
            for n in AdjacentCoords::new(cur, self.bounds) {
                let ni = self.flat(n);
                let cell = &mut self.cells[ni];
                if cell.color != color || cell.is_classified() {
                    continue;
                }
                cell.kind = kind;
                stack.push(n);
                size += 1;
                bbox = bbox.extend(n);

                if key_eligible {
                    if bbox.width() <= key_size.x
                        && bbox.height() <= key_size.y
                        && candidates.len() < key_area
                    {
                        candidates.push(ni);
                    } else {
                        key_eligible = false;
                        candidates.clear();
                    }
                }
            }
        }

        let is_key = key_eligible && bbox.size() == key_size && candidates.len() == key_area;
        if is_key {
            for i in candidates {
                self.cells[i].kind = RegionType::Key;
            }
        }
        log::trace!(
            "classified {} region {color} at {seed}: {size} cells in {bbox}",
            if is_key { "key" } else { region_name(kind) },
        );
    }

    /// Lazily enumerate the transitions out of state (`p`, `comb`).
    ///
    /// Neighbours are classified on first contact. Walls are skipped, key
    /// cells add their key to the combination (assigning it an index if it
    /// is new), and zones are only entered when their key is already held.
    pub fn adjacent_edges(
        &mut self,
        p: Point,
        comb: KeyCombination,
    ) -> Result<Edges<'_>, MazeError> {
        self.index(p)?;
        let neighbors = self.adjacent_coords(p);
        Ok(Edges {
            grid: self,
            from: p,
            comb,
            neighbors,
        })
    }

    fn edge_to(
        &mut self,
        from: Point,
        to: Point,
        comb: KeyCombination,
    ) -> Result<Option<Edge>, MazeError> {
        let kind = self.classify_region(to)?;
        let color = self.cells[self.index(to)?].color;

        let comb = match kind {
            RegionType::Wall => return Ok(None),
            RegionType::Key => {
                let k = self.key_index_or_assign(color);
                comb.set_at([k])?
            }
            RegionType::Zone => {
                let Some(k) = self.key_index(color) else {
                    return Ok(None);
                };
                if !comb.is_set_at(k)? {
                    return Ok(None);
                }
                comb
            }
            _ => comb,
        };

        let weight = if from.is_diagonal_to(to) { SQRT_2 } else { 1.0 };
        Ok(Some(Edge {
            weight,
            comb,
            to,
        }))
    }

    /// The maze's colours.
    pub fn colors(&self) -> ColorGrid {
        ColorGrid::from_fn(self.width(), self.height(), |p| self.cells[self.flat(p)].color)
    }

    /// The maze's colours with `path` painted in the configured path
    /// colour. Points outside the grid are ignored.
    pub fn paint_path(&self, path: &[Point]) -> ColorGrid {
        let mut grid = self.colors();
        for &p in path {
            grid.set(p, self.config.path);
        }
        grid
    }
}

fn region_name(kind: RegionType) -> &'static str {
    match kind {
        RegionType::Unset => "unset",
        RegionType::Wall => "wall",
        RegionType::Free => "free",
        RegionType::Key => "key",
        RegionType::Zone => "zone",
        RegionType::Start => "start",
        RegionType::End => "end",
    }
}

/// Iterator returned by [`RegionGrid::adjacent_edges`].
pub struct Edges<'a> {
    grid: &'a mut RegionGrid,
    from: Point,
    comb: KeyCombination,
    neighbors: AdjacentCoords,
}

impl Iterator for Edges<'_> {
    type Item = Result<Edge, MazeError>;

    fn next(&mut self) -> Option<Self::Item> {
        for to in self.neighbors.by_ref() {
            match self.grid.edge_to(self.from, to, self.comb) {
                Ok(Some(edge)) => return Some(Ok(edge)),
                Ok(None) => continue,
                Err(err) => return Some(Err(err)),
            }
        }
        None
    }
}
