//! The polyomino value types.
//!
//! A [`Shape`] stores its cells as a sorted point list translated so that the
//! minimum coordinate in each axis is zero. Well-formed shapes are produced
//! by construction only: the unit shape is a single cell at the origin, and
//! every larger shape is an extension of a smaller one by a 4-adjacent cell,
//! so connectivity never needs a separate validation pass.

mod expand;
mod transform;

pub use transform::Transform;

use core::fmt;

/// A single grid cell.
///
/// The derived `Ord` compares `x` first, giving the lexicographic cell order
/// that canonical forms are minimized over.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    /// The four 4-adjacent neighbours of this cell.
    #[inline]
    pub fn neighbors(self) -> [Cell; 4] {
        let Cell { x, y } = self;

        [
            Cell { x: x + 1, y },
            Cell { x: x - 1, y },
            Cell { x, y: y + 1 },
            Cell { x, y: y - 1 },
        ]
    }
}

/// A polyomino, represented as a sorted list of normalized cells.
///
/// Two values of this type compare equal exactly when they are the same
/// fixed polyomino in the same position; use [`Shape::canonical_form`] or
/// [`Shape::is_similar`] to compare up to rotation and reflection.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct Shape {
    cells: Vec<Cell>,
}

impl Shape {
    /// The unit shape: the single cell at the origin.
    pub fn unit() -> Self {
        Shape {
            cells: vec![Cell { x: 0, y: 0 }],
        }
    }

    /// Build a shape from an arbitrary collection of cells.
    ///
    /// The cells are deduplicated, sorted, and translated so that the
    /// minimum `x` and minimum `y` are both zero. An empty collection is a
    /// caller contract violation.
    pub fn from_cells(mut cells: Vec<Cell>) -> Self {
        assert!(!cells.is_empty(), "a shape must contain at least one cell");

        let min_x = cells.iter().map(|c| c.x).min().unwrap();
        let min_y = cells.iter().map(|c| c.y).min().unwrap();

        for cell in cells.iter_mut() {
            cell.x -= min_x;
            cell.y -= min_y;
        }

        cells.sort_unstable();
        cells.dedup();

        Shape { cells }
    }

    /// The cells of this shape, sorted lexicographically.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The amount of cells present in this shape.
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// The bounding box of this shape, as `(width, height)`.
    pub fn dims(&self) -> (i32, i32) {
        let mut width = 0;
        let mut height = 0;

        for cell in &self.cells {
            width = width.max(cell.x + 1);
            height = height.max(cell.y + 1);
        }

        (width, height)
    }

    /// Returns whether `cell` is part of this shape.
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.binary_search(&cell).is_ok()
    }

    /// Returns whether `cell` is 4-adjacent to this shape without being part
    /// of it, i.e. whether adding it grows the shape by one connected cell.
    pub fn is_connected(&self, cell: Cell) -> bool {
        !self.contains(cell) && cell.neighbors().into_iter().any(|n| self.contains(n))
    }

    /// Create a new [`Shape`] representing `self` mapped through `transform`
    /// and re-normalized, so results are comparable regardless of where in
    /// the plane the pre-image sat.
    pub fn transform(&self, transform: Transform) -> Shape {
        Shape::from_cells(self.cells.iter().map(|&c| transform.apply(c)).collect())
    }

    /// Find the canonical form of this shape: the lexicographically smallest
    /// of its 8 transformed variants.
    ///
    /// Two shapes are the same free polyomino iff their canonical forms are
    /// equal.
    pub fn canonical_form(&self) -> Shape {
        Transform::ALL
            .iter()
            .map(|&t| self.transform(t))
            .min()
            .unwrap()
    }

    /// Returns whether `other` is one of the 8 transformed variants of
    /// `self`, i.e. whether both represent the same free polyomino.
    pub fn is_similar(&self, other: &Shape) -> bool {
        Transform::ALL.iter().any(|&t| &self.transform(t) == other)
    }
}

impl fmt::Display for Shape {
    // Render the shape as a character grid over its bounding box, one row
    // per x coordinate.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (width, height) = self.dims();

        let mut grid = String::new();

        for x in 0..width {
            for y in 0..height {
                if self.contains(Cell { x, y }) {
                    grid.push('#');
                } else {
                    grid.push(' ');
                }
            }
            grid.push('\n');
        }

        write!(f, "{}", grid.trim_end())
    }
}
