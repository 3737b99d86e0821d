//! This module implements an iterator that provides all n + 1 extensions
//! for a polyomino of n cells.

use hashbrown::HashSet;

use super::{Cell, Shape};

struct ExtensionIterator<'a> {
    shape: &'a Shape,
    candidates: std::vec::IntoIter<Cell>,
}

impl Iterator for ExtensionIterator<'_> {
    type Item = Shape;

    fn next(&mut self) -> Option<Self::Item> {
        let candidate = self.candidates.next()?;

        let mut cells = self.shape.cells().to_vec();
        cells.push(candidate);

        Some(Shape::from_cells(cells))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.candidates.size_hint()
    }
}

impl Shape {
    /// Compute every cell that would grow this shape by one: the cells not
    /// part of the shape but 4-adjacent to at least one cell that is.
    ///
    /// The result is duplicate-free and sorted. For a normalized shape of
    /// `k` cells every candidate lies within one unit of the `[0, k - 1]`
    /// coordinate window, so only neighbours of present cells need to be
    /// inspected.
    pub fn coordinate_extensions(&self) -> Vec<Cell> {
        let mut candidates = HashSet::new();

        for cell in self.cells() {
            for neighbor in cell.neighbors() {
                if !self.contains(neighbor) {
                    candidates.insert(neighbor);
                }
            }
        }

        let mut candidates: Vec<Cell> = candidates.into_iter().collect();
        candidates.sort_unstable();

        candidates
    }

    /// Produce an iterator that yields every one-cell extension of this
    /// shape, re-normalized.
    ///
    /// The extensions are distinct as fixed shapes, but may still be
    /// equivalent to each other under rotation and reflection; deduplication
    /// is the generation builder's job.
    pub fn expand(&self) -> impl Iterator<Item = Shape> + '_ {
        ExtensionIterator {
            shape: self,
            candidates: self.coordinate_extensions().into_iter(),
        }
    }
}
