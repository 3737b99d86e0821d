//! Enumeration of free polyominoes.
//!
//! A free polyomino is a 4-connected set of unit cells on the square grid,
//! identified with all of its rotations and reflections. Every generation of
//! size `n` is grown from the generation of size `n - 1` by adding one
//! adjacent cell to each shape and discarding duplicates under the symmetry
//! group of the square.

#[cfg(test)]
mod test;

pub mod generation;
pub mod polyominoes;

pub use polyominoes::{Cell, Shape, Transform};
