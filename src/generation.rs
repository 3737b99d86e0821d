//! Building whole generations: the deduplicated set of all free polyominoes
//! of one size, grown from the deduplicated set one size below.

use core::fmt;

use hashbrown::HashSet;
use indicatif::ProgressBar;
use parking_lot::RwLock;

use crate::polyominoes::Shape;

/// The strategy used to decide whether two shapes are the same free
/// polyomino.
///
/// Both strategies agree on every equivalence decision; canonical form is
/// the cheaper one for larger generations and is the default.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Equivalence {
    /// Key every shape by its lexicographically minimal transform.
    Canonical,
    /// Compare every candidate against all 8 transforms of each accepted
    /// shape.
    Pairwise,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Error {
    /// The requested generation size was smaller than 1.
    InvalidSize(usize),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidSize(n) => {
                write!(f, "cannot enumerate polyominoes of size {n}, N must be at least 1")
            }
        }
    }
}

impl std::error::Error for Error {}

/// Obtain a sorted list of [`Shape`]s representing all unique one-cell
/// extensions of the items in `from_set`, keyed by canonical form.
pub fn unique_expansions<'a, I>(bar: &ProgressBar, from_set: I) -> Vec<Shape>
where
    I: Iterator<Item = &'a Shape> + ExactSizeIterator,
{
    let mut this_level = HashSet::new();

    for value in from_set {
        for expansion in value.expand() {
            // Skip expansions that are already in the list.
            if this_level.contains(&expansion) {
                continue;
            }

            let min = expansion.canonical_form();

            let missing = !this_level.contains(&min);

            if missing {
                this_level.insert(min);
            }
        }

        bar.inc(1);
    }

    let mut result: Vec<Shape> = this_level.into_iter().collect();
    result.sort_unstable();

    result
}

/// Obtain a sorted list of [`Shape`]s representing all unique one-cell
/// extensions of the items in `from_set`, checking every candidate against
/// the 8 transforms of each already-accepted shape.
pub fn unique_expansions_pairwise<'a, I>(bar: &ProgressBar, from_set: I) -> Vec<Shape>
where
    I: Iterator<Item = &'a Shape> + ExactSizeIterator,
{
    let mut this_level: Vec<Shape> = Vec::new();

    for value in from_set {
        for expansion in value.expand() {
            let unique = !this_level.iter().any(|p| p.is_similar(&expansion));

            if unique {
                this_level.push(expansion);
            }
        }

        bar.inc(1);
    }

    this_level.sort_unstable();

    this_level
}

/// The parallel counterpart of [`unique_expansions`].
///
/// The input is split into one chunk per available core; every chunk expands
/// its shapes independently and deduplicates through the single shared set,
/// where insertion keyed by canonical form is idempotent.
pub fn unique_expansions_rayon<'a, I>(bar: &ProgressBar, from_set: I) -> Vec<Shape>
where
    I: Iterator<Item = &'a Shape> + ExactSizeIterator + Clone + Send + Sync,
{
    use rayon::prelude::*;

    if from_set.len() == 0 {
        return Vec::new();
    }

    let available_parallelism = num_cpus::get();

    let chunk_size = (from_set.len() / available_parallelism) + 1;
    let chunks = (from_set.len() + chunk_size - 1) / chunk_size;

    let chunk_iterator = (0..chunks)
        .into_par_iter()
        .map(|v| from_set.clone().skip(v * chunk_size).take(chunk_size));

    let this_level = RwLock::new(HashSet::new());

    chunk_iterator.for_each(|v| {
        for value in v {
            for expansion in value.expand() {
                // Skip expansions that are already in the list.
                if this_level.read().contains(&expansion) {
                    continue;
                }

                let min = expansion.canonical_form();

                let missing = !this_level.read().contains(&min);

                if missing {
                    this_level.write().insert(min);
                }
            }

            bar.inc(1);
        }
    });

    let mut result: Vec<Shape> = this_level.into_inner().into_iter().collect();
    result.sort_unstable();

    result
}

/// Return the complete generation of free polyominoes of size `n`, sorted
/// lexicographically by cell sequence.
///
/// The generation is built iteratively from the unit shape upward; each
/// intermediate generation is kept only long enough to produce the next.
pub fn polyominoes(n: usize, equivalence: Equivalence) -> Result<Vec<Shape>, Error> {
    if n < 1 {
        return Err(Error::InvalidSize(n));
    }

    let bar = ProgressBar::hidden();
    let mut current = vec![Shape::unit()];

    for _ in 1..n {
        let next = match equivalence {
            Equivalence::Canonical => unique_expansions(&bar, current.iter()),
            Equivalence::Pairwise => unique_expansions_pairwise(&bar, current.iter()),
        };

        current = next;
    }

    Ok(current)
}
