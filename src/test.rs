use indicatif::ProgressBar;

use crate::generation::{
    polyominoes, unique_expansions, unique_expansions_pairwise, unique_expansions_rayon,
    Equivalence, Error,
};
use crate::polyominoes::{Cell, Shape, Transform};

fn shape(cells: &[(i32, i32)]) -> Shape {
    Shape::from_cells(cells.iter().map(|&(x, y)| Cell { x, y }).collect())
}

/// The L-shaped tetromino used throughout the connectivity and similarity
/// tests.
fn ell() -> Shape {
    shape(&[(0, 0), (0, 1), (0, 2), (1, 2)])
}

#[test]
fn normalization_zeroes_the_minimum() {
    let offset = shape(&[(3, -2), (3, -1), (4, -1)]);

    let min_x = offset.cells().iter().map(|c| c.x).min().unwrap();
    let min_y = offset.cells().iter().map(|c| c.y).min().unwrap();

    assert_eq!(min_x, 0);
    assert_eq!(min_y, 0);
    assert_eq!(offset, shape(&[(0, 0), (0, 1), (1, 1)]));
}

#[test]
fn cells_are_sorted_and_deduplicated() {
    let p = shape(&[(1, 1), (0, 0), (0, 1), (0, 0)]);

    assert_eq!(p.size(), 3);
    assert_eq!(
        p.cells(),
        &[
            Cell { x: 0, y: 0 },
            Cell { x: 0, y: 1 },
            Cell { x: 1, y: 1 }
        ]
    );
}

#[test]
#[should_panic]
fn empty_shape_is_rejected() {
    let _ = Shape::from_cells(Vec::new());
}

#[test]
fn identity_transform_is_normalization() {
    let p = ell();

    assert_eq!(p.transform(Transform::Identity), p);
}

#[test]
fn canonical_form_is_symmetry_invariant() {
    let p = ell();
    let min = p.canonical_form();

    for &t in Transform::ALL.iter() {
        assert_eq!(p.transform(t).canonical_form(), min);
    }
}

#[test]
fn canonical_fixed_points() {
    let two = shape(&[(0, 0), (0, 1)]);
    let tee_1 = shape(&[(0, 0), (1, 0), (0, 1)]);

    assert_eq!(two.canonical_form(), two);
    assert_eq!(shape(&[(0, 0), (1, 0)]).canonical_form(), two);

    assert_eq!(tee_1.canonical_form(), tee_1);
    assert_eq!(shape(&[(0, 1), (1, 0), (1, 1)]).canonical_form(), tee_1);
    assert_eq!(shape(&[(0, 0), (1, 1), (0, 1)]).canonical_form(), tee_1);
}

#[test]
fn similarity_matches_canonical_equality() {
    let p = ell();
    let q = shape(&[(0, 0), (1, 0), (2, 0), (2, 1)]);
    let r = shape(&[(0, 0), (1, 0), (2, 0), (1, 1)]);

    assert!(p.is_similar(&q));
    assert!(q.is_similar(&p));
    assert!(!p.is_similar(&r));
    assert!(!r.is_similar(&p));
    assert!(!q.is_similar(&r));
    assert!(!r.is_similar(&q));

    assert_eq!(p.canonical_form(), q.canonical_form());
    assert_ne!(p.canonical_form(), r.canonical_form());
    assert_ne!(q.canonical_form(), r.canonical_form());
}

#[test]
fn connectivity_probes() {
    let p = ell();

    assert!(p.is_connected(Cell { x: 1, y: 3 }));
    assert!(!p.is_connected(Cell { x: 1, y: 4 }));
    assert!(!p.is_connected(Cell { x: 0, y: 1 }));
    assert!(p.is_connected(Cell { x: -1, y: 0 }));
    assert!(!p.is_connected(Cell { x: -1, y: -1 }));
}

#[test]
fn coordinate_extensions_of_the_unit_shape() {
    let candidates = Shape::unit().coordinate_extensions();

    assert_eq!(candidates.len(), 4);
    for candidate in candidates {
        assert!(Shape::unit().is_connected(candidate));
    }
}

#[test]
fn expanding_the_unit_shape_yields_the_domino() {
    let bar = ProgressBar::hidden();
    let unit = [Shape::unit()];

    let next = unique_expansions(&bar, unit.iter());

    assert_eq!(next, vec![shape(&[(0, 0), (0, 1)])]);
}

#[test]
fn expanding_the_domino_yields_both_trominoes() {
    let bar = ProgressBar::hidden();
    let domino = [shape(&[(0, 0), (0, 1)])];

    let next = unique_expansions(&bar, domino.iter());

    let straight = shape(&[(0, 0), (0, 1), (0, 2)]);
    let corner = shape(&[(0, 0), (0, 1), (1, 0)]);

    assert_eq!(next, vec![straight, corner]);
}

#[test]
fn known_generation_sizes() {
    let expected = [1, 1, 2, 5, 12, 35];

    for (i, &count) in expected.iter().enumerate() {
        let n = i + 1;
        assert_eq!(
            polyominoes(n, Equivalence::Canonical).unwrap().len(),
            count,
            "wrong canonical count for N = {n}"
        );
        assert_eq!(
            polyominoes(n, Equivalence::Pairwise).unwrap().len(),
            count,
            "wrong pairwise count for N = {n}"
        );
    }
}

#[test]
fn strategies_produce_the_same_generations() {
    for n in 1..=5 {
        let canonical = polyominoes(n, Equivalence::Canonical).unwrap();

        let mut pairwise: Vec<Shape> = polyominoes(n, Equivalence::Pairwise)
            .unwrap()
            .iter()
            .map(Shape::canonical_form)
            .collect();
        pairwise.sort_unstable();

        assert_eq!(canonical, pairwise);
    }
}

#[test]
fn rayon_expansion_matches_serial() {
    let bar = ProgressBar::hidden();
    let base = polyominoes(4, Equivalence::Canonical).unwrap();

    let serial = unique_expansions(&bar, base.iter());
    let parallel = unique_expansions_rayon(&bar, base.iter());

    assert_eq!(serial, parallel);
}

#[test]
fn pairwise_expansion_matches_serial_count() {
    let bar = ProgressBar::hidden();
    let base = polyominoes(4, Equivalence::Canonical).unwrap();

    let serial = unique_expansions(&bar, base.iter());
    let pairwise = unique_expansions_pairwise(&bar, base.iter());

    assert_eq!(serial.len(), pairwise.len());
}

#[test]
fn generations_are_deterministic() {
    let first = polyominoes(5, Equivalence::Canonical).unwrap();
    let second = polyominoes(5, Equivalence::Canonical).unwrap();

    assert_eq!(first, second);
}

#[test]
fn invalid_size_is_rejected() {
    assert_eq!(
        polyominoes(0, Equivalence::Canonical),
        Err(Error::InvalidSize(0))
    );
}

#[test]
fn render_corner_tromino() {
    let corner = shape(&[(0, 0), (0, 1), (1, 0)]);

    assert_eq!(format!("{corner}"), "##\n#");
}

#[test]
fn render_straight_tromino() {
    let straight = shape(&[(0, 0), (0, 1), (0, 2)]);

    assert_eq!(format!("{straight}"), "###");
}
