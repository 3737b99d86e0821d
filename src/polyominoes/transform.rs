use super::Cell;

/// One of the 8 symmetries of the square, acting on grid cells.
///
/// The variants are the dihedral group D4: the identity, the two axis
/// reflections, the half turn, and the four diagonal-swapped counterparts.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Transform {
    /// `(x, y) -> (x, y)`
    Identity,
    /// `(x, y) -> (x, -y)`
    FlipY,
    /// `(x, y) -> (-x, y)`
    FlipX,
    /// `(x, y) -> (-x, -y)`
    Rotate180,
    /// `(x, y) -> (y, x)`
    Transpose,
    /// `(x, y) -> (y, -x)`
    Rotate270,
    /// `(x, y) -> (-y, x)`
    Rotate90,
    /// `(x, y) -> (-y, -x)`
    AntiTranspose,
}

impl Transform {
    /// Every element of the group, identity first.
    pub const ALL: [Transform; 8] = [
        Transform::Identity,
        Transform::FlipY,
        Transform::FlipX,
        Transform::Rotate180,
        Transform::Transpose,
        Transform::Rotate270,
        Transform::Rotate90,
        Transform::AntiTranspose,
    ];

    /// Apply this symmetry to a single cell.
    #[inline]
    pub fn apply(self, cell: Cell) -> Cell {
        let Cell { x, y } = cell;

        match self {
            Transform::Identity => Cell { x, y },
            Transform::FlipY => Cell { x, y: -y },
            Transform::FlipX => Cell { x: -x, y },
            Transform::Rotate180 => Cell { x: -x, y: -y },
            Transform::Transpose => Cell { x: y, y: x },
            Transform::Rotate270 => Cell { x: y, y: -x },
            Transform::Rotate90 => Cell { x: -y, y: x },
            Transform::AntiTranspose => Cell { x: -y, y: -x },
        }
    }
}
