//! The eight symmetries of the square acting on the 3x3 grid

use serde::{Deserialize, Serialize};

/// Source indices for a quarter turn clockwise: `out[i] = in[ROTATE_CW[i]]`.
const ROTATE_CW: [usize; 9] = [6, 3, 0, 7, 4, 1, 8, 5, 2];
/// Swap the top and bottom rows.
const FLIP_HORIZONTAL: [usize; 9] = [6, 7, 8, 3, 4, 5, 0, 1, 2];
/// Mirror each row left to right.
const FLIP_VERTICAL: [usize; 9] = [2, 1, 0, 5, 4, 3, 8, 7, 6];

/// Element of the dihedral group of order 8.
///
/// The diagonal flips are defined as a flip followed by a clockwise quarter
/// turn rather than as independent permutations, so canonical hashes agree
/// with any implementation built the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symmetry {
    Identity,
    Rotate90,
    Rotate180,
    Rotate270,
    FlipHorizontal,
    FlipVertical,
    /// Flip vertical, then rotate 90 degrees clockwise
    FlipDiagonal,
    /// Flip horizontal, then rotate 90 degrees clockwise
    FlipAntiDiagonal,
}

fn gather<T: Copy>(cells: &[T; 9], source: &[usize; 9]) -> [T; 9] {
    std::array::from_fn(|i| cells[source[i]])
}

fn rotate<T: Copy>(cells: &[T; 9], quarter_turns: usize) -> [T; 9] {
    let mut out = *cells;
    for _ in 0..quarter_turns {
        out = gather(&out, &ROTATE_CW);
    }
    out
}

impl Symmetry {
    /// All 8 elements, in the order boards report their images.
    pub const ALL: [Symmetry; 8] = [
        Symmetry::Identity,
        Symmetry::Rotate90,
        Symmetry::Rotate180,
        Symmetry::Rotate270,
        Symmetry::FlipHorizontal,
        Symmetry::FlipVertical,
        Symmetry::FlipDiagonal,
        Symmetry::FlipAntiDiagonal,
    ];

    /// Apply the symmetry to a row-major 3x3 grid
    pub fn apply<T: Copy>(self, cells: &[T; 9]) -> [T; 9] {
        match self {
            Symmetry::Identity => *cells,
            Symmetry::Rotate90 => rotate(cells, 1),
            Symmetry::Rotate180 => rotate(cells, 2),
            Symmetry::Rotate270 => rotate(cells, 3),
            Symmetry::FlipHorizontal => gather(cells, &FLIP_HORIZONTAL),
            Symmetry::FlipVertical => gather(cells, &FLIP_VERTICAL),
            Symmetry::FlipDiagonal => rotate(&gather(cells, &FLIP_VERTICAL), 1),
            Symmetry::FlipAntiDiagonal => rotate(&gather(cells, &FLIP_HORIZONTAL), 1),
        }
    }

    /// `permutation()[i]` is the source cell that lands on square `i`.
    pub fn permutation(self) -> [usize; 9] {
        self.apply(&std::array::from_fn(|i| i))
    }

    pub fn inverse(self) -> Symmetry {
        match self {
            Symmetry::Rotate90 => Symmetry::Rotate270,
            Symmetry::Rotate270 => Symmetry::Rotate90,
            // every other element is an involution
            other => other,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Symmetry::Identity => "identity",
            Symmetry::Rotate90 => "rotate 90",
            Symmetry::Rotate180 => "rotate 180",
            Symmetry::Rotate270 => "rotate 270",
            Symmetry::FlipHorizontal => "flip horizontal",
            Symmetry::FlipVertical => "flip vertical",
            Symmetry::FlipDiagonal => "flip diagonal",
            Symmetry::FlipAntiDiagonal => "flip anti-diagonal",
        }
    }
}
