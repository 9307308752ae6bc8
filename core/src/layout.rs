use core::fmt;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::{CellCount, Coord2, GameError, Result, ToNdIndex, mult};

/// Marker for a mined cell in a flat layout string.
pub const MINE_MARKER: char = 'x';
/// Marker for an empty cell in a flat layout string.
pub const EMPTY_MARKER: char = '-';

/// The classic board shape used by the puzzle catalog.
pub const DEFAULT_SIZE: Coord2 = (16, 16);

/// Mine placement for a whole board, parsed from a flat row-major marker
/// string. Source of truth for mines; immutable after parse.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    mines: Array2<bool>,
    mine_count: CellCount,
}

impl Layout {
    /// Parses a `rows * cols` marker string into a layout.
    ///
    /// Fails without partial effect on a length mismatch or on any character
    /// that is not one of the two markers.
    pub fn parse(size: Coord2, text: &str) -> Result<Self> {
        let expected = mult(size.0, size.1);
        let actual = text.chars().count();
        if actual != usize::from(expected) {
            return Err(GameError::MalformedLayout { expected, actual });
        }

        let mut mines: Array2<bool> = Array2::default(size.to_nd_index());
        let mut mine_count = 0;
        let cols = usize::from(size.1);
        for (index, marker) in text.chars().enumerate() {
            match marker {
                MINE_MARKER => {
                    mines[[index / cols, index % cols]] = true;
                    mine_count += 1;
                }
                EMPTY_MARKER => {}
                _ => return Err(GameError::InvalidMarker { marker, index }),
            }
        }

        Ok(Self { mines, mine_count })
    }

    /// Parses a catalog-shaped (16x16) layout string.
    pub fn parse_default(text: &str) -> Result<Self> {
        Self::parse(DEFAULT_SIZE, text)
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.mines.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn total_cells(&self) -> CellCount {
        self.mines.len().try_into().unwrap()
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }
}

impl Index<Coord2> for Layout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mines[coords.to_nd_index()]
    }
}

/// Re-emits the flat marker string, row-major.
impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &is_mine in self.mines.iter() {
            f.write_str(if is_mine { "x" } else { "-" })?;
        }
        Ok(())
    }
}
