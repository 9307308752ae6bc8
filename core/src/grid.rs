use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::{Cell, CellCount, Coord, Coord2, GameError, Layout, Result, ToNdIndex, neighbors};

/// Fixed-size 2D matrix of cells, row-major. Dimensions never change after
/// construction; one grid is built per session (and per reset).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Grid {
    /// Builds an all-hidden grid from a layout. Pure function of its input:
    /// every cell starts unrevealed and unflagged with no adjacent count,
    /// `is_mine` copied from the corresponding layout position.
    pub fn build(layout: &Layout) -> Self {
        let mut cells: Array2<Cell> = Array2::default(layout.size().to_nd_index());
        for ((row, col), cell) in cells.indexed_iter_mut() {
            cell.is_mine = layout.contains_mine((row as Coord, col as Coord));
        }
        Self { cells }
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.cells.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len().try_into().unwrap()
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.cells[coords.to_nd_index()]
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    /// Number of mines among the up-to-8 neighbors of `coords`.
    pub(crate) fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        neighbors(coords, self.size())
            .filter(|&pos| self[pos].is_mine)
            .count()
            .try_into()
            .unwrap()
    }

    pub fn iter_cells(&self) -> impl Iterator<Item = (Coord2, Cell)> {
        self.cells
            .indexed_iter()
            .map(|((row, col), &cell)| ((row as Coord, col as Coord), cell))
    }
}

impl Index<Coord2> for Grid {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for Grid {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.cells[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_copies_mines_and_leaves_everything_hidden() {
        let layout = Layout::parse((4, 4), "-x------------x-").unwrap();
        let grid = Grid::build(&layout);

        assert_eq!(grid.size(), (4, 4));
        for (coords, cell) in grid.iter_cells() {
            assert_eq!(cell.is_mine, layout.contains_mine(coords));
            assert!(!cell.revealed);
            assert!(!cell.flagged);
            assert_eq!(cell.adjacent, None);
        }
    }

    #[test]
    fn adjacent_mine_count_clips_at_edges() {
        let layout = Layout::parse((4, 4), "-x--x-----------").unwrap();
        let grid = Grid::build(&layout);

        assert_eq!(grid.adjacent_mine_count((0, 0)), 2);
        assert_eq!(grid.adjacent_mine_count((3, 3)), 0);
        assert_eq!(grid.adjacent_mine_count((2, 0)), 1);
        assert_eq!(grid.adjacent_mine_count((1, 1)), 2);
    }

    #[test]
    fn validate_coords_rejects_out_of_range() {
        let layout = Layout::parse((4, 4), "----------------").unwrap();
        let grid = Grid::build(&layout);

        assert_eq!(grid.validate_coords((3, 3)), Ok((3, 3)));
        assert_eq!(grid.validate_coords((4, 0)), Err(GameError::OutOfBounds));
        assert_eq!(grid.validate_coords((0, 4)), Err(GameError::OutOfBounds));
    }
}
