use std::fmt::Display;

use crate::{Error, Position};

/// Rectangular cells stored row by row, with a shape fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T = char> {
    cells: Vec<T>,
    row_n: usize,
    col_n: usize,
}

impl<T: Clone> Grid<T> {
    pub fn new(row_n: usize, col_n: usize, init: T) -> Self {
        Self {
            cells: vec![init; row_n * col_n],
            row_n,
            col_n,
        }
    }
}

impl<T> Grid<T> {
    /// Takes cells in row-major order, expecting exactly `row_n * col_n` of them.
    pub fn from_cells(row_n: usize, col_n: usize, cells: Vec<T>) -> Result<Self, Error> {
        let expect_n = row_n
            .checked_mul(col_n)
            .ok_or(Error::TooLargeSize(row_n, col_n))?;
        if cells.len() != expect_n {
            return Err(Error::MissingCellText(expect_n, cells.len()));
        }

        Ok(Self {
            cells,
            row_n,
            col_n,
        })
    }

    pub fn row_n(&self) -> usize {
        self.row_n
    }

    pub fn col_n(&self) -> usize {
        self.col_n
    }

    pub fn is_inside(&self, pos: &Position) -> bool {
        pos.row() < self.row_n && pos.col() < self.col_n
    }

    pub fn get(&self, pos: &Position) -> Result<&T, Error> {
        let ind = self.pos_to_ind(pos)?;
        Ok(&self.cells[ind])
    }

    pub fn set(&mut self, pos: &Position, value: T) -> Result<(), Error> {
        let ind = self.pos_to_ind(pos)?;
        self.cells[ind] = value;
        Ok(())
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let col_n = self.col_n;
        (0..self.row_n).flat_map(move |r| (0..col_n).map(move |c| Position::new(r, c)))
    }

    pub fn cells(&self) -> impl Iterator<Item = (Position, &T)> + '_ {
        self.positions().zip(self.cells.iter())
    }

    fn pos_to_ind(&self, pos: &Position) -> Result<usize, Error> {
        if self.is_inside(pos) {
            Ok(pos.row() * self.col_n + pos.col())
        } else {
            Err(Error::OutOfBounds(*pos, self.row_n, self.col_n))
        }
    }
}

impl Display for Grid<char> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.col_n == 0 {
            return Ok(());
        }

        for (ind, row) in self.cells.chunks(self.col_n).enumerate() {
            if ind > 0 {
                writeln!(f)?;
            }
            for c in row {
                write!(f, "{}", c)?;
            }
        }

        Ok(())
    }
}
