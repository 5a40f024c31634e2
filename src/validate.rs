use crate::{Grid, Position};

pub const START: char = 'S';
pub const FINISH: char = 'F';
pub const OPEN: char = '.';
pub const WALL: char = '#';
pub const PATH: char = '*';

pub fn is_valid_char(c: char) -> bool {
    matches!(c, START | FINISH | OPEN | WALL)
}

/// Only advisory, the search still runs on a grid failing this.
pub fn has_only_valid_chars(grid: &Grid) -> bool {
    grid.cells().all(|(_, c)| is_valid_char(*c))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkerCount {
    pub start_n: usize,
    pub finish_n: usize,
    pub start_pos: Option<Position>,
    pub finish_pos: Option<Position>,
}

impl MarkerCount {
    /// Start and finish positions if there's exactly one of each.
    pub fn endpoints(&self) -> Option<(Position, Position)> {
        if self.start_n != 1 || self.finish_n != 1 {
            return None;
        }

        self.start_pos.zip(self.finish_pos)
    }
}

/// Scans every cell once. Positions kept are those of the last marker met.
pub fn count_markers(grid: &Grid) -> MarkerCount {
    let mut count = MarkerCount::default();
    for (pos, c) in grid.cells() {
        match *c {
            START => {
                count.start_n += 1;
                count.start_pos = Some(pos);
            }
            FINISH => {
                count.finish_n += 1;
                count.finish_pos = Some(pos);
            }
            _ => (),
        }
    }

    count
}
