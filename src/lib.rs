use std::{error, fmt::Display, path::PathBuf, process::ExitCode};

use clap::Parser;

pub mod grid;
pub mod io;
pub mod queue;
pub mod search;
pub mod validate;

pub use grid::Grid;
pub use io::{parse_grid, read_grid, render_grid};
pub use queue::PathQueue;
pub use search::{search, SearchResult};
pub use validate::{count_markers, has_only_valid_chars, MarkerCount};

#[derive(Debug)]
pub enum Error {
    OutOfBounds(Position, usize, usize),
    CapacityExceeded(usize),
    EmptyQueue,
    NoPredecessor(Position),
    NoSizeText,
    InvalidSizeText(String),
    TooLargeSize(usize, usize),
    MissingCellText(usize, usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::OutOfBounds(pos, row_n, col_n) => write!(
                f,
                "Position{} is out of grid with {} row(s) and {} column(s).",
                pos, row_n, col_n
            ),
            Error::CapacityExceeded(cap) => write!(
                f,
                "Expect at most {} position(s) pushed into queue, given more.",
                cap
            ),
            Error::EmptyQueue => write!(f, "Can't pop from an empty queue."),
            Error::NoPredecessor(pos) => {
                write!(f, "Explored position{} has no predecessor.", pos)
            }
            Error::NoSizeText => write!(f, "Expect row and column counts before grid cells."),
            Error::InvalidSizeText(s) => write!(f, "Invalid text({}) for grid size.", s),
            Error::TooLargeSize(row_n, col_n) => write!(
                f,
                "Grid size({} x {}) is too large to allocate.",
                row_n, col_n
            ),
            Error::MissingCellText(expect_n, given_n) => write!(
                f,
                "Expect {} cell(s) in grid, given {}.",
                expect_n, given_n
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    /// Maze file: row and column counts followed by the cells
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    r: usize,
    c: usize,
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.r, self.c)
    }
}

impl Position {
    pub fn new(r: usize, c: usize) -> Self {
        Self { r, c }
    }

    pub fn row(&self) -> usize {
        self.r
    }

    pub fn col(&self) -> usize {
        self.c
    }

    /// Upper and left neighbors don't exist on the first row and column,
    /// the lower and right ones are left for the grid to bound.
    pub fn neighbor(&self, dir: Direction) -> Option<Self> {
        match dir {
            Direction::North if self.r > 0 => Some(Self::new(self.r - 1, self.c)),
            Direction::West if self.c > 0 => Some(Self::new(self.r, self.c - 1)),
            Direction::South => Some(Self::new(self.r + 1, self.c)),
            Direction::East => Some(Self::new(self.r, self.c + 1)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    West,
    South,
    East,
}

impl Direction {
    /// Visiting order of neighbors, which decides the path among ones with the same length.
    pub fn all_dirs() -> &'static [Direction] {
        static ALL_DIRECTIONS: [Direction; 4] = [
            Direction::North,
            Direction::West,
            Direction::South,
            Direction::East,
        ];

        &ALL_DIRECTIONS
    }
}

pub const INVALID_CHAR_MESSAGE: &str = "Error, invalid character.";
pub const INVALID_MAZE_MESSAGE: &str = "Invalid maze.";
pub const NO_PATH_MESSAGE: &str = "No path could be found!";

/// Everything found out about one maze, ready to be reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub valid_chars: bool,
    pub result: SearchResult,
}

impl Outcome {
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_code_n())
    }

    pub fn exit_code_n(&self) -> u8 {
        if !self.valid_chars {
            return 5;
        }

        match self.result {
            SearchResult::PathFound(_) => 0,
            SearchResult::InvalidStructure => 3,
            SearchResult::NoPath => 4,
        }
    }
}

/// Checks characters and searches the maze, marking the path in place if there is one.
pub fn solve(grid: &mut Grid) -> Result<Outcome, Error> {
    let valid_chars = has_only_valid_chars(grid);
    if !valid_chars {
        log::warn!("Given grid contains character(s) other than S, F, . and #.");
    }
    let result = search(grid)?;

    Ok(Outcome {
        valid_chars,
        result,
    })
}
