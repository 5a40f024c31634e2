use log::debug;

use crate::{
    validate::{self, FINISH, OPEN, PATH, START},
    Direction, Error, Grid, PathQueue, Position,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    /// Not exactly one start or not exactly one finish.
    InvalidStructure,
    NoPath,
    /// Positions from start to finish, both included.
    PathFound(Vec<Position>),
}

impl SearchResult {
    pub fn path(&self) -> Option<&[Position]> {
        match self {
            SearchResult::PathFound(path) => Some(path),
            _ => None,
        }
    }
}

/// Walls and every unknown character block the way.
fn is_passable(c: char) -> bool {
    matches!(c, OPEN | START | FINISH)
}

/// Finds a shortest path from start to finish with breadth-first search.
///
/// On success the cells strictly between start and finish are marked with `*`,
/// otherwise the grid is left untouched. Among paths with the same length, the
/// one found first by visiting neighbors in north, west, south, east order wins.
pub fn search(grid: &mut Grid) -> Result<SearchResult, Error> {
    let markers = validate::count_markers(grid);
    let Some((start_pos, finish_pos)) = markers.endpoints() else {
        debug!(
            "Found {} start(s) and {} finish(es), expect one of each.",
            markers.start_n, markers.finish_n
        );
        return Ok(SearchResult::InvalidStructure);
    };
    debug!("Search path from {} to {}.", start_pos, finish_pos);

    let Some(predecessors) = explore(grid, &start_pos, &finish_pos)? else {
        return Ok(SearchResult::NoPath);
    };

    let path = trace_back(&predecessors, &start_pos, &finish_pos)?;
    debug!("Found path through {} cell(s).", path.len());
    if path.len() > 2 {
        for pos in &path[1..(path.len() - 1)] {
            grid.set(pos, PATH)?;
        }
    }

    Ok(SearchResult::PathFound(path))
}

/// Returns where each explored cell was reached from, or `None` if finish is unreachable.
fn explore(
    grid: &Grid,
    start_pos: &Position,
    finish_pos: &Position,
) -> Result<Option<Grid<Option<Position>>>, Error> {
    let mut explored = Grid::new(grid.row_n(), grid.col_n(), false);
    let mut predecessors = Grid::new(grid.row_n(), grid.col_n(), None);
    let mut search_positions = PathQueue::with_capacity(grid.row_n() * grid.col_n());
    explored.set(start_pos, true)?;
    search_positions.push(*start_pos)?;

    let mut explored_n = 1;
    'search: while !search_positions.is_empty() {
        let cur_pos = search_positions.pop()?;
        if cur_pos == *finish_pos {
            break;
        }

        for next_pos in Direction::all_dirs()
            .iter()
            .flat_map(|dir| cur_pos.neighbor(*dir))
            .filter(|pos| grid.is_inside(pos))
        {
            if !is_passable(*grid.get(&next_pos)?) || *explored.get(&next_pos)? {
                continue;
            }

            explored.set(&next_pos, true)?;
            predecessors.set(&next_pos, Some(cur_pos))?;
            search_positions.push(next_pos)?;
            explored_n += 1;
            if next_pos == *finish_pos {
                break 'search;
            }
        }
    }
    debug!("Explored {} cell(s).", explored_n);

    if *explored.get(finish_pos)? {
        Ok(Some(predecessors))
    } else {
        Ok(None)
    }
}

fn trace_back(
    predecessors: &Grid<Option<Position>>,
    start_pos: &Position,
    finish_pos: &Position,
) -> Result<Vec<Position>, Error> {
    let mut path = vec![*finish_pos];
    let mut cur_pos = *finish_pos;
    while cur_pos != *start_pos {
        cur_pos = (*predecessors.get(&cur_pos)?).ok_or(Error::NoPredecessor(cur_pos))?;
        path.push(cur_pos);
    }
    path.reverse();

    Ok(path)
}
