use std::{
    fs::File,
    io::{self, BufReader, Read, Write},
    path::Path,
};

use anyhow::{Context, Result};
use log::{debug, warn};

use crate::{Error, Grid};

/// Parses row and column counts followed by the cells in row-major order.
///
/// Every non-whitespace character after the counts is a cell, so cells can be
/// separated (`S . .`) or packed together (`S..`).
pub fn parse_grid(text: &str) -> Result<Grid, Error> {
    let mut rest = text;
    let row_n = next_size(&mut rest)?;
    let col_n = next_size(&mut rest)?;
    let cell_n = row_n
        .checked_mul(col_n)
        .ok_or(Error::TooLargeSize(row_n, col_n))?;

    let mut cell_chars = rest.chars().filter(|c| !c.is_whitespace());
    let cells = cell_chars.by_ref().take(cell_n).collect::<Vec<_>>();
    let extra_n = cell_chars.count();
    if extra_n > 0 {
        warn!("Ignore {} character(s) after the last cell of grid.", extra_n);
    }

    Grid::from_cells(row_n, col_n, cells)
}

fn next_size(rest: &mut &str) -> Result<usize, Error> {
    let text = rest.trim_start();
    if text.is_empty() {
        return Err(Error::NoSizeText);
    }

    let end = text.find(char::is_whitespace).unwrap_or(text.len());
    let size_text = &text[..end];
    *rest = &text[end..];
    size_text
        .parse::<usize>()
        .map_err(|_| Error::InvalidSizeText(size_text.to_string()))
}

pub fn read_grid<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let mut text = String::new();
    BufReader::new(file)
        .read_to_string(&mut text)
        .with_context(|| format!("Failed to read given file({}).", path.as_ref().display()))?;
    let grid = parse_grid(&text).with_context(|| {
        format!(
            "Failed to parse grid in given file({}).",
            path.as_ref().display()
        )
    })?;
    debug!(
        "Read grid with {} row(s) and {} column(s).",
        grid.row_n(),
        grid.col_n()
    );

    Ok(grid)
}

/// Writes grid in the same format as the input, size line first.
pub fn render_grid<W: Write>(grid: &Grid, mut writer: W) -> io::Result<()> {
    writeln!(writer, "{} {}", grid.row_n(), grid.col_n())?;
    if grid.row_n() > 0 {
        writeln!(writer, "{}", grid)?;
    }

    Ok(())
}
