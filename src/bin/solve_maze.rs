use std::{io, process::ExitCode};

use anyhow::{Context, Result};
use clap::Parser;
use maze_bfs::{
    CLIArgs, SearchResult, INVALID_CHAR_MESSAGE, INVALID_MAZE_MESSAGE, NO_PATH_MESSAGE,
};

fn main() -> Result<ExitCode> {
    env_logger::init();
    let args = CLIArgs::parse();
    let mut grid = maze_bfs::read_grid(&args.input_path).with_context(|| {
        format!(
            "Failed to read maze from given file({}).",
            args.input_path.display()
        )
    })?;

    let outcome = maze_bfs::solve(&mut grid).context("Failed to search path in maze.")?;
    if !outcome.valid_chars {
        println!("{}", INVALID_CHAR_MESSAGE);
    }

    match outcome.result {
        SearchResult::InvalidStructure => println!("{}", INVALID_MAZE_MESSAGE),
        SearchResult::NoPath => println!("{}", NO_PATH_MESSAGE),
        SearchResult::PathFound(_) => maze_bfs::render_grid(&grid, io::stdout().lock())
            .context("Failed to print maze with path.")?,
    }

    Ok(outcome.exit_code())
}
