use crate::{Error, Position};

/// First-in-first-out queue of positions with a fixed capacity over its whole life.
///
/// Head and tail only move forward, so the capacity bounds the number of pushes,
/// not the number of positions held at once. Breadth-first search pushes each cell
/// at most once, which makes `row_n * col_n` always enough.
#[derive(Debug)]
pub struct PathQueue {
    contents: Vec<Position>,
    head: usize,
    cap: usize,
}

impl PathQueue {
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            contents: Vec::with_capacity(cap),
            head: 0,
            cap,
        }
    }

    pub fn capacity(&self) -> usize {
        self.cap
    }

    pub fn push(&mut self, pos: Position) -> Result<(), Error> {
        if self.contents.len() >= self.cap {
            return Err(Error::CapacityExceeded(self.cap));
        }

        self.contents.push(pos);
        Ok(())
    }

    pub fn pop(&mut self) -> Result<Position, Error> {
        let pos = *self.contents.get(self.head).ok_or(Error::EmptyQueue)?;
        self.head += 1;
        Ok(pos)
    }

    pub fn is_empty(&self) -> bool {
        self.head == self.contents.len()
    }

    pub fn len(&self) -> usize {
        self.contents.len() - self.head
    }
}
