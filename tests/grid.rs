use maze_bfs::{Error, Grid, PathQueue, Position};

#[test]
fn grid_reads_and_writes_inside_bounds() {
    let mut grid = Grid::new(2, 3, '.');
    grid.set(&Position::new(1, 2), '#').unwrap();

    assert_eq!(*grid.get(&Position::new(1, 2)).unwrap(), '#');
    assert_eq!(*grid.get(&Position::new(0, 0)).unwrap(), '.');
    assert_eq!(grid.to_string(), "...\n..#");
}

#[test]
fn grid_rejects_positions_outside() {
    let mut grid = Grid::new(2, 3, '.');

    assert!(matches!(
        grid.get(&Position::new(2, 0)),
        Err(Error::OutOfBounds(_, 2, 3))
    ));
    assert!(matches!(
        grid.set(&Position::new(0, 3), '#'),
        Err(Error::OutOfBounds(_, 2, 3))
    ));
    assert_eq!(grid, Grid::new(2, 3, '.'));
}

#[test]
fn grid_from_cells_needs_every_cell() {
    let grid = Grid::from_cells(2, 2, vec!['S', '.', '#', 'F']).unwrap();
    assert_eq!(*grid.get(&Position::new(1, 1)).unwrap(), 'F');

    assert!(matches!(
        Grid::from_cells(2, 2, vec!['S', '.', '#']),
        Err(Error::MissingCellText(4, 3))
    ));
}

#[test]
fn grid_cells_are_row_major() {
    let grid = Grid::from_cells(2, 2, vec!['a', 'b', 'c', 'd']).unwrap();
    let cells = grid.cells().map(|(pos, c)| (pos, *c)).collect::<Vec<_>>();

    assert_eq!(
        cells,
        vec![
            (Position::new(0, 0), 'a'),
            (Position::new(0, 1), 'b'),
            (Position::new(1, 0), 'c'),
            (Position::new(1, 1), 'd'),
        ]
    );
}

#[test]
fn queue_pops_in_push_order() {
    let mut queue = PathQueue::with_capacity(3);
    queue.push(Position::new(0, 0)).unwrap();
    queue.push(Position::new(0, 1)).unwrap();
    assert_eq!(queue.pop().unwrap(), Position::new(0, 0));

    queue.push(Position::new(1, 1)).unwrap();
    assert_eq!(queue.len(), 2);
    assert_eq!(queue.pop().unwrap(), Position::new(0, 1));
    assert_eq!(queue.pop().unwrap(), Position::new(1, 1));
    assert!(queue.is_empty());
}

#[test]
fn queue_capacity_counts_every_push() {
    let mut queue = PathQueue::with_capacity(2);
    queue.push(Position::new(0, 0)).unwrap();
    queue.pop().unwrap();
    queue.push(Position::new(0, 1)).unwrap();

    assert!(matches!(
        queue.push(Position::new(0, 2)),
        Err(Error::CapacityExceeded(2))
    ));
}

#[test]
fn queue_pop_when_empty_fails() {
    let mut queue = PathQueue::with_capacity(1);
    assert!(queue.is_empty());
    assert!(matches!(queue.pop(), Err(Error::EmptyQueue)));

    queue.push(Position::new(0, 0)).unwrap();
    queue.pop().unwrap();
    assert!(matches!(queue.pop(), Err(Error::EmptyQueue)));
}
