use std::fmt::{Display, Formatter};
use std::ops::{Deref, Index, IndexMut};

/// Index struct to access elements in the [`Grid`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GridIndex {
    row: usize,
    col: usize,
}

impl From<(usize, usize)> for GridIndex {
    fn from(value: (usize, usize)) -> Self {
        Self::new(value.0, value.1)
    }
}

impl Display for GridIndex {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl GridIndex {
    /// Constructs a new [`GridIndex`].
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns value of `self.row`
    pub fn row(&self) -> usize {
        self.row
    }

    /// Returns value of `self.col`
    pub fn col(&self) -> usize {
        self.col
    }
}

/// Direction a [`LineIterator`] walks in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Right,
    Down,
    DownRight,
    DownLeft,
}

impl Direction {
    /// Returns the index one step away from `idx`, or [`None`] if the step would underflow.
    fn step(self, idx: GridIndex) -> Option<GridIndex> {
        match self {
            Direction::Right => Some(GridIndex::new(idx.row, idx.col + 1)),
            Direction::Down => Some(GridIndex::new(idx.row + 1, idx.col)),
            Direction::DownRight => Some(GridIndex::new(idx.row + 1, idx.col + 1)),
            Direction::DownLeft => idx
                .col
                .checked_sub(1)
                .map(|col| GridIndex::new(idx.row + 1, col)),
        }
    }
}

/// Square two-dimensional array that stores values and allows to mutate them.
/// Side length is chosen at construction and never changes.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    contents: Vec<Vec<T>>,
}

impl<T> Deref for Grid<T> {
    type Target = [Vec<T>];

    fn deref(&self) -> &Self::Target {
        self.contents.as_slice()
    }
}

impl<T> Index<GridIndex> for Grid<T> {
    type Output = T;

    fn index(&self, index: GridIndex) -> &Self::Output {
        &self.contents[index.row()][index.col()]
    }
}

impl<T> IndexMut<GridIndex> for Grid<T> {
    fn index_mut(&mut self, index: GridIndex) -> &mut Self::Output {
        &mut self.contents[index.row()][index.col()]
    }
}

impl<T: Clone + Default> Grid<T> {
    /// Creates a `side` x `side` grid filled with default values.
    pub fn new(side: usize) -> Self {
        Self {
            contents: vec![vec![T::default(); side]; side],
        }
    }
}

impl<T> Grid<T> {
    /// Number of rows (and columns).
    pub fn side(&self) -> usize {
        self.contents.len()
    }

    pub fn contains(&self, idx: GridIndex) -> bool {
        idx.row < self.side() && idx.col < self.side()
    }

    pub fn get(&self, idx: GridIndex) -> Option<&T> {
        self.contents.get(idx.row)?.get(idx.col)
    }

    pub fn get_mut(&mut self, idx: GridIndex) -> Option<&mut T> {
        self.contents.get_mut(idx.row)?.get_mut(idx.col)
    }

    /// Returns an iterator to indexed grid elements row by row
    pub fn all_indexed(&self) -> impl Iterator<Item = (GridIndex, &T)> {
        (0..self.side()).flat_map(move |row| self.right_iter((row, 0).into()).indexed())
    }

    /// Returns an iterator that starts with `pos` and walks in `direction`
    /// until it leaves the grid.
    pub fn line_iter(&self, pos: GridIndex, direction: Direction) -> LineIterator<'_, T> {
        LineIterator {
            current: Some(pos),
            direction,
            grid: self,
        }
    }

    /// Returns an iterator with rightwards direction that starts with a `pos`.
    pub fn right_iter(&self, pos: GridIndex) -> LineIterator<'_, T> {
        self.line_iter(pos, Direction::Right)
    }

    /// Returns an iterator with downwards direction that starts with a `pos`.
    pub fn bottom_iter(&self, pos: GridIndex) -> LineIterator<'_, T> {
        self.line_iter(pos, Direction::Down)
    }

    /// Returns a diagonal iterator with bottom-right direction that starts with a `pos`.
    pub fn bottom_right_iter(&self, pos: GridIndex) -> LineIterator<'_, T> {
        self.line_iter(pos, Direction::DownRight)
    }

    /// Returns a diagonal iterator with bottom-left direction that starts with a `pos`.
    pub fn bottom_left_iter(&self, pos: GridIndex) -> LineIterator<'_, T> {
        self.line_iter(pos, Direction::DownLeft)
    }
}

/// An iterator over a straight line of [`Grid`] cells.
/// Stops when the underlying [`GridIndex`] goes out of [`Grid`] scope.
pub struct LineIterator<'a, T> {
    current: Option<GridIndex>,
    direction: Direction,
    grid: &'a Grid<T>,
}

impl<'a, T> LineIterator<'a, T> {
    /// Returns an iterator which gives the current iteration [`GridIndex`]
    /// as well as the next value.
    pub fn indexed(self) -> IndexedLineIterator<'a, T> {
        IndexedLineIterator { it: self }
    }
}

impl<'a, T> Iterator for LineIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current.filter(|idx| self.grid.contains(*idx))?;
        self.current = self.direction.step(current);
        Some(&self.grid[current])
    }
}

/// An iterator that yields the current [`GridIndex`] and the element during iteration.
pub struct IndexedLineIterator<'a, T> {
    it: LineIterator<'a, T>,
}

impl<'a, T> Iterator for IndexedLineIterator<'a, T> {
    type Item = (GridIndex, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.it.current?;
        self.it.next().map(|item| (index, item))
    }
}
