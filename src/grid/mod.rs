//! A resizable 2D grid of arbitrary values.
//!
//! Cells are stored row-major as a list of [`Row`]s. Every structural mutation reshapes the
//! rows in place, so an insert or delete costs `O(lines * columns)`.

use std::error;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Deref, Index, IndexMut};
use std::rc::Rc;
use std::result;
use std::slice;
use std::sync::Arc;

use fnv::FnvHasher;
use log::{debug, trace};

use crate::index::{Column, Line, Point};

mod row;

pub use self::row::Row;

/// Odd multiplier used to fold cell hashes into [`Grid::hash_code`].
const HASH_MULTIPLIER: u64 = 7;

pub type Result<T> = result::Result<T, Error>;

/// The index or bound rejected by a grid operation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Position {
    Line(Line),
    Column(Column),
    Point(Point),

    /// Start (inclusive) and end (exclusive) of a region or line fill.
    Range(Point, Point),
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Line(line) => write!(f, "line {}", line),
            Position::Column(column) => write!(f, "column {}", column),
            Position::Point(point) => write!(f, "point {}", point),
            Position::Range(start, end) => write!(f, "range {}..{}", start, end),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Error {
    /// Grid was requested with a negative width or height.
    InvalidDimension { width: isize, height: isize },

    /// Index or bound outside the grid's current shape.
    OutOfBounds(Position),

    /// Supplied values do not match the length of the row or column being inserted.
    SizeMismatch { expected: usize, actual: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidDimension { width, height } => {
                write!(f, "Invalid grid dimensions {}x{}, must not be negative", width, height)
            },
            Error::OutOfBounds(position) => write!(f, "Grid {} is out of bounds", position),
            Error::SizeMismatch { expected, actual } => {
                write!(f, "Expected {} values, got {}", expected, actual)
            },
        }
    }
}

impl error::Error for Error {}

/// Whether `0 <= index < len`.
#[inline]
fn in_range(index: isize, len: usize) -> bool {
    index >= 0 && (index as usize) < len
}

/// Grid dimensions.
pub trait Dimensions {
    /// Number of lines (rows).
    fn lines(&self) -> usize;

    /// Number of columns in each line.
    fn columns(&self) -> usize;

    /// Whether `point` addresses an existing cell.
    #[inline]
    fn contains(&self, point: Point) -> bool {
        in_range(point.line.0, self.lines()) && in_range(point.column.0, self.columns())
    }
}

impl Dimensions for (usize, usize) {
    fn lines(&self) -> usize {
        self.0
    }

    fn columns(&self) -> usize {
        self.1
    }
}

/// A value that can be stored and hashed in a grid.
///
/// Cells reporting `is_absent` are skipped by [`Grid::hash_code`].
pub trait GridCell: Hash {
    #[inline]
    fn is_absent(&self) -> bool {
        false
    }
}

impl<T: Hash> GridCell for Option<T> {
    #[inline]
    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

impl<'a, T: GridCell + ?Sized> GridCell for &'a T {
    #[inline]
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

macro_rules! present_cells {
    ($($ty:ty),*) => {
        $(impl GridCell for $ty {})*
    };
}

present_cells!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, bool, char, str, String
);

macro_rules! wrapped_cells {
    ($($wrapper:ident),*) => {
        $(
            impl<T: GridCell + ?Sized> GridCell for $wrapper<T> {
                #[inline]
                fn is_absent(&self) -> bool {
                    (**self).is_absent()
                }
            }
        )*
    };
}

wrapped_cells!(Box, Rc, Arc);

/// An item in the grid along with its Line and Column.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Indexed<T> {
    pub inner: T,
    pub line: Line,
    pub column: Column,
}

impl<T> Deref for Indexed<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.inner
    }
}

/// Resizable, row-major grid of values.
///
/// The `template` is the value placed in every cell created by construction or by a
/// shape-growing operation that is not given explicit values.
///
/// ```
/// use matrix_grid::index::{Column, Line, Point};
/// use matrix_grid::Grid;
///
/// let mut grid = Grid::new(2, 2, ' ').unwrap();
/// grid.fill_region(Point::new(Line(0), Column(0)), Point::new(Line(1), Column(2)), '#').unwrap();
/// grid.insert_row(Line(0)).unwrap();
///
/// assert_eq!(grid.height(), 3);
/// assert_eq!(grid.get(Line(1), Column(1)), Ok(&'#'));
/// ```
#[derive(Clone, Debug)]
pub struct Grid<T> {
    /// Lines in the grid. Each row holds exactly `columns` cells.
    raw: Vec<Row<T>>,

    /// Number of columns.
    ///
    /// Tracked separately so a grid without lines still knows its width.
    columns: usize,

    /// Value for newly created cells.
    template: T,
}

impl<T: Clone> Grid<T> {
    /// Create a `width` by `height` grid with every cell set to `template`.
    pub fn new(width: isize, height: isize, template: T) -> Result<Grid<T>> {
        if width < 0 || height < 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let columns = width as usize;
        let raw = vec![Row::new(columns, &template); height as usize];

        Ok(Grid { raw, columns, template })
    }

    /// Create a grid using `T::default()` as the template.
    pub fn with_default(width: isize, height: isize) -> Result<Grid<T>>
    where
        T: Default,
    {
        Grid::new(width, height, T::default())
    }

    /// Insert a line of template cells.
    ///
    /// Lines at or below `at` move down by one. Inserting at [`Grid::height`] appends.
    pub fn insert_row(&mut self, at: Line) -> Result<()> {
        let index = self.insertion_line(at)?;

        trace!("Inserting row at line {}", at);
        let row = Row::new(self.columns, &self.template);
        self.raw.insert(index, row);

        Ok(())
    }

    /// Insert a column of template cells.
    ///
    /// Columns at or right of `at` move right by one. Inserting at [`Grid::width`] appends.
    pub fn insert_column(&mut self, at: Column) -> Result<()> {
        let index = self.insertion_column(at)?;

        trace!("Inserting column at {}", at);
        for row in &mut self.raw {
            row.insert(index, self.template.clone());
        }
        self.columns += 1;

        Ok(())
    }

    /// Set every cell from `start` (inclusive) to `end` (exclusive) to `value`.
    ///
    /// A region that is empty on either axis leaves the grid unchanged.
    pub fn fill_region(&mut self, start: Point, end: Point, value: T) -> Result<()> {
        self.check_range(start, end)?;

        if end.line <= start.line || end.column <= start.column {
            return Ok(());
        }

        trace!("Filling region {}..{}", start, end);
        for row in &mut self.raw[start.line.0 as usize..end.line.0 as usize] {
            row.fill(start.column..end.column, &value);
        }

        Ok(())
    }

    /// Set every cell along a line to `value`.
    ///
    /// Starting at `start`, moves by `step` until the line reaches `end.line` or the column
    /// reaches `end.column`, or the next point falls outside the grid. Horizontal, vertical
    /// and diagonal lines are expressed through `step`.
    pub fn fill_line(
        &mut self,
        start: Point,
        step: Point<isize, isize>,
        end: Point,
        value: T,
    ) -> Result<()> {
        self.check_range(start, end)?;

        if step.line == 0 && step.column == 0 {
            debug!("Ignoring line fill from {} with zero step", start);
            return Ok(());
        }

        trace!("Filling line from {} by {} until {}", start, step, end);
        let mut count = 0;
        while let Some(point) = start.checked_offset(step, count) {
            if point.line >= end.line || point.column >= end.column || !self.contains(point) {
                break;
            }

            self[&point] = value.clone();
            count += 1;
        }

        Ok(())
    }
}

impl<T> Grid<T> {
    /// Build a grid from a list of rows.
    ///
    /// The width is taken from the first row; every other row must have the same length.
    pub fn from_rows(rows: Vec<Vec<T>>, template: T) -> Result<Grid<T>> {
        let columns = rows.first().map_or(0, Vec::len);
        if let Some(row) = rows.iter().find(|row| row.len() != columns) {
            return Err(Error::SizeMismatch { expected: columns, actual: row.len() });
        }

        let raw = rows.into_iter().map(Row::from_vec).collect();

        Ok(Grid { raw, columns, template })
    }

    /// Number of lines.
    #[inline]
    pub fn height(&self) -> usize {
        self.raw.len()
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.columns
    }

    #[inline]
    pub fn template(&self) -> &T {
        &self.template
    }

    pub fn get(&self, line: Line, column: Column) -> Result<&T> {
        let point = self.check_point(Point::new(line, column))?;
        Ok(&self[&point])
    }

    pub fn get_mut(&mut self, line: Line, column: Column) -> Result<&mut T> {
        let point = self.check_point(Point::new(line, column))?;
        Ok(&mut self[&point])
    }

    /// Overwrite a single cell.
    pub fn set(&mut self, line: Line, column: Column, value: T) -> Result<()> {
        *self.get_mut(line, column)? = value;
        Ok(())
    }

    /// Insert a line holding `values`.
    ///
    /// `values` must contain exactly [`Grid::width`] elements.
    pub fn insert_row_with(&mut self, at: Line, values: Vec<T>) -> Result<()> {
        let index = self.insertion_line(at)?;
        if values.len() != self.columns {
            return Err(Error::SizeMismatch { expected: self.columns, actual: values.len() });
        }

        trace!("Inserting {} values as row at line {}", values.len(), at);
        self.raw.insert(index, Row::from_vec(values));

        Ok(())
    }

    /// Insert a column holding `values`, top to bottom.
    ///
    /// `values` must contain exactly [`Grid::height`] elements.
    pub fn insert_column_with(&mut self, at: Column, values: Vec<T>) -> Result<()> {
        let index = self.insertion_column(at)?;
        if values.len() != self.raw.len() {
            return Err(Error::SizeMismatch { expected: self.raw.len(), actual: values.len() });
        }

        trace!("Inserting {} values as column {}", values.len(), at);
        for (row, value) in self.raw.iter_mut().zip(values) {
            row.insert(index, value);
        }
        self.columns += 1;

        Ok(())
    }

    /// Remove a line, moving every line below it up by one.
    pub fn delete_row(&mut self, at: Line) -> Result<Row<T>> {
        if !in_range(at.0, self.lines()) {
            return Err(Error::OutOfBounds(Position::Line(at)));
        }

        trace!("Deleting row at line {}", at);
        Ok(self.raw.remove(at.0 as usize))
    }

    /// Remove a column, moving every column right of it left by one.
    ///
    /// Returns the removed cells, top to bottom.
    pub fn delete_column(&mut self, at: Column) -> Result<Vec<T>> {
        if !in_range(at.0, self.columns) {
            return Err(Error::OutOfBounds(Position::Column(at)));
        }

        trace!("Deleting column {}", at);
        let index = at.0 as usize;
        let removed = self.raw.iter_mut().map(|row| row.remove(index)).collect();
        self.columns -= 1;

        Ok(removed)
    }

    /// Iterate over all lines from top to bottom.
    #[inline]
    pub fn rows(&self) -> slice::Iter<'_, Row<T>> {
        self.raw.iter()
    }

    /// Iterate over all cells in row-major order.
    #[inline]
    pub fn iter(&self) -> GridIterator<'_, T> {
        GridIterator { grid: self, cur: Point::default() }
    }

    fn check_point(&self, point: Point) -> Result<Point> {
        if self.contains(point) {
            Ok(point)
        } else {
            Err(Error::OutOfBounds(Position::Point(point)))
        }
    }

    /// Bounds shared by region and line fills.
    fn check_range(&self, start: Point, end: Point) -> Result<()> {
        if start.line.0 < 0
            || start.column.0 < 0
            || end.line > self.lines()
            || end.column > self.columns
        {
            return Err(Error::OutOfBounds(Position::Range(start, end)));
        }

        Ok(())
    }

    fn insertion_line(&self, at: Line) -> Result<usize> {
        if in_range(at.0, self.lines() + 1) {
            Ok(at.0 as usize)
        } else {
            Err(Error::OutOfBounds(Position::Line(at)))
        }
    }

    fn insertion_column(&self, at: Column) -> Result<usize> {
        if in_range(at.0, self.columns + 1) {
            Ok(at.0 as usize)
        } else {
            Err(Error::OutOfBounds(Position::Column(at)))
        }
    }
}

impl<T: GridCell> Grid<T> {
    /// Deterministic hash of the grid's shape and contents.
    ///
    /// Seeded with `width + 7 * height`, then folds every present cell in row-major order
    /// with the multiplier `7`. Absent cells leave the code unchanged. Overflow wraps.
    pub fn hash_code(&self) -> u64 {
        let seed = (self.columns as u64)
            .wrapping_add(HASH_MULTIPLIER.wrapping_mul(self.raw.len() as u64));

        self.raw.iter().flat_map(Row::iter).filter(|cell| !cell.is_absent()).fold(
            seed,
            |code, cell| code.wrapping_mul(HASH_MULTIPLIER).wrapping_add(cell_hash(cell)),
        )
    }
}

/// Hash a single cell with FNV, which is stable across builds.
fn cell_hash<T: Hash + ?Sized>(cell: &T) -> u64 {
    let mut hasher = FnvHasher::default();
    cell.hash(&mut hasher);
    hasher.finish()
}

impl<T: PartialEq> PartialEq for Grid<T> {
    fn eq(&self, other: &Self) -> bool {
        // Template is not part of the contents.
        self.columns.eq(&other.columns) && self.raw.eq(&other.raw)
    }
}

impl<T: Eq> Eq for Grid<T> {}

impl<T: GridCell> Hash for Grid<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl<T> Dimensions for Grid<T> {
    #[inline]
    fn lines(&self) -> usize {
        self.raw.len()
    }

    #[inline]
    fn columns(&self) -> usize {
        self.columns
    }
}

pub struct GridIterator<'a, T> {
    /// Immutable grid reference.
    grid: &'a Grid<T>,

    /// Position of the next cell.
    cur: Point,
}

impl<'a, T> GridIterator<'a, T> {
    /// Position of the next cell to be yielded.
    pub fn point(&self) -> Point {
        self.cur
    }
}

impl<'a, T> Iterator for GridIterator<'a, T> {
    type Item = Indexed<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.grid.contains(self.cur) {
            return None;
        }

        let item = Indexed {
            inner: &self.grid[&self.cur],
            line: self.cur.line,
            column: self.cur.column,
        };

        self.cur.column += 1;
        if self.cur.column == self.grid.columns {
            self.cur.column = Column(0);
            self.cur.line += 1;
        }

        Some(item)
    }
}

/// Index by line.
///
/// Panics if `index` is outside the grid.
impl<T> Index<Line> for Grid<T> {
    type Output = Row<T>;

    #[inline]
    fn index(&self, index: Line) -> &Row<T> {
        &self.raw[index.0 as usize]
    }
}

impl<T> IndexMut<Line> for Grid<T> {
    #[inline]
    fn index_mut(&mut self, index: Line) -> &mut Row<T> {
        &mut self.raw[index.0 as usize]
    }
}

impl<'point, T> Index<&'point Point> for Grid<T> {
    type Output = T;

    #[inline]
    fn index<'a>(&'a self, point: &Point) -> &'a T {
        &self[point.line][point.column]
    }
}

impl<'point, T> IndexMut<&'point Point> for Grid<T> {
    #[inline]
    fn index_mut<'a, 'b>(&'a mut self, point: &'b Point) -> &'a mut T {
        &mut self[point.line][point.column]
    }
}
