//! Defines the Row type which makes up lines in the grid.

use std::ops::{Index, IndexMut, Range};
use std::slice;

use crate::index::Column;

/// A row in the grid.
#[derive(Default, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Row<T> {
    inner: Vec<T>,
}

impl<T: Clone> Row<T> {
    /// Create a new row with every cell set to `template`.
    pub fn new(columns: usize, template: &T) -> Row<T> {
        Row { inner: vec![template.clone(); columns] }
    }

    /// Set every cell in `range` to `value`.
    #[inline]
    pub fn fill(&mut self, range: Range<Column>, value: &T) {
        for cell in &mut self[range] {
            *cell = value.clone();
        }
    }
}

impl<T> Row<T> {
    #[inline]
    pub fn from_vec(vec: Vec<T>) -> Row<T> {
        Row { inner: vec }
    }

    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.inner
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.inner.iter()
    }

    /// Insert a cell, shifting every cell at or after `column` one to the right.
    ///
    /// Panics if `column > len`.
    #[inline]
    pub(crate) fn insert(&mut self, column: usize, value: T) {
        self.inner.insert(column, value);
    }

    /// Remove a cell, shifting every cell after `column` one to the left.
    ///
    /// Panics if `column >= len`.
    #[inline]
    pub(crate) fn remove(&mut self, column: usize) -> T {
        self.inner.remove(column)
    }
}

impl<'a, T> IntoIterator for &'a Row<T> {
    type IntoIter = slice::Iter<'a, T>;
    type Item = &'a T;

    #[inline]
    fn into_iter(self) -> slice::Iter<'a, T> {
        self.inner.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Row<T> {
    type IntoIter = slice::IterMut<'a, T>;
    type Item = &'a mut T;

    #[inline]
    fn into_iter(self) -> slice::IterMut<'a, T> {
        self.inner.iter_mut()
    }
}

impl<T> Index<Column> for Row<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: Column) -> &T {
        &self.inner[index.0 as usize]
    }
}

impl<T> IndexMut<Column> for Row<T> {
    #[inline]
    fn index_mut(&mut self, index: Column) -> &mut T {
        &mut self.inner[index.0 as usize]
    }
}

impl<T> Index<Range<Column>> for Row<T> {
    type Output = [T];

    #[inline]
    fn index(&self, index: Range<Column>) -> &[T] {
        &self.inner[(index.start.0 as usize)..(index.end.0 as usize)]
    }
}

impl<T> IndexMut<Range<Column>> for Row<T> {
    #[inline]
    fn index_mut(&mut self, index: Range<Column>) -> &mut [T] {
        &mut self.inner[(index.start.0 as usize)..(index.end.0 as usize)]
    }
}

#[cfg(test)]
mod tests {
    use super::Row;
    use crate::index::Column;

    #[test]
    fn new_row_uses_template() {
        let row = Row::new(3, &'x');

        assert_eq!(row.len(), 3);
        assert!(row.iter().all(|c| *c == 'x'));
    }

    #[test]
    fn fill_range() {
        let mut row = Row::from_vec(vec![0, 1, 2, 3, 4]);
        row.fill(Column(1)..Column(4), &9);

        assert_eq!(row.into_vec(), vec![0, 9, 9, 9, 4]);
    }

    #[test]
    fn insert_and_remove_shift_cells() {
        let mut row = Row::from_vec(vec!['a', 'b', 'c']);

        row.insert(1, 'z');
        assert_eq!(row[Column(0)], 'a');
        assert_eq!(row[Column(1)], 'z');
        assert_eq!(row[Column(2)], 'b');

        assert_eq!(row.remove(0), 'a');
        assert_eq!(row[Column(0)..Column(3)], ['z', 'b', 'c']);
    }

    #[test]
    fn empty_row() {
        let row: Row<u8> = Row::new(0, &0);

        assert!(row.is_empty());
        assert_eq!(row.iter().count(), 0);
    }
}
