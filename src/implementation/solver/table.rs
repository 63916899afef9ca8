// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This module provides the table which is filled bottom-up when solving a
//! knapsack instance with dynamic programming.

/// The dynamic programming table of a knapsack instance. The cell at
/// `(i, c)` holds the best value that can be achieved using only the first
/// `i` items of the instance when the remaining capacity is `c`.
///
/// # Note:
/// All cells are stored in one single contiguous allocation, row after row.
/// That is, the table has `nb_items + 1` rows of `capacity + 1` cells each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueTable {
    /// The number of cells in one row (capacity + 1)
    width: usize,
    /// The cells of the table
    cells: Vec<usize>,
}
impl ValueTable {
    /// Creates a new table where all cells are zero
    pub fn new(nb_items: usize, capacity: usize) -> Self {
        let width = capacity + 1;
        ValueTable { width, cells: vec![0; (nb_items + 1) * width] }
    }
    /// The number of items that have been considered to fill this table
    pub fn nb_items(&self) -> usize {
        self.cells.len() / self.width - 1
    }
    /// The largest capacity this table knows about
    pub fn capacity(&self) -> usize {
        self.width - 1
    }
    /// The best value achievable with the `item` first items and a remaining
    /// capacity of `capacity`.
    #[inline]
    pub fn get(&self, item: usize, capacity: usize) -> usize {
        self.cells[item * self.width + capacity]
    }
    /// The complete row of the given item
    pub fn row(&self, item: usize) -> &[usize] {
        let start = item * self.width;
        &self.cells[start..start + self.width]
    }
    /// Returns the row of `item - 1` (read only) along with the row of
    /// `item` (writable). This is all it takes to fill the table row by row.
    pub(crate) fn rows_mut(&mut self, item: usize) -> (&[usize], &mut [usize]) {
        let (before, after) = self.cells.split_at_mut(item * self.width);
        let previous = &before[(item - 1) * self.width..];
        let current  = &mut after[..self.width];
        (previous, current)
    }
    /// The best value achievable for the whole instance
    pub fn optimum(&self) -> usize {
        self.get(self.nb_items(), self.capacity())
    }
}
