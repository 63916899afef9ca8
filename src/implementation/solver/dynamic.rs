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

//! This module provides the implementation of the dynamic programming
//! knapsack solver. That is, the bottom-up construction of the value table
//! followed by the backtracking walk which recovers the selected items.
//!
//! This is the solver you will want to use in all but the most exotic cases:
//! it runs in O(n · capacity) time and memory, where n is the number of items.

use tracing::{debug, trace};

use crate::{Problem, Solution, Solver, ValueTable};

/// _This is the default solver._ It solves a knapsack instance exactly using
/// dynamic programming over the number of items and the integer capacity.
///
/// # Example
/// ```
/// # use optipack::*;
/// let problem  = Problem::from_parts(None, vec![60, 100, 120], vec![10, 20, 30], 50).unwrap();
/// let solution = DpSolver.solve(&problem);
///
/// assert_eq!(220, solution.optimal_value);
/// assert_eq!(vec![1, 2], solution.chosen);
/// ```
#[derive(Debug, Default, Copy, Clone)]
pub struct DpSolver;
impl Solver for DpSolver {
    fn solve(&self, problem: &Problem) -> Solution {
        solve(&problem.values(), &problem.costs(), problem.capacity())
    }
}

/// Solves the 0/1 knapsack problem defined by the parallel `values` and
/// `costs` slices and the given `capacity`.
///
/// The caller is responsible for passing slices of the same length (use a
/// `Problem` if you want that to be checked for you).
///
/// # Tie break
/// Whenever several subsets reach the optimal value, the one which is
/// returned is the one found by scanning the items backwards and leaving out
/// any item whose exclusion does not change the best achievable value. In
/// other words, higher indexed items are dropped first.
///
/// # Example
/// ```
/// # use optipack::solve;
/// let solution = solve(&[5, 4, 3], &[2, 3, 4], 5);
///
/// assert_eq!(9, solution.optimal_value);
/// assert_eq!(vec![0, 1], solution.chosen);
/// ```
pub fn solve(values: &[usize], costs: &[usize], capacity: usize) -> Solution {
    debug_assert_eq!(values.len(), costs.len(), "there must be one cost per value");

    let table  = value_table(values, costs, capacity);
    let chosen = backtrack(&table, values, costs);
    let optimal_value = table.optimum();

    debug!(items = values.len(), capacity, optimal_value, selected = chosen.len(), "knapsack solved");
    Solution { optimal_value, chosen }
}

/// Fills the complete dynamic programming table of the given instance.
///
/// Row `i` only depends on row `i - 1`: the item `i - 1` is either left out
/// (and the best value is the one of the previous row), or it is taken when
/// it fits (and the best value is its own value plus the best value of the
/// previous row for the capacity that remains).
///
/// Only the columns of capacity 1 and above are filled: the column of
/// capacity zero stays at zero, even for items which cost nothing. A free
/// item is hence never counted without some capacity left, and it can be
/// missed when the other items exhaust the capacity.
pub fn value_table(values: &[usize], costs: &[usize], capacity: usize) -> ValueTable {
    let n = values.len().min(costs.len());
    let mut table = ValueTable::new(n, capacity);

    debug!(rows = n + 1, columns = capacity + 1, "filling the value table");
    for i in 1..=n {
        let value = values[i - 1];
        let cost  = costs[i - 1];

        let (previous, current) = table.rows_mut(i);
        for c in 1..=capacity {
            let without = previous[c];
            current[c]  = if cost > c {
                without
            } else {
                without.max(value + previous[c - cost])
            };
        }
    }
    table
}

/// Reads the table backwards to recover the items which have been selected
/// to reach the optimum. The returned indices are sorted in increasing order.
///
/// The walk starts from the last item and the full capacity. An item whose
/// row holds the same value as the previous row (for the current capacity)
/// is left out. Otherwise, it has been taken: its cost is deduced from the
/// current capacity. The walk stops as soon as the residual value hits zero.
pub fn backtrack(table: &ValueTable, values: &[usize], costs: &[usize]) -> Vec<usize> {
    let mut residual = table.optimum();
    let mut capacity = table.capacity();
    let mut chosen   = vec![];

    for i in (1..=table.nb_items()).rev() {
        if residual == 0 {
            break;
        }
        if residual == table.get(i - 1, capacity) {
            continue;
        }
        trace!(item = i - 1, residual, capacity, "item selected");
        chosen.push(i - 1);
        residual -= values[i - 1];
        capacity -= costs[i - 1];
    }

    chosen.reverse();
    chosen
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################
