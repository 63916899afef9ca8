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

//! This module provides the implementation of an exhaustive knapsack solver.
//! It enumerates all the subsets of items, which makes it only ever usable
//! on tiny instances. Its sole purpose is to serve as a reference to check
//! the outcome of an other solver.

use crate::{Problem, Solution, Solver};

/// The maximum number of items the exhaustive solver accepts to deal with.
pub const MAX_EXHAUSTIVE_ITEMS: usize = 20;

/// This solver enumerates all 2^n subsets of items and keeps the best
/// feasible one. Among several subsets having the same value, the one with
/// the lowest bitmask (item `i` being bit `i`) is returned, so only the
/// optimal value is meant to be compared with that of an other solver.
///
/// # Panics
/// When the problem has more than `MAX_EXHAUSTIVE_ITEMS` items.
///
/// # Example
/// ```
/// # use optipack::*;
/// let problem = Problem::from_parts(None, vec![5, 4, 3], vec![2, 3, 4], 5).unwrap();
/// assert_eq!(DpSolver.solve(&problem).optimal_value, Exhaustive.solve(&problem).optimal_value);
/// ```
#[derive(Debug, Default, Copy, Clone)]
pub struct Exhaustive;
impl Solver for Exhaustive {
    fn solve(&self, problem: &Problem) -> Solution {
        let n = problem.len();
        assert!(n <= MAX_EXHAUSTIVE_ITEMS, "too many items for an exhaustive search ({n})");

        let mut best_value = 0;
        let mut best_mask  = 0_u32;
        for mask in 0..(1_u32 << n) {
            let mut value = 0;
            let mut cost  = 0_usize;
            for (i, item) in problem.items().iter().enumerate() {
                if mask & (1_u32 << i) != 0 {
                    value += item.value;
                    cost   = cost.saturating_add(item.cost);
                }
            }
            if cost <= problem.capacity() && value > best_value {
                best_value = value;
                best_mask  = mask;
            }
        }

        let chosen = (0..n).filter(|&i| best_mask & (1_u32 << i) != 0).collect();
        Solution { optimal_value: best_value, chosen }
    }
}
