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

//! This module defines the `Solver` trait.

use crate::{Problem, Solution};

/// This is the solver abstraction. It is implemented by any structure that
/// is able to find a subset of the items of a knapsack problem whose total
/// cost does not exceed the capacity and whose total value is maximal.
///
/// A solver is stateless: solving the same problem twice must yield the very
/// same solution (not only the same value but also the same chosen items).
pub trait Solver {
    /// This method orders the solver to search for the optimal solution among
    /// all possibilities. The returned solution lists the indices of the
    /// selected items in increasing order. When no item can be selected with
    /// a positive value, the solution has an optimal value of zero and an
    /// empty selection.
    fn solve(&self, problem: &Problem) -> Solution;
}
