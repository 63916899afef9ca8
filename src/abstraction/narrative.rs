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

//! This module defines the `Narrative` trait which is used to phrase the
//! outcome of a maximization for a given audience.

use crate::{Item, Problem, Solution};

/// A narrative knows how to talk about a knapsack problem to a given audience.
/// Shipping a bunch of packages, enrolling in courses or filling a shopping
/// cart are all the same problem; only the words change. A narrative provides
/// these words. The assembly of the final text is left to a `Report`.
pub trait Narrative {
    /// Describes one of the selected items (e.g. "Laptop (price 10, value 60)")
    fn item(&self, item: &Item) -> String;
    /// The sentence presenting a non empty selection. The `listing` is the
    /// already joined description of all the selected items.
    fn success(&self, problem: &Problem, solution: &Solution, listing: &str) -> String;
    /// The sentence used when no combination of items yields any positive
    /// value within the capacity of the problem.
    fn failure(&self, problem: &Problem) -> String;
}
