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


//! # Optipack
//! Optipack finds the best selection of items to put in a sack: the one that
//! maximizes the total value of the selected items without their total cost
//! exceeding the capacity of the sack (a.k.a. the 0/1 knapsack problem).
//! Whether you are loading packages in a vehicle, enrolling in courses,
//! sourcing raw materials or filling a shopping cart, this is the same
//! problem. Only the words change.
//!
//! The problem is solved exactly with dynamic programming: a table with one
//! row per item and one column per unit of capacity is filled bottom-up, and
//! then read backwards to find out which items have been selected. This takes
//! O(n · capacity) time and memory.
//!
//! ## Quick Example
//! The easiest way to use optipack is to call `solve` with the values and
//! costs of your items along with the capacity of your sack.
//!
//! ```
//! # use optipack::*;
//! let solution = solve(&[60, 100, 120], &[10, 20, 30], 50);
//!
//! assert_eq!(220, solution.optimal_value);
//! assert_eq!(vec![1, 2], solution.chosen);
//! ```
//!
//! ## From user input to a report
//! When the instance comes from a user, it first needs to be parsed and
//! validated. That is what `RawInput` is for: it rejects anything that is not
//! a well formed instance (garbage numbers, negative values, a missing
//! capacity, mismatching lengths, oversized tables, ..) before the solver is
//! ever invoked. Once solved, the solution can be phrased for a given
//! audience with a `Report`.
//!
//! ```
//! # use optipack::*;
//! // 1. Parse and validate the user input
//! let problem = RawInput::new("60 100 120", "10 20 30", "50")
//!     .parse(&InputConfig::default())
//!     .unwrap();
//! // 2. Solve the problem
//! let solution = DpSolver.solve(&problem);
//! // 3. Tell the user what to do
//! let report = Report::new(&Scenario::Shipping, &problem, &solution);
//!
//! println!("{report}");
//! ```

mod common;
mod abstraction;
mod implementation;

pub use common::*;
pub use abstraction::*;
pub use implementation::*;
