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

//! This module defines the most basic data types that are used throughout all
//! the code of our library (both at the abstraction and implementation levels).
//! These are also the types your client code is likely to work with.

use std::num::ParseIntError;

use serde::Serialize;

// ----------------------------------------------------------------------------
// --- ITEM -------------------------------------------------------------------
// ----------------------------------------------------------------------------
/// One of the candidate items that can be put in the sack. An item is
/// identified by its position in the problem; the label is only used when
/// reporting a solution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Item {
    /// An optional human readable name (e.g. "Laptop", "Algorithms 101")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// The value (profit, benefit, utility, ...) gained when selecting the item
    pub value: usize,
    /// The cost (weight, credits, price, ...) consumed when selecting the item
    pub cost : usize,
}
impl Item {
    /// Creates an anonymous item
    pub fn new(value: usize, cost: usize) -> Self {
        Item { label: None, value, cost }
    }
    /// Creates a labelled item
    pub fn labelled<S: Into<String>>(label: S, value: usize, cost: usize) -> Self {
        Item { label: Some(label.into()), value, cost }
    }
}

// ----------------------------------------------------------------------------
// --- PROBLEM ----------------------------------------------------------------
// ----------------------------------------------------------------------------
/// A validated instance of the 0/1 knapsack problem.
///
/// The only way to get hold of a `Problem` is through one of its fallible
/// constructors. Hence, whenever you own one, you know that the total value
/// of all its items fits within an `usize` and that there is exactly one
/// label per item (when labels were given at all).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Problem {
    items   : Vec<Item>,
    capacity: usize,
}
impl Problem {
    /// Creates a new problem from a sequence of items and a capacity.
    ///
    /// # Example
    /// ```
    /// # use optipack::*;
    /// let problem = Problem::new(vec![Item::new(60, 10), Item::new(100, 20)], 25).unwrap();
    /// assert_eq!(2, problem.len());
    /// assert_eq!(25, problem.capacity());
    /// ```
    pub fn new(items: Vec<Item>, capacity: usize) -> Result<Self, Error> {
        items.iter()
            .try_fold(0_usize, |total, item| total.checked_add(item.value))
            .ok_or(Error::Overflow)?;

        Ok(Problem { items, capacity })
    }
    /// Creates a new problem from the three parallel sequences collected
    /// by a front-end: the (optional) labels, the values and the costs.
    pub fn from_parts(
        labels  : Option<Vec<String>>,
        values  : Vec<usize>,
        costs   : Vec<usize>,
        capacity: usize,
    ) -> Result<Self, Error> {
        if values.len() != costs.len() {
            return Err(Error::LengthMismatch { values: values.len(), costs: costs.len() });
        }
        let labels = match labels {
            None         => vec![None; values.len()],
            Some(labels) => {
                if labels.len() != values.len() {
                    return Err(Error::LabelMismatch { labels: labels.len(), items: values.len() });
                }
                labels.into_iter().map(Some).collect()
            }
        };

        let items = labels.into_iter()
            .zip(values.into_iter().zip(costs))
            .map(|(label, (value, cost))| Item { label, value, cost })
            .collect();

        Self::new(items, capacity)
    }
    /// The number of items in this instance
    pub fn len(&self) -> usize {
        self.items.len()
    }
    /// True iff there is no item at all
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
    /// The maximum total cost of a selection
    pub fn capacity(&self) -> usize {
        self.capacity
    }
    /// The items of this instance, in order
    pub fn items(&self) -> &[Item] {
        &self.items
    }
    /// The item at the given index
    pub fn item(&self, index: usize) -> &Item {
        &self.items[index]
    }
    /// The values of all items (in item order)
    pub fn values(&self) -> Vec<usize> {
        self.items.iter().map(|i| i.value).collect()
    }
    /// The costs of all items (in item order)
    pub fn costs(&self) -> Vec<usize> {
        self.items.iter().map(|i| i.cost).collect()
    }
    /// The number of cells of the dp table needed to solve this instance,
    /// or `None` if that number does not even fit an `usize`.
    pub fn table_cells(&self) -> Option<usize> {
        (self.items.len() + 1).checked_mul(self.capacity.checked_add(1)?)
    }
}

// ----------------------------------------------------------------------------
// --- SOLUTION ---------------------------------------------------------------
// ----------------------------------------------------------------------------
/// The outcome of a maximization: the best achievable value along with the
/// (increasing) indices of the items that achieve it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Solution {
    /// The maximum total value reachable without exceeding the capacity
    pub optimal_value: usize,
    /// The indices of the selected items, in increasing order
    pub chosen: Vec<usize>,
}
impl Solution {
    /// True iff no item is selected at all
    pub fn is_empty(&self) -> bool {
        self.chosen.is_empty()
    }
    /// The total cost of the selected items
    pub fn total_cost(&self, problem: &Problem) -> usize {
        self.chosen.iter().map(|i| problem.item(*i).cost).sum()
    }
    /// The total value of the selected items
    pub fn total_value(&self, problem: &Problem) -> usize {
        self.chosen.iter().map(|i| problem.item(*i).value).sum()
    }
    /// The selected items themselves
    pub fn items<'a>(&'a self, problem: &'a Problem) -> impl Iterator<Item = &'a Item> + 'a {
        self.chosen.iter().map(move |i| problem.item(*i))
    }
}

// ----------------------------------------------------------------------------
// --- ERRORS -----------------------------------------------------------------
// ----------------------------------------------------------------------------
/// This enumeration groups all the reasons why a knapsack instance cannot be
/// built from what the user typed in. None of these is transient: the user has
/// to fix the input before the solver can be invoked.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The parser expected an integer but got something else
    #[error("the {field} field contains '{token}' which is not an integer ({source})")]
    ParseInt {
        field : &'static str,
        token : String,
        #[source]
        source: ParseIntError,
    },
    /// Values, costs and capacities must all be non negative
    #[error("the {field} must not be negative (got {value})")]
    Negative { field: &'static str, value: i64 },
    /// No capacity was given at all
    #[error("the capacity is missing")]
    MissingCapacity,
    /// There must be exactly one cost per value
    #[error("{values} values were given but {costs} costs")]
    LengthMismatch { values: usize, costs: usize },
    /// There must be exactly one label per item
    #[error("{labels} labels were given for {items} items")]
    LabelMismatch { labels: usize, items: usize },
    /// The dp table would be larger than what we accept to allocate
    #[error("this instance needs {cells} table cells which exceeds the limit of {limit}")]
    TooLarge { cells: usize, limit: usize },
    /// The total value of the items does not fit a machine integer
    #[error("the total value of the items is too large")]
    Overflow,
    /// The configuration could not be built
    #[error("invalid configuration: {0}")]
    Config(String),
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################
