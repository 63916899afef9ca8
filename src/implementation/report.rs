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

//! This module provides the textual reports presenting the outcome of a
//! maximization. There is one single `Report` which is parameterized by a
//! `Narrative`; the `Scenario`s provide the words of the four audiences this
//! crate talks to.

use std::{fmt::{self, Display}, str::FromStr};

use serde::Serialize;

use crate::{Item, Narrative, Problem, Solution};

// ----------------------------------------------------------------------------
// --- SCENARIO ---------------------------------------------------------------
// ----------------------------------------------------------------------------
/// The audiences a report can be written for. All of them solve the very same
/// knapsack problem, only the vocabulary differs.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scenario {
    /// Load the most valuable packages in a vehicle
    #[default]
    Shipping,
    /// Enroll in the most valuable courses within a credit limit
    Courses,
    /// Source the most profitable materials within a budget
    SupplyChain,
    /// Buy the most useful products within a budget
    ShoppingCart,
}
impl Scenario {
    /// All the known scenarios
    pub const ALL: [Scenario; 4] = [
        Scenario::Shipping, Scenario::Courses, Scenario::SupplyChain, Scenario::ShoppingCart];

    /// The canonical name of the scenario
    pub fn name(self) -> &'static str {
        match self {
            Scenario::Shipping     => "shipping",
            Scenario::Courses      => "courses",
            Scenario::SupplyChain  => "supply-chain",
            Scenario::ShoppingCart => "shopping-cart",
        }
    }
    /// How an item is called when it has no label
    fn anonymous(self) -> &'static str {
        match self {
            Scenario::Shipping     => "a package",
            Scenario::Courses      => "a course",
            Scenario::SupplyChain  => "a material",
            Scenario::ShoppingCart => "an item",
        }
    }
}
impl Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The error returned when a scenario name is not recognized
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown scenario '{0}' (expected one of shipping, courses, supply-chain, shopping-cart)")]
pub struct UnknownScenario(pub String);

impl FromStr for Scenario {
    type Err = UnknownScenario;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "shipping" | "package" | "packages"            => Ok(Scenario::Shipping),
            "courses"  | "course"  | "academic"            => Ok(Scenario::Courses),
            "supply-chain" | "supply" | "sourcing"         => Ok(Scenario::SupplyChain),
            "shopping-cart" | "shopping" | "cart"          => Ok(Scenario::ShoppingCart),
            _ => Err(UnknownScenario(s.to_string())),
        }
    }
}

impl Narrative for Scenario {
    fn item(&self, item: &Item) -> String {
        let name = item.label.as_deref().unwrap_or_else(|| self.anonymous());
        let (cost, value) = (item.cost, item.value);
        match self {
            Scenario::Shipping     => format!("{name} (weight {cost}, declared value {value})"),
            Scenario::Courses      => format!("{name} ({cost} credits, academic value {value})"),
            Scenario::SupplyChain  => format!("{name} (cost {cost}, benefit {value})"),
            Scenario::ShoppingCart => format!("{name} (price {cost}, value {value})"),
        }
    }

    fn success(&self, problem: &Problem, solution: &Solution, listing: &str) -> String {
        let capacity = problem.capacity();
        let optimum  = solution.optimal_value;
        match self {
            Scenario::Shipping => format!(
                "After evaluating the available packages and the vehicle's capacity of {capacity}, \
                 the most valuable loading plan gives a total declared value of {optimum}. \
                 This is achieved by selecting {listing}."),
            Scenario::Courses => format!(
                "To maximize your learning this semester within a limit of {capacity} credits, \
                 you should enroll in {listing}. \
                 This plan gives you the maximum achievable academic value of {optimum}."),
            Scenario::SupplyChain => format!(
                "To optimize your supply chain within a budget of {capacity}, \
                 you should source {listing}. \
                 This selection yields the maximum achievable production output of {optimum}."),
            Scenario::ShoppingCart => format!(
                "To optimize your shopping within a budget of {capacity}, \
                 you should buy {listing}. \
                 This selection gives you the maximum achievable value of {optimum} \
                 while spending a total of {}.", solution.total_cost(problem)),
        }
    }

    fn failure(&self, problem: &Problem) -> String {
        let capacity = problem.capacity();
        match self {
            Scenario::Shipping => format!(
                "Given the vehicle's capacity of {capacity}, no combination of packages \
                 can provide a positive declared value."),
            Scenario::Courses => format!(
                "Given your credit limit of {capacity}, no combination of courses \
                 provides additional academic value."),
            Scenario::SupplyChain => format!(
                "Given the budget of {capacity}, no combination of suppliers or raw materials \
                 can improve production output."),
            Scenario::ShoppingCart => format!(
                "Given the budget of {capacity}, no combination of items \
                 can provide positive value."),
        }
    }
}

// ----------------------------------------------------------------------------
// --- REPORT -----------------------------------------------------------------
// ----------------------------------------------------------------------------
/// A human readable account of a solution, phrased by some narrative.
///
/// # Example
/// ```
/// # use optipack::*;
/// let problem  = RawInput::new("60 100 120", "10 20 30", "50")
///     .with_labels("Laptop, Phone, Headphones")
///     .parse(&InputConfig::default())
///     .unwrap();
/// let solution = DpSolver.solve(&problem);
/// let report   = Report::new(&Scenario::ShoppingCart, &problem, &solution).to_string();
///
/// assert!(report.contains("Phone (price 20, value 100), and Headphones (price 30, value 120)"));
/// assert!(report.contains("maximum achievable value of 220"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Report<'a, N: Narrative> {
    narrative: &'a N,
    problem  : &'a Problem,
    solution : &'a Solution,
}
impl <'a, N: Narrative> Report<'a, N> {
    /// Creates a new report
    pub fn new(narrative: &'a N, problem: &'a Problem, solution: &'a Solution) -> Self {
        Report { narrative, problem, solution }
    }
}
impl <N: Narrative> Display for Report<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.solution.is_empty() {
            return f.write_str(&self.narrative.failure(self.problem));
        }
        let parts = self.solution.items(self.problem)
            .map(|item| self.narrative.item(item))
            .collect::<Vec<_>>();
        let listing = join_listing(&parts);
        f.write_str(&self.narrative.success(self.problem, self.solution, &listing))
    }
}

/// Joins the parts of an enumeration the way one would write it in English:
/// "a", "a, and b", "a, b, and c". The serial comma is kept even for two
/// parts.
pub fn join_listing<S: AsRef<str>>(parts: &[S]) -> String {
    match parts {
        []       => String::new(),
        [a]      => a.as_ref().to_string(),
        [init @ .., last] => {
            let init = init.iter().map(|s| s.as_ref()).collect::<Vec<_>>().join(", ");
            format!("{init}, and {}", last.as_ref())
        }
    }
}

#[cfg(test)]
mod test_report {
    use crate::{DpSolver, InputConfig, Item, Narrative, Problem, RawInput, Report, Scenario, Solution, Solver, join_listing};

    fn problem(labels: Option<&str>) -> Problem {
        let mut raw = RawInput::new("60 100 120", "10 20 30", "50");
        if let Some(labels) = labels {
            raw = raw.with_labels(labels);
        }
        raw.parse(&InputConfig::default()).unwrap()
    }

    #[test]
    fn listing_of_one_two_and_three_parts() {
        assert_eq!("",               join_listing::<&str>(&[]));
        assert_eq!("a",              join_listing(&["a"]));
        assert_eq!("a, and b",       join_listing(&["a", "b"]));
        assert_eq!("a, b, and c",    join_listing(&["a", "b", "c"]));
        assert_eq!("a, b, c, and d", join_listing(&["a", "b", "c", "d"]));
    }
    #[test]
    fn scenarios_are_parsed_from_their_names() {
        for scenario in Scenario::ALL {
            assert_eq!(scenario, scenario.name().parse::<Scenario>().unwrap());
        }
        assert_eq!(Scenario::SupplyChain, "Supply_Chain".parse::<Scenario>().unwrap());
        assert_eq!(Scenario::ShoppingCart, "cart".parse::<Scenario>().unwrap());
        assert!("groceries".parse::<Scenario>().is_err());
    }
    #[test]
    fn anonymous_items_are_named_after_the_scenario() {
        let item = Item::new(60, 10);
        assert_eq!("a package (weight 10, declared value 60)", Scenario::Shipping.item(&item));
        assert_eq!("a course (10 credits, academic value 60)", Scenario::Courses.item(&item));
        assert_eq!("a material (cost 10, benefit 60)",         Scenario::SupplyChain.item(&item));
        assert_eq!("an item (price 10, value 60)",             Scenario::ShoppingCart.item(&item));
    }
    #[test]
    fn labelled_items_use_their_label() {
        let item = Item::labelled("Algorithms", 8, 3);
        assert_eq!("Algorithms (3 credits, academic value 8)", Scenario::Courses.item(&item));
    }
    #[test]
    fn shipping_report_mentions_capacity_optimum_and_packages() {
        let problem  = problem(None);
        let solution = DpSolver.solve(&problem);
        let report   = Report::new(&Scenario::Shipping, &problem, &solution).to_string();
        assert_eq!(
            "After evaluating the available packages and the vehicle's capacity of 50, \
             the most valuable loading plan gives a total declared value of 220. \
             This is achieved by selecting a package (weight 20, declared value 100), \
             and a package (weight 30, declared value 120).",
            report);
    }
    #[test]
    fn courses_report_lists_all_courses() {
        let problem  = RawInput::new("5 4 3 9", "1 1 1 10", "3").with_labels("A, B, C, D")
            .parse(&InputConfig::default()).unwrap();
        let solution = DpSolver.solve(&problem);
        let report   = Report::new(&Scenario::Courses, &problem, &solution).to_string();
        assert_eq!(
            "To maximize your learning this semester within a limit of 3 credits, \
             you should enroll in A (1 credits, academic value 5), B (1 credits, academic value 4), \
             and C (1 credits, academic value 3). \
             This plan gives you the maximum achievable academic value of 12.",
            report);
    }
    #[test]
    fn shopping_report_mentions_the_total_spent() {
        let problem  = problem(Some("Laptop, Phone, Headphones"));
        let solution = DpSolver.solve(&problem);
        let report   = Report::new(&Scenario::ShoppingCart, &problem, &solution).to_string();
        assert!(report.ends_with("while spending a total of 50."));
    }
    #[test]
    fn empty_selections_get_the_failure_message() {
        let problem  = RawInput::new("10", "20", "10").parse(&InputConfig::default()).unwrap();
        let solution = Solution::default();
        assert_eq!(
            "Given the budget of 10, no combination of suppliers or raw materials can improve production output.",
            Report::new(&Scenario::SupplyChain, &problem, &solution).to_string());
        assert_eq!(
            "Given the vehicle's capacity of 10, no combination of packages can provide a positive declared value.",
            Report::new(&Scenario::Shipping, &problem, &solution).to_string());
    }
}
