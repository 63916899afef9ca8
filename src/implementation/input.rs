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

//! This module contains everything that is necessary to turn the raw text
//! typed in by a user into a `Problem`. The pipeline goes in three steps:
//! each field is parsed, then the resulting sequences are validated against
//! one another (and against the configured size limit), and only then a
//! `Problem` is built.

use tracing::debug;

use crate::{Error, InputConfig, Problem};

/// The four text fields collected by a front-end
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawInput {
    /// The names of the items, separated by commas (by default)
    pub labels  : Option<String>,
    /// The values of the items, separated by whitespaces
    pub values  : String,
    /// The costs of the items, separated by whitespaces
    pub costs   : String,
    /// The capacity. Only the first whitespace delimited token is considered
    pub capacity: String,
}
impl RawInput {
    /// Creates a raw input without labels
    pub fn new<V, C, K>(values: V, costs: C, capacity: K) -> Self
    where V: Into<String>, C: Into<String>, K: Into<String>
    {
        RawInput { labels: None, values: values.into(), costs: costs.into(), capacity: capacity.into() }
    }
    /// Attaches labels to this raw input
    pub fn with_labels<L: Into<String>>(mut self, labels: L) -> Self {
        self.labels = Some(labels.into());
        self
    }
    /// Parses and validates this input according to the given configuration.
    ///
    /// # Example
    /// ```
    /// # use optipack::*;
    /// let problem = RawInput::new("60 100 120", "10 20 30", "50")
    ///     .with_labels("Laptop, Phone, Headphones")
    ///     .parse(&InputConfig::default())
    ///     .unwrap();
    ///
    /// assert_eq!(3, problem.len());
    /// assert_eq!(Some("Phone"), problem.item(1).label.as_deref());
    /// ```
    pub fn parse(&self, config: &InputConfig) -> Result<Problem, Error> {
        let result = self.try_parse(config);
        if let Err(e) = &result {
            debug!(error = %e, "input rejected");
        }
        result
    }

    fn try_parse(&self, config: &InputConfig) -> Result<Problem, Error> {
        let labels   = self.labels.as_deref().and_then(|l| parse_labels(l, config.label_separator));
        let values   = parse_numbers("values", &self.values)?;
        let costs    = parse_numbers("costs", &self.costs)?;
        let capacity = parse_capacity(&self.capacity)?;

        let problem  = Problem::from_parts(labels, values, costs, capacity)?;
        check_size(&problem, config.max_cells)?;
        Ok(problem)
    }
}

/// Splits the labels on the given separator. Blank labels are dropped, and
/// `None` is returned when no label remains at all.
pub fn parse_labels(text: &str, separator: char) -> Option<Vec<String>> {
    let labels = text.split(separator)
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect::<Vec<_>>();

    if labels.is_empty() { None } else { Some(labels) }
}

/// Parses a whitespace separated list of non negative integers. The `field`
/// is only used to tell the user which field is wrong.
pub fn parse_numbers(field: &'static str, text: &str) -> Result<Vec<usize>, Error> {
    text.split_whitespace()
        .map(|token| parse_number(field, token))
        .collect()
}

/// Parses the capacity: the first whitespace delimited token of the text.
pub fn parse_capacity(text: &str) -> Result<usize, Error> {
    let token = text.split_whitespace().next().ok_or(Error::MissingCapacity)?;
    parse_number("capacity", token)
}

fn parse_number(field: &'static str, token: &str) -> Result<usize, Error> {
    token.parse::<usize>().map_err(|source| {
        match token.parse::<i64>() {
            Ok(value) if value < 0 => Error::Negative { field, value },
            _ => Error::ParseInt { field, token: token.to_string(), source },
        }
    })
}

/// Rejects the problems whose dp table would exceed `max_cells` cells.
pub fn check_size(problem: &Problem, max_cells: usize) -> Result<(), Error> {
    match problem.table_cells() {
        Some(cells) if cells <= max_cells => Ok(()),
        cells => Err(Error::TooLarge { cells: cells.unwrap_or(usize::MAX), limit: max_cells }),
    }
}

#[cfg(test)]
mod test_input {
    use crate::{Error, InputConfig, InputConfigBuilder, Item, RawInput, parse_capacity, parse_labels, parse_numbers};

    fn parse(input: RawInput) -> Result<crate::Problem, Error> {
        input.parse(&InputConfig::default())
    }

    #[test]
    fn a_well_formed_input_becomes_a_problem() {
        let problem = parse(RawInput::new("60 100 120", "10 20 30", "50")).unwrap();
        assert_eq!(&[Item::new(60, 10), Item::new(100, 20), Item::new(120, 30)], problem.items());
        assert_eq!(50, problem.capacity());
    }
    #[test]
    fn labels_are_trimmed_and_attached_to_the_items() {
        let problem = parse(RawInput::new("1 2", "3 4", "5").with_labels(" Laptop ,Phone")).unwrap();
        assert_eq!(&[Item::labelled("Laptop", 1, 3), Item::labelled("Phone", 2, 4)], problem.items());
    }
    #[test]
    fn blank_labels_mean_no_labels() {
        let problem = parse(RawInput::new("1 2", "3 4", "5").with_labels(" , ")).unwrap();
        assert!(problem.items().iter().all(|i| i.label.is_none()));
    }
    #[test]
    fn extra_whitespaces_are_ignored() {
        let problem = parse(RawInput::new("  1\t2 ", "3   4", "  5  ")).unwrap();
        assert_eq!(2, problem.len());
        assert_eq!(5, problem.capacity());
    }
    #[test]
    fn only_the_first_token_of_the_capacity_matters() {
        assert_eq!(50, parse_capacity("50 kg").unwrap());
    }
    #[test]
    fn an_empty_input_is_an_empty_problem() {
        let problem = parse(RawInput::new("", "", "100")).unwrap();
        assert!(problem.is_empty());
    }
    #[test]
    fn garbage_values_are_rejected() {
        let err = parse(RawInput::new("60 abc", "10 20", "50")).unwrap_err();
        assert!(matches!(err, Error::ParseInt { field: "values", ref token, .. } if token == "abc"));
    }
    #[test]
    fn decimal_costs_are_rejected() {
        let err = parse_numbers("costs", "1.5 2").unwrap_err();
        assert!(matches!(err, Error::ParseInt { field: "costs", .. }));
    }
    #[test]
    fn negative_numbers_are_rejected() {
        let err = parse(RawInput::new("60 -1", "10 20", "50")).unwrap_err();
        assert!(matches!(err, Error::Negative { field: "values", value: -1 }));
        let err = parse(RawInput::new("60", "10", "-50")).unwrap_err();
        assert!(matches!(err, Error::Negative { field: "capacity", value: -50 }));
    }
    #[test]
    fn a_missing_capacity_is_rejected() {
        let err = parse(RawInput::new("60", "10", "   ")).unwrap_err();
        assert!(matches!(err, Error::MissingCapacity));
    }
    #[test]
    fn a_non_integer_capacity_is_rejected() {
        let err = parse(RawInput::new("60", "10", "fifty")).unwrap_err();
        assert!(matches!(err, Error::ParseInt { field: "capacity", .. }));
    }
    #[test]
    fn mismatching_lengths_are_rejected() {
        let err = parse(RawInput::new("60 100", "10", "50")).unwrap_err();
        assert!(matches!(err, Error::LengthMismatch { values: 2, costs: 1 }));
    }
    #[test]
    fn mismatching_labels_are_rejected() {
        let err = parse(RawInput::new("60 100", "10 20", "50").with_labels("a, b, c")).unwrap_err();
        assert!(matches!(err, Error::LabelMismatch { labels: 3, items: 2 }));
    }
    #[test]
    fn oversized_instances_are_rejected() {
        let config = InputConfigBuilder::default().max_cells(100).build().unwrap();
        // (2 + 1) * (33 + 1) = 102 cells
        let err = RawInput::new("1 2", "3 4", "33").parse(&config).unwrap_err();
        assert!(matches!(err, Error::TooLarge { cells: 102, limit: 100 }));
        // (2 + 1) * (32 + 1) = 99 cells
        assert!(RawInput::new("1 2", "3 4", "32").parse(&config).is_ok());
    }
    #[test]
    fn a_custom_label_separator_is_honored() {
        let config = InputConfigBuilder::default().label_separator(';').build().unwrap();
        let labels = parse_labels("a, b; c", config.label_separator).unwrap();
        assert_eq!(vec!["a, b".to_string(), "c".to_string()], labels);
    }
}
