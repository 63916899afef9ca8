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

//! This module provides the configuration of the input pipeline, that is the
//! set of knobs used when turning raw user input into a `Problem`.

use derive_builder::Builder;

use crate::Error;

/// The default maximum number of cells the dp table may count. With eight
/// bytes per cell, this is a bit less than 400MB.
pub const DEFAULT_MAX_CELLS: usize = 50_000_000;

/// This is how you configure the way a `RawInput` gets parsed and validated.
///
/// # Example
/// ```
/// # use optipack::*;
/// let config = InputConfigBuilder::default()
///     .max_cells(1_000)
///     .build()
///     .unwrap();
///
/// assert_eq!(1_000, config.max_cells);
/// assert_eq!(',',   config.label_separator);
/// ```
#[derive(Debug, Clone, Builder)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct InputConfig {
    /// The largest table (counted in cells, that is (n+1) * (capacity+1))
    /// one accepts to allocate. Larger requests are rejected before the
    /// solver is even invoked.
    #[builder(default = "DEFAULT_MAX_CELLS")]
    pub max_cells: usize,
    /// The character separating the labels of the various items
    #[builder(default = "','")]
    pub label_separator: char,
}
impl Default for InputConfig {
    fn default() -> Self {
        InputConfig { max_cells: DEFAULT_MAX_CELLS, label_separator: ',' }
    }
}
impl InputConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        match self.max_cells {
            Some(0) => Err("max_cells must be positive".to_string()),
            _       => Ok(()),
        }
    }
}
impl From<InputConfigBuilderError> for Error {
    fn from(e: InputConfigBuilderError) -> Self {
        Error::Config(e.to_string())
    }
}

#[cfg(test)]
mod test_config {
    use crate::{Error, InputConfig, InputConfigBuilder, DEFAULT_MAX_CELLS};

    #[test]
    fn builder_defaults_match_default() {
        let built = InputConfigBuilder::default().build().unwrap();
        let deflt = InputConfig::default();
        assert_eq!(deflt.max_cells, built.max_cells);
        assert_eq!(deflt.label_separator, built.label_separator);
        assert_eq!(DEFAULT_MAX_CELLS, built.max_cells);
    }
    #[test]
    fn builder_overrides_the_defaults() {
        let config = InputConfigBuilder::default()
            .max_cells(10)
            .label_separator(';')
            .build()
            .unwrap();
        assert_eq!(10,  config.max_cells);
        assert_eq!(';', config.label_separator);
    }
    #[test]
    fn a_zero_cell_budget_is_rejected() {
        let err = InputConfigBuilder::default().max_cells(0).build().unwrap_err();
        assert!(matches!(Error::from(err), Error::Config(_)));
    }
}
