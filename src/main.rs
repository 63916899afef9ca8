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

//! This is the command line front-end of optipack. It collects the same
//! fields as the interactive pages (labels, values, costs and capacity),
//! solves the instance and tells the user which items to pick.

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{filter::ParseError, EnvFilter};

use optipack::*;

/// This structure uses `clap-derive` annotations and define the arguments that can
/// be passed on to the executable solver.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The values of the items (space separated), e.g. "60 100 120"
    #[arg(short, long)]
    values: String,
    /// The costs of the items (space separated), e.g. "10 20 30"
    #[arg(short, long)]
    costs: String,
    /// The capacity of the sack (budget, credit limit, ...), e.g. "50"
    #[arg(short = 'k', long)]
    capacity: String,
    /// The names of the items (comma separated), e.g. "Laptop, Phone, Headphones"
    #[arg(short, long)]
    labels: Option<String>,
    /// The audience of the report: shipping, courses, supply-chain or shopping-cart
    #[arg(short, long, default_value = "shipping")]
    scenario: Scenario,
    /// Print the outcome as json rather than as a sentence
    #[arg(long)]
    json: bool,
    /// The maximum number of cells of the dp table
    #[arg(long, default_value_t = DEFAULT_MAX_CELLS)]
    max_cells: usize,
    /// The log level (error, warn, info, debug, trace). Defaults to RUST_LOG
    #[arg(long)]
    log_level: Option<String>,
}

/// What gets printed when the `--json` flag is set
#[derive(Debug, Serialize)]
struct JsonOutcome<'a> {
    scenario  : Scenario,
    problem   : &'a Problem,
    solution  : &'a Solution,
    total_cost: usize,
    report    : String,
}

/// The filter of the log subscriber: the given level when there is one, the
/// `RUST_LOG` directives otherwise. A level which cannot be parsed is an error.
fn log_filter(level: Option<&str>) -> Result<EnvFilter, ParseError> {
    match level {
        Some(level) => EnvFilter::try_new(format!("optipack={level}")),
        None        => Ok(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("optipack=warn"))),
    }
}

/// Installs the log subscriber. Logs go to stderr so that they never get
/// mixed with the report.
fn init_tracing(level: Option<&str>) -> Result<(), anyhow::Error> {
    let filter = log_filter(level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

/// This is your executable's entry point. It is the place where all the pieces are put together.
fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();
    init_tracing(args.log_level.as_deref())?;

    let config = InputConfigBuilder::default()
        .max_cells(args.max_cells)
        .build()
        .map_err(Error::from)?;

    let mut raw = RawInput::new(args.values, args.costs, args.capacity);
    if let Some(labels) = args.labels {
        raw = raw.with_labels(labels);
    }
    let problem  = raw.parse(&config).context("the instance cannot be solved")?;
    let solution = DpSolver.solve(&problem);
    info!(scenario = %args.scenario, optimal_value = solution.optimal_value, "instance solved");

    let report = Report::new(&args.scenario, &problem, &solution).to_string();
    if args.json {
        let outcome = JsonOutcome {
            scenario  : args.scenario,
            problem   : &problem,
            solution  : &solution,
            total_cost: solution.total_cost(&problem),
            report,
        };
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        println!("{report}");
    }
    Ok(())
}
