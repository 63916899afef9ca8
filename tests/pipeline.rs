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

//! This module is meant to test the complete pipeline, from the raw text typed
//! in by a user until the report that is given back.

use optipack::*;

fn run(values: &str, costs: &str, capacity: &str) -> Solution {
    let problem = RawInput::new(values, costs, capacity)
        .parse(&InputConfig::default())
        .unwrap();
    DpSolver.solve(&problem)
}

#[test]
fn textbook_instance() {
    assert_eq!(Solution { optimal_value: 220, chosen: vec![1, 2] }, run("60 100 120", "10 20 30", "50"));
}
#[test]
fn single_oversized_item() {
    assert_eq!(Solution { optimal_value: 0, chosen: vec![] }, run("10", "20", "10"));
}
#[test]
fn two_small_items_beat_a_large_one() {
    assert_eq!(Solution { optimal_value: 9, chosen: vec![0, 1] }, run("5 4 3", "2 3 4", "5"));
}
#[test]
fn empty_instance() {
    assert_eq!(Solution { optimal_value: 0, chosen: vec![] }, run("", "", "100"));
}
#[test]
fn zero_capacity() {
    assert_eq!(Solution { optimal_value: 0, chosen: vec![] }, run("7 7 7", "1 1 1", "0"));
}

#[test]
fn every_scenario_reports_the_same_selection() {
    let problem  = RawInput::new("60 100 120", "10 20 30", "50")
        .with_labels("north, south, east")
        .parse(&InputConfig::default())
        .unwrap();
    let solution = DpSolver.solve(&problem);

    for scenario in Scenario::ALL {
        let report = Report::new(&scenario, &problem, &solution).to_string();
        assert!(report.contains("south"), "{scenario}: {report}");
        assert!(report.contains("east"),  "{scenario}: {report}");
        assert!(!report.contains("north"), "{scenario}: {report}");
        assert!(report.contains("220"),   "{scenario}: {report}");
    }
}

#[test]
fn nothing_fits_gives_the_failure_message() {
    let problem  = RawInput::new("10", "20", "10").parse(&InputConfig::default()).unwrap();
    let solution = DpSolver.solve(&problem);

    for scenario in Scenario::ALL {
        let report = Report::new(&scenario, &problem, &solution).to_string();
        assert!(report.starts_with("Given "), "{scenario}: {report}");
    }
}

#[test]
fn invalid_inputs_are_reported_before_solving() {
    let config = InputConfig::default();
    let errors = [
        RawInput::new("1 x", "1 1", "5").parse(&config).unwrap_err(),
        RawInput::new("1 2", "1", "5").parse(&config).unwrap_err(),
        RawInput::new("1", "1", "").parse(&config).unwrap_err(),
        RawInput::new("1", "1", "-3").parse(&config).unwrap_err(),
    ];
    let messages = errors.iter().map(|e| e.to_string()).collect::<Vec<_>>();

    assert!(messages[0].contains("'x'"));
    assert_eq!("2 values were given but 1 costs", messages[1]);
    assert_eq!("the capacity is missing", messages[2]);
    assert_eq!("the capacity must not be negative (got -3)", messages[3]);
}

#[test]
fn solutions_serialize_to_json() {
    let solution = run("60 100 120", "10 20 30", "50");
    let json     = serde_json::to_value(&solution).unwrap();
    assert_eq!(serde_json::json!({"optimal_value": 220, "chosen": [1, 2]}), json);
}
