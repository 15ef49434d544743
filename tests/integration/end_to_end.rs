// tests/integration/end_to_end.rs
use assert_cmd::Command;
use serde_json::Value;

fn run_json(args: &[&str]) -> Value {
    let output = Command::new(env!("CARGO_BIN_EXE_customer_join"))
        .args(args)
        .args(["--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    serde_json::from_slice(&output).expect("valid JSON")
}

#[test]
fn all_strategies_report_same_match_counts() {
    let json = run_json(&["--all", "--size", "500", "--sparse-every", "4", "--iterations", "2"]);

    let strategies = json["strategies"].as_array().expect("strategies array");
    let names: Vec<_> = strategies
        .iter()
        .map(|s| s["strategy"].as_str().unwrap_or_default())
        .collect();
    assert_eq!(names, ["linear-scan", "hash-join", "query-join", "pre-indexed"]);

    for s in strategies {
        assert_eq!(s["size"], 500);
        assert_eq!(s["output_len"], 500);
        assert_eq!(s["matched"], 375);
        assert_eq!(s["unmatched"], 125);
        assert_eq!(s["timing"]["samples_ms"].as_array().map(Vec::len), Some(2));
    }
    assert_eq!(json["iterations"], 2);
}

#[test]
fn keep_first_splits_on_single_match_semantics() {
    let json = run_json(&["--all", "--size", "100", "--duplicate-every", "10"]);
    let strategies = json["strategies"].as_array().expect("strategies array");

    // linear-scan reports ambiguous keys as unmatched, index strategies keep the first row.
    assert_eq!(strategies[0]["unmatched"], 10);
    for s in &strategies[1..] {
        assert_eq!(s["unmatched"], 0);
    }
}

#[test]
fn csv_output_has_one_row_per_strategy() {
    let output = Command::new(env!("CARGO_BIN_EXE_customer_join"))
        .args(["--all", "--size", "50", "--format", "csv"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(output).expect("utf-8 output");

    assert_eq!(text.lines().count(), 5);
    assert!(text.starts_with("strategy,size,iterations"));
}
