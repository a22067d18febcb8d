//! End-to-end tests for `palettesmith inspect`.

mod fixtures;
use fixtures::*;

#[test]
fn test_inspect_json_white() {
    let output = run_isolated(&["inspect", "--hex", "#fff", "--json"]);
    assert_eq!(output.status.code(), Some(0));

    let result = stdout_json(&output);
    assert_eq!(result["input"], "#fff");
    assert_eq!(result["hex"], "#FFFFFF");
    assert_eq!(result["rgb"], serde_json::json!([255, 255, 255]));
    assert!((result["lab"][0].as_f64().unwrap() - 100.0).abs() < 1e-3);
    assert!((result["lrv"].as_f64().unwrap() - 100.0).abs() < 1e-9);
}

#[test]
fn test_inspect_alpha_stripped() {
    let output = run_isolated(&["inspect", "--hex", "ff112233", "--json"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_json(&output)["hex"], "#112233");
}

#[test]
fn test_inspect_malformed_input_still_succeeds() {
    let output = run_isolated(&["inspect", "--hex", "not-a-color", "--json"]);
    assert_eq!(output.status.code(), Some(0));
    let hex = stdout_json(&output)["hex"].as_str().unwrap().to_string();
    assert_eq!(hex.len(), 7);
}

#[test]
fn test_inspect_human_output() {
    let output = run_isolated(&["inspect", "--hex", "0x808080"]);
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    for label in ["Hex: #808080", "RGB: 128 128 128", "XYZ:", "LAB:", "LCH:", "LRV:"] {
        assert!(stdout.contains(label), "missing '{label}' in {stdout}");
    }
}
