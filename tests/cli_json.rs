#![cfg(unix)]

mod common;

use serde_json::Value;

use common::*;

fn events(stdout: &str) -> Vec<Value> {
    stdout
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}

#[test]
fn test_verify_json_emits_ndjson_event_stream() {
    let env = TestEnv::valid_project();

    let result = env.run_verify(&["--json"]);

    assert!(result.success, "{}", result.combined_output());
    let events = events(&result.stdout);

    assert_eq!(events[0]["event"], "start");
    assert_eq!(events[0]["command"], "verify");

    let checks: Vec<&Value> = events.iter().filter(|e| e["event"] == "check").collect();
    assert_eq!(checks.len(), 10);
    assert!(checks.iter().all(|c| c["status"] == "pass"));

    let last = events.last().unwrap();
    assert_eq!(last["event"], "complete");
    assert_eq!(last["errors"], 0);
    assert_eq!(last["success"], true);
}

#[test]
fn test_verify_json_failure_still_completes() {
    let env = TestEnv::valid_project();
    env.remove("ansible/main.yml");

    let result = env.run_verify(&["--json"]);

    assert_eq!(result.exit_code, 1);
    let events = events(&result.stdout);
    let last = events.last().unwrap();
    assert_eq!(last["event"], "complete");
    assert_eq!(last["errors"], 1);
    assert_eq!(last["success"], false);
}

#[test]
fn test_setup_json_reports_steps_and_config() {
    let env = TestEnv::valid_project();

    let result = env.run_setup(&["--json"]);

    assert!(result.success, "{}", result.combined_output());
    let events = events(&result.stdout);

    assert_eq!(events[0]["event"], "start");
    assert_eq!(events[0]["command"], "setup");

    let steps: Vec<&str> = events
        .iter()
        .filter(|e| e["event"] == "step")
        .map(|e| e["step"].as_str().unwrap())
        .collect();
    assert_eq!(
        steps,
        [
            "check_installation",
            "create_config",
            "test_inventory",
            "test_connectivity"
        ]
    );

    let last = events.last().unwrap();
    assert_eq!(last["event"], "complete");
    assert_eq!(last["config"]["status"], "created");
    assert!(last["config"]["hash"]
        .as_str()
        .unwrap()
        .starts_with("sha256:"));
}

#[test]
fn test_setup_json_write_failure_still_completes() {
    let env = TestEnv::new();
    // A plain file where the ansible/ directory should be makes the write fail.
    env.write("ansible", "not a directory");

    let result = env.run_setup(&["--json"]);

    assert!(!result.success);
    let events = events(&result.stdout);
    let last = events.last().unwrap();
    assert_eq!(last["event"], "complete");
    assert_eq!(last["command"], "setup");
    assert_eq!(last["success"], false);
    assert!(last["error"].is_string());
}
