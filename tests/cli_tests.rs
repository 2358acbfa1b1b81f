//! Runs the codongen binary end to end and checks its output and exit codes
//! (0 = derived, 1 = derivation failed, 2 = bad arguments, 3 = grammar or
//! config unreadable).

use std::path::PathBuf;
use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_codongen"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to execute codongen")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("codongen-cli-{}-{}", std::process::id(), name));
    std::fs::write(&path, contents).unwrap();
    path
}

const A_OR_B: &str = r#"{
    "rules": [
        {"origin": "S", "expansion": [{"Terminal": "A"}]},
        {"origin": "S", "expansion": [{"Terminal": "B"}, {"NonTerminal": "S"}]}
    ],
    "terminals": [{"name": "A", "value": "a"}, {"name": "B", "value": "b"}]
}"#;

#[test]
fn derives_from_grammar_file() {
    let grammar = temp_file("a_or_b.json", A_OR_B);
    let output = run(&["--grammar", grammar.to_str().unwrap(), "1", "1", "0"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "bba\n");
}

#[test]
fn built_in_trades_grammar() {
    let output = run(&["--seed", "5", "0", "0", "1", "0", "0", "0", "0", "0"]);
    assert_eq!(output.status.code(), Some(0));
    let text = stdout(&output);
    assert!(text.starts_with("Trade(Bob,Alice,Xvalue("), "{}", text);
    assert!(text.trim_end().ends_with("))"), "{}", text);
}

#[test]
fn seeded_runs_repeat() {
    let args = ["--seed", "11", "-n", "3", "0", "0", "0", "0", "0", "0", "0", "0"];
    let first = stdout(&run(&args));
    let second = stdout(&run(&args));
    assert_eq!(first.lines().count(), 3);
    assert_eq!(first, second);
}

#[test]
fn start_override() {
    let output = run(&["--start", "person", "2"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "Charles\n");
}

#[test]
fn too_few_codons() {
    let output = run(&["0", "0", "0"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Not enough codons"));
}

#[test]
fn negative_codon() {
    let output = run(&["0", "-3"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("negative"));
}

#[test]
fn step_limit_from_flag_and_config() {
    let codons = ["0", "0", "0", "0", "0", "0", "0", "0"];

    let output = run(&[&["--max-steps", "5"][..], &codons[..]].concat());
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("within 5 steps"));

    let config = temp_file("config.json", r#"{"max_steps": 7}"#);
    let output = run(&[&["--config", config.to_str().unwrap()][..], &codons[..]].concat());
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("within 7 steps"));
}

#[test]
fn missing_grammar_file() {
    let output = run(&["--grammar", "no/such/grammar.json", "0"]);
    assert_eq!(output.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&output.stderr).contains("no/such/grammar.json"));
}

#[test]
fn malformed_config_file() {
    let config = temp_file("malformed_config.json", "{\n  \"max_steps\": \"many\"\n}");
    let output = run(&["--config", config.to_str().unwrap(), "0"]);
    assert_eq!(output.status.code(), Some(3));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains(":2]"));
}

#[test]
fn bad_arguments_are_not_load_failures() {
    let unknown_flag = run(&["--bogus", "0"]);
    assert_eq!(unknown_flag.status.code(), Some(2));

    let oversized_codon = run(&["99999999999999999999"]);
    assert_eq!(oversized_codon.status.code(), Some(2));
}
