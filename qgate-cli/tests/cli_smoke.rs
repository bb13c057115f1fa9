use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};

fn bin() -> String {
    // Cargo sets this for bin targets in integration tests
    env!("CARGO_BIN_EXE_qgate").to_string()
}

fn qgate(args: &[&str]) -> Output {
    Command::new(bin())
        .args(args)
        .env("NO_COLOR", "1")
        .output()
        .expect("run")
}

fn qgate_with_stdin(args: &[&str], input: &str) -> Output {
    let mut child = Command::new(bin())
        .args(args)
        .env("NO_COLOR", "1")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(input.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("wait")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn cli_run_bell_pair() {
    let output = qgate(&["run", "h:0", "cnot:0,1"]);
    assert!(output.status.success(), "stderr:\n{}", stderr(&output));

    let out = stdout(&output);
    assert!(out.contains("0.7071|00⟩ + 0.7071|11⟩"), "stdout:\n{out}");
    assert!(out.contains("Applied H gate to qubit 0"));
    assert!(out.contains("Applied CNOT gate with control=0, target=1"));
    assert!(out.contains("mixed (entangled)"));
}

#[test]
fn cli_run_json_summary() {
    let output = qgate(&["run", "x:0", "--json"]);
    assert!(output.status.success(), "stderr:\n{}", stderr(&output));

    let summary: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("json");
    assert_eq!(summary["num_qubits"], 2);
    assert_eq!(summary["ket"], "1.0000|01⟩");
    assert_eq!(summary["probabilities"][1], 1.0);
    assert_eq!(summary["bloch"][0]["z"], -1.0);
    assert_eq!(summary["bloch"][1]["z"], 1.0);
    assert_eq!(summary["history"][0], "Applied X gate to qubit 0");
}

#[test]
fn cli_run_rejects_out_of_range_qubit() {
    let output = qgate(&["run", "x:2"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("out of range"), "stderr:\n{}", stderr(&output));
}

#[test]
fn cli_run_rejects_equal_cnot_operands() {
    let output = qgate(&["run", "cnot:0,0"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("control and target must differ"));
}

#[test]
fn cli_rejects_empty_register() {
    let output = qgate(&["-n", "0", "run", "h:0"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Invalid register size"));
}

#[test]
fn cli_seeded_counts_reproducible() {
    let args = ["--seed", "7", "run", "h:0", "h:1", "--shots", "200", "--json"];
    let first = stdout(&qgate(&args));
    let second = stdout(&qgate(&args));
    assert_eq!(first, second);

    let summary: serde_json::Value = serde_json::from_str(&first).expect("json");
    let total: u64 = summary["counts"]
        .as_object()
        .expect("counts")
        .values()
        .map(|v| v.as_u64().unwrap())
        .sum();
    assert_eq!(total, 200);
}

#[test]
fn cli_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("qgate.toml");
    fs::write(&path, "num_qubits = 3\nprecision = 2\n").unwrap();

    let output = qgate(&["--config", path.to_str().unwrap(), "run", "x:2"]);
    assert!(output.status.success(), "stderr:\n{}", stderr(&output));
    assert!(stdout(&output).contains("1.00|100⟩"));
}

#[test]
fn cli_bad_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("qgate.toml");
    fs::write(&path, "num_qubits = \"two\"\n").unwrap();

    let output = qgate(&["--config", path.to_str().unwrap(), "info"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Invalid config"));
}

#[test]
fn cli_session_keeps_log_of_successful_calls() {
    let script = "h 0\nx 5\ncnot 0 0\ncnot 0 1\nhistory\nreset\nhistory\nquit\nx 0\n";
    let output = qgate_with_stdin(&["session"], script);
    assert!(output.status.success(), "stderr:\n{}", stderr(&output));

    let out = stdout(&output);
    let err = stderr(&output);
    assert!(err.contains("out of range"));
    assert!(err.contains("control and target must differ"));

    // Dois registros antes do reset, só "Circuit reset" depois
    assert!(out.contains("1. Applied H gate to qubit 0"));
    assert!(out.contains("2. Applied CNOT gate with control=0, target=1"));
    assert!(!out.contains("3. "));
    assert!(out.contains("1. Circuit reset"));

    // Nada depois de quit é executado
    assert!(!out.contains("Applied X gate"));
}

#[test]
fn cli_session_state_and_bloch() {
    let output = qgate_with_stdin(&["session"], "h 0\nstate\nbloch\n");
    assert!(output.status.success(), "stderr:\n{}", stderr(&output));

    let out = stdout(&output);
    assert!(out.contains("0.7071|00⟩ + 0.7071|01⟩"));
    assert!(out.contains("q0  x=+1.0000  y=+0.0000  z=+0.0000"), "stdout:\n{out}");
}

#[test]
fn cli_demo_runs_three_examples() {
    let output = qgate(&["demo"]);
    assert!(output.status.success(), "stderr:\n{}", stderr(&output));

    let out = stdout(&output);
    assert!(out.contains("Example 1: X Gate"));
    assert!(out.contains("Example 2: Hadamard Gate"));
    assert!(out.contains("Example 3: CNOT Gate"));
    assert!(out.contains("1.0000|11⟩"));
}
