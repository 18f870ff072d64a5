use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn jsonlang() -> Command {
    Command::cargo_bin("jsonlang").expect("binary exists")
}

#[test]
fn runs_hello_demo() {
    let mut cmd = jsonlang();
    cmd.current_dir("demos").arg("run").arg("hello.json");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Hello from jsonlang!"))
        .stdout(predicate::str::contains("result: 5"));
}

#[test]
fn runs_module_demo_from_its_directory() {
    let mut cmd = jsonlang();
    cmd.current_dir("demos").arg("run").arg("modules.json");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("greetings from a module"))
        .stdout(predicate::str::contains("result: LOADED ONCE"));
}

#[test]
fn test_command_coerces_arguments() {
    let mut cmd = jsonlang();
    cmd.args(["test", "add", "2", "3"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("function: add"))
        .stdout(predicate::str::contains("args: [2, 3]"))
        .stdout(predicate::str::contains("result: 5"));

    let mut cmd = jsonlang();
    cmd.args(["test", "concat", "a", "1"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("args: [\"a\", 1]"))
        .stdout(predicate::str::contains("result: a1"));
}

#[test]
fn list_shows_sorted_operations() {
    let mut cmd = jsonlang();
    cmd.arg("list");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("rust backend v"))
        .stdout(predicate::str::is_match(r"(?s)- abs\n.*- add\n.*- to_upper").expect("valid regex"));
}

#[test]
fn descriptor_limits_registered_operations() {
    let dir = tempdir().expect("create temp dir");
    let descriptor = dir.path().join("ops.json");
    fs::write(
        &descriptor,
        r#"{"functions": {"plus": {"implementation": "math.Add"}}}"#,
    )
    .expect("write descriptor");

    let mut cmd = jsonlang();
    cmd.arg("--stdlib").arg(&descriptor).arg("list");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("- plus"))
        .stdout(predicate::str::contains("- add").not());
}

#[test]
fn missing_main_exits_with_failure() {
    let dir = tempdir().expect("create temp dir");
    let program = dir.path().join("no_main.json");
    fs::write(&program, r#"{"functions": {"helper": {"actions": []}}}"#).expect("write program");

    let mut cmd = jsonlang();
    cmd.arg("run").arg(&program);
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error:"))
        .stderr(predicate::str::contains("main"));
}

#[test]
fn missing_program_file_exits_with_failure() {
    let mut cmd = jsonlang();
    cmd.args(["run", "does/not/exist.json"]);
    cmd.assert().failure().code(1);
}

#[test]
fn depth_limit_is_configurable_from_environment() {
    let dir = tempdir().expect("create temp dir");
    let program = dir.path().join("loop.json");
    fs::write(
        &program,
        r#"{"functions": {"main": {"actions": [{"type": "function_call", "function": "main", "args": []}]}}}"#,
    )
    .expect("write program");

    let mut cmd = jsonlang();
    cmd.env("JSONLANG_MAX_CALL_DEPTH", "8").arg("run").arg(&program);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("result: error: call depth limit"));
}

fn write_exit_program(dir: &std::path::Path, exit_args: &str) -> std::path::PathBuf {
    let program = dir.join("exit.json");
    let text = format!(
        r#"{{"functions": {{"main": {{"actions": [
            {{"type": "function_call", "function": "println", "args": [{{"type": "String", "value": "before exit"}}]}},
            {{"type": "function_call", "function": "exit", "args": {exit_args}}},
            {{"type": "function_call", "function": "println", "args": [{{"type": "String", "value": "after exit"}}]}}
        ]}}}}}}"#
    );
    fs::write(&program, text).expect("write program");
    program
}

#[test]
fn exit_sets_process_code_after_flushing_output() {
    let dir = tempdir().expect("create temp dir");
    let program = write_exit_program(dir.path(), r#"[{"type": "Number", "value": 3}]"#);

    let mut cmd = jsonlang();
    cmd.arg("run").arg(&program);
    cmd.assert()
        .code(3)
        .stdout(predicate::str::contains("before exit"))
        .stdout(predicate::str::contains("after exit").not())
        .stdout(predicate::str::contains("result:").not());
}

#[test]
fn exit_without_argument_succeeds() {
    let dir = tempdir().expect("create temp dir");
    let program = write_exit_program(dir.path(), "[]");

    let mut cmd = jsonlang();
    cmd.arg("run").arg(&program);
    cmd.assert()
        .code(0)
        .stdout(predicate::str::contains("before exit"))
        .stdout(predicate::str::contains("result:").not());
}
