/// Integration tests for the ordset shell binary.
/// Tests cover: basic ops, buckets, cursor walks, splits, configuration errors
use std::io::Write;
use std::process::{Command, Output, Stdio};

/// Helper to run the shell with `envs` and a command script, capturing output
fn run_shell_with(envs: &[(&str, &str)], commands: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_ordset"))
        .env_remove("ORDSET_CAPACITY")
        .env_remove("ORDSET_BUCKET")
        .env("ORDSET_LOG", "warn")
        .envs(envs.iter().copied())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn shell");

    {
        // write errors are ignored: a shell that failed at startup has
        // already closed its stdin
        let stdin = child.stdin.as_mut().expect("Failed to open stdin");
        let _ = stdin.write_all(commands.as_bytes());
        let _ = stdin.write_all(b"EXIT\n");
    }

    child.wait_with_output().expect("Failed to read output")
}

fn run_shell(commands: &str) -> String {
    let output = run_shell_with(&[], commands);
    assert!(output.status.success());
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Response lines only: banner and prompts stripped
fn responses(output: &str) -> Vec<String> {
    output
        .lines()
        .skip(3)
        .map(|l| l.trim_start_matches("> ").to_string())
        .filter(|l| !l.is_empty())
        .collect()
}

#[test]
fn test_banner() {
    let output = run_shell("");
    assert!(output.contains("ordset started"));
    assert!(output.contains("capacity=1024"));
    assert!(output.contains("bye"));
}

#[test]
fn test_put_has_del() {
    let output = run_shell("PUT k\nHAS k\nDEL k\nHAS k\n");
    assert_eq!(responses(&output), vec!["OK", "true", "OK", "false", "bye"]);
}

#[test]
fn test_keys_descending() {
    let output = run_shell("PUT a\nPUT c\nPUT b\nKEYS\n");
    assert_eq!(
        responses(&output),
        vec!["OK", "OK", "OK", "c", "b", "a", "(3 keys)", "bye"]
    );
}

#[test]
fn test_bucket_isolation() {
    let commands = "USE user\nPUT rob\nUSE item\nPUT 003\nKEYS\nUSE user\nKEYS\n";
    let output = run_shell(commands);
    assert_eq!(
        responses(&output),
        vec![
            "OK", "OK", "OK", "OK", "003", "(1 keys)", "OK", "rob", "(1 keys)", "bye"
        ]
    );
}

#[test]
fn test_cursor_walk() {
    let mut commands = String::from("USE user\n");
    for name in ["rob", "bob", "pike", "alice", "anna"] {
        commands.push_str(&format!("PUT {}\n", name));
    }
    commands.push_str("USE item\nPUT 003\nUSE user\n");
    commands.push_str("LAST\nPREV\nPREV\nPREV\nPREV\nPREV\n");

    let output = run_shell(&commands);
    let lines = responses(&output);
    let walk = &lines[lines.len() - 7..lines.len() - 1];
    assert_eq!(walk, &["rob", "pike", "bob", "anna", "alice", "(nil)"]);
}

#[test]
fn test_many_keys_split_pages() {
    let mut commands = String::new();
    for i in 0..1200 {
        commands.push_str(&format!("PUT {:04}\n", i));
    }
    commands.push_str("LAST\nKEYS\n");

    let output = run_shell(&commands);
    assert!(output.contains("(1200 keys)"));
    let lines = responses(&output);
    let last = lines.iter().position(|l| l == "1199").unwrap();
    assert_eq!(last, 1200);
}

#[test]
fn test_initial_bucket_from_env() {
    let output = run_shell_with(&[("ORDSET_BUCKET", "user")], "PUT rob\nUSE\nKEYS\n");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("bucket=\"user\""));
    assert!(stdout.contains("userrob"));
}

#[test]
fn test_capacity_from_env() {
    let output = run_shell_with(&[("ORDSET_CAPACITY", "5000")], "");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("capacity=8192"));
}

#[test]
fn test_invalid_capacity_fails() {
    let output = run_shell_with(&[("ORDSET_CAPACITY", "lots")], "");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ORDSET_CAPACITY"));
}
