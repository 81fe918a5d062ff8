use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn digitsum(args: &[&str]) -> Output {
  digitsum_with_log(args, None)
}

fn digitsum_with_log(args: &[&str], rust_log: Option<&str>) -> Output {
  let mut cmd = Command::new(env!("CARGO_BIN_EXE_digitsum"));
  cmd.args(args).current_dir(env!("CARGO_MANIFEST_DIR"));
  match rust_log {
    Some(filter) => cmd.env("RUST_LOG", filter),
    None => cmd.env_remove("RUST_LOG"),
  };
  cmd.output().expect("failed to run digitsum")
}

fn write_config(name: &str, contents: &str) -> PathBuf {
  let path = Path::new(env!("CARGO_TARGET_TMPDIR")).join(name);
  fs::write(&path, contents).unwrap();
  path
}

fn stdout(out: &Output) -> String {
  String::from_utf8(out.stdout.clone()).unwrap()
}

#[test]
fn reference_constant() {
  let out = digitsum(&["54321"]);
  assert!(out.status.success());
  assert_eq!(stdout(&out), "15\n");
}

#[test]
fn no_arguments_uses_reference_constant() {
  let out = digitsum(&[]);
  assert!(out.status.success());
  assert_eq!(stdout(&out), "15\n");
}

#[test]
fn one_line_per_number() {
  let out = digitsum(&["0", "9999", "1000000", "-123"]);
  assert!(out.status.success());
  assert_eq!(stdout(&out), "0\n36\n1\n6\n");
}

#[test]
fn digital_root_flag() {
  let out = digitsum(&["--root", "9999", "-38"]);
  assert!(out.status.success());
  assert_eq!(stdout(&out), "9\n2\n");
}

#[test]
fn json_output() {
  let out = digitsum(&["-j", "-123"]);
  assert!(out.status.success());
  assert_eq!(
    stdout(&out),
    "{\"input\":-123,\"digit_sum\":6,\"digital_root\":6}\n"
  );
}

#[test]
fn malformed_input_prints_nothing() {
  let out = digitsum(&["12", "abc"]);
  assert_eq!(out.status.code(), Some(1));
  assert!(out.stdout.is_empty());
  let stderr = String::from_utf8_lossy(&out.stderr);
  assert!(stderr.contains("\"abc\""), "stderr: {stderr}");
}

#[test]
fn out_of_range_is_rejected() {
  let out = digitsum(&["9223372036854775808"]);
  assert_eq!(out.status.code(), Some(1));
  assert!(out.stdout.is_empty());
}

#[test]
fn reject_negative_flag() {
  let out = digitsum(&["--reject-negative", "5", "-5"]);
  assert_eq!(out.status.code(), Some(1));
  assert!(out.stdout.is_empty());

  let out = digitsum(&["--reject-negative", "5"]);
  assert!(out.status.success());
  assert_eq!(stdout(&out), "5\n");
}

#[test]
fn unknown_flag_fails() {
  let out = digitsum(&["--bogus"]);
  assert_eq!(out.status.code(), Some(1));
  assert!(out.stdout.is_empty());
}

#[test]
fn help() {
  let out = digitsum(&["--help"]);
  assert!(out.status.success());
  assert!(stdout(&out).contains("USAGE:"));
}

#[test]
fn example_config() {
  let config = Path::new(env!("CARGO_MANIFEST_DIR")).join("digitsum.example.toml");
  let out = digitsum(&["--config", config.to_str().unwrap(), "--root", "54321"]);
  assert!(out.status.success());
  assert_eq!(stdout(&out), "6\n");
}

#[test]
fn missing_config_fails() {
  let out = digitsum(&["--config", "no/such/file.toml", "1"]);
  assert_eq!(out.status.code(), Some(1));
  assert!(out.stdout.is_empty());
}

#[test]
fn error_shown_when_logging_is_off() {
  let out = digitsum_with_log(&["abc"], Some("off"));
  assert_eq!(out.status.code(), Some(1));
  assert!(out.stdout.is_empty());
  let stderr = String::from_utf8_lossy(&out.stderr);
  assert!(stderr.contains("\"abc\""), "stderr: {stderr}");

  let config = write_config("log-off.toml", "log_level = \"off\"\n");
  let out = digitsum(&["--config", config.to_str().unwrap(), "abc"]);
  assert_eq!(out.status.code(), Some(1));
  assert!(out.stdout.is_empty());
  let stderr = String::from_utf8_lossy(&out.stderr);
  assert!(stderr.contains("\"abc\""), "stderr: {stderr}");
}

#[test]
fn unknown_log_level_is_reported() {
  let config = write_config("log-loud.toml", "log_level = \"loud\"\n");
  let out = digitsum(&["--config", config.to_str().unwrap(), "abc"]);
  assert_eq!(out.status.code(), Some(1));
  assert!(out.stdout.is_empty());
  let stderr = String::from_utf8_lossy(&out.stderr);
  assert!(stderr.contains("failed to parse"), "stderr: {stderr}");
}

#[test]
fn reason_is_printed_once() {
  let out = digitsum(&["abc"]);
  let stderr = String::from_utf8_lossy(&out.stderr);
  assert_eq!(stderr.matches("invalid digit found in string").count(), 1, "stderr: {stderr}");
}
