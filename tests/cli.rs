use std::io::Write;
use std::process::{Command, Output};

fn hash64(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hash64"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run hash64")
}

fn stdout(args: &[&str]) -> String {
    let output = hash64(args);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn test_default_invocation_prints_sample_hash() {
    assert_eq!(stdout(&[]), "17735793547992799661\n");
}

#[test]
fn test_murmur_and_hex() {
    assert_eq!(stdout(&["--algorithm", "murmur"]), "3129611591639464408\n");
    assert_eq!(stdout(&["--hex"]), "f62232437dc699ad\n");
}

#[test]
fn test_files_follow_literal_inputs() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"Retezeckzahashovani").unwrap();
    file.flush().unwrap();
    let path = file.path().to_str().unwrap();
    assert_eq!(
        stdout(&["abc", "--file", path]),
        "2640714258260161385\n17735793547992799661\n"
    );
}

#[test]
fn test_verbose_logs_stay_off_stdout() {
    let output = hash64(&["-v", "abc"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "2640714258260161385\n");
    assert!(!output.stderr.is_empty());
}

#[test]
fn test_json_output() {
    let text = stdout(&["--json", "--seed", "7", "-a", "murmur", "abc"]);
    let record: serde_json::Value = serde_json::from_str(text.trim_end()).unwrap();
    assert_eq!(record["source"], "abc");
    assert_eq!(record["algorithm"], "murmur");
    assert_eq!(record["seed"], 7);
    assert_eq!(record["length"], 3);
    assert_eq!(record["hash"].as_u64(), Some(0xcc82712c1f7f6fa5));
}

#[test]
fn test_errors_exit_non_zero() {
    let output = hash64(&["-a", "fingerprint", "--seed", "1"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("does not take a seed"));
    assert!(output.stdout.is_empty());

    let output = hash64(&["--file", "/nonexistent/hash64/input"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to read"));

    let output = hash64(&["--seed", "banana"]);
    assert!(!output.status.success());
}
