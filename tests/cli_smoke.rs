//! Smoke tests for the CLI binary.

use std::process::Command;

#[test]
fn exports_json_lists_the_surface() {
    let output = Command::new(env!("CARGO_BIN_EXE_dlprobe"))
        .args(["exports", "--json"])
        .output()
        .expect("failed to run dlprobe");
    assert!(output.status.success());

    let rows: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("exports --json emits valid JSON");
    let rows = rows.as_array().expect("a JSON array of rows");
    assert_eq!(rows.len(), 18);
    assert!(
        rows.iter()
            .any(|row| row["symbol"] == "?f_int_int@@YAHH@Z" && row["linkage"] == "decorated")
    );
    assert!(
        rows.iter()
            .any(|row| row["symbol"] == "f_strlen_C" && row["linkage"] == "c")
    );
}

#[test]
fn mangle_prints_a_decorated_name() {
    let output = Command::new(env!("CARGO_BIN_EXE_dlprobe"))
        .args([
            "mangle",
            "my::ns::C::g_int_int",
            "--kind",
            "instance",
            "--param",
            "int",
        ])
        .output()
        .expect("failed to run dlprobe");
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "?g_int_int@C@ns@my@@QEAAHH@Z"
    );
}

#[test]
fn mangle_rejects_unsupported_targets() {
    let output = Command::new(env!("CARGO_BIN_EXE_dlprobe"))
        .args([
            "mangle",
            "f_int_int",
            "--param",
            "int",
            "--target",
            "aarch64-unknown-linux-gnu",
        ])
        .output()
        .expect("failed to run dlprobe");
    assert!(!output.status.success());
}

#[test]
fn check_fails_cleanly_on_a_missing_library() {
    let output = Command::new(env!("CARGO_BIN_EXE_dlprobe"))
        .args(["check", "/nonexistent/libdlprobe_fixture.so"])
        .output()
        .expect("failed to run dlprobe");
    assert!(!output.status.success());
}
