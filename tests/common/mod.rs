//! Common helpers for the end-to-end tests.

use std::env;
use std::path::PathBuf;
use std::process::Command;

/// Build the fixture library and return the path to the dynamic artifact.
///
/// Shelling out to cargo keeps the test honest: it loads the same
/// artifact an external harness would, not the rlib linked into the
/// test binary. Concurrent calls are serialized by cargo's own locking.
pub fn build_fixture() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let cargo = env::var("CARGO").unwrap_or_else(|_| "cargo".to_owned());

    let status = Command::new(cargo)
        .args(["build", "-p", "dlprobe-fixture"])
        .current_dir(&manifest_dir)
        .status()
        .expect("failed to spawn cargo");
    assert!(status.success(), "building the fixture failed");

    let target_dir = env::var("CARGO_TARGET_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| manifest_dir.join("target"));

    let artifact = if cfg!(target_os = "windows") {
        "dlprobe_fixture.dll"
    } else if cfg!(target_os = "macos") {
        "libdlprobe_fixture.dylib"
    } else {
        "libdlprobe_fixture.so"
    };

    let path = target_dir.join("debug").join(artifact);
    assert!(
        path.exists(),
        "fixture artifact not found at {}",
        path.display()
    );
    path
}
