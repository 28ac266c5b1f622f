use std::path::Path;
use std::process::Command;

use appicon::config;

#[test]
fn binary_writes_build_dir_and_reports_each_file() {
    let output = Command::new(env!("CARGO_BIN_EXE_appicon"))
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run appicon");
    assert!(
        output.status.success(),
        "exit {:?}: {}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3, "stdout: {stdout}");

    let expected = ["build/icon.png", "build/icon.ico", "build/icon.icns"];
    for (line, suffix) in lines.iter().zip(expected) {
        let path = line
            .strip_prefix("Generated ")
            .unwrap_or_else(|| panic!("unexpected line {line:?}"));
        assert!(Path::new(path).ends_with(suffix), "{path} does not end with {suffix}");
        assert!(Path::new(path).is_file());
    }

    assert!(config::output_dir().join("icon.png").is_file());
}
