use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::{Path, PathBuf};

#[fixture]
pub fn workspace_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// `jdiff compare` with colors off and no inherited configuration.
pub fn run_compare(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("jdiff").expect("Failed to find jdiff binary");
    for var in ["JDIFF_FORMAT", "JDIFF_COLOR", "JDIFF_INDENT", "JDIFF_MAX_LINES", "JDIFF_LOG"] {
        cmd.env_remove(var);
    }
    cmd.current_dir(dir);
    cmd.arg("compare").args(["--color", "never"]);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}
