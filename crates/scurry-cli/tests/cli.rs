//! End-to-end tests for the `scurry` binary.

use assert_cmd::Command;
use predicates::prelude::*;

/// Get a Command for the scurry binary.
#[allow(deprecated)]
fn scurry_cmd() -> Command {
    Command::cargo_bin("scurry").unwrap()
}

// =============================================================================
// Output formats
// =============================================================================

mod formats {
    use super::*;

    #[test]
    fn test_text_ends_on_target() {
        scurry_cmd()
            .args(["--x", "120", "--y", "80", "--seed", "5"])
            .assert()
            .success()
            .stdout(predicate::str::ends_with(" 120 80\n"));
    }

    #[test]
    fn test_csv_header() {
        scurry_cmd()
            .args(["--x", "10", "--y", "10", "--seed", "5", "--format", "csv"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("time_ms,x,y\n"));
    }

    #[test]
    fn test_json_document() {
        scurry_cmd()
            .args(["--x", "300", "--y", "200", "--seed", "5", "--format", "json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"trail\""))
            .stdout(predicate::str::contains("\"landed\""));
    }

    #[test]
    fn test_target_clamped_to_screen() {
        scurry_cmd()
            .args(["--x", "5000", "--y", "-20", "--screen", "640x480", "--seed", "5"])
            .assert()
            .success()
            .stdout(predicate::str::ends_with(" 639 0\n"));
    }
}

// =============================================================================
// Natures
// =============================================================================

mod natures {
    use super::*;

    #[test]
    fn test_every_nature_runs() {
        for nature in ["default", "granny", "average", "fast-gamer"] {
            scurry_cmd()
                .args(["--x", "400", "--y", "300", "--seed", "11", "--nature", nature])
                .assert()
                .success()
                .stdout(predicate::str::ends_with(" 400 300\n"));
        }
    }

    #[test]
    fn test_robot_with_speed() {
        scurry_cmd()
            .args(["--x", "100", "--y", "0", "--nature", "robot", "--speed", "100"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("0 "))
            .stdout(predicate::str::ends_with(" 100 0\n"));
    }

    #[test]
    fn test_robot_without_speed_fails() {
        scurry_cmd()
            .args(["--x", "100", "--y", "0", "--nature", "robot"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("--speed"));
    }

    #[test]
    fn test_unknown_nature_rejected() {
        scurry_cmd()
            .args(["--x", "1", "--y", "1", "--nature", "sloth"])
            .assert()
            .failure();
    }
}

// =============================================================================
// Arguments and logging
// =============================================================================

mod arguments {
    use super::*;

    #[test]
    fn test_missing_target_fails() {
        scurry_cmd().assert().failure();
    }

    #[test]
    fn test_bad_screen_rejected() {
        scurry_cmd()
            .args(["--x", "1", "--y", "1", "--screen", "wide"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("screen"));
    }

    #[test]
    fn test_start_position() {
        scurry_cmd()
            .args(["--x", "60", "--y", "50", "--from", "50,50", "--nature", "robot", "--speed", "100"])
            .assert()
            .success()
            .stdout(predicate::str::contains(" 51 50\n"));
    }

    #[test]
    fn test_seed_is_reproducible() {
        let run = || {
            scurry_cmd()
                .args(["--x", "700", "--y", "500", "--seed", "77"])
                .output()
                .unwrap()
                .stdout
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_info_logs_to_stderr() {
        scurry_cmd()
            .args(["--x", "30", "--y", "30", "--seed", "1", "--info"])
            .assert()
            .success()
            .stderr(predicate::str::contains("Mouse movement completed"));
    }
}
