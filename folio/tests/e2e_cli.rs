//! End-to-end CLI tests for folio

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn folio() -> Command {
    let mut cmd = cargo_bin_cmd!("folio");
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        folio()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("render"))
            .stdout(predicate::str::contains("snapshot"))
            .stdout(predicate::str::contains("test"));
    }

    #[test]
    fn shows_version() {
        folio()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn unknown_subcommand_fails() {
        folio().arg("deploy").assert().failure();
    }
}

mod render {
    use super::*;

    #[test]
    fn writes_static_document() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("out/index.html");

        folio()
            .args(["render", "--out"])
            .arg(&out)
            .assert()
            .success()
            .stdout(predicate::str::contains("index.html"));

        let html = std::fs::read_to_string(&out).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"id="main-content""#));
        // the avatar URL only appears after a failed load in the browser
        assert!(html.contains("https://avatars.githubusercontent.com/u/9919?v=4"));
        assert!(html.contains("image-skeleton"));
        assert!(html.contains("opacity: 0"));
        assert!(!html.contains("ui-avatars.com"));
    }

    #[test]
    fn uses_content_file() {
        let dir = TempDir::new().unwrap();
        let content = dir.path().join("content.json");
        std::fs::write(&content, r#"{"profile":{"display_name":"Jane Doe"}}"#).unwrap();
        let out = dir.path().join("index.html");

        folio()
            .args(["render", "--content"])
            .arg(&content)
            .arg("--out")
            .arg(&out)
            .assert()
            .success();

        assert!(std::fs::read_to_string(&out).unwrap().contains("Jane Doe"));
    }

    #[test]
    fn missing_content_file_is_reported() {
        let dir = TempDir::new().unwrap();
        folio()
            .current_dir(dir.path())
            .args(["render", "--content", "nope.json"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("[folio] Error"))
            .stderr(predicate::str::contains("nope.json"));
    }
}

mod budget {
    use super::*;

    fn dist_with_css(dir: &Path, bytes: usize) {
        std::fs::create_dir_all(dir.join("dist")).unwrap();
        std::fs::write(dir.join("dist/index.html"), "<!DOCTYPE html>").unwrap();
        std::fs::write(dir.join("dist/site.css"), vec![b'a'; bytes]).unwrap();
    }

    #[test]
    fn passes_within_budget() {
        let dir = TempDir::new().unwrap();
        dist_with_css(dir.path(), 1024);

        folio()
            .current_dir(dir.path())
            .arg("budget")
            .assert()
            .success()
            .stdout(predicate::str::contains("css"))
            .stdout(predicate::str::contains("OVER").not());
    }

    #[test]
    fn fails_over_configured_limit() {
        let dir = TempDir::new().unwrap();
        dist_with_css(dir.path(), 4 * 1024);
        std::fs::create_dir_all(dir.path().join(".folio")).unwrap();
        std::fs::write(
            dir.path().join(".folio/pipeline.toml"),
            "[budget]\ncss_kb = 2\n",
        )
        .unwrap();

        folio()
            .current_dir(dir.path())
            .arg("budget")
            .assert()
            .failure()
            .stdout(predicate::str::contains("OVER"))
            .stderr(predicate::str::contains("asset budget exceeded"));
    }

    #[test]
    fn missing_dist_fails() {
        let dir = TempDir::new().unwrap();
        folio()
            .current_dir(dir.path())
            .args(["budget", "--dist", "nothing-here"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("not found"));
    }
}

mod snapshot {
    use super::*;

    #[test]
    fn records_then_matches() {
        let dir = TempDir::new().unwrap();

        folio()
            .current_dir(dir.path())
            .arg("snapshot")
            .assert()
            .success()
            .stdout(predicate::str::contains("recorded 6"));
        assert!(dir.path().join("snapshots/visual.json").exists());

        folio()
            .current_dir(dir.path())
            .arg("snapshot")
            .assert()
            .success()
            .stdout(predicate::str::contains("6 section(s) match"));
    }

    #[test]
    fn changed_content_fails_until_updated() {
        let dir = TempDir::new().unwrap();
        folio().current_dir(dir.path()).arg("snapshot").assert().success();

        let content = dir.path().join("content.json");
        std::fs::write(&content, r#"{"profile":{"display_name":"Jane Doe"}}"#).unwrap();

        folio()
            .current_dir(dir.path())
            .args(["snapshot", "--content"])
            .arg(&content)
            .assert()
            .failure()
            .stdout(predicate::str::contains("changed"));

        folio()
            .current_dir(dir.path())
            .args(["snapshot", "--update", "--content"])
            .arg(&content)
            .assert()
            .success();
    }
}

#[cfg(unix)]
mod pipeline {
    use super::*;

    fn project(build: &str, preview: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(".folio")).unwrap();
        let config = format!(
            r#"
[unit]
command = ["true"]
[integration]
command = ["true"]
[build]
command = ["{build}"]
[preview]
{preview}
[accessibility]
command = ["true"]
[performance]
command = ["true"]
[e2e]
command = ["true"]
[visual]
command = ["true"]
"#
        );
        std::fs::write(dir.path().join(".folio/pipeline.toml"), config).unwrap();
        dir
    }

    const NO_PREVIEW: &str = "command = [\"true\"]\nenabled = false";

    #[test]
    fn green_pipeline_exits_zero_and_writes_report() {
        let dir = project("true", NO_PREVIEW);
        let report = dir.path().join("report.json");

        folio()
            .current_dir(dir.path())
            .args(["test", "--report"])
            .arg(&report)
            .assert()
            .success()
            .stdout(predicate::str::contains("all suites passed"));

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&report).unwrap()).unwrap();
        assert_eq!(raw["passed"], true);
        assert_eq!(raw["suites"].as_array().unwrap().len(), 7);
    }

    #[test]
    fn build_failure_fails_dependent_suites() {
        let dir = project("false", NO_PREVIEW);

        folio()
            .current_dir(dir.path())
            .arg("test")
            .assert()
            .code(1)
            .stdout(predicate::str::contains("FAIL  build"))
            .stdout(predicate::str::contains("production build failed"))
            .stdout(predicate::str::contains("5 suite(s) failed"));
    }

    #[test]
    fn preview_that_never_listens_fails_dependents() {
        let dir = project(
            "true",
            "command = [\"sh\", \"-c\", \"exit 1\"]\nport = 1\nstartup_timeout_secs = 5",
        );

        folio()
            .current_dir(dir.path())
            .arg("test")
            .assert()
            .code(1)
            .stdout(predicate::str::contains("preview server did not start"));
    }

    #[test]
    fn skipped_suites_do_not_fail_the_run() {
        let dir = project("true", NO_PREVIEW);
        std::fs::write(
            dir.path().join(".folio/pipeline.toml"),
            std::fs::read_to_string(dir.path().join(".folio/pipeline.toml"))
                .unwrap()
                .replace("[visual]\ncommand = [\"true\"]", "[visual]\ncommand = [\"false\"]"),
        )
        .unwrap();

        folio()
            .current_dir(dir.path())
            .args(["test", "--skip", "visual"])
            .assert()
            .success()
            .stdout(predicate::str::contains("SKIP  visual"));
    }
}
