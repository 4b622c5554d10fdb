use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn drom_cmd() -> Command {
    Command::cargo_bin("drom").expect("binary exists")
}

/// Runs the editor with a throwaway config home and output directory.
fn scripted(temp: &TempDir, script: &str) -> assert_cmd::assert::Assert {
    drom_cmd()
        .env("XDG_CONFIG_HOME", temp.path().join("config"))
        .env("HOME", temp.path())
        .arg("--no-render")
        .arg("--output-dir")
        .arg(temp.path())
        .write_stdin(script)
        .assert()
}

fn hex_markers(path: &std::path::Path) -> usize {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .filter(|line| *line == "%hex")
        .count()
}

#[test]
fn help_prints_usage() {
    drom_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Interactive editor for hexagon Droms with TikZ export",
        ));
}

#[test]
fn load_conflicts_with_seed() {
    drom_cmd()
        .args(["--seed", "1,2", "--load", "x.tex"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn malformed_seed_is_rejected() {
    drom_cmd()
        .args(["--seed", "1;2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected X,Y"));
}

#[test]
fn quit_writes_final_drawing() {
    let temp = TempDir::new().unwrap();

    scripted(&temp, "0\nquit\n")
        .success()
        .stdout(predicate::str::contains("Welcome to the Drom editor"))
        .stdout(predicate::str::contains("Added hexagon 1"));

    let working = temp.path().join("Drom.tex");
    assert_eq!(hex_markers(&working), 2);
    let contents = std::fs::read_to_string(&working).unwrap();
    assert!(!contents.contains(r"\node"));
}

#[test]
fn unknown_input_keeps_running() {
    let temp = TempDir::new().unwrap();

    scripted(&temp, "banana\n1\n")
        .success()
        .stdout(predicate::str::contains("Input 'banana' not recognized"));

    assert_eq!(hex_markers(&temp.path().join("Drom.tex")), 2);
}

#[test]
fn saved_drom_can_be_loaded_on_start() {
    let temp = TempDir::new().unwrap();

    scripted(&temp, "0\n1\nsave ring\nquit\n").success();
    let saved = temp.path().join("ring.tex");
    assert_eq!(hex_markers(&saved), 3);

    drom_cmd()
        .env("XDG_CONFIG_HOME", temp.path().join("config"))
        .env("HOME", temp.path())
        .arg("--no-render")
        .arg("--output-dir")
        .arg(temp.path().join("second"))
        .arg("--load")
        .arg(&saved)
        .write_stdin("2\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Added hexagon 3 on edge 2 (top-right) of hexagon 2"));

    assert_eq!(hex_markers(&temp.path().join("second").join("Drom.tex")), 4);
}

#[test]
fn init_config_writes_example_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("drom.toml");

    drom_cmd()
        .arg("--config")
        .arg(&path)
        .arg("--init-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default configuration"));

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("[export]"));

    drom_cmd()
        .arg("--config")
        .arg(&path)
        .arg("--init-config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn config_file_sets_working_name() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("drom.toml");
    std::fs::write(&path, "[export]\nworking_name = \"sketch\"\n").unwrap();

    drom_cmd()
        .arg("--config")
        .arg(&path)
        .arg("--no-render")
        .arg("--output-dir")
        .arg(temp.path())
        .write_stdin("quit\n")
        .assert()
        .success();

    assert_eq!(hex_markers(&temp.path().join("sketch.tex")), 1);
}
