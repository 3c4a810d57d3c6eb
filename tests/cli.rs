use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn sketchpad_cmd() -> Command {
    Command::cargo_bin("sketchpad").expect("binary exists")
}

#[test]
fn any_argument_prints_gui_notice() {
    sketchpad_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "This is a gui application. Press h in the window to display controls.",
        ));
}

#[test]
fn several_arguments_still_print_notice() {
    sketchpad_cmd()
        .args(["draw", "-x", "file.png"])
        .assert()
        .success()
        .stdout(predicate::str::contains("This is a gui application."));
}

#[test]
fn window_requires_wayland_env() {
    let temp = TempDir::new().unwrap();

    sketchpad_cmd()
        .env_remove("WAYLAND_DISPLAY")
        .env("XDG_CONFIG_HOME", temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("WAYLAND_DISPLAY not set"));
}

#[test]
fn broken_config_falls_back_to_defaults() {
    let temp = TempDir::new().unwrap();
    let config_dir = temp.path().join("sketchpad");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.toml"), "drawing = [not toml").unwrap();

    // Config errors are not fatal; the run still stops at the missing display
    sketchpad_cmd()
        .env_remove("WAYLAND_DISPLAY")
        .env("XDG_CONFIG_HOME", temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("WAYLAND_DISPLAY not set"));
}
