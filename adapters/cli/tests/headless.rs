use std::{fs, process::Command};

fn gridclaim() -> Command {
    Command::new(env!("CARGO_BIN_EXE_gridclaim"))
}

#[test]
fn headless_game_prints_one_standing_per_bot() {
    let output = gridclaim()
        .args(["--headless", "--rounds", "20", "--grid-length", "10", "--seed", "3"])
        .output()
        .expect("failed to launch gridclaim");

    assert!(
        output.status.success(),
        "headless run failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let standings: Vec<&str> = stdout.lines().filter(|line| line.ends_with('%')).collect();
    assert_eq!(standings.len(), 4, "unexpected standings:\n{stdout}");
    assert!(standings[0].starts_with(" 1."));
}

#[test]
fn headless_game_is_reproducible_for_a_seed() {
    let run = || {
        gridclaim()
            .args(["--headless", "--rounds", "30", "--grid-length", "12", "--seed", "11"])
            .output()
            .expect("failed to launch gridclaim")
            .stdout
    };

    assert_eq!(run(), run());
}

#[test]
fn config_file_values_are_applied() {
    let dir = std::env::temp_dir().join(format!("gridclaim-cli-{}", std::process::id()));
    fs::create_dir_all(&dir).expect("temp dir is writable");
    let path = dir.join("arena.toml");
    fs::write(&path, "[game]\nrounds = 0\n").expect("config is writable");

    let output = gridclaim()
        .arg("--headless")
        .arg("--config")
        .arg(&path)
        .output()
        .expect("failed to launch gridclaim");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("game.rounds"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn zero_round_budget_is_rejected() {
    let output = gridclaim()
        .args(["--headless", "--rounds", "0"])
        .output()
        .expect("failed to launch gridclaim");

    assert!(!output.status.success());
}
