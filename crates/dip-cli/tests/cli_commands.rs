//! Integration tests for the `dip` CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const PLAYERS: [&str; 7] = ["alice", "bob", "carol", "dave", "erin", "frank", "grace"];

fn diplomat() -> Command {
    let mut cmd = Command::cargo_bin("diplomat").unwrap();
    cmd.env("NO_COLOR", "1")
        .env_remove("DIPLOMAT_PREFIX")
        .env_remove("DIPLOMAT_GAME_CHANNEL")
        .env_remove("DIPLOMAT_SEED")
        .env_remove("RUST_LOG");
    cmd
}

/// A transcript where seven players join and the game starts.
fn full_lobby() -> String {
    let mut script = String::from("alice: !new\n");
    for p in PLAYERS {
        script.push_str(&format!("{p}: !join\n"));
    }
    script.push_str("alice: !start\n");
    script
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_full_game_start() {
    diplomat()
        .args(["play", "--seed", "7"])
        .write_stdin(full_lobby())
        .assert()
        .success()
        .stdout(
            predicate::str::contains("New game starting!")
                .and(predicate::str::contains("Added grace to the game (7/7)"))
                .and(predicate::str::contains("The game has begun!"))
                .and(predicate::str::contains("Austria: "))
                .and(predicate::str::contains("Turkey: "))
                .and(predicate::str::contains("Spring 1901")),
        );
}

#[test]
fn play_same_seed_same_draw() {
    let run = || {
        diplomat()
            .args(["play", "--seed", "1234"])
            .write_stdin(full_lobby())
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn play_rejections_do_not_stop_the_session() {
    let script = "alice: !new\nbob: !new\nalice: !join\nalice: !join\n\
                  alice: !start\nalice: !status\n";
    diplomat()
        .arg("play")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("a game is already in progress")
                .and(predicate::str::contains("alice is already in this game"))
                .and(predicate::str::contains("need 7 players to start, have 1"))
                .and(predicate::str::contains("Waiting for players (1/7)")),
        );
}

#[test]
fn play_roster_full() {
    let mut script = full_lobby().replace("alice: !start\n", "");
    script.push_str("heidi: !join\n");
    diplomat()
        .arg("play")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("only 7 players may join"));
}

#[test]
fn play_forcestart_fills_empty_seats() {
    diplomat()
        .args(["play", "--seed", "3"])
        .write_stdin("alice: !new\nalice: !join\nbob: !join\nbob: !forcestart\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(": None").count(5));
}

#[test]
fn play_end_then_new() {
    diplomat()
        .arg("play")
        .write_stdin("alice: !new\nalice: !end\nalice: !status\nbob: !new\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Game over.")
                .and(predicate::str::contains("no game in progress"))
                .and(predicate::str::contains("New game starting!").count(2)),
        );
}

#[test]
fn play_pause_toggle() {
    let mut script = full_lobby();
    script.push_str("bob: !pause\nbob: !pause\n");
    diplomat()
        .arg("play")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Game paused.").and(predicate::str::contains("Game resumed.")),
        );
}

#[test]
fn play_wrong_channel() {
    diplomat()
        .arg("play")
        .write_stdin("#general alice: !new\n#game alice: !join\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("wrong channel, game commands belong in #game")
                .and(predicate::str::contains("no game in progress")),
        );
}

#[test]
fn play_ignores_chatter() {
    diplomat()
        .arg("play")
        .write_stdin("alice: hello there\nnot a chat line\n\n")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn play_reserved_commands() {
    let mut script = full_lobby();
    script.push_str("alice: !adjudicate\nalice: !time\nalice: !dance\n");
    diplomat()
        .arg("play")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("'adjudicate' is not implemented yet")
                .and(predicate::str::contains("'time' is not implemented yet"))
                .and(predicate::str::contains("unknown command: dance")),
        );
}

#[test]
fn play_custom_prefix_and_effects() {
    diplomat()
        .args(["play", "--prefix", "?", "--effects"])
        .write_stdin("alice: ?new\nalice: ?join\nalice: ?forcestart\nalice: ?end\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Type ?join to take a seat")
                .and(predicate::str::contains("ensure roles Diplomat, Adjudicator"))
                .and(predicate::str::contains("#austria <- role austria"))
                .and(predicate::str::contains("delete channels #austria")),
        );
}

#[test]
fn play_history() {
    diplomat()
        .arg("play")
        .write_stdin("alice: !new\nbob: !join\nbob: !leave\nalice: !history\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Game created")
                .and(predicate::str::contains("bob joined"))
                .and(predicate::str::contains("bob left")),
        );
}

// ---------------------------------------------------------------------------
// config
// ---------------------------------------------------------------------------

#[test]
fn config_file_sets_prefix_and_channel() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("diplomat.json");
    fs::write(&path, r#"{ "prefix": "$", "game_channel": "diplomacy" }"#).unwrap();

    diplomat()
        .args(["play", "--config", path.to_str().unwrap()])
        .write_stdin("#diplomacy alice: $new\n#game alice: $join\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Type $join to take a seat")
                .and(predicate::str::contains("belong in #diplomacy")),
        );
}

#[test]
fn env_overrides_config() {
    diplomat()
        .arg("config")
        .env("DIPLOMAT_PREFIX", "%")
        .env("DIPLOMAT_SEED", "5")
        .assert()
        .success()
        .stdout(
            predicate::str::contains(r#""prefix": "%""#)
                .and(predicate::str::contains(r#""seed": 5"#)),
        );
}

#[test]
fn invalid_config_file_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, "{ not json").unwrap();

    diplomat()
        .args(["config", "--config", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config"));
}

#[test]
fn missing_config_file_fails() {
    diplomat()
        .args(["config", "--config", "/nonexistent/diplomat.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read config"));
}

#[test]
fn invalid_seed_env_fails() {
    diplomat()
        .arg("config")
        .env("DIPLOMAT_SEED", "tomorrow")
        .assert()
        .failure()
        .stderr(predicate::str::contains("DIPLOMAT_SEED"));
}

#[test]
fn empty_prefix_flag_fails() {
    diplomat()
        .args(["play", "--prefix", ""])
        .write_stdin("alice: hello everyone\n")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("error: invalid prefix"));
}

#[test]
fn empty_prefix_in_config_file_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("diplomat.json");
    fs::write(&path, r#"{ "prefix": "" }"#).unwrap();

    diplomat()
        .args(["play", "--config", path.to_str().unwrap()])
        .write_stdin("alice: hello everyone\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid prefix"));
}

// ---------------------------------------------------------------------------
// factions
// ---------------------------------------------------------------------------

#[test]
fn factions_lists_all_seven() {
    diplomat()
        .arg("factions")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Austria")
                .and(predicate::str::contains("#england"))
                .and(predicate::str::contains("Turkey"))
                .and(predicate::str::contains("'Diplomacy'")),
        );
}

// ---------------------------------------------------------------------------
// help
// ---------------------------------------------------------------------------

#[test]
fn help_lists_subcommands() {
    diplomat()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("play")
                .and(predicate::str::contains("factions"))
                .and(predicate::str::contains("config")),
        );
}
