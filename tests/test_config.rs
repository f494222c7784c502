use std::collections::HashMap;
use std::path::PathBuf;

use egg_catcher::config::{Config, LOG_FILE_VAR, SCORE_FILE_VAR};

fn config_with(vars: &[(&str, &str)]) -> Config {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_lookup(|key| map.get(key).cloned())
}

#[test]
fn defaults_live_in_home() {
    let c = config_with(&[("HOME", "/home/hen")]);
    assert_eq!(c.score_path, PathBuf::from("/home/hen/.egg_catcher_highscore.dat"));
    assert_eq!(c.log_path, PathBuf::from("/home/hen/.egg_catcher.log"));
}

#[test]
fn missing_home_uses_current_dir() {
    let c = config_with(&[]);
    assert_eq!(c.score_path, PathBuf::from("./.egg_catcher_highscore.dat"));
}

#[test]
fn overrides_win() {
    let c = config_with(&[
        ("HOME", "/home/hen"),
        (SCORE_FILE_VAR, "/tmp/score.bin"),
        (LOG_FILE_VAR, "/tmp/egg.log"),
    ]);
    assert_eq!(c.score_path, PathBuf::from("/tmp/score.bin"));
    assert_eq!(c.log_path, PathBuf::from("/tmp/egg.log"));
}

#[test]
fn empty_override_is_ignored() {
    let c = config_with(&[("HOME", "/home/hen"), (SCORE_FILE_VAR, "")]);
    assert_eq!(c.score_path, PathBuf::from("/home/hen/.egg_catcher_highscore.dat"));
}
