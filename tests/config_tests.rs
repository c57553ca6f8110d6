//! Configuration loading and validation tests.

use std::io::Write;

use gaffer::config::Config;
use gaffer::error::{ConfigError, Error};
use rust_decimal_macros::dec;
use tempfile::NamedTempFile;

fn write_temp_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp config");
    file.write_all(contents.as_bytes()).expect("write temp config");
    file
}

#[test]
fn empty_config_falls_back_to_defaults() {
    let file = write_temp_config("");
    let config = Config::load(file.path()).unwrap();

    assert_eq!(config.rules.budget, dec!(100.0));
    assert_eq!(config.rules.squad_size, 15);
    assert_eq!(config.rules.max_per_club, 3);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn budget_is_tunable_across_the_slider_range() {
    let file = write_temp_config(
        r#"
[rules]
budget = 120.0

[logging]
level = "debug"
format = "json"
"#,
    );

    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.rules.budget, dec!(120.0));
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn quota_sum_mismatch_is_rejected() {
    let file = write_temp_config(
        r#"
[rules]
midfielders = 6
"#,
    );

    match Config::load(file.path()) {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "squad_size",
            ..
        })) => {}
        other => panic!("expected quota mismatch rejection, got {other:?}"),
    }
}

#[test]
fn unknown_log_level_is_rejected() {
    let file = write_temp_config(
        r#"
[logging]
level = "loud"
"#,
    );

    match Config::load(file.path()) {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "logging.level",
            ..
        })) => {}
        other => panic!("expected log level rejection, got {other:?}"),
    }
}

#[test]
fn unreadable_file_surfaces_read_error() {
    let result = Config::load("/nonexistent/gaffer.toml");
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::ReadFile(_)))
    ));
}

#[test]
fn malformed_toml_surfaces_parse_error() {
    let file = write_temp_config("rules = not valid toml");
    assert!(matches!(
        Config::load(file.path()),
        Err(Error::Config(ConfigError::Parse(_)))
    ));
}
