//! Coverage for config parsing, env overrides and file lookup.

use std::path::PathBuf;

use mordnilap::config::{Config, LoggingConfig, SearchConfig, DEFAULT_PREFIX};
use mordnilap::counting::CountMode;
use mordnilap::fixpoint::Dialect;
use mordnilap::numerals::NumeralStyle;

fn env_from(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
    move |key: &str| {
        pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| (*v).to_owned())
    }
}

#[test]
fn defaults_use_seed_prefix_and_canonical_dialect() {
    let config = Config::default();
    assert_eq!(config.search.prefix, DEFAULT_PREFIX);
    assert_eq!(config.search.timeout_secs, None);
    assert!(!config.search.detect_cycles);
    assert_eq!(config.search.dialect(), Dialect::canonical());
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.dir, None);
}

#[test]
fn parse_full_config() {
    let toml_str = r#"
[search]
prefix = "Hello there."
timeout_secs = 90
detect_cycles = true
numerals = "hyphenated"
counting = "raw"

[logging]
level = "debug"
dir = "/var/log/mordnilap"
"#;
    let config = match Config::from_toml(toml_str) {
        Ok(config) => config,
        Err(err) => panic!("full config should parse: {err}"),
    };
    assert_eq!(
        config.search,
        SearchConfig {
            prefix: "Hello there.".to_owned(),
            timeout_secs: Some(90),
            detect_cycles: true,
            numerals: NumeralStyle::Hyphenated,
            counting: CountMode::RawNonWhitespace,
        }
    );
    assert_eq!(
        config.logging,
        LoggingConfig {
            level: "debug".to_owned(),
            dir: Some(PathBuf::from("/var/log/mordnilap")),
        }
    );
}

#[test]
fn partial_config_keeps_defaults() {
    let config = match Config::from_toml("[search]\nprefix = \"pv\"\n") {
        Ok(config) => config,
        Err(err) => panic!("partial config should parse: {err}"),
    };
    assert_eq!(config.search.prefix, "pv");
    assert_eq!(config.search.numerals, NumeralStyle::Spaced);
    assert_eq!(config.logging, LoggingConfig::default());
}

#[test]
fn unknown_numeral_style_is_rejected() {
    assert!(Config::from_toml("[search]\nnumerals = \"roman\"\n").is_err());
}

#[test]
fn env_overrides_file_values() {
    let mut config = Config::default();
    config.apply_overrides(env_from(&[
        ("MORDNILAP_PREFIX", "ab"),
        ("MORDNILAP_TIMEOUT_SECS", "5"),
        ("MORDNILAP_LOG_LEVEL", "warn"),
        ("MORDNILAP_LOG_DIR", "/tmp/mordnilap-logs"),
    ]));
    assert_eq!(config.search.prefix, "ab");
    assert_eq!(config.search.timeout_secs, Some(5));
    assert_eq!(config.logging.level, "warn");
    assert_eq!(config.logging.dir, Some(PathBuf::from("/tmp/mordnilap-logs")));
}

#[test]
fn invalid_numeric_override_is_ignored() {
    let mut config = Config::default();
    config.apply_overrides(env_from(&[("MORDNILAP_TIMEOUT_SECS", "soon")]));
    assert_eq!(config.search.timeout_secs, None);
}

#[test]
fn load_reads_file_from_env_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("mordnilap.toml");
    std::fs::write(&path, "[search]\nprefix = \"from file\"\ntimeout_secs = 7\n").expect("write");
    let path_str = path.display().to_string();

    let config = Config::load_with(|key| match key {
        "MORDNILAP_CONFIG_PATH" => Some(path_str.clone()),
        "MORDNILAP_TIMEOUT_SECS" => Some("9".to_owned()),
        _ => None,
    })
    .expect("config loads");
    assert_eq!(config.search.prefix, "from file");
    assert_eq!(config.search.timeout_secs, Some(9));
}

#[test]
fn load_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path_str = dir.path().join("absent.toml").display().to_string();

    let config = Config::load_with(|key| (key == "MORDNILAP_CONFIG_PATH").then(|| path_str.clone()))
        .expect("config loads");
    assert_eq!(config, Config::default());
}

#[test]
fn load_rejects_malformed_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "[search\nprefix = ").expect("write");
    let path_str = path.display().to_string();

    let result = Config::load_with(|key| (key == "MORDNILAP_CONFIG_PATH").then(|| path_str.clone()));
    assert!(result.is_err());
}
