//! Configuration tests
//!
//! Round-trip checks keep `to_toml()` and `FileConfig` in sync, and the
//! precedence tests pin down env > file > defaults.

use super::*;
use std::collections::HashMap;

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name: &str| map.get(name).cloned()
}

fn no_env(_: &str) -> Option<String> {
    None
}

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_config_roundtrip_default() {
    let config = Config::default();
    let toml_str = config.to_toml();

    let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );

    let resolved = Config::resolve(parsed.unwrap(), no_env);
    assert_eq!(resolved, config);
}

#[test]
fn test_config_roundtrip_custom_values() {
    let mut config = Config::default();
    config.model = "gemini-2.5-flash".to_string();
    config.default_tone = Tone::Chill;
    config.theme = "auto".to_string();
    config.logging.file_enabled = true;
    config.logging.file_rotation = LogRotation::Hourly;

    let parsed: FileConfig = toml::from_str(&config.to_toml()).unwrap();
    assert_eq!(Config::resolve(parsed, no_env), config);
}

#[test]
fn test_to_toml_never_writes_api_key() {
    let mut config = Config::default();
    config.api_key = Some("super-secret".to_string());

    let toml_str = config.to_toml();
    assert!(!toml_str.contains("super-secret"));

    let parsed: FileConfig = toml::from_str(&toml_str).unwrap();
    assert!(parsed.api_key.is_none());
}

// ─────────────────────────────────────────────────────────────────────────────
// Precedence tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_env_overrides_file() {
    let file: FileConfig = toml::from_str(
        r#"
model = "from-file"
default_tone = "Sassy"
"#,
    )
    .unwrap();

    let config = Config::resolve(
        file,
        env_from(&[("HYPE_MODEL", "from-env"), ("HYPE_TONE", "witty")]),
    );

    assert_eq!(config.model, "from-env");
    assert_eq!(config.default_tone, Tone::Witty);
    assert_eq!(config.api_base, DEFAULT_API_BASE);
}

#[test]
fn test_file_overrides_defaults() {
    let file: FileConfig = toml::from_str(
        r#"
api_base = "http://localhost:9999/v1beta"
theme = "auto"

[logging]
level = "debug"
file_rotation = "never"
"#,
    )
    .unwrap();

    let config = Config::resolve(file, no_env);

    assert_eq!(config.api_base, "http://localhost:9999/v1beta");
    assert_eq!(config.theme, "auto");
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.file_rotation, LogRotation::Never);
    assert_eq!(config.logging.file_prefix, "hype");
}

#[test]
fn test_unknown_tone_falls_back_to_default() {
    let file: FileConfig = toml::from_str(r#"default_tone = "boring""#).unwrap();
    let config = Config::resolve(file, no_env);
    assert_eq!(config.default_tone, Tone::Extra);
}

#[test]
fn test_blank_file_api_key_is_ignored() {
    let file: FileConfig = toml::from_str(r#"api_key = "  ""#).unwrap();
    let config = Config::resolve(file, no_env);
    assert!(config.api_key.is_none());
}

#[test]
fn test_unknown_rotation_defaults_to_daily() {
    assert_eq!(LogRotation::parse("weekly"), LogRotation::Daily);
    assert_eq!(LogRotation::parse("HOURLY"), LogRotation::Hourly);
}

// ─────────────────────────────────────────────────────────────────────────────
// Fingerprint
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_fingerprint_is_stable_and_short() {
    // sha256("abc") = ba7816bf8f01cfea...
    assert_eq!(fingerprint("abc"), "ba7816bf8f01");
    assert_ne!(fingerprint("abc"), fingerprint("abd"));
}
