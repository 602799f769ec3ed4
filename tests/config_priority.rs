#![allow(clippy::unwrap_used)]
//! Config priority contract tests.
//!
//! Priority order (highest to lowest):
//! 1. CLI arguments
//! 2. Config file values
//! 3. Built-in defaults

use genslang::config::{ConfigFile, GenslangConfig, ResolveOptions, resolve_config};
use genslang::credential::CredentialSource;
use genslang::style::StyleId;
use genslang::translation::{DEFAULT_ENDPOINT, DEFAULT_MODEL};
use serial_test::serial;

fn make_config_with_defaults() -> ConfigFile {
    ConfigFile {
        genslang: GenslangConfig {
            style: Some("millennial".to_string()),
            model: Some("config_model".to_string()),
            endpoint: None,
            temperature: Some(0.3),
            max_tokens: None,
            api_key_env: Some("GENSLANG_PRIORITY_TEST_KEY".to_string()),
            api_key: Some("sk-from-config".to_string()),
        },
    }
}

#[test]
fn test_cli_style_overrides_config_style() {
    let options = ResolveOptions {
        style: Some("genalpha".to_string()),
        ..Default::default()
    };

    let resolved = resolve_config(&options, &make_config_with_defaults()).unwrap();

    assert_eq!(resolved.style.id, StyleId::GenAlpha);
    assert_eq!(resolved.style.display_name, "Gen Alpha");
}

#[test]
fn test_config_style_used_without_cli_style() {
    let resolved =
        resolve_config(&ResolveOptions::default(), &make_config_with_defaults()).unwrap();

    assert_eq!(resolved.style.id, StyleId::Millennial);
    assert_eq!(resolved.params.model, "config_model");
}

#[test]
fn test_builtin_defaults_fill_gaps() {
    let resolved =
        resolve_config(&ResolveOptions::default(), &make_config_with_defaults()).unwrap();

    assert_eq!(resolved.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(resolved.params.max_tokens, 500);
    assert!((resolved.params.temperature - 0.3).abs() < f32::EPSILON);
}

#[test]
fn test_no_config_uses_builtin_defaults() {
    let resolved = resolve_config(&ResolveOptions::default(), &ConfigFile::default()).unwrap();

    assert_eq!(resolved.style.id, StyleId::Boomer);
    assert_eq!(resolved.params.model, DEFAULT_MODEL);
}

#[test]
fn test_cli_model_overrides_config_model() {
    let options = ResolveOptions {
        model: Some("cli_model".to_string()),
        ..Default::default()
    };

    let resolved = resolve_config(&options, &make_config_with_defaults()).unwrap();

    assert_eq!(resolved.params.model, "cli_model");
}

#[test]
#[serial]
fn test_env_key_overrides_config_key() {
    // SAFETY: env-mutating tests are serialized
    unsafe { std::env::set_var("GENSLANG_PRIORITY_TEST_KEY", "sk-from-env") };

    let resolved =
        resolve_config(&ResolveOptions::default(), &make_config_with_defaults()).unwrap();
    let credentials = resolved.credentials();

    assert_eq!(credentials.get(), Some("sk-from-env".to_string()));
    assert_eq!(credentials.source(), Some(CredentialSource::Environment));

    unsafe { std::env::remove_var("GENSLANG_PRIORITY_TEST_KEY") };

    assert_eq!(credentials.get(), Some("sk-from-config".to_string()));
    assert_eq!(credentials.source(), Some(CredentialSource::ConfigFile));
}

#[test]
#[serial]
fn test_session_key_overrides_everything() {
    // SAFETY: env-mutating tests are serialized
    unsafe { std::env::set_var("GENSLANG_PRIORITY_TEST_KEY", "sk-from-env") };

    let resolved =
        resolve_config(&ResolveOptions::default(), &make_config_with_defaults()).unwrap();
    let mut credentials = resolved.credentials();
    assert!(credentials.save("sk-from-session"));

    assert_eq!(credentials.get(), Some("sk-from-session".to_string()));
    assert_eq!(credentials.source(), Some(CredentialSource::Session));

    unsafe { std::env::remove_var("GENSLANG_PRIORITY_TEST_KEY") };
}
