//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::env;
use std::fs;

#[test]
fn default_config_path_returns_some_path() {
    let path = default_config_path();
    assert!(
        path.is_some(),
        "default_config_path should return Some on supported platforms"
    );
}

#[test]
fn default_config_path_contains_scrollkit_config_toml() {
    let path = default_config_path().expect("Should have default path");
    let path_str = path.to_string_lossy();
    assert!(
        path_str.contains("scrollkit") && path_str.ends_with("config.toml"),
        "Path should contain 'scrollkit' and end with 'config.toml', got: {}",
        path_str
    );
}

#[test]
fn default_log_path_ends_with_scrollkit_log() {
    let path = default_log_path();
    assert!(
        path.to_string_lossy().ends_with("scrollkit.log"),
        "Default log path should end with 'scrollkit.log', got: {:?}",
        path
    );
}

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/config.toml");
    assert_eq!(
        result,
        Ok(None),
        "Missing config file should return Ok(None), not an error"
    );
}

#[test]
fn load_config_file_parses_valid_toml() {
    let config_path = env::temp_dir().join("scrollkit_test_config.toml");

    let toml_content = r#"
default_item_size = 32.5
overscan = 4
rtl = true
log_file_path = "/tmp/scrollkit-custom.log"
"#;

    fs::write(&config_path, toml_content).expect("Failed to write test config");

    let config = load_config_file(&config_path)
        .expect("Should successfully parse valid TOML")
        .expect("Should return Some(ConfigFile) for existing file");

    assert_eq!(config.default_item_size, Some(32.5));
    assert_eq!(config.overscan, Some(4));
    assert_eq!(config.rtl, Some(true));
    assert_eq!(
        config.log_file_path,
        Some(PathBuf::from("/tmp/scrollkit-custom.log"))
    );

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let config_path = env::temp_dir().join("scrollkit_test_invalid.toml");

    fs::write(&config_path, "this is not valid TOML ][}{")
        .expect("Failed to write invalid test config");

    let result = load_config_file(&config_path);
    match result {
        Err(ConfigError::ParseError { path, reason: _ }) => {
            assert_eq!(path, config_path);
        }
        _ => panic!("Expected ParseError, got {:?}", result),
    }

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_handles_partial_config() {
    let config_path = env::temp_dir().join("scrollkit_test_partial.toml");

    fs::write(&config_path, "overscan = 2\n").expect("Failed to write partial test config");

    let config = load_config_file(&config_path).unwrap().unwrap();
    assert_eq!(config.overscan, Some(2));
    assert_eq!(config.default_item_size, None);
    assert_eq!(config.rtl, None);

    fs::remove_file(config_path).ok();
}

#[test]
fn config_file_rejects_unknown_fields() {
    let toml_with_unknown = r#"
overscan = 1
unknown_field = "should fail"
"#;

    let result: Result<ConfigFile, _> = toml::from_str(toml_with_unknown);
    assert!(
        result.is_err(),
        "Should reject TOML with unknown fields due to deny_unknown_fields"
    );
}

#[test]
fn config_file_rejects_wrong_types() {
    let result: Result<ConfigFile, _> = toml::from_str("overscan = -1\n");
    assert!(result.is_err(), "Negative overscan cannot be a usize");
}

#[test]
fn resolved_config_default_has_expected_values() {
    let config = ResolvedConfig::default();

    assert_eq!(config.default_item_size, 48.0);
    assert_eq!(config.overscan, 0);
    assert!(!config.rtl);
    assert_eq!(config.log_file_path, default_log_path());
}

#[test]
fn merge_config_uses_defaults_when_none() {
    assert_eq!(merge_config(None), ResolvedConfig::default());
}

#[test]
fn merge_config_overrides_with_config_file_values() {
    let config_file = ConfigFile {
        default_item_size: Some(20.0),
        overscan: Some(3),
        rtl: Some(true),
        log_file_path: Some(PathBuf::from("/custom/path/to/app.log")),
    };

    let resolved = merge_config(Some(config_file));

    assert_eq!(resolved.default_item_size, 20.0);
    assert_eq!(resolved.overscan, 3);
    assert!(resolved.rtl);
    assert_eq!(resolved.log_file_path, PathBuf::from("/custom/path/to/app.log"));
}

#[test]
fn merge_config_uses_defaults_for_none_fields() {
    let config_file = ConfigFile {
        overscan: Some(5),
        ..ConfigFile::default()
    };

    let resolved = merge_config(Some(config_file));
    let defaults = ResolvedConfig::default();

    assert_eq!(resolved.overscan, 5);
    assert_eq!(resolved.default_item_size, defaults.default_item_size);
    assert_eq!(resolved.rtl, defaults.rtl);
    assert_eq!(resolved.log_file_path, defaults.log_file_path);
}

#[test]
fn cli_overrides_only_touch_set_flags() {
    let base = ResolvedConfig {
        default_item_size: 10.0,
        overscan: 1,
        rtl: true,
        log_file_path: PathBuf::from("x.log"),
    };

    let unchanged = apply_cli_overrides(base.clone(), None, None, None);
    assert_eq!(unchanged, base);

    let changed = apply_cli_overrides(base.clone(), Some(25.0), Some(6), Some(false));
    assert_eq!(changed.default_item_size, 25.0);
    assert_eq!(changed.overscan, 6);
    assert!(!changed.rtl);
    assert_eq!(changed.log_file_path, base.log_file_path);
}

/// RAII guard to ensure environment variable cleanup even under test parallelism.
/// Removes the var on drop, preventing test pollution in parallel execution.
struct EnvGuard(&'static str);

impl EnvGuard {
    fn new(name: &'static str) -> Self {
        env::remove_var(name);
        EnvGuard(name)
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        env::remove_var(self.0);
    }
}

#[test]
#[serial(scrollkit_rtl)]
fn apply_env_overrides_respects_scrollkit_rtl() {
    let _guard = EnvGuard::new(RTL_ENV_VAR);

    env::set_var(RTL_ENV_VAR, "1");
    assert!(apply_env_overrides(ResolvedConfig::default()).rtl);

    let rtl_base = ResolvedConfig {
        rtl: true,
        ..ResolvedConfig::default()
    };
    env::set_var(RTL_ENV_VAR, "false");
    assert!(!apply_env_overrides(rtl_base).rtl);
}

#[test]
#[serial(scrollkit_rtl)]
fn apply_env_overrides_ignores_unrecognized_values() {
    let _guard = EnvGuard::new(RTL_ENV_VAR);

    env::set_var(RTL_ENV_VAR, "sideways");
    let base = ResolvedConfig::default();
    assert_eq!(apply_env_overrides(base.clone()), base);
}

#[test]
#[serial(scrollkit_rtl)]
fn apply_env_overrides_no_change_when_env_var_not_set() {
    let _guard = EnvGuard::new(RTL_ENV_VAR);

    let base = ResolvedConfig::default();
    assert_eq!(
        apply_env_overrides(base.clone()),
        base,
        "Config should be unchanged when SCROLLKIT_RTL not set"
    );
}

#[test]
#[serial(scrollkit_config)]
fn load_config_with_precedence_prefers_explicit_path() {
    let _guard = EnvGuard::new(CONFIG_ENV_VAR);

    let temp_dir = env::temp_dir();
    let explicit_path = temp_dir.join("scrollkit_explicit.toml");
    fs::write(&explicit_path, "overscan = 7\n").expect("Failed to write explicit config");

    let env_path = temp_dir.join("scrollkit_env.toml");
    fs::write(&env_path, "overscan = 9\n").expect("Failed to write env config");
    env::set_var(CONFIG_ENV_VAR, env_path.to_str().unwrap());

    let config = load_config_with_precedence(Some(explicit_path.clone()))
        .unwrap()
        .unwrap();
    assert_eq!(
        config.overscan,
        Some(7),
        "Should use explicit path, not SCROLLKIT_CONFIG env var"
    );

    fs::remove_file(explicit_path).ok();
    fs::remove_file(env_path).ok();
}

#[test]
#[serial(scrollkit_config)]
fn load_config_with_precedence_uses_env_var_when_no_explicit_path() {
    let _guard = EnvGuard::new(CONFIG_ENV_VAR);

    let env_path = env::temp_dir().join("scrollkit_env_only.toml");
    fs::write(&env_path, "rtl = true\n").expect("Failed to write env config");
    env::set_var(CONFIG_ENV_VAR, env_path.to_str().unwrap());

    let config = load_config_with_precedence(None).unwrap().unwrap();
    assert_eq!(
        config.rtl,
        Some(true),
        "Should use SCROLLKIT_CONFIG when no explicit path"
    );

    fs::remove_file(env_path).ok();
}

#[test]
#[serial(scrollkit_config)]
fn load_config_with_precedence_rejects_empty_env_path() {
    let _guard = EnvGuard::new(CONFIG_ENV_VAR);

    env::set_var(CONFIG_ENV_VAR, "");
    assert!(matches!(
        load_config_with_precedence(None),
        Err(ConfigError::InvalidPath(_))
    ));
}
