//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use std::fs;
use std::path::PathBuf;
use ndcube::config::AppConfig;
use ndcube_core::ProjectionKind;
use serial_test::serial;

/// Fresh config directory under the system temp dir
fn temp_config_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("ndcube_config_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("NDC_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Test From Env");
    std::env::remove_var("NDC_WINDOW__TITLE");
}

#[test]
#[serial]
fn test_env_override_nested_number() {
    std::env::set_var("NDC_HYPERCUBE__INITIAL_DIMENSION", "6");
    let config = AppConfig::load().unwrap();
    std::env::remove_var("NDC_HYPERCUBE__INITIAL_DIMENSION");

    assert_eq!(config.hypercube.initial_dimension, 6);
    assert_eq!(config.hypercube.to_view_params().unwrap().dimension(), 6);
}

#[test]
#[serial]
fn test_default_file_matches_builtin_defaults() {
    let config = AppConfig::load().unwrap();
    let builtin = AppConfig::default();

    assert_eq!(config.window.title, builtin.window.title);
    assert_eq!(config.window.width, builtin.window.width);
    assert_eq!(config.camera.distance, builtin.camera.distance);
    assert_eq!(config.controls.rotate_speed, builtin.controls.rotate_speed);
    assert_eq!(config.hypercube.initial_dimension, builtin.hypercube.initial_dimension);
    assert_eq!(config.hypercube.max_dimension, builtin.hypercube.max_dimension);
    assert_eq!(config.hypercube.size, builtin.hypercube.size);
    assert_eq!(config.hypercube.schedule, builtin.hypercube.schedule);
    assert_eq!(config.hypercube.projection, builtin.hypercube.projection);
    assert_eq!(config.hypercube.oblique_angle, builtin.hypercube.oblique_angle);
    assert_eq!(config.hypercube.perspective_distance, builtin.hypercube.perspective_distance);
    assert_eq!(config.hypercube.spin, builtin.hypercube.spin);
    assert_eq!(config.hypercube.spin_speed, builtin.hypercube.spin_speed);
    assert_eq!(config.hypercube.distortion_speed, builtin.hypercube.distortion_speed);
    assert_eq!(config.rendering.line_opacity, builtin.rendering.line_opacity);
}

#[test]
#[serial]
fn test_user_file_overrides_default_file() {
    let dir = temp_config_dir("layers");
    fs::write(
        dir.join("default.toml"),
        "[hypercube]\ninitial_dimension = 4\nspeed = 1.5\n",
    )
    .unwrap();
    fs::write(
        dir.join("user.toml"),
        "[hypercube]\ninitial_dimension = 7\nprojection = \"perspective\"\n",
    )
    .unwrap();

    let config = AppConfig::load_from(&dir).unwrap();
    assert_eq!(config.hypercube.initial_dimension, 7);
    assert_eq!(config.hypercube.speed, 1.5);
    assert_eq!(config.hypercube.projection, ProjectionKind::Perspective);
    // Untouched sections keep their defaults
    assert_eq!(config.window.height, 720);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
#[serial]
fn test_env_overrides_user_file() {
    let dir = temp_config_dir("env");
    fs::write(dir.join("user.toml"), "[hypercube]\nmax_dimension = 8\n").unwrap();

    std::env::set_var("NDC_HYPERCUBE__MAX_DIMENSION", "12");
    let config = AppConfig::load_from(&dir);
    std::env::remove_var("NDC_HYPERCUBE__MAX_DIMENSION");

    assert_eq!(config.unwrap().hypercube.max_dimension, 12);
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
#[serial]
fn test_missing_directory_uses_defaults() {
    let dir = std::env::temp_dir().join("ndcube_config_does_not_exist");
    let config = AppConfig::load_from(&dir).unwrap();
    assert_eq!(config.hypercube.initial_dimension, 3);
    assert_eq!(config.debug.log_level, "info");
}

#[test]
#[serial]
fn test_wrong_type_is_an_error() {
    let dir = temp_config_dir("bad");
    fs::write(dir.join("user.toml"), "[hypercube]\nsize = \"big\"\n").unwrap();

    let err = AppConfig::load_from(&dir).unwrap_err();
    assert!(err.to_string().starts_with("Configuration error:"));

    fs::remove_dir_all(&dir).unwrap();
}
