//! Layered configuration loading

use kinesim::config::{OutputFormat, SimulationConfig};
use std::path::PathBuf;

fn temp_config(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("kinesim-test-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_file_overrides_defaults() {
    let path = temp_config(
        "file_overrides.toml",
        "[engine]\nstep_size = 0.05\nchart_stride = 2\n\n[output]\nformat = \"json\"\n",
    );

    let config = SimulationConfig::load_with_env(Some(&path), Some(Default::default())).unwrap();
    assert_eq!(config.engine.step_size, 0.05);
    assert_eq!(config.engine.chart_stride, 2);
    assert_eq!(config.engine.max_frames, None);
    assert_eq!(config.output.format, OutputFormat::Json);
    assert_eq!(config.output.precision, 3);
}

#[test]
fn test_environment_beats_file() {
    let path = temp_config("env_beats_file.toml", "[output]\nprecision = 5\n");
    let env = [("KINESIM_OUTPUT__PRECISION".to_string(), "1".to_string())]
        .into_iter()
        .collect();

    let config = SimulationConfig::load_with_env(Some(&path), Some(env)).unwrap();
    assert_eq!(config.output.precision, 1);
}

#[test]
fn test_save_then_load() {
    let path = temp_config("saved.toml", "");
    let mut config = SimulationConfig::default();
    config.engine.landing_epsilon = 0.05;
    config.engine.max_frames = Some(1_000);
    config.output.format = OutputFormat::Csv;
    config.save(&path).unwrap();

    let loaded = SimulationConfig::load_with_env(Some(&path), Some(Default::default())).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_malformed_file_is_rejected() {
    let path = temp_config("malformed.toml", "[engine]\nstep_size = \"fast\"\n");
    assert!(SimulationConfig::load_with_env(Some(&path), Some(Default::default())).is_err());
}
