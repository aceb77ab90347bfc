//! Config file behavior across app restarts.

use bloom_core::config::{Config, ConfigManager};
use tempfile::TempDir;

#[test]
fn first_run_writes_defaults_to_disk() {
    let dir = TempDir::new().unwrap();
    let manager = ConfigManager::new(dir.path()).unwrap();

    assert_eq!(manager.config.theme_index, 0);
    assert_eq!(manager.config.quote_interval_secs, 4);
    assert_eq!(manager.config.reply_delay_ms, 1500);
    assert!(manager.config.backend_url.is_none());

    let written = std::fs::read_to_string(dir.path().join("config.toml")).unwrap();
    assert!(written.contains("theme_index"));
}

#[test]
fn theme_choice_survives_a_restart() {
    let dir = TempDir::new().unwrap();
    {
        let mut manager = ConfigManager::new(dir.path()).unwrap();
        manager.update_theme(1).unwrap();
    }
    let manager = ConfigManager::new(dir.path()).unwrap();
    assert_eq!(manager.config.theme_index, 1);
}

#[test]
fn corrupt_config_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), "this is {not} toml").unwrap();

    let manager = ConfigManager::new(dir.path()).unwrap();
    assert_eq!(manager.config.theme_index, Config::default().theme_index);
}

#[test]
fn backend_url_in_config_enables_the_relay() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "theme_index = 0\nbackend_url = \"http://localhost:9999\"\n",
    )
    .unwrap();

    let manager = ConfigManager::new(dir.path()).unwrap();
    assert_eq!(
        manager.config.backend_url.as_deref(),
        Some("http://localhost:9999")
    );
}
