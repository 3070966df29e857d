use crate::config::{Config, ConfigStore};

use power_tray_core::{
    IconPreference, Language, PersistedState, SchemeId, SettingsStore, Slot,
};

use std::fs;

const BALANCED: &str = "381b4222-f694-41f0-9685-ff5bb260df2e";
const SAVER: &str = "a1841308-3541-4fab-bc81-f71556f20b4a";

#[allow(clippy::unwrap_used)]
fn scheme(raw: &str) -> SchemeId {
    SchemeId::new(raw).unwrap()
}

/// WHAT: A missing config file yields defaults without creating it
/// WHY: Nothing is written until the user changes something
#[test]
#[allow(clippy::unwrap_used)]
fn given_missing_file_when_loading_then_defaults_and_no_file() {
    // Given: An empty directory
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    // When: Loading
    let config = Config::load_from(&path).unwrap();

    // Then: Defaults, still no file
    assert_eq!(config, Config::default());
    assert!(!path.exists());
    let state = config.to_state(Language::Spanish);
    assert!(state.slots.is_empty());
    assert_eq!(state.icon_preference, IconPreference::Auto);
    assert_eq!(state.language, Language::Spanish);
}

/// WHAT: Saved state loads back identically
/// WHY: Slots and preferences must survive a restart
#[test]
#[allow(clippy::unwrap_used)]
fn given_state_when_saved_and_loaded_then_identical() {
    // Given: Two bound slots, dark icons, Spanish
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");
    let mut state = PersistedState {
        icon_preference: IconPreference::Dark,
        language: Language::Spanish,
        ..PersistedState::default()
    };
    state.slots.set(Slot::A, Some(scheme(BALANCED)));
    state.slots.set(Slot::C, Some(scheme(SAVER)));

    // When: Saving then loading
    Config::from_state(&state).save_to(&path).unwrap();
    let loaded = Config::load_from(&path).unwrap().to_state(Language::English);

    // Then: Same state and no temp file left behind
    assert_eq!(loaded, state);
    assert!(!path.with_extension("toml.tmp").exists());
}

/// WHAT: Unknown keys are ignored and bad values fall back
/// WHY: Hand-edited files must never stop the tray from starting
#[test]
#[allow(clippy::unwrap_used)]
fn given_hand_edited_file_when_loading_then_tolerant() {
    // Given: Extra keys, a bad icon set, blank slot and unknown language
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        format!(
            "[slots]\na = \"{}\"\nb = \"   \"\nextra = 1\n\n[appearance]\nicon_set = \"sepia\"\nlanguage = \"klingon\"\n\n[future]\nflag = true\n",
            BALANCED.to_uppercase()
        ),
    )
    .unwrap();

    // When: Loading
    let state = Config::load_from(&path).unwrap().to_state(Language::English);

    // Then: Slot A bound (case-insensitive), B empty, Auto, detected language
    assert_eq!(state.slots.get(Slot::A), Some(&scheme(BALANCED)));
    assert_eq!(state.slots.get(Slot::B), None);
    assert_eq!(state.icon_preference, IconPreference::Auto);
    assert_eq!(state.language, Language::English);
}

/// WHAT: Icon set and language values are case-insensitive
/// WHY: Users type them by hand
#[test]
#[allow(clippy::unwrap_used)]
fn given_mixed_case_values_when_loading_then_recognised() {
    // Given: Upper-case values
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[appearance]\nicon_set = \"DARK\"\nlanguage = \"Español\"\n").unwrap();

    // When: Loading
    let state = Config::load_from(&path).unwrap().to_state(Language::English);

    // Then: Dark and Spanish
    assert_eq!(state.icon_preference, IconPreference::Dark);
    assert_eq!(state.language, Language::Spanish);
}

/// WHAT: Malformed TOML is reported as a config error
/// WHY: The caller logs it and starts with defaults
#[test]
#[allow(clippy::unwrap_used)]
fn given_malformed_file_when_loading_then_config_error() {
    // Given: Broken TOML
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[slots\na = ").unwrap();

    // When: Loading
    let result = Config::load_from(&path);

    // Then: Config error
    assert!(matches!(result, Err(crate::AppError::ConfigError { .. })));
}

/// WHAT: The settings store writes every saved state to disk
/// WHY: The controller persists through this store after each change
#[test]
#[allow(clippy::unwrap_used)]
fn given_config_store_when_saving_then_file_updated() {
    // Given: A store over a temp path
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let store = ConfigStore::new(Some(path.clone()));
    let mut state = PersistedState::default();
    state.slots.set(Slot::D, Some(scheme(SAVER)));

    // When: Saving
    store.save(&state);

    // Then: The file holds slot D and an explicit language
    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains(SAVER));
    assert!(contents.contains("language = \"en\""));
    assert_eq!(Config::load_from(&path).unwrap().to_state(Language::Spanish), state);
}
