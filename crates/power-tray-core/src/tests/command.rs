use crate::{
    ButtonLidAction, Command, CoreError, IconPreference, Language, PowerSetting, PowerSource,
    Slot,
    tests::doubles::{SCHEME_1, SCHEME_2, id},
};

use std::str::FromStr;

/// WHAT: Every command kind survives the trip through a menu id
/// WHY: The tray toolkit only carries menu ids back to the controller
#[test]
#[allow(clippy::unwrap_used)]
fn given_each_command_when_encoded_and_parsed_then_identical() {
    // Given: One command per variant
    let commands = vec![
        Command::Cycle,
        Command::AssignSlot {
            slot: Slot::C,
            id: id(SCHEME_1),
        },
        Command::ClearSlot { slot: Slot::D },
        Command::SwitchTo { id: id(SCHEME_2) },
        Command::SetPreference {
            preference: IconPreference::Dark,
        },
        Command::SetLanguage {
            language: Language::Spanish,
        },
        Command::SetAction {
            scheme: id(SCHEME_1),
            setting: PowerSetting::LidClose,
            source: PowerSource::Dc,
            action: ButtonLidAction::Hibernate,
        },
        Command::SetTimeout {
            scheme: id(SCHEME_2),
            setting: PowerSetting::SleepAfter,
            source: PowerSource::Ac,
            seconds: 1800,
        },
        Command::PromptTimeout {
            scheme: id(SCHEME_1),
            setting: PowerSetting::ConsoleLockDisplayOff,
            source: PowerSource::Dc,
        },
        Command::OpenPowerOptions,
        Command::Exit,
    ];

    for command in commands {
        // When: Encoding then parsing
        let parsed = Command::from_str(&command.menu_id()).unwrap();

        // Then: Same command
        assert_eq!(parsed, command);
    }
}

/// WHAT: Setting ids keep the scheme id last
/// WHY: Scheme ids are never split on the field separator
#[test]
fn given_set_timeout_when_encoding_then_scheme_is_last_field() {
    let command = Command::SetTimeout {
        scheme: id(SCHEME_1),
        setting: PowerSetting::DisplayOff,
        source: PowerSource::Ac,
        seconds: 300,
    };
    assert!(command.menu_id().ends_with(SCHEME_1));
    assert!(command.menu_id().starts_with("timeout:"));
}

/// WHAT: The custom timeout id is custom:<setting>:<source>:<scheme>
/// WHY: Scheme ids are never split on the field separator
#[test]
fn given_prompt_timeout_when_encoding_then_scheme_is_last_field() {
    let command = Command::PromptTimeout {
        scheme: id(SCHEME_2),
        setting: PowerSetting::HibernateAfter,
        source: PowerSource::Ac,
    };
    assert_eq!(
        command.menu_id(),
        format!("custom:hibernate-after:ac:{}", SCHEME_2)
    );
}

/// WHAT: Malformed or mismatched ids are rejected with UnknownCommand
/// WHY: A stale menu event must never run the wrong command
#[test]
fn given_bad_ids_when_parsing_then_unknown_command() {
    let bad = [
        "".to_string(),
        "cycle:extra".to_string(),
        "assign:E:x".to_string(),
        "assign:A:".to_string(),
        "pref:sepia".to_string(),
        format!("action:lid:ac:9:{}", SCHEME_1),
        // Action value on a timeout setting
        format!("action:display-off:ac:1:{}", SCHEME_1),
        format!("timeout:lid:ac:60:{}", SCHEME_1),
        format!("timeout:sleep-after:xx:60:{}", SCHEME_1),
        // Custom entry on a button setting, or missing scheme
        format!("custom:power-button:ac:{}", SCHEME_1),
        "custom:display-off:ac:".to_string(),
    ];

    for raw in bad {
        let result = Command::from_str(&raw);
        assert!(
            matches!(result, Err(CoreError::UnknownCommand { ref id, .. }) if *id == raw),
            "{:?} should be rejected",
            raw
        );
    }
}

/// WHAT: Setting keys round-trip and cover the full catalogue
/// WHY: Menu ids and logs use the short keys
#[test]
fn given_all_settings_when_round_tripping_keys_then_identical() {
    for setting in PowerSetting::ALL {
        assert_eq!(PowerSetting::from_key(setting.key()), Some(setting));
    }
    assert_eq!(
        PowerSetting::ACTIONS.len()
            + PowerSetting::DISPLAY_TIMEOUTS.len()
            + PowerSetting::SLEEP_TIMEOUTS.len(),
        PowerSetting::ALL.len()
    );
}
