use crate::{AppError, app::parse_menu_id};

use power_tray_core::{Command, CoreError, PowerSetting, PowerSource, SchemeId};

const BALANCED: &str = "381b4222-f694-41f0-9685-ff5bb260df2e";

/// WHAT: A known menu id decodes to its command
/// WHY: Every tray click goes through this decoder
#[test]
#[allow(clippy::unwrap_used)]
fn given_custom_timeout_id_when_parsing_then_prompt_command() {
    // Given: The id of a Custom… entry
    let id = format!("custom:display-off:ac:{}", BALANCED);

    // When: Parsing
    let command = parse_menu_id(&id).unwrap();

    // Then: The prompt command for that scheme and source
    assert_eq!(
        command,
        Command::PromptTimeout {
            scheme: SchemeId::new(BALANCED).unwrap(),
            setting: PowerSetting::DisplayOff,
            source: PowerSource::Ac,
        }
    );
}

/// WHAT: Unknown ids surface as a core error wrapped with its location
/// WHY: Stale menu events are logged and ignored, never dispatched
#[test]
fn given_unknown_id_when_parsing_then_core_unknown_command() {
    // When: Parsing an id no menu produces
    let result = parse_menu_id("rename:A");

    // Then: AppError::Core carrying UnknownCommand
    assert!(matches!(
        result,
        Err(AppError::Core {
            source: CoreError::UnknownCommand { ref id, .. },
            ..
        }) if id == "rename:A"
    ));
}
