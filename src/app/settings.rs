use shared::FieldSettings;
use web_sys::console;

use super::App;

const EFFECTS_KEY: &str = "glimmer_effects";
const SETTINGS_KEY: &str = "glimmer_settings";

/// Reads the stored preference and tuning overrides. Overrides that fail to
/// parse or validate are ignored in favour of the defaults.
pub fn load_settings() -> FieldSettings {
    let mut settings = match App::kv_get(SETTINGS_KEY) {
        Some(json) => FieldSettings::from_json(&json).unwrap_or_else(|settings_error| {
            console::warn_1(
                &format!(
                    "glimmer: ignoring stored settings, {}",
                    settings_error.0
                )
                .into(),
            );
            FieldSettings::default()
        }),
        None => FieldSettings::default(),
    };

    if effects_disabled() {
        settings.enabled = false;
    }

    settings
}

pub fn effects_disabled() -> bool {
    App::kv_get(EFFECTS_KEY).as_deref() == Some("off")
}

pub fn save_effects_enabled(enabled: bool) {
    App::kv_set(EFFECTS_KEY, if enabled { "on" } else { "off" });
}
