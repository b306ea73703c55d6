//! Shell settings hydration and persistence over the injected prefs store.

use leptos::logging;
use storefront_host::{load_settings_with, save_settings_with, PrefsError, PrefsStore, ShellSettings};

/// Status line shown when stored settings cannot be read.
pub const SETTINGS_UNAVAILABLE_STATUS: &str = "Settings storage is unavailable; using defaults.";
/// Status line shown when a settings change could not be written.
pub const SETTINGS_SESSION_ONLY_STATUS: &str =
    "Settings couldn\u{2019}t be saved; changes apply to this session only.";

/// Boot-time settings plus an optional status line for the settings panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootSettings {
    pub settings: ShellSettings,
    pub status: Option<String>,
}

/// Loads settings for boot hydration.
///
/// Corrupt values fall back to defaults silently; an unreadable store also sets a status line.
pub async fn load_boot_settings<S: PrefsStore + ?Sized>(store: &S) -> BootSettings {
    match load_settings_with(store).await {
        Ok(settings) => BootSettings {
            settings,
            status: None,
        },
        Err(err @ PrefsError::Decode(_)) => {
            logging::warn!("stored settings ignored: {err}");
            BootSettings {
                settings: ShellSettings::default(),
                status: None,
            }
        }
        Err(err) => {
            logging::warn!("settings load failed: {err}");
            BootSettings {
                settings: ShellSettings::default(),
                status: Some(SETTINGS_UNAVAILABLE_STATUS.to_string()),
            }
        }
    }
}

/// Writes settings, returning the status line to show when the write fails.
pub async fn persist_settings<S: PrefsStore + ?Sized>(
    store: &S,
    settings: &ShellSettings,
) -> Result<(), String> {
    save_settings_with(store, settings).await.map_err(|err| {
        logging::warn!("persist settings failed: {err}");
        SETTINGS_SESSION_ONLY_STATUS.to_string()
    })
}
