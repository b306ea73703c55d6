//! Typed shell settings persisted under one fixed preference key.

use serde::{Deserialize, Serialize};

use super::prefs::{load_pref_with, save_pref_with, PrefsError, PrefsStore};

/// Preference key holding the serialized [`ShellSettings`].
pub const SETTINGS_KEY: &str = "storefront_os.settings.v1";
/// Smallest accepted UI scale percentage.
pub const UI_SCALE_MIN: u16 = 90;
/// Largest accepted UI scale percentage.
pub const UI_SCALE_MAX: u16 = 120;
/// UI scale used when nothing valid is stored.
pub const UI_SCALE_DEFAULT: u16 = 100;

/// Reduced-motion preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReduceMotion {
    /// Follow the host's `prefers-reduced-motion` media query.
    #[default]
    System,
    /// Always suppress transition animations.
    On,
    /// Always play transition animations.
    Off,
}

impl ReduceMotion {
    /// Resolves the preference against the host's reported reduced-motion setting.
    pub const fn resolve(self, system_prefers_reduced: bool) -> bool {
        match self {
            Self::System => system_prefers_reduced,
            Self::On => true,
            Self::Off => false,
        }
    }

    /// Stable token used by settings controls.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::On => "on",
            Self::Off => "off",
        }
    }

    /// Parses a settings-control token, returning `None` for unknown tokens.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "system" => Some(Self::System),
            "on" => Some(Self::On),
            "off" => Some(Self::Off),
            _ => None,
        }
    }
}

/// Desktop shell display settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShellSettings {
    /// UI scale percentage in `UI_SCALE_MIN..=UI_SCALE_MAX`.
    pub ui_scale: u16,
    /// Reduced-motion preference.
    pub reduce_motion: ReduceMotion,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            ui_scale: UI_SCALE_DEFAULT,
            reduce_motion: ReduceMotion::System,
        }
    }
}

impl ShellSettings {
    /// Returns a copy with the UI scale clamped into the accepted range.
    pub fn normalized(self) -> Self {
        Self {
            ui_scale: self.ui_scale.clamp(UI_SCALE_MIN, UI_SCALE_MAX),
            ..self
        }
    }
}

/// Loads shell settings, returning defaults when nothing is stored.
///
/// # Errors
///
/// Returns an error when storage is unreadable or the stored value is corrupt. Callers are
/// expected to log and fall back to [`ShellSettings::default`].
pub async fn load_settings_with<S: PrefsStore + ?Sized>(
    store: &S,
) -> Result<ShellSettings, PrefsError> {
    let stored = load_pref_with::<S, ShellSettings>(store, SETTINGS_KEY).await?;
    Ok(stored.map(ShellSettings::normalized).unwrap_or_default())
}

/// Persists shell settings.
///
/// # Errors
///
/// Returns an error when encoding or the store write fails.
pub async fn save_settings_with<S: PrefsStore + ?Sized>(
    store: &S,
    settings: &ShellSettings,
) -> Result<(), PrefsError> {
    save_pref_with(store, SETTINGS_KEY, &settings.normalized()).await
}
