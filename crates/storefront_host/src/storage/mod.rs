//! Local persistence contracts: raw preference storage and the typed shell settings schema.

pub mod prefs;
pub mod settings;
