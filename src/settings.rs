use std::path::PathBuf;

use eframe::egui;
use serde::{Deserialize, Serialize};

use crate::PolygonApp;

/// Returns the path to the settings file: `~/.config/polygon-transformer/settings.json`
fn settings_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("polygon-transformer");
    path.push("settings.json");
    path
}

/// Persisted display preferences.
///
/// Serialized as JSON to the platform config directory.
/// Fields use `#[serde(default)]` so that adding new settings
/// won't break existing config files. The polygon and its transform
/// always start fresh.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct AppSettings {
    pub show_controls: bool,
    pub line_width: f32,

    // Color (stored as u8 triples since Color32 isn't serde-friendly)
    pub color_r: u8,
    pub color_g: u8,
    pub color_b: u8,
    pub background_r: u8,
    pub background_g: u8,
    pub background_b: u8,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            show_controls: true,
            line_width: 2.0,

            color_r: 70,
            color_g: 130,
            color_b: 255,
            background_r: 20,
            background_g: 20,
            background_b: 24,
        }
    }
}

impl AppSettings {
    /// Load settings from disk, falling back to defaults on any error.
    pub fn load() -> Self {
        let path = settings_path();
        match std::fs::read_to_string(&path) {
            Ok(contents) => match Self::parse(&contents) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Failed to parse settings ({}), using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                log::info!("No settings file found ({}), using defaults", e);
                Self::default()
            }
        }
    }

    fn parse(contents: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(contents)
    }

    /// Save settings to disk as pretty JSON.
    pub fn save(&self) {
        let path = settings_path();
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                log::warn!("Failed to create config directory: {}", e);
                return;
            }
        }
        match serde_json::to_string_pretty(self) {
            Ok(json) => match std::fs::write(&path, json) {
                Ok(()) => log::info!("Saved settings to {}", path.display()),
                Err(e) => log::warn!("Failed to write settings: {}", e),
            },
            Err(e) => {
                log::warn!("Failed to serialize settings: {}", e);
            }
        }
    }

    /// Extract current settings from the running application.
    pub fn from_app(app: &PolygonApp) -> Self {
        let display = &app.session.surface().settings;

        Self {
            show_controls: app.show_controls,
            line_width: display.line_width,

            color_r: display.color.r(),
            color_g: display.color.g(),
            color_b: display.color.b(),
            background_r: display.background.r(),
            background_g: display.background.g(),
            background_b: display.background.b(),
        }
    }

    /// Apply loaded settings to the running application.
    pub fn apply(&self, app: &mut PolygonApp) {
        app.show_controls = self.show_controls;

        let display = &mut app.session.surface_mut().settings;
        display.line_width = self.line_width;
        display.color = egui::Color32::from_rgb(self.color_r, self.color_g, self.color_b);
        display.background =
            egui::Color32::from_rgb(self.background_r, self.background_g, self.background_b);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings = AppSettings::parse(r#"{ "line_width": 3.5 }"#).unwrap();
        assert_eq!(settings.line_width, 3.5);
        assert!(settings.show_controls);
        assert_eq!(settings.color_b, 255);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let settings = AppSettings::parse(r#"{ "side_count": 12, "show_controls": false }"#).unwrap();
        assert!(!settings.show_controls);
        assert_eq!(settings.line_width, AppSettings::default().line_width);
    }

    #[test]
    fn test_json_round_trip() {
        let settings = AppSettings {
            line_width: 1.25,
            color_r: 1,
            background_b: 9,
            ..AppSettings::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert_eq!(AppSettings::parse(&json).unwrap(), settings);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(AppSettings::parse("not json").is_err());
    }
}
