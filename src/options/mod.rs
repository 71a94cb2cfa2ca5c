//! Centralized flight and camera options with TOML preset support.
//!
//! All tweakable settings (camera projection, flight model, keybindings) are
//! consolidated here. Options serialize to/from TOML so presets can live in
//! `assets/presets/`.

mod camera;
mod flight;

use std::path::Path;

pub use camera::CameraOptions;
pub use flight::FlightOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::VoloError;
use crate::input::KeyBindings;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[flight]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera projection and look-input parameters.
    pub camera: CameraOptions,
    /// Flight-model constants.
    pub flight: FlightOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeyBindings,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, VoloError> {
        toml::from_str(content)
            .map_err(|e| VoloError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, VoloError> {
        let content = std::fs::read_to_string(path).map_err(VoloError::Io)?;
        let options = Self::from_toml_str(&content)?;
        log::info!("loaded options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), VoloError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| VoloError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(VoloError::Io)?;
        }
        std::fs::write(path, content).map_err(VoloError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::FlightCommand;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let opts = Options::from_toml_str(
            r"
[flight]
min_yaw = -180.0
max_yaw = 0.0
",
        )
        .unwrap();
        assert_eq!(opts.flight.min_yaw, -180.0);
        assert_eq!(opts.flight.max_yaw, 0.0);
        // Everything else should be default
        assert_eq!(opts.flight.takeoff_speed, 1.0);
        assert_eq!(opts.camera.zfar, 500.0);
    }

    #[test]
    fn bad_toml_is_an_options_error() {
        let err = Options::from_toml_str("[flight]\nmax_speed = \"fast\"")
            .unwrap_err();
        assert!(matches!(err, VoloError::OptionsParse(_)));
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup("Space"),
            Some(FlightCommand::TakeOff)
        );
        assert_eq!(opts.keybindings.lookup("KeyL"), Some(FlightCommand::Land));
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn save_load_and_list_presets() {
        let dir = std::env::temp_dir()
            .join(format!("volo-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.flight.max_speed = 5.0;

        opts.save(&dir.join("fast.toml")).unwrap();
        Options::default().save(&dir.join("calm.toml")).unwrap();

        assert_eq!(Options::load(&dir.join("fast.toml")).unwrap(), opts);
        assert_eq!(Options::list_presets(&dir), vec!["calm", "fast"]);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(props.contains_key("flight"));
        assert!(!props.contains_key("keybindings"));

        let flight = &props["flight"]["properties"];
        assert!(flight.get("max_speed").is_some());
        assert!(flight.get("min_yaw").is_some());
        assert!(flight.get("start_position").is_none());
        assert!(flight.get("position_scale").is_none());
    }
}
