//! Render option handling
//!
//! This module contains the render options carried into the conversion
//! plan, and the loading of their defaults from the YAML settings file.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;
use serde_yaml::from_str;

use crate::errors::{file_operation_error, settings_parsing_error, Result};
use crate::utils::find_project_folder;

/// Render options applied to every planned conversion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    /// Brightness multiplier
    pub brightness: f32,
    /// Saturation multiplier
    pub saturation: f32,
    /// Tint shift
    pub tint: f32,
}

/// Render defaults read from the settings file
///
/// Every field is optional in the file; missing fields fall back to the
/// neutral values.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct RenderDefaults {
    #[serde(default = "default_brightness")]
    pub brightness: f32,
    #[serde(default = "default_saturation")]
    pub saturation: f32,
    #[serde(default = "default_tint")]
    pub tint: f32,
}

fn default_brightness() -> f32 {
    1.0
}

fn default_saturation() -> f32 {
    1.0
}

fn default_tint() -> f32 {
    0.0
}

impl Default for RenderDefaults {
    fn default() -> Self {
        RenderDefaults {
            brightness: default_brightness(),
            saturation: default_saturation(),
            tint: default_tint(),
        }
    }
}

impl RenderOptions {
    /// Builds the effective options from the defaults and explicit flags
    ///
    /// A flag given on the command line wins over the settings file; a
    /// missing flag falls back to the file value.
    pub fn merge(
        defaults: RenderDefaults,
        brightness: Option<f32>,
        saturation: Option<f32>,
        tint: Option<f32>,
    ) -> RenderOptions {
        RenderOptions {
            brightness: brightness.unwrap_or(defaults.brightness),
            saturation: saturation.unwrap_or(defaults.saturation),
            tint: tint.unwrap_or(defaults.tint),
        }
    }
}

/// Loads render defaults from a settings file
///
/// A missing file is not an error; the neutral defaults apply.
///
/// # Errors
/// Returns an error if the file exists but cannot be read or parsed
pub fn load_defaults(file: &Path) -> Result<RenderDefaults> {
    if !file.exists() {
        debug!(
            "Settings file {} not found, using neutral defaults",
            file.display()
        );
        return Ok(RenderDefaults::default());
    }

    let content = fs::read_to_string(file)
        .map_err(|e| file_operation_error(e, file.to_path_buf(), "read settings"))?;

    from_str(&content).map_err(|e| {
        settings_parsing_error(
            e,
            &format!("Failed to parse settings file {}", file.display()),
        )
    })
}

/// Resolves the settings file location
///
/// A path that exists as given is used directly; otherwise it is looked
/// up in the platform configuration directory for the application.
///
/// # Errors
/// Returns an error if the configuration directory cannot be determined
pub fn locate_settings(settings: PathBuf) -> Result<PathBuf> {
    if settings.exists() {
        Ok(settings)
    } else {
        let folder = find_project_folder()?;
        Ok(folder.config_dir().join(settings))
    }
}
