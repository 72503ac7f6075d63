/*
 * Copyright (c):
 * 2025 zephyrj
 * zephyrj@protonmail.com
 *
 * This file is part of lap-time-sim.
 *
 * lap-time-sim is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * lap-time-sim is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with lap-time-sim. If not, see <https://www.gnu.org/licenses/>.
 */

use std::fs;
use std::path::Path;
use config::{Config, ConfigBuilder};
use config::builder::DefaultState;
use serde::{Deserialize, Serialize};
use tracing::warn;
use crate::error::Result;

pub const DEFAULT_BAND_LOW_FRACTION: f64 = 0.70;
pub const DEFAULT_BAND_HIGH_FRACTION: f64 = 0.90;
pub const DEFAULT_MIN_GEAR_SELECT_VELOCITY: f64 = 0.1; // m/s

/// Tunables for choosing a gear
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GearSelectionSettings {
    /// Bottom of the optimal operating band as a fraction of max RPM
    pub band_low_fraction: f64,
    /// Top of the optimal operating band as a fraction of max RPM
    pub band_high_fraction: f64,
    /// At or below this speed (m/s) 1st gear is always chosen
    pub min_velocity: f64
}

impl Default for GearSelectionSettings {
    fn default() -> Self {
        GearSelectionSettings {
            band_low_fraction: DEFAULT_BAND_LOW_FRACTION,
            band_high_fraction: DEFAULT_BAND_HIGH_FRACTION,
            min_velocity: DEFAULT_MIN_GEAR_SELECT_VELOCITY
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    pub directory: String,
    pub filename: String,
    /// One of trace, debug, info, warn or error
    pub level: String
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings {
            directory: String::from("."),
            filename: String::from("lap_time_sim.log"),
            level: String::from("info")
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelSettings {
    pub gear_selection: GearSelectionSettings,
    pub logging: LoggingSettings
}

impl ModelSettings {
    const BAND_LOW_FRACTION: &'static str = "gear_selection.band_low_fraction";
    const BAND_HIGH_FRACTION: &'static str = "gear_selection.band_high_fraction";
    const MIN_VELOCITY: &'static str = "gear_selection.min_velocity";
    const LOG_DIRECTORY: &'static str = "logging.directory";
    const LOG_FILENAME: &'static str = "logging.filename";
    const LOG_LEVEL: &'static str = "logging.level";
    const CONFIG_FILENAME: &'static str = "lap-time-sim-conf";
    const ENV_PREFIX: &'static str = "LAPSIM";

    fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>> {
        let defaults = ModelSettings::default();
        Ok(Config::builder()
            .set_default(ModelSettings::BAND_LOW_FRACTION, defaults.gear_selection.band_low_fraction)?
            .set_default(ModelSettings::BAND_HIGH_FRACTION, defaults.gear_selection.band_high_fraction)?
            .set_default(ModelSettings::MIN_VELOCITY, defaults.gear_selection.min_velocity)?
            .set_default(ModelSettings::LOG_DIRECTORY, defaults.logging.directory)?
            .set_default(ModelSettings::LOG_FILENAME, defaults.logging.filename)?
            .set_default(ModelSettings::LOG_LEVEL, defaults.logging.level)?)
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix(ModelSettings::ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
    }

    /// Load settings from `lap-time-sim-conf.*` in the working directory, if present,
    /// overridden by `LAPSIM__<SECTION>__<KEY>` environment variables.
    ///
    /// If those sources can't be read the built-in defaults are used
    pub fn load() -> Result<Self> {
        let built = ModelSettings::builder_with_defaults()?
            .add_source(config::File::with_name(ModelSettings::CONFIG_FILENAME).required(false))
            .add_source(ModelSettings::environment())
            .build()
            .and_then(|settings| settings.try_deserialize::<ModelSettings>());
        match built {
            Ok(settings) => Ok(settings),
            Err(e) => {
                warn!("Failed to load settings. {}", e.to_string());
                let settings = ModelSettings::builder_with_defaults()?.build()?;
                Ok(settings.try_deserialize()?)
            }
        }
    }

    /// Load settings from the file at `path`. Any key missing from the file takes its default
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let settings = ModelSettings::builder_with_defaults()?
            .add_source(config::File::from(path))
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    pub fn from_toml_str(toml_data: &str) -> Result<Self> {
        let settings = ModelSettings::builder_with_defaults()?
            .add_source(config::File::from_str(toml_data, config::FileFormat::Toml))
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Write to `lap-time-sim-conf.toml` in the working directory, where [`ModelSettings::load`] looks
    pub fn write(&self) -> Result<()> {
        self.write_to(Path::new(&format!("{}.toml", ModelSettings::CONFIG_FILENAME)))
    }
}
