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

pub mod error;
pub mod settings;
pub mod logging;
pub mod vehicle;

pub use error::{Error, ErrorKind, Result};
pub use settings::{GearSelectionSettings, LoggingSettings, ModelSettings};
pub use vehicle::{
    AeroParams,
    BrakeParams,
    GearChoice,
    GearSelector,
    GearStrategy,
    MassParams,
    PowertrainParams,
    TorqueCurve,
    TyreParams,
    ValidationReport,
    VehicleParams
};
