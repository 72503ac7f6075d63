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

pub mod validation;
mod mass;
mod aero;
mod tyres;
mod brakes;
mod powertrain;
mod performance;

use serde::{Deserialize, Serialize};
use crate::error::Result;
use crate::settings::GearSelectionSettings;

pub use mass::MassParams;
pub use aero::{AeroParams, SEA_LEVEL_AIR_DENSITY};
pub use tyres::TyreParams;
pub use brakes::BrakeParams;
pub use powertrain::{GearChoice, GearSelector, GearStrategy, PowertrainParams, TorqueCurve};
pub use validation::{Diagnostic, ParameterError, Severity, ValidationReport};

pub const DEFAULT_VEHICLE_NAME: &'static str = "Unnamed Vehicle";

/// The physical description of a vehicle used by the lap time simulation.
///
/// A parameter set is populated once, checked with [`VehicleParams::validate`]
/// and then only read. None of the queries here modify it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleParams {
    pub name: String,
    pub mass: MassParams,
    pub aero: AeroParams,
    pub tyres: TyreParams,
    pub powertrain: PowertrainParams,
    pub brakes: BrakeParams
}

impl VehicleParams {
    pub fn new(name: impl Into<String>) -> VehicleParams {
        VehicleParams { name: name.into(), ..VehicleParams::default() }
    }

    /// Check every parameter without logging anything
    pub fn validation_report(&self) -> ValidationReport {
        validation::validate_params(self)
    }

    /// Check the parameters are usable for simulation.
    ///
    /// Problems are logged as they would be reported by [`VehicleParams::validation_report`];
    /// errors at error level and gear ratio warnings at warn level. Warnings don't
    /// make a parameter set invalid
    pub fn validate(&self) -> bool {
        let report = self.validation_report();
        report.log();
        report.is_valid()
    }

    /// As [`VehicleParams::validate`] but failing with the first fatal problem found
    pub fn ensure_valid(&self) -> Result<()> {
        let report = self.validation_report();
        report.log();
        match report.into_error() {
            None => Ok(()),
            Some(e) => Err(e.into())
        }
    }

    pub fn torque_at(&self, rpm: f64) -> f64 {
        self.powertrain.torque_at(rpm)
    }

    /// Gear queries for this vehicle's powertrain on its own tyres
    pub fn gear_selector(&self) -> GearSelector {
        GearSelector::new(&self.powertrain, self.tyres.tyre_radius)
    }

    pub fn gear_selector_with(&self, settings: GearSelectionSettings) -> GearSelector {
        GearSelector::with_settings(&self.powertrain, self.tyres.tyre_radius, settings)
    }
}

impl Default for VehicleParams {
    fn default() -> Self {
        VehicleParams {
            name: DEFAULT_VEHICLE_NAME.to_string(),
            mass: MassParams::default(),
            aero: AeroParams::default(),
            tyres: TyreParams::default(),
            powertrain: PowertrainParams::default(),
            brakes: BrakeParams::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ErrorKind;
    use crate::vehicle::{DEFAULT_VEHICLE_NAME, TorqueCurve, VehicleParams};

    #[test]
    fn default_params_have_placeholder_name() {
        assert_eq!(VehicleParams::default().name, DEFAULT_VEHICLE_NAME);
        assert_eq!(VehicleParams::new("Caterham 7").name, "Caterham 7");
    }

    #[test]
    fn default_params_need_a_powertrain() {
        let params = VehicleParams::default();
        assert!(!params.validate());
        let err = params.ensure_valid().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);
        assert_eq!(err.details(), "Engine torque curve cannot be empty");
    }

    #[test]
    fn populated_params_are_valid() {
        let mut params = VehicleParams::new("Hatchback");
        params.powertrain.torque_curve = TorqueCurve::from_points(vec![(1000.0, 120.0), (4000.0, 180.0), (6500.0, 150.0)]);
        params.powertrain.gear_ratios = vec![3.6, 2.1, 1.4, 1.0, 0.8];
        assert!(params.ensure_valid().is_ok());
        assert_eq!(params.torque_at(2500.0), 150.0);
        assert_eq!(params.gear_selector().select(0.0), 1);
    }
}
