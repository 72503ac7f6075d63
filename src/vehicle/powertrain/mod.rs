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

mod torque_curve;
mod gearing;

use serde::{Deserialize, Serialize};

pub use torque_curve::TorqueCurve;
pub use gearing::{GearChoice, GearSelector, GearStrategy};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PowertrainParams {
    pub torque_curve: TorqueCurve,
    /// Ratios indexed from 1st gear upwards. Expected to be strictly descending
    pub gear_ratios: Vec<f64>,
    pub final_drive_ratio: f64,
    /// Fraction of engine power delivered to the driven wheels
    pub drivetrain_efficiency: f64,
    /// Lowest usable engine speed (RPM)
    pub min_rpm: f64,
    /// Highest usable engine speed (RPM)
    pub max_rpm: f64
}

impl PowertrainParams {
    /// Engine torque (Nm) at `rpm`. See [`TorqueCurve::torque_at`]
    pub fn torque_at(&self, rpm: f64) -> f64 {
        self.torque_curve.torque_at(rpm)
    }

    /// 1-based index of the gear to use at `velocity` (m/s) on tyres of `tyre_radius` (m).
    ///
    /// `_target_rpm` is accepted for call compatibility but plays no part in the
    /// choice; the operating band is derived from `max_rpm`
    pub fn optimal_gear(&self, velocity: f64, tyre_radius: f64, _target_rpm: f64) -> usize {
        GearSelector::new(self, tyre_radius).select(velocity)
    }

    pub fn num_gears(&self) -> usize {
        self.gear_ratios.len()
    }
}

impl Default for PowertrainParams {
    fn default() -> Self {
        PowertrainParams {
            torque_curve: TorqueCurve::new(),
            gear_ratios: Vec::new(),
            final_drive_ratio: 3.5,
            drivetrain_efficiency: 0.9,
            min_rpm: 1000.0,
            max_rpm: 7000.0
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::vehicle::powertrain::{PowertrainParams, TorqueCurve};

    #[test]
    fn target_rpm_does_not_affect_gear_choice() {
        let powertrain = PowertrainParams {
            torque_curve: TorqueCurve::from_points(vec![(1000.0, 150.0), (7000.0, 250.0)]),
            gear_ratios: vec![3.5, 2.0, 1.3],
            final_drive_ratio: 4.0,
            drivetrain_efficiency: 0.9,
            min_rpm: 1000.0,
            max_rpm: 7000.0
        };
        for velocity in [0.05, 5.0, 12.0, 35.0, 100.0] {
            let reference = powertrain.optimal_gear(velocity, 0.3, 0.0);
            for target in [1000.0, 5000.0, 9000.0] {
                assert_eq!(powertrain.optimal_gear(velocity, 0.3, target), reference);
            }
        }
    }

    #[test]
    fn torque_lookup_delegates_to_curve() {
        let mut powertrain = PowertrainParams::default();
        assert_eq!(powertrain.torque_at(3000.0), 0.0);
        powertrain.torque_curve = TorqueCurve::from_points(vec![(1000.0, 100.0), (5000.0, 300.0)]);
        assert_eq!(powertrain.torque_at(3000.0), 200.0);
    }
}
