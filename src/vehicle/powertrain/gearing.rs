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

use tracing::{debug, trace};
use utils::units::{rad_per_sec_to_rpm, rpm_to_rad_per_sec};
use crate::settings::GearSelectionSettings;
use crate::vehicle::powertrain::PowertrainParams;

/// Which rule decided a gear choice
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GearStrategy {
    /// No gears, no usable tyre radius or the vehicle is effectively stationary
    Degenerate,
    /// Highest gear that puts the engine between the bottom of the optimal band and max RPM
    OptimalBand,
    /// Highest gear that puts the engine between min and max RPM
    UsableRange,
    /// Every gear over-revs so the tallest gear is used
    AllOverRevving,
    /// Every gear lugs so first gear is used
    AllLugging,
    /// Gears straddle the usable range; the one nearest the bottom of the optimal band
    ClosestToBand
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GearChoice {
    /// 1-based gear index
    pub gear: usize,
    pub strategy: GearStrategy
}

impl GearChoice {
    fn new(gear: usize, strategy: GearStrategy) -> GearChoice {
        GearChoice { gear, strategy }
    }
}

/// Gear and engine speed queries for a powertrain driving wheels of a given radius.
///
/// All gear arguments are 1-based to match how gears are numbered in a car.
pub struct GearSelector<'a> {
    powertrain: &'a PowertrainParams,
    tyre_radius: f64,
    settings: GearSelectionSettings
}

impl<'a> GearSelector<'a> {
    pub fn new(powertrain: &'a PowertrainParams, tyre_radius: f64) -> GearSelector<'a> {
        GearSelector::with_settings(powertrain, tyre_radius, GearSelectionSettings::default())
    }

    pub fn with_settings(powertrain: &'a PowertrainParams,
                         tyre_radius: f64,
                         settings: GearSelectionSettings) -> GearSelector<'a> {
        GearSelector { powertrain, tyre_radius, settings }
    }

    /// The `(low, high)` engine speeds bounding the optimal operating band
    pub fn optimal_band(&self) -> (f64, f64) {
        (self.powertrain.max_rpm * self.settings.band_low_fraction,
         self.powertrain.max_rpm * self.settings.band_high_fraction)
    }

    fn ratio_for_gear(&self, gear: usize) -> Option<f64> {
        match gear {
            0 => None,
            _ => self.powertrain.gear_ratios.get(gear - 1).copied()
        }
    }

    fn engine_speed_for_ratio(&self, velocity: f64, gear_ratio: f64) -> f64 {
        let wheel_rad_per_sec = velocity / self.tyre_radius;
        rad_per_sec_to_rpm(wheel_rad_per_sec * gear_ratio * self.powertrain.final_drive_ratio)
    }

    /// Engine RPM when travelling at `velocity` (m/s) in `gear`
    pub fn engine_speed_in_gear(&self, velocity: f64, gear: usize) -> Option<f64> {
        if self.tyre_radius <= 0.0 {
            return None;
        }
        let ratio = self.ratio_for_gear(gear)?;
        Some(self.engine_speed_for_ratio(velocity, ratio))
    }

    /// Road speed (m/s) when the engine turns at `engine_rpm` in `gear`
    pub fn vehicle_speed_at(&self, engine_rpm: f64, gear: usize) -> Option<f64> {
        let ratio = self.ratio_for_gear(gear)?;
        let overall_ratio = ratio * self.powertrain.final_drive_ratio;
        if overall_ratio <= 0.0 {
            return None;
        }
        Some(rpm_to_rad_per_sec(engine_rpm) * self.tyre_radius / overall_ratio)
    }

    /// Road speed (m/s) reached at max RPM in `gear`
    pub fn max_speed_in_gear(&self, gear: usize) -> Option<f64> {
        self.vehicle_speed_at(self.powertrain.max_rpm, gear)
    }

    /// Tractive force (N) at the contact patch when travelling at `velocity` in `gear`
    pub fn wheel_force(&self, velocity: f64, gear: usize) -> Option<f64> {
        let engine_rpm = self.engine_speed_in_gear(velocity, gear)?;
        let ratio = self.ratio_for_gear(gear)?;
        let engine_torque = self.powertrain.torque_at(engine_rpm);
        let wheel_torque = engine_torque
            * ratio
            * self.powertrain.final_drive_ratio
            * self.powertrain.drivetrain_efficiency;
        Some(wheel_torque / self.tyre_radius)
    }

    /// 1-based gear to use at `velocity` (m/s)
    pub fn select(&self, velocity: f64) -> usize {
        self.choose(velocity).gear
    }

    /// Choose a gear for `velocity` (m/s), reporting which rule made the choice.
    ///
    /// Rules are tried in order and the first that matches wins:
    /// 1. the highest gear with engine speed in `[band low, max rpm]`
    /// 2. the highest gear with engine speed in `[min rpm, max rpm]`
    /// 3. the top gear if every gear over-revs, 1st if every gear lugs,
    ///    otherwise the gear closest to the bottom of the band (lowest gear on a tie)
    pub fn choose(&self, velocity: f64) -> GearChoice {
        let gear_ratios = &self.powertrain.gear_ratios;
        if gear_ratios.is_empty() || self.tyre_radius <= 0.0 || velocity <= self.settings.min_velocity {
            debug!("Defaulting to 1st gear. gears={}, tyre radius={}, velocity={}",
                   gear_ratios.len(), self.tyre_radius, velocity);
            return GearChoice::new(1, GearStrategy::Degenerate);
        }

        let min_rpm = self.powertrain.min_rpm;
        let max_rpm = self.powertrain.max_rpm;
        let (band_low, _) = self.optimal_band();
        let rpms: Vec<f64> = gear_ratios.iter()
            .map(|ratio| self.engine_speed_for_ratio(velocity, *ratio))
            .collect();
        trace!("Engine speeds at {} m/s: {:?}", velocity, rpms);

        let choice = if let Some(idx) = rpms.iter().rposition(|rpm| *rpm >= band_low && *rpm <= max_rpm) {
            GearChoice::new(idx + 1, GearStrategy::OptimalBand)
        } else if let Some(idx) = rpms.iter().rposition(|rpm| *rpm >= min_rpm && *rpm <= max_rpm) {
            GearChoice::new(idx + 1, GearStrategy::UsableRange)
        } else if !rpms.iter().any(|rpm| *rpm <= max_rpm) {
            GearChoice::new(rpms.len(), GearStrategy::AllOverRevving)
        } else if !rpms.iter().any(|rpm| *rpm >= min_rpm) {
            GearChoice::new(1, GearStrategy::AllLugging)
        } else {
            let mut best_gear = 1;
            let mut best_distance = (rpms[0] - band_low).abs();
            for (idx, rpm) in rpms.iter().enumerate().skip(1) {
                let distance = (rpm - band_low).abs();
                if distance < best_distance {
                    best_distance = distance;
                    best_gear = idx + 1;
                }
            }
            GearChoice::new(best_gear, GearStrategy::ClosestToBand)
        };
        trace!("Selected gear {} at {} m/s via {:?}", choice.gear, velocity, choice.strategy);
        choice
    }
}
