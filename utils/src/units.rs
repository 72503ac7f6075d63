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

use std::f64::consts::PI;

pub const WATTS_PER_HP: f64 = 745.7;

pub fn rpm_to_rad_per_sec(rpm: f64) -> f64 {
    rpm * 2.0 * PI / 60.0
}

pub fn rad_per_sec_to_rpm(rad_per_sec: f64) -> f64 {
    rad_per_sec * 60.0 / (2.0 * PI)
}

/// Power in watts produced by `torque` (Nm) at `rpm`
pub fn power_watts(torque: f64, rpm: f64) -> f64 {
    torque * rpm_to_rad_per_sec(rpm)
}

pub fn watts_to_hp(power_watts: f64) -> f64 {
    power_watts / WATTS_PER_HP
}

pub fn mps_to_kph(speed_mps: f64) -> f64 {
    speed_mps * 3.6
}
