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

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MassParams {
    /// Total vehicle mass including driver (kg)
    pub mass: f64,
    /// Height of the centre of gravity above the ground (m)
    pub cog_height: f64,
    pub wheelbase: f64,
    /// Fraction of the static weight carried by the front axle
    pub weight_distribution: f64
}

impl Default for MassParams {
    fn default() -> Self {
        MassParams {
            mass: 1500.0,
            cog_height: 0.5,
            wheelbase: 2.6,
            weight_distribution: 0.5
        }
    }
}
