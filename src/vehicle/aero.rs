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

pub const SEA_LEVEL_AIR_DENSITY: f64 = 1.225; // kg/m³

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AeroParams {
    pub frontal_area: f64, // m²
    pub drag_coefficient: f64,
    pub air_density: f64 // kg/m³
}

impl AeroParams {
    /// Aerodynamic drag force (N) at `speed` (m/s)
    pub fn drag_force_at(&self, speed: f64) -> f64 {
        0.5 * self.drag_coefficient * self.frontal_area * self.air_density * speed.powi(2)
    }
}

impl Default for AeroParams {
    fn default() -> Self {
        AeroParams {
            frontal_area: 2.0,
            drag_coefficient: 0.3,
            air_density: SEA_LEVEL_AIR_DENSITY
        }
    }
}
