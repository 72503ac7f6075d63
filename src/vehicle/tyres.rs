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
pub struct TyreParams {
    /// Longitudinal friction coefficient
    pub mu_x: f64,
    /// Lateral friction coefficient
    pub mu_y: f64,
    pub tyre_radius: f64, // m
    /// Exponent relating friction coefficient to vertical load.
    /// Racing slicks sit around 0.8-0.95, road tyres 1.0-1.2
    pub load_sensitivity: f64
}

impl Default for TyreParams {
    fn default() -> Self {
        TyreParams {
            mu_x: 1.0,
            mu_y: 1.0,
            tyre_radius: 0.3,
            load_sensitivity: 1.0
        }
    }
}
