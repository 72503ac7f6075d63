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

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::debug;
use utils::units::power_watts;

/// Engine torque (Nm) sampled against engine speed (RPM).
///
/// Samples are always held sorted by RPM with no duplicate RPM keys.
/// Lookups between samples are linearly interpolated and lookups outside
/// the sampled range are clamped to the nearest end sample.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<(f64, f64)>", into = "Vec<(f64, f64)>")]
pub struct TorqueCurve {
    data: Vec<(f64, f64)>
}

impl TorqueCurve {
    pub fn new() -> TorqueCurve {
        TorqueCurve { data: Vec::new() }
    }

    /// Build a curve from `(rpm, torque)` pairs in any order.
    /// If an RPM appears more than once the last pair given wins
    pub fn from_points(points: Vec<(f64, f64)>) -> TorqueCurve {
        let data = points.into_iter()
            .rev()
            .sorted_by(|(rpm_a, _), (rpm_b, _)| rpm_a.total_cmp(rpm_b))
            .coalesce(|first, second| {
                if first.0 == second.0 { Ok(first) } else { Err((first, second)) }
            })
            .collect();
        TorqueCurve { data }
    }

    /// Insert a sample, replacing the torque of an existing sample at the same RPM.
    /// Returns the replaced torque value if there was one
    pub fn insert(&mut self, rpm: f64, torque: f64) -> Option<f64> {
        match self.data.binary_search_by(|(k, _)| k.total_cmp(&rpm)) {
            Ok(idx) => Some(std::mem::replace(&mut self.data[idx].1, torque)),
            Err(idx) => {
                self.data.insert(idx, (rpm, torque));
                None
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.data
    }

    pub fn min_rpm(&self) -> Option<f64> {
        self.data.first().map(|(rpm, _)| *rpm)
    }

    pub fn max_rpm(&self) -> Option<f64> {
        self.data.last().map(|(rpm, _)| *rpm)
    }

    /// Torque (Nm) available at `rpm`.
    ///
    /// Negative RPM is treated as 0. An empty curve has no torque anywhere
    /// and returns 0.0
    pub fn torque_at(&self, rpm: f64) -> f64 {
        let (first, last) = match (self.data.first(), self.data.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => {
                debug!("Torque requested at {} rpm from an empty torque curve", rpm);
                return 0.0;
            }
        };

        let rpm = rpm.max(0.0);
        if rpm <= first.0 {
            return first.1;
        }
        if rpm >= last.0 {
            return last.1;
        }

        // First sample with a key strictly above rpm. The clamps above guarantee 0 < upper < len
        let upper = self.data.partition_point(|(k, _)| *k <= rpm);
        let (rpm1, torque1) = self.data[upper - 1];
        let (rpm2, torque2) = self.data[upper];

        let t = (rpm - rpm1) / (rpm2 - rpm1);
        torque1 + t * (torque2 - torque1)
    }

    /// The sample with the highest torque as `(rpm, torque)`
    pub fn peak_torque(&self) -> Option<(f64, f64)> {
        self.data.iter()
            .copied()
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
    }

    /// The sample producing the most power as `(rpm, watts)`.
    ///
    /// Power is only evaluated at the sample points, not between them
    pub fn peak_power(&self) -> Option<(f64, f64)> {
        self.data.iter()
            .map(|(rpm, torque)| (*rpm, power_watts(*torque, *rpm)))
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
    }
}

impl From<Vec<(f64, f64)>> for TorqueCurve {
    fn from(points: Vec<(f64, f64)>) -> Self {
        TorqueCurve::from_points(points)
    }
}

impl From<TorqueCurve> for Vec<(f64, f64)> {
    fn from(curve: TorqueCurve) -> Self {
        curve.data
    }
}
