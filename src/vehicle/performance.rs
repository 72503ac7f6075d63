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

use utils::units::{mps_to_kph, power_watts, watts_to_hp};
use crate::vehicle::VehicleParams;

impl VehicleParams {
    /// Highest power (W) found at any torque curve sample, never less than 0
    pub fn peak_power_watts(&self) -> f64 {
        self.powertrain.torque_curve.points().iter()
            .map(|(rpm, torque)| power_watts(*torque, *rpm))
            .fold(0.0, f64::max)
    }

    pub fn peak_power_hp(&self) -> f64 {
        watts_to_hp(self.peak_power_watts())
    }

    /// Peak power in horsepower per kg of vehicle mass
    pub fn power_to_weight_ratio(&self) -> f64 {
        if self.powertrain.torque_curve.is_empty() {
            return 0.0;
        }
        self.peak_power_hp() / self.mass.mass
    }

    /// Speed (m/s) at which aerodynamic drag absorbs all the power reaching the wheels.
    ///
    /// Solves `0.5 * rho * Cd * A * v³ = P` where `P` is peak power after drivetrain losses
    pub fn max_theoretical_speed(&self) -> f64 {
        let efficiency = self.powertrain.drivetrain_efficiency;
        let max_power = self.powertrain.torque_curve.points().iter()
            .map(|(rpm, torque)| power_watts(*torque, *rpm) * efficiency)
            .fold(0.0, f64::max);

        let v_cubed = (2.0 * max_power) / (self.aero.air_density * self.aero.drag_coefficient * self.aero.frontal_area);
        v_cubed.powf(1.0 / 3.0)
    }

    pub fn max_theoretical_speed_kph(&self) -> f64 {
        mps_to_kph(self.max_theoretical_speed())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use crate::vehicle::{TorqueCurve, VehicleParams};

    fn two_point_car() -> VehicleParams {
        let mut params = VehicleParams::new("Two Point");
        params.mass.mass = 1000.0;
        params.powertrain.torque_curve = TorqueCurve::from_points(vec![(1000.0, 100.0), (5000.0, 300.0)]);
        params.powertrain.gear_ratios = vec![3.0, 2.0, 1.0];
        params.powertrain.drivetrain_efficiency = 0.9;
        params.aero.air_density = 1.225;
        params.aero.drag_coefficient = 0.3;
        params.aero.frontal_area = 2.0;
        params
    }

    #[test]
    fn peak_power_comes_from_best_sample() {
        let params = two_point_car();
        let expected_watts = 300.0 * 5000.0 * 2.0 * std::f64::consts::PI / 60.0;
        assert_relative_eq!(params.peak_power_watts(), expected_watts, max_relative = 1e-12);
        assert_relative_eq!(params.peak_power_hp(), expected_watts / 745.7, max_relative = 1e-12);
    }

    #[test]
    fn power_to_weight_in_hp_per_kg() {
        let params = two_point_car();
        // ~157.08 kW is ~210.65 hp
        assert_relative_eq!(params.power_to_weight_ratio(), 0.2106472, max_relative = 1e-6);

        let mut heavier = params.clone();
        heavier.mass.mass = 2000.0;
        assert_relative_eq!(heavier.power_to_weight_ratio(), params.power_to_weight_ratio() / 2.0, max_relative = 1e-12);
    }

    #[test]
    fn max_speed_balances_drag_power() {
        let params = two_point_car();
        let v = params.max_theoretical_speed();
        let wheel_power = params.peak_power_watts() * 0.9;
        assert_relative_eq!(params.aero.drag_force_at(v) * v, wheel_power, max_relative = 1e-9);
        assert_relative_eq!(v, 72.728, max_relative = 1e-4);
        assert_relative_eq!(params.max_theoretical_speed_kph(), v * 3.6, max_relative = 1e-12);
    }

    #[test]
    fn more_drag_means_lower_top_speed() {
        let params = two_point_car();
        let mut draggy = params.clone();
        draggy.aero.drag_coefficient = 0.6;
        assert!(draggy.max_theoretical_speed() < params.max_theoretical_speed());
        assert_relative_eq!(draggy.max_theoretical_speed(), params.max_theoretical_speed() / 2f64.cbrt(), max_relative = 1e-12);
    }

    #[test]
    fn empty_curve_gives_zero_metrics() {
        let mut params = two_point_car();
        params.powertrain.torque_curve = TorqueCurve::new();
        assert_eq!(params.power_to_weight_ratio(), 0.0);
        assert_eq!(params.max_theoretical_speed(), 0.0);
        assert_eq!(params.peak_power_watts(), 0.0);
    }

    #[test]
    fn negative_torque_never_yields_negative_power() {
        let mut params = two_point_car();
        params.powertrain.torque_curve = TorqueCurve::from_points(vec![(1000.0, -50.0), (2000.0, -10.0)]);
        assert_eq!(params.peak_power_watts(), 0.0);
        assert_eq!(params.max_theoretical_speed(), 0.0);
    }
}
