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

use lap_time_sim::{GearStrategy, TorqueCurve, VehicleParams};

fn hot_hatch() -> VehicleParams {
    let mut params = VehicleParams::new("Hot Hatch");
    params.mass.mass = 1250.0;
    params.mass.cog_height = 0.48;
    params.mass.wheelbase = 2.55;
    params.mass.weight_distribution = 0.61;
    params.aero.frontal_area = 2.1;
    params.aero.drag_coefficient = 0.33;
    params.tyres.mu_x = 1.1;
    params.tyres.mu_y = 1.05;
    params.tyres.tyre_radius = 0.31;
    params.tyres.load_sensitivity = 1.1;
    params.powertrain.torque_curve = TorqueCurve::from_points(vec![
        (1000.0, 190.0),
        (2000.0, 300.0),
        (3500.0, 350.0),
        (5000.0, 340.0),
        (6500.0, 290.0),
        (7000.0, 260.0),
    ]);
    params.powertrain.gear_ratios = vec![3.36, 2.09, 1.47, 1.10, 0.87, 0.71];
    params.powertrain.final_drive_ratio = 4.06;
    params.powertrain.drivetrain_efficiency = 0.88;
    params.powertrain.min_rpm = 900.0;
    params.powertrain.max_rpm = 7000.0;
    params.brakes.max_brake_force = 18000.0;
    params.brakes.brake_bias = 0.65;
    params
}

#[test]
fn validated_params_always_give_metrics() {
    let params = hot_hatch();
    assert!(params.validate());

    let power_to_weight = params.power_to_weight_ratio();
    let top_speed = params.max_theoretical_speed();
    assert!(power_to_weight.is_finite() && power_to_weight > 0.0);
    assert!(top_speed.is_finite() && top_speed > 0.0);
    // 6500rpm at 290Nm is the best sample at ~197kW
    assert!((params.peak_power_watts() - 290.0 * 6500.0 * 2.0 * std::f64::consts::PI / 60.0).abs() < 1e-6);
}

#[test]
fn gear_choice_across_speed_range() {
    let params = hot_hatch();
    let selector = params.gear_selector();
    let mut velocity = 0.0;
    while velocity <= 90.0 {
        let choice = selector.choose(velocity);
        assert!(choice.gear >= 1 && choice.gear <= params.powertrain.num_gears());
        assert_eq!(params.powertrain.optimal_gear(velocity, params.tyres.tyre_radius, 5500.0), choice.gear);
        velocity += 0.5;
    }

    assert_eq!(selector.choose(0.0).strategy, GearStrategy::Degenerate);
    // Nothing reaches the band yet so the tallest gear above min rpm is used
    assert_eq!(selector.choose(5.0).gear, 3);
    assert_eq!(selector.choose(5.0).strategy, GearStrategy::UsableRange);
    for (velocity, gear) in [(15.0, 1), (25.0, 2), (40.0, 4), (55.0, 5), (70.0, 6)] {
        assert_eq!(selector.choose(velocity).gear, gear, "at {} m/s", velocity);
        assert_eq!(selector.choose(velocity).strategy, GearStrategy::OptimalBand);
    }
    assert_eq!(selector.choose(90.0).strategy, GearStrategy::AllOverRevving);
    assert_eq!(selector.select(90.0), params.powertrain.num_gears());
}

#[test]
fn chosen_gear_keeps_engine_in_usable_range_when_possible() {
    let params = hot_hatch();
    let selector = params.gear_selector();
    for velocity in [5.0, 15.0, 25.0, 40.0, 55.0, 70.0] {
        let gear = selector.select(velocity);
        let rpm = selector.engine_speed_in_gear(velocity, gear).unwrap();
        assert!(rpm >= params.powertrain.min_rpm && rpm <= params.powertrain.max_rpm,
                "gear {} at {} m/s gives {} rpm", gear, velocity, rpm);
    }
}

#[test]
fn invalid_params_still_answer_queries() {
    let mut params = hot_hatch();
    params.mass.mass = -1.0;
    params.powertrain.gear_ratios.clear();
    assert!(!params.validate());
    assert_eq!(params.gear_selector().select(30.0), 1);
    assert_eq!(params.torque_at(3500.0), 350.0);
}

#[test]
fn external_loader_can_populate_params_from_toml() {
    let params: VehicleParams = toml::from_str(r#"
        name = "Track Toy"

        [mass]
        mass = 650.0

        [powertrain]
        torque_curve = [[6000.0, 180.0], [2000.0, 150.0], [4000.0, 200.0]]
        gear_ratios = [3.0, 2.2, 1.7, 1.3]
        final_drive_ratio = 3.9
    "#).unwrap();

    assert_eq!(params.name, "Track Toy");
    assert_eq!(params.mass.mass, 650.0);
    assert_eq!(params.mass.wheelbase, VehicleParams::default().mass.wheelbase);
    assert_eq!(params.powertrain.torque_curve.points(),
               &[(2000.0, 150.0), (4000.0, 200.0), (6000.0, 180.0)]);
    assert_eq!(params.powertrain.torque_at(3000.0), 175.0);
    assert!(params.validate());

    let written = toml::to_string(&params).unwrap();
    let reloaded: VehicleParams = toml::from_str(&written).unwrap();
    assert_eq!(reloaded, params);
}
