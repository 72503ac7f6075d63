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

use lap_time_sim::{logging, LoggingSettings, VehicleParams};

#[test]
fn validation_diagnostics_reach_the_log_file() {
    let directory = std::env::temp_dir().join(format!("lap-time-sim-logs-{}", std::process::id()));
    let settings = LoggingSettings {
        directory: directory.to_string_lossy().into_owned(),
        filename: String::from("validation.log"),
        level: String::from("warn")
    };
    logging::init(&settings).unwrap();
    assert!(logging::init(&settings).is_err());

    let mut params = VehicleParams::new("Logged");
    params.mass.mass = -1.0;
    assert!(!params.validate());

    let mut warned = VehicleParams::new("Warned");
    warned.powertrain.torque_curve = vec![(1000.0, 100.0), (5000.0, 300.0)].into();
    warned.powertrain.gear_ratios = vec![1.0, 2.0];
    assert!(warned.validate());

    let log = std::fs::read_to_string(directory.join("validation.log")).unwrap();
    let _ = std::fs::remove_dir_all(&directory);
    assert!(log.contains("ERROR"));
    assert!(log.contains("Vehicle mass must be positive (got -1 kg)"));
    assert!(log.contains("WARN"));
    assert!(log.contains("Gear ratio 2 (2) should be less than gear 1 (1)"));
    assert!(!log.contains("Logging initialised"));
}
