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

use std::fmt::{Display, Formatter};
use itertools::Itertools;
use thiserror::Error;
use tracing::{error, warn};
use utils::numeric::{is_in_range, is_non_negative, is_positive, is_positive_fraction, is_valid_fraction};
use crate::vehicle::{AeroParams, BrakeParams, MassParams, PowertrainParams, TyreParams, VehicleParams};

pub const MAX_LOAD_SENSITIVITY: f64 = 1.5;

/// A parameter value that makes a vehicle unusable for simulation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    #[error("Vehicle mass must be positive (got {0} kg)")]
    NonPositiveMass(f64),
    #[error("COG height must be non-negative (got {0} m)")]
    NegativeCogHeight(f64),
    #[error("Wheelbase must be positive (got {0} m)")]
    NonPositiveWheelbase(f64),
    #[error("Weight distribution must be between 0 and 1 (got {0})")]
    WeightDistributionOutOfRange(f64),
    #[error("Frontal area must be positive (got {0} m²)")]
    NonPositiveFrontalArea(f64),
    #[error("Air density must be positive (got {0} kg/m³)")]
    NonPositiveAirDensity(f64),
    #[error("Tyre friction coefficients must be positive (mu_x={mu_x}, mu_y={mu_y})")]
    NonPositiveFriction { mu_x: f64, mu_y: f64 },
    #[error("Tyre radius must be positive (got {0} m)")]
    NonPositiveTyreRadius(f64),
    #[error("Load sensitivity must be between 0.0 and 1.5 (got {0}). Typical values: racing slicks 0.8-0.95, road tyres 1.0-1.2")]
    LoadSensitivityOutOfRange(f64),
    #[error("Engine torque curve cannot be empty")]
    EmptyTorqueCurve,
    #[error("Gear ratios cannot be empty")]
    NoGearRatios,
    #[error("Final drive ratio must be positive (got {0})")]
    NonPositiveFinalDrive(f64),
    #[error("Drivetrain efficiency must be above 0 and at most 1 (got {0})")]
    DrivetrainEfficiencyOutOfRange(f64),
    #[error("max_rpm ({max_rpm}) must be greater than min_rpm ({min_rpm})")]
    InvalidRpmRange { min_rpm: f64, max_rpm: f64 },
    #[error("Max brake force must be positive (got {0} N)")]
    NonPositiveBrakeForce(f64),
    #[error("Brake bias must be between 0 and 1 (got {0})")]
    BrakeBiasOutOfRange(f64)
}

/// Gear ratio layouts that are usable but probably a mistake
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GearRatioWarning {
    #[error("Gear ratios should decrease from 1st to top gear. Got 1st={first}, top={top}")]
    NotDescending { first: f64, top: f64 },
    #[error("Gear ratio {gear} ({ratio}) should be less than gear {previous_gear} ({previous_ratio})")]
    NotBelowPrevious { gear: usize, ratio: f64, previous_gear: usize, previous_ratio: f64 }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Severity {
    Error,
    Warning
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING"
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.severity.as_str(), self.message)
    }
}

/// Outcome of validating a [`VehicleParams`].
///
/// Diagnostics are kept in the order the checks raised them. Validation stops at the
/// first error so a report holds at most one error, always as its last diagnostic
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValidationReport {
    diagnostics: Vec<Diagnostic>,
    error: Option<ParameterError>
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    /// The check that failed, if any
    pub fn error(&self) -> Option<&ParameterError> {
        self.error.as_ref()
    }

    pub fn into_error(self) -> Option<ParameterError> {
        self.error
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn errors(&self) -> impl Iterator<Item=&Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item=&Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity == Severity::Warning)
    }

    /// Emit every diagnostic on the tracing channel
    pub fn log(&self) {
        for diagnostic in &self.diagnostics {
            match diagnostic.severity {
                Severity::Error => error!("{}", diagnostic.message),
                Severity::Warning => warn!("{}", diagnostic.message)
            }
        }
    }
}

pub fn validate_params(params: &VehicleParams) -> ValidationReport {
    let mut warnings = Vec::new();
    let result = run_checks(params, &mut warnings);
    let mut diagnostics: Vec<Diagnostic> = warnings.iter()
        .map(|w| Diagnostic { severity: Severity::Warning, message: w.to_string() })
        .collect();
    let error = result.err();
    if let Some(e) = &error {
        diagnostics.push(Diagnostic { severity: Severity::Error, message: e.to_string() });
    }
    ValidationReport { diagnostics, error }
}

// Gear ratio warnings are only gathered once every check before them has passed
fn run_checks(params: &VehicleParams, warnings: &mut Vec<GearRatioWarning>) -> Result<(), ParameterError> {
    check_mass(&params.mass)?;
    check_aero(&params.aero)?;
    check_tyres(&params.tyres)?;
    check_powertrain(&params.powertrain)?;
    warnings.extend(gear_ratio_warnings(&params.powertrain.gear_ratios));
    check_brakes(&params.brakes)?;
    Ok(())
}

fn check_mass(mass: &MassParams) -> Result<(), ParameterError> {
    if !is_positive(mass.mass) {
        return Err(ParameterError::NonPositiveMass(mass.mass));
    }
    if !is_non_negative(mass.cog_height) {
        return Err(ParameterError::NegativeCogHeight(mass.cog_height));
    }
    if !is_positive(mass.wheelbase) {
        return Err(ParameterError::NonPositiveWheelbase(mass.wheelbase));
    }
    if !is_valid_fraction(mass.weight_distribution) {
        return Err(ParameterError::WeightDistributionOutOfRange(mass.weight_distribution));
    }
    Ok(())
}

// Drag coefficient is not checked
fn check_aero(aero: &AeroParams) -> Result<(), ParameterError> {
    if !is_positive(aero.frontal_area) {
        return Err(ParameterError::NonPositiveFrontalArea(aero.frontal_area));
    }
    if !is_positive(aero.air_density) {
        return Err(ParameterError::NonPositiveAirDensity(aero.air_density));
    }
    Ok(())
}

fn check_tyres(tyres: &TyreParams) -> Result<(), ParameterError> {
    if !is_positive(tyres.mu_x) || !is_positive(tyres.mu_y) {
        return Err(ParameterError::NonPositiveFriction { mu_x: tyres.mu_x, mu_y: tyres.mu_y });
    }
    if !is_positive(tyres.tyre_radius) {
        return Err(ParameterError::NonPositiveTyreRadius(tyres.tyre_radius));
    }
    if !is_in_range(tyres.load_sensitivity, 0.0, MAX_LOAD_SENSITIVITY) {
        return Err(ParameterError::LoadSensitivityOutOfRange(tyres.load_sensitivity));
    }
    Ok(())
}

fn check_powertrain(powertrain: &PowertrainParams) -> Result<(), ParameterError> {
    if powertrain.torque_curve.is_empty() {
        return Err(ParameterError::EmptyTorqueCurve);
    }
    if powertrain.gear_ratios.is_empty() {
        return Err(ParameterError::NoGearRatios);
    }
    if !is_positive(powertrain.final_drive_ratio) {
        return Err(ParameterError::NonPositiveFinalDrive(powertrain.final_drive_ratio));
    }
    if !is_positive_fraction(powertrain.drivetrain_efficiency) {
        return Err(ParameterError::DrivetrainEfficiencyOutOfRange(powertrain.drivetrain_efficiency));
    }
    if !(powertrain.max_rpm > powertrain.min_rpm) {
        return Err(ParameterError::InvalidRpmRange {
            min_rpm: powertrain.min_rpm,
            max_rpm: powertrain.max_rpm
        });
    }
    Ok(())
}

fn gear_ratio_warnings(gear_ratios: &[f64]) -> Vec<GearRatioWarning> {
    let mut warnings = Vec::new();
    let (first, top) = match (gear_ratios.first(), gear_ratios.last()) {
        (Some(first), Some(top)) => (*first, *top),
        _ => return warnings
    };
    if first <= top {
        warnings.push(GearRatioWarning::NotDescending { first, top });
    }
    for (idx, (previous_ratio, ratio)) in gear_ratios.iter().copied().tuple_windows().enumerate() {
        if ratio >= previous_ratio {
            warnings.push(GearRatioWarning::NotBelowPrevious {
                gear: idx + 2,
                ratio,
                previous_gear: idx + 1,
                previous_ratio
            });
        }
    }
    warnings
}

fn check_brakes(brakes: &BrakeParams) -> Result<(), ParameterError> {
    if !is_positive(brakes.max_brake_force) {
        return Err(ParameterError::NonPositiveBrakeForce(brakes.max_brake_force));
    }
    if !is_valid_fraction(brakes.brake_bias) {
        return Err(ParameterError::BrakeBiasOutOfRange(brakes.brake_bias));
    }
    Ok(())
}
