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

pub fn is_positive(val: f64) -> bool {
    val > 0.0
}

pub fn is_non_negative(val: f64) -> bool {
    val >= 0.0
}

/// Returns true if `val` lies within the closed range `[min, max]`
pub fn is_in_range(val: f64, min: f64, max: f64) -> bool {
    val >= min && val <= max
}

/// Returns true if `val` is a fraction in `[0, 1]`
pub fn is_valid_fraction(val: f64) -> bool {
    is_in_range(val, 0.0, 1.0)
}

/// Returns true if `val` lies within the half-open range `(0, 1]`
pub fn is_positive_fraction(val: f64) -> bool {
    val > 0.0 && val <= 1.0
}
