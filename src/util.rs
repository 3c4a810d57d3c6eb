//! Coordinate helpers for gesture handling.
//!
//! This module provides:
//! - Grid snapping (round to the nearest grid multiple)
//! - The square constraint used by the rectangle tool with Shift held

/// Rounds `value` to the nearest multiple of `grid`.
///
/// Works on raw pointer positions, so fractional input snaps by its real
/// distance: with a 10px grid `4.6 → 0` and `5.0 → 10`. Halfway values round
/// away from zero. A non-positive grid leaves the value untouched.
pub fn snap_to_grid(value: f64, grid: i32) -> f64 {
    if grid <= 0 {
        return value;
    }
    let grid = grid as f64;
    (value / grid).round() * grid
}

/// Height of a square whose width is `dx`, oriented along `dy`.
///
/// The magnitude always equals `|dx|`; the sign follows the vertical drag
/// direction, with a zero `dy` counting as downward.
pub fn square_height(dx: f64, dy: f64) -> f64 {
    if dy < 0.0 { -dx.abs() } else { dx.abs() }
}
