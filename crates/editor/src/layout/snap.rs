//! Snap-to-grid

/// Nearest multiple of `grid_size`, rounding halves up.
///
/// A non-positive grid size disables snapping.
pub fn snap_to_grid(value: f64, grid_size: f64) -> f64 {
    if grid_size <= 0.0 {
        return value;
    }
    (value / grid_size + 0.5).floor() * grid_size
}

/// Snap both coordinates of a point
pub fn snap_point(x: f64, y: f64, grid_size: f64) -> (f64, f64) {
    (snap_to_grid(x, grid_size), snap_to_grid(y, grid_size))
}
