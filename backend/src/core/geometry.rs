//! Unit-disk geometry behind the estimator
//!
//! A disk of radius 1 covers π of the 4 square units of [-1, 1]², so the
//! fraction of uniform points that land inside it approaches π/4.

use std::f64::consts::PI;

/// Closed-disk inclusion test: `x² + y² <= 1`
///
/// Points on the circle itself count as inside.
///
/// # Example
/// ```
/// use monte_carlo_pi_core_rs::core::geometry::is_inside_unit_circle;
///
/// assert!(is_inside_unit_circle(1.0, 0.0));
/// assert!(!is_inside_unit_circle(1.0, 1.0));
/// ```
pub fn is_inside_unit_circle(x: f64, y: f64) -> bool {
    x * x + y * y <= 1.0
}

/// π estimate from hit counts: `4 * inside / total`, or 0.0 with no samples
///
/// # Example
/// ```
/// use monte_carlo_pi_core_rs::core::geometry::estimate_pi;
///
/// assert_eq!(estimate_pi(2, 4), 2.0);
/// assert_eq!(estimate_pi(0, 0), 0.0);
/// ```
pub fn estimate_pi(inside: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    4.0 * inside as f64 / total as f64
}

/// Absolute distance of an estimate from π
pub fn absolute_error(estimate: f64) -> f64 {
    (estimate - PI).abs()
}

/// Absolute error as a percentage of π
pub fn relative_error_percent(error: f64) -> f64 {
    error / PI * 100.0
}

/// `100 - relative error`, floored at 0
///
/// # Example
/// ```
/// use monte_carlo_pi_core_rs::core::geometry::accuracy_percent;
///
/// assert_eq!(accuracy_percent(0.0), 100.0);
/// assert_eq!(accuracy_percent(10.0), 0.0);
/// ```
pub fn accuracy_percent(error: f64) -> f64 {
    ((1.0 - error / PI) * 100.0).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_is_inside() {
        assert!(is_inside_unit_circle(0.0, 0.0));
    }

    #[test]
    fn test_corners_are_outside() {
        assert!(!is_inside_unit_circle(1.0, 1.0));
        assert!(!is_inside_unit_circle(-1.0, -1.0));
        assert!(!is_inside_unit_circle(-1.0, 1.0));
    }

    #[test]
    fn test_all_inside_gives_four() {
        assert_eq!(estimate_pi(10, 10), 4.0);
    }

    #[test]
    fn test_error_of_full_pi_is_zero_accuracy() {
        assert!((relative_error_percent(PI) - 100.0).abs() < 1e-12);
        assert_eq!(accuracy_percent(PI), 0.0);
    }

    #[test]
    fn test_error_of_pi_is_zero() {
        assert_eq!(absolute_error(PI), 0.0);
    }
}
