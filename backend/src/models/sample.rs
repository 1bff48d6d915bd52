//! A single classified sample point

use crate::core::geometry::is_inside_unit_circle;
use serde::{Deserialize, Serialize};

/// One (x, y) point from the sampling square and its inclusion flag
///
/// The flag is derived once at construction; samples never change afterwards.
///
/// # Example
/// ```
/// use monte_carlo_pi_core_rs::Sample;
///
/// let s = Sample::new(0.5, 0.5);
/// assert!(s.is_inside());
///
/// let corner = Sample::new(1.0, 1.0);
/// assert!(!corner.is_inside());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    x: f64,
    y: f64,
    inside: bool,
}

impl Sample {
    /// Classify a coordinate pair against the closed unit disk
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            inside: is_inside_unit_circle(x, y),
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// True when `x² + y² <= 1`
    pub fn is_inside(&self) -> bool {
        self.inside
    }

    /// Euclidean distance from the origin
    pub fn distance_from_origin(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_point_is_inside() {
        assert!(Sample::new(1.0, 0.0).is_inside());
        assert!(Sample::new(0.0, -1.0).is_inside());
    }

    #[test]
    fn test_distance() {
        let s = Sample::new(0.6, 0.8);
        assert!((s.distance_from_origin() - 1.0).abs() < 1e-12);
    }
}
