//! Straight lines in the x-y composition plane.
//!
//! Lines are stored in the general form `a·x + b·y = c` so that vertical lines
//! (the q-line of a saturated-liquid feed) need no special casing.

use crate::error::{SolverError, SolverResult};
use nalgebra::{Matrix2, Vector2};

/// `a·x + b·y = c`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Line {
    pub fn new(a: f64, b: f64, c: f64) -> SolverResult<Self> {
        if !(a.is_finite() && b.is_finite() && c.is_finite()) {
            return Err(SolverError::InvalidArg {
                what: "line coefficients must be finite",
            });
        }
        if a == 0.0 && b == 0.0 {
            return Err(SolverError::InvalidArg {
                what: "line needs a non-zero normal",
            });
        }
        Ok(Self { a, b, c })
    }

    /// `y = slope·x + intercept`
    pub fn from_slope_intercept(slope: f64, intercept: f64) -> SolverResult<Self> {
        Self::new(-slope, 1.0, intercept)
    }

    pub fn vertical(x: f64) -> SolverResult<Self> {
        Self::new(1.0, 0.0, x)
    }

    /// Line through two distinct points.
    pub fn through(p1: (f64, f64), p2: (f64, f64)) -> SolverResult<Self> {
        let (x1, y1) = p1;
        let (x2, y2) = p2;
        let a = y2 - y1;
        let b = x1 - x2;
        Self::new(a, b, a * x1 + b * y1)
    }

    pub fn is_vertical(&self) -> bool {
        self.b == 0.0
    }

    pub fn slope(&self) -> Option<f64> {
        (!self.is_vertical()).then(|| -self.a / self.b)
    }

    pub fn y_at(&self, x: f64) -> Option<f64> {
        (!self.is_vertical()).then(|| (self.c - self.a * x) / self.b)
    }

    pub fn x_at(&self, y: f64) -> Option<f64> {
        (self.a != 0.0).then(|| (self.c - self.b * y) / self.a)
    }

    /// Intersection point of two lines.
    pub fn intersect(&self, other: &Line) -> SolverResult<(f64, f64)> {
        let m = Matrix2::new(self.a, self.b, other.a, other.b);
        let scale = (self.a.abs() + self.b.abs()) * (other.a.abs() + other.b.abs());
        if m.determinant().abs() <= 1e-14 * scale {
            return Err(SolverError::Numeric {
                what: "lines are parallel".to_string(),
            });
        }
        let rhs = Vector2::new(self.c, other.c);
        let p = m.lu().solve(&rhs).ok_or_else(|| SolverError::Numeric {
            what: "line intersection solve failed".to_string(),
        })?;
        Ok((p[0], p[1]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slope_intercept_round_trip() {
        let line = Line::from_slope_intercept(0.6, 0.38).unwrap();
        assert!((line.slope().unwrap() - 0.6).abs() < 1e-15);
        assert!((line.y_at(0.0).unwrap() - 0.38).abs() < 1e-15);
        assert!((line.y_at(0.95).unwrap() - 0.95).abs() < 1e-12);
    }

    #[test]
    fn vertical_line_has_no_slope() {
        let line = Line::vertical(0.5).unwrap();
        assert!(line.is_vertical());
        assert_eq!(line.slope(), None);
        assert_eq!(line.y_at(0.5), None);
        assert_eq!(line.x_at(0.9), Some(0.5));
    }

    #[test]
    fn through_two_points() {
        let line = Line::through((0.05, 0.05), (0.5, 0.6)).unwrap();
        assert!((line.y_at(0.05).unwrap() - 0.05).abs() < 1e-12);
        assert!((line.y_at(0.5).unwrap() - 0.6).abs() < 1e-12);
    }

    #[test]
    fn intersect_with_vertical() {
        let rect = Line::from_slope_intercept(0.6, 0.38).unwrap();
        let q = Line::vertical(0.5).unwrap();
        let (x, y) = rect.intersect(&q).unwrap();
        assert!((x - 0.5).abs() < 1e-12);
        assert!((y - 0.68).abs() < 1e-12);
    }

    #[test]
    fn parallel_lines_do_not_intersect() {
        let l1 = Line::from_slope_intercept(1.0, 0.0).unwrap();
        let l2 = Line::from_slope_intercept(1.0, 0.1).unwrap();
        assert!(matches!(l1.intersect(&l2), Err(SolverError::Numeric { .. })));
    }

    #[test]
    fn degenerate_line_rejected() {
        assert!(Line::new(0.0, 0.0, 1.0).is_err());
        assert!(Line::through((0.3, 0.3), (0.3, 0.3)).is_err());
    }
}
