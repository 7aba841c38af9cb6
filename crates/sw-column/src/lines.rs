//! Operating lines of the McCabe–Thiele diagram.
//!
//! All three lines meet at one point: the q-line passes through (xF, xF), the
//! rectifying line through (xD, xD), and the stripping line is drawn from
//! (xB, xB) to wherever the first two cross.

use crate::error::{ColumnError, ColumnResult};
use crate::spec::ColumnSpec;
use serde::Serialize;
use sw_solver::Line;

/// Feed line `q·x − (q − 1)·y = xF`. Vertical for a saturated-liquid feed.
pub fn q_line(x_feed: f64, q: f64) -> ColumnResult<Line> {
    Ok(Line::new(q, 1.0 - q, x_feed)?)
}

/// `y = R/(R+1)·x + xD/(R+1)`
pub fn rectifying_line(x_distillate: f64, reflux: f64) -> ColumnResult<Line> {
    if !(reflux.is_finite() && reflux > 0.0) {
        return Err(ColumnError::InvalidArg {
            what: "reflux ratio must be positive",
        });
    }
    Ok(Line::from_slope_intercept(
        reflux / (reflux + 1.0),
        x_distillate / (reflux + 1.0),
    )?)
}

/// Rectifying line ∩ q-line.
pub fn feed_intersection(spec: &ColumnSpec) -> ColumnResult<(f64, f64)> {
    let q = q_line(spec.x_feed, spec.q)?;
    let rect = rectifying_line(spec.x_distillate, spec.reflux)?;
    Ok(rect.intersect(&q)?)
}

/// Line from (xB, xB) through the feed intersection.
pub fn stripping_line(x_bottoms: f64, intersection: (f64, f64)) -> ColumnResult<Line> {
    if (intersection.0 - x_bottoms).abs() <= f64::EPSILON {
        return Err(ColumnError::InvalidArg {
            what: "feed intersection sits on the bottoms composition",
        });
    }
    Ok(Line::through((x_bottoms, x_bottoms), intersection)?)
}

/// Column section an operating point belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Rectifying,
    Stripping,
}

/// The three construction lines for one column specification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingLines {
    pub q_line: Line,
    pub rectifying: Line,
    pub stripping: Line,
    pub intersection: (f64, f64),
}

impl OperatingLines {
    pub fn new(spec: &ColumnSpec) -> ColumnResult<Self> {
        spec.validate()?;
        let q_line = q_line(spec.x_feed, spec.q)?;
        let rectifying = rectifying_line(spec.x_distillate, spec.reflux)?;
        let intersection = rectifying.intersect(&q_line)?;
        if !(spec.x_bottoms < intersection.0 && intersection.0 < spec.x_distillate) {
            return Err(ColumnError::InvalidArg {
                what: "feed line meets the rectifying line outside (xB, xD)",
            });
        }
        let stripping = stripping_line(spec.x_bottoms, intersection)?;
        Ok(Self {
            q_line,
            rectifying,
            stripping,
            intersection,
        })
    }

    /// Operating-line y at liquid composition `x`.
    ///
    /// The stripping line is steeper and both pass through the intersection,
    /// so the lower of the two is the active one on either side of the feed.
    pub fn y_at(&self, x: f64) -> f64 {
        // Neither line is vertical once constructed
        let rect = self.rectifying.y_at(x).unwrap_or(f64::INFINITY);
        let strip = self.stripping.y_at(x).unwrap_or(f64::INFINITY);
        rect.min(strip)
    }

    pub fn section_at(&self, x: f64) -> Section {
        if x >= self.intersection.0 {
            Section::Rectifying
        } else {
            Section::Stripping
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn saturated_liquid_q_line_is_vertical() {
        let line = q_line(0.4, 1.0).unwrap();
        assert!(line.is_vertical());
        assert!(close(line.x_at(0.9).unwrap(), 0.4));
    }

    #[test]
    fn saturated_vapor_q_line_is_horizontal() {
        let line = q_line(0.4, 0.0).unwrap();
        assert!(close(line.slope().unwrap(), 0.0));
        assert!(close(line.y_at(0.1).unwrap(), 0.4));
    }

    #[test]
    fn q_line_passes_through_feed_on_diagonal() {
        for q in [-0.5, 0.3, 0.7, 1.4, 2.0] {
            let line = q_line(0.35, q).unwrap();
            let y = line.y_at(0.35).unwrap();
            assert!(close(y, 0.35), "q = {q}: y = {y}");
        }
    }

    #[test]
    fn rectifying_line_through_distillate() {
        let line = rectifying_line(0.95, 3.0).unwrap();
        assert!(close(line.y_at(0.95).unwrap(), 0.95));
        assert!(close(line.slope().unwrap(), 0.75));
    }

    #[test]
    fn intersection_for_saturated_liquid_is_at_feed_composition() {
        let spec = ColumnSpec::new(0.5, 0.95, 0.05, 1.0, 1.65);
        let (x, y) = feed_intersection(&spec).unwrap();
        assert!(close(x, 0.5));
        assert!(close(y, (1.65 * 0.5 + 0.95) / 2.65));
    }

    #[test]
    fn all_three_lines_share_the_intersection() {
        let spec = ColumnSpec::new(0.45, 0.92, 0.08, 0.6, 2.2);
        let lines = OperatingLines::new(&spec).unwrap();
        let (xi, yi) = lines.intersection;
        for line in [lines.q_line, lines.rectifying, lines.stripping] {
            assert!((line.a * xi + line.b * yi - line.c).abs() < 1e-12);
        }
        assert!(close(lines.stripping.y_at(0.08).unwrap(), 0.08));
    }

    #[test]
    fn active_line_switches_at_the_feed() {
        let spec = ColumnSpec::new(0.5, 0.95, 0.05, 1.0, 2.0);
        let lines = OperatingLines::new(&spec).unwrap();
        assert_eq!(lines.section_at(0.7), Section::Rectifying);
        assert_eq!(lines.section_at(0.2), Section::Stripping);
        assert!(close(lines.y_at(0.7), lines.rectifying.y_at(0.7).unwrap()));
        assert!(close(lines.y_at(0.2), lines.stripping.y_at(0.2).unwrap()));
    }

    #[test]
    fn parallel_q_line_is_a_numerical_error() {
        // q/(q-1) = R/(R+1) when q = -R
        let spec = ColumnSpec::new(0.5, 0.95, 0.05, -2.0, 2.0);
        let err = OperatingLines::new(&spec).unwrap_err();
        assert!(matches!(err, ColumnError::Numerical(_)));
    }
}
