// SPDX-License-Identifier: MPL-2.0
//! CSS-style cubic Bézier timing curves.

/// A timing curve through `(0, 0)`, `(x1, y1)`, `(x2, y2)`, `(1, 1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

/// The CSS `ease` keyword.
pub const EASE: CubicBezier = CubicBezier::new(0.25, 0.1, 0.25, 1.0);

/// Soft deceleration used when a card snaps back into place.
pub const SNAP_BACK: CubicBezier = CubicBezier::new(0.25, 0.8, 0.25, 1.0);

const NEWTON_ITERATIONS: usize = 8;
const BISECTION_ITERATIONS: usize = 24;
const EPSILON: f32 = 1e-5;

impl CubicBezier {
    /// `x1` and `x2` must lie in `[0, 1]` for the curve to be a function of time.
    #[must_use]
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn sample_x(&self, t: f32) -> f32 {
        bezier(t, self.x1, self.x2)
    }

    fn sample_y(&self, t: f32) -> f32 {
        bezier(t, self.y1, self.y2)
    }

    fn slope_x(&self, t: f32) -> f32 {
        bezier_slope(t, self.x1, self.x2)
    }

    /// Finds the curve parameter whose x equals `x`.
    fn solve_t(&self, x: f32) -> f32 {
        let mut t = x;
        for _ in 0..NEWTON_ITERATIONS {
            let error = self.sample_x(t) - x;
            if error.abs() < EPSILON {
                return t;
            }
            let slope = self.slope_x(t);
            if slope.abs() < EPSILON {
                break;
            }
            t -= error / slope;
        }

        let (mut low, mut high) = (0.0_f32, 1.0_f32);
        t = x;
        for _ in 0..BISECTION_ITERATIONS {
            let value = self.sample_x(t);
            if (value - x).abs() < EPSILON {
                break;
            }
            if value < x {
                low = t;
            } else {
                high = t;
            }
            t = (low + high) / 2.0;
        }
        t
    }

    /// Eased progress for linear progress `x` in `[0, 1]`.
    #[must_use]
    pub fn apply(&self, x: f32) -> f32 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        self.sample_y(self.solve_t(x))
    }
}

fn bezier(t: f32, p1: f32, p2: f32) -> f32 {
    let u = 1.0 - t;
    3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
}

fn bezier_slope(t: f32, p1: f32, p2: f32) -> f32 {
    let u = 1.0 - t;
    3.0 * u * u * p1 + 6.0 * u * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn endpoints_are_fixed() {
        for curve in [EASE, SNAP_BACK] {
            assert_abs_diff_eq!(curve.apply(0.0), 0.0);
            assert_abs_diff_eq!(curve.apply(1.0), 1.0);
            assert_abs_diff_eq!(curve.apply(-3.0), 0.0);
            assert_abs_diff_eq!(curve.apply(7.0), 1.0);
        }
    }

    #[test]
    fn linear_curve_is_identity() {
        let linear = CubicBezier::new(0.0, 0.0, 1.0, 1.0);
        for step in 0..=10 {
            let x = step as f32 / 10.0;
            assert_abs_diff_eq!(linear.apply(x), x, epsilon = 1e-3);
        }
    }

    #[test]
    fn curves_are_monotonic() {
        for curve in [EASE, SNAP_BACK] {
            let mut previous = 0.0;
            for step in 1..=100 {
                let value = curve.apply(step as f32 / 100.0);
                assert!(value + 1e-4 >= previous);
                previous = value;
            }
        }
    }

    #[test]
    fn snap_back_front_loads_motion() {
        // Most of the distance is covered early.
        assert!(SNAP_BACK.apply(0.5) > 0.85);
        // CSS `ease` is roughly 0.8 at the midpoint.
        assert_abs_diff_eq!(EASE.apply(0.5), 0.802, epsilon = 0.01);
    }
}
