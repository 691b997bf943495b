//! Font-scale solver: finds the single scalar `x` that makes the content fill the canvas.
//!
//! Each arrangement describes its space budget as `b·x² + a·x + c = 0`:
//! - `b` collects the item areas (every item area is a multiple of `x²`),
//! - `a` collects the fixed bands whose size is linear in `x` (title, subtitles),
//! - `c` is the negative target (canvas area or height) plus any fixed margins.
//!
//! `x` is solved once per request and never revised downstream.

use crate::layout::error::LayoutError;

/// Coefficients of `b·x² + a·x + c = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontScaleEquation {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl FontScaleEquation {
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    pub fn discriminant(&self) -> f64 {
        self.a * self.a - 4.0 * self.b * self.c
    }

    /// Value of the left-hand side at `x`; zero at the solution.
    pub fn residual(&self, x: f64) -> f64 {
        self.b * x * x + self.a * x + self.c
    }

    /// Positive root of the equation.
    ///
    /// Falls back to the linear solution `-c / a` when there is no item area at all.
    pub fn solve(&self) -> Result<f64, LayoutError> {
        let discriminant = self.discriminant();
        if discriminant < 0.0 || !discriminant.is_finite() {
            return Err(LayoutError::InfeasibleLayout {
                discriminant,
                font_scale: f64::NAN,
            });
        }

        let x = if self.b != 0.0 {
            (-self.a + discriminant.sqrt()) / (2.0 * self.b)
        } else {
            -self.c / self.a
        };

        if !x.is_finite() || x <= 0.0 {
            return Err(LayoutError::InfeasibleLayout {
                discriminant,
                font_scale: x,
            });
        }
        Ok(x)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_round_trips_to_zero_residual() {
        // Landscape-shaped budget on a 1000 x 1000 canvas.
        let eq = FontScaleEquation::new(4.5 * 1000.0, 42.7, -1_000_000.0);
        let x = eq.solve().unwrap();
        assert!(x > 0.0);
        assert!(
            eq.residual(x).abs() < 1e-6 * 1_000_000.0,
            "residual too large: {}",
            eq.residual(x)
        );
    }

    #[test]
    fn test_solve_linear_when_no_area() {
        let eq = FontScaleEquation::new(3000.0, 0.0, -1_000_000.0);
        let x = eq.solve().unwrap();
        assert!((x - 1_000_000.0 / 3000.0).abs() < 1e-9);
    }

    #[test]
    fn test_negative_discriminant_is_infeasible() {
        // c > 0 with b > 0 and a small a: no real root.
        let eq = FontScaleEquation::new(1.0, 10.0, 10.0);
        assert!(matches!(
            eq.solve(),
            Err(LayoutError::InfeasibleLayout { .. })
        ));
    }

    #[test]
    fn test_non_positive_root_is_infeasible() {
        // Margins alone exceed the target: c > 0, so the larger root is negative.
        let eq = FontScaleEquation::new(10.0, 1.0, 5.0);
        assert!(eq.discriminant() >= 0.0);
        assert!(matches!(
            eq.solve(),
            Err(LayoutError::InfeasibleLayout { font_scale, .. }) if font_scale <= 0.0
        ));
    }

    #[test]
    fn test_linear_with_positive_c_is_infeasible() {
        let eq = FontScaleEquation::new(3.0, 0.0, 1.0);
        assert!(eq.solve().is_err());
    }
}
