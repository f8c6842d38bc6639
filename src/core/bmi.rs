//! BMI engine: pure functions, no storage access.

use crate::models::category::Category;

/// Compute the body-mass index from weight (kg) and height (cm),
/// rounded to 2 decimal places.
///
/// Rounding mode is round-half-away-from-zero (`f64::round`).
///
/// A non-positive height returns 0.0 instead of failing: callers validate
/// height > 0 before reaching this function, so the guard only protects
/// against a division by zero on unvalidated input.
pub fn compute_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    if height_m <= 0.0 {
        return 0.0;
    }
    round2(weight_kg / (height_m * height_m))
}

/// Map a BMI value to its clinical band.
pub fn classify_bmi(bmi: f64) -> Category {
    Category::from_bmi(bmi)
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn computes_reference_value() {
        // 70 kg / 1.75 m² = 22.857… → 22.86
        assert_eq!(compute_bmi(70.0, 175.0), 22.86);
    }

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(compute_bmi(60.0, 180.0), 18.52);
        assert_eq!(compute_bmi(100.0, 160.0), 39.06);
    }

    #[test]
    fn zero_height_returns_zero() {
        assert_eq!(compute_bmi(70.0, 0.0), 0.0);
        assert_eq!(compute_bmi(70.0, -170.0), 0.0);
    }

    #[test]
    fn classification_boundaries_are_exact() {
        assert_eq!(classify_bmi(23.0), Category::Overweight);
        assert_eq!(classify_bmi(22.999), Category::Normal);
        assert_eq!(classify_bmi(40.0), Category::ObeseIII);
        assert_eq!(classify_bmi(39.999), Category::ObeseII);
        assert_eq!(classify_bmi(30.0), Category::ObeseII);
        assert_eq!(classify_bmi(29.999), Category::ObeseI);
        assert_eq!(classify_bmi(25.0), Category::ObeseI);
        assert_eq!(classify_bmi(24.999), Category::Overweight);
        assert_eq!(classify_bmi(18.5), Category::Normal);
        assert_eq!(classify_bmi(18.499), Category::Underweight);
    }

    #[test]
    fn classification_is_total() {
        assert_eq!(classify_bmi(0.0), Category::Underweight);
        assert_eq!(classify_bmi(-1.0), Category::Underweight);
        assert_eq!(classify_bmi(500.0), Category::ObeseIII);
    }

    #[test]
    fn category_db_strings_round_trip() {
        for c in [
            Category::Underweight,
            Category::Normal,
            Category::Overweight,
            Category::ObeseI,
            Category::ObeseII,
            Category::ObeseIII,
        ] {
            assert_eq!(Category::from_db_str(c.to_db_str()), Some(c));
        }
        assert_eq!(Category::from_db_str("Obese IV"), None);
    }
}
