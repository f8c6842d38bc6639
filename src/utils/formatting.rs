//! Formatting utilities used for CLI and export outputs.

use crate::models::category::Category;
use crate::utils::colors::{GREEN, RED, YELLOW};

/// Display label and ANSI color for a category.
/// Normal is green, the adjacent bands are yellow, the obese bands red.
pub fn describe_category(category: &Category) -> (&'static str, &'static str) {
    match category {
        Category::Normal => (category.as_str(), GREEN),
        Category::Underweight | Category::Overweight => (category.as_str(), YELLOW),
        Category::ObeseI | Category::ObeseII | Category::ObeseIII => (category.as_str(), RED),
    }
}

/// BMI rendered the way it is stored: 2 decimal places.
pub fn format_bmi(bmi: f64) -> String {
    format!("{:.2}", bmi)
}

/// Truncate a name for fixed-width table display.
pub fn truncate_name(name: &str, max: usize) -> String {
    if name.chars().count() <= max {
        name.to_string()
    } else {
        name.chars().take(max).collect()
    }
}
