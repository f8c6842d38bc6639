use serde::Serialize;

/// Clinical BMI band, following the Asian-population thresholds
/// (lower overweight/obesity cutoffs than the WHO global standard).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    Underweight,
    Normal,
    Overweight,
    ObeseI,
    ObeseII,
    ObeseIII,
}

impl Category {
    /// Classify a BMI value. Bands are half-open `[low, high)` except the
    /// top one, evaluated strictly from the highest band down.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi >= 40.0 {
            Category::ObeseIII
        } else if bmi >= 30.0 {
            Category::ObeseII
        } else if bmi >= 25.0 {
            Category::ObeseI
        } else if bmi >= 23.0 {
            Category::Overweight
        } else if bmi >= 18.5 {
            Category::Normal
        } else {
            Category::Underweight
        }
    }

    /// Stable identifier, stored in the DB verbatim. Any localized display
    /// text belongs to the presentation layer, not here.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Underweight => "Underweight",
            Category::Normal => "Normal weight",
            Category::Overweight => "Overweight",
            Category::ObeseI => "Obese I",
            Category::ObeseII => "Obese II",
            Category::ObeseIII => "Obese III",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        self.as_str()
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "Underweight" => Some(Category::Underweight),
            "Normal weight" => Some(Category::Normal),
            "Overweight" => Some(Category::Overweight),
            "Obese I" => Some(Category::ObeseI),
            "Obese II" => Some(Category::ObeseII),
            "Obese III" => Some(Category::ObeseIII),
            _ => None,
        }
    }
}
