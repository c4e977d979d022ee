//! US/EU shoe size conversion.

use serde::{Deserialize, Serialize};

/// A shoe size in both US and EU scales.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShoeSize {
    pub us: String,
    pub eu: String,
}

impl ShoeSize {
    pub fn new(us: impl Into<String>, eu: impl Into<String>) -> Self {
        Self {
            us: us.into(),
            eu: eu.into(),
        }
    }

    /// Combined label, e.g. "9US/43EU".
    pub fn label(&self) -> String {
        format!("{}US/{}EU", self.us, self.eu)
    }
}

/// The size chart offered in the product card, US paired with EU.
pub const SIZE_CHART: [(&str, &str); 14] = [
    ("6.5", "39"),
    ("7", "40"),
    ("7.5", "40.5"),
    ("8", "41"),
    ("8.5", "42"),
    ("9", "43"),
    ("9.5", "43.5"),
    ("10", "44"),
    ("10.5", "44.5"),
    ("11", "45"),
    ("11.5", "46"),
    ("12", "47"),
    ("12.5", "47.5"),
    ("13", "48"),
];

/// The size chart as `ShoeSize` values.
pub fn size_chart() -> Vec<ShoeSize> {
    SIZE_CHART
        .iter()
        .map(|(us, eu)| ShoeSize::new(*us, *eu))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label() {
        assert_eq!(ShoeSize::new("10.5", "44.5").label(), "10.5US/44.5EU");
    }

    #[test]
    fn test_chart_covers_full_range() {
        let chart = size_chart();
        assert_eq!(chart.len(), 14);
        assert_eq!(chart.first().unwrap().us, "6.5");
        assert_eq!(chart.last().unwrap().eu, "48");
    }
}
