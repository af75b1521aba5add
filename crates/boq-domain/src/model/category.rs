//! Material cost categories

use serde::{Deserialize, Serialize};

use crate::constants::rates;
use crate::model::MaterialRate;

/// One section of the cost report.
///
/// Variants are declared in presentation order; [`CostCategory::ALL`]
/// is the order every report and every sink uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CostCategory {
    Foundation,
    Walls,
    Roofing,
    WindowsAndDoors,
    InteriorFinishing,
}

impl CostCategory {
    pub const ALL: [CostCategory; 5] = [
        CostCategory::Foundation,
        CostCategory::Walls,
        CostCategory::Roofing,
        CostCategory::WindowsAndDoors,
        CostCategory::InteriorFinishing,
    ];

    /// Section title used by tables and exported documents
    pub fn title(&self) -> &'static str {
        match self {
            CostCategory::Foundation => "Foundation",
            CostCategory::Walls => "Walls",
            CostCategory::Roofing => "Roofing",
            CostCategory::WindowsAndDoors => "Windows and Doors",
            CostCategory::InteriorFinishing => "Interior Finishing",
        }
    }

    /// Rate table rows for this category, in row order
    pub fn rates(&self) -> &'static [MaterialRate] {
        match self {
            CostCategory::Foundation => rates::FOUNDATION,
            CostCategory::Walls => rates::WALLS,
            CostCategory::Roofing => rates::ROOFING,
            CostCategory::WindowsAndDoors => rates::WINDOWS_AND_DOORS,
            CostCategory::InteriorFinishing => rates::INTERIOR_FINISHING,
        }
    }
}

impl std::fmt::Display for CostCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_sorted() {
        let mut sorted = CostCategory::ALL;
        sorted.sort();
        assert_eq!(sorted, CostCategory::ALL);
    }

    #[test]
    fn test_titles() {
        let titles: Vec<_> = CostCategory::ALL.iter().map(|c| c.title()).collect();
        assert_eq!(
            titles,
            ["Foundation", "Walls", "Roofing", "Windows and Doors", "Interior Finishing"]
        );
    }

    #[test]
    fn test_every_category_has_rates() {
        for category in CostCategory::ALL {
            assert!(!category.rates().is_empty(), "{category} has no rates");
        }
    }
}
