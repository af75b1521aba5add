//! Cost report produced for one structural prediction

use boq_types::StructuralPrediction;
use serde::{Deserialize, Serialize};

use crate::model::{CostCategory, DisplayRow, MaterialLineItem};

/// Line items of one category, in row order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySection {
    pub category: CostCategory,
    pub items: Vec<MaterialLineItem>,
}

impl CategorySection {
    pub fn title(&self) -> &'static str {
        self.category.title()
    }

    pub fn item(&self, name: &str) -> Option<&MaterialLineItem> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Sum of item costs at full precision
    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(|item| item.cost).sum()
    }

    pub fn display_rows(&self) -> Vec<DisplayRow> {
        self.items.iter().map(MaterialLineItem::display_row).collect()
    }
}

/// Complete bill of quantities for one building.
///
/// Built fresh for every request and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostReport {
    /// Attributes the report was derived from
    pub prediction: StructuralPrediction,
    /// Sections in [`CostCategory::ALL`] order
    pub sections: Vec<CategorySection>,
    /// Sum of all material costs
    pub materials_total: f64,
    /// Predicted total build cost
    pub total_estimated_cost: f64,
    /// Labour surcharge, already rounded
    pub labour_cost: f64,
}

impl CostReport {
    pub fn section(&self, category: CostCategory) -> Option<&CategorySection> {
        self.sections.iter().find(|s| s.category == category)
    }

    pub fn item(&self, category: CostCategory, name: &str) -> Option<&MaterialLineItem> {
        self.section(category).and_then(|s| s.item(name))
    }

    pub fn categories(&self) -> impl Iterator<Item = CostCategory> + '_ {
        self.sections.iter().map(|s| s.category)
    }
}
