//! Quantity-cost calculator
//!
//! Turns structural attributes into a raw cost per material. Pure
//! arithmetic: the same prediction always yields bit-identical costs.

use boq_types::StructuralPrediction;

use crate::constants::ROOM_ALLOWANCE;
use crate::model::{CostCategory, CostDriver, MaterialRate};

/// Raw cost of one material, before quantities are derived
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawCost {
    pub rate: &'static MaterialRate,
    pub cost: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryCosts {
    pub category: CostCategory,
    pub costs: Vec<RawCost>,
}

/// Raw costs for every category, in presentation order
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialCosts {
    pub categories: Vec<CategoryCosts>,
}

impl MaterialCosts {
    pub fn category(&self, category: CostCategory) -> Option<&CategoryCosts> {
        self.categories.iter().find(|c| c.category == category)
    }

    /// Raw cost of a material by category and rate key
    pub fn cost(&self, category: CostCategory, key: &str) -> Option<f64> {
        self.category(category)?
            .costs
            .iter()
            .find(|c| c.rate.key == key)
            .map(|c| c.cost)
    }
}

/// Number of openings-driving rooms: counted rooms plus the allowance
pub fn opening_count(prediction: &StructuralPrediction) -> f64 {
    (u64::from(prediction.beds)
        + u64::from(prediction.baths)
        + u64::from(prediction.garages)
        + ROOM_ALLOWANCE) as f64
}

/// Raw cost of a single material
///
/// # Formula
/// * area: `unit_price * square_feet / divisor`
/// * openings: `unit_price * multiplier * (beds + baths + garages + 2)`
/// * fixed: flat cost
pub fn material_cost(rate: &MaterialRate, prediction: &StructuralPrediction) -> f64 {
    match rate.driver {
        CostDriver::Area { divisor } => rate.unit_price * f64::from(prediction.square_feet) / divisor,
        CostDriver::Openings { multiplier } => {
            rate.unit_price * multiplier * opening_count(prediction)
        }
        CostDriver::Fixed { cost } => cost,
    }
}

pub fn calculate_material_costs(prediction: &StructuralPrediction) -> MaterialCosts {
    let categories = CostCategory::ALL
        .iter()
        .map(|&category| CategoryCosts {
            category,
            costs: category
                .rates()
                .iter()
                .map(|rate| RawCost {
                    rate,
                    cost: material_cost(rate, prediction),
                })
                .collect(),
        })
        .collect();

    MaterialCosts { categories }
}
