//! Domain services
//!
//! `calculate_material_costs` → `assemble_report` is the whole estimation
//! pipeline; `estimate_costs` runs both.

pub mod assembler;
pub mod calculator;
pub mod labour;

pub use assembler::assemble_report;
pub use calculator::{calculate_material_costs, CategoryCosts, MaterialCosts, RawCost};
pub use labour::estimate_labour_cost;

use boq_types::StructuralPrediction;

use crate::model::CostReport;

/// Calculate and assemble the cost report for one prediction
pub fn estimate_costs(prediction: &StructuralPrediction) -> CostReport {
    let costs = calculate_material_costs(prediction);
    assemble_report(prediction, &costs)
}
