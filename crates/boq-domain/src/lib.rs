//! Quantity take-off domain: rate tables, calculator, report assembler
//! and labour estimator.

pub mod constants;
pub mod model;
pub mod service;

pub use model::*;
pub use service::{assemble_report, calculate_material_costs, estimate_costs, estimate_labour_cost};
