//! Report assembler
//!
//! Converts raw material costs into category sections of line items.
//! Quantities and costs stay at full precision; rounding happens per sink
//! through [`MaterialLineItem::display_row`].

use boq_types::StructuralPrediction;

use crate::model::{CategorySection, CostReport, MaterialLineItem};
use crate::service::calculator::{MaterialCosts, RawCost};
use crate::service::labour::estimate_labour_cost;

fn line_item(raw: &RawCost) -> MaterialLineItem {
    MaterialLineItem {
        name: raw.rate.name.to_string(),
        unit_price: raw.rate.unit_price,
        quantity: raw.rate.quantity_for(raw.cost),
        cost: raw.cost,
    }
}

pub fn assemble_report(prediction: &StructuralPrediction, costs: &MaterialCosts) -> CostReport {
    let sections: Vec<CategorySection> = costs
        .categories
        .iter()
        .map(|category| CategorySection {
            category: category.category,
            items: category.costs.iter().map(line_item).collect(),
        })
        .collect();

    let materials_total: f64 = sections.iter().map(CategorySection::subtotal).sum();

    CostReport {
        prediction: *prediction,
        sections,
        materials_total,
        total_estimated_cost: prediction.estimated_cost,
        labour_cost: estimate_labour_cost(prediction.estimated_cost),
    }
}
