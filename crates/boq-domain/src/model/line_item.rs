//! Report line items and their rounded display form

use boq_types::round_half_away_from_zero;
use serde::{Deserialize, Serialize};

/// One material within a report section.
///
/// `quantity` and `cost` are carried at full precision; sinks call
/// [`MaterialLineItem::display_row`] to get the rounded values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialLineItem {
    pub name: String,
    /// Unit price in USD
    pub unit_price: f64,
    pub quantity: f64,
    /// Cost in USD
    pub cost: f64,
}

/// A line item as shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRow {
    pub material: String,
    /// Unit price with two decimals, e.g. "0.75"
    pub unit_price: String,
    pub quantity: i64,
    pub cost: i64,
}

impl MaterialLineItem {
    pub fn rounded_quantity(&self) -> i64 {
        round_half_away_from_zero(self.quantity) as i64
    }

    pub fn rounded_cost(&self) -> i64 {
        round_half_away_from_zero(self.cost) as i64
    }

    pub fn display_row(&self) -> DisplayRow {
        DisplayRow {
            material: self.name.clone(),
            unit_price: format!("{:.2}", self.unit_price),
            quantity: self.rounded_quantity(),
            cost: self.rounded_cost(),
        }
    }
}
