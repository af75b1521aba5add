//! Domain model types

pub mod category;
pub mod line_item;
pub mod material;
pub mod report;

pub use category::CostCategory;
pub use line_item::{DisplayRow, MaterialLineItem};
pub use material::{CostDriver, MaterialRate, QuantityRule};
pub use report::{CategorySection, CostReport};
