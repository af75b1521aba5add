//! Material rate definitions

/// How a material's raw cost is driven by the building attributes
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CostDriver {
    /// `unit_price * square_feet / divisor`
    Area { divisor: f64 },
    /// `unit_price * multiplier * (beds + baths + garages + allowance)`
    Openings { multiplier: f64 },
    /// Flat allowance independent of the building
    Fixed { cost: f64 },
}

/// How the reported quantity is derived from the raw cost
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuantityRule {
    /// `cost / unit_price`
    PerUnit,
    /// Constant quantity regardless of cost
    Fixed(f64),
    /// The cost itself is the quantity
    CostAsQuantity,
}

/// One row of a category's rate table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialRate {
    /// Stable identifier, unique within a category
    pub key: &'static str,
    /// Display name
    pub name: &'static str,
    /// Unit price in USD
    pub unit_price: f64,
    pub driver: CostDriver,
    pub quantity: QuantityRule,
}

impl MaterialRate {
    pub const fn area(key: &'static str, name: &'static str, unit_price: f64, divisor: f64) -> Self {
        Self {
            key,
            name,
            unit_price,
            driver: CostDriver::Area { divisor },
            quantity: QuantityRule::PerUnit,
        }
    }

    pub const fn openings(
        key: &'static str,
        name: &'static str,
        unit_price: f64,
        multiplier: f64,
    ) -> Self {
        Self {
            key,
            name,
            unit_price,
            driver: CostDriver::Openings { multiplier },
            quantity: QuantityRule::PerUnit,
        }
    }

    /// Flat-cost item bought once
    pub const fn fixed(key: &'static str, name: &'static str, cost: f64) -> Self {
        Self {
            key,
            name,
            unit_price: cost,
            driver: CostDriver::Fixed { cost },
            quantity: QuantityRule::Fixed(1.0),
        }
    }

    pub const fn with_quantity(self, quantity: QuantityRule) -> Self {
        Self { quantity, ..self }
    }

    /// Reported quantity for a given raw cost
    pub fn quantity_for(&self, cost: f64) -> f64 {
        match self.quantity {
            QuantityRule::PerUnit => cost / self.unit_price,
            QuantityRule::Fixed(quantity) => quantity,
            QuantityRule::CostAsQuantity => cost,
        }
    }
}
