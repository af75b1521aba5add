//! Structural prediction types shared by every layer

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// Round to the nearest integer, halves away from zero.
///
/// Every displayed quantity, cost and the labour surcharge go through this
/// one helper so that all sinks agree on the same numbers.
pub fn round_half_away_from_zero(value: f64) -> f64 {
    value.round()
}

/// Raw attribute record as returned by the prediction service.
///
/// Fields are kept untyped so the boundary check can tell a missing field
/// from a non-numeric one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionPayload {
    #[serde(default)]
    pub square_feet: Option<Value>,
    #[serde(default)]
    pub beds: Option<Value>,
    #[serde(default)]
    pub baths: Option<Value>,
    #[serde(default)]
    pub garages: Option<Value>,
    #[serde(default)]
    pub estimated_cost: Option<Value>,
}

impl PredictionPayload {
    /// Parse a JSON response body
    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }
}

/// Validated structural attributes of one building.
///
/// Counts are rounded to integers on receipt; `estimated_cost` is the
/// predicted total build cost in USD and is kept at full precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PredictionPayload")]
pub struct StructuralPrediction {
    pub square_feet: u32,
    pub beds: u32,
    pub baths: u32,
    pub garages: u32,
    pub estimated_cost: f64,
}

impl StructuralPrediction {
    /// Build a prediction from raw numbers, applying the same checks and
    /// rounding as a service payload.
    pub fn new(
        square_feet: f64,
        beds: f64,
        baths: f64,
        garages: f64,
        estimated_cost: f64,
    ) -> Result<Self> {
        Ok(Self {
            square_feet: count_from_f64("square_feet", square_feet)?,
            beds: count_from_f64("beds", beds)?,
            baths: count_from_f64("baths", baths)?,
            garages: count_from_f64("garages", garages)?,
            estimated_cost: cost_from_f64("estimated_cost", estimated_cost)?,
        })
    }
}

impl TryFrom<PredictionPayload> for StructuralPrediction {
    type Error = Error;

    fn try_from(payload: PredictionPayload) -> Result<Self> {
        Ok(Self {
            square_feet: count_field("square_feet", payload.square_feet.as_ref())?,
            beds: count_field("beds", payload.beds.as_ref())?,
            baths: count_field("baths", payload.baths.as_ref())?,
            garages: count_field("garages", payload.garages.as_ref())?,
            estimated_cost: cost_from_f64(
                "estimated_cost",
                number_field("estimated_cost", payload.estimated_cost.as_ref())?,
            )?,
        })
    }
}

fn number_field(field: &'static str, value: Option<&Value>) -> Result<f64> {
    match value {
        None | Some(Value::Null) => Err(Error::invalid(field, "missing")),
        Some(Value::Number(n)) => n
            .as_f64()
            .ok_or_else(|| Error::invalid(field, format!("unrepresentable number {}", n))),
        Some(other) => Err(Error::invalid(
            field,
            format!("expected a number, got {}", json_kind(other)),
        )),
    }
}

fn count_field(field: &'static str, value: Option<&Value>) -> Result<u32> {
    count_from_f64(field, number_field(field, value)?)
}

fn count_from_f64(field: &'static str, value: f64) -> Result<u32> {
    let value = non_negative(field, value)?;
    let rounded = round_half_away_from_zero(value);
    if rounded > u32::MAX as f64 {
        return Err(Error::invalid(field, format!("{} is out of range", value)));
    }
    Ok(rounded as u32)
}

fn cost_from_f64(field: &'static str, value: f64) -> Result<f64> {
    non_negative(field, value)
}

fn non_negative(field: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(Error::invalid(field, "not a finite number"));
    }
    if value < 0.0 {
        return Err(Error::invalid(field, format!("{} is negative", value)));
    }
    Ok(value)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
