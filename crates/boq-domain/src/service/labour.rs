//! Labour cost estimation

use boq_types::round_half_away_from_zero;

use crate::constants::LABOUR_RATE;

/// Labour surcharge: 20% of the predicted total build cost, rounded
pub fn estimate_labour_cost(total_estimated_cost: f64) -> f64 {
    round_half_away_from_zero(total_estimated_cost * LABOUR_RATE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labour_cost() {
        assert_eq!(estimate_labour_cost(100_000.0), 20_000.0);
        assert_eq!(estimate_labour_cost(0.0), 0.0);
    }

    #[test]
    fn test_labour_cost_rounds() {
        // 0.2 * 12347 = 2469.4
        assert_eq!(estimate_labour_cost(12_347.0), 2469.0);
        // 0.2 * 12348 = 2469.6
        assert_eq!(estimate_labour_cost(12_348.0), 2470.0);
        // 0.2 * 12.5 = 2.5
        assert_eq!(estimate_labour_cost(12.5), 3.0);
    }
}
