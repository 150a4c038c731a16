//! Search tuning knobs.

use arena_core::CostMatrix;

pub const DEFAULT_PLAIN_COST: u32 = 1;
pub const DEFAULT_SWAMP_COST: u32 = 5;
pub const DEFAULT_HEURISTIC_WEIGHT: f64 = 1.2;
pub const DEFAULT_MAX_OPS: u32 = 10_000;
pub const DEFAULT_MAX_COST: u32 = u32::MAX;

/// Options for a single search.
///
/// Zero (or a non-finite weight) means "use the default", mirroring how the
/// arena API treats missing values. Everything is normalised by
/// [`clamped`](SearchOptions::clamped) before a search reads it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchOptions<'a> {
    /// Cost of entering a plain cell, `1..=254`.
    pub plain_cost: u32,
    /// Cost of entering a swamp cell, `1..=254`.
    pub swamp_cost: u32,
    /// Multiplier on the heuristic, `1.0..=9.0`. Above 1 trades optimality
    /// for fewer expansions.
    pub heuristic_weight: f64,
    /// Maximum node expansions.
    pub max_ops: u32,
    /// Maximum accumulated path cost.
    pub max_cost: u32,
    /// Move away from the goals instead of towards them.
    pub flee: bool,
    /// Acceptance range for [`find_path`](crate::find_path). `None` stops
    /// next to the target and then steps onto it.
    pub range: Option<u32>,
    /// Per-cell overrides taking precedence over terrain.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub cost_matrix: Option<&'a CostMatrix>,
}

impl Default for SearchOptions<'_> {
    fn default() -> Self {
        Self {
            plain_cost: DEFAULT_PLAIN_COST,
            swamp_cost: DEFAULT_SWAMP_COST,
            heuristic_weight: DEFAULT_HEURISTIC_WEIGHT,
            max_ops: DEFAULT_MAX_OPS,
            max_cost: DEFAULT_MAX_COST,
            flee: false,
            range: None,
            cost_matrix: None,
        }
    }
}

impl<'a> SearchOptions<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_plain_cost(mut self, cost: u32) -> Self {
        self.plain_cost = cost;
        self
    }

    pub fn with_swamp_cost(mut self, cost: u32) -> Self {
        self.swamp_cost = cost;
        self
    }

    pub fn with_heuristic_weight(mut self, weight: f64) -> Self {
        self.heuristic_weight = weight;
        self
    }

    pub fn with_max_ops(mut self, ops: u32) -> Self {
        self.max_ops = ops;
        self
    }

    pub fn with_max_cost(mut self, cost: u32) -> Self {
        self.max_cost = cost;
        self
    }

    pub fn with_flee(mut self, flee: bool) -> Self {
        self.flee = flee;
        self
    }

    pub fn with_range(mut self, range: u32) -> Self {
        self.range = Some(range);
        self
    }

    pub fn with_cost_matrix(mut self, matrix: &'a CostMatrix) -> Self {
        self.cost_matrix = Some(matrix);
        self
    }

    /// Replace unset values with defaults and clamp the rest into range.
    pub fn clamped(self) -> Self {
        let or = |v: u32, d: u32| if v == 0 { d } else { v };
        let weight = if self.heuristic_weight.is_finite() && self.heuristic_weight != 0.0 {
            self.heuristic_weight
        } else {
            DEFAULT_HEURISTIC_WEIGHT
        };
        Self {
            plain_cost: or(self.plain_cost, DEFAULT_PLAIN_COST).clamp(1, 254),
            swamp_cost: or(self.swamp_cost, DEFAULT_SWAMP_COST).clamp(1, 254),
            heuristic_weight: weight.clamp(1.0, 9.0),
            max_ops: or(self.max_ops, DEFAULT_MAX_OPS),
            max_cost: or(self.max_cost, DEFAULT_MAX_COST),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let o = SearchOptions::default();
        assert_eq!(o.plain_cost, 1);
        assert_eq!(o.swamp_cost, 5);
        assert_eq!(o.heuristic_weight, 1.2);
        assert_eq!(o.max_ops, 10_000);
        assert_eq!(o.max_cost, 0xFFFF_FFFF);
        assert!(!o.flee);
        assert_eq!(o.clamped(), o);
    }

    #[test]
    fn clamps_costs_and_weight() {
        let o = SearchOptions::new()
            .with_plain_cost(300)
            .with_swamp_cost(255)
            .with_heuristic_weight(0.5)
            .clamped();
        assert_eq!(o.plain_cost, 254);
        assert_eq!(o.swamp_cost, 254);
        assert_eq!(o.heuristic_weight, 1.0);

        let o = SearchOptions::new().with_heuristic_weight(42.0).clamped();
        assert_eq!(o.heuristic_weight, 9.0);
    }

    #[test]
    fn zero_and_nan_fall_back_to_defaults() {
        let o = SearchOptions::new()
            .with_plain_cost(0)
            .with_swamp_cost(0)
            .with_heuristic_weight(f64::NAN)
            .with_max_ops(0)
            .with_max_cost(0)
            .clamped();
        assert_eq!(o, SearchOptions::default());
    }

    #[test]
    fn clamping_keeps_flee_range_and_matrix() {
        let m = CostMatrix::new();
        let o = SearchOptions::new()
            .with_flee(true)
            .with_range(3)
            .with_cost_matrix(&m)
            .clamped();
        assert!(o.flee);
        assert_eq!(o.range, Some(3));
        assert!(o.cost_matrix.is_some());
    }
}
