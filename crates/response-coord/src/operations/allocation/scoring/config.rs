use serde::{Deserialize, Serialize};

/// Weights and horizons applied by the scoring engine. The defaults are the
/// reference tuning; they are exposed so operators can see the knobs, and so
/// tests can pin them explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Share of the effectiveness score earned by covering needed types.
    pub type_coverage_weight: f64,
    /// Share earned by covering needed quantities.
    pub quantity_coverage_weight: f64,
    /// Share earned by responding inside the horizon.
    pub response_time_weight: f64,
    /// Arrival time at which the response-time factor bottoms out at zero.
    pub response_horizon_minutes: f64,
    /// Fraction of an incident's distinct needs that must be met in full for
    /// the incident to count as covered.
    pub coverage_need_threshold: f64,
    /// Effectiveness assigned to a non-empty allocation in a region with no
    /// active incidents: a deliberate low-but-nonzero signal for allocating
    /// without need.
    pub idle_allocation_score: u8,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            type_coverage_weight: 0.4,
            quantity_coverage_weight: 0.4,
            response_time_weight: 0.2,
            response_horizon_minutes: 60.0,
            coverage_need_threshold: 0.5,
            idle_allocation_score: 30,
        }
    }
}
