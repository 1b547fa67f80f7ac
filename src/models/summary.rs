use serde::Serialize;

/// Aggregated metrics over a filtered set of time records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total_minutes: u64,
    pub unique_days_worked: usize,
    pub total_workable_days: usize,
    /// Not clamped: several late records on the same day can push it below 0.
    pub punctuality_percent: i64,
    pub late_arrival_count: usize,
    pub overtime_minutes: u64,
}

impl Summary {
    /// Reported for an empty selection: nothing worked, fully punctual.
    pub const ZERO: Summary = Summary {
        total_minutes: 0,
        unique_days_worked: 0,
        total_workable_days: 0,
        punctuality_percent: 100,
        late_arrival_count: 0,
        overtime_minutes: 0,
    };
}

impl Default for Summary {
    fn default() -> Self {
        Self::ZERO
    }
}
