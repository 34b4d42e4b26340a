//! ROI assumptions behind the fleet utilisation business case.

use serde::{Deserialize, Serialize};

/// Inputs to the annual recovery estimate, tuned from the admin commands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiAssumptions {
    /// Equipment sets in the fleet.
    pub asset_sets: f64,
    /// Day rate per set, in IDR.
    pub idr_per_day: f64,
    /// Idle days per set per year before dispatch planning.
    pub idle_days_baseline: f64,
    /// Mobilisation cost per job, in IDR.
    pub mobilization_cost_per_job: f64,
    pub jobs_per_year: f64,
    /// Gross margin per project as a fraction, e.g. 0.22.
    pub gross_margin_per_project: f64,
}

impl Default for RoiAssumptions {
    fn default() -> Self {
        Self {
            asset_sets: 8.0,
            idr_per_day: 115_000_000.0,
            idle_days_baseline: 35.0,
            mobilization_cost_per_job: 420_000_000.0,
            jobs_per_year: 14.0,
            gross_margin_per_project: 0.22,
        }
    }
}

impl RoiAssumptions {
    /// Every assumption with its setting name, in display order.
    pub fn fields(&self) -> [(&'static str, f64); 6] {
        [
            ("asset-sets", self.asset_sets),
            ("idr-per-day", self.idr_per_day),
            ("idle-days-baseline", self.idle_days_baseline),
            ("mobilization-cost-per-job", self.mobilization_cost_per_job),
            ("jobs-per-year", self.jobs_per_year),
            ("gross-margin-per-project", self.gross_margin_per_project),
        ]
    }

    /// The first assumption that is not a finite positive number.
    pub fn first_invalid(&self) -> Option<(&'static str, f64)> {
        self.fields()
            .into_iter()
            .find(|&(_, value)| !value.is_finite() || value <= 0.0)
    }

    /// Idle days recovered across the fleet plus mobilisation spend
    /// recovered across the year, in IDR.
    pub fn annual_recovery(&self) -> f64 {
        let utilization = self.asset_sets * self.idr_per_day * self.idle_days_baseline;
        let mobilization = self.jobs_per_year * self.mobilization_cost_per_job;
        utilization + mobilization
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_recovery() {
        // 8 * 115M * 35 + 14 * 420M
        assert_eq!(
            RoiAssumptions::default().annual_recovery(),
            38_080_000_000.0
        );
    }

    #[test]
    fn defaults_are_valid() {
        assert_eq!(RoiAssumptions::default().first_invalid(), None);
    }

    #[test]
    fn non_positive_and_non_finite_values_are_invalid() {
        let mut roi = RoiAssumptions {
            jobs_per_year: 0.0,
            ..RoiAssumptions::default()
        };
        assert_eq!(roi.first_invalid(), Some(("jobs-per-year", 0.0)));

        roi.jobs_per_year = 14.0;
        roi.idr_per_day = -1.0;
        assert_eq!(roi.first_invalid(), Some(("idr-per-day", -1.0)));

        roi.idr_per_day = f64::INFINITY;
        assert!(roi.first_invalid().is_some());
    }
}
