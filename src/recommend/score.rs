//! The three sub-scores behind a recommendation.
//!
//! Each sub-score is computed independently and bounded by its own range:
//! availability 8..=40, ETA 8..=40, capability 0 or 8..=20.
//! The weights and decay rates are tuned constants and are kept as-is.

use jiff::civil::Date;

use crate::model::{Asset, ConstraintValue, Project};

pub const AVAILABILITY_MAX: f64 = 40.0;
/// Ceiling for an asset that is still busy. Always below [`AVAILABILITY_MAX`].
pub const AVAILABILITY_BUSY_MAX: f64 = 36.0;
pub const AVAILABILITY_MIN: f64 = 8.0;
pub const AVAILABILITY_DECAY_PER_DAY: f64 = 2.0;

pub const ETA_MAX: f64 = 40.0;
pub const ETA_MIN: f64 = 8.0;
pub const ETA_DECAY_PER_DAY: f64 = 3.0;

pub const CAPABILITY_MAX: f64 = 20.0;
pub const CAPABILITY_MIN: f64 = 8.0;
pub const RESTRICTED_PHASE_PENALTY: f64 = 6.0;

/// Optional constraint naming a phase the asset should not be sent into.
pub const RESTRICTED_PHASE_KEY: &str = "restricted_phase";

/// Bound `value` to `min..=max`.
///
/// Unlike [`f64::clamp`], never panics: `min` wins if the bounds cross,
/// and a NaN `value` comes back as `min`.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        return min;
    }
    value.min(max).max(min)
}

/// How soon the asset can be put to work, relative to `reference`.
///
/// Idle and standby assets score the maximum. Busy assets lose two
/// points per day until their availability date, bounded to 8..=36.
/// An availability date in the past counts as zero days out.
pub fn availability_score(asset: &Asset, reference: Date) -> f64 {
    if asset.status.is_immediately_available() {
        return AVAILABILITY_MAX;
    }
    let days = days_between(reference, asset.availability_date).max(0);
    clamp(
        AVAILABILITY_MAX - AVAILABILITY_DECAY_PER_DAY * f64::from(days),
        AVAILABILITY_MIN,
        AVAILABILITY_BUSY_MAX,
    )
}

/// Whole calendar days from `from` to `to`. Negative when `to` is earlier.
fn days_between(from: Date, to: Date) -> i32 {
    (to - from).get_days()
}

/// Transit estimate for one asset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Eta {
    /// Whole days in transit, never less than 1.
    pub days: u32,
    pub score: f64,
}

/// Transit days and the ETA sub-score.
///
/// Speed is floored at 1 km/day. Each day in transit costs three points,
/// so the best reachable score is 37 (one day out). A NaN distance is
/// unreachable: `u32::MAX` days at the minimum score.
pub fn eta(distance_km: f64, speed_km_per_day: f64) -> Eta {
    let raw = distance_km / speed_km_per_day.max(1.0);
    let days = if raw.is_nan() {
        f64::INFINITY
    } else {
        raw.ceil().max(1.0)
    };
    let score = clamp(ETA_MAX - ETA_DECAY_PER_DAY * days, ETA_MIN, ETA_MAX);

    // `days` is a whole number >= 1 or infinite; the cast saturates.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let days = days as u32;

    Eta { days, score }
}

/// Fit between the asset's capabilities and the project.
///
/// A different service line is a hard mismatch and scores 0.
/// A `restricted_phase` flag equal to the project's current phase
/// costs six points.
pub fn capability_score(asset: &Asset, project: &Project) -> f64 {
    if asset.service_line != project.service_line {
        return 0.0;
    }
    let restricted = asset
        .capability_profile
        .optional_constraints
        .get(RESTRICTED_PHASE_KEY)
        .and_then(ConstraintValue::as_text)
        == Some(project.phase.as_str());
    let penalty = if restricted {
        RESTRICTED_PHASE_PENALTY
    } else {
        0.0
    };
    clamp(CAPABILITY_MAX - penalty, CAPABILITY_MIN, CAPABILITY_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    use jiff::civil::date;

    use crate::model::{AssetStatus, ProjectPhase, ServiceLine};
    use crate::recommend::test_support::{asset, project};

    const TODAY: Date = date(2026, 2, 26);

    #[test]
    fn clamp_bounds_both_ways() {
        assert_eq!(clamp(50.0, 8.0, 36.0), 36.0);
        assert_eq!(clamp(-20.0, 8.0, 36.0), 8.0);
        assert_eq!(clamp(20.0, 8.0, 36.0), 20.0);
    }

    #[test]
    fn clamp_maps_nan_to_min() {
        assert_eq!(clamp(f64::NAN, 8.0, 36.0), 8.0);
    }

    #[test]
    fn nan_distance_is_unreachable() {
        let e = eta(f64::NAN, 95.0);
        assert_eq!(e.days, u32::MAX);
        assert_eq!(e.score, 8.0);
    }

    #[test]
    fn idle_and_standby_score_full_availability() {
        for status in [AssetStatus::Idle, AssetStatus::Standby] {
            let mut a = asset("a", ServiceLine::Dredging);
            a.status = status;
            a.availability_date = date(2027, 1, 1);
            assert_eq!(availability_score(&a, TODAY), 40.0);
        }
    }

    #[test]
    fn busy_asset_available_today_is_capped_below_free() {
        let mut a = asset("a", ServiceLine::Dredging);
        a.status = AssetStatus::Working;
        a.availability_date = TODAY;
        assert_eq!(availability_score(&a, TODAY), 36.0);
    }

    #[test]
    fn overdue_availability_earns_no_bonus() {
        let mut a = asset("a", ServiceLine::Dredging);
        a.status = AssetStatus::Maintenance;
        a.availability_date = date(2026, 1, 1);
        assert_eq!(availability_score(&a, TODAY), 36.0);
    }

    #[test]
    fn availability_decays_two_points_per_day() {
        let mut a = asset("a", ServiceLine::Dredging);
        a.status = AssetStatus::Mobilizing;
        a.availability_date = date(2026, 3, 2);
        assert_eq!(availability_score(&a, TODAY), 32.0);
        a.availability_date = date(2026, 3, 10);
        assert_eq!(availability_score(&a, TODAY), 16.0);
    }

    #[test]
    fn far_future_availability_floors_at_eight() {
        let mut a = asset("a", ServiceLine::Dredging);
        a.status = AssetStatus::Working;
        a.availability_date = date(2026, 3, 28);
        assert_eq!(availability_score(&a, TODAY), 8.0);
    }

    #[test]
    fn zero_distance_is_one_day() {
        assert_eq!(
            eta(0.0, 95.0),
            Eta {
                days: 1,
                score: 37.0
            }
        );
    }

    #[test]
    fn partial_days_round_up() {
        assert_eq!(eta(190.1, 95.0).days, 3);
        assert_eq!(eta(190.0, 95.0).days, 2);
        assert_eq!(eta(190.0, 95.0).score, 34.0);
    }

    #[test]
    fn speed_is_floored_at_one() {
        assert_eq!(eta(10.0, 0.0).days, 10);
        assert_eq!(eta(10.0, -50.0).days, 10);
    }

    #[test]
    fn long_transit_floors_at_eight() {
        let e = eta(5000.0, 80.0);
        assert_eq!(e.days, 63);
        assert_eq!(e.score, 8.0);
    }

    #[test]
    fn service_line_mismatch_scores_zero() {
        let a = asset("a", ServiceLine::Dredging);
        let p = project(ServiceLine::Dewatering, ProjectPhase::Operasi);
        assert_eq!(capability_score(&a, &p), 0.0);
    }

    #[test]
    fn matching_service_line_scores_full() {
        let a = asset("a", ServiceLine::Dewatering);
        let p = project(ServiceLine::Dewatering, ProjectPhase::Operasi);
        assert_eq!(capability_score(&a, &p), 20.0);
    }

    #[test]
    fn restricted_phase_costs_six_points() {
        let mut a = asset("a", ServiceLine::Dredging);
        a.capability_profile.optional_constraints.insert(
            RESTRICTED_PHASE_KEY.into(),
            ConstraintValue::Text("Operasi".into()),
        );
        let p = project(ServiceLine::Dredging, ProjectPhase::Operasi);
        assert_eq!(capability_score(&a, &p), 14.0);

        let other_phase = project(ServiceLine::Dredging, ProjectPhase::Survey);
        assert_eq!(capability_score(&a, &other_phase), 20.0);
    }

    #[test]
    fn restricted_phase_must_be_text() {
        let mut a = asset("a", ServiceLine::Dredging);
        a.capability_profile
            .optional_constraints
            .insert(RESTRICTED_PHASE_KEY.into(), ConstraintValue::Flag(true));
        let p = project(ServiceLine::Dredging, ProjectPhase::Operasi);
        assert_eq!(capability_score(&a, &p), 20.0);
    }

    #[test]
    fn restricted_phase_does_not_apply_across_service_lines() {
        let mut a = asset("a", ServiceLine::Dredging);
        a.capability_profile.optional_constraints.insert(
            RESTRICTED_PHASE_KEY.into(),
            ConstraintValue::Text("Operasi".into()),
        );
        let p = project(ServiceLine::SoilImprovement, ProjectPhase::Operasi);
        assert_eq!(capability_score(&a, &p), 0.0);
    }
}
