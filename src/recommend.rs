//! Asset recommendation: rank candidate assets for a project.
//!
//! Every candidate gets three sub-scores (see [`score`]):
//!
//! - availability, 0..=40: how soon the asset is free
//! - ETA, 0..=40: how long transit to the site takes
//! - capability, 0..=20: service line and phase compatibility
//!
//! The total is their rounded sum. Results are ranked by total, highest
//! first; equal totals keep the order the assets were given in.
//!
//! Pure computation: no I/O, no shared state. "Today" is passed in as
//! `reference` so results are reproducible.

pub mod geo;
pub mod score;
pub mod speed;

use jiff::civil::Date;
use serde::Serialize;

use crate::model::{Asset, Project};

pub use geo::distance_km;
pub use speed::{FALLBACK_SPEED_KM_PER_DAY, SpeedTable, resolve_speed};

/// The sub-scores behind a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Breakdown {
    pub availability: f64,
    pub eta: f64,
    pub capability: f64,
}

impl Breakdown {
    /// The rounded sum of the sub-scores.
    // Each sub-score is bounded, so the sum sits in 0..=100.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn total(&self) -> u32 {
        (self.availability + self.eta + self.capability).round() as u32
    }

    /// Each sub-score against its maximum, e.g.
    /// `Availability 40/40, Distance/ETA 37/40, Capability 20/20`.
    pub fn explanation(&self) -> String {
        format!(
            "Availability {:.0}/{:.0}, Distance/ETA {:.0}/{:.0}, Capability {:.0}/{:.0}",
            self.availability,
            score::AVAILABILITY_MAX,
            self.eta,
            score::ETA_MAX,
            self.capability,
            score::CAPABILITY_MAX,
        )
    }
}

/// One ranked candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation<'a> {
    pub asset: &'a Asset,
    pub score: u32,

    /// Straight-line distance to the site, rounded to whole kilometres.
    pub distance_km: u32,

    /// Whole days in transit, at least 1. `u32::MAX` when the asset's
    /// position is unknown.
    pub eta_days: u32,

    pub why: Breakdown,
    pub explanation: String,
}

/// Score a single asset against a project.
pub fn score_asset<'a>(
    project: &Project,
    asset: &'a Asset,
    speeds: &SpeedTable,
    reference: Date,
) -> Recommendation<'a> {
    let mut distance = distance_km(asset.position, project.position);
    if distance.is_nan() {
        // Unknown position: as far away as it gets.
        distance = f64::INFINITY;
    }
    let eta = score::eta(distance, speeds.resolve(&asset.kind));
    let why = Breakdown {
        availability: score::availability_score(asset, reference),
        eta: eta.score,
        capability: score::capability_score(asset, project),
    };

    // Distances are non-negative; an infinite one saturates.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let distance_km = distance.round() as u32;

    Recommendation {
        asset,
        score: why.total(),
        distance_km,
        eta_days: eta.days,
        why,
        explanation: why.explanation(),
    }
}

/// Rank `assets` for `project`, best first.
///
/// Ties keep input order (the sort is stable).
pub fn recommend_assets<'a>(
    project: &Project,
    assets: &'a [Asset],
    speeds: &SpeedTable,
    reference: Date,
) -> Vec<Recommendation<'a>> {
    let mut ranked: Vec<Recommendation<'a>> = assets
        .iter()
        .map(|asset| score_asset(project, asset, speeds, reference))
        .collect();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));

    tracing::debug!(
        project = %project.id,
        candidates = assets.len(),
        best = ranked.first().map(|r| r.asset.id.as_str()),
        "ranked assets"
    );
    ranked
}

/// The `n` best candidates for `project`.
pub fn recommend_top<'a>(
    project: &Project,
    assets: &'a [Asset],
    speeds: &SpeedTable,
    reference: Date,
    n: usize,
) -> Vec<Recommendation<'a>> {
    let mut ranked = recommend_assets(project, assets, speeds, reference);
    ranked.truncate(n);
    ranked
}
