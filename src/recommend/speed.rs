//! Speed resolution: equipment type to transit speed.

use std::collections::HashMap;

use crate::model::SpeedProfile;

/// Transit speed assumed for equipment types with no configured profile.
pub const FALLBACK_SPEED_KM_PER_DAY: f64 = 120.0;

/// Transit speed for `kind`, looked up in a list of profiles.
///
/// The first profile whose type matches exactly wins.
/// Unknown types resolve to [`FALLBACK_SPEED_KM_PER_DAY`].
pub fn resolve_speed(kind: &str, profiles: &[SpeedProfile]) -> f64 {
    profiles
        .iter()
        .find(|p| p.kind == kind)
        .map_or(FALLBACK_SPEED_KM_PER_DAY, |p| p.speed_km_per_day)
}

/// Speed profiles keyed by equipment type.
///
/// Holds at most one speed per type. A miss is a normal case and
/// resolves to [`FALLBACK_SPEED_KM_PER_DAY`]. Configured speeds are
/// not validated here; non-positive values pass through unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpeedTable {
    speeds: HashMap<String, f64>,
}

impl SpeedTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the speed for `kind`, replacing any earlier entry.
    pub fn insert(&mut self, kind: impl Into<String>, speed_km_per_day: f64) {
        self.speeds.insert(kind.into(), speed_km_per_day);
    }

    pub fn resolve(&self, kind: &str) -> f64 {
        self.speeds
            .get(kind)
            .copied()
            .unwrap_or(FALLBACK_SPEED_KM_PER_DAY)
    }

    /// Whether `kind` has a configured speed.
    pub fn contains(&self, kind: &str) -> bool {
        self.speeds.contains_key(kind)
    }

    pub fn len(&self) -> usize {
        self.speeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.speeds.is_empty()
    }

    /// Profiles sorted by type.
    pub fn profiles(&self) -> Vec<SpeedProfile> {
        let mut profiles: Vec<SpeedProfile> = self
            .speeds
            .iter()
            .map(|(kind, speed)| SpeedProfile::new(kind.clone(), *speed))
            .collect();
        profiles.sort_by(|a, b| a.kind.cmp(&b.kind));
        profiles
    }
}

impl<'a> FromIterator<&'a SpeedProfile> for SpeedTable {
    /// Builds a table from profiles. Where a type repeats,
    /// the first occurrence wins, matching [`resolve_speed`].
    fn from_iter<I: IntoIterator<Item = &'a SpeedProfile>>(iter: I) -> Self {
        let mut speeds = HashMap::new();
        for profile in iter {
            speeds
                .entry(profile.kind.clone())
                .or_insert(profile.speed_km_per_day);
        }
        Self { speeds }
    }
}

impl From<&[SpeedProfile]> for SpeedTable {
    fn from(profiles: &[SpeedProfile]) -> Self {
        profiles.iter().collect()
    }
}
