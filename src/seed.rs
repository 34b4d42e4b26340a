//! Demo data set: the fleet, projects, speed profiles, and history a fresh
//! store starts with, and that `admin reset` restores.

use jiff::{
    Timestamp,
    civil::{Date, date},
};
use uuid::Uuid;

use crate::model::{
    Asset, AssetStatus, Assignment, AssignmentStatus, CapabilityProfile, ChecklistItem,
    Coordinates, DailyLog, Project, ProjectPhase, ServiceLine, SpeedProfile,
};

/// When the demo data was last touched: 2026-02-26T08:00:00Z.
pub const SEEDED_AT: Timestamp = Timestamp::constant(1_772_092_800, 0);

/// The "today" the demo data was written against.
pub const DEMO_REFERENCE_DATE: Date = date(2026, 2, 26);

/// Progress unit for the seeded daily logs.
const LOG_UNIT: &str = "m3/day";

type AssetRow = (
    &'static str,
    &'static str,
    &'static str,
    ServiceLine,
    (f64, f64),
    AssetStatus,
    Date,
    &'static [&'static str],
    &'static str,
);

#[rustfmt::skip]
const ASSETS: [AssetRow; 9] = [
    ("a1", "CSD Barito 1", "CSD", ServiceLine::Dredging, (-6.104, 106.81), AssetStatus::Working, date(2026, 3, 10), &["Draft > 2m"], "1000-1500 m3/day"),
    ("a2", "CSD Mahakam 2", "CSD", ServiceLine::Dredging, (-1.24, 116.85), AssetStatus::Maintenance, date(2026, 3, 22), &["Draft > 2.5m"], "1200-1800 m3/day"),
    ("a3", "Pontoon Alpha", "Pontoon Excavator", ServiceLine::Dredging, (-3.99, 122.51), AssetStatus::Idle, date(2026, 2, 26), &["Shallow water"], "600-900 m3/day"),
    ("a4", "Pump Set Dewater X", "Pump Set", ServiceLine::Dewatering, (-7.25, 112.75), AssetStatus::Mobilizing, date(2026, 3, 2), &["Power supply"], "1800-2100 m3/hr"),
    ("a5", "PVD Rig Sumatra", "PVD Rig", ServiceLine::SoilImprovement, (3.59, 98.67), AssetStatus::Working, date(2026, 4, 2), &["Ground access"], "3000 m/day"),
    ("a6", "Acetube Delta", "Acetube System", ServiceLine::Dewatering, (-0.88, 131.25), AssetStatus::Standby, date(2026, 2, 26), &["Wide area"], "Site dependent"),
    ("a7", "Support Tug Bima", "Support Tug", ServiceLine::Dredging, (-5.14, 119.42), AssetStatus::Working, date(2026, 3, 12), &[], "Support operations"),
    ("a8", "Pump Set Y", "Pump Set", ServiceLine::Dewatering, (-2.99, 104.75), AssetStatus::Idle, date(2026, 2, 26), &["Power supply"], "1600 m3/hr"),
    ("a9", "PVD Rig Java", "PVD Rig", ServiceLine::SoilImprovement, (-6.23, 107.9), AssetStatus::Working, date(2026, 4, 9), &["Ground access"], "2800-3400 m/day"),
];

type ProjectRow = (
    &'static str,
    &'static str,
    &'static str,
    ServiceLine,
    ProjectPhase,
    (Date, Date),
    u32,
    (f64, f64),
    &'static str,
);

#[rustfmt::skip]
const PROJECTS: [ProjectRow; 7] = [
    ("p1", "Pelabuhan Patimban Ext", "Port", ServiceLine::Dredging, ProjectPhase::Operasi, (date(2026, 1, 12), date(2026, 9, 10)), 1, (-6.24, 107.9), "Weather window shifts"),
    ("p2", "IKN Bay Bypass", "Municipality", ServiceLine::SoilImprovement, ProjectPhase::Survey, (date(2026, 3, 28), date(2026, 12, 20)), 2, (-1.19, 116.86), "Permit pacing"),
    ("p3", "KPC Pit Dewatering", "Mining", ServiceLine::Dewatering, ProjectPhase::Perakitan, (date(2026, 2, 1), date(2026, 5, 25)), 1, (0.44, 117.54), "High rainfall"),
    ("p4", "Belawan Deepening", "Port", ServiceLine::Dredging, ProjectPhase::Mobilisasi, (date(2026, 3, 8), date(2026, 10, 10)), 3, (3.78, 98.69), "Traffic congestion"),
    ("p5", "Gresik Smelter Prep", "Industrial", ServiceLine::SoilImprovement, ProjectPhase::Lokasi, (date(2026, 3, 15), date(2026, 11, 30)), 2, (-7.16, 112.65), "Tight baseline"),
    ("p6", "Sorong Port Rehab", "Port", ServiceLine::Dredging, ProjectPhase::Disposal, (date(2025, 10, 1), date(2026, 3, 20)), 4, (-0.87, 131.24), "Remote logistics"),
    ("p7", "Batam Industrial Dewater", "Industrial", ServiceLine::Dewatering, ProjectPhase::Survey, (date(2026, 4, 4), date(2026, 8, 30)), 2, (1.08, 104.03), "Utility relocation"),
];

type LogRow = (Date, f64, f64, &'static [&'static str], &'static str);

#[rustfmt::skip]
const LOGS: [LogRow; 16] = [
    (date(2026, 2, 10), 8.0, 4.2, &[], "Normal output"),
    (date(2026, 2, 11), 7.0, 4.0, &["Weather"], "Rain interruption"),
    (date(2026, 2, 12), 9.0, 4.8, &[], "Stable shift"),
    (date(2026, 2, 13), 8.0, 4.1, &["Mechanical"], "Pump belt replaced"),
    (date(2026, 2, 14), 9.0, 5.0, &[], "Recovered"),
    (date(2026, 2, 15), 8.0, 4.6, &["Permit"], "Client inspection"),
    (date(2026, 2, 16), 10.0, 5.2, &[], "High tide support"),
    (date(2026, 2, 17), 8.0, 4.7, &[], "In line"),
    (date(2026, 2, 18), 6.0, 3.2, &["Fuel Delay"], "Barge delayed"),
    (date(2026, 2, 19), 9.0, 5.1, &[], "Recovered"),
    (date(2026, 2, 20), 8.0, 4.4, &[], "Normal"),
    (date(2026, 2, 21), 8.0, 4.3, &["Crew"], "Shift gap"),
    (date(2026, 2, 22), 10.0, 5.3, &[], "Weekend ops"),
    (date(2026, 2, 23), 9.0, 5.0, &[], "Steady"),
    (date(2026, 2, 24), 8.0, 4.6, &["Other"], "Minor inspection delay"),
    (date(2026, 2, 25), 9.0, 5.2, &[], "On pace"),
];

/// Recognised downtime reasons for daily logs.
pub const DOWNTIME_TAGS: [&str; 6] = ["Weather", "Mechanical", "Permit", "Crew", "Fuel Delay", "Other"];

/// Transit speeds for the equipment types in the demo fleet.
pub fn default_speed_profiles() -> Vec<SpeedProfile> {
    vec![
        SpeedProfile::new("CSD", 95.0),
        SpeedProfile::new("Pontoon Excavator", 80.0),
        SpeedProfile::new("Pump Set", 260.0),
        SpeedProfile::new("PVD Rig", 120.0),
        SpeedProfile::new("Acetube System", 220.0),
        SpeedProfile::new("Support Tug", 180.0),
    ]
}

pub fn assets() -> Vec<Asset> {
    ASSETS
        .iter()
        .map(
            |&(id, name, kind, service_line, (lat, lng), status, available, constraints, range)| {
                Asset {
                    id: id.to_string(),
                    name: name.to_string(),
                    kind: kind.to_string(),
                    service_line,
                    home_base: None,
                    position: Coordinates::new(lat, lng),
                    status,
                    availability_date: available,
                    capability_profile: CapabilityProfile {
                        constraints: constraints.iter().map(ToString::to_string).collect(),
                        production_range: range.to_string(),
                        ..CapabilityProfile::default()
                    },
                    last_update_at: SEEDED_AT,
                    last_update_by: None,
                }
            },
        )
        .collect()
}

pub fn projects() -> Vec<Project> {
    PROJECTS
        .iter()
        .map(
            |&(id, name, client, service_line, phase, (start, end), priority, (lat, lng), risks)| {
                Project {
                    id: id.to_string(),
                    name: name.to_string(),
                    client_type: client.to_string(),
                    service_line,
                    phase,
                    planned_start: start,
                    planned_end: end,
                    priority,
                    position: Coordinates::new(lat, lng),
                    notes: None,
                    risks: Some(risks.to_string()),
                    last_update_at: SEEDED_AT,
                }
            },
        )
        .collect()
}

pub fn assignments() -> Vec<Assignment> {
    vec![
        Assignment {
            id: seed_id(0xa551, 1),
            project_id: "p1".into(),
            asset_id: "a1".into(),
            eta_estimate: date(2026, 3, 3),
            mobilization_checklist: vec![ChecklistItem {
                item: "Crew manifest".into(),
                done: true,
            }],
            risk_notes: "Night shift permit pending".into(),
            status: AssignmentStatus::Active,
            created_at: SEEDED_AT,
            created_by: None,
        },
        Assignment {
            id: seed_id(0xa551, 2),
            project_id: "p3".into(),
            asset_id: "a4".into(),
            eta_estimate: date(2026, 2, 28),
            mobilization_checklist: vec![ChecklistItem::open("Power genset")],
            risk_notes: "Road condition wet".into(),
            status: AssignmentStatus::Planned,
            created_at: SEEDED_AT,
            created_by: None,
        },
    ]
}

/// Sixteen days of history, alternating between Patimban (p1) and
/// the KPC pit (p3).
pub fn daily_logs() -> Vec<DailyLog> {
    LOGS.iter()
        .enumerate()
        .map(|(idx, &(day, hours, progress, tags, notes))| DailyLog {
            id: seed_id(0x1095, idx as u128 + 1),
            project_id: if idx % 2 == 1 { "p3" } else { "p1" }.into(),
            asset_id: if idx % 3 == 0 { "a4" } else { "a1" }.into(),
            date: day,
            hours_worked: hours,
            progress_value: progress,
            progress_unit: LOG_UNIT.into(),
            downtime_tags: tags.iter().map(ToString::to_string).collect(),
            notes: notes.into(),
            attachments: vec![],
        })
        .collect()
}

/// Stable ids for seeded rows, so a reset reproduces the same records.
fn seed_id(namespace: u128, n: u128) -> Uuid {
    Uuid::from_u128((namespace << 64) | n)
}
