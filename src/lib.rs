//! Fleetdesk: a dispatch desk for marine and geotechnical equipment.
//!
//! The core is [`recommend`], which ranks assets for a project by
//! availability, transit time, and capability. Around it sit a local
//! [`storage`] layer, [`dispatch`] for committing assets, and a [`report`]
//! renderer. The `fleetdesk` binary wires these to the command line.

pub mod cli;
pub mod config;
pub mod dispatch;
pub mod logging;
pub mod model;
pub mod recommend;
pub mod report;
pub mod seed;
pub mod storage;
