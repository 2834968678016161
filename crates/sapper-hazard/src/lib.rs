//! Hazard lifecycle tracking: detonation schedules, chain acceleration, and
//! the unsafe/claimed cell sets the planner prunes against.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod blast;
pub mod config;
pub mod tracker;

pub use blast::{blast_footprint, claim_targets};
pub use config::HazardConfig;
pub use tracker::{HazardTracker, UpdateDelta};
