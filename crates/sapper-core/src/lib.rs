//! Grid, classification, and action primitives shared by the sapper crates.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod action;
pub mod agent;
pub mod cell;
pub mod classify;
pub mod trace;
pub mod world;

pub use action::Action;
pub use agent::AgentState;
pub use cell::{Cell, SCAN_ORDER};
pub use classify::Classification;
pub use trace::{NullTraceSink, TraceEvent, TraceSink, VecTraceSink};
pub use world::GridView;
