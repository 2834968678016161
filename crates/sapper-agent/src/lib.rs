//! Target planning over a constrained breadth-first search, and the engine
//! that drives one tracker update plus one plan per tick.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod engine;
pub mod planner;

pub use engine::Engine;
pub use planner::{decide, plan, Decision};
