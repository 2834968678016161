//! Umbrella crate that re-exports the `sapper-*` building blocks.
//!
//! Most hosts depend on this crate with default features and drive
//! `agent::Engine` once per tick; the member crates stay available for
//! leaner builds.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

#[cfg(feature = "core")]
#[cfg_attr(docsrs, doc(cfg(feature = "core")))]
pub use sapper_core as core;

#[cfg(feature = "hazard")]
#[cfg_attr(docsrs, doc(cfg(feature = "hazard")))]
pub use sapper_hazard as hazard;

#[cfg(feature = "agent")]
#[cfg_attr(docsrs, doc(cfg(feature = "agent")))]
pub use sapper_agent as agent;
