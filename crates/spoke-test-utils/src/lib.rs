//! Test fixtures for Spoke development.
//!
//! Provides configuration builders and engine constructors with pinned
//! agent positions, so scenario tests can start from an exact layout
//! instead of a seeded random one.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{
    bicycle_at, collect_hashes, empty_config, lane_config, lane_grid, populated_config,
};
