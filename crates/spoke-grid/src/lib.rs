//! Grid state for Spoke simulations.
//!
//! This crate defines [`GridState`], the authoritative occupancy index
//! for a square lattice, together with the [`RoadMask`] predicate that
//! decides which cells a mobile agent may enter.
//!
//! # Road layouts
//!
//! The mask is an opaque boolean matrix. [`RoadLayout`] covers the common
//! shapes (a horizontal lane, a vertical lane, an explicit cell list), and
//! [`RoadMask::from_fn`] / [`RoadMask::from_rows`] accept anything else.
//! Nothing in the grid assumes a single-row lane.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bounds;
pub mod grid;
pub mod road;

pub use grid::GridState;
pub use road::{RoadLayout, RoadMask};
