//! Agent kinds and movement rules for Spoke simulations.
//!
//! Every agent exposes the [`Advance`] capability. Two implementations
//! ship with the crate:
//!
//! - [`Person`]: stationary; `advance` never touches the grid.
//! - [`Bicycle`]: rides along the road, wrapping at the grid edge, and
//!   waits in place when the next cell is not road.
//!
//! [`Agent`] pairs an [`AgentId`](spoke_core::AgentId) with one of these
//! behaviours and is what the engine stores and steps.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod agent;
pub mod bicycle;
pub mod movement;
pub mod person;

pub use agent::{Agent, Behavior};
pub use bicycle::Bicycle;
pub use movement::{Advance, MoveOutcome};
pub use person::Person;
