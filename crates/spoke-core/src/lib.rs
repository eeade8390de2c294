//! Core types for the Spoke traffic simulation.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by every other crate in the workspace: agent
//! and tick identifiers, grid coordinates, agent kinds, and the error
//! taxonomy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;

pub use error::{ConfigError, OutOfBoundsError, SimError};
pub use id::{AgentId, AgentKind, Coord, TickId};
