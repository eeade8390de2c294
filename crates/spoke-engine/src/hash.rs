//! Hashing utilities for snapshot comparison.
//!
//! Uses FNV-1a for fast, deterministic hashing of simulation state.
//! These hashes are not cryptographically secure; they are used for
//! fast equality checks when comparing two runs tick by tick.

use crate::snapshot::Snapshot;

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_bytes(mut hash: u64, bytes: &[u8]) -> u64 {
    for &b in bytes {
        hash = (hash ^ b as u64).wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Compute a hash over the tick and every agent position in a snapshot.
///
/// Positions are folded in snapshot order (agent insertion order), so two
/// snapshots hash equal only if they agree on tick, agents, and cells.
/// The road mask and stations are fixed per run and not hashed.
pub fn snapshot_hash(snapshot: &Snapshot) -> u64 {
    let mut hash = fnv1a_bytes(FNV_OFFSET, &snapshot.time_step().0.to_le_bytes());
    for (id, coord) in snapshot.positions() {
        hash = fnv1a_bytes(hash, &id.0.to_le_bytes());
        hash = fnv1a_bytes(hash, &coord.x.to_le_bytes());
        hash = fnv1a_bytes(hash, &coord.y.to_le_bytes());
    }
    hash
}
