//! Shared helpers for square-grid coordinate arithmetic.

use spoke_core::{Coord, OutOfBoundsError};

/// Check that `coord` lies in `[0, size) × [0, size)`.
pub fn check_bounds(coord: Coord, size: u32) -> Result<Coord, OutOfBoundsError> {
    if coord.within(size) {
        Ok(coord)
    } else {
        Err(OutOfBoundsError { coord, size })
    }
}

/// Row-major canonical ordering: `(0,0), (1,0), ..., (size-1, size-1)`.
///
/// Rows (`y`) are the outer loop, so every cell of row 0 precedes row 1.
pub fn canonical_ordering(size: u32) -> Vec<Coord> {
    let mut out = Vec::with_capacity((size as usize) * (size as usize));
    for y in 0..size {
        for x in 0..size {
            out.push(Coord::new(x, y));
        }
    }
    out
}

/// Flat row-major index of an in-bounds coordinate.
pub fn canonical_rank(coord: Coord, size: u32) -> Option<usize> {
    if coord.within(size) {
        Some((coord.y as usize) * (size as usize) + coord.x as usize)
    } else {
        None
    }
}

/// Advance `val` by `offset` along an axis of length `len`, wrapping
/// periodically. Computed in `u64` so `val + offset` cannot overflow.
///
/// # Panics
///
/// Panics if `len` is zero. Grids reject zero size at construction.
pub fn wrap_axis(val: u32, offset: u32, len: u32) -> u32 {
    ((val as u64 + offset as u64) % len as u64) as u32
}
