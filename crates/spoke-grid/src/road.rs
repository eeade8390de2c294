//! Road predicate materialized as a boolean matrix.

use crate::bounds::{self, canonical_rank};
use serde::{Deserialize, Serialize};
use spoke_core::{ConfigError, Coord, OutOfBoundsError};

/// Common road shapes, materialized by [`RoadMask::from_layout`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoadLayout {
    /// A full horizontal lane at row `y`.
    Row(u32),
    /// A full vertical lane at column `x`.
    Column(u32),
    /// An explicit set of road cells.
    Cells(Vec<Coord>),
}

impl RoadLayout {
    /// The default lane: the horizontal row through the middle of the grid.
    pub fn default_for(size: u32) -> Self {
        Self::Row(size / 2)
    }
}

/// A `size × size` boolean matrix marking cells a bicycle may enter.
///
/// Stored row-major: cell `(x, y)` lives at `y * size + x`. Immutable
/// once built; the engine shares it with snapshots behind an `Arc`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RoadMask {
    size: u32,
    cells: Vec<bool>,
}

impl RoadMask {
    /// Materialize an arbitrary predicate over every cell of the grid.
    ///
    /// Returns `Err(ConfigError::InvalidSize)` if `size` is zero.
    pub fn from_fn(size: u32, is_road: impl FnMut(Coord) -> bool) -> Result<Self, ConfigError> {
        if size == 0 {
            return Err(ConfigError::InvalidSize { size });
        }
        let cells = bounds::canonical_ordering(size)
            .into_iter()
            .map(is_road)
            .collect();
        Ok(Self { size, cells })
    }

    /// Build a mask from explicit rows, `rows[y][x]`.
    ///
    /// Fails with [`ConfigError::RoadMaskShape`] unless there are exactly
    /// `size` rows of `size` entries each.
    pub fn from_rows(size: u32, rows: &[Vec<bool>]) -> Result<Self, ConfigError> {
        if size == 0 {
            return Err(ConfigError::InvalidSize { size });
        }
        let n = size as usize;
        let bad_row = rows.iter().find(|r| r.len() != n);
        if rows.len() != n || bad_row.is_some() {
            let width = bad_row.or(rows.first()).map_or(0, Vec::len);
            return Err(ConfigError::RoadMaskShape {
                size,
                rows: rows.len(),
                width,
            });
        }
        let cells = rows.iter().flatten().copied().collect();
        Ok(Self { size, cells })
    }

    /// Materialize one of the standard [`RoadLayout`] shapes.
    pub fn from_layout(size: u32, layout: &RoadLayout) -> Result<Self, ConfigError> {
        match layout {
            RoadLayout::Row(lane) => {
                if *lane >= size {
                    return Err(ConfigError::RoadLaneOutOfBounds { lane: *lane, size });
                }
                Self::from_fn(size, |c| c.y == *lane)
            }
            RoadLayout::Column(lane) => {
                if *lane >= size {
                    return Err(ConfigError::RoadLaneOutOfBounds { lane: *lane, size });
                }
                Self::from_fn(size, |c| c.x == *lane)
            }
            RoadLayout::Cells(cells) => {
                let mut mask = Self::from_fn(size, |_| false)?;
                for &coord in cells {
                    let rank = canonical_rank(coord, size)
                        .ok_or(ConfigError::RoadCellOutOfBounds { coord, size })?;
                    mask.cells[rank] = true;
                }
                Ok(mask)
            }
        }
    }

    /// Grid side length.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Whether `coord` is a road cell.
    ///
    /// Returns `Err` for coordinates outside the grid.
    pub fn is_road(&self, coord: Coord) -> Result<bool, OutOfBoundsError> {
        canonical_rank(coord, self.size)
            .map(|rank| self.cells[rank])
            .ok_or(OutOfBoundsError {
                coord,
                size: self.size,
            })
    }

    /// All road cells in row-major order.
    pub fn road_cells(&self) -> Vec<Coord> {
        bounds::canonical_ordering(self.size)
            .into_iter()
            .zip(&self.cells)
            .filter_map(|(c, &road)| road.then_some(c))
            .collect()
    }

    /// Number of road cells.
    pub fn road_count(&self) -> usize {
        self.cells.iter().filter(|&&road| road).count()
    }

    /// Iterate the matrix one row (`y`) at a time.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells.chunks(self.size as usize)
    }

    /// Copy the mask out as `rows[y][x]`.
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.rows().map(<[bool]>::to_vec).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_is_middle_row() {
        assert_eq!(RoadLayout::default_for(20), RoadLayout::Row(10));
        assert_eq!(RoadLayout::default_for(8), RoadLayout::Row(4));
    }

    #[test]
    fn row_layout_marks_one_row() {
        let mask = RoadMask::from_layout(8, &RoadLayout::Row(4)).unwrap();
        assert_eq!(mask.road_count(), 8);
        for x in 0..8 {
            assert!(mask.is_road(Coord::new(x, 4)).unwrap());
            assert!(!mask.is_road(Coord::new(x, 7)).unwrap());
        }
    }

    #[test]
    fn column_layout_marks_one_column() {
        let mask = RoadMask::from_layout(5, &RoadLayout::Column(2)).unwrap();
        assert_eq!(
            mask.road_cells(),
            (0..5).map(|y| Coord::new(2, y)).collect::<Vec<_>>()
        );
    }

    #[test]
    fn cells_layout_dedups_and_rejects_out_of_bounds() {
        let layout = RoadLayout::Cells(vec![Coord::new(1, 1), Coord::new(1, 1), Coord::new(3, 0)]);
        let mask = RoadMask::from_layout(4, &layout).unwrap();
        assert_eq!(mask.road_cells(), vec![Coord::new(3, 0), Coord::new(1, 1)]);

        let bad = RoadLayout::Cells(vec![Coord::new(4, 0)]);
        assert_eq!(
            RoadMask::from_layout(4, &bad),
            Err(ConfigError::RoadCellOutOfBounds {
                coord: Coord::new(4, 0),
                size: 4
            })
        );
    }

    #[test]
    fn lane_outside_grid_rejected() {
        assert_eq!(
            RoadMask::from_layout(4, &RoadLayout::Row(4)),
            Err(ConfigError::RoadLaneOutOfBounds { lane: 4, size: 4 })
        );
    }

    #[test]
    fn zero_size_rejected() {
        assert_eq!(
            RoadMask::from_fn(0, |_| true),
            Err(ConfigError::InvalidSize { size: 0 })
        );
    }

    #[test]
    fn from_rows_checks_shape() {
        let ok = vec![vec![true, false], vec![false, true]];
        let mask = RoadMask::from_rows(2, &ok).unwrap();
        assert!(mask.is_road(Coord::new(0, 0)).unwrap());
        assert!(mask.is_road(Coord::new(1, 1)).unwrap());
        assert_eq!(mask.to_rows(), ok);

        let ragged = vec![vec![true, false], vec![false]];
        assert!(matches!(
            RoadMask::from_rows(2, &ragged),
            Err(ConfigError::RoadMaskShape { width: 1, .. })
        ));

        let short = vec![vec![true, false]];
        assert!(matches!(
            RoadMask::from_rows(2, &short),
            Err(ConfigError::RoadMaskShape { rows: 1, .. })
        ));
    }

    #[test]
    fn is_road_out_of_bounds_errors() {
        let mask = RoadMask::from_layout(3, &RoadLayout::Row(1)).unwrap();
        assert!(mask.is_road(Coord::new(0, 3)).is_err());
    }

    #[test]
    fn diagonal_predicate() {
        let mask = RoadMask::from_fn(4, |c| c.x == c.y).unwrap();
        assert_eq!(mask.road_count(), 4);
        assert!(mask.is_road(Coord::new(2, 2)).unwrap());
        assert!(!mask.is_road(Coord::new(2, 1)).unwrap());
    }
}
