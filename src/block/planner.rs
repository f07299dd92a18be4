use crate::error::AlignError;

/// Chooses a tile edge (shared border included) for an axis of length `n`.
///
/// Scans the divisors `d` of `n` from 1 upward and keeps the one closest to `sqrt(n)`; the first
/// divisor found wins ties. The tile edge is `d + 1`, so `d` computed cells plus one border cell
/// shared with the neighbouring tile. Returns `None` for `n == 0`, which has nothing to tile.
pub fn best_tile_size(n: usize) -> Option<usize> {
    let sqrt_n = (n as f64).sqrt();

    let mut min_diff = f64::INFINITY;
    let mut best_tile = None;
    for d in (1..=n).filter(|d| n % d == 0) {
        let diff = (sqrt_n - d as f64).abs();
        if diff < min_diff {
            min_diff = diff;
            best_tile = Some(d + 1);
        }
    }

    best_tile
}

/// Every tile edge that covers an axis of length `n` exactly, ascending
pub fn feasible_tile_sizes(n: usize) -> Vec<usize> {
    (1..=n).filter(|d| n % d == 0).map(|d| d + 1).collect()
}

/// Number of tiles `k` of edge `tile` with `(tile - 1) * k + 1 == n + 1`, neighbours overlapping
/// by one shared cell
pub fn tile_count(n: usize, tile: usize) -> Result<usize, AlignError> {
    if tile < 2 {
        return Err(AlignError::InvalidTileSize { tile });
    }
    if n == 0 || n % (tile - 1) != 0 {
        return Err(AlignError::InfeasibleTiling { len: n, tile });
    }
    Ok(n / (tile - 1))
}

/// Tiling of a single axis of the matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisPlan {
    /// Tile edge including the shared border cell
    pub tile: usize,
    /// Number of tiles along the axis
    pub count: usize,
}

impl AxisPlan {
    pub fn new(len: usize, tile: usize) -> Result<Self, AlignError> {
        Ok(AxisPlan {
            tile,
            count: tile_count(len, tile)?,
        })
    }

    /// Fails unless the tiles cover exactly `len` computed cells, so that every tile of the plan
    /// lies inside a matrix axis of `len + 1` cells and the last tile ends on its last cell
    pub fn check_covers(&self, len: usize) -> Result<(), AlignError> {
        if self.tile < 2 {
            return Err(AlignError::InvalidTileSize { tile: self.tile });
        }
        match (self.tile - 1).checked_mul(self.count) {
            Some(covered) if covered == len => Ok(()),
            covered => Err(AlignError::PlanMismatch {
                len,
                covered: covered.unwrap_or(usize::MAX),
            }),
        }
    }

    /// Matrix index of the first (shared) cell of the `idx`th tile
    #[inline(always)]
    pub fn offset(&self, idx: usize) -> usize {
        idx * (self.tile - 1)
    }
}

/// Tile geometry for the whole matrix: `rows` tiles the `s` axis, `cols` the `t` axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TilePlan {
    pub rows: AxisPlan,
    pub cols: AxisPlan,
}

impl TilePlan {
    /// Plans both axes with [`best_tile_size`]. `None` when either sequence is empty, in which
    /// case the border-initialized matrix is already complete and nothing is tiled.
    pub fn new(s_len: usize, t_len: usize) -> Result<Option<Self>, AlignError> {
        Self::with_overrides(s_len, t_len, None, None)
    }

    /// Plans both axes, using the given tile edges where set and [`best_tile_size`] elsewhere.
    /// `None` when either sequence is empty, even if tile edges were given.
    pub fn with_overrides(
        s_len: usize,
        t_len: usize,
        height: Option<usize>,
        width: Option<usize>,
    ) -> Result<Option<Self>, AlignError> {
        if s_len == 0 || t_len == 0 {
            return Ok(None);
        }

        let height = height.or_else(|| best_tile_size(s_len));
        let width = width.or_else(|| best_tile_size(t_len));
        match (height, width) {
            (Some(height), Some(width)) => {
                Self::with_tile_sizes(s_len, t_len, height, width).map(Some)
            }
            _ => Ok(None),
        }
    }

    /// Plans both axes with explicit tile edges, failing if either does not tile its axis exactly
    pub fn with_tile_sizes(
        s_len: usize,
        t_len: usize,
        height: usize,
        width: usize,
    ) -> Result<Self, AlignError> {
        Ok(TilePlan {
            rows: AxisPlan::new(s_len, height)?,
            cols: AxisPlan::new(t_len, width)?,
        })
    }

    pub fn tile_count(&self) -> usize {
        self.rows.count * self.cols.count
    }

    /// Fails unless the plan tiles a matrix for sequences of length `s_len` and `t_len` exactly
    pub fn check_covers(&self, s_len: usize, t_len: usize) -> Result<(), AlignError> {
        self.rows.check_covers(s_len)?;
        self.cols.check_covers(t_len)
    }
}
