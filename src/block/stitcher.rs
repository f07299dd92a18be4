use super::planner::TilePlan;
use crate::error::AlignError;
use crate::matrix::{DirectionMatrix, DpMatrices, ScoreMatrix};
use crate::needleman_wunsch::fill_region;
use crate::scoring::Scoring;

/// How a tile's cells are written into global cells that may already hold a value.
///
/// Adjacent tiles share one row or column. Tiles are processed in row-major order, so the
/// precedence between them is fixed by that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MergePolicy {
    /// Keep whatever was written first, silently drop later values
    #[default]
    FirstWriteWins,
    /// Fail with [`AlignError::MergeConflict`] when a later value differs from the stored one
    MustAgree,
}

impl MergePolicy {
    #[inline(always)]
    pub fn merge<C: Copy + PartialEq>(
        &self,
        existing: &mut Option<C>,
        incoming: Option<C>,
        row: usize,
        col: usize,
    ) -> Result<(), AlignError> {
        match (*existing, incoming) {
            (_, None) => Ok(()),
            (None, Some(value)) => {
                *existing = Some(value);
                Ok(())
            }
            (Some(stored), Some(value)) => match self {
                MergePolicy::FirstWriteWins => Ok(()),
                MergePolicy::MustAgree if stored == value => Ok(()),
                MergePolicy::MustAgree => Err(AlignError::MergeConflict { row, col }),
            },
        }
    }
}

/// A solved tile: its position in the tile grid and its local matrices
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    /// Row-block index in the tile grid
    pub block_row: usize,
    /// Column-block index in the tile grid
    pub block_col: usize,
    /// Global (row, col) of the tile's top-left shared cell
    pub origin: (usize, usize),
    pub scores: ScoreMatrix,
    pub directions: DirectionMatrix,
}

/// Every solved tile, in row-major tile order
pub type LookupTable = Vec<Tile>;

/// Solves each tile of `plan` in row-major order and merges it into `matrices`.
///
/// A tile's first row and column are read from the global matrix, so they must have been written
/// by the border initialization or by the tiles above and to the left. The whole local score
/// matrix is merged back: its last row and last column become the borders of the following
/// tiles, and the global score matrix ends up identical to the direct method's.
///
/// Fails with [`AlignError::ShapeMismatch`] if `matrices` does not fit `s` and `t`, and with
/// [`AlignError::PlanMismatch`] if `plan` does not tile it exactly.
pub fn stitch<T: PartialEq>(
    matrices: &mut DpMatrices,
    s: &[T],
    t: &[T],
    scoring: &Scoring,
    plan: &TilePlan,
    policy: MergePolicy,
) -> Result<LookupTable, AlignError> {
    matrices.check_shape(s.len(), t.len())?;
    plan.check_covers(s.len(), t.len())?;

    let (height, width) = (plan.rows.tile, plan.cols.tile);
    let mut lookup_table = Vec::with_capacity(plan.tile_count());

    for block_row in 0..plan.rows.count {
        for block_col in 0..plan.cols.count {
            let row = plan.rows.offset(block_row);
            let col = plan.cols.offset(block_col);

            let mut scores = matrices.scores.window(row, col, height, width);
            let mut directions = DirectionMatrix::new(height, width);

            let s_block = &s[row..row + height - 1];
            let t_block = &t[col..col + width - 1];
            fill_region(&mut scores, &mut directions, s_block, t_block, scoring)?;

            for r in 0..height {
                for c in 0..width {
                    let (global_row, global_col) = (row + r, col + c);
                    policy.merge(
                        matrices.scores.cell_mut(global_row, global_col),
                        scores.get(r, c),
                        global_row,
                        global_col,
                    )?;
                    policy.merge(
                        matrices.directions.cell_mut(global_row, global_col),
                        directions.get(r, c),
                        global_row,
                        global_col,
                    )?;
                }
            }

            tracing::trace!(block_row, block_col, row, col, "stitched tile");

            lookup_table.push(Tile {
                block_row,
                block_col,
                origin: (row, col),
                scores,
                directions,
            });
        }
    }

    Ok(lookup_table)
}

/// Block-decomposed method: border initialization followed by a tiled fill.
///
/// `plan` is `None` when either sequence is empty; the border-initialized matrix is then already
/// complete and the lookup table stays empty.
pub fn fill_blocked<T: PartialEq>(
    s: &[T],
    t: &[T],
    scoring: &Scoring,
    plan: Option<&TilePlan>,
    policy: MergePolicy,
) -> Result<(DpMatrices, LookupTable), AlignError> {
    let _span =
        tracing::debug_span!("fill_blocked", rows = s.len() + 1, cols = t.len() + 1).entered();

    let mut matrices = DpMatrices::initialize(s.len(), t.len(), scoring.gap_score);
    let lookup_table = match plan {
        Some(plan) => {
            tracing::debug!(
                tile_height = plan.rows.tile,
                tile_width = plan.cols.tile,
                row_blocks = plan.rows.count,
                col_blocks = plan.cols.count,
                ?policy,
                "tiling matrix"
            );
            stitch(&mut matrices, s, t, scoring, plan, policy)?
        }
        None => {
            tracing::debug!("empty sequence, skipping tiling");
            vec![]
        }
    };

    Ok((matrices, lookup_table))
}
