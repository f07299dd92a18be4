/// Errors returned by the fill, stitch and traceback stages
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AlignError {
    /// No number of tiles of edge `tile` overlapping by one cell covers an axis of length `len`
    #[error("tiles of edge {tile} cannot cover an axis of length {len} (tile - 1 must divide len)")]
    InfeasibleTiling { len: usize, tile: usize },
    /// A tile needs at least one shared border cell and one computed cell per axis
    #[error("tile edge must be at least 2, got {tile}")]
    InvalidTileSize { tile: usize },
    /// The recurrence depends on a score that was never written
    #[error("score matrix cell ({row}, {col}) was read before being written")]
    UnsetCell { row: usize, col: usize },
    /// The direction matrix has a hole on the optimal path
    #[error("traceback reached unset direction at ({row}, {col}) before the origin")]
    BrokenTraceback { row: usize, col: usize },
    /// A tile plan's tiles do not cover exactly the axis they are applied to
    #[error("tile plan covers {covered} cells of an axis of length {len}")]
    PlanMismatch { len: usize, covered: usize },
    /// A matrix is not (`s.len()` + 1) x (`t.len()` + 1) for the sequences it is used with
    #[error("expected a {expected_rows}x{expected_cols} matrix, got {rows}x{cols}")]
    ShapeMismatch {
        rows: usize,
        cols: usize,
        expected_rows: usize,
        expected_cols: usize,
    },
    /// Two tiles disagree on a shared border cell under `MergePolicy::MustAgree`
    #[error("tiles disagree on shared cell ({row}, {col})")]
    MergeConflict { row: usize, col: usize },
}
