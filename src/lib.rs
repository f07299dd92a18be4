pub mod alignment;
pub mod batch;
pub mod block;
pub mod r#const;
pub mod display;
pub mod error;
pub mod matrix;
pub mod needleman_wunsch;
pub mod scoring;

pub use alignment::{Alignment, BlockedAlignment};
pub use batch::{align_many, Method};
#[cfg(feature = "parallel")]
pub use batch::align_many_parallel;
pub use block::{fill_blocked, LookupTable, MergePolicy, Tile, TilePlan};
pub use error::AlignError;
pub use matrix::{Direction, DpMatrices};
pub use needleman_wunsch::fill_direct;
pub use scoring::Scoring;

use r#const::{GAP_BYTE, GAP_CHAR};

/// A sequence element that can be aligned and rendered
pub trait Symbol: PartialEq + Clone {
    /// Placeholder emitted opposite a symbol with no counterpart
    const GAP: Self;

    fn as_char(&self) -> char;
}

impl Symbol for u8 {
    const GAP: u8 = GAP_BYTE;

    fn as_char(&self) -> char {
        *self as char
    }
}

impl Symbol for char {
    const GAP: char = GAP_CHAR;

    fn as_char(&self) -> char {
        *self
    }
}

/// Configuration of the block-decomposed method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Options {
    /// Tile edge along `s` (shared border included). Picked from the divisors of `s.len()` when
    /// unset
    pub tile_height: Option<usize>,
    /// Tile edge along `t` (shared border included). Picked from the divisors of `t.len()` when
    /// unset
    pub tile_width: Option<usize>,
    /// How tiles write into cells shared with an earlier tile
    pub merge_policy: MergePolicy,
}

impl Options {
    /// Tile geometry for the given sequence lengths. `None` when either is empty, since an empty
    /// axis leaves nothing to tile.
    pub fn plan(&self, s_len: usize, t_len: usize) -> Result<Option<TilePlan>, AlignError> {
        TilePlan::with_overrides(s_len, t_len, self.tile_height, self.tile_width)
    }
}

/// Computes the optimal global alignment of `s` against `t` by filling the whole matrix in a
/// single pass
pub fn align<T: Symbol>(s: &[T], t: &[T], scoring: &Scoring) -> Result<Alignment<T>, AlignError> {
    let matrices = fill_direct(s, t, scoring)?;
    Alignment::from_matrices(s, t, &matrices)
}

/// Computes the optimal global alignment of `s` against `t` by tiling the matrix into blocks of
/// roughly `sqrt(len)` per side and stitching them together.
///
/// The score always equals the one returned by [`align`].
pub fn align_blocked<T: Symbol>(
    s: &[T],
    t: &[T],
    scoring: &Scoring,
) -> Result<BlockedAlignment<T>, AlignError> {
    align_blocked_with(s, t, scoring, &Options::default())
}

/// Same as [`align_blocked`] with explicit tile sizes and merge policy.
///
/// Fails with [`AlignError::InfeasibleTiling`] when a requested tile edge minus one does not
/// divide the length of its sequence.
pub fn align_blocked_with<T: Symbol>(
    s: &[T],
    t: &[T],
    scoring: &Scoring,
    opts: &Options,
) -> Result<BlockedAlignment<T>, AlignError> {
    let plan = opts.plan(s.len(), t.len())?;
    let (matrices, lookup_table) = fill_blocked(s, t, scoring, plan.as_ref(), opts.merge_policy)?;

    Ok(BlockedAlignment {
        alignment: Alignment::from_matrices(s, t, &matrices)?,
        plan,
        lookup_table,
    })
}
