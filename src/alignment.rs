use crate::block::{LookupTable, TilePlan};
use crate::error::AlignError;
use crate::matrix::{Direction, DpMatrices};
use crate::needleman_wunsch::{render_gapped, traceback};
use crate::scoring::Scoring;
use crate::Symbol;

/// Optimal global alignment of `s` against `t`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alignment<T> {
    /// Score of the bottom-right matrix cell
    pub score: i64,
    /// `s` with gaps inserted
    pub aligned_s: Vec<T>,
    /// `t` with gaps inserted, same length as `aligned_s`
    pub aligned_t: Vec<T>,
    /// Moves from the origin to the bottom-right cell, one per alignment column
    pub moves: Vec<Direction>,
}

impl<T: Symbol> Alignment<T> {
    /// Runs traceback over filled matrices and renders the gapped sequences
    pub fn from_matrices(s: &[T], t: &[T], matrices: &DpMatrices) -> Result<Self, AlignError> {
        let score = matrices.final_score()?;
        let moves = traceback(&matrices.directions)?;
        let (aligned_s, aligned_t) = render_gapped(s, t, &moves, T::GAP);

        Ok(Alignment {
            score,
            aligned_s,
            aligned_t,
            moves,
        })
    }

    /// Number of alignment columns
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Sums the costs along the alignment path. Equals `score` for an alignment produced with the
    /// same scoring.
    pub fn rescore(&self, scoring: &Scoring) -> i64 {
        self.moves
            .iter()
            .zip(self.aligned_s.iter().zip(self.aligned_t.iter()))
            .map(|(direction, (s_char, t_char))| match direction {
                Direction::Diag => scoring.substitution(s_char, t_char),
                Direction::Up | Direction::Left => scoring.gap_score,
            })
            .sum()
    }

    /// Fraction of columns pairing two equal symbols
    pub fn identity(&self) -> f64 {
        let matches = self
            .moves
            .iter()
            .zip(self.aligned_s.iter().zip(self.aligned_t.iter()))
            .filter(|(direction, (s_char, t_char))| {
                **direction == Direction::Diag && s_char == t_char
            })
            .count();
        matches as f64 / self.len().max(1) as f64
    }

    /// Both gapped sequences rendered as strings
    pub fn to_strings(&self) -> (String, String) {
        (
            self.aligned_s.iter().map(Symbol::as_char).collect(),
            self.aligned_t.iter().map(Symbol::as_char).collect(),
        )
    }
}

/// Result of the block-decomposed method
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockedAlignment<T> {
    pub alignment: Alignment<T>,
    /// Tile geometry used, `None` when a sequence was empty and nothing was tiled
    pub plan: Option<TilePlan>,
    /// Per-tile local matrices in row-major tile order
    pub lookup_table: LookupTable,
}
