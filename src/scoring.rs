use crate::r#const::*;

/// Linear scoring scheme consulted by the recurrence.
///
/// No ordering between the three values is assumed: any integers produce a well defined
/// optimal alignment, even if they make little biological sense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scoring {
    /// Added when the two aligned symbols are equal
    pub match_score: i64,
    /// Added when the two aligned symbols differ
    pub mismatch_score: i64,
    /// Added for every symbol aligned against a gap
    pub gap_score: i64,
}

impl Scoring {
    pub fn new(match_score: i64, mismatch_score: i64, gap_score: i64) -> Self {
        Scoring {
            match_score,
            mismatch_score,
            gap_score,
        }
    }

    #[inline(always)]
    pub fn substitution<T: PartialEq>(&self, a: &T, b: &T) -> i64 {
        if a == b {
            self.match_score
        } else {
            self.mismatch_score
        }
    }
}

impl Default for Scoring {
    fn default() -> Self {
        Scoring {
            match_score: MATCH_SCORE,
            mismatch_score: MISMATCH_SCORE,
            gap_score: GAP_SCORE,
        }
    }
}
