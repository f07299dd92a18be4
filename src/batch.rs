use crate::error::AlignError;
use crate::scoring::Scoring;
use crate::{align, align_blocked_with, Alignment, Options, Symbol};

/// Which fill strategy to run for each pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Method {
    #[default]
    Direct,
    Blocked(Options),
}

impl Method {
    pub fn run<T: Symbol>(
        &self,
        s: &[T],
        t: &[T],
        scoring: &Scoring,
    ) -> Result<Alignment<T>, AlignError> {
        match self {
            Method::Direct => align(s, t, scoring),
            Method::Blocked(opts) => align_blocked_with(s, t, scoring, opts).map(|b| b.alignment),
        }
    }
}

/// Aligns every `(s, t)` pair independently, results in the same order as `pairs`
pub fn align_many<T: Symbol>(
    pairs: &[(&[T], &[T])],
    scoring: &Scoring,
    method: Method,
) -> Vec<Result<Alignment<T>, AlignError>> {
    pairs
        .iter()
        .map(|(s, t)| method.run(s, t, scoring))
        .collect()
}

/// Same as [`align_many`], spreading the pairs over the rayon thread pool. Each pair is still
/// filled sequentially.
#[cfg(feature = "parallel")]
pub fn align_many_parallel<T: Symbol + Send + Sync>(
    pairs: &[(&[T], &[T])],
    scoring: &Scoring,
    method: Method,
) -> Vec<Result<Alignment<T>, AlignError>> {
    use rayon::prelude::*;

    pairs
        .par_iter()
        .map(|(s, t)| method.run(s, t, scoring))
        .collect()
}
