use crate::error::AlignError;
use crate::matrix::{Direction, DirectionMatrix, DpMatrices, ScoreMatrix};
use crate::scoring::Scoring;

/// Picks the winning move for a cell. Ties resolve as diagonal, then left, then up, so the
/// reported alignment is reproducible when several optimal alignments exist.
#[inline(always)]
pub fn best_move(diag_score: i64, left_score: i64, up_score: i64) -> (i64, Direction) {
    let mut best = (diag_score, Direction::Diag);
    if left_score > best.0 {
        best = (left_score, Direction::Left);
    }
    if up_score > best.0 {
        best = (up_score, Direction::Up);
    }
    best
}

/// Fills every interior cell of a region whose first row and first column are already known.
///
/// Row `i` of the region corresponds to `s[i - 1]` and column `j` to `t[j - 1]`, so the matrices
/// must be at least (`s.len()` + 1) x (`t.len()` + 1). Used once over the whole matrix by the
/// direct method and once per tile, on tile-local matrices, by the block stitcher. An empty `s`
/// or `t` leaves the region untouched.
///
/// # Panics
///
/// If the matrices are too small for `s` and `t`, or differ in shape from each other.
pub fn fill_region<T: PartialEq>(
    scores: &mut ScoreMatrix,
    directions: &mut DirectionMatrix,
    s: &[T],
    t: &[T],
    scoring: &Scoring,
) -> Result<(), AlignError> {
    assert!(s.len() < scores.rows() && t.len() < scores.cols());
    assert!(scores.rows() == directions.rows() && scores.cols() == directions.cols());

    for i in 1..=s.len() {
        let s_char = &s[i - 1];

        // Carried along the row to avoid re-reading the cell we just wrote
        let mut left = scores.score(i, 0)?;

        for j in 1..=t.len() {
            // Calculate diagonal (match/mismatch) scores
            let diag_score =
                scores.score(i - 1, j - 1)? + scoring.substitution(s_char, &t[j - 1]);

            // Skipping a char in t
            let left_score = left + scoring.gap_score;

            // Skipping a char in s
            let up_score = scores.score(i - 1, j)? + scoring.gap_score;

            let (score, direction) = best_move(diag_score, left_score, up_score);
            scores.set(i, j, score);
            directions.set(i, j, direction);

            left = score;
        }
    }

    Ok(())
}

/// Direct method: a single recurrence pass over the full border-initialized matrix
pub fn fill_direct<T: PartialEq>(
    s: &[T],
    t: &[T],
    scoring: &Scoring,
) -> Result<DpMatrices, AlignError> {
    let _span =
        tracing::debug_span!("fill_direct", rows = s.len() + 1, cols = t.len() + 1).entered();

    let mut matrices = DpMatrices::initialize(s.len(), t.len(), scoring.gap_score);
    fill_region(&mut matrices.scores, &mut matrices.directions, s, t, scoring)?;

    Ok(matrices)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_score(s: &str, t: &str, scoring: Scoring) -> i64 {
        fill_direct(s.as_bytes(), t.as_bytes(), &scoring)
            .and_then(|matrices| matrices.final_score())
            .unwrap()
    }

    #[test]
    fn test_best_move_tie_break() {
        assert_eq!(best_move(0, 0, 0), (0, Direction::Diag));
        assert_eq!(best_move(-1, 0, 0), (0, Direction::Left));
        assert_eq!(best_move(-1, -2, 0), (0, Direction::Up));
        assert_eq!(best_move(3, 3, -5), (3, Direction::Diag));
        assert_eq!(best_move(-5, 3, 3), (3, Direction::Left));
        assert_eq!(best_move(3, -5, 3), (3, Direction::Diag));
    }

    #[test]
    fn test_score_textbook() {
        assert_eq!(get_score("GCATGCU", "GATTACA", Scoring::default()), 0);
    }

    #[test]
    fn test_score_basic() {
        let scoring = Scoring::default();
        assert_eq!(get_score("", "", scoring), 0);
        assert_eq!(get_score("A", "A", scoring), 1);
        assert_eq!(get_score("A", "C", scoring), -1);
        assert_eq!(get_score("ACGT", "ACGT", scoring), 4);
        assert_eq!(get_score("ACGT", "", scoring), -4);
        assert_eq!(get_score("", "AC", scoring), -2);
        assert_eq!(get_score("ACGT", "AGT", scoring), 2);
    }

    #[test]
    fn test_score_non_monotonic_costs() {
        // Rewarding gaps makes the all-gap alignment optimal
        let scoring = Scoring::new(0, 0, 3);
        assert_eq!(get_score("AC", "AC", scoring), 12);
    }

    #[test]
    fn test_filled_matrix_rows() {
        let matrices = fill_direct(b"GCATGCU", b"GATTACA", &Scoring::default()).unwrap();
        assert!(matrices.scores.is_filled());

        let row = |i: usize| -> Vec<i64> {
            matrices.scores.row(i).iter().map(|c| c.unwrap()).collect()
        };
        assert_eq!(row(1), vec![-1, 1, 0, -1, -2, -3, -4, -5]);
        assert_eq!(row(4), vec![-4, -2, 0, 2, 1, 0, -1, -2]);
        assert_eq!(row(7), vec![-7, -5, -3, -1, -1, -1, 0, 0]);
    }

    #[test]
    fn test_tie_break_directions() {
        // diag 0 + mismatch -1 = -1, left/up -1 + -1 = -2
        let matrices = fill_direct(b"A", b"B", &Scoring::default()).unwrap();
        assert_eq!(matrices.directions.get(1, 1), Some(Direction::Diag));

        // All three candidates tie at -2
        let matrices = fill_direct(b"A", b"B", &Scoring::new(0, -2, -1)).unwrap();
        assert_eq!(matrices.directions.get(1, 1), Some(Direction::Diag));

        // Left and up tie at -2, diagonal is worse
        let matrices = fill_direct(b"A", b"B", &Scoring::new(0, -5, -1)).unwrap();
        assert_eq!(matrices.directions.get(1, 1), Some(Direction::Left));
    }

    #[test]
    fn test_border_untouched_by_fill() {
        let scoring = Scoring::new(3, -2, -4);
        let matrices = fill_direct(b"ACGTT", b"AGT", &scoring).unwrap();
        for i in 0..=5 {
            assert_eq!(matrices.scores.get(i, 0), Some(i as i64 * -4));
        }
        for j in 0..=3 {
            assert_eq!(matrices.scores.get(0, j), Some(j as i64 * -4));
        }
    }

    #[test]
    fn test_fill_region_reads_unset_border() {
        let mut scores = ScoreMatrix::new(2, 2);
        let mut directions = DirectionMatrix::new(2, 2);
        scores.set(0, 0, 0);
        scores.set(0, 1, -1);

        let result = fill_region(&mut scores, &mut directions, b"A", b"A", &Scoring::default());
        assert_eq!(result, Err(AlignError::UnsetCell { row: 1, col: 0 }));
    }

    #[test]
    fn test_fill_region_empty_is_noop() {
        let mut matrices = DpMatrices::initialize(3, 0, -1);
        let before = matrices.clone();
        fill_region(
            &mut matrices.scores,
            &mut matrices.directions,
            b"ACG",
            b"",
            &Scoring::default(),
        )
        .unwrap();
        assert_eq!(matrices, before);
    }
}
