use crate::error::AlignError;
use crate::matrix::{Direction, DirectionMatrix};

/// Walks the direction matrix from the bottom-right cell back to the origin and returns the
/// moves in forward order (origin first).
///
/// Reaching an unset cell, or a move that would leave the matrix, before the origin means the
/// matrix was not fully populated and is reported as [`AlignError::BrokenTraceback`].
pub fn traceback(directions: &DirectionMatrix) -> Result<Vec<Direction>, AlignError> {
    let mut row_idx = directions.rows().saturating_sub(1);
    let mut col_idx = directions.cols().saturating_sub(1);
    let mut moves = Vec::with_capacity(row_idx + col_idx);

    while row_idx > 0 || col_idx > 0 {
        let direction = directions.get(row_idx, col_idx);
        match direction {
            Some(Direction::Diag) if row_idx > 0 && col_idx > 0 => {
                row_idx -= 1;
                col_idx -= 1;
            }
            Some(Direction::Up) if row_idx > 0 => row_idx -= 1,
            Some(Direction::Left) if col_idx > 0 => col_idx -= 1,
            _ => {
                return Err(AlignError::BrokenTraceback {
                    row: row_idx,
                    col: col_idx,
                })
            }
        }
        moves.extend(direction);
    }

    moves.reverse();
    Ok(moves)
}

/// Expands forward-order moves into the two gapped sequences.
///
/// Diagonal moves pair `s[i]` with `t[j]`, up moves pair `s[i]` with a gap and left moves pair a
/// gap with `t[j]`.
pub fn render_gapped<T: Clone>(s: &[T], t: &[T], moves: &[Direction], gap: T) -> (Vec<T>, Vec<T>) {
    let mut aligned_s = Vec::with_capacity(moves.len());
    let mut aligned_t = Vec::with_capacity(moves.len());
    let mut s_chars = s.iter().cloned();
    let mut t_chars = t.iter().cloned();

    for direction in moves {
        let (s_char, t_char) = match direction {
            Direction::Diag => (s_chars.next(), t_chars.next()),
            Direction::Up => (s_chars.next(), Some(gap.clone())),
            Direction::Left => (Some(gap.clone()), t_chars.next()),
        };
        aligned_s.extend(s_char);
        aligned_t.extend(t_char);
    }

    (aligned_s, aligned_t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::needleman_wunsch::fill_direct;
    use crate::scoring::Scoring;

    fn get_alignment(s: &str, t: &str, scoring: Scoring) -> (String, String) {
        let matrices = fill_direct(s.as_bytes(), t.as_bytes(), &scoring).unwrap();
        let moves = traceback(&matrices.directions).unwrap();
        let (aligned_s, aligned_t) = render_gapped(s.as_bytes(), t.as_bytes(), &moves, b'-');
        (
            String::from_utf8(aligned_s).unwrap(),
            String::from_utf8(aligned_t).unwrap(),
        )
    }

    #[test]
    fn test_textbook_alignment() {
        let (aligned_s, aligned_t) = get_alignment("GCATGCU", "GATTACA", Scoring::default());
        assert_eq!(aligned_s, "GCA-TGCU");
        assert_eq!(aligned_t, "G-ATTACA");
    }

    #[test]
    fn test_empty_alignments() {
        let scoring = Scoring::default();
        assert_eq!(get_alignment("", "", scoring), ("".into(), "".into()));
        assert_eq!(
            get_alignment("ACGT", "", scoring),
            ("ACGT".into(), "----".into())
        );
        assert_eq!(get_alignment("", "AC", scoring), ("--".into(), "AC".into()));
    }

    #[test]
    fn test_left_before_up() {
        // At (1, 1) left beats up on a tie, so the gap in s is emitted last
        let (aligned_s, aligned_t) = get_alignment("A", "B", Scoring::new(0, -5, -1));
        assert_eq!(aligned_s, "A-");
        assert_eq!(aligned_t, "-B");
    }

    #[test]
    fn test_moves_forward_order() {
        let matrices = fill_direct(b"AC", b"C", &Scoring::default()).unwrap();
        let moves = traceback(&matrices.directions).unwrap();
        assert_eq!(moves, vec![Direction::Up, Direction::Diag]);
    }

    #[test]
    fn test_broken_traceback() {
        let mut directions = DirectionMatrix::new(3, 3);
        directions.set(2, 2, Direction::Diag);
        assert_eq!(
            traceback(&directions),
            Err(AlignError::BrokenTraceback { row: 1, col: 1 })
        );

        // A diagonal on the border would step outside the matrix
        let mut directions = DirectionMatrix::new(2, 1);
        directions.set(1, 0, Direction::Diag);
        assert_eq!(
            traceback(&directions),
            Err(AlignError::BrokenTraceback { row: 1, col: 0 })
        );
    }
}
