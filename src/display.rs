use std::fmt::{self, Display};

use crate::error::AlignError;
use crate::matrix::Matrix;
use crate::r#const::MAX_DISPLAY_LEN;
use crate::Symbol;

/// Whether both sequences are short enough for their full matrices to be worth printing
pub fn fits_display(s_len: usize, t_len: usize) -> bool {
    s_len <= MAX_DISPLAY_LEN && t_len <= MAX_DISPLAY_LEN
}

/// Renders a score or direction matrix as a bordered grid, with `s` labelling the rows and `t`
/// labelling the columns. Unset cells are left blank.
///
/// ```
/// use nwblock::{display::MatrixTable, fill_direct, Scoring};
///
/// let matrices = fill_direct(b"A", b"A", &Scoring::default()).unwrap();
/// println!("{}", MatrixTable::new(&matrices.directions, b"A", b"A").unwrap());
/// ```
pub struct MatrixTable<'a, T, C: Copy> {
    matrix: &'a Matrix<C>,
    s: &'a [T],
    t: &'a [T],
}

impl<'a, T: Symbol, C: Copy + Display> MatrixTable<'a, T, C> {
    /// Fails with [`AlignError::ShapeMismatch`] unless `matrix` is
    /// (`s.len()` + 1) x (`t.len()` + 1)
    pub fn new(matrix: &'a Matrix<C>, s: &'a [T], t: &'a [T]) -> Result<Self, AlignError> {
        matrix.check_shape(s.len() + 1, t.len() + 1)?;
        Ok(MatrixTable { matrix, s, t })
    }

    fn header(&self) -> Vec<String> {
        // Label column and the origin column have no symbol
        [String::new(), String::new()]
            .into_iter()
            .chain(self.t.iter().map(|c| c.as_char().to_string()))
            .collect()
    }

    fn body(&self) -> Vec<Vec<String>> {
        self.matrix
            .iter_rows()
            .enumerate()
            .map(|(i, row)| {
                let label = match i {
                    0 => String::new(),
                    _ => self.s[i - 1].as_char().to_string(),
                };
                std::iter::once(label)
                    .chain(row.iter().map(|cell| match cell {
                        Some(value) => value.to_string(),
                        None => String::new(),
                    }))
                    .collect()
            })
            .collect()
    }
}

fn write_separator(f: &mut fmt::Formatter<'_>, widths: &[usize], fill: char) -> fmt::Result {
    write!(f, "+")?;
    for &width in widths {
        write!(f, "{}+", fill.to_string().repeat(width + 2))?;
    }
    writeln!(f)
}

fn write_row(f: &mut fmt::Formatter<'_>, widths: &[usize], cells: &[String]) -> fmt::Result {
    write!(f, "|")?;
    for (cell, &width) in cells.iter().zip(widths) {
        write!(f, " {:>width$} |", cell, width = width)?;
    }
    writeln!(f)
}

impl<T: Symbol, C: Copy + Display> Display for MatrixTable<'_, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = self.header();
        let body = self.body();

        let mut widths = header.iter().map(String::len).collect::<Vec<_>>();
        for row in body.iter() {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.len());
            }
        }

        write_separator(f, &widths, '-')?;
        write_row(f, &widths, &header)?;
        write_separator(f, &widths, '=')?;
        for row in body.iter() {
            write_row(f, &widths, row)?;
            write_separator(f, &widths, '-')?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::needleman_wunsch::fill_direct;
    use crate::scoring::Scoring;

    #[test]
    fn test_score_table() {
        let matrices = fill_direct(b"A", b"A", &Scoring::default()).unwrap();
        let table = MatrixTable::new(&matrices.scores, b"A", b"A")
            .unwrap()
            .to_string();
        let expected = [
            "+---+----+----+",
            "|   |    |  A |",
            "+===+====+====+",
            "|   |  0 | -1 |",
            "+---+----+----+",
            "| A | -1 |  1 |",
            "+---+----+----+",
        ];
        assert_eq!(table.lines().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_direction_table() {
        let matrices = fill_direct(b"A", b"A", &Scoring::default()).unwrap();
        let table = MatrixTable::new(&matrices.directions, b"A", b"A")
            .unwrap()
            .to_string();
        let expected = [
            "+---+---+---+",
            "|   |   | A |",
            "+===+===+===+",
            "|   |   | L |",
            "+---+---+---+",
            "| A | U | D |",
            "+---+---+---+",
        ];
        assert_eq!(table.lines().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_table_shape_mismatch() {
        let matrices = fill_direct(b"AC", b"A", &Scoring::default()).unwrap();
        assert_eq!(
            MatrixTable::new(&matrices.scores, b"A", b"A").err(),
            Some(AlignError::ShapeMismatch {
                rows: 3,
                cols: 2,
                expected_rows: 2,
                expected_cols: 2,
            })
        );
    }

    #[test]
    fn test_fits_display() {
        assert!(fits_display(30, 0));
        assert!(!fits_display(31, 5));
    }
}
