use crate::error::AlignError;

/// Move recorded for a cell: which predecessor its optimal score came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Consume one symbol from each sequence (match or mismatch)
    Diag,
    /// Consume one symbol from `s`, gap in `t`
    Up,
    /// Consume one symbol from `t`, gap in `s`
    Left,
}

impl Direction {
    pub fn tag(&self) -> char {
        match self {
            Direction::Diag => 'D',
            Direction::Up => 'U',
            Direction::Left => 'L',
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Dense row-major 2D table where every cell may still be unset.
///
/// Unset cells let the fill strategies distinguish "not yet computed" from a computed value,
/// which the block stitcher relies on when merging tiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<C: Copy> {
    rows: usize,
    cols: usize,
    cells: Vec<Option<C>>,
}

pub type ScoreMatrix = Matrix<i64>;
pub type DirectionMatrix = Matrix<Direction>;

impl<C: Copy> Matrix<C> {
    pub fn new(rows: usize, cols: usize) -> Self {
        Matrix {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    #[inline(always)]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline(always)]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline(always)]
    pub fn get(&self, row: usize, col: usize) -> Option<C> {
        self.cells[row * self.cols + col]
    }

    #[inline(always)]
    pub fn set(&mut self, row: usize, col: usize, value: C) {
        self.cells[row * self.cols + col] = Some(value);
    }

    #[inline(always)]
    pub fn cell_mut(&mut self, row: usize, col: usize) -> &mut Option<C> {
        &mut self.cells[row * self.cols + col]
    }

    pub fn row(&self, row: usize) -> &[Option<C>] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[Option<C>]> {
        // chunks(0) panics, an empty matrix has no rows anyway
        self.cells.chunks(self.cols.max(1)).take(self.rows)
    }

    /// Fails with [`AlignError::ShapeMismatch`] unless the matrix is `rows` x `cols`
    pub fn check_shape(&self, rows: usize, cols: usize) -> Result<(), AlignError> {
        if self.rows == rows && self.cols == cols {
            return Ok(());
        }
        Err(AlignError::ShapeMismatch {
            rows: self.rows,
            cols: self.cols,
            expected_rows: rows,
            expected_cols: cols,
        })
    }

    /// Copies the `rows` x `cols` window whose top-left corner sits at (`row`, `col`)
    ///
    /// # Panics
    ///
    /// If the window extends past the last row or column of the matrix.
    pub fn window(&self, row: usize, col: usize, rows: usize, cols: usize) -> Self {
        assert!(row + rows <= self.rows && col + cols <= self.cols);

        let mut cells = Vec::with_capacity(rows * cols);
        for r in row..row + rows {
            cells.extend_from_slice(&self.row(r)[col..col + cols]);
        }
        Matrix { rows, cols, cells }
    }

    pub fn is_filled(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }
}

impl ScoreMatrix {
    /// Reads a score that the recurrence depends on, failing if it was never written
    #[inline(always)]
    pub fn score(&self, row: usize, col: usize) -> Result<i64, AlignError> {
        self.get(row, col).ok_or(AlignError::UnsetCell { row, col })
    }
}

/// The score and direction matrices owned by a single alignment run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DpMatrices {
    pub scores: ScoreMatrix,
    pub directions: DirectionMatrix,
}

impl DpMatrices {
    /// Allocates (`s_len` + 1) x (`t_len` + 1) matrices and fills the border row and column.
    ///
    /// `scores[i][0] = i * gap` and `scores[0][j] = j * gap`, column 0 points up and row 0 points
    /// left. The origin has a score of 0 and no direction. Every other cell starts unset.
    pub fn initialize(s_len: usize, t_len: usize, gap_score: i64) -> Self {
        let mut scores = ScoreMatrix::new(s_len + 1, t_len + 1);
        let mut directions = DirectionMatrix::new(s_len + 1, t_len + 1);

        scores.set(0, 0, 0);
        for i in 1..=s_len {
            scores.set(i, 0, i as i64 * gap_score);
            directions.set(i, 0, Direction::Up);
        }
        for j in 1..=t_len {
            scores.set(0, j, j as i64 * gap_score);
            directions.set(0, j, Direction::Left);
        }

        DpMatrices { scores, directions }
    }

    /// Fails with [`AlignError::ShapeMismatch`] unless both matrices fit sequences of length
    /// `s_len` and `t_len`
    pub fn check_shape(&self, s_len: usize, t_len: usize) -> Result<(), AlignError> {
        self.scores.check_shape(s_len + 1, t_len + 1)?;
        self.directions.check_shape(s_len + 1, t_len + 1)
    }

    /// Score of the bottom-right cell, the optimal global alignment score
    pub fn final_score(&self) -> Result<i64, AlignError> {
        self.scores.score(self.scores.rows() - 1, self.scores.cols() - 1)
    }
}
