pub const MATCH_SCORE: i64 = 1; // Score for aligning two equal symbols
pub const MISMATCH_SCORE: i64 = -1; // Score for aligning two different symbols (substitution)
pub const GAP_SCORE: i64 = -1; // Score for aligning a symbol against a gap (insertion/deletion)

pub const GAP_BYTE: u8 = b'-'; // Gap placeholder emitted into byte alignments
pub const GAP_CHAR: char = '-'; // Gap placeholder emitted into char alignments

pub const MAX_DISPLAY_LEN: usize = 30; // Longest sequence for which printing the full matrices is still readable
