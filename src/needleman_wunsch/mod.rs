mod algorithm;
mod traceback;

pub use algorithm::{best_move, fill_direct, fill_region};
pub use traceback::{render_gapped, traceback};
