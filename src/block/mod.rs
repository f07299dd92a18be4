mod planner;
mod stitcher;

pub use planner::{best_tile_size, feasible_tile_sizes, tile_count, AxisPlan, TilePlan};
pub use stitcher::{fill_blocked, stitch, LookupTable, MergePolicy, Tile};
