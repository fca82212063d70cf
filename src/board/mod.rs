//! Board state, safety oracles and solution file I/O

pub mod placement;
pub mod conflicts;
pub mod safety;
pub mod io;

pub use placement::{Placement, PlacementGuard};
pub use conflicts::{ConflictTracker, TrackedBoard, TrackedGuard};
pub use safety::is_safe;
pub use io::{load_solutions_from_file, parse_solutions, save_solutions_to_file, solutions_to_string};
