mod util;
pub mod analysis;
pub mod report;
pub mod stats;

pub use util::Error;
pub use analysis::*;
