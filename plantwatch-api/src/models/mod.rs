mod reading;
mod thresholds;

pub use reading::*;
pub use thresholds::*;
