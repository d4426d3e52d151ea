pub mod params;

pub use params::{RangeParams, StatsParams};
