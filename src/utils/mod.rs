pub mod log_utils;
pub mod time_utils;

pub use log_utils::init_logging;
pub use time_utils::parse_timestamp;
