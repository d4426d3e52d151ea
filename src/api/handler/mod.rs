pub mod stats;

pub use stats::{
    cluster_stability_handler, global_stats_handler, grades_handler, url_datapoints_handler,
    url_stats_handler,
};
