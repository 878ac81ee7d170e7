pub mod filesystem;
pub mod reader;
pub mod writer;

pub use reader::{read_metric_table, MetricTable};
pub use writer::write_ranked_file;
