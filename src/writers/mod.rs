pub mod chart_writer;
pub mod series_writer;
pub mod table_writer;

pub use chart_writer::{ChartWriter, DEFAULT_CHART_SIZE, MAX_CHART_SIZE, MIN_CHART_SIZE};
pub use series_writer::SeriesWriter;
pub use table_writer::TableWriter;
