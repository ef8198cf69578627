pub mod constants;
pub mod filename;
pub mod logging;
pub mod settings;

pub use constants::*;
pub use filename::generate_default_output_dir;
pub use logging::init_logging;
pub use settings::{ChartSettings, Settings};
