pub mod annual_maxima;
pub mod pipeline;
pub mod polar_mapper;
pub mod sector_binner;
pub mod time_assigner;

pub use annual_maxima::AnnualMaximaAggregator;
pub use pipeline::{generate_rose, RoseInput, RoseOutput};
pub use polar_mapper::{
    PolarBar, PolarConvention, PolarCoordinateMapper, PolarPoint, PolarSeries, BAR_WIDTH_DEG,
};
pub use sector_binner::{SectorBinner, TieBreak};
pub use time_assigner::{parse_start_time, StepInterval, TimeAssigner, START_TIME_FORMAT};
