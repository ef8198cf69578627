pub mod annual_max;
pub mod compass;
pub mod current;
pub mod extreme;

pub use annual_max::AnnualMaxRecord;
pub use compass::{normalize_bearing, CompassSector, SECTOR_WIDTH_DEG};
pub use current::{CurrentReading, TimestampedReading};
pub use extreme::ExtremeReading;
