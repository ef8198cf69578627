pub mod rose_analyzer;

pub use rose_analyzer::{RoseAnalyzer, RoseStatistics, SectorStats, SpeedStats};
