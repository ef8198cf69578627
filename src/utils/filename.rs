use crate::utils::constants::OUTPUT_ROOT;
use chrono::{Datelike, Local};
use std::path::PathBuf;

/// Generate default output directory with format: output/current-rose-{YYMMDD}
pub fn generate_default_output_dir() -> PathBuf {
    let now = Local::now();
    let year = now.year() % 100; // Get last 2 digits of year
    let month = now.month();
    let day = now.day();

    let dirname = format!("current-rose-{:02}{:02}{:02}", year, month, day);
    PathBuf::from(OUTPUT_ROOT).join(dirname)
}
