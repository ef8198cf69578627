pub mod args;
pub mod commands;

pub use args::{Cli, Commands, GenerateArgs};
pub use commands::{
    generate_to_dir, plan_generate, run, sector_table, validation_report, write_outputs,
    GeneratePlan,
};
