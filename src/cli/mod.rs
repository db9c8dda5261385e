pub mod args;
pub mod commands;

pub use args::{Cli, Commands};
pub use commands::{read_small_file, run, run_aggregate};
