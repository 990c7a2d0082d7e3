pub mod config;
pub mod scenario_file;
