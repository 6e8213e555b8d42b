pub mod cli;
pub mod config;
pub mod import;
pub mod observability;

pub use config::Config;
