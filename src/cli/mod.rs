//! Command line front end.

pub mod list;
pub mod recommend;
pub mod validate;

use clap::{Parser, Subcommand};

/// cookbook - recipe search, filtering and recommendations
#[derive(Parser, Debug)]
#[command(name = "cookbook")]
#[command(about = "Search, filter and get recommendations from a recipe collection", long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List recipes matching a search term and filters
    List(list::ListArgs),
    /// Recommend recipes based on favorites
    Recommend(recommend::RecommendArgs),
    /// Validate every recipe draft of a fixture
    Validate(validate::ValidateArgs),
}

impl Cli {
    pub fn run(self, config: crate::Config, out: &mut impl std::io::Write) -> anyhow::Result<()> {
        match self.command {
            Commands::List(args) => list::run(config, args, out),
            Commands::Recommend(args) => recommend::run(config, args, out),
            Commands::Validate(args) => validate::run(args, out),
        }
    }
}
