pub mod build;
pub mod completions;
pub mod list;

use clap::{Parser, Subcommand};

/// pxavatar - pixel-art progression avatar generator
#[derive(Parser, Debug)]
#[command(name = "pxavatar")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only print warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render avatars to GIF and PNG files
    Build(build::BuildArgs),

    /// List archetypes with their palettes and animations
    List(list::ListArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

impl Cli {
    /// Log level for the tracing subscriber.
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_levels() {
        let cli = Cli::parse_from(["pxavatar", "-vv", "list"]);
        assert_eq!(cli.log_level(), tracing::Level::DEBUG);
        let cli = Cli::parse_from(["pxavatar", "list"]);
        assert_eq!(cli.log_level(), tracing::Level::WARN);
    }
}
