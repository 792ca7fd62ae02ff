use clap::Parser;
use miette::Result;
use pxavatar::cli::{Cli, Commands};
use pxavatar::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let printer = Printer::quiet(cli.quiet);

    match cli.command {
        Commands::Build(args) => {
            let report = pxavatar::cli::build::run(args, &printer)?;
            if !report.is_success() {
                std::process::exit(1);
            }
        }
        Commands::List(args) => pxavatar::cli::list::run(args, &printer)?,
        Commands::Completions(args) => pxavatar::cli::completions::run(args)?,
    }

    Ok(())
}
