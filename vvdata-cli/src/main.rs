//! `vvdata` command-line entry point

use clap::Parser;
use vvdata_cli::commands::{self, Commands, ListCommands};
use vvdata_cli::CliResult;

/// Refresh verse data sets from raw Sanskrit/Telugu/English transcripts
#[derive(Debug, Parser)]
#[command(name = "vvdata", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress progress output and logging
    #[arg(short, long, global = true)]
    quiet: bool,
}

impl Cli {
    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .init();
        }
    }
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    cli.init_logging();
    log::debug!("Arguments: {:?}", cli);

    match &cli.command {
        Commands::Update(args) => args.execute(cli.quiet),
        Commands::Parse(args) => args.execute(),
        Commands::Validate(args) => args.execute(),
        Commands::GenerateConfig(args) => args.execute(),
        Commands::List { subcommand } => {
            match subcommand {
                ListCommands::Parsers => commands::list_parsers(),
            }
            Ok(())
        }
    }
}
