use crate::demo::{run_demo, DemoArgs};
use crate::roster::{run_roster_check, RosterArgs};
use clap::{Parser, Subcommand};
use response_coord::config::AppConfig;
use response_coord::error::AppError;
use response_coord::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "Response Coordination Ops",
    about = "Exercise the response coordination core from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run an end-to-end allocation demo against seeded sample data (default command)
    Demo(DemoArgs),
    /// Inspect roster files before feeding them to the registry
    Roster {
        #[command(subcommand)]
        command: RosterCommand,
    },
}

#[derive(Subcommand, Debug)]
enum RosterCommand {
    /// Parse a roster CSV and print a per-type summary
    Check(RosterArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let command = cli.command.unwrap_or_else(|| Command::Demo(DemoArgs::default()));

    match command {
        Command::Demo(args) => run_demo(&config, args),
        Command::Roster {
            command: RosterCommand::Check(args),
        } => run_roster_check(args),
    }
}
