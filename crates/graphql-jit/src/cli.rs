use clap::CommandFactory;
use crate::commands;

/// Inspect how GraphQL queries compile: which sub-fields each field position
/// requests on each of its possible runtime types.
#[derive(clap::Parser, Debug)]
#[command(name = "graphql-jit", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        help="Enable verbose (debug-level) logging on stderr.",
        long,
        short='v',
    )]
    pub verbose: bool,
}
impl Cli {
    /// With no subcommand, print usage.
    pub(crate) async fn run_default(self) -> anyhow::Result<()> {
        Self::command().print_help()?;
        Ok(())
    }
}
