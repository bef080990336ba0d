mod expand;

use crate::Cli;
use crate::CommandResult;
use expand::ExpandCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql-jit")]
pub(crate) enum CommandEnum {
    /// Print the field expansions computed when compiling a query.
    Expand(Box<ExpandCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Expand(cmd) => cmd.run(cli).await
        }
    }
}
