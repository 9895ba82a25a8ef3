use crate::CommandResult;
use crate::GlobalOptions;

/// A parsed `gqlc` subcommand, ready to run.
pub(crate) trait GqlcCommand: std::fmt::Debug {
    /// The name typed on the command line.
    fn name(&self) -> &'static str;

    async fn run(self, options: GlobalOptions) -> CommandResult;
}
