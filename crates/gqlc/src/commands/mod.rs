mod validate;

use crate::CommandResult;
use crate::GlobalOptions;
use crate::GqlcCommand;
use validate::ValidateCmd;

#[derive(Debug, clap::Subcommand)]
pub(crate) enum CliSubcommand {
    /// Compile GraphQL documents against a schema and report every
    /// validation message.
    Validate(Box<ValidateCmd>),
}
impl CliSubcommand {
    pub(crate) async fn run(self, options: GlobalOptions) -> CommandResult {
        match self {
            Self::Validate(cmd) => {
                log::debug!("Running `gqlc {}`.", cmd.name());
                cmd.run(options).await
            },
        }
    }
}
