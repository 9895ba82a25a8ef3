mod cli;
mod command;
mod command_result;
mod commands;
mod output_utils;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use cli::GlobalOptions;
pub(crate) use command::GqlcCommand;
pub(crate) use command_result::CommandResult;

#[tokio::main(flavor = "multi_thread")]
async fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    cli.options.init_logging();

    match cli.subcommand {
        Some(subcommand) => subcommand.run(cli.options).await.emit(),
        None => Cli::print_usage(),
    }
}
