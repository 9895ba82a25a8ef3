use crate::commands::CliSubcommand;
use clap::CommandFactory;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

/// `gqlc [OPTIONS] [SUBCOMMAND]`
#[derive(clap::Parser, Debug)]
#[command(
    name = "gqlc",
    version,
    about = "Compiles GraphQL executable documents against a schema.",
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) subcommand: Option<CliSubcommand>,

    #[command(flatten)]
    pub(crate) options: GlobalOptions,
}
impl Cli {
    /// With no subcommand there is nothing to compile, so print usage.
    pub(crate) fn print_usage() -> std::process::ExitCode {
        match Self::command().print_help() {
            Ok(()) => std::process::ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("{err:#}");
                std::process::ExitCode::FAILURE
            },
        }
    }
}

/// Options accepted before or after any subcommand.
#[derive(clap::Args, Clone, Debug)]
pub(crate) struct GlobalOptions {
    #[arg(
        global=true,
        help="Log at `debug` level. Shorthand for `--log-level=debug`.",
        long,
        short='v',
    )]
    pub verbose: bool,

    #[arg(
        global=true,
        help="Log level: `error`, `warn`, `info`, `debug` or `trace`. Falls \
             back to the `LOG_LEVEL` environment variable, then `info`.",
        long,
    )]
    pub log_level: Option<tracing::Level>,

    #[arg(
        global=true,
        help="Print only the summary line, not each compiler message.",
        long,
        short='q',
    )]
    pub quiet: bool,
}
impl GlobalOptions {
    /// Installs the stderr subscriber. Must run once, before any command.
    pub(crate) fn init_logging(&self) {
        let (log_level, env_warning) = self.resolve_log_level();
        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .init();
        log::trace!("Logging at `{log_level}`.");
        if let Some(warning) = env_warning {
            log::warn!("{warning}");
        }
    }

    pub(crate) fn resolve_log_level(&self) -> (tracing::Level, Option<String>) {
        if self.verbose {
            return (tracing::Level::DEBUG, None);
        }
        if let Some(log_level) = self.log_level {
            return (log_level, None);
        }
        let Ok(env_val) = std::env::var("LOG_LEVEL") else {
            return (DEFAULT_LOG_LEVEL, None);
        };
        match env_val.trim() {
            "VERBOSE" | "verbose" => (tracing::Level::DEBUG, None),
            other => match other.parse::<tracing::Level>() {
                Ok(log_level) => (log_level, None),
                Err(_) => (
                    DEFAULT_LOG_LEVEL,
                    Some(format!(
                        "Ignoring `LOG_LEVEL={other}`; expected one of `error`, \
                        `warn`, `info`, `debug` or `trace`."
                    )),
                ),
            },
        }
    }
}
