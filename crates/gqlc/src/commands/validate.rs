use crate::output_utils;
use crate::CommandResult;
use crate::GlobalOptions;
use crate::GqlcCommand;
use anyhow::Context;
use libgqlc::CompilerConfig;
use libgqlc::QueryCompiler;
use libgqlc::Schema;
use libgqlc::SchemaBuilder;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct ValidateCmd {
    #[arg(
        help="Path to a JSON file of compiler options (e.g. \
             `{\"max_query_depth\": 10}`).",
        long,
    )]
    config: Option<PathBuf>,

    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "gql".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="One or more schema (SDL) files that together define the \
             schema documents are compiled against.",
        long,
        required=true,
        short='s',
    )]
    schema: Vec<PathBuf>,

    #[arg(
        help="Paths to one or more GraphQL documents or directories \
             containing GraphQL documents which need to be validated.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

/// What compiling one file produced, rendered for output.
#[derive(Debug)]
struct FileReport {
    critical: usize,
    lines: Vec<String>,
}

#[inherent::inherent]
impl GqlcCommand for ValidateCmd {
    pub fn name(&self) -> &'static str {
        "validate"
    }

    pub async fn run(self, options: GlobalOptions) -> CommandResult {
        let config = match self.load_config() {
            Ok(config) => config,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} Invalid compiler config: {err:#}",
                output_utils::RED_X,
            )),
        };

        let schema = match self.load_schema() {
            Ok(schema) => Arc::new(schema),
            Err(err) => return CommandResult::stderr(format_args!(
                "{} Errors loading schema: {err:#}",
                output_utils::RED_X,
            )),
        };

        let (file_paths, num_non_graphql_files) = match self.find_documents() {
            Ok(found) => found,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} Errors finding GraphQL documents: {err:#}",
                output_utils::RED_X,
            )),
        };
        log::debug!(
            "Found {} GraphQL documents to be validated.",
            file_paths.len(),
        );

        let mut handles = Vec::with_capacity(file_paths.len());
        for path in file_paths {
            let schema = Arc::clone(&schema);
            let config = config.clone();
            handles.push(tokio::task::spawn_blocking(move || {
                compile_file(&schema, config, path)
            }));
        }

        let mut reports = vec![];
        for handle in handles {
            match handle.await {
                Ok(Ok(report)) => reports.push(report),
                Ok(Err(err)) => return CommandResult::stderr(format_args!(
                    "{} {err:#}",
                    output_utils::RED_X,
                )),
                Err(err) => return CommandResult::stderr(format_args!(
                    "{} Compilation task failed: {err}",
                    output_utils::RED_X,
                )),
            }
        }

        let num_files = reports.len();
        let num_failed = reports.iter().filter(|report| report.critical > 0).count();
        let mut output = String::new();
        if !options.quiet {
            for line in reports.iter().flat_map(|report| &report.lines) {
                output.push_str(line);
                output.push('\n');
            }
        }

        if num_failed == 0 {
            CommandResult::stdout(format_args!(
                concat!(
                    "{}{} All GraphQL documents compiled successfully:\n",
                    "  * Compiled {} files.\n",
                    "  * Skipped {} non-graphql files.\n",
                    "  * Against {} types and {} directives.",
                ),
                output,
                output_utils::GREEN_CHECK,
                num_files,
                num_non_graphql_files,
                schema.all_types().len(),
                schema.all_directives().len(),
            ))
        } else {
            CommandResult::failed_with_stdout(format_args!(
                "{}{} {num_failed} of {num_files} GraphQL documents failed to compile.",
                output,
                output_utils::RED_X,
            ))
        }
    }
}

impl ValidateCmd {
    fn load_config(&self) -> anyhow::Result<CompilerConfig> {
        let Some(path) = &self.config else {
            return Ok(CompilerConfig::default());
        };
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: CompilerConfig = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        log::debug!("Loaded compiler config from {path:#?}: {config:?}");
        Ok(config)
    }

    fn load_schema(&self) -> anyhow::Result<Schema> {
        let mut builder = SchemaBuilder::new();
        for path in &self.schema {
            log::debug!("Loading schema file {path:#?}...");
            builder = builder.load_file(path)?;
        }
        Ok(builder.build()?)
    }

    /// Every document at or under the paths passed as args, plus a count of
    /// the files skipped for their extension.
    fn find_documents(&self) -> anyhow::Result<(Vec<PathBuf>, usize)> {
        // Normalize the set of file extensions to filter with
        let graphql_file_exts: HashSet<String> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_owned())
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut num_non_graphql_files: usize = 0;
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true) {
                let entry = entry.with_context(|| format!(
                    "failed while walking {}",
                    path.display(),
                ))?;
                let path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {path:#?}.");
                    continue;
                }
                let matches_ext = path.extension()
                    .map(|ext| graphql_file_exts.contains(ext.to_string_lossy().as_ref()))
                    .unwrap_or(false);
                if matches_ext {
                    log::trace!("Found document at {path:#?}.");
                    file_paths.push(canonicalize(path)?);
                } else {
                    num_non_graphql_files += 1;
                }
            }
        }

        // A single file passed explicitly is compiled even if its extension
        // doesn't match `--graphql-file-exts`.
        if file_paths.is_empty()
            && self.file_or_dir_paths.len() == 1
            && let Some(first_arg_path) = self.file_or_dir_paths.first()
            && first_arg_path.is_file() {
            let canonicalized_first_arg_path = canonicalize(first_arg_path)?;
            log::warn!(
                "Proceeding to validate {canonicalized_first_arg_path:#?} even \
                though it doesn't match any of the --graphql-file-exts \
                ({}).",
                graphql_file_exts.iter()
                    .map(|ext| format!("`.{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            num_non_graphql_files = num_non_graphql_files.saturating_sub(1);
            file_paths.push(canonicalized_first_arg_path);
        }

        Ok((file_paths, num_non_graphql_files))
    }
}

fn canonicalize(path: &Path) -> anyhow::Result<PathBuf> {
    std::fs::canonicalize(path)
        .with_context(|| format!("failed to resolve {}", path.display()))
}

fn compile_file(
    schema: &Schema,
    config: CompilerConfig,
    path: PathBuf,
) -> anyhow::Result<FileReport> {
    let source = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let outcome = QueryCompiler::with_config(schema, config).compile(&source);

    let mut lines = vec![];
    if let Some(err) = outcome.syntax_error {
        lines.push(err.with_file_path(path.clone()).format_detailed(Some(&source)));
    } else {
        for message in &outcome.messages {
            lines.push(format!("{}:{message}", path.display()));
        }
    }
    log::debug!(
        "Compiled {path:#?} with {} messages.",
        outcome.messages.len(),
    );
    Ok(FileReport {
        critical: outcome.messages.critical_count(),
        lines,
    })
}
