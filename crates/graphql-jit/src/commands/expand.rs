use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use libgraphql_jit::ast;
use libgraphql_jit::compile::CompiledQuery;
use libgraphql_jit::file_reader;
use libgraphql_jit::schema::SchemaBuilder;
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct ExpandCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for schema \
             files within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Name of the operation to compile. Required when the query file \
             defines more than one operation.",
        long,
    )]
    operation: Option<String>,

    #[arg(
        help="Only print the expansion of this field position (e.g. \
             `Query.me/User.friends`).",
        long,
    )]
    position: Option<String>,

    #[arg(
        help="Path to a schema file or a directory containing schema files. \
             May be repeated.",
        long,
        required=true,
    )]
    schema: Vec<PathBuf>,

    #[arg(
        help="Path to the file containing the query document to compile.",
        name="QUERY_FILE",
    )]
    query_file: PathBuf,
}
impl ExpandCmd {
    fn expand(&self) -> anyhow::Result<serde_json::Value> {
        let schema_file_paths = self.find_schema_files()?;
        log::debug!("Found {} schema files.", schema_file_paths.len());

        let schema = SchemaBuilder::from_files(&schema_file_paths)?.build()?;

        let query_src = file_reader::read_content(&self.query_file)
            .with_context(|| format!("reading query file {:?}", self.query_file))?;
        let document = ast::query::parse(&query_src)
            .with_context(|| format!("parsing query file {:?}", self.query_file))?;

        let compiled = CompiledQuery::compile(
            Arc::new(schema),
            &document,
            self.operation.as_deref(),
        )?;
        log::debug!(
            "Compiled `{}` operation rooted at `{}`.",
            compiled.operation_type().keyword(),
            compiled.root_type_name(),
        );

        if let Some(position) = &self.position {
            let thunk = compiled.resolve_info_thunk(position).with_context(|| {
                format!(
                    "no field position named `{position}` (known positions: {})",
                    compiled.field_positions().collect::<Vec<_>>().join(", "),
                )
            })?;
            return Ok(serde_json::to_value(thunk.field_expansion())?);
        }

        let mut expansions = serde_json::Map::new();
        for (position, thunk) in compiled.resolve_info_thunks() {
            expansions.insert(
                position.to_string(),
                serde_json::to_value(thunk.field_expansion())?,
            );
        }
        Ok(serde_json::Value::Object(expansions))
    }

    /// Every schema file at or under the `--schema` paths.
    ///
    /// A lone `--schema` file is loaded even if its extension is not one of
    /// the `--graphql-file-exts`.
    fn find_schema_files(&self) -> anyhow::Result<Vec<PathBuf>> {
        let graphql_file_exts: HashSet<&str> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.'))
                .collect();

        let mut file_paths = vec![];
        for path in &self.schema {
            for entry in WalkDir::new(path.as_path()).follow_links(true) {
                let entry = entry
                    .with_context(|| format!("scanning schema path {path:?}"))?;
                let entry_path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {entry_path:?}.");
                    continue;
                }

                if let Some(ext) = entry_path.extension().and_then(|ext| ext.to_str())
                    && graphql_file_exts.contains(ext) {
                    file_paths.push(std::fs::canonicalize(entry_path)?);
                } else {
                    log::trace!("Skipping non-graphql file: {entry_path:?}.");
                }
            }
        }

        if file_paths.is_empty()
            && let [only_path] = self.schema.as_slice()
            && only_path.is_file() {
            log::warn!(
                "Loading {only_path:?} even though it doesn't match any of the \
                --graphql-file-exts ({}).",
                self.graphql_file_exts.join(", "),
            );
            file_paths.push(std::fs::canonicalize(only_path)?);
        }

        anyhow::ensure!(
            !file_paths.is_empty(),
            "no schema files found under {:?}",
            self.schema,
        );
        Ok(file_paths)
    }
}

#[inherent::inherent]
impl RunnableCommand for ExpandCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        match self.expand() {
            Ok(expansions) => {
                log::info!(
                    "{} Expanded {:?}.",
                    output_utils::GREEN_CHECK,
                    self.query_file,
                );
                CommandResult::json(&expansions)
            },

            Err(err) => CommandResult::error(
                &err.context(format!("failed to expand {:?}", self.query_file)),
            ),
        }
    }
}
