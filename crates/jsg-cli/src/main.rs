use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use jsg_core::config::{self, CONFIG_FILE_NAME, JsgConfig, OutputFormat};
use jsg_core::infer::{self, InferOptions, UNSUPPORTED_OPERATIONS};
use jsg_core::parse::{self, dataset::Dataset};
use jsg_core::swagger::SwaggerDocument;

#[derive(Parser)]
#[command(
    name = "jsg",
    about = "Generate a Swagger 2.0 document from a json-server dataset",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the swagger document for a dataset
    Generate {
        /// Host recorded in the document
        #[arg(long)]
        host: Option<String>,

        /// Path to the dataset (JSON, or YAML by extension)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Where to write the document
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(long)]
        format: Option<FormatArg>,
    },

    /// Summarize what would be generated for a dataset
    Inspect {
        /// Path to the dataset
        #[arg(short, long)]
        input: PathBuf,

        /// Output format
        #[arg(long, default_value = "yaml")]
        format: FormatArg,
    },

    /// Initialize a new jsg configuration
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Yaml,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Yaml => OutputFormat::Yaml,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            host,
            input,
            output,
            format,
        } => cmd_generate(host, input, output, format),

        Commands::Inspect { input, format } => cmd_inspect(input, format),

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "jsg", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Try to load the project config file from the current directory.
fn try_load_config() -> Result<Option<JsgConfig>> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    config::load_config(&config_path).map_err(|e| anyhow::anyhow!(e))
}

fn load_dataset(path: &Path) -> Result<Dataset> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    let dataset = match ext {
        "yaml" | "yml" => parse::from_yaml(&content),
        _ => parse::from_json(&content),
    }
    .with_context(|| format!("failed to parse {}", path.display()))?;

    Ok(dataset)
}

fn render(doc: &SwaggerDocument, format: OutputFormat) -> Result<String> {
    let text = match format {
        OutputFormat::Json => serde_json::to_string_pretty(doc)?,
        OutputFormat::Yaml => serde_yaml_ng::to_string(doc)?,
    };
    Ok(text)
}

/// Write `content` next to `path` first, then move it into place, so a
/// failed write never leaves a truncated document behind.
fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    let mut staging = path.as_os_str().to_owned();
    staging.push(".tmp");
    let staging = PathBuf::from(staging);

    fs::write(&staging, content)
        .with_context(|| format!("failed to write {}", staging.display()))?;
    fs::rename(&staging, path)
        .with_context(|| format!("failed to move {} into place", path.display()))?;
    Ok(())
}

fn cmd_generate(
    host: Option<String>,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    format: Option<FormatArg>,
) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();
    let host = host.unwrap_or(cfg.host);
    let input = input.unwrap_or_else(|| PathBuf::from(&cfg.input));
    let output = output.unwrap_or_else(|| PathBuf::from(&cfg.output));
    let format = format.map(OutputFormat::from).unwrap_or(cfg.format);
    let options = InferOptions {
        max_depth: cfg.max_depth,
    };

    log::info!("generating {} from {}", output.display(), input.display());

    let dataset = load_dataset(&input)?;
    let doc = infer::build_with_options(&dataset, &host, options)
        .with_context(|| format!("failed to infer a document from {}", input.display()))?;
    let content = render(&doc, format)?;
    write_output(&output, &content)?;

    eprintln!(
        "Generated {} ({} paths, {} definitions)",
        output.display(),
        doc.paths.len(),
        doc.definitions.len()
    );
    eprintln!(
        "  note: {} operations are served by json-server but not described",
        UNSUPPORTED_OPERATIONS.join(", ")
    );
    Ok(())
}

fn cmd_inspect(input: PathBuf, format: FormatArg) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();
    let dataset = load_dataset(&input)?;
    let options = InferOptions {
        max_depth: cfg.max_depth,
    };
    let doc = infer::build_with_options(&dataset, &cfg.host, options)?;

    let summary = build_inspect_summary(&dataset, &doc);

    match format {
        FormatArg::Yaml => {
            let yaml = serde_yaml_ng::to_string(&summary)?;
            print!("{}", yaml);
        }
        FormatArg::Json => {
            let json = serde_json::to_string_pretty(&summary)?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn build_inspect_summary(dataset: &Dataset, doc: &SwaggerDocument) -> serde_json::Value {
    let collections: Vec<serde_json::Value> = dataset
        .collections()
        .map(|(name, collection)| {
            serde_json::json!({
                "name": name,
                "type": infer::derive_type_name(name),
                "kind": if collection.is_list() { "list" } else { "single" },
                "exemplar": collection.exemplar_kind(),
            })
        })
        .collect();

    let paths: Vec<serde_json::Value> = doc
        .paths
        .iter()
        .map(|(path, item)| {
            serde_json::json!({
                "path": path,
                "operations": item
                    .operations()
                    .map(|(method, op)| format!("{} {}", method, op.operation_id))
                    .collect::<Vec<_>>(),
            })
        })
        .collect();

    serde_json::json!({
        "host": doc.host,
        "collections": collections,
        "definitions": doc.definitions.keys().collect::<Vec<_>>(),
        "paths": paths,
        "unresolved_refs": doc.unresolved_refs(),
    })
}

fn cmd_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, config::default_config_content())?;
    eprintln!("Created {}", config_path.display());
    Ok(())
}
