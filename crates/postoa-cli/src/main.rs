use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use log::info;

use postoa_core::collection;
use postoa_core::config::{self, CONFIG_FILE_NAME, PostoaConfig};
use postoa_core::convert;
use postoa_core::openapi::spec::OpenApiSpec;

#[derive(Parser)]
#[command(
    name = "postoa",
    about = "Convert Postman collections to OpenAPI 3.0",
    version
)]
struct Cli {
    /// Log debug output (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a Postman collection to an OpenAPI document
    Convert {
        /// Path to the exported Postman collection (JSON)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Where to write the OpenAPI document [default: <input>.swagger.json]
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print the output JSON
        #[arg(long)]
        pretty: bool,

        /// Leave out query parameters disabled in Postman
        #[arg(long)]
        skip_disabled_queries: bool,
    },

    /// Print the paths a collection converts to, without writing a file
    Inspect {
        /// Path to the exported Postman collection (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Output format
        #[arg(long, default_value = "yaml")]
        format: InspectFormat,
    },

    /// Initialize a new postoa configuration
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

#[derive(Clone, ValueEnum)]
enum InspectFormat {
    Yaml,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match cli.command {
        Commands::Convert {
            input,
            output,
            pretty,
            skip_disabled_queries,
        } => cmd_convert(input, output, pretty, skip_disabled_queries),

        Commands::Inspect { input, format } => cmd_inspect(input, format),

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "postoa", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Try to load the project config file from the current directory.
fn try_load_config() -> Result<Option<PostoaConfig>> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    Ok(config::load_config(&config_path)?)
}

fn load_collection(path: &Path) -> Result<collection::spec::Collection> {
    let content = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    collection::from_slice(&content)
        .with_context(|| format!("failed to decode Postman collection {}", path.display()))
}

fn cmd_convert(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    pretty: bool,
    skip_disabled_queries: bool,
) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();
    let input = input.unwrap_or_else(|| PathBuf::from(&cfg.input));
    let output = output.unwrap_or_else(|| cfg.output_path(&input));

    let mut options = cfg.convert_options();
    options.pretty |= pretty;
    options.skip_disabled_queries |= skip_disabled_queries;

    eprintln!("source: {}", input.display());
    eprintln!("target: {}", output.display());

    let source =
        fs::read(&input).with_context(|| format!("failed to read {}", input.display()))?;
    let encoded = postoa_core::convert_bytes(&source, &options)
        .with_context(|| format!("failed to convert {}", input.display()))?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    fs::write(&output, encoded)
        .with_context(|| format!("failed to write {}", output.display()))?;
    info!("wrote {}", output.display());

    eprintln!("Converted {} → {}", input.display(), output.display());
    Ok(())
}

fn cmd_inspect(input: PathBuf, format: InspectFormat) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();
    let collection = load_collection(&input)?;
    let spec = convert::convert_with_options(&collection, &cfg.convert_options());

    let summary = build_inspect_summary(&spec);

    match format {
        InspectFormat::Yaml => {
            let yaml = serde_yaml_ng::to_string(&summary)?;
            print!("{}", yaml);
        }
        InspectFormat::Json => {
            let json = serde_json::to_string_pretty(&summary)?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn build_inspect_summary(spec: &OpenApiSpec) -> serde_json::Value {
    let paths: Vec<serde_json::Value> = spec
        .paths
        .iter()
        .map(|(path, item)| {
            let operations: Vec<serde_json::Value> = item
                .methods()
                .into_iter()
                .filter_map(|method| {
                    let op = item.operation(method)?;
                    Some(serde_json::json!({
                        "method": method.to_string(),
                        "operation_id": op.operation_id,
                        "parameters": op.parameters.iter().map(|p| &p.name).collect::<Vec<_>>(),
                    }))
                })
                .collect();
            serde_json::json!({
                "path": path,
                "summary": item.summary,
                "operations": operations,
            })
        })
        .collect();

    serde_json::json!({
        "info": {
            "title": spec.info.title,
            "openapi": spec.openapi,
        },
        "paths": paths,
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

#[cfg(test)]
mod tests {
    use super::*;
    use postoa_core::collection::{item::Item, request::Request, spec::Collection, url::Url};
    use postoa_core::openapi;

    #[test]
    fn test_cli_parses_convert() {
        let cli = Cli::try_parse_from(["postoa", "convert", "-i", "a.json", "--pretty"]).unwrap();
        match cli.command {
            Commands::Convert { input, output, pretty, .. } => {
                assert_eq!(input, Some(PathBuf::from("a.json")));
                assert!(output.is_none());
                assert!(pretty);
            }
            _ => panic!("expected convert"),
        }
    }

    #[test]
    fn test_inspect_summary() {
        let collection = Collection {
            items: vec![Item::request(
                "Get user",
                Request::new("GET", Url::new("{{host}}/users/{{id}}", &["users", "{{id}}"])),
            )],
            ..Collection::default()
        };
        let spec = convert::convert(&collection);
        let summary = build_inspect_summary(&spec);
        assert_eq!(summary["paths"][0]["path"], "/users/{id}");
        assert_eq!(summary["paths"][0]["operations"][0]["method"], "GET");
        assert_eq!(summary["paths"][0]["operations"][0]["parameters"][0], "id");
    }

    #[test]
    fn test_encode_matches_library() {
        let spec = convert::convert(&Collection::default());
        let bytes = openapi::to_vec(&spec).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            r#"{"openapi":"3.0.0","info":{"title":"","description":"","version":""},"paths":{}}"#
        );
    }
}
