use crate::data::data;
use crate::helpers::load_config::Config;
use crate::registry::client::Registry;
use crate::sources::sources;
use crate::storage::storage::S3ObjectStore;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "datareg",
    about = "Define and interact with S3-backed data registries",
    long_about = "datareg registers data sources (S3 prefixes) and individual data samples \
                  against a remote data registry, then lists, describes, downloads, or uploads \
                  data through that registry.",
    version,
    term_width = 100,
    after_help = "\
    EXAMPLES:
        datareg sources create --id s3-imgs --s3-path s3://bucket1/imgs
        datareg data register --source s3-imgs --tag label=cat a.png b.png
        datareg data download --source s3-imgs --dir ./samples"
)]
struct Cli {
    /// Configuration file; when omitted, configuration comes from the
    /// environment (DATAREG_REGISTRY_ADDR)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register, list, update, and describe sources of data
    #[command(subcommand)]
    Sources(SourcesCommand),

    /// Register data against a source and retrieve data from it
    #[command(subcommand)]
    Data(DataCommand),
}

#[derive(Subcommand)]
enum SourcesCommand {
    /// Create a source
    Create {
        /// An identifier for the source -- this must be unique over all registered sources
        #[arg(short, long)]
        id: String,

        /// S3 path under which individual samples are stored
        #[arg(short = 'p', long)]
        s3_path: String,
    },

    /// Get a previously created source
    Get {
        /// An identifier for the source -- this must be unique over all registered sources
        #[arg(short, long)]
        id: String,
    },

    /// Mark an update to a source
    Update {
        /// An identifier for the source -- this must be unique over all registered sources
        #[arg(short, long)]
        id: String,

        /// Update message -- specifies the nature of the update
        #[arg(short, long)]
        message: String,
    },

    /// List previously created sources
    List {
        /// Offset from which listing should start
        #[arg(short, long, default_value_t = 0)]
        offset: u64,

        /// Number of items to list
        #[arg(short, long, default_value_t = 10)]
        num_items: u64,
    },
}

#[derive(Subcommand)]
enum DataCommand {
    /// Describe the data in a data source
    Describe {
        /// ID of the source
        #[arg(short, long)]
        source: String,

        /// Optional IDs for data samples that you would like to restrict the description to
        #[arg(short, long, num_args = 0..)]
        ids: Option<Vec<String>>,
    },

    /// Download data from a data source
    Download {
        /// ID of the source
        #[arg(short, long)]
        source: String,

        /// Optional IDs for data samples that you would like to restrict the download to
        #[arg(short, long, num_args = 0..)]
        ids: Option<Vec<String>>,

        /// Directory into which data should be downloaded (defaults to current directory)
        #[arg(short, long, default_value = "./")]
        dir: PathBuf,
    },

    /// Register data against a source
    Register {
        /// ID of the source
        #[arg(short, long)]
        source: String,

        /// Extra KEY=VALUE tag attached to every sample in the batch
        #[arg(short, long = "tag", value_parser = parse_tag)]
        tags: Vec<(String, String)>,

        /// Paths describing local files to be uploaded
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

/// Entry function for CLI
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::from_env()?,
    };

    match cli.command {
        Commands::Sources(command) => run_sources(command, &config).await,
        Commands::Data(command) => run_data(command, &config).await,
    }
}

//
// ------------------------ Command Implementations ------------------------------
//

async fn run_sources(command: SourcesCommand, config: &Config) -> Result<()> {
    let mut registry = Registry::connect(&config.registry).await?;

    match command {
        SourcesCommand::Create { id, s3_path } => {
            let source = sources::create_data_source(&mut registry, &id, &s3_path).await?;
            println!("*** Source registered ***");
            println!("{source:#?}");
        }
        SourcesCommand::Get { id } => {
            let source = sources::get_data_source(&mut registry, &id).await?;
            println!("*** Source ***");
            println!("{source:#?}");
        }
        SourcesCommand::Update { id, message } => {
            let source = sources::update_data_source(&mut registry, &id, &message).await?;
            println!("*** Source ***");
            println!("{source:#?}");
        }
        SourcesCommand::List { offset, num_items } => {
            let registered = sources::list_data_sources(&mut registry, offset, num_items).await?;
            println!("*** Sources ***");
            for (i, source) in registered.iter().enumerate() {
                println!("*** Source {} ***", offset + i as u64);
                println!("{source:#?}");
            }
        }
    }

    Ok(())
}

async fn run_data(command: DataCommand, config: &Config) -> Result<()> {
    let mut registry = Registry::connect(&config.registry).await?;

    match command {
        DataCommand::Describe { source, ids } => {
            let mut descriptions =
                data::describe_data(&mut registry, &source, ids.as_deref()).await?;
            println!("*** Data descriptions ***");
            let mut index = 0usize;
            while let Some(response) = descriptions.message().await? {
                println!("*** Sample {index} ***");
                if let Some(datum) = response.datum {
                    println!("{datum:#?}");
                }
                index += 1;
            }
        }
        DataCommand::Download { source, ids, dir } => {
            let store = S3ObjectStore::from_config(&config.storage).await;
            let outcome =
                data::download_data(&mut registry, &store, &source, ids.as_deref(), &dir).await?;
            for path in &outcome.downloaded {
                println!("{}", path.display());
            }
            if !outcome.failures.is_empty() {
                eprintln!(
                    "{} of {} downloads failed",
                    outcome.failures.len(),
                    outcome.failures.len() + outcome.downloaded.len()
                );
            }
        }
        DataCommand::Register {
            source,
            tags,
            files,
        } => {
            let store = S3ObjectStore::from_config(&config.storage).await;
            let tags: HashMap<String, String> = tags.into_iter().collect();
            let outcome =
                data::register_data(&mut registry, &store, &source, &files, &tags).await?;
            println!("*** Data registration ***");
            for (i, response) in outcome.responses.iter().enumerate() {
                println!("*** Sample {i} ***");
                println!("{response:#?}");
            }
            if !outcome.failures.is_empty() {
                eprintln!(
                    "{} of {} uploads failed",
                    outcome.failures.len(),
                    files.len()
                );
            }
        }
    }

    Ok(())
}

/// Parse one KEY=VALUE tag argument.
fn parse_tag(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| format!("tag `{raw}` is not in KEY=VALUE form"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tag() {
        assert_eq!(
            parse_tag("label=cat"),
            Ok(("label".to_string(), "cat".to_string()))
        );
        assert_eq!(
            parse_tag("label=cat=tabby"),
            Ok(("label".to_string(), "cat=tabby".to_string()))
        );
        assert!(parse_tag("label").is_err());
    }

    #[test]
    fn test_cli_parses_register_command() {
        let cli = Cli::try_parse_from([
            "datareg", "data", "register", "--source", "s3-imgs", "--tag", "label=cat", "a.png",
            "b.png",
        ])
        .unwrap();
        match cli.command {
            Commands::Data(DataCommand::Register {
                source,
                tags,
                files,
            }) => {
                assert_eq!(source, "s3-imgs");
                assert_eq!(tags, vec![("label".to_string(), "cat".to_string())]);
                assert_eq!(files, vec![PathBuf::from("a.png"), PathBuf::from("b.png")]);
            }
            _ => panic!("parsed into the wrong command"),
        }
    }

    #[test]
    fn test_cli_list_defaults() {
        let cli = Cli::try_parse_from(["datareg", "sources", "list"]).unwrap();
        match cli.command {
            Commands::Sources(SourcesCommand::List { offset, num_items }) => {
                assert_eq!(offset, 0);
                assert_eq!(num_items, 10);
            }
            _ => panic!("parsed into the wrong command"),
        }
    }
}
