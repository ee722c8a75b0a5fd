//! CLI binary entry point for studio-sync

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use studio_sync_sdk::client::TransformationClient;
use studio_sync_sdk::export::EXPORT_FILENAME;
use studio_sync_sdk::import::load_manifest;
use studio_sync_sdk::sync::{SyncOptions, create_transformations, create_transformations_with};

#[derive(Parser)]
#[command(name = "studio-sync")]
#[command(about = "Publish API routes as studio transformations")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List transformations registered on the platform
    List,
    /// Convert a route manifest and upload the transformations
    Push {
        /// Route manifest file (JSON or YAML)
        manifest: PathBuf,
        /// Base URL the platform calls back into
        #[arg(short, long)]
        url: String,
        /// Suffix appended to each transformation id
        #[arg(short, long, default_value = "")]
        suffix: String,
        /// Delete the uploaded transformations when this process exits
        #[arg(long)]
        cleanup: bool,
    },
    /// Convert a route manifest and write a JSON export (no network call)
    Export {
        /// Route manifest file (JSON or YAML)
        manifest: PathBuf,
        /// Base URL the platform would call back into
        #[arg(short, long)]
        url: String,
        /// Suffix appended to each transformation id
        #[arg(short, long, default_value = "")]
        suffix: String,
        /// Output file path
        #[arg(short, long, default_value = EXPORT_FILENAME)]
        output: PathBuf,
    },
    /// Delete transformations by id
    Delete {
        /// Transformation ids to delete
        #[arg(required = true)]
        ids: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List => handle_list(),
        Commands::Push {
            manifest,
            url,
            suffix,
            cleanup,
        } => handle_push(&manifest, &url, suffix, cleanup),
        Commands::Export {
            manifest,
            url,
            suffix,
            output,
        } => handle_export(&manifest, &url, suffix, output),
        Commands::Delete { ids } => handle_delete(ids),
    }
}

fn handle_list() -> anyhow::Result<()> {
    let client = TransformationClient::from_env()?;
    let listing = client.list_transformations()?;
    println!("{}", serde_json::to_string_pretty(&listing)?);
    Ok(())
}

fn handle_push(
    manifest: &PathBuf,
    url: &str,
    suffix: String,
    cleanup: bool,
) -> anyhow::Result<()> {
    let routes = load_manifest(manifest)
        .with_context(|| format!("Failed to load manifest {}", manifest.display()))?;
    let client = TransformationClient::from_env()?;

    let options = SyncOptions {
        id_suffix: suffix,
        cleanup,
        ..SyncOptions::default()
    };
    let outcome = create_transformations_with(client, &routes, url, options)?;
    println!(
        "Uploaded {} transformation(s): {}",
        outcome.transformations.len(),
        outcome.transformation_ids.join(", ")
    );

    if let Some(guard) = outcome.cleanup {
        let response = guard.run()?;
        println!(
            "Deleted uploaded transformations: {}",
            serde_json::to_string_pretty(&response)?
        );
    }
    Ok(())
}

fn handle_export(
    manifest: &PathBuf,
    url: &str,
    suffix: String,
    output: PathBuf,
) -> anyhow::Result<()> {
    let routes = load_manifest(manifest)
        .with_context(|| format!("Failed to load manifest {}", manifest.display()))?;

    let options = SyncOptions {
        id_suffix: suffix,
        export_json: true,
        export_path: output.clone(),
        ..SyncOptions::default()
    };
    let outcome = create_transformations(&routes, url, options)?;
    println!(
        "Exported {} transformation(s) to {}",
        outcome.transformations.len(),
        output.display()
    );
    Ok(())
}

fn handle_delete(ids: Vec<String>) -> anyhow::Result<()> {
    let client = TransformationClient::from_env()?;
    let response = client.cleanup_transformations(&ids)?;
    println!(
        "Deleted transformations: {}",
        serde_json::to_string_pretty(&response)?
    );
    Ok(())
}
