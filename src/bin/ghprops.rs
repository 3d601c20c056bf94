//! GitHub custom property values CLI binary.
//!
//! A command-line interface for reading and writing repository custom
//! property values.

use clap::Parser;
use ghprops::cli::{Cli, Command};
use ghprops::output::{PrettyPrint, UNSET_MARKER};
use ghprops::{CustomPropertyValue, GitHubClient, RepoRef};
use std::process::ExitCode;
use tabled::{Table, Tabled};
use tracing::Level;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let client = match GitHubClient::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Hint: Set GITHUB_TOKEN environment variable");
            return ExitCode::FAILURE;
        }
    };

    match run(&client, cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            if let Some(meta) = e.response() {
                if let Some(ref id) = meta.request_id {
                    eprintln!("Request ID: {id}");
                }
            }
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(client: &GitHubClient, cli: Cli) -> ghprops::Result<()> {
    let properties = cli.command.properties();
    match cli.command {
        Command::Get { repo } => handle_get(client, &repo, cli.json).await,
        Command::Set { repo, .. } => handle_set(client, &repo, &properties, cli.json).await,
    }
}

async fn handle_get(client: &GitHubClient, repo: &RepoRef, json: bool) -> ghprops::Result<()> {
    let (values, _meta) = client
        .repositories()
        .get_all_custom_property_values(repo)
        .await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&values)?);
    } else if values.is_empty() {
        println!("{}", values.pretty_print());
    } else {
        let rows: Vec<PropertyRow> = values.iter().map(PropertyRow::from).collect();
        println!("{}", Table::new(rows));
    }
    Ok(())
}

async fn handle_set(
    client: &GitHubClient,
    repo: &RepoRef,
    properties: &[CustomPropertyValue],
    json: bool,
) -> ghprops::Result<()> {
    if properties.is_empty() {
        eprintln!("Warning: no properties given, sending an empty update");
    }

    let meta = client
        .repositories()
        .create_or_update_custom_property_values(repo, properties)
        .await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&meta)?);
    } else {
        let noun = if properties.len() == 1 { "property" } else { "properties" };
        println!("Updated {} {noun} on {repo}", properties.len());
        println!("{}", meta.pretty_print());
    }
    Ok(())
}

// Table row types for non-JSON output

#[derive(Tabled)]
struct PropertyRow {
    property: String,
    value: String,
}

impl From<&CustomPropertyValue> for PropertyRow {
    fn from(p: &CustomPropertyValue) -> Self {
        Self {
            property: p.property_name.clone(),
            value: p
                .value
                .clone()
                .unwrap_or_else(|| UNSET_MARKER.to_string()),
        }
    }
}
