mod display;

use std::time::Duration;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use juscaba_client::config::{DEFAULT_CONCURRENCY, DEFAULT_PAGE_SIZE};
use juscaba_client::{ClientConfig, DEFAULT_BASE_URL, JuscabaClient};
use juscaba_core::{CaseIdentifier, CaseRecord, EntryWithCase};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "juscaba", version, about = "Query case records on the JusCABA public API")]
struct Cli {
    #[command(flatten)]
    client: ClientArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct ClientArgs {
    /// Root of the expedientes API.
    #[arg(long, env = "JUSCABA_BASE_URL", default_value = DEFAULT_BASE_URL, global = true)]
    base_url: String,

    /// Per-request timeout in seconds.
    #[arg(long, env = "JUSCABA_TIMEOUT_SECS", global = true)]
    timeout_secs: Option<u64>,

    /// Entries whose documents are derived concurrently.
    #[arg(long, env = "JUSCABA_CONCURRENCY", default_value_t = DEFAULT_CONCURRENCY, global = true)]
    concurrency: usize,

    /// Entries per page when listing actuaciones.
    #[arg(long, env = "JUSCABA_PAGE_SIZE", default_value_t = DEFAULT_PAGE_SIZE, global = true)]
    page_size: u32,
}

impl ClientArgs {
    fn config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            page_size: self.page_size,
            concurrency: self.concurrency,
            timeout: self.timeout_secs.map(Duration::from_secs),
            ..Default::default()
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Resolve a case identifier (NUMBER/YEAR[-SUFFIX]) and show its record.
    Case {
        identifier: String,
        #[arg(long)]
        json: bool,
    },
    /// List every procedural entry of a case.
    Entries {
        identifier: String,
        #[arg(long)]
        json: bool,
    },
    /// List the document URLs reachable from a case's entries.
    Documents {
        identifier: String,
        /// Only derive documents for this actuación id.
        #[arg(long)]
        entry: Option<i64>,
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = JuscabaClient::new(cli.client.config()).context("configuring client")?;

    match cli.command {
        Command::Case { identifier, json } => {
            let case = resolve(&client, &identifier).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&case)?);
            } else {
                print!("{}", display::case_card(&case));
            }
        }
        Command::Entries { identifier, json } => {
            let case = resolve(&client, &identifier).await?;
            let entries = client
                .fetch_all_entries(&case)
                .await
                .with_context(|| format!("fetching entries for {}", case.display_id()))?;
            for entry in &entries {
                if json {
                    let tagged = EntryWithCase {
                        entry,
                        case_number: case.display_id(),
                    };
                    println!("{}", serde_json::to_string(&tagged)?);
                } else {
                    println!("{}", display::entry_line(entry));
                }
            }
            if !json {
                eprintln!("{} entries", entries.len());
            }
        }
        Command::Documents {
            identifier,
            entry,
            json,
        } => {
            let case = resolve(&client, &identifier).await?;
            let mut entries = client
                .fetch_all_entries(&case)
                .await
                .with_context(|| format!("fetching entries for {}", case.display_id()))?;
            if let Some(act_id) = entry {
                entries.retain(|e| e.act_id == act_id);
                anyhow::ensure!(
                    !entries.is_empty(),
                    "case {} has no actuación {act_id}",
                    case.display_id()
                );
            }

            let documents = client.derive_all_documents(&case, &entries).await;
            for doc in &documents {
                if json {
                    println!("{}", serde_json::to_string(doc)?);
                } else {
                    println!("{}", display::document_lines(doc));
                }
            }
            if !json {
                eprintln!("{} documents from {} entries", documents.len(), entries.len());
            }
        }
    }

    Ok(())
}

async fn resolve(client: &JuscabaClient, identifier: &str) -> anyhow::Result<CaseRecord> {
    let parsed = CaseIdentifier::parse(identifier)?;
    tracing::debug!(%parsed, "resolving case");
    client
        .resolve(identifier.trim())
        .await
        .with_context(|| format!("resolving {parsed}"))
}
