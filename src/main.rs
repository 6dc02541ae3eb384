use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::{error, info};

use conversation_exporter_lib::{logger, output, ApiClient, PageWalker};

/// Export every Help Scout conversation, with its message threads, to a
/// single JSON file.
#[derive(Parser, Debug)]
#[command(name = "conversation-exporter", version, about)]
struct Args {
    /// Help Scout API access token
    #[arg(short = 't', long)]
    access_token: String,

    /// API base URL
    #[arg(long, default_value = "https://api.helpscout.net/v2")]
    base_url: String,

    /// Output file path
    #[arg(short, long, default_value = "conversations.json")]
    output: PathBuf,
}

fn main() {
    logger::init();
    if let Err(e) = run(Args::parse()) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    info!("Starting conversation export from {}...", args.base_url);

    let client = ApiClient::new(format!("Bearer {}", args.access_token))
        .context("failed to build API client")?;

    let conversations = PageWalker::new(&client, &args.base_url)
        .walk()
        .context("export aborted")?;

    output::write_json(&args.output, &conversations)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    Ok(())
}
