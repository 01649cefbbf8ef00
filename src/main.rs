//! Command-line front end for the resolution engine.

use clap::Parser;
use color_eyre::eyre::Result;
use tracing_subscriber::EnvFilter;

use mirrorscope::{MirrorClient, Network, Resolution, SearchRequest};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Resolve a ledger identifier against a mirror node.
///
/// The query can be an entity id (with or without checksum), an account
/// alias, an EVM address, a public key, a transaction id, a transaction or
/// block hash in hex or base-64, or a bare entity number.
#[derive(Parser)]
#[command(version = VERSION, about, long_about = None)]
struct Cli {
    /// The identifier to resolve.
    query: String,

    /// Target network.
    #[arg(short, long, default_value_t = Network::Mainnet)]
    network: Network,

    /// Custom mirror node base URL (defaults to the network's public node).
    #[arg(long)]
    mirror_url: Option<String>,

    /// Print the raw result as JSON.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = match &cli.mirror_url {
        Some(url) => MirrorClient::with_base_url(cli.network, url)?,
        None => MirrorClient::new(cli.network)?,
    };

    let mut request = SearchRequest::with_client(cli.query, client);
    request.run().await;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(request.result())?);
    } else {
        print_summary(request.query(), request.network(), request.result());
    }

    Ok(())
}

fn print_summary(query: &str, network: Network, result: &Resolution) {
    println!("query:    {}", query.trim());
    println!("network:  {network}");
    if let Some(address) = &result.ethereum_address {
        println!("evm form: {address}");
    }

    if let Some(account) = &result.account {
        println!(
            "account:  {} (balance {})",
            account.account.as_deref().unwrap_or("?"),
            account
                .balance
                .as_ref()
                .and_then(|b| b.balance)
                .map_or_else(|| "unknown".to_string(), |tinybar| tinybar.to_string()),
        );
    }
    for account in &result.accounts_with_key {
        println!("holder:   {}", account.account.as_deref().unwrap_or("?"));
    }
    if let Some(contract) = &result.contract {
        println!("contract: {}", contract.contract_id.as_deref().unwrap_or("?"));
    }
    if let Some(token) = &result.token {
        println!(
            "token:    {} ({})",
            token.token_id.as_deref().unwrap_or("?"),
            token.symbol.as_deref().unwrap_or("?"),
        );
    }
    if let Some(topic) = &result.topic {
        println!("topic:    {}", topic.topic_id.as_deref().unwrap_or("?"));
    }
    for transaction in &result.transactions {
        println!(
            "tx:       {} {} at {}",
            transaction.transaction_id.as_deref().unwrap_or("?"),
            transaction.result.as_deref().unwrap_or("?"),
            transaction
                .consensus_timestamp
                .as_deref()
                .map_or_else(|| "?".to_string(), format_timestamp),
        );
    }
    if let Some(block) = &result.block {
        println!(
            "block:    #{} ({} transactions)",
            block.number.map_or_else(|| "?".to_string(), |n| n.to_string()),
            block.count.map_or_else(|| "?".to_string(), |n| n.to_string()),
        );
    }

    if !result.has_match() {
        println!("no match");
    }
    if result.error_count > 0 {
        println!("warning: {} lookup(s) failed in transport", result.error_count);
    }
}

/// Render a `seconds.nanos` consensus timestamp as a UTC instant.
fn format_timestamp(timestamp: &str) -> String {
    let (seconds, nanos) = timestamp.split_once('.').unwrap_or((timestamp, "0"));
    seconds
        .parse::<i64>()
        .ok()
        .zip(nanos.parse::<u32>().ok())
        .and_then(|(s, n)| chrono::DateTime::from_timestamp(s, n))
        .map_or_else(
            || timestamp.to_string(),
            |instant| instant.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        )
}
