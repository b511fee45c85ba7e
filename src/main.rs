use anyhow::Result;
use clap::Parser;
use roleboard::api::ApiClient;
use roleboard::report::format_report;
use tracing_subscriber::EnvFilter;

/// Fetch role reviews, aggregate them per company/role, post the summary back.
#[derive(Debug, Parser)]
#[command(name = "roleboard", version, about)]
struct Cli {
    /// Review API endpoint (GET for input, POST for the summary).
    #[arg(env = "ROLEBOARD_URL")]
    url: String,

    /// Request timeout in seconds.
    #[arg(long, default_value_t = 30)]
    timeout: u64,
}

/// Fetch → format → post. Any stage failure bubbles up undifferentiated.
async fn run(cli: &Cli) -> Result<()> {
    let client = ApiClient::with_timeout(&cli.url, cli.timeout)?;

    let input = client.fetch_data().await?;
    tracing::info!(
        roles = input.roles.len(),
        reviews = input.reviews.len(),
        users = input.users.len(),
        "retrieved data from API"
    );

    let output = format_report(&input)?;
    tracing::info!(companies = output.companies.len(), "formatted the data");

    let report = client.post_data(&output).await?;
    println!("{report}");

    Ok(())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    if let Err(error) = run(&cli).await {
        tracing::error!("Error: {error:#}");
        std::process::exit(1);
    }
}
