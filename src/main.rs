//! CLI entry point for mbta2rss.
//!
//! Pulls down queried MBTA alerts (or stop lists) and prints them to stdout
//! as RSS or Markdown. Logging goes to stderr so the rendered feed stays
//! clean on stdout.

use anyhow::Result;
use clap::Parser;
use mbta2rss::{
    alerts,
    drivers::{FeedMeta, select_driver},
    fetch::BasicClient,
    stops,
};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "mbta2rss")]
#[command(about = "Pull down MBTA alerts and print them out", long_about = None)]
struct Cli {
    /// Data to grab (alerts or stops)
    #[arg(short, long, value_name = "DATATYPE", default_value = "alerts")]
    datatype: String,

    /// Output format (rss or md)
    #[arg(short, long, value_name = "OUTFMT", default_value = "rss")]
    output: String,

    /// Route list, comma-separated
    #[arg(short, long, value_name = "ROUTELIST")]
    routes: Option<String>,

    /// Only list alerts in effect at the given time
    #[arg(short, long, value_name = "TIME")]
    time: Option<String>,

    /// Feed title override
    #[arg(short = 'T', long, value_name = "TITLE")]
    title: Option<String>,

    /// Feed description override
    #[arg(short = 'D', long, value_name = "DESC")]
    description: Option<String>,

    /// Upstream URL override
    #[arg(short = 'U', long, value_name = "URL")]
    url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("warn".parse().unwrap()));

    tracing_subscriber::registry().with(stderr_layer).init();

    let cli = Cli::parse();

    let mut meta = FeedMeta::default();
    if let Some(title) = cli.title {
        meta.title = title;
    }
    if let Some(description) = cli.description {
        meta.description = description;
    }
    if let Some(url) = cli.url {
        meta.url = url;
    }

    // An API key raises the per-minute request limit; absence is fine.
    let api_key = std::env::var("API_KEY").ok();

    let Some(driver) = select_driver(&cli.output, meta) else {
        // Unknown selectors report a single line and exit 0, with no feed
        // content written to stdout.
        eprintln!("No such output driver.");
        return Ok(());
    };

    let client = BasicClient::new();
    let mut out = std::io::stdout().lock();

    match cli.datatype.as_str() {
        "alerts" => {
            alerts::run(
                &client,
                driver.as_ref(),
                &mut out,
                cli.routes.as_deref(),
                cli.time.as_deref(),
                api_key.as_deref(),
            )
            .await?;
        }
        "stops" => {
            stops::run(
                &client,
                driver.as_ref(),
                &mut out,
                cli.routes.as_deref(),
                api_key.as_deref(),
            )
            .await?;
        }
        _ => {
            eprintln!("No such data type.");
        }
    }

    Ok(())
}
