use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use farescout::app::AppContext;
use farescout::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::load()?;
    let ctx = AppContext::new(config);

    let summary = ctx.run().await?;

    if summary.synthetic {
        warn!(
            "Saved {} simulated rows to '{}'",
            summary.rows_written,
            summary.output.display()
        );
    } else {
        info!("SUCCESS! Data saved to '{}'", summary.output.display());
        info!("Total flights scraped: {}", summary.rows_written);
    }

    Ok(())
}
