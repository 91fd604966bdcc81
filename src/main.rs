mod shutdown;
mod startup;

use tracing::info;

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Initialize logging
    startup::init_logging()?;

    info!("Starting issue calendar");

    // Load configuration
    let config = startup::load_config()?;

    // Load the calendar and serve clicks
    startup::run(config).await
}
