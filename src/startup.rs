use crate::shutdown;
use issue_calendar::components::issue_calendar::{
    run_click_loop, spawn_line_reader, BrowserLinkOpener, HttpIssueFetcher, IssueCalendarLoader,
    LinkOpener, LogLinkOpener, MonthGridCalendar,
};
use issue_calendar::config::Config;
use issue_calendar::error::other_error;
use issue_calendar::utils::time::today_in;
use std::io;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Initialize logging with environment-based configuration
pub fn init_logging() -> miette::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,reqwest=warn,hyper=warn")),
        )
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| other_error(&format!("Failed to set up logging: {}", e)))?;

    Ok(())
}

/// Load the application config
pub fn load_config() -> miette::Result<Config> {
    match Config::load() {
        Ok(config) => Ok(config),
        Err(e) => {
            error!("Failed to load configuration: {:?}", e);
            Err(e.into())
        }
    }
}

/// Load the calendar, then handle clicks until quit or a termination signal
pub async fn run(config: Config) -> miette::Result<()> {
    let base_url = config.base_url()?;
    let focus = today_in(&config.tz()?);

    let opener: Arc<dyn LinkOpener> = if config.open_links {
        Arc::new(BrowserLinkOpener)
    } else {
        Arc::new(LogLinkOpener)
    };

    let fetcher = HttpIssueFetcher::new(&base_url)?;
    info!("Loading issues from {}", fetcher.endpoint());

    let widget = MonthGridCalendar::new(io::stdout(), focus);
    let mut loader = IssueCalendarLoader::new(fetcher, widget, opener);

    loader.load().await?;

    if !loader.widget().events().is_empty() {
        println!("Enter an event number to open it, or q to quit");
    }

    let mut lines = spawn_line_reader(io::BufReader::new(io::stdin()));
    let exit = run_click_loop(loader.widget(), &mut lines, shutdown::wait_for_signal()).await?;
    info!("Click loop finished: {:?}", exit);

    Ok(())
}
