use issue_calendar::error::CalendarResult;
use tracing::info;

#[cfg(unix)]
use tokio::signal::unix::{signal, SignalKind};
#[cfg(windows)]
use tokio::signal::windows::{ctrl_break, ctrl_c};

/// Wait until the process is asked to terminate
#[cfg(unix)]
pub async fn wait_for_signal() -> CalendarResult<()> {
    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigint = signal(SignalKind::interrupt())?;

    tokio::select! {
        _ = sigterm.recv() => {
            info!("Received SIGTERM signal, shutting down");
        }
        _ = sigint.recv() => {
            info!("Received SIGINT signal, shutting down");
        }
    }

    Ok(())
}

/// Wait until the process is asked to terminate
#[cfg(windows)]
pub async fn wait_for_signal() -> CalendarResult<()> {
    let mut ctrlc = ctrl_c()?;
    let mut ctrlbreak = ctrl_break()?;

    tokio::select! {
        _ = ctrlc.recv() => {
            info!("Received Ctrl+C signal, shutting down");
        }
        _ = ctrlbreak.recv() => {
            info!("Received Ctrl+Break signal, shutting down");
        }
    }

    Ok(())
}
