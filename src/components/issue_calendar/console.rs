use super::click::ClickOutcome;
use super::month_grid::MonthGridCalendar;
use crate::error::CalendarResult;
use std::future::Future;
use std::io::{BufRead, Write};
use std::thread;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// One line of console input, interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    Quit,
    /// Zero-based event index
    Click(usize),
    Blank,
    Invalid,
}

/// Why the click loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopExit {
    NoEvents,
    Quit,
    EndOfInput,
    Shutdown,
}

/// Parse a line typed by the user. Event numbers are one-based.
pub fn parse_command(line: &str) -> ConsoleCommand {
    let input = line.trim();
    if input.is_empty() {
        return ConsoleCommand::Blank;
    }
    if input.eq_ignore_ascii_case("q") {
        return ConsoleCommand::Quit;
    }

    match input.parse::<usize>() {
        Ok(n) if n > 0 => ConsoleCommand::Click(n - 1),
        _ => ConsoleCommand::Invalid,
    }
}

/// Read lines on a dedicated thread and forward them into a channel.
///
/// The thread is detached; a read that never returns does not keep the
/// runtime from shutting down.
pub fn spawn_line_reader<R>(reader: R) -> mpsc::Receiver<String>
where
    R: BufRead + Send + 'static,
{
    let (line_tx, line_rx) = mpsc::channel(16);

    thread::spawn(move || {
        for line in reader.lines() {
            match line {
                Ok(line) => {
                    if line_tx.blocking_send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    error!("Failed to read input: {}", e);
                    break;
                }
            }
        }
        debug!("Input reader finished");
    });

    line_rx
}

/// Activate events by number until quit, end of input, or shutdown
pub async fn run_click_loop<W, S>(
    calendar: &MonthGridCalendar<W>,
    lines: &mut mpsc::Receiver<String>,
    shutdown: S,
) -> CalendarResult<LoopExit>
where
    W: Write,
    S: Future<Output = CalendarResult<()>>,
{
    if calendar.events().is_empty() {
        return Ok(LoopExit::NoEvents);
    }

    tokio::pin!(shutdown);

    loop {
        let line = tokio::select! {
            result = &mut shutdown => {
                result?;
                return Ok(LoopExit::Shutdown);
            }
            line = lines.recv() => line,
        };

        let Some(line) = line else {
            return Ok(LoopExit::EndOfInput);
        };

        match parse_command(&line) {
            ConsoleCommand::Quit => return Ok(LoopExit::Quit),
            ConsoleCommand::Blank => {}
            ConsoleCommand::Invalid => warn!("Not an event number: {}", line.trim()),
            ConsoleCommand::Click(index) => match calendar.click(index) {
                Ok(ClickOutcome::Opened(url)) => info!("Opened {}", url),
                Ok(ClickOutcome::NoLink) => info!("Event {} has no link", index + 1),
                Err(e) => error!("{}", e),
            },
        }
    }
}
