use super::models::CalendarEvent;
use crate::error::{CalendarResult, Error};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};
use webbrowser::Browser;

/// Opens a URL in a new browsing context
pub trait LinkOpener: Send + Sync {
    fn open_in_new_context(&self, url: &str) -> CalendarResult<()>;
}

/// Opens links in a new tab of the system default browser
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserLinkOpener;

impl LinkOpener for BrowserLinkOpener {
    fn open_in_new_context(&self, url: &str) -> CalendarResult<()> {
        info!("Opening {} in browser", url);
        webbrowser::open_browser(Browser::Default, url).map_err(|source| Error::Browser {
            url: url.to_string(),
            source,
        })
    }
}

/// Only logs links, for headless runs
#[derive(Debug, Default, Clone, Copy)]
pub struct LogLinkOpener;

impl LinkOpener for LogLinkOpener {
    fn open_in_new_context(&self, url: &str) -> CalendarResult<()> {
        info!("Link opening disabled, not opening {}", url);
        Ok(())
    }
}

/// Click info passed to the event click handler
#[derive(Debug, Clone)]
pub struct EventClick {
    pub event: CalendarEvent,
    default_prevented: bool,
}

impl EventClick {
    pub fn new(event: CalendarEvent) -> Self {
        Self {
            event,
            default_prevented: false,
        }
    }

    /// Suppress the widget's own navigation for this click
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// What a click resulted in
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    Opened(String),
    NoLink,
}

/// Handler invoked when a rendered event is activated
#[derive(Clone)]
pub struct EventClickHandler {
    opener: Arc<dyn LinkOpener>,
}

impl fmt::Debug for EventClickHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventClickHandler").finish_non_exhaustive()
    }
}

impl EventClickHandler {
    pub fn new(opener: Arc<dyn LinkOpener>) -> Self {
        Self { opener }
    }

    /// Suppress the default action, then open the event link if it has one
    pub fn handle(&self, click: &mut EventClick) -> CalendarResult<ClickOutcome> {
        click.prevent_default();

        match &click.event.url {
            Some(url) => {
                self.opener.open_in_new_context(url)?;
                Ok(ClickOutcome::Opened(url.clone()))
            }
            None => {
                debug!("Event '{}' has no link", click.event.title);
                Ok(ClickOutcome::NoLink)
            }
        }
    }
}
