use super::click::{EventClickHandler, LinkOpener};
use super::fetcher::IssueFetcher;
use super::models::project_events;
use super::widget::{CalendarOptions, CalendarView, CalendarWidget};
use crate::error::{CalendarResult, Error};
use std::sync::Arc;
use tracing::{error, info};

/// Render state of a loader
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderState {
    Unrendered,
    Rendered,
}

/// Fetches issues and renders them on the injected calendar widget, once
pub struct IssueCalendarLoader<F, W> {
    fetcher: F,
    widget: W,
    opener: Arc<dyn LinkOpener>,
    state: LoaderState,
}

impl<F, W> IssueCalendarLoader<F, W>
where
    F: IssueFetcher,
    W: CalendarWidget,
{
    pub fn new(fetcher: F, widget: W, opener: Arc<dyn LinkOpener>) -> Self {
        Self {
            fetcher,
            widget,
            opener,
            state: LoaderState::Unrendered,
        }
    }

    pub fn state(&self) -> LoaderState {
        self.state
    }

    pub fn widget(&self) -> &W {
        &self.widget
    }

    /// Fetch, project and render. Returns the number of rendered events.
    ///
    /// Render is only invoked after the event list is complete; a failed
    /// fetch leaves the loader unrendered and the widget untouched.
    pub async fn load(&mut self) -> CalendarResult<usize> {
        if self.state == LoaderState::Rendered {
            return Err(Error::AlreadyRendered);
        }

        let issues = match self.fetcher.fetch_issues().await {
            Ok(issues) => issues,
            Err(e) => {
                error!("Failed to load issues, calendar stays unrendered: {}", e);
                return Err(e);
            }
        };

        let events = project_events(issues);
        let count = events.len();

        let options = CalendarOptions {
            initial_view: CalendarView::DayGridMonth,
            events,
            event_click: EventClickHandler::new(Arc::clone(&self.opener)),
        };

        self.widget.render(options)?;
        self.state = LoaderState::Rendered;

        info!("Rendered calendar with {} events", count);
        Ok(count)
    }
}
