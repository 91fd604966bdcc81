mod click;
mod console;
mod fetcher;
mod loader;
pub mod models;
mod month_grid;
mod widget;

pub use click::{
    BrowserLinkOpener, ClickOutcome, EventClick, EventClickHandler, LinkOpener, LogLinkOpener,
};
pub use console::{parse_command, run_click_loop, spawn_line_reader, ConsoleCommand, LoopExit};
pub use fetcher::{HttpIssueFetcher, IssueFetcher, ISSUES_PATH};
pub use loader::{IssueCalendarLoader, LoaderState};
pub use models::{project_events, CalendarEvent, Issue};
pub use month_grid::MonthGridCalendar;
pub use widget::{CalendarOptions, CalendarView, CalendarWidget};
