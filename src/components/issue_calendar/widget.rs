use super::click::EventClickHandler;
use super::models::CalendarEvent;
use crate::error::{config_error, CalendarResult, Error};
use std::fmt;
use std::str::FromStr;

/// Views a calendar widget can open with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CalendarView {
    #[default]
    DayGridMonth,
    DayGridWeek,
    ListWeek,
}

impl CalendarView {
    pub fn as_str(&self) -> &'static str {
        match self {
            CalendarView::DayGridMonth => "dayGridMonth",
            CalendarView::DayGridWeek => "dayGridWeek",
            CalendarView::ListWeek => "listWeek",
        }
    }
}

impl fmt::Display for CalendarView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalendarView {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dayGridMonth" => Ok(CalendarView::DayGridMonth),
            "dayGridWeek" => Ok(CalendarView::DayGridWeek),
            "listWeek" => Ok(CalendarView::ListWeek),
            other => Err(config_error(&format!("Unknown calendar view: {}", other))),
        }
    }
}

/// Options a calendar widget is configured with
#[derive(Debug, Clone)]
pub struct CalendarOptions {
    pub initial_view: CalendarView,
    pub events: Vec<CalendarEvent>,
    pub event_click: EventClickHandler,
}

/// Calendar-rendering capability injected into the loader
pub trait CalendarWidget {
    /// Configure the widget and draw it into its region
    fn render(&mut self, options: CalendarOptions) -> CalendarResult<()>;
}
