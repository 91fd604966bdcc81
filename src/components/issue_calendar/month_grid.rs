use super::click::{ClickOutcome, EventClick};
use super::models::CalendarEvent;
use super::widget::{CalendarOptions, CalendarView, CalendarWidget};
use crate::error::{click_error, render_error, CalendarResult};
use crate::utils::time::{grid_index, grid_start, parse_event_date, GRID_COLS, GRID_ROWS};
use chrono::{Datelike, Duration, NaiveDate};
use std::fmt::{self, Write as _};
use std::io::Write;
use tracing::{debug, warn};

const WEEKDAYS: [&str; GRID_COLS] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

/// Text calendar that draws a Monday-first month grid into a writer
pub struct MonthGridCalendar<W: Write> {
    sink: W,
    focus: NaiveDate,
    options: Option<CalendarOptions>,
}

impl<W: Write> MonthGridCalendar<W> {
    /// Create a calendar showing the month of `focus`
    pub fn new(sink: W, focus: NaiveDate) -> Self {
        Self {
            sink,
            focus,
            options: None,
        }
    }

    /// Events of the last render, in render order
    pub fn events(&self) -> &[CalendarEvent] {
        self.options
            .as_ref()
            .map(|options| options.events.as_slice())
            .unwrap_or_default()
    }

    pub fn is_rendered(&self) -> bool {
        self.options.is_some()
    }

    /// Activate the event at `index` (zero based, in render order)
    pub fn click(&self, index: usize) -> CalendarResult<ClickOutcome> {
        let options = self
            .options
            .as_ref()
            .ok_or_else(|| click_error("Calendar has not been rendered"))?;

        let event = options.events.get(index).ok_or_else(|| {
            click_error(&format!(
                "No event number {} (calendar has {} events)",
                index + 1,
                options.events.len()
            ))
        })?;

        let mut click = EventClick::new(event.clone());
        options.event_click.handle(&mut click)
    }

    /// Consume the calendar and return its sink
    pub fn into_sink(self) -> W {
        self.sink
    }

    fn draw(&self, options: &CalendarOptions) -> Result<String, fmt::Error> {
        let dated: Vec<Option<NaiveDate>> = options
            .events
            .iter()
            .map(|event| {
                let date = parse_event_date(&event.start);
                if date.is_none() {
                    warn!(
                        "Event '{}' has unparseable start '{}', not placing it",
                        event.title, event.start
                    );
                }
                date
            })
            .collect();

        let mut out = String::new();
        writeln!(
            out,
            "{} ({})",
            self.focus.format("%B %Y"),
            options.initial_view
        )?;

        match options.initial_view {
            CalendarView::DayGridMonth => self.draw_rows(&mut out, &dated, 0..GRID_ROWS)?,
            CalendarView::DayGridWeek => {
                let row = grid_index(self.focus, self.focus).unwrap_or(0) / GRID_COLS;
                self.draw_rows(&mut out, &dated, row..row + 1)?
            }
            CalendarView::ListWeek => {}
        }

        draw_event_list(&mut out, &options.events, &dated)?;
        Ok(out)
    }

    fn draw_rows(
        &self,
        out: &mut String,
        dated: &[Option<NaiveDate>],
        rows: std::ops::Range<usize>,
    ) -> fmt::Result {
        let mut counts = [0usize; GRID_ROWS * GRID_COLS];
        for date in dated.iter().flatten() {
            if let Some(idx) = grid_index(self.focus, *date) {
                counts[idx] += 1;
            }
        }

        for day in WEEKDAYS {
            write!(out, " {:<5}", day)?;
        }
        out.push('\n');

        let start = grid_start(self.focus);
        for row in rows {
            for col in 0..GRID_COLS {
                let idx = row * GRID_COLS + col;
                let date = start + Duration::days(idx as i64);
                let marker = match counts[idx] {
                    0 => String::new(),
                    n => format!("*{}", n),
                };
                if date.month() == self.focus.month() {
                    write!(out, " {:>2}{:<3}", date.day(), marker)?;
                } else {
                    write!(out, "  .{:<3}", marker)?;
                }
            }
            out.push('\n');
        }

        Ok(())
    }
}

fn draw_event_list(
    out: &mut String,
    events: &[CalendarEvent],
    dated: &[Option<NaiveDate>],
) -> fmt::Result {
    if events.is_empty() {
        out.push_str("No events\n");
        return Ok(());
    }

    for (i, (event, date)) in events.iter().zip(dated).enumerate() {
        let when = match date {
            Some(date) => date.format("%Y-%m-%d").to_string(),
            None => "----------".to_string(),
        };
        write!(out, "[{}] {} {}", i + 1, when, event.title)?;
        if let Some(url) = &event.url {
            write!(out, " <{}>", url)?;
        }
        out.push('\n');
    }

    Ok(())
}

impl<W: Write> CalendarWidget for MonthGridCalendar<W> {
    fn render(&mut self, options: CalendarOptions) -> CalendarResult<()> {
        debug!(
            "Rendering {} events in {} view",
            options.events.len(),
            options.initial_view
        );

        let text = self
            .draw(&options)
            .map_err(|e| render_error(&format!("Failed to format calendar: {}", e)))?;
        self.sink
            .write_all(text.as_bytes())
            .and_then(|_| self.sink.flush())
            .map_err(|e| render_error(&format!("Failed to draw calendar: {}", e)))?;

        self.options = Some(options);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::issue_calendar::click::{EventClickHandler, LogLinkOpener};
    use crate::error::Error;
    use std::io;
    use std::sync::Arc;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn event(title: &str, start: &str, url: Option<&str>) -> CalendarEvent {
        CalendarEvent {
            title: title.to_string(),
            start: start.to_string(),
            url: url.map(str::to_string),
        }
    }

    fn options(view: CalendarView, events: Vec<CalendarEvent>) -> CalendarOptions {
        CalendarOptions {
            initial_view: view,
            events,
            event_click: EventClickHandler::new(Arc::new(LogLinkOpener)),
        }
    }

    fn rendered(calendar: MonthGridCalendar<Vec<u8>>) -> String {
        String::from_utf8(calendar.into_sink()).unwrap()
    }

    #[test]
    fn test_month_grid_places_events() {
        let mut calendar = MonthGridCalendar::new(Vec::new(), date(2024, 1, 15));
        calendar
            .render(options(
                CalendarView::DayGridMonth,
                vec![
                    event("A", "2024-01-01", Some("http://x/1")),
                    event("B", "2024-01-01T09:00:00Z", None),
                    event("C", "2024-01-20", None),
                ],
            ))
            .unwrap();

        let text = rendered(calendar);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "January 2024 (dayGridMonth)");
        // Header, weekday row, six week rows, three events
        assert_eq!(lines.len(), 1 + 1 + GRID_ROWS + 3);
        assert!(lines[2].starts_with("  1*2 "));
        assert!(lines[4].contains(" 20*1"));
        assert_eq!(lines[8], "[1] 2024-01-01 A <http://x/1>");
        assert_eq!(lines[9], "[2] 2024-01-01 B");
        assert_eq!(lines[10], "[3] 2024-01-20 C");
    }

    #[test]
    fn test_unparseable_start_is_listed_but_not_placed() {
        let mut calendar = MonthGridCalendar::new(Vec::new(), date(2024, 1, 15));
        calendar
            .render(options(
                CalendarView::DayGridMonth,
                vec![event("Someday", "whenever", None)],
            ))
            .unwrap();

        let text = rendered(calendar);
        assert!(!text.contains('*'));
        assert!(text.contains("[1] ---------- Someday"));
    }

    #[test]
    fn test_empty_render() {
        let mut calendar = MonthGridCalendar::new(Vec::new(), date(2024, 1, 15));
        calendar
            .render(options(CalendarView::DayGridMonth, Vec::new()))
            .unwrap();

        assert!(calendar.is_rendered());
        assert!(calendar.events().is_empty());
        assert!(rendered(calendar).ends_with("No events\n"));
    }

    #[test]
    fn test_week_and_list_views() {
        let mut calendar = MonthGridCalendar::new(Vec::new(), date(2024, 1, 15));
        calendar
            .render(options(
                CalendarView::DayGridWeek,
                vec![event("A", "2024-01-16", None)],
            ))
            .unwrap();
        let text = rendered(calendar);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[2].contains(" 16*1"));

        let mut calendar = MonthGridCalendar::new(Vec::new(), date(2024, 1, 15));
        calendar
            .render(options(
                CalendarView::ListWeek,
                vec![event("A", "2024-01-16", None)],
            ))
            .unwrap();
        let text = rendered(calendar);
        assert_eq!(text, "January 2024 (listWeek)\n[1] 2024-01-16 A\n");
    }

    #[test]
    fn test_draw_formats_every_view() {
        let calendar = MonthGridCalendar::new(Vec::new(), date(2024, 2, 10));
        for view in [
            CalendarView::DayGridMonth,
            CalendarView::DayGridWeek,
            CalendarView::ListWeek,
        ] {
            let text = calendar
                .draw(&options(view, vec![event("A", "2024-02-29", None)]))
                .unwrap();
            assert!(text.starts_with(&format!("February 2024 ({})\n", view)));
            assert!(text.ends_with("[1] 2024-02-29 A\n"));
        }
    }

    #[test]
    fn test_click_dispatches_to_handler() {
        let mut calendar = MonthGridCalendar::new(Vec::new(), date(2024, 1, 15));
        calendar
            .render(options(
                CalendarView::DayGridMonth,
                vec![
                    event("A", "2024-01-01", Some("http://x/1")),
                    event("B", "2024-01-02", None),
                ],
            ))
            .unwrap();

        assert_eq!(
            calendar.click(0).unwrap(),
            ClickOutcome::Opened("http://x/1".to_string())
        );
        assert_eq!(calendar.click(1).unwrap(), ClickOutcome::NoLink);
        assert!(matches!(calendar.click(2), Err(Error::Click(_))));
    }

    #[test]
    fn test_click_before_render_fails() {
        let calendar = MonthGridCalendar::new(Vec::new(), date(2024, 1, 15));
        assert!(matches!(calendar.click(0), Err(Error::Click(_))));
    }

    struct BrokenSink;

    impl Write for BrokenSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_sink_failure_is_render_error() {
        let mut calendar = MonthGridCalendar::new(BrokenSink, date(2024, 1, 15));
        let result = calendar.render(options(CalendarView::DayGridMonth, Vec::new()));

        assert!(matches!(result, Err(Error::Render(_))));
        assert!(!calendar.is_rendered());
    }
}
