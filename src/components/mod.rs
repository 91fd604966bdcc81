// Export components
pub mod issue_calendar;

// Re-export the loader
pub use issue_calendar::IssueCalendarLoader;
