use serde::{Deserialize, Serialize};

/// Issue record as served by the issue endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub title: String,
    pub start: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// Calendar-facing projection of an issue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CalendarEvent {
    pub title: String,
    pub start: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl From<Issue> for CalendarEvent {
    fn from(issue: Issue) -> Self {
        Self {
            title: issue.title,
            start: issue.start,
            url: issue.url,
        }
    }
}

/// Project issues into calendar events, keeping length and order
pub fn project_events(issues: Vec<Issue>) -> Vec<CalendarEvent> {
    issues.into_iter().map(CalendarEvent::from).collect()
}
