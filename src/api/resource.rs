use fake::Dummy;
use serde::Deserialize;

/// Defines task row data structure.
///
/// Rows arrive in server order and are rendered as-is; this layer never
/// reorders or filters them locally.
#[derive(Clone, Debug, Deserialize, Dummy, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    pub priority: String,
    pub title: String,
    pub assignee_name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// ISO date string (e.g. "2016-06-30"), if the task has a due date.
    #[serde(default)]
    pub due_on: Option<String>,
}

/// Defines per-tab task counts shown in the tab header.
///
#[derive(Clone, Copy, Debug, Default, Deserialize, Dummy, PartialEq, Eq)]
pub struct TabCounts {
    pub my: usize,
    pub unassigned: usize,
}
