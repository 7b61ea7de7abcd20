mod client;
mod error;
mod resource;

pub use error::ApiError;
pub use resource::*;

use client::Client;
use log::*;

/// The server-fetch request derived from list state. Built fresh from
/// current state on every re-fetch; never stored.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskListRequest {
    pub assigned: bool,
    pub page: usize,
    pub per_page: usize,
    pub search_query: String,
}

/// Responsible for asynchronous interaction with the workflow server API
/// including transformation of response data into explicitly-defined types.
///
pub struct Workflow {
    client: Client,
}

impl Workflow {
    /// Returns a new instance for the given access token and server URL.
    ///
    pub fn new(access_token: &str, base_url: &str) -> Workflow {
        debug!("Initializing workflow client for {}...", base_url);
        Workflow {
            client: Client::new(access_token, base_url),
        }
    }

    /// Returns the task rows matching the request. The server answers with
    /// the accumulated set for pages 1 through `page`, in display order.
    ///
    pub async fn task_list(&self, request: &TaskListRequest) -> Result<Vec<Task>, ApiError> {
        debug!(
            "Requesting tasks (assigned: {}, page: {}, query: {:?})...",
            request.assigned, request.page, request.search_query
        );

        let mut params: Vec<(&str, String)> = vec![
            ("assigned", request.assigned.to_string()),
            ("page", request.page.to_string()),
            ("per_page", request.per_page.to_string()),
        ];
        if !request.search_query.is_empty() {
            params.push(("q", request.search_query.clone()));
        }

        let tasks: Vec<Task> = self.client.get("tasks", &params).await?;
        debug!("Retrieved {} tasks.", tasks.len());
        Ok(tasks)
    }

    /// Returns the number of tasks behind each tab.
    ///
    pub async fn tab_counts(&self) -> Result<TabCounts, ApiError> {
        debug!("Requesting tab counts...");
        self.client.get("tasks/counts", &[]).await
    }

    /// Claim an unassigned task for the current user.
    ///
    pub async fn claim(&self, task_id: &str) -> Result<(), ApiError> {
        debug!("Claiming task {}...", task_id);
        self.client.post(&format!("tasks/{}/claim", task_id)).await
    }
}
