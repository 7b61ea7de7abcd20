use crate::api::Workflow;
use crate::state::State;
use anyhow::Result;
use log::*;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Specify different network event types.
///
#[derive(Debug, Clone)]
pub enum Event {
    /// Re-fetch the task list from the request derived from current state.
    FetchTasks,
    /// Re-fetch the per-tab task counts.
    FetchCounts,
    /// Claim an unassigned task, then refresh list and counts.
    Claim { id: String },
}

/// Specify struct for managing state with network events.
///
pub struct Handler<'a> {
    state: &'a Arc<Mutex<State>>,
    workflow: &'a mut Workflow,
}

impl<'a> Handler<'a> {
    /// Return new instance with reference to state.
    ///
    pub fn new(state: &'a Arc<Mutex<State>>, workflow: &'a mut Workflow) -> Self {
        Handler { state, workflow }
    }

    /// Handle network events by type.
    ///
    pub async fn handle(&mut self, event: Event) -> Result<()> {
        debug!("Processing network event '{:?}'...", event);
        match event {
            Event::FetchTasks => self.fetch_tasks().await?,
            Event::FetchCounts => self.fetch_counts().await?,
            Event::Claim { id } => self.claim(id).await?,
        }
        Ok(())
    }

    /// Update state with tasks for the request derived from current state.
    /// The request is read at service time so the latest state wins over any
    /// earlier queued fetch.
    ///
    async fn fetch_tasks(&mut self) -> Result<()> {
        let request;
        {
            let state = self.state.lock().await;
            request = state.task_list_request();
        }
        info!(
            "Fetching tasks (assigned: {}, page: {}, query: {:?})...",
            request.assigned, request.page, request.search_query
        );
        match self.workflow.task_list(&request).await {
            Ok(tasks) => {
                info!("Received {} tasks.", tasks.len());
                let mut state = self.state.lock().await;
                state.on_tasks_loaded(tasks);
                Ok(())
            }
            Err(e) => {
                error!("Failed to fetch tasks: {}", e);
                let mut state = self.state.lock().await;
                state.set_syncing(false);
                Err(e.into())
            }
        }
    }

    /// Update state with the per-tab task counts.
    ///
    async fn fetch_counts(&mut self) -> Result<()> {
        info!("Fetching tab counts...");
        let counts = self.workflow.tab_counts().await?;
        let mut state = self.state.lock().await;
        state.set_tab_counts(counts);
        info!("Received tab counts.");
        Ok(())
    }

    /// Claim a task, then refresh the task list and the tab counts.
    ///
    async fn claim(&mut self, task_id: String) -> Result<()> {
        info!("Claiming task {}...", task_id);
        self.workflow.claim(&task_id).await?;
        info!("Task {} claimed successfully.", task_id);
        self.fetch_tasks().await?;
        self.fetch_counts().await?;
        Ok(())
    }
}
