//! Status source seam for the task tracker.
//!
//! The tracker polls through this trait so it can be driven by the real
//! service client in the binary and by a scripted mock in tests.

use crate::error::{Result, SubwireError};
use crate::service::{ServiceClient, StatusResponse};
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// A source of task status observations.
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Query the current status of a task.
    ///
    /// # Errors
    ///
    /// Returns [`SubwireError::StatusQuery`] when the query itself cannot
    /// be completed.
    async fn query(&self, task_id: &str) -> Result<StatusResponse>;
}

#[async_trait]
impl StatusSource for ServiceClient {
    async fn query(&self, task_id: &str) -> Result<StatusResponse> {
        self.status(task_id).await
    }
}

#[derive(Debug, Clone)]
enum ScriptStep {
    Status(StatusResponse),
    Failure(String),
}

#[derive(Debug, Default)]
struct ScriptState {
    steps: VecDeque<ScriptStep>,
    last: Option<ScriptStep>,
}

/// Scripted status source for testing.
///
/// Each task id carries its own ordered script of responses. Queries pop
/// the script step by step; once a script is exhausted its final step is
/// repeated. Querying a task with no script is a query failure.
#[derive(Debug, Default)]
pub struct MockStatusSource {
    scripts: Mutex<HashMap<String, ScriptState>>,
    delay: Duration,
    calls: AtomicUsize,
}

impl MockStatusSource {
    /// Create a mock with no scripts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a status response to a task's script.
    pub fn with_step(self, task_id: &str, response: StatusResponse) -> Self {
        self.push(task_id, ScriptStep::Status(response));
        self
    }

    /// Append a transport failure to a task's script.
    pub fn with_failure(self, task_id: &str, message: &str) -> Self {
        self.push(task_id, ScriptStep::Failure(message.to_string()));
        self
    }

    /// Delay every query by `delay` before it resolves.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Number of queries issued so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn push(&self, task_id: &str, step: ScriptStep) {
        let mut scripts = self
            .scripts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        scripts
            .entry(task_id.to_string())
            .or_default()
            .steps
            .push_back(step);
    }
}

#[async_trait]
impl StatusSource for MockStatusSource {
    async fn query(&self, task_id: &str) -> Result<StatusResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let step = {
            let mut scripts = self
                .scripts
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            let state = scripts
                .get_mut(task_id)
                .ok_or_else(|| SubwireError::StatusQuery {
                    message: format!("no scripted responses for task {task_id:?}"),
                })?;
            match state.steps.pop_front() {
                Some(step) => {
                    state.last = Some(step.clone());
                    step
                }
                None => state.last.clone().ok_or_else(|| SubwireError::StatusQuery {
                    message: format!("empty script for task {task_id:?}"),
                })?,
            }
        };

        match step {
            ScriptStep::Status(response) => Ok(response),
            ScriptStep::Failure(message) => Err(SubwireError::StatusQuery { message }),
        }
    }
}
