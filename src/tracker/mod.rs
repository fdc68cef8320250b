//! Asynchronous task tracking.
//!
//! Turns a submitted job id into a terminal Completed/Failed outcome by
//! polling the status endpoint at a fixed interval. The interval never
//! waits for an in-flight query, so responses can arrive out of order;
//! every query carries a (generation, sequence) pair and a response is
//! discarded unless its generation is current, its sequence is newer than
//! the last applied one, and the tracker is not already terminal.
//! Re-submission bumps the generation and aborts the previous poll loop.

pub mod session;
pub mod source;

pub use session::TaskSession;
pub use source::{MockStatusSource, StatusSource};

use crate::error::Result;
use crate::service::StatusResponse;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Observable state of the tracker.
#[derive(Debug, Clone, PartialEq)]
pub enum TrackerState {
    /// No job has been submitted yet.
    Idle,
    /// A job is being polled.
    Polling { progress: u8, message: String },
    /// The job finished and the session holds its results.
    Completed,
    /// The job failed or a status query could not be completed.
    Failed { message: String },
}

impl TrackerState {
    /// True once no further state changes will occur for the current job.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed { .. })
    }
}

struct Shared {
    session: Option<TaskSession>,
    generation: u64,
    last_applied_seq: u64,
}

/// Polls a status source until the tracked job reaches a terminal state.
///
/// Observers subscribe to a watch channel for state snapshots; the session
/// with the job's results is taken out after completion.
pub struct TaskTracker {
    source: Arc<dyn StatusSource>,
    interval: Duration,
    shared: Arc<Mutex<Shared>>,
    state_tx: Arc<watch::Sender<TrackerState>>,
    poll_task: Option<JoinHandle<()>>,
}

impl TaskTracker {
    /// Create an idle tracker polling `source` at `interval`.
    pub fn new(source: Arc<dyn StatusSource>, interval: Duration) -> Self {
        let (state_tx, _) = watch::channel(TrackerState::Idle);
        Self {
            source,
            interval,
            shared: Arc::new(Mutex::new(Shared {
                session: None,
                generation: 0,
                last_applied_seq: 0,
            })),
            state_tx: Arc::new(state_tx),
            poll_task: None,
        }
    }

    /// Start tracking a freshly submitted job.
    ///
    /// Any poll loop for a prior job is cancelled first; status responses
    /// still in flight for that job are discarded when they arrive.
    pub async fn submit(&mut self, session: TaskSession) {
        if let Some(task) = self.poll_task.take() {
            task.abort();
        }

        let generation = {
            let mut shared = self.shared.lock().await;
            shared.generation += 1;
            shared.last_applied_seq = 0;
            shared.session = Some(session);
            shared.generation
        };

        self.state_tx.send_replace(TrackerState::Polling {
            progress: 0,
            message: "waiting for status".to_string(),
        });

        self.poll_task = Some(tokio::spawn(poll_loop(
            Arc::clone(&self.source),
            self.interval,
            generation,
            Arc::clone(&self.shared),
            Arc::clone(&self.state_tx),
        )));
    }

    /// Current state snapshot.
    pub fn state(&self) -> TrackerState {
        self.state_tx.borrow().clone()
    }

    /// True while a job is being polled.
    pub fn is_polling(&self) -> bool {
        matches!(*self.state_tx.borrow(), TrackerState::Polling { .. })
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<TrackerState> {
        self.state_tx.subscribe()
    }

    /// Wait until the current job reaches a terminal state.
    pub async fn wait_terminal(&self) -> TrackerState {
        let mut rx = self.state_tx.subscribe();
        loop {
            let state = rx.borrow_and_update().clone();
            if state.is_terminal() {
                return state;
            }
            if rx.changed().await.is_err() {
                return self.state_tx.borrow().clone();
            }
        }
    }

    /// Take the session out of the tracker, leaving it without one.
    pub async fn take_session(&mut self) -> Option<TaskSession> {
        self.shared.lock().await.session.take()
    }

    /// Abort the poll loop without touching the published state.
    pub fn stop(&mut self) {
        if let Some(task) = self.poll_task.take() {
            task.abort();
        }
    }
}

impl Drop for TaskTracker {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn poll_loop(
    source: Arc<dyn StatusSource>,
    interval: Duration,
    generation: u64,
    shared: Arc<Mutex<Shared>>,
    state_tx: Arc<watch::Sender<TrackerState>>,
) {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut seq: u64 = 0;

    loop {
        ticker.tick().await;

        if state_tx.borrow().is_terminal() {
            break;
        }

        let task_id = {
            let shared = shared.lock().await;
            match &shared.session {
                Some(session) if shared.generation == generation => session.task_id().to_string(),
                _ => break,
            }
        };

        seq += 1;
        let source = Arc::clone(&source);
        let shared = Arc::clone(&shared);
        let state_tx = Arc::clone(&state_tx);
        // The query runs in its own task so a slow response never delays
        // the next tick; ordering is restored by the sequence guard.
        tokio::spawn(async move {
            let result = source.query(&task_id).await;
            apply_status(generation, seq, result, &shared, &state_tx).await;
        });
    }
}

async fn apply_status(
    generation: u64,
    seq: u64,
    result: Result<StatusResponse>,
    shared: &Mutex<Shared>,
    state_tx: &watch::Sender<TrackerState>,
) {
    let mut shared = shared.lock().await;
    if shared.generation != generation || seq <= shared.last_applied_seq {
        return;
    }
    if state_tx.borrow().is_terminal() {
        return;
    }
    shared.last_applied_seq = seq;

    let next = match result {
        Err(e) => TrackerState::Failed {
            message: e.to_string(),
        },
        Ok(response) => {
            let label = response.label().to_string();
            match response {
                StatusResponse::Pending { progress, message }
                | StatusResponse::Processing { progress, message } => TrackerState::Polling {
                    progress: progress.unwrap_or(0),
                    message: message.unwrap_or(label),
                },
                StatusResponse::Complete {
                    video_path,
                    subtitles,
                    ..
                } => {
                    if let Some(session) = shared.session.as_mut() {
                        session.complete(subtitles, video_path);
                    }
                    TrackerState::Completed
                }
                StatusResponse::Error { message } => TrackerState::Failed {
                    message: message.unwrap_or_else(|| "job failed".to_string()),
                },
            }
        }
    };

    state_tx.send_replace(next);
}
