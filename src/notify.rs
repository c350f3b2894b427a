use std::sync::Mutex;
use std::sync::mpsc::{Receiver, Sender, channel};

use crate::model::results::TeamResult;

#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardUpdate {
    pub revision: u64,
    pub results: Vec<TeamResult>,
}

#[derive(Debug, Default)]
struct NotifierState {
    subscribers: Vec<Sender<LeaderboardUpdate>>,
    last: Option<Vec<TeamResult>>,
    revision: u64,
}

/// Pushes recomputed leaderboards to viewers. Unchanged rankings are not re-sent.
#[derive(Debug, Default)]
pub struct LeaderboardNotifier {
    state: Mutex<NotifierState>,
}

impl LeaderboardNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self) -> Receiver<LeaderboardUpdate> {
        let (tx, rx) = channel();
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.subscribers.push(tx);
        rx
    }

    pub fn subscriber_count(&self) -> usize {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .subscribers
            .len()
    }

    /// Returns the revision sent, or `None` when the ranking did not change.
    pub fn publish(&self, results: &[TeamResult]) -> Option<u64> {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        if state.last.as_deref() == Some(results) {
            tracing::debug!("leaderboard unchanged; not publishing");
            return None;
        }
        state.revision += 1;
        let update = LeaderboardUpdate {
            revision: state.revision,
            results: results.to_vec(),
        };
        state.subscribers.retain(|tx| tx.send(update.clone()).is_ok());
        state.last = Some(update.results);
        tracing::info!(
            revision = state.revision,
            teams = results.len(),
            subscribers = state.subscribers.len(),
            "leaderboard published"
        );
        Some(state.revision)
    }
}
