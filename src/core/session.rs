// Per-session bookkeeping for the Act stage
//
// Nothing here persists; the summary exists so the host application can log
// or show it when the process shuts down.

use crate::core::progress::ProgressState;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// End-of-session totals
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    pub session_id: String,
    pub started_at: i64,
    pub duration_ms: i64,
    pub frames_processed: u64,
    pub total_repetitions: u32,
    pub rounds_completed: u32,
}

/// A single coaching session, created at startup and dropped at exit
#[derive(Debug, Clone)]
pub struct CoachSession {
    id: String,
    started_at: i64,
    frames_processed: u64,
}

impl CoachSession {
    pub fn new() -> Self {
        let id = Uuid::new_v4().to_string();
        log::info!("Coaching session {} started", id);

        Self {
            id,
            started_at: chrono::Utc::now().timestamp_millis(),
            frames_processed: 0,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Record one processed camera frame
    pub fn on_frame(&mut self) {
        self.frames_processed += 1;
    }

    pub fn frames_processed(&self) -> u64 {
        self.frames_processed
    }

    /// Snapshot the session totals against the current progress counters
    pub fn summary(&self, progress: &ProgressState) -> SessionSummary {
        SessionSummary {
            session_id: self.id.clone(),
            started_at: self.started_at,
            duration_ms: chrono::Utc::now().timestamp_millis() - self.started_at,
            frames_processed: self.frames_processed,
            total_repetitions: progress.total_repetitions(),
            rounds_completed: progress.round_count(),
        }
    }
}

impl Default for CoachSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_ids_unique() {
        let a = CoachSession::new();
        let b = CoachSession::new();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_frame_counter() {
        let mut session = CoachSession::new();
        for _ in 0..12 {
            session.on_frame();
        }
        assert_eq!(session.frames_processed(), 12);
    }

    #[test]
    fn test_summary_reflects_progress() {
        let mut session = CoachSession::new();
        session.on_frame();

        let mut progress = ProgressState::new(6);
        for _ in 0..7 {
            progress.register_repetition();
        }
        progress.reset();

        let summary = session.summary(&progress);
        assert_eq!(summary.session_id, session.id());
        assert_eq!(summary.frames_processed, 1);
        assert_eq!(summary.total_repetitions, 7);
        assert_eq!(summary.rounds_completed, 1);
        assert!(summary.duration_ms >= 0);
    }
}
