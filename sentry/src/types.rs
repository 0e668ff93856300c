//! Sentry-specific data types

use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::Detection;

use crate::error::SentryError;

/// Decision rule applied to every detection frame, fixed at process start
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationPolicy {
    /// A detection qualifies only when its confidence is strictly greater
    pub confidence_threshold: f64,
    /// Class label that triggers actuation
    pub target_class: String,
    /// Fold ASCII case when comparing class labels
    pub case_insensitive: bool,
}

impl Default for EvaluationPolicy {
    fn default() -> Self {
        Self {
            confidence_threshold: 0.8,
            target_class: "person".to_string(),
            case_insensitive: true,
        }
    }
}

/// Outcome of a single polling cycle.
///
/// The loop controller pattern-matches on this to log and count; errors are
/// carried as a variant and never propagate across the iteration boundary.
#[derive(Debug)]
pub enum CycleOutcome {
    /// Frame contained no detections at all
    Clear,
    /// Detections were observed but none qualified
    Ignored { observed: usize },
    /// A qualifying detection was found and the buzzer command dispatched
    Alerted { detection: Detection },
    /// The cycle body failed; the loop continues with the next iteration
    Failed { error: SentryError },
}

/// Cumulative counters for one sentry run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunTotals {
    pub cycles: u32,
    pub alerts: u32,
    pub errors: u32,
}

/// Mutable state owned by the polling loop controller
#[derive(Debug)]
pub struct SentryState {
    /// 1-based index of the cycle currently running, 0 before the first
    pub iteration: u32,
    pub totals: RunTotals,
    pub started_at: Option<DateTime<Utc>>,

    // Control flags
    pub is_running: Arc<AtomicBool>,
    pub should_stop: Arc<AtomicBool>,
}

impl SentryState {
    pub fn new() -> Self {
        Self {
            iteration: 0,
            totals: RunTotals::default(),
            started_at: None,
            is_running: Arc::new(AtomicBool::new(false)),
            should_stop: Arc::new(AtomicBool::new(false)),
        }
    }
}

impl Default for SentryState {
    fn default() -> Self {
        Self::new()
    }
}
