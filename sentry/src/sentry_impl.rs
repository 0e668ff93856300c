//! Polling loop controller with dependency injection

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use chrono::Utc;
use tracing::{debug, error, info};

use crate::buzzer::{self, BuzzerCommand};
use crate::error::SentryResult;
use crate::evaluator::evaluate;
use crate::state::{SharedSentryState, create_shared_state};
use crate::traits::{ActuatorService, DetectorService};
use crate::types::{CycleOutcome, EvaluationPolicy, RunTotals, SentryState};

/// Fixed parameters for one sentry run, resolved at process start
#[derive(Debug, Clone)]
pub struct SentrySettings {
    pub camera_name: String,
    pub policy: EvaluationPolicy,
    pub command: BuzzerCommand,
    pub total_iterations: u32,
    pub poll_interval: Duration,
}

impl Default for SentrySettings {
    fn default() -> Self {
        Self {
            camera_name: String::new(),
            policy: EvaluationPolicy::default(),
            command: BuzzerCommand::default(),
            total_iterations: 100,
            poll_interval: Duration::from_secs(1),
        }
    }
}

/// Sentry with dependency injection
pub struct Sentry<D, A>
where
    D: DetectorService,
    A: ActuatorService,
{
    pub state: SharedSentryState,
    settings: SentrySettings,
    detector: D,
    actuator: A,
}

impl<D, A> Sentry<D, A>
where
    D: DetectorService,
    A: ActuatorService,
{
    /// Create new sentry instance
    pub fn new(settings: SentrySettings, detector: D, actuator: A) -> Self {
        Self {
            state: create_shared_state(SentryState::new()),
            settings,
            detector,
            actuator,
        }
    }

    /// Request a cooperative stop; honored at the next iteration boundary
    pub async fn shutdown(&self) {
        let state = self.state.read().await;
        state.should_stop.store(true, Ordering::Relaxed);
    }

    /// Stop flag handle for signal handlers
    pub async fn stop_flag(&self) -> Arc<AtomicBool> {
        let state = self.state.read().await;
        state.should_stop.clone()
    }

    /// Run the fixed-count polling loop to completion.
    ///
    /// One detection request per iteration, at most one actuation command.
    /// A failure inside the cycle body is classified, counted, and logged;
    /// it never terminates the loop. Every iteration ends with the fixed
    /// poll delay, whether or not an error occurred or an alert fired.
    pub async fn run(&self) -> SentryResult<RunTotals> {
        let started = Utc::now();
        {
            let mut state = self.state.write().await;
            state.started_at = Some(started);
            state.is_running.store(true, Ordering::Relaxed);
        }

        let total = self.settings.total_iterations;
        for index in 0..total {
            let should_stop = {
                let state = self.state.read().await;
                state.should_stop.load(Ordering::Relaxed)
            };
            if should_stop {
                info!("Shutdown requested, stopping after {} cycles", index);
                break;
            }

            {
                let mut state = self.state.write().await;
                state.iteration = index + 1;
            }
            info!("Iteration {}/{}", index + 1, total);

            let outcome = self.run_cycle().await;
            self.record_outcome(&outcome).await;

            tokio::time::sleep(self.settings.poll_interval).await;
        }

        let totals = {
            let mut state = self.state.write().await;
            state.is_running.store(false, Ordering::Relaxed);
            state.totals.clone()
        };
        let elapsed = Utc::now().signed_duration_since(started);
        info!(
            cycles = totals.cycles,
            alerts = totals.alerts,
            errors = totals.errors,
            elapsed_secs = elapsed.num_seconds(),
            "Polling loop finished"
        );
        Ok(totals)
    }

    /// Run one detect-evaluate-act cycle, classifying any failure
    async fn run_cycle(&self) -> CycleOutcome {
        match self.detect_and_alert().await {
            Ok(outcome) => outcome,
            Err(error) => CycleOutcome::Failed { error },
        }
    }

    async fn detect_and_alert(&self) -> SentryResult<CycleOutcome> {
        let detections = self
            .detector
            .get_detections_from_camera(&self.settings.camera_name)
            .await?;
        debug!("Raw detections: {:?}", detections);
        for detection in &detections {
            info!(
                class_name = %detection.class_name,
                confidence = detection.confidence,
                "Detection"
            );
        }

        match evaluate(&detections, &self.settings.policy) {
            Some(matched) => {
                info!(
                    class_name = %matched.class_name,
                    confidence = matched.confidence,
                    "Target detected, activating buzzer"
                );
                let detection = matched.clone();
                buzzer::sound(&self.actuator, &self.settings.command).await?;
                Ok(CycleOutcome::Alerted { detection })
            }
            None if detections.is_empty() => Ok(CycleOutcome::Clear),
            None => Ok(CycleOutcome::Ignored {
                observed: detections.len(),
            }),
        }
    }

    async fn record_outcome(&self, outcome: &CycleOutcome) {
        let mut state = self.state.write().await;
        state.totals.cycles += 1;
        match outcome {
            CycleOutcome::Clear => {
                info!("No {} detected", self.settings.policy.target_class);
            }
            CycleOutcome::Ignored { observed } => {
                info!(observed = *observed, "No qualifying detection");
            }
            CycleOutcome::Alerted { .. } => {
                state.totals.alerts += 1;
            }
            CycleOutcome::Failed { error } => {
                state.totals.errors += 1;
                error!("Error during loop iteration: {}", error);
            }
        }
    }
}
