//! Buzzer actuation

use serde_json::{Value, json};

use crate::error::SentryResult;
use crate::traits::ActuatorService;

/// Acoustic parameters for the alert tone.
///
/// The same alert fires regardless of which detection matched or how
/// confident it was.
#[derive(Debug, Clone, PartialEq)]
pub struct BuzzerCommand {
    /// Tone frequency in Hz
    pub frequency: f64,
    /// Tone duration in seconds
    pub duration: f64,
    /// Duty cycle in [0,1]
    pub duty_cycle: f64,
}

impl Default for BuzzerCommand {
    fn default() -> Self {
        Self {
            frequency: 1200.0,
            duration: 1.5,
            duty_cycle: 0.7,
        }
    }
}

impl BuzzerCommand {
    /// Build the command payload understood by the piezo component
    pub fn to_payload(&self) -> Value {
        json!({
            "sound_buzzer": {
                "frequency": self.frequency,
                "duration": self.duration,
                "duty_cycle": self.duty_cycle,
            }
        })
    }
}

/// Submit the buzzer command and wait for the dispatch to complete.
///
/// The component's response map is ignored. A submission failure surfaces
/// to the caller unchanged; retry is the polling loop's concern, not the
/// trigger's.
pub async fn sound<A: ActuatorService>(actuator: &A, command: &BuzzerCommand) -> SentryResult<()> {
    actuator.do_command(command.to_payload()).await?;
    Ok(())
}
