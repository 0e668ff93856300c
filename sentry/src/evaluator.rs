//! Detection evaluation
//!
//! Pure decision function over one frame's detections. First qualifying
//! record wins in detector order; the scan short-circuits, so a later
//! higher-confidence match is never considered.

use shared::Detection;

use crate::types::EvaluationPolicy;

/// Return the first detection satisfying the policy, or `None`.
///
/// A record qualifies when its class name matches the target (case folded
/// per policy) and its confidence is present and strictly greater than the
/// threshold. A confidence exactly equal to the threshold does not qualify.
pub fn evaluate<'a>(
    detections: &'a [Detection],
    policy: &EvaluationPolicy,
) -> Option<&'a Detection> {
    detections.iter().find(|detection| {
        class_matches(&detection.class_name, policy)
            && confidence_qualifies(detection.confidence, policy.confidence_threshold)
    })
}

fn class_matches(class_name: &str, policy: &EvaluationPolicy) -> bool {
    if policy.case_insensitive {
        class_name.eq_ignore_ascii_case(&policy.target_class)
    } else {
        class_name == policy.target_class
    }
}

fn confidence_qualifies(confidence: Option<f64>, threshold: f64) -> bool {
    confidence.is_some_and(|score| score > threshold)
}
