//! Polling loop integration tests
//!
//! Drive the controller against mocked detector/actuator services and pin
//! the loop's fault-isolation and actuation invariants.

mod common;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde_json::json;

use common::fixtures;
use sentry::{MockActuatorService, MockDetectorService, Sentry};

#[tokio::test]
async fn detector_polled_exactly_total_iterations() {
    let mut detector = MockDetectorService::new();
    detector
        .expect_get_detections_from_camera()
        .withf(|camera| camera == "cam")
        .times(5)
        .returning(|_| Ok(vec![]));
    let mut actuator = MockActuatorService::new();
    actuator.expect_do_command().times(0);

    let sentry = Sentry::new(fixtures::test_settings(5), detector, actuator);
    let totals = sentry.run().await.unwrap();

    assert_eq!(totals.cycles, 5);
    assert_eq!(totals.alerts, 0);
    assert_eq!(totals.errors, 0);
}

#[tokio::test]
async fn qualifying_detection_triggers_one_command_with_fixed_parameters() {
    let mut detector = MockDetectorService::new();
    detector
        .expect_get_detections_from_camera()
        .times(1)
        .returning(|_| {
            Ok(vec![
                fixtures::detection("dog", 0.9),
                fixtures::detection("person", 0.95),
            ])
        });

    // The command never varies with the detection that triggered it
    let expected = json!({
        "sound_buzzer": { "frequency": 1200.0, "duration": 1.5, "duty_cycle": 0.7 }
    });
    let mut actuator = MockActuatorService::new();
    actuator
        .expect_do_command()
        .withf(move |payload| *payload == expected)
        .times(1)
        .returning(|_| Ok(json!({})));

    let sentry = Sentry::new(fixtures::test_settings(1), detector, actuator);
    let totals = sentry.run().await.unwrap();

    assert_eq!(totals.cycles, 1);
    assert_eq!(totals.alerts, 1);
}

#[tokio::test]
async fn low_confidence_detection_does_not_trigger() {
    let mut detector = MockDetectorService::new();
    detector
        .expect_get_detections_from_camera()
        .times(1)
        .returning(|_| Ok(vec![fixtures::detection("person", 0.5)]));
    let mut actuator = MockActuatorService::new();
    actuator.expect_do_command().times(0);

    let sentry = Sentry::new(fixtures::test_settings(1), detector, actuator);
    let totals = sentry.run().await.unwrap();

    assert_eq!(totals.alerts, 0);
    assert_eq!(totals.errors, 0);
}

#[tokio::test]
async fn empty_frame_is_not_an_error() {
    let mut detector = MockDetectorService::new();
    detector
        .expect_get_detections_from_camera()
        .times(1)
        .returning(|_| Ok(vec![]));
    let mut actuator = MockActuatorService::new();
    actuator.expect_do_command().times(0);

    let sentry = Sentry::new(fixtures::test_settings(1), detector, actuator);
    let totals = sentry.run().await.unwrap();

    assert_eq!(totals.cycles, 1);
    assert_eq!(totals.errors, 0);
}

#[tokio::test]
async fn at_most_one_command_per_iteration() {
    let mut detector = MockDetectorService::new();
    detector
        .expect_get_detections_from_camera()
        .times(1)
        .returning(|_| {
            Ok(vec![
                fixtures::detection("person", 0.9),
                fixtures::detection("person", 0.99),
            ])
        });
    let mut actuator = MockActuatorService::new();
    actuator
        .expect_do_command()
        .times(1)
        .returning(|_| Ok(json!({})));

    let sentry = Sentry::new(fixtures::test_settings(1), detector, actuator);
    let totals = sentry.run().await.unwrap();

    assert_eq!(totals.alerts, 1);
}

#[tokio::test]
async fn detector_error_does_not_stop_the_loop() {
    // Cycle 3 of 5 fails; 1, 2, 4 and 5 still run their full sequence
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = calls.clone();

    let mut detector = MockDetectorService::new();
    detector
        .expect_get_detections_from_camera()
        .times(5)
        .returning(move |_| {
            let call = seen.fetch_add(1, Ordering::SeqCst) + 1;
            if call == 3 {
                Err(fixtures::vision_failure())
            } else {
                Ok(vec![fixtures::detection("person", 0.95)])
            }
        });
    let mut actuator = MockActuatorService::new();
    actuator
        .expect_do_command()
        .times(4)
        .returning(|_| Ok(json!({})));

    let sentry = Sentry::new(fixtures::test_settings(5), detector, actuator);
    let totals = sentry.run().await.unwrap();

    assert_eq!(totals.cycles, 5);
    assert_eq!(totals.alerts, 4);
    assert_eq!(totals.errors, 1);
}

#[tokio::test]
async fn actuator_error_is_isolated_to_its_cycle() {
    let mut detector = MockDetectorService::new();
    detector
        .expect_get_detections_from_camera()
        .times(3)
        .returning(|_| Ok(vec![fixtures::detection("person", 0.95)]));

    let calls = Arc::new(AtomicUsize::new(0));
    let seen = calls.clone();
    let mut actuator = MockActuatorService::new();
    actuator.expect_do_command().times(3).returning(move |_| {
        if seen.fetch_add(1, Ordering::SeqCst) == 0 {
            Err(fixtures::actuator_failure())
        } else {
            Ok(json!({}))
        }
    });

    let sentry = Sentry::new(fixtures::test_settings(3), detector, actuator);
    let totals = sentry.run().await.unwrap();

    assert_eq!(totals.cycles, 3);
    assert_eq!(totals.alerts, 2);
    assert_eq!(totals.errors, 1);
}

#[tokio::test]
async fn shutdown_request_stops_before_the_next_cycle() {
    let mut detector = MockDetectorService::new();
    detector.expect_get_detections_from_camera().times(0);
    let mut actuator = MockActuatorService::new();
    actuator.expect_do_command().times(0);

    let sentry = Sentry::new(fixtures::test_settings(100), detector, actuator);
    sentry.shutdown().await;
    let totals = sentry.run().await.unwrap();

    assert_eq!(totals.cycles, 0);
}
