use std::sync::Arc;
use std::thread;

use stridecalc_core::{
    ActivityKind, Biometrics, CalcConfig, StepLengthPolicy, TrainingError, TrainingInfoService,
};

#[test]
fn running_summary_is_fully_populated() {
    let svc = TrainingInfoService::default();
    let s = svc.compute("10000,Running,1h0m", 75.0, 1.8).unwrap();

    assert_eq!(s.kind, ActivityKind::Running);
    assert_eq!(s.steps, 10000);
    assert_eq!(s.duration_hours, 1.0);
    assert!((s.step_length_m - 0.81).abs() < 1e-12);
    assert!((s.distance_km - 8.1).abs() < 1e-9);
    assert!((s.speed_kmh - 8.1).abs() < 1e-9);
    assert!((s.calories - 9435.0).abs() < 1e-6);
}

#[test]
fn daily_steps_record_is_walking() {
    let svc = TrainingInfoService::default();
    let s = svc.compute("1000,0h30m", 70.0, 1.75).unwrap();
    assert_eq!(s.kind, ActivityKind::Walking);
    assert!(s.calories > 0.0);
}

#[test]
fn day_steps_semantics_use_fixed_step_length() {
    let svc = TrainingInfoService::default();
    let s = svc.compute_day_steps("1000,0h30m", 70.0, 1.75).unwrap();
    assert_eq!(s.step_length_m, 0.65);
    assert_eq!(s.distance_km, 0.65);
    assert!((s.speed_kmh - 1.3).abs() < 1e-12);
}

#[test]
fn parser_errors_propagate_unchanged() {
    let svc = TrainingInfoService::default();
    assert!(matches!(svc.compute("1000", 70.0, 1.75), Err(TrainingError::MalformedInput { .. })));
    assert!(matches!(svc.compute("-5,0h30m", 70.0, 1.75), Err(TrainingError::InvalidSteps(_))));
    assert!(matches!(svc.compute("1000,0h0m", 70.0, 1.75), Err(TrainingError::InvalidDuration(_))));
}

#[test]
fn unsupported_activity_is_an_error() {
    let svc = TrainingInfoService::default();
    let err = svc.compute("1000,Swimming,0h30m", 70.0, 1.75).unwrap_err();
    assert_eq!(err, TrainingError::UnsupportedActivity("Swimming".to_string()));

    // running-style biometrics (no height) are enough to reach the label check
    let err = svc.compute("1000,Swimming,0h30m", 70.0, 0.0).unwrap_err();
    assert!(matches!(err, TrainingError::UnsupportedActivity(_)));
}

#[test]
fn biometrics_are_checked_before_activity_kind() {
    let svc = TrainingInfoService::default();
    for (w, h) in [(-1.0, 1.75), (0.0, 1.75), (70.0, -1.75)] {
        let err = svc.compute("1000,Swimming,0h30m", w, h).unwrap_err();
        assert!(
            matches!(err, TrainingError::InvalidBiometrics(_)),
            "weight={w} height={h}: got {err:?}"
        );
    }
}

#[test]
fn invalid_biometrics_are_rejected() {
    let svc = TrainingInfoService::default();
    for (w, h) in [(0.0, 1.75), (-70.0, 1.75), (f64::NAN, 1.75), (70.0, -1.75)] {
        assert!(
            matches!(svc.compute("1000,Running,0h30m", w, h), Err(TrainingError::InvalidBiometrics(_))),
            "weight={w} height={h}"
        );
    }
}

#[test]
fn walking_needs_height_running_does_not() {
    let svc = TrainingInfoService::default();
    assert!(matches!(
        svc.compute("1000,Walking,0h30m", 70.0, 0.0),
        Err(TrainingError::InvalidBiometrics(_))
    ));

    let s = svc.compute("8000,Running,0h45m", 60.0, 0.0).unwrap();
    assert_eq!(s.step_length_m, 0.65);
    assert!((s.calories - 6288.0).abs() < 1e-6);
}

#[test]
fn height_derived_policy_requires_height_for_running() {
    let svc = TrainingInfoService::new(CalcConfig {
        step_length_policy: StepLengthPolicy::HeightDerived,
        ..Default::default()
    });
    assert!(matches!(
        svc.compute("8000,Running,0h45m", 60.0, 0.0),
        Err(TrainingError::InvalidBiometrics(_))
    ));
}

#[test]
fn slow_running_is_clamped_not_negative() {
    let svc = TrainingInfoService::default();
    let s = svc.compute("100,Running,1h0m", 70.0, 0.0).unwrap();
    assert_eq!(s.calories, 0.0);
    assert!(s.distance_km >= 0.0 && s.speed_kmh >= 0.0);
}

#[test]
fn compute_with_typed_biometrics_matches_compute() {
    let svc = TrainingInfoService::default();
    let a = svc.compute("6000,Walking,1h0m", 70.0, 1.75).unwrap();
    let b = svc
        .compute_with("6000,Walking,1h0m", &Biometrics::new(70.0, Some(1.75)))
        .unwrap();
    assert_eq!(a, b);
}

#[test]
fn repeated_calls_are_bit_identical() {
    let svc = TrainingInfoService::default();
    let first = svc.compute("12345,Walking,2h15m", 90.5, 1.92).unwrap();
    for _ in 0..10 {
        let again = svc.compute("12345,Walking,2h15m", 90.5, 1.92).unwrap();
        assert_eq!(first.calories.to_bits(), again.calories.to_bits());
        assert_eq!(first, again);
    }
}

#[test]
fn service_is_shareable_across_threads() {
    let svc = Arc::new(TrainingInfoService::default());
    let expected = svc.compute("6000,Running,0h40m", 72.0, 1.8).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let svc = Arc::clone(&svc);
            thread::spawn(move || svc.compute("6000,Running,0h40m", 72.0, 1.8).unwrap())
        })
        .collect();

    for h in handles {
        assert_eq!(h.join().unwrap(), expected);
    }
}

#[test]
fn summary_serializes_to_json() {
    let svc = TrainingInfoService::default();
    let s = svc.compute("1000,Running,0h30m", 70.0, 1.75).unwrap();
    let v = serde_json::to_value(&s).unwrap();
    assert_eq!(v["kind"], "Running");
    assert_eq!(v["steps"], 1000);
    assert!(v["distance_km"].as_f64().unwrap() > 0.0);
}
