use enduro_game::{FailureCause, RaceConfig, RaceOutcome, RaceSession, RaceStatus, Vehicle};
use serde_json::{Value, json};

#[test]
fn race_config_serializes_every_tuning_field() {
    let value = serde_json::to_value(RaceConfig::default()).unwrap();
    let Value::Object(map) = value else {
        panic!("config should serialize to an object");
    };
    let mut keys: Vec<&str> = map.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec![
            "engine_alert_threshold",
            "engine_heat_per_lap",
            "fuel_burn_per_lap",
            "initial_engine_temp",
            "initial_fuel",
            "initial_suspension",
            "penalty_engine_heat",
            "penalty_interval",
            "penalty_suspension",
            "report_interval",
            "suspension_alert_threshold",
            "suspension_wear_per_lap",
            "total_laps",
        ]
    );
    assert_eq!(map["total_laps"], json!(100));
}

#[test]
fn partial_config_falls_back_to_defaults() {
    let cfg: RaceConfig = serde_json::from_value(json!({ "total_laps": 12 })).unwrap();
    assert_eq!(cfg.total_laps, 12);
    assert_eq!(cfg.penalty_interval, RaceConfig::default().penalty_interval);
    assert_eq!(cfg.report_interval, RaceConfig::default().report_interval);
}

#[test]
fn vehicle_without_latches_deserializes_unlatched() {
    let vehicle: Vehicle = serde_json::from_value(json!({
        "suspension": 42.0,
        "fuel": 10.5,
        "engine_temp": 99.0
    }))
    .unwrap();
    assert!(!vehicle.suspension_alert_shown);
    assert!(!vehicle.engine_alert_shown);
    assert!((vehicle.fuel - 10.5).abs() < f32::EPSILON);
}

#[test]
fn race_outcome_uses_lowercase_labels() {
    let mut session = RaceSession::new(RaceConfig::default());
    while session.tick_lap().is_some() {}
    let outcome: RaceOutcome = session.outcome().unwrap();
    assert_eq!(outcome.status, RaceStatus::Failed);

    let value = serde_json::to_value(&outcome).unwrap();
    assert_eq!(value["status"], json!("failed"));
    assert_eq!(value["cause"], json!("suspension_failure"));
    assert_eq!(value["final_lap"], json!(44));

    let back: RaceOutcome = serde_json::from_value(value).unwrap();
    assert_eq!(back.cause, Some(FailureCause::SuspensionFailure));
}
