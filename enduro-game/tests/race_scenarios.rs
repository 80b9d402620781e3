use enduro_game::{
    AlertKind, FailureCause, RaceConfig, RaceSession, RaceStatus, Vehicle, check_alerts,
    run_race, write_final_report, write_status_report,
};

const DEFAULT_TRANSCRIPT: &str = include_str!("fixtures/default_race.txt");

fn transcript(session: &mut RaceSession) -> (String, enduro_game::RaceOutcome) {
    let mut buf = Vec::new();
    let outcome = session.run(&mut buf).unwrap();
    (String::from_utf8(buf).unwrap(), outcome)
}

#[test]
fn default_race_transcript_is_stable() {
    let mut buf = Vec::new();
    let outcome = run_race(&RaceConfig::default(), &mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();

    assert_eq!(text, DEFAULT_TRANSCRIPT);
    assert_eq!(outcome.status, RaceStatus::Failed);
    assert_eq!(outcome.final_lap, 44);
    assert_eq!(outcome.cause, Some(FailureCause::SuspensionFailure));
}

#[test]
fn each_alert_prints_at_most_once() {
    let mut buf = Vec::new();
    run_race(&RaceConfig::default(), &mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert_eq!(text.matches("Critical suspension level").count(), 1);
    assert_eq!(text.matches("Excessive engine temperature").count(), 1);
}

#[test]
fn pure_wear_over_full_distance() {
    // Arithmetic only: wear plus penalties for all 100 laps, no failure check.
    let cfg = RaceConfig::default();
    let mut vehicle = Vehicle::new(&cfg);
    for lap in 1..=cfg.total_laps {
        vehicle.run_lap(&cfg);
        if cfg.is_penalty_lap(lap) {
            vehicle.apply_penalty(&cfg);
        }
    }
    assert!((vehicle.suspension + 130.0).abs() < 1e-3);
    assert!((vehicle.fuel + 50.0).abs() < 1e-3);
    assert!((vehicle.engine_temp - 230.0).abs() < 1e-9);

    let mut buf = Vec::new();
    write_final_report(&mut buf, &vehicle, cfg.total_laps, true, &cfg).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert!(text.contains("The vehicle completed all 100 laps."));
    assert!(text.contains("Suspension...: 0.00%"));
    assert!(text.contains("Fuel.........: 0.00%"));
    assert!(text.contains("Engine.......: 230.00°C"));
}

#[test]
fn simultaneous_depletion_reports_suspension() {
    let vehicle = Vehicle {
        suspension: 1.0,
        fuel: 1.0,
        ..Vehicle::default()
    };
    let mut session = RaceSession::from_vehicle(RaceConfig::default(), vehicle);
    let (text, outcome) = transcript(&mut session);

    assert!(outcome.vehicle.suspension <= 0.0);
    assert!(outcome.vehicle.fuel <= 0.0);
    assert_eq!(outcome.cause, Some(FailureCause::SuspensionFailure));
    assert!(text.contains("CRITICAL FAILURE ON LAP 1!"));
    assert!(text.contains("Cause: Total suspension failure."));
    assert!(!text.contains("Fuel exhaustion"));
}

#[test]
fn alert_precedes_final_report_on_failing_lap() {
    let vehicle = Vehicle {
        suspension: 21.0,
        ..Vehicle::default()
    };
    let config = RaceConfig {
        suspension_wear_per_lap: 25.0,
        ..RaceConfig::default()
    };
    let mut session = RaceSession::from_vehicle(config, vehicle);
    let (text, outcome) = transcript(&mut session);

    assert_eq!(outcome.final_lap, 1);
    let alert = text
        .find("!!! ALERT: Critical suspension level (-4.0%) !!!")
        .expect("suspension alert printed");
    let banner = text.find("### END OF SIMULATION ###").unwrap();
    assert!(alert < banner);
}

#[test]
fn failing_report_lap_prints_interim_report_first() {
    let vehicle = Vehicle {
        fuel: 30.0,
        ..Vehicle::default()
    };
    let mut session = RaceSession::from_vehicle(RaceConfig::default(), vehicle);
    let (text, outcome) = transcript(&mut session);

    assert_eq!(outcome.final_lap, 20);
    assert_eq!(outcome.cause, Some(FailureCause::FuelExhausted));
    assert_eq!(text.matches("--- LAP 20 REPORT ---").count(), 2);
    let interim = text.find("--- LAP 20 REPORT ---").unwrap();
    let banner = text.find("### END OF SIMULATION ###").unwrap();
    assert!(interim < banner);
}

#[test]
fn status_report_renders_identically_twice() {
    let vehicle = Vehicle {
        suspension: -7.0,
        fuel: 12.5,
        engine_temp: 131.0,
        ..Vehicle::default()
    };
    let mut first = Vec::new();
    let mut second = Vec::new();
    write_status_report(&mut first, &vehicle, 33).unwrap();
    write_status_report(&mut second, &vehicle, 33).unwrap();
    assert_eq!(first, second);
    assert!((vehicle.suspension + 7.0).abs() < f32::EPSILON);
}

#[test]
fn latched_alerts_stay_latched_across_laps() {
    let cfg = RaceConfig::default();
    let mut vehicle = Vehicle::new(&cfg);
    let mut counts = [0_u32; 2];
    for lap in 1..=cfg.total_laps {
        vehicle.run_lap(&cfg);
        if cfg.is_penalty_lap(lap) {
            vehicle.apply_penalty(&cfg);
        }
        for alert in check_alerts(&mut vehicle, &cfg) {
            match alert.kind {
                AlertKind::Suspension => counts[0] += 1,
                AlertKind::EngineTemp => counts[1] += 1,
            }
        }
    }
    assert_eq!(counts, [1, 1]);
    assert!(vehicle.suspension_alert_shown);
    assert!(vehicle.engine_alert_shown);
}
