//! Property checks of the workout formulas over generated sensor packages.

use test_data::prelude::*;
use workouts::{Workout, read_package, run};

fn generated_workouts(seed: u64, count: usize) -> Vec<(SensorPackage, Workout)> {
    PackageGenerator::new(seed)
        .packages(count)
        .into_iter()
        .map(|package| {
            let workout = read_package(&package.code, &package.args)
                .unwrap_or_else(|e| panic!("{package:?} failed: {e}"))
                .expect("generated codes are known");
            (package, workout)
        })
        .collect()
}

#[test]
fn distance_follows_step_length() {
    for (package, workout) in generated_workouts(1, 90) {
        let step_length = if package.code == "SWM" { 1.38 } else { 0.65 };
        let expected = package.args[0] * step_length / 1000.0;
        assert!((workout.distance() - expected).abs() < 1e-9);
    }
}

#[test]
fn swimming_speed_uses_pool_and_laps() {
    let swims = generated_workouts(2, 90)
        .into_iter()
        .filter(|(package, _)| package.code == "SWM");

    for (package, workout) in swims {
        let expected = package.args[3] * package.args[4] / 1000.0 / package.args[1];
        assert!((workout.mean_speed() - expected).abs() < 1e-9);
    }
}

#[test]
fn walking_calories_floor_the_speed_ratio() {
    let walks = generated_workouts(3, 90)
        .into_iter()
        .filter(|(package, _)| package.code == "WLK");

    for (package, workout) in walks {
        let (duration, weight, height) = (package.args[1], package.args[2], package.args[3]);
        let ratio = (workout.mean_speed().powi(2) / height).floor();
        let expected = (0.035 * weight + ratio * 0.029 * weight) * duration * 60.0;
        assert!((workout.calories() - expected).abs() < 1e-9);
    }
}

#[test]
fn every_report_line_has_three_decimals() {
    for (_, workout) in generated_workouts(4, 60) {
        let line = workout.info().to_string();
        for field in ["h.", "km;", "km/h;"] {
            let value = line
                .split(field)
                .next()
                .and_then(|head| head.rsplit(' ').nth(1))
                .expect("numeric field precedes its unit");
            let decimals = value.split('.').nth(1).expect("decimal point");
            assert_eq!(decimals.len(), 3, "{line}");
        }
        let calories = line
            .trim_end_matches('.')
            .rsplit(' ')
            .next()
            .expect("calories field");
        assert_eq!(calories.split('.').nth(1).map(str::len), Some(3), "{line}");
    }
}

#[test]
fn unknown_codes_are_skipped_by_driver() {
    let config = PackageGenerator::new(5)
        .with_unknown_codes(0.3)
        .config(50, ErrorPolicy::Abort);
    let unknown = config
        .packages
        .iter()
        .filter(|p| UNKNOWN_CODES.contains(&p.code.as_str()))
        .count();

    let mut out = Vec::new();
    let summary = run(&config, &mut out).expect("generated packages are valid");

    assert_eq!(summary.skipped, unknown);
    assert_eq!(summary.reported, 50 - unknown);
    assert_eq!(String::from_utf8(out).unwrap().lines().count(), 50 - unknown);
}

#[test]
fn generated_config_round_trips_through_json() {
    let config = PackageGenerator::new(6).config(9, ErrorPolicy::Skip);
    let json = serde_json::to_string(&config).unwrap();
    let parsed = DriverConfig::from_json(&json).unwrap();

    assert_eq!(parsed.on_error, ErrorPolicy::Skip);
    assert_eq!(parsed.packages.len(), config.packages.len());
    for (a, b) in parsed.packages.iter().zip(&config.packages) {
        assert_eq!(a.code, b.code);
        assert_eq!(a.args.len(), b.args.len());
        for (x, y) in a.args.iter().zip(&b.args) {
            assert!((x - y).abs() < 1e-12);
        }
    }
}
