use std::env;
use std::fs;

use compquad::configuration::Configuration;
use compquad::manager::managererror::ManagerError;
use compquad::math::integration::director::IntegrationDirector;
use compquad::math::integration::integrationrule::IntegrationRule;
use compquad::math::integration::integrationside::IntegrationSide;

const CONFIG: &str = r#"{
    "grids": [
        { "name": "unit201", "lower_bound": 0.0, "upper_bound": 1.0, "num_points": 201 },
        { "name": "unit9", "lower_bound": 0.0, "upper_bound": 1.0, "num_points": 9 }
    ],
    "curves": [
        { "name": "mix", "curve_type": "Composite", "components": ["s6", "c5"], "coefficients": [1.0, -1.0] },
        { "name": "s6", "curve_type": "Sine", "grid": "unit201", "amplitude": 10.0, "frequency": 6.0 },
        { "name": "c5", "curve_type": "Cosine", "grid": "unit201", "amplitude": 7.0, "frequency": 5.0 },
        { "name": "p2", "curve_type": "Polynomial", "grid": "unit9", "coefficients": [1.5, -4.0, 1.0] }
    ],
    "parallel": { "parallel_threshold": 64 }
}"#;

#[test]
fn loads_grids_curves_and_parallel_settings() {
    let config = Configuration::from_json_str(CONFIG).unwrap();
    assert_eq!(config.grid_manager().names(), vec!["unit201", "unit9"]);
    assert_eq!(config.curve_manager().names(), vec!["c5", "mix", "p2", "s6"]);
    assert_eq!(config.parallel_config().parallel_threshold, 64);

    let mix = config.curve("mix").unwrap();
    let s6 = config.curve("s6").unwrap();
    let c5 = config.curve("c5").unwrap();
    assert_eq!(mix.num_points(), 201);
    let expected = s6.analytical_integral() - c5.analytical_integral();
    assert!((mix.analytical_integral() - expected).abs() < 1e-14);
}

#[test]
fn loaded_curves_feed_the_director() {
    let config = Configuration::from_json_str(CONFIG).unwrap();
    let director = IntegrationDirector::new(vec![IntegrationRule::Simpsons], IntegrationSide::ALL.to_vec())
        .with_parallel(config.parallel_config().clone());
    let p2 = config.curve("p2").unwrap();
    let reports = director.evaluate(p2.as_ref()).unwrap();
    assert!(reports.iter().all(|report| report.within_ulps(500.0)));
}

#[test]
fn reads_configuration_file() {
    let path = env::temp_dir().join(format!("compquad-config-{}.json", std::process::id()));
    fs::write(&path, CONFIG).unwrap();
    let loaded = Configuration::from_reader(path.to_str().unwrap());
    fs::remove_file(&path).unwrap();
    let config = loaded.unwrap();
    assert_eq!(config.curve_manager().len(), 4);
}

#[test]
fn missing_references_are_reported_by_name() {
    let config = r#"{ "curves": [ { "name": "s", "curve_type": "Sine", "grid": "absent", "amplitude": 1.0, "frequency": 1.0 } ] }"#;
    match Configuration::from_json_str(config) {
        Err(ManagerError::NameNotFoundError(name)) => assert_eq!(name, "absent"),
        Err(other) => panic!("unexpected error: {}", other),
        Ok(_) => panic!("configuration should not load")
    }
}
