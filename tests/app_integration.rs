use fxrates::core::config::AppConfig;
use fxrates::{AppCommand, ExchangeError, ExchangeState, SharedExchange};
use std::fs;
use std::path::Path;
use tracing::info;

mod test_utils {
    use std::path::Path;

    pub fn write_config(dir: &Path) -> std::path::PathBuf {
        let config_path = dir.join("config.yaml");
        let config_content = format!(
            r#"
            base_currency: "USD"
            targets: ["EUR", "GBP", "CAD"]
            decimal_places: 2
            rates_path: "{}"
        "#,
            dir.join("data").join("rates.json").display()
        );
        std::fs::write(&config_path, config_content).expect("Failed to write config file");
        config_path
    }
}

fn load_config(dir: &Path) -> AppConfig {
    let config_path = test_utils::write_config(dir);
    AppConfig::load_from_path(config_path).expect("Failed to load config")
}

#[test_log::test]
fn test_run_command_with_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = test_utils::write_config(dir.path());

    let result = fxrates::run_command(AppCommand::Rates, Some(config_path.to_str().unwrap()));
    assert!(result.is_ok(), "run_command failed with: {:?}", result.err());
}

#[test_log::test]
fn test_set_rate_is_saved_and_reloaded() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config(dir.path());
    let rates_path = config.rates_path().unwrap();
    assert!(!rates_path.exists());

    let output = fxrates::execute(
        AppCommand::SetRate {
            code: "eur".to_string(),
            rate: 0.9,
        },
        &config,
    )
    .unwrap();
    info!(%output, "set-rate");
    assert_eq!(output, "Set EUR to 0.9");
    assert!(rates_path.exists());

    let output = fxrates::execute(
        AppCommand::Convert {
            amount: 100.0,
            from: "USD".to_string(),
            to: "EUR".to_string(),
        },
        &config,
    )
    .unwrap();
    assert!(output.contains("€90.00"), "{output}");
}

#[test_log::test]
fn test_compare_and_best_use_configured_targets() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config(dir.path());

    let output = fxrates::execute(
        AppCommand::Compare {
            amount: 100.0,
            from: None,
            targets: Vec::new(),
        },
        &config,
    )
    .unwrap();
    assert!(output.contains("€85.00"));
    assert!(output.contains("£73.00"));
    assert!(output.contains("C$125.00"));

    let output = fxrates::execute(
        AppCommand::Best {
            amount: 100.0,
            from: None,
            targets: Vec::new(),
        },
        &config,
    )
    .unwrap();
    assert!(output.contains("(CAD)"), "{output}");
}

#[test_log::test]
fn test_best_with_unknown_target_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config(dir.path());

    let err = fxrates::execute(
        AppCommand::Best {
            amount: 100.0,
            from: Some("usd".to_string()),
            targets: vec!["EUR".to_string(), "XYZ".to_string()],
        },
        &config,
    )
    .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ExchangeError>(),
        Some(ExchangeError::UnsupportedCurrency(code)) if code.as_str() == "XYZ"
    ));
}

#[test_log::test]
fn test_export_then_import_through_commands() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config(dir.path());
    let export_path = dir.path().join("export.json");

    let mut source = ExchangeState::new();
    source.set_rates([("GBP", 0.8), ("JPY", 150.0)]).unwrap();
    source.export_rates(&export_path).unwrap();

    fxrates::execute(
        AppCommand::Import {
            path: export_path.clone(),
        },
        &config,
    )
    .unwrap();

    let saved = config.rates_path().unwrap();
    let mut reloaded = ExchangeState::new();
    reloaded.import_rates(&saved).unwrap();
    assert_eq!(reloaded.all_rates(), source.all_rates());
    assert_eq!(reloaded.last_updated(), source.last_updated());

    let reexport = dir.path().join("reexport.json");
    fxrates::execute(
        AppCommand::Export {
            path: reexport.clone(),
        },
        &config,
    )
    .unwrap();
    let exported: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&reexport).unwrap()).unwrap();
    assert_eq!(exported["exchange_rates"]["GBP"], 0.8);
    assert_eq!(exported["currency_names"]["GBP"], "British Pound Sterling");
}

#[test_log::test]
fn test_import_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config(dir.path());

    let err = fxrates::execute(
        AppCommand::Import {
            path: dir.path().join("missing.json"),
        },
        &config,
    )
    .unwrap_err();
    assert!(err.to_string().contains("Failed to import rates"));
    assert!(!config.rates_path().unwrap().exists());
}

#[test_log::test]
fn test_round_trip_into_fresh_state() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rates.json");

    let shared = SharedExchange::default();
    shared
        .update(|state| state.set_rates([("EUR", 0.92), ("CHF", 0.88)]))
        .unwrap();
    shared.read(|state| state.export_rates(&path)).unwrap();

    let document: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();

    let mut fresh = ExchangeState::new();
    fresh.import_rates(&path).unwrap();

    let original = shared.snapshot();
    for (code, rate) in original.all_rates() {
        assert_eq!(fresh.rate_of(code.as_str()).unwrap(), rate);
    }
    assert_eq!(fresh.base_currency().as_str(), document["base_currency"]);
    assert_eq!(
        fresh.last_updated().to_rfc3339_opts(chrono::SecondsFormat::AutoSi, true),
        document["last_updated"].as_str().unwrap()
    );
}

#[test]
fn test_convenience_functions() {
    let state = ExchangeState::new();
    assert_eq!(fxrates::convert_currency(&state, 50.0, "USD", "EUR").unwrap(), 42.5);
    assert_eq!(fxrates::get_exchange_rate(&state, "USD", "JPY").unwrap(), 110.0);
    assert_eq!(fxrates::format_currency(&state, 1234.56, "GBP").unwrap(), "£1,234.56");
    assert_eq!(fxrates::supported_currencies(&state).len(), 20);
}
