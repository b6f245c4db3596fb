//! Loading route tables from TOML files.

use page_router::config::{load_config, ConfigError, LogFormat, ValidationError};
use page_router::history::Location;
use page_router::pages::PageRegistry;
use page_router::App;

mod common;

#[test]
fn test_custom_table_order_and_flags() {
    let path = common::write_config(
        r#"
        [observability]
        log_level = "debug"
        log_format = "json"

        [history]
        initial_path = "/result"

        [[routes]]
        path = "/"
        page = "Main"
        exact = true

        [[routes]]
        path = "/select/featured"
        page = "Result"

        [[routes]]
        path = "/Select/:name"
        page = "Select"
        case_sensitive = false
        "#,
    );

    let pages = PageRegistry::builtin();
    let config = load_config(&path, &pages).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(config.observability.log_format, LogFormat::Json);
    assert_eq!(config.history.initial_path, "/result");

    let app = App::from_config(&config, &pages).unwrap();
    assert_eq!(app.render(&Location::parse("/select/featured").unwrap()).view.page, "Result");

    let rendered = app.render(&Location::parse("/SELECT/Doge").unwrap());
    assert_eq!(rendered.view.page, "Select");
    assert_eq!(rendered.view.params.get("name"), Some("Doge"));

    assert!(!app.render(&Location::parse("/result").unwrap()).matched);
}

#[test]
fn test_rejects_unknown_page_and_empty_table() {
    let pages = PageRegistry::builtin();

    let path = common::write_config("routes = []\n");
    let err = load_config(&path, &pages).unwrap_err();
    std::fs::remove_file(&path).unwrap();
    match err {
        ConfigError::Validation(errors) => {
            assert_eq!(errors, vec![ValidationError::EmptyRouteTable]);
        }
        other => panic!("unexpected error: {other}"),
    }

    let path = common::write_config(
        r#"
        [[routes]]
        path = "/gallery"
        page = "Gallery"
        "#,
    );
    let err = load_config(&path, &pages).unwrap_err();
    std::fs::remove_file(&path).unwrap();
    assert!(matches!(
        err,
        ConfigError::Validation(ref errors) if matches!(errors[0], ValidationError::UnknownPage { .. })
    ));
}

#[test]
fn test_generator_plan_reaches_result_page() {
    let path = common::write_config(
        r#"
        [generator]
        block_length_secs = 2.0
        clip_duration_secs = 4.0

        [[generator.tracks]]
        notes = [
            { pitch = 70, start = 0.0, end = 0.5 },
            { pitch = 65, start = 0.5, end = 1.0 },
            { pitch = 74, start = 1.0, end = 2.0 },
        ]
        "#,
    );
    let config = load_config(&path, &PageRegistry::builtin()).unwrap();
    std::fs::remove_file(&path).unwrap();

    let pages = PageRegistry::for_config(&config).unwrap();
    let app = App::from_config(&config, &pages).unwrap();

    let rendered = app.render(&Location::parse("/result").unwrap());
    let plan = rendered.view.plan.expect("result page carries the plan");
    let shifts: Vec<_> = plan.segments.iter().map(|s| s.pitch_shift).collect();
    assert_eq!(shifts, vec![0, 0, -4]);
    assert_eq!(plan.segments[2].audio_stretch, 2.0);
    assert_eq!(plan.total_duration_secs, 3.5);

    assert!(app.render(&Location::parse("/").unwrap()).view.plan.is_none());
}

#[test]
fn test_rejects_unplayable_melody() {
    let path = common::write_config(
        r#"
        [generator]
        block_length_secs = 2.0
        clip_duration_secs = 4.0

        [[generator.tracks]]
        notes = [{ pitch = 70, start = 1.0, end = 1.0 }]
        "#,
    );
    let err = load_config(&path, &PageRegistry::builtin()).unwrap_err();
    std::fs::remove_file(&path).unwrap();
    assert!(matches!(
        err,
        ConfigError::Validation(ref errors) if matches!(errors[..], [ValidationError::Generator(_)])
    ));
}
