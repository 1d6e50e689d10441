//! End-to-end tests for the generate pipeline.

mod common;

use ag_core::pipeline::{generate, prepare, GenerateOptions};
use ag_core::settings::{DEFAULT_HOST, DEFAULT_POLLING_INTERVAL};
use ag_core::{GenerateError, ValidationError};
use common::*;
use std::fs;

fn options(project: &TestProject) -> GenerateOptions {
    GenerateOptions {
        services: project.path("config.yaml"),
        template: project.path("config.yaml.tmpl"),
        output: project.path("out.yaml"),
    }
}

#[test]
fn test_generate_minimal() {
    let project = TestProject::new(MINIMAL_SERVICES).unwrap();

    let generated = generate(&options(&project)).expect("Pipeline should succeed");

    assert!(generated.output.is_absolute());
    assert_eq!(generated.config.services, vec!["a", "b"]);
    assert_eq!(generated.config.host, DEFAULT_HOST);
    assert_eq!(generated.config.polling_interval, DEFAULT_POLLING_INTERVAL);

    let out = fs::read_to_string(project.path("out.yaml")).unwrap();
    assert_eq!(
        out,
        "host: https://app.infisical.com\n\
         project: p1\n\
         env: prod\n\
         interval: 300s\n\
         paths:\n  a: /a\n  b: /b\n"
    );
}

#[test]
fn test_generate_full() {
    let project = TestProject::new(FULL_SERVICES).unwrap();

    let generated = generate(&options(&project)).unwrap();
    assert_eq!(generated.config.root_folder, "/team");

    let out = fs::read_to_string(project.path("out.yaml")).unwrap();
    assert!(out.contains("host: https://secrets.internal"));
    assert!(out.contains("interval: 60s"));
    assert!(out.contains("gateway: /team/gateway"));
    assert!(out.contains("billing: /team/billing"));
}

#[test]
fn test_generate_is_deterministic() {
    let project = TestProject::new(FULL_SERVICES).unwrap();

    generate(&options(&project)).unwrap();
    let first = fs::read(project.path("out.yaml")).unwrap();
    generate(&options(&project)).unwrap();
    let second = fs::read(project.path("out.yaml")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_missing_template_writes_nothing() {
    let project = TestProject::new(MINIMAL_SERVICES).unwrap();
    let opts = GenerateOptions {
        template: project.path("missing.tmpl"),
        ..options(&project)
    };

    let result = generate(&opts);

    assert!(matches!(result, Err(GenerateError::TemplateLoad { .. })));
    assert!(!project.path("out.yaml").exists());
}

#[test]
fn test_validation_runs_before_template_load() {
    let project =
        TestProject::new("project_id: \"<your-project-id>\"\nenvironment: prod\nservices: [a]\n")
            .unwrap();
    let opts = GenerateOptions {
        template: project.path("missing.tmpl"),
        ..options(&project)
    };

    let result = prepare(&opts);
    assert!(matches!(
        result,
        Err(GenerateError::Validation(ValidationError::MissingProjectId))
    ));
}

#[test]
fn test_empty_services_fails() {
    let project = TestProject::new("project_id: p1\nenvironment: prod\nservices: []\n").unwrap();

    let result = generate(&options(&project));
    assert!(matches!(
        result,
        Err(GenerateError::Validation(ValidationError::NoServices))
    ));
    assert!(!project.path("out.yaml").exists());
}

#[test]
fn test_missing_services_file() {
    let project = TestProject::new(MINIMAL_SERVICES).unwrap();
    let opts = GenerateOptions {
        services: project.root().join("services.yaml"),
        ..options(&project)
    };

    let err = generate(&opts).unwrap_err();
    assert!(matches!(err, GenerateError::Read { .. }));
    assert!(err.to_string().starts_with("failed to read config"));
}

#[test]
fn test_error_messages_name_the_stage() {
    let err = GenerateError::from(ValidationError::MissingEnvironment);
    assert_eq!(
        err.to_string(),
        "config validation failed: missing environment: set environment in the config file"
    );
}
