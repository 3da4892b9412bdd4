/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: LicenseRef-NvidiaProprietary
 *
 * NVIDIA CORPORATION, its affiliates and licensors retain all intellectual
 * property and proprietary rights in and to this material, related
 * documentation and any modifications thereto. Any use, reproduction,
 * disclosure or distribution of this material and related documentation
 * without an express license agreement from NVIDIA CORPORATION or
 * its affiliates is strictly prohibited.
 */

// The intent of the tests.rs file is to test the integrity of the
// command, including things like basic structure parsing, enum
// translations, and any external input validators that are
// configured. Specific "categories" are:
//
// Command Structure - Baseline debug_assert() of the entire command.
// Argument Parsing  - Ensure required/optional arg combinations parse correctly.
// Execution         - Run the command against a mocked management client.

use std::path::PathBuf;

use ::ucp::cli::{OutputFormat, RadCliError};
use ::ucp::models::ApplicationResource;
use ::ucp::{MockManagementClient, UcpError};
use clap::{CommandFactory, Parser};

use super::args::*;
use crate::config::{self, ConfigFile};
use crate::prompt::MockPrompter;
use crate::test_support::{TEST_ENVIRONMENT, TestContext, config_with, test_workspace};

const APP_ID: &str =
    "/planes/radius/local/resourceGroups/test-group/providers/Applications.Core/applications/test-app";

// verify_cmd_structure runs a baseline clap debug_assert()
// to do basic command configuration checking and validation,
// ensuring things like unique argument definitions, group
// configurations, argument references, etc. Things that would
// otherwise be missed until runtime.
#[test]
fn verify_cmd_structure() {
    Cmd::command().debug_assert();
}

/////////////////////////////////////////////////////////////////////////////
// Argument Parsing
//
// This section contains tests specific to argument parsing,
// including testing required arguments, as well as optional
// flag-specific checking.

// parse_create_with_environment ensures create takes -e.
#[test]
fn parse_create_with_environment() {
    let cmd = Cmd::try_parse_from(["app", "create", "test-app", "-e", "prod"])
        .expect("should parse create");

    match cmd {
        Cmd::Create(args) => {
            assert_eq!(args.application.name.as_deref(), Some("test-app"));
            assert_eq!(args.environment.as_deref(), Some("prod"));
        }
        _ => panic!("expected Create variant"),
    }
}

// parse_delete_rejects_two_positionals ensures delete takes one name.
#[test]
fn parse_delete_rejects_two_positionals() {
    let result = Cmd::try_parse_from(["app", "delete", "a", "b"]);
    assert!(result.is_err(), "should fail with two names");
}

/////////////////////////////////////////////////////////////////////////////
// Execution

#[tokio::test]
async fn create_in_workspace_environment() {
    // set up
    let mut client = MockManagementClient::new();
    client
        .expect_create_or_update_application()
        .withf(|id, app| id == APP_ID && app.properties.environment == TEST_ENVIRONMENT)
        .times(1)
        .returning(|_, _| Ok(()));

    // execute
    let run = TestContext::new(client)
        .run(Cmd::try_parse_from(["app", "create", "test-app"]).expect("should parse"))
        .await;

    // verify
    run.result.expect("create should succeed");
    assert_eq!(run.output, "Application test-app created\n");
}

#[tokio::test]
async fn create_rejects_bicep_file() {
    let run = TestContext::new(MockManagementClient::new())
        .run(Cmd::try_parse_from(["app", "create", "app.bicep"]).expect("should parse"))
        .await;

    assert_eq!(
        run.result.expect_err("file name").to_string(),
        "'app.bicep' is a file name, not an application name. Pass the application name instead"
    );
}

#[tokio::test]
async fn show_uses_flag() {
    let mut client = MockManagementClient::new();
    client
        .expect_get_application()
        .withf(|id| id == APP_ID)
        .times(1)
        .returning(|_| {
            Ok(ApplicationResource {
                name: Some("test-app".to_string()),
                id: Some(APP_ID.to_string()),
                ..Default::default()
            })
        });

    let run = TestContext::new(client)
        .with_format(OutputFormat::Json)
        .run(Cmd::try_parse_from(["app", "show", "-a", "test-app"]).expect("should parse"))
        .await;

    run.result.expect("show should succeed");
    let parsed: serde_json::Value = serde_json::from_str(&run.output).expect("valid json");
    assert_eq!(parsed["id"], APP_ID);
}

#[tokio::test]
async fn show_without_name_or_default() {
    let run = TestContext::new(MockManagementClient::new())
        .run(Cmd::try_parse_from(["app", "show"]).expect("should parse"))
        .await;

    assert!(
        run.result
            .expect_err("no application")
            .to_string()
            .starts_with("no application name provided and no default application set")
    );
}

fn config_file(config: &ConfigFile) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, serde_yaml::to_string(config).expect("serialize"))
        .expect("write config");
    (dir, path)
}

#[tokio::test]
async fn switch_sets_default_application() {
    let config = config_with(test_workspace());
    let (_dir, path) = config_file(&config);
    let mut client = MockManagementClient::new();
    client
        .expect_get_application()
        .withf(|name| name == "todo")
        .returning(|_| Ok(ApplicationResource::default()));

    let run = TestContext::new(client)
        .with_config(path.clone(), config)
        .run(Cmd::try_parse_from(["app", "switch", "todo"]).expect("should parse"))
        .await;

    run.result.expect("switch should succeed");
    assert_eq!(run.output, "Switching default application to todo\n");
    let saved = config::load(&path).expect("config written");
    assert_eq!(
        saved.workspaces.items["test"].default_application.as_deref(),
        Some("todo")
    );
}

#[tokio::test]
async fn switch_to_missing_application() {
    let mut client = MockManagementClient::new();
    client
        .expect_get_application()
        .returning(|_| Err(UcpError::not_found("nope")));

    let run = TestContext::new(client)
        .run(Cmd::try_parse_from(["app", "switch", "ghost"]).expect("should parse"))
        .await;

    assert_eq!(
        run.result.expect_err("missing").to_string(),
        "Unable to switch applications as the requested application ghost does not exist."
    );
}

#[tokio::test]
async fn delete_prompts_with_environment() {
    // set up
    let mut prompter = MockPrompter::new();
    prompter
        .expect_confirm()
        .withf(|message| {
            message == "Are you sure you want to delete application 'test-app' from environment 'test-env'?"
        })
        .times(1)
        .returning(|_| Ok(true));
    let mut client = MockManagementClient::new();
    client
        .expect_delete_application()
        .withf(|id| id == APP_ID)
        .times(1)
        .returning(|_| Ok(true));

    // execute
    let run = TestContext::new(client)
        .with_prompter(prompter)
        .run(Cmd::try_parse_from(["app", "delete", "test-app"]).expect("should parse"))
        .await;

    // verify
    run.result.expect("delete should succeed");
    assert_eq!(run.output, "Application test-app deleted\n");
}

#[tokio::test]
async fn delete_declined_prints_nothing() {
    let mut prompter = MockPrompter::new();
    prompter.expect_confirm().returning(|_| Ok(false));
    let mut client = MockManagementClient::new();
    client.expect_delete_application().never();

    let run = TestContext::new(client)
        .with_prompter(prompter)
        .run(Cmd::try_parse_from(["app", "delete", "test-app"]).expect("should parse"))
        .await;

    run.result.expect("declining is not an error");
    assert!(run.output.is_empty());
}

#[tokio::test]
async fn delete_missing_application() {
    let mut client = MockManagementClient::new();
    client
        .expect_delete_application()
        .returning(|_| Ok(false));

    let run = TestContext::new(client)
        .run(Cmd::try_parse_from(["app", "delete", "test-app", "-y"]).expect("should parse"))
        .await;

    run.result.expect("missing application is not an error");
    assert_eq!(
        run.output,
        "Application 'test-app' does not exist or has already been deleted.\n"
    );
}

#[tokio::test]
async fn interrupted_prompt_exits_quietly() {
    let mut prompter = MockPrompter::new();
    prompter
        .expect_confirm()
        .returning(|_| Err(RadCliError::ExitConsole));

    let run = TestContext::new(MockManagementClient::new())
        .with_prompter(prompter)
        .run(Cmd::try_parse_from(["app", "delete", "test-app"]).expect("should parse"))
        .await;

    assert!(matches!(
        run.result,
        Err(RadCliError::ExitConsole)
    ));
    assert!(run.output.is_empty());
}

