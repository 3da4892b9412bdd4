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

use std::collections::BTreeMap;

use ::ucp::models::{EnvironmentResource, RecipeGetMetadataResponse, RecipeProperties};
use ::ucp::{MockManagementClient, UcpError};
use clap::{CommandFactory, Parser};
use serde_json::json;

use super::args::*;
use crate::test_support::{TEST_ENVIRONMENT, TestContext};

const MONGO: &str = "Applications.Datastores/mongoDatabases";

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

// parse_register_full ensures every register flag lands in its field.
#[test]
fn parse_register_full() {
    let cmd = Cmd::try_parse_from([
        "recipe",
        "register",
        "cosmos",
        "--template-kind",
        "terraform",
        "--template-path",
        "registry/module",
        "--template-version",
        "1.1.0",
        "--resource-type",
        MONGO,
        "--parameters",
        "a=b",
        "-p",
        "c=d",
        "--plain-http",
        "-e",
        "prod",
    ])
    .expect("should parse register");

    match cmd {
        Cmd::Register(args) => {
            assert_eq!(args.name.as_deref(), Some("cosmos"));
            assert_eq!(args.template_kind, "terraform");
            assert_eq!(args.template_version.as_deref(), Some("1.1.0"));
            assert_eq!(args.parameters, vec!["a=b", "c=d"]);
            assert!(args.plain_http);
            assert_eq!(args.target.environment.as_deref(), Some("prod"));
        }
        _ => panic!("expected Register variant"),
    }
}

// parse_register_requires_template ensures kind, path and type are required.
#[test]
fn parse_register_requires_template() {
    let missing_kind = Cmd::try_parse_from([
        "recipe", "register", "r", "--template-path", "p", "--resource-type", MONGO,
    ]);
    assert!(missing_kind.is_err(), "should fail without --template-kind");

    let missing_path = Cmd::try_parse_from([
        "recipe", "register", "r", "--template-kind", "bicep", "--resource-type", MONGO,
    ]);
    assert!(missing_path.is_err(), "should fail without --template-path");

    let missing_type = Cmd::try_parse_from([
        "recipe", "register", "r", "--template-kind", "bicep", "--template-path", "p",
    ]);
    assert!(missing_type.is_err(), "should fail without --resource-type");
}

// parse_register_rejects_unknown_kind ensures only bicep and terraform parse.
#[test]
fn parse_register_rejects_unknown_kind() {
    let result = Cmd::try_parse_from([
        "recipe", "register", "r", "--template-kind", "helm", "--template-path", "p",
        "--resource-type", MONGO,
    ]);
    assert!(result.is_err(), "should fail with unknown kind");
}

// parse_unregister_rejects_extra_args ensures only one name is accepted.
#[test]
fn parse_unregister_rejects_extra_args() {
    let result =
        Cmd::try_parse_from(["recipe", "unregister", "foo", "bar", "--resource-type", MONGO]);
    assert!(result.is_err(), "should fail with two names");
}

/////////////////////////////////////////////////////////////////////////////
// Execution

fn environment_with(recipes: &[(&str, &str, &str)]) -> EnvironmentResource {
    let mut environment = EnvironmentResource {
        id: Some(TEST_ENVIRONMENT.to_string()),
        name: Some("test-env".to_string()),
        ..Default::default()
    };
    for (resource_type, name, path) in recipes {
        environment
            .properties
            .recipes
            .entry(resource_type.to_string())
            .or_default()
            .insert(
                name.to_string(),
                RecipeProperties {
                    template_kind: "bicep".to_string(),
                    template_path: path.to_string(),
                    ..Default::default()
                },
            );
    }
    environment
}

#[tokio::test]
async fn list_flattens_recipes() {
    let mut client = MockManagementClient::new();
    client
        .expect_get_environment()
        .withf(|id| id == TEST_ENVIRONMENT)
        .returning(|_| {
            Ok(environment_with(&[
                (MONGO, "cosmos", "registry/mongo:v1"),
                ("Applications.Datastores/redisCaches", "default", "registry/redis:v1"),
            ]))
        });

    let run = TestContext::new(client)
        .with_format(::ucp::cli::OutputFormat::Json)
        .run(Cmd::try_parse_from(["recipe", "list"]).expect("should parse"))
        .await;

    run.result.expect("list should succeed");
    let rows: serde_json::Value = serde_json::from_str(&run.output).expect("json output");
    assert_eq!(rows.as_array().map(Vec::len), Some(2));
    assert_eq!(rows[0]["name"], "cosmos");
    assert_eq!(rows[0]["resourceType"], MONGO);
    assert_eq!(rows[1]["templatePath"], "registry/redis:v1");
}

#[tokio::test]
async fn show_prints_recipe_and_parameters() {
    // set up
    let mut client = MockManagementClient::new();
    client
        .expect_get_recipe_metadata()
        .withf(|env, request| {
            env == TEST_ENVIRONMENT && request.name == "default" && request.resource_type == MONGO
        })
        .times(1)
        .returning(|_, _| {
            Ok(RecipeGetMetadataResponse {
                template_kind: "bicep".to_string(),
                template_path: "registry/mongo:v1".to_string(),
                parameters: json!({
                    "location": {"type": "string", "defaultValue": "null"},
                    "size": {"type": "float64", "maxValue": 800.0}
                })
                .as_object()
                .cloned()
                .unwrap_or_default(),
                ..Default::default()
            })
        });
    client.expect_get_environment().times(1).returning(|_| {
        let mut environment = environment_with(&[(MONGO, "default", "registry/mongo:v1")]);
        if let Some(recipe) = environment
            .properties
            .recipes
            .get_mut(MONGO)
            .and_then(|r| r.get_mut("default"))
        {
            recipe.parameters = json!({"location": "eastus"}).as_object().cloned();
        }
        Ok(environment)
    });

    // execute
    let run = TestContext::new(client)
        .run(
            Cmd::try_parse_from(["recipe", "show", "default", "--resource-type", MONGO])
                .expect("should parse"),
        )
        .await;

    // verify
    run.result.expect("show should succeed");
    let (recipe, parameters) = run
        .output
        .split_once("\n\n")
        .expect("tables are separated by a blank line");
    assert!(recipe.contains("registry/mongo:v1"));
    let location = parameters
        .lines()
        .find(|l| l.contains("location"))
        .expect("location row");
    assert!(location.contains("eastus"));
    assert!(!location.contains("null"));
    let size = parameters.lines().find(|l| l.contains("size")).expect("size row");
    assert!(size.contains("800"));
    assert!(!size.contains("800.0"));
}

#[tokio::test]
async fn register_links_recipe() {
    // set up
    let mut client = MockManagementClient::new();
    client
        .expect_get_environment()
        .times(1)
        .returning(|_| Ok(environment_with(&[(MONGO, "cosmos", "registry/mongo:v1")])));
    client
        .expect_create_or_update_environment()
        .withf(|id, env| {
            let recipes: &BTreeMap<_, _> = &env.properties.recipes[MONGO];
            id == TEST_ENVIRONMENT
                && recipes.len() == 2
                && recipes["cosmos_new"].template_path == "registry/mongo:v2"
                && recipes["cosmos_new"].parameters == json!({"a": "b"}).as_object().cloned()
        })
        .times(1)
        .returning(|_, _| Ok(()));

    // execute
    let run = TestContext::new(client)
        .run(
            Cmd::try_parse_from([
                "recipe",
                "register",
                "cosmos_new",
                "--template-kind",
                "bicep",
                "--template-path",
                "registry/mongo:v2",
                "--resource-type",
                MONGO,
                "--parameters",
                "a=b",
            ])
            .expect("should parse"),
        )
        .await;

    // verify
    run.result.expect("register should succeed");
    assert_eq!(
        run.output,
        "Successfully linked recipe \"cosmos_new\" to environment \"test-env\" \n"
    );
}

#[tokio::test]
async fn register_reports_update_failure() {
    let mut client = MockManagementClient::new();
    client
        .expect_get_environment()
        .returning(|_| Ok(environment_with(&[])));
    client
        .expect_create_or_update_environment()
        .returning(|_, _| Err(UcpError::Communication("connection reset".to_string())));

    let run = TestContext::new(client)
        .run(
            Cmd::try_parse_from([
                "recipe", "register", "r", "--template-kind", "bicep", "--template-path", "p",
                "--resource-type", MONGO,
            ])
            .expect("should parse"),
        )
        .await;

    assert_eq!(
        run.result.expect_err("update fails").to_string(),
        format!(
            "Failed to register the recipe \"r\" to the environment \"{TEST_ENVIRONMENT}\". Cause: Error talking to the control plane: connection reset."
        )
    );
}

#[tokio::test]
async fn register_returns_lookup_failure() {
    let mut client = MockManagementClient::new();
    client
        .expect_get_environment()
        .returning(|_| Err(UcpError::not_found("environment not found")));
    client.expect_create_or_update_environment().never();

    let run = TestContext::new(client)
        .run(
            Cmd::try_parse_from([
                "recipe", "register", "r", "--template-kind", "bicep", "--template-path", "p",
                "--resource-type", MONGO,
            ])
            .expect("should parse"),
        )
        .await;

    assert!(run.result.expect_err("lookup fails").is_not_found());
}

#[tokio::test]
async fn register_requires_name() {
    let client = MockManagementClient::new();

    let run = TestContext::new(client)
        .run(
            Cmd::try_parse_from([
                "recipe", "register", "--template-kind", "bicep", "--template-path", "p",
                "--resource-type", MONGO,
            ])
            .expect("should parse"),
        )
        .await;

    assert_eq!(
        run.result.expect_err("name is missing").to_string(),
        "no recipe name provided"
    );
}

#[tokio::test]
async fn unregister_removes_recipe() {
    // set up
    let mut client = MockManagementClient::new();
    client.expect_get_environment().times(1).returning(|_| {
        Ok(environment_with(&[
            (MONGO, "cosmos", "registry/mongo:v1"),
            (MONGO, "other", "registry/mongo:v2"),
        ]))
    });
    client
        .expect_create_or_update_environment()
        .withf(|_, env| {
            let recipes = &env.properties.recipes[MONGO];
            recipes.len() == 1 && recipes.contains_key("other")
        })
        .times(1)
        .returning(|_, _| Ok(()));

    // execute
    let run = TestContext::new(client)
        .run(
            Cmd::try_parse_from(["recipe", "unregister", "cosmos", "--resource-type", MONGO])
                .expect("should parse"),
        )
        .await;

    // verify
    run.result.expect("unregister should succeed");
    assert_eq!(
        run.output,
        "Successfully unregistered recipe \"cosmos\" from environment \"test-env\" \n"
    );
}

#[tokio::test]
async fn unregister_unknown_recipe() {
    let mut client = MockManagementClient::new();
    client
        .expect_get_environment()
        .returning(|_| Ok(environment_with(&[(MONGO, "cosmos", "registry/mongo:v1")])));
    client.expect_create_or_update_environment().never();

    let run = TestContext::new(client)
        .run(
            Cmd::try_parse_from(["recipe", "unregister", "missing", "--resource-type", MONGO])
                .expect("should parse"),
        )
        .await;

    assert_eq!(
        run.result.expect_err("recipe is unknown").to_string(),
        "recipe \"missing\" is not part of the environment \"test-env\" "
    );
}

#[tokio::test]
async fn unregister_reports_update_failure() {
    let mut client = MockManagementClient::new();
    client
        .expect_get_environment()
        .returning(|_| Ok(environment_with(&[(MONGO, "cosmos", "registry/mongo:v1")])));
    client
        .expect_create_or_update_environment()
        .returning(|_, _| Err(UcpError::Communication("timed out".to_string())));

    let run = TestContext::new(client)
        .run(
            Cmd::try_parse_from(["recipe", "unregister", "cosmos", "--resource-type", MONGO])
                .expect("should parse"),
        )
        .await;

    assert_eq!(
        run.result.expect_err("update fails").to_string(),
        format!(
            "Failed to unregister the recipe cosmos from the environment {TEST_ENVIRONMENT}. Cause: Error talking to the control plane: timed out."
        )
    );
}
