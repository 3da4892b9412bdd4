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

use ::ucp::cli::OutputFormat;
use ::ucp::models::{
    ApiVersionResource, LocationResource, ResourceProviderResource, ResourceProviderSummary,
    ResourceTypeResource, ResourceTypeSummary,
};
use ::ucp::{MockManagementClient, UcpError};
use clap::{CommandFactory, Parser};
use indoc::indoc;
use mockall::Sequence;
use serde_json::json;

use super::args::*;
use crate::prompt::MockPrompter;
use crate::test_support::TestContext;

const MANIFEST: &str = indoc! {r#"
    namespace: MyCompany.Resources
    location:
      east: http://widgets.svc:8080
    types:
      widgets:
        apiVersions:
          "2025-01-01-preview":
            schema:
              type: object
      gadgets:
        apiVersions:
          "2025-01-01-preview":
            schema: {}
"#};

fn manifest_file(text: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("manifest.yaml");
    std::fs::write(&path, text).expect("write manifest");
    (dir, path)
}

fn summary() -> ResourceProviderSummary {
    ResourceProviderSummary {
        name: "MyCompany.Resources".to_string(),
        resource_types: [(
            "widgets".to_string(),
            ResourceTypeSummary {
                api_versions: [("2025-01-01-preview".to_string(), json!({}))]
                    .into_iter()
                    .collect(),
                description: Some("A widget".to_string()),
                ..Default::default()
            },
        )]
        .into_iter()
        .collect(),
        ..Default::default()
    }
}

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

// parse_create_requires_file ensures create needs --from-file.
#[test]
fn parse_create_requires_file() {
    let result = Cmd::try_parse_from(["resource-type", "create", "widgets"]);
    assert!(result.is_err(), "should fail without --from-file");
}

// parse_create_short_flag ensures -f works with an optional type.
#[test]
fn parse_create_short_flag() {
    let cmd = Cmd::try_parse_from(["resource-type", "create", "-f", "m.yaml"])
        .expect("should parse create");

    match cmd {
        Cmd::Create(args) => {
            assert!(args.type_name.is_none());
            assert_eq!(args.from_file, PathBuf::from("m.yaml"));
        }
        _ => panic!("expected Create variant"),
    }
}

/////////////////////////////////////////////////////////////////////////////
// Execution

#[tokio::test]
async fn list_flattens_providers() {
    let mut client = MockManagementClient::new();
    client
        .expect_list_resource_provider_summaries()
        .withf(|plane| plane == "local")
        .returning(|_| Ok(vec![summary()]));

    let run = TestContext::new(client)
        .with_format(OutputFormat::Json)
        .run(Cmd::try_parse_from(["resource-type", "list"]).expect("should parse"))
        .await;

    run.result.expect("list should succeed");
    let parsed: serde_json::Value = serde_json::from_str(&run.output).expect("valid json");
    assert_eq!(parsed[0]["name"], "MyCompany.Resources/widgets");
    assert_eq!(parsed[0]["apiVersions"], json!(["2025-01-01-preview"]));
}

#[tokio::test]
async fn show_unknown_type() {
    let mut client = MockManagementClient::new();
    client
        .expect_get_resource_provider_summary()
        .returning(|_, _| Ok(summary()));

    let run = TestContext::new(client)
        .run(
            Cmd::try_parse_from(["resource-type", "show", "MyCompany.Resources/gizmos"])
                .expect("should parse"),
        )
        .await;

    assert_eq!(
        run.result.expect_err("unknown type").to_string(),
        "The resource type \"MyCompany.Resources/gizmos\" was not found or has been deleted."
    );
}

#[tokio::test]
async fn show_rejects_unqualified_type() {
    let run = TestContext::new(MockManagementClient::new())
        .run(Cmd::try_parse_from(["resource-type", "show", "widgets"]).expect("should parse"))
        .await;

    assert!(
        run.result
            .expect_err("not qualified")
            .to_string()
            .starts_with("'widgets' is not a valid resource type")
    );
}

#[tokio::test]
async fn create_registers_whole_provider() {
    // set up
    let (_dir, path) = manifest_file(MANIFEST);
    let mut client = MockManagementClient::new();
    client
        .expect_create_or_update_resource_provider()
        .withf(|plane, name, provider| {
            plane == "local"
                && name == "MyCompany.Resources"
                && provider.location.as_deref() == Some("east")
        })
        .times(1)
        .returning(|_, _, r| Ok(r.clone()));
    client
        .expect_create_or_update_resource_type()
        .times(2)
        .returning(|_, _, _, r| Ok(r.clone()));
    client
        .expect_create_or_update_api_version()
        .times(2)
        .returning(|_, _, _, _, r| Ok(r.clone()));
    client
        .expect_create_or_update_location()
        .withf(|_, _, name, location| {
            name == "east"
                && location.properties.address.as_deref() == Some("http://widgets.svc:8080")
                && location.properties.resource_types.len() == 2
        })
        .times(1)
        .returning(|_, _, _, l| Ok(l.clone()));

    // execute
    let run = TestContext::new(client)
        .run(
            Cmd::try_parse_from(["resource-type", "create", "-f", path.to_str().expect("utf-8")])
                .expect("should parse"),
        )
        .await;

    // verify
    run.result.expect("create should succeed");
    assert_eq!(
        run.output,
        "Resource provider MyCompany.Resources registered with 2 resource type(s).\n"
    );
}

#[tokio::test]
async fn create_one_type_keeps_existing_types() {
    let (_dir, path) = manifest_file(MANIFEST);
    let mut client = MockManagementClient::new();
    client
        .expect_get_resource_provider_summary()
        .returning(|_, _| Ok(summary()));
    client.expect_create_or_update_resource_provider().never();
    client
        .expect_create_or_update_resource_type()
        .withf(|_, _, name, _| name == "gadgets")
        .times(1)
        .returning(|_, _, _, r| Ok(r.clone()));
    client
        .expect_create_or_update_api_version()
        .returning(|_, _, _, _, r| Ok(r.clone()));
    client
        .expect_create_or_update_location()
        .withf(|_, _, _, location| {
            let types = &location.properties.resource_types;
            types.contains_key("widgets") && types.contains_key("gadgets")
        })
        .times(1)
        .returning(|_, _, _, l| Ok(l.clone()));

    let run = TestContext::new(client)
        .run(
            Cmd::try_parse_from([
                "resource-type",
                "create",
                "gadgets",
                "-f",
                path.to_str().expect("utf-8"),
            ])
            .expect("should parse"),
        )
        .await;

    run.result.expect("create should succeed");
    assert_eq!(run.output, "Resource type MyCompany.Resources/gadgets created.\n");
}

#[tokio::test]
async fn create_rejects_invalid_schema_before_upload() {
    let (_dir, path) = manifest_file(indoc! {r#"
        namespace: MyCompany.Resources
        types:
          widgets:
            apiVersions:
              "2025-01-01-preview":
                schema:
                  oneOf: []
    "#});
    let mut client = MockManagementClient::new();
    client.expect_create_or_update_resource_provider().never();

    let run = TestContext::new(client)
        .run(
            Cmd::try_parse_from(["resource-type", "create", "-f", path.to_str().expect("utf-8")])
                .expect("should parse"),
        )
        .await;

    assert!(
        run.result
            .expect_err("oneOf")
            .to_string()
            .contains("oneOf is not supported")
    );
}

#[tokio::test(start_paused = true)]
async fn create_retries_conflicts() {
    let (_dir, path) = manifest_file(MANIFEST);
    let mut seq = Sequence::new();
    let mut client = MockManagementClient::new();
    client
        .expect_create_or_update_resource_provider()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _, _| {
            Err(UcpError::Response {
                status: 409,
                code: "Conflict".to_string(),
                message: "provider is being updated".to_string(),
            })
        });
    client
        .expect_create_or_update_resource_provider()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _, _| Ok(ResourceProviderResource::default()));
    client
        .expect_create_or_update_resource_type()
        .returning(|_, _, _, _| Ok(ResourceTypeResource::default()));
    client
        .expect_create_or_update_api_version()
        .returning(|_, _, _, _, _| Ok(ApiVersionResource::default()));
    client
        .expect_create_or_update_location()
        .returning(|_, _, _, _| Ok(LocationResource::default()));

    let run = TestContext::new(client)
        .run(
            Cmd::try_parse_from(["resource-type", "create", "-f", path.to_str().expect("utf-8")])
                .expect("should parse"),
        )
        .await;

    run.result.expect("second attempt succeeds");
}

#[tokio::test]
async fn delete_declined() {
    let mut prompter = MockPrompter::new();
    prompter
        .expect_confirm()
        .withf(|message| {
            message == "Are you sure you want to delete resource type 'MyCompany.Resources/widgets'?"
        })
        .returning(|_| Ok(false));
    let mut client = MockManagementClient::new();
    client.expect_delete_resource_type().never();

    let run = TestContext::new(client)
        .with_prompter(prompter)
        .run(
            Cmd::try_parse_from(["resource-type", "delete", "MyCompany.Resources/widgets"])
                .expect("should parse"),
        )
        .await;

    run.result.expect("declining is not an error");
    assert_eq!(
        run.output,
        "Resource type \"MyCompany.Resources/widgets\" NOT deleted\n"
    );
}

#[tokio::test]
async fn delete_with_yes() {
    let mut client = MockManagementClient::new();
    client
        .expect_delete_resource_type()
        .withf(|plane, namespace, name| {
            plane == "local" && namespace == "MyCompany.Resources" && name == "widgets"
        })
        .times(1)
        .returning(|_, _, _| Ok(true));

    let run = TestContext::new(client)
        .run(
            Cmd::try_parse_from(["resource-type", "delete", "MyCompany.Resources/widgets", "-y"])
                .expect("should parse"),
        )
        .await;

    run.result.expect("delete should succeed");
    assert_eq!(run.output, "Resource type MyCompany.Resources/widgets deleted.\n");
}
