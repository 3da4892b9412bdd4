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

use ::ucp::cli::OutputFormat;
use ::ucp::models::{GenericResource, ResourceGroupResource};
use ::ucp::{MockManagementClient, UcpError};
use clap::{CommandFactory, Parser};
use mockall::Sequence;

use super::args::*;
use crate::prompt::MockPrompter;
use crate::test_support::TestContext;

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

// parse_create_positional ensures create parses a positional name.
#[test]
fn parse_create_positional() {
    let cmd = Cmd::try_parse_from(["group", "create", "test-group"])
        .expect("should parse create");

    match cmd {
        Cmd::Create(args) => assert_eq!(args.name.as_deref(), Some("test-group")),
        _ => panic!("expected Create variant"),
    }
}

// parse_delete_with_flag ensures delete parses -g and -y.
#[test]
fn parse_delete_with_flag() {
    let cmd = Cmd::try_parse_from(["group", "delete", "-g", "test-group", "-y"])
        .expect("should parse delete");

    match cmd {
        Cmd::Delete(args) => {
            assert_eq!(args.group.group.as_deref(), Some("test-group"));
            assert!(args.yes);
        }
        _ => panic!("expected Delete variant"),
    }
}

/////////////////////////////////////////////////////////////////////////////
// Execution

fn resource(id: &str) -> GenericResource {
    GenericResource {
        id: Some(id.to_string()),
        resource_type: Some("Applications.Core/containers".to_string()),
        ..Default::default()
    }
}

#[tokio::test]
async fn create_reports_progress() {
    let mut client = MockManagementClient::new();
    client
        .expect_create_or_update_resource_group()
        .withf(|plane, name, group| {
            plane == "local" && name == "new-group" && group.location.as_deref() == Some("global")
        })
        .times(1)
        .returning(|_, _, _| Ok(()));

    let run = TestContext::new(client)
        .run(Cmd::try_parse_from(["group", "create", "new-group"]).expect("should parse"))
        .await;

    run.result.expect("create should succeed");
    assert_eq!(
        run.output,
        "creating resource group \"new-group\" in workspace \"test\"...\nresource group \"new-group\" created\n"
    );
}

#[tokio::test]
async fn create_rejects_name_twice() {
    let run = TestContext::new(MockManagementClient::new())
        .run(Cmd::try_parse_from(["group", "create", "a", "-g", "b"]).expect("should parse"))
        .await;

    assert_eq!(
        run.result.expect_err("both given").to_string(),
        "cannot specify resource group name via both arguments and `-g`"
    );
}

#[tokio::test]
async fn list_prints_groups() {
    let mut client = MockManagementClient::new();
    client.expect_list_resource_groups().returning(|_| {
        Ok(vec![ResourceGroupResource {
            id: Some("/planes/radius/local/resourceGroups/g1".to_string()),
            name: Some("g1".to_string()),
            ..Default::default()
        }])
    });

    let run = TestContext::new(client)
        .with_format(OutputFormat::Json)
        .run(Cmd::try_parse_from(["group", "list"]).expect("should parse"))
        .await;

    run.result.expect("list should succeed");
    let parsed: serde_json::Value = serde_json::from_str(&run.output).expect("valid json");
    assert_eq!(parsed[0]["name"], "g1");
}

#[tokio::test]
async fn delete_with_contents_deletes_only_group() {
    // set up
    let mut seq = Sequence::new();
    let mut client = MockManagementClient::new();
    client
        .expect_list_resources_in_resource_group()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _| {
            Ok(vec![
                resource("/planes/radius/local/resourceGroups/test-group/providers/Applications.Core/containers/a"),
                resource("/planes/radius/local/resourceGroups/test-group/providers/Applications.Core/containers/b"),
            ])
        });
    // the server removes the contents along with the group
    client.expect_delete_resource().never();
    client
        .expect_delete_resource_group()
        .withf(|plane, name| plane == "local" && name == "test-group")
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _| Ok(true));
    let mut prompter = MockPrompter::new();
    prompter
        .expect_confirm()
        .withf(|message| {
            message == "The resource group test-group contains deployed resources. Are you sure you want to delete the resource group and its resources?"
        })
        .times(1)
        .returning(|_| Ok(true));

    // execute
    let run = TestContext::new(client)
        .with_prompter(prompter)
        .run(Cmd::try_parse_from(["group", "delete", "test-group"]).expect("should parse"))
        .await;

    // verify
    run.result.expect("delete should succeed");
    assert_eq!(
        run.output,
        "Deleting resource group test-group...\nResource group test-group deleted.\n"
    );
}

#[tokio::test]
async fn delete_declined() {
    let mut client = MockManagementClient::new();
    client
        .expect_list_resources_in_resource_group()
        .returning(|_, _| Err(UcpError::not_found("gone")));
    let mut prompter = MockPrompter::new();
    prompter
        .expect_confirm()
        .withf(|message| {
            message == "The resource group test-group is empty. Are you sure you want to delete the resource group?"
        })
        .returning(|_| Ok(false));

    let run = TestContext::new(client)
        .with_prompter(prompter)
        .run(Cmd::try_parse_from(["group", "delete", "test-group"]).expect("should parse"))
        .await;

    run.result.expect("declining is not an error");
    assert_eq!(run.output, "Resource group \"test-group\" NOT deleted\n");
}

#[tokio::test]
async fn delete_missing_group() {
    let mut client = MockManagementClient::new();
    client
        .expect_list_resources_in_resource_group()
        .returning(|_, _| Ok(vec![]));
    client
        .expect_delete_resource_group()
        .returning(|_, _| Ok(false));

    let run = TestContext::new(client)
        .run(Cmd::try_parse_from(["group", "delete", "old", "-y"]).expect("should parse"))
        .await;

    run.result.expect("delete should succeed");
    assert!(
        run.output
            .ends_with("Resource group old does not exist or has already been deleted.\n")
    );
}

#[tokio::test]
async fn delete_fails_when_contents_unknown() {
    let mut client = MockManagementClient::new();
    client
        .expect_list_resources_in_resource_group()
        .returning(|_, _| Err(UcpError::Communication("connection refused".to_string())));

    let run = TestContext::new(client)
        .run(Cmd::try_parse_from(["group", "delete", "g", "-y"]).expect("should parse"))
        .await;

    assert_eq!(
        run.result.expect_err("listing failed").to_string(),
        "unable to verify resource group contents: Error talking to the control plane: connection refused"
    );
}

#[tokio::test]
async fn switch_to_missing_group() {
    let mut client = MockManagementClient::new();
    client
        .expect_get_resource_group()
        .returning(|_, _| Err(UcpError::not_found("nope")));

    let run = TestContext::new(client)
        .run(Cmd::try_parse_from(["group", "switch", "nope"]).expect("should parse"))
        .await;

    assert_eq!(
        run.result.expect_err("missing").to_string(),
        "Resource group \"nope\" does not exist. Run `rad env create` try again."
    );
}
