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
// Execution         - Print the version in each output format.

use ::ucp::MockManagementClient;
use ::ucp::cli::OutputFormat;
use clap::{CommandFactory, Parser};

use super::args::*;
use super::cmds::VersionInfo;
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

// parse_no_args ensures parses with no arguments.
#[test]
fn parse_no_args() {
    Cmd::try_parse_from(["version"]).expect("should parse with no args");
}

// parse_rejects_args ensures version takes nothing.
#[test]
fn parse_rejects_args() {
    let result = Cmd::try_parse_from(["version", "extra"]);
    assert!(result.is_err(), "should fail with an argument");
}

/////////////////////////////////////////////////////////////////////////////
// Execution

#[test]
fn version_is_major_minor() {
    let info = VersionInfo::current();
    assert_eq!(info.release, env!("CARGO_PKG_VERSION"));
    assert!(info.release.starts_with(&info.version));
    assert_eq!(info.version.matches('.').count(), 1);
}

#[tokio::test]
async fn version_as_table() {
    let run = TestContext::new(MockManagementClient::new())
        .run(Cmd {})
        .await;

    run.result.expect("version should succeed");
    assert!(run.output.contains("RELEASE"));
    assert!(run.output.contains(env!("CARGO_PKG_VERSION")));
}

#[tokio::test]
async fn version_as_json() {
    let run = TestContext::new(MockManagementClient::new())
        .with_format(OutputFormat::Json)
        .run(Cmd {})
        .await;

    run.result.expect("version should succeed");
    let value: serde_json::Value = serde_json::from_str(&run.output).expect("json output");
    assert_eq!(value["release"], env!("CARGO_PKG_VERSION"));
}
