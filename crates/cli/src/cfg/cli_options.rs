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

use std::path::PathBuf;

use ::ucp::cli::OutputFormat;
use clap::{Parser, Subcommand};

use crate::{
    app, deploy, env, generate_shell_complete, group, recipe, recipe_pack, resource,
    resource_type, version, workspace,
};

#[derive(Parser, Debug)]
#[clap(
    name = "rad",
    version,
    about = "Manage applications, environments and recipes on the control plane"
)]
pub struct CliOptions {
    #[clap(
        long,
        global = true,
        env = "RAD_CONFIG",
        help = "Path to the config file (default: $HOME/.rad/config.yaml)"
    )]
    pub config: Option<PathBuf>,

    #[clap(
        short,
        long,
        global = true,
        value_enum,
        env = "RAD_OUTPUT",
        default_value_t = OutputFormat::Table,
        help = "Output format"
    )]
    pub output: OutputFormat,

    #[clap(
        short,
        long,
        global = true,
        env = "RAD_WORKSPACE",
        help = "The workspace to use, instead of the default one"
    )]
    pub workspace: Option<String>,

    #[clap(long, global = true, help = "Enable debug logging")]
    pub debug: bool,

    #[clap(subcommand)]
    pub commands: Option<CliCommand>,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    #[clap(about = "Manage workspaces", subcommand)]
    Workspace(workspace::Cmd),
    #[clap(about = "Manage resource groups", subcommand, visible_alias = "groups")]
    Group(group::Cmd),
    #[clap(about = "Manage environments", subcommand, visible_alias = "environment")]
    Env(env::Cmd),
    #[clap(about = "Manage applications", subcommand, visible_alias = "application")]
    App(app::Cmd),
    #[clap(about = "Manage resources", subcommand)]
    Resource(resource::Cmd),
    #[clap(about = "Manage resource types", subcommand)]
    ResourceType(resource_type::Cmd),
    #[clap(about = "Manage recipes registered on environments", subcommand)]
    Recipe(recipe::Cmd),
    #[clap(about = "Manage recipe packs", subcommand)]
    RecipePack(recipe_pack::Cmd),
    #[clap(about = "Deploy an ARM deployment template")]
    Deploy(deploy::Cmd),
    #[clap(about = "Generate shell autocomplete. Source the output of this command: `source <(rad generate-shell-complete bash)`")]
    GenerateShellComplete(generate_shell_complete::Cmd),
    #[clap(about = "Print the version of the CLI")]
    Version(version::Cmd),
}
