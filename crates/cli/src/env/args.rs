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

use clap::Parser;

#[derive(Parser, Debug)]
pub enum Cmd {
    #[clap(about = "Create a new environment")]
    Create(CreateEnvironment),
    #[clap(about = "List environments", visible_alias = "ls")]
    List(ListEnvironments),
    #[clap(about = "Show an environment")]
    Show(EnvironmentName),
    #[clap(about = "Switch the default environment of the workspace")]
    Switch(SwitchEnvironment),
    #[clap(about = "Delete an environment")]
    Delete(DeleteEnvironment),
}

#[derive(Parser, Debug)]
pub struct CreateEnvironment {
    #[clap(help = "Name of the environment")]
    pub name: String,

    #[clap(short, long, help = "Resource group to create the environment in")]
    pub group: Option<String>,

    #[clap(long, default_value = "default", help = "Kubernetes namespace for deployed resources")]
    pub namespace: String,

    #[clap(
        long,
        value_delimiter = ',',
        help = "Recipe packs to add, by name or id, comma separated"
    )]
    pub recipe_packs: Vec<String>,

    #[clap(long, help = "Add default recipe packs for types the given packs leave out")]
    pub with_default_packs: bool,
}

#[derive(Parser, Debug)]
pub struct ListEnvironments {
    #[clap(
        short,
        long,
        help = "Resource group to list. Without it every resource group in the workspace's plane is listed"
    )]
    pub group: Option<String>,
}

#[derive(Parser, Debug)]
pub struct EnvironmentName {
    #[clap(help = "Name of the environment")]
    pub name: Option<String>,

    #[clap(short, long, help = "Name of the environment")]
    pub environment: Option<String>,

    #[clap(short, long, help = "Resource group of the environment")]
    pub group: Option<String>,
}

#[derive(Parser, Debug)]
pub struct SwitchEnvironment {
    #[clap(help = "Name of the environment")]
    pub name: String,
}

#[derive(Parser, Debug)]
pub struct DeleteEnvironment {
    #[clap(flatten)]
    pub environment: EnvironmentName,

    #[clap(short, long, help = "Delete without asking for confirmation")]
    pub yes: bool,
}
