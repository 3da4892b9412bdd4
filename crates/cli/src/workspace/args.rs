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
    #[clap(about = "Create a workspace", subcommand)]
    Create(CreateWorkspace),
    #[clap(about = "List local workspaces", visible_alias = "ls")]
    List,
    #[clap(about = "Show a workspace, the default one if no name is given")]
    Show(ShowWorkspace),
    #[clap(about = "Switch the default workspace")]
    Switch(SwitchWorkspace),
    #[clap(about = "Delete a local workspace")]
    Delete(DeleteWorkspace),
}

#[derive(Parser, Debug)]
pub enum CreateWorkspace {
    #[clap(about = "Create a workspace backed by a Kubernetes cluster")]
    Kubernetes(CreateKubernetesWorkspace),
}

#[derive(Parser, Debug)]
pub struct CreateKubernetesWorkspace {
    #[clap(help = "Name of the workspace, defaults to `default`")]
    pub name: Option<String>,

    #[clap(long, help = "Kubernetes context, defaults to the current context")]
    pub context: Option<String>,

    #[clap(short, long, help = "Default resource group of the workspace")]
    pub group: Option<String>,

    #[clap(
        short,
        long,
        requires = "group",
        help = "Default environment of the workspace"
    )]
    pub environment: Option<String>,

    #[clap(long, help = "Overwrite an existing workspace")]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct ShowWorkspace {
    #[clap(help = "Name of the workspace")]
    pub name: Option<String>,
}

#[derive(Parser, Debug)]
pub struct SwitchWorkspace {
    #[clap(help = "Name of the workspace")]
    pub name: String,
}

#[derive(Parser, Debug)]
pub struct DeleteWorkspace {
    #[clap(help = "Name of the workspace, defaults to the current one")]
    pub name: Option<String>,

    #[clap(short, long, help = "Delete without asking for confirmation")]
    pub yes: bool,
}
