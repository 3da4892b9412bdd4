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
    #[clap(about = "Create an application in an environment")]
    Create(CreateApplication),
    #[clap(about = "List applications", visible_alias = "ls")]
    List(ListApplications),
    #[clap(about = "Show an application")]
    Show(ApplicationName),
    #[clap(about = "Switch the default application of the workspace")]
    Switch(SwitchApplication),
    #[clap(about = "Delete an application")]
    Delete(DeleteApplication),
}

#[derive(Parser, Debug)]
pub struct ApplicationName {
    #[clap(help = "Name of the application")]
    pub name: Option<String>,

    #[clap(short, long, help = "Name of the application")]
    pub application: Option<String>,

    #[clap(short, long, help = "Resource group of the application")]
    pub group: Option<String>,
}

#[derive(Parser, Debug)]
pub struct CreateApplication {
    #[clap(flatten)]
    pub application: ApplicationName,

    #[clap(short, long, help = "Environment, by name or id, to create the application in")]
    pub environment: Option<String>,
}

#[derive(Parser, Debug)]
pub struct ListApplications {
    #[clap(short, long, help = "Resource group to list")]
    pub group: Option<String>,
}

#[derive(Parser, Debug)]
pub struct SwitchApplication {
    #[clap(help = "Name of the application")]
    pub name: Option<String>,

    #[clap(short, long, help = "Name of the application")]
    pub application: Option<String>,
}

#[derive(Parser, Debug)]
pub struct DeleteApplication {
    #[clap(flatten)]
    pub application: ApplicationName,

    #[clap(short, long, help = "Delete without asking for confirmation")]
    pub yes: bool,
}
