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
    #[clap(about = "Create a resource group")]
    Create(GroupName),
    #[clap(about = "List resource groups", visible_alias = "ls")]
    List,
    #[clap(about = "Show a resource group")]
    Show(GroupName),
    #[clap(about = "Switch the default resource group of the workspace")]
    Switch(GroupName),
    #[clap(about = "Delete a resource group and everything in it")]
    Delete(DeleteGroup),
}

#[derive(Parser, Debug)]
pub struct GroupName {
    #[clap(help = "Name of the resource group")]
    pub name: Option<String>,

    #[clap(short, long, help = "Name of the resource group")]
    pub group: Option<String>,
}

#[derive(Parser, Debug)]
pub struct DeleteGroup {
    #[clap(flatten)]
    pub group: GroupName,

    #[clap(short, long, help = "Delete without asking for confirmation")]
    pub yes: bool,
}
