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
    #[clap(about = "List resources, filtered by group, environment, application or type")]
    List(ListResources),
    #[clap(about = "Show a resource")]
    Show(ResourceName),
    #[clap(about = "Delete a resource")]
    Delete(DeleteResource),
}

#[derive(Parser, Debug)]
pub struct ListResources {
    #[clap(help = "Resource type, `Namespace/type` or a short name like `containers`")]
    pub resource_type: Option<String>,

    #[clap(short, long, help = "Only resources of this application, by name or id")]
    pub application: Option<String>,

    #[clap(short, long, help = "Only resources of this environment, by name or id")]
    pub environment: Option<String>,

    #[clap(short, long, help = "Only resources in this resource group")]
    pub group: Option<String>,
}

#[derive(Parser, Debug)]
pub struct ResourceName {
    #[clap(num_args = 0..=2, help = "Resource type and resource name")]
    pub args: Vec<String>,

    #[clap(short, long, help = "Resource group of the resource")]
    pub group: Option<String>,
}

#[derive(Parser, Debug)]
pub struct DeleteResource {
    #[clap(flatten)]
    pub resource: ResourceName,

    #[clap(short, long, help = "Delete without asking for confirmation")]
    pub yes: bool,
}
