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

use clap::Parser;

#[derive(Parser, Debug)]
pub enum Cmd {
    #[clap(about = "List resource types", visible_alias = "ls")]
    List,
    #[clap(about = "Show a resource type")]
    Show(ResourceTypeName),
    #[clap(about = "Create resource types from a manifest file")]
    Create(CreateResourceType),
    #[clap(about = "Delete a resource type")]
    Delete(DeleteResourceType),
}

#[derive(Parser, Debug)]
pub struct ResourceTypeName {
    #[clap(help = "Fully qualified resource type, like `MyCompany.Resources/widgets`")]
    pub resource_type: String,
}

#[derive(Parser, Debug)]
pub struct CreateResourceType {
    #[clap(help = "Name of the one type from the manifest to create, all types when omitted")]
    pub type_name: Option<String>,

    #[clap(short = 'f', long, help = "Resource provider manifest file")]
    pub from_file: PathBuf,
}

#[derive(Parser, Debug)]
pub struct DeleteResourceType {
    #[clap(flatten)]
    pub resource_type: ResourceTypeName,

    #[clap(short, long, help = "Delete without asking for confirmation")]
    pub yes: bool,
}
