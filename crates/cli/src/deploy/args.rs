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
pub struct Cmd {
    #[clap(help = "Path to the compiled ARM JSON template")]
    pub file: PathBuf,

    #[clap(
        short,
        long = "parameters",
        help = "Template parameter as name=value, name=@file.json or @file.json, can be repeated. Later values win"
    )]
    pub parameters: Vec<String>,

    #[clap(short, long, help = "Resource group to deploy into")]
    pub group: Option<String>,

    #[clap(short, long, help = "Name or id of the environment to deploy into")]
    pub environment: Option<String>,

    #[clap(short, long, help = "Name of the application, created when it does not exist")]
    pub application: Option<String>,
}
