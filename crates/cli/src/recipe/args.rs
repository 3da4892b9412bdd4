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
    #[clap(about = "List the recipes registered on an environment", visible_alias = "ls")]
    List(ListRecipes),
    #[clap(about = "Show a recipe and its parameters")]
    Show(ShowRecipe),
    #[clap(about = "Register a recipe on an environment")]
    Register(RegisterRecipe),
    #[clap(about = "Remove a recipe from an environment")]
    Unregister(UnregisterRecipe),
}

#[derive(Parser, Debug)]
pub struct EnvironmentTarget {
    #[clap(short, long, help = "Name or id of the environment, defaults to the workspace environment")]
    pub environment: Option<String>,

    #[clap(short, long, help = "Resource group of the environment")]
    pub group: Option<String>,
}

#[derive(Parser, Debug)]
pub struct ListRecipes {
    #[clap(flatten)]
    pub target: EnvironmentTarget,
}

#[derive(Parser, Debug)]
pub struct ShowRecipe {
    #[clap(help = "Name of the recipe")]
    pub name: Option<String>,

    #[clap(long, help = "Resource type the recipe is registered for")]
    pub resource_type: String,

    #[clap(flatten)]
    pub target: EnvironmentTarget,
}

#[derive(Parser, Debug)]
pub struct RegisterRecipe {
    #[clap(help = "Name of the recipe")]
    pub name: Option<String>,

    #[clap(long, value_parser = ["bicep", "terraform"], help = "Kind of the recipe template")]
    pub template_kind: String,

    #[clap(long, help = "Location of the recipe template")]
    pub template_path: String,

    #[clap(long, help = "Resource type the recipe provisions")]
    pub resource_type: String,

    #[clap(long, help = "Version of the template module, terraform only")]
    pub template_version: Option<String>,

    #[clap(
        short,
        long = "parameters",
        help = "Recipe parameter as name=value, name=@file.json or @file.json, can be repeated"
    )]
    pub parameters: Vec<String>,

    #[clap(long, help = "Pull the template over plain http")]
    pub plain_http: bool,

    #[clap(flatten)]
    pub target: EnvironmentTarget,
}

#[derive(Parser, Debug)]
pub struct UnregisterRecipe {
    #[clap(help = "Name of the recipe")]
    pub name: Option<String>,

    #[clap(long, help = "Resource type the recipe is registered for")]
    pub resource_type: String,

    #[clap(flatten)]
    pub target: EnvironmentTarget,
}
