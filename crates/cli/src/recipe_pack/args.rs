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
    #[clap(about = "Create or update a recipe pack")]
    Create(CreateRecipePack),
    #[clap(about = "List recipe packs", visible_alias = "ls")]
    List(ListRecipePacks),
    #[clap(about = "Show a recipe pack")]
    Show(ShowRecipePack),
    #[clap(about = "Delete a recipe pack")]
    Delete(DeleteRecipePack),
}

#[derive(Parser, Debug)]
pub struct CreateRecipePack {
    #[clap(help = "Name of the recipe pack, defaults to `local-dev`")]
    pub name: Option<String>,

    #[clap(
        long = "recipe",
        value_parser = parse_recipe,
        help = "A recipe as <resource type>=<template location>, can be repeated. Without any, the pack gets the default recipes"
    )]
    pub recipes: Vec<(String, String)>,

    #[clap(long, default_value = "bicep", value_parser = ["bicep", "terraform"], help = "Kind of the recipe templates")]
    pub kind: String,

    #[clap(long, help = "Pull templates over plain http")]
    pub plain_http: bool,

    #[clap(short, long, help = "Resource group of the recipe pack")]
    pub group: Option<String>,
}

#[derive(Parser, Debug)]
pub struct ListRecipePacks {
    #[clap(short, long, help = "Resource group to list")]
    pub group: Option<String>,
}

#[derive(Parser, Debug)]
pub struct ShowRecipePack {
    #[clap(help = "Name or id of the recipe pack")]
    pub name: String,

    #[clap(short, long, help = "Resource group of the recipe pack")]
    pub group: Option<String>,
}

#[derive(Parser, Debug)]
pub struct DeleteRecipePack {
    #[clap(help = "Name or id of the recipe pack")]
    pub name: String,

    #[clap(short, long, help = "Resource group of the recipe pack")]
    pub group: Option<String>,

    #[clap(short, long, help = "Delete without asking for confirmation")]
    pub yes: bool,
}

fn parse_recipe(value: &str) -> Result<(String, String), String> {
    match value.split_once('=') {
        Some((resource_type, location))
            if resource_type.contains('/') && !location.is_empty() =>
        {
            Ok((resource_type.to_string(), location.to_string()))
        }
        _ => Err(format!(
            "'{value}' is not a recipe, expected <Namespace/type>=<template location>"
        )),
    }
}
