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

use ::ucp::ManagementClient;
use ::ucp::ResourceId;
use ::ucp::cli::{OutputFormat, RadCliResult};
use ::ucp::models::{LOCATION_GLOBAL, RecipeDefinition, RecipePackProperties, RecipePackResource};
use ::ucp::resource_types::ENVIRONMENTS;

use super::args::CreateRecipePack;
use super::packs::{
    DEFAULT_RECIPE_PACK_NAME, extract_recipe_pack_ids, recipe_pack_id, singleton_definitions,
};
use crate::async_writeln;
use crate::output::{OutputFile, write_list, write_object};
use crate::prompt::{Prompter, confirm_unless};

pub async fn create(
    args: CreateRecipePack,
    scope: &str,
    client: &dyn ManagementClient,
    output: &mut OutputFile,
) -> RadCliResult<()> {
    let name = args
        .name
        .unwrap_or_else(|| DEFAULT_RECIPE_PACK_NAME.to_string());
    let id = recipe_pack_id(scope, &name)?;
    let plain_http = args.plain_http.then_some(true);

    let recipes = if args.recipes.is_empty() {
        singleton_definitions()
            .iter()
            .map(|d| {
                (
                    d.resource_type.to_string(),
                    RecipeDefinition {
                        recipe_kind: args.kind.clone(),
                        recipe_location: d.recipe_location.to_string(),
                        parameters: None,
                        plain_http,
                    },
                )
            })
            .collect()
    } else {
        args.recipes
            .into_iter()
            .map(|(resource_type, location)| {
                (
                    resource_type,
                    RecipeDefinition {
                        recipe_kind: args.kind.clone(),
                        recipe_location: location,
                        parameters: None,
                        plain_http,
                    },
                )
            })
            .collect()
    };

    let pack = RecipePackResource {
        location: Some(LOCATION_GLOBAL.to_string()),
        properties: RecipePackProperties {
            recipes,
            ..Default::default()
        },
        ..Default::default()
    };
    let created = client.create_or_update_recipe_pack(&id, &pack).await?;

    async_writeln!(
        output,
        "Recipe pack \"{}\" created with {} recipe(s)",
        created.name.as_deref().unwrap_or(&name),
        created.properties.recipes.len()
    )?;
    Ok(())
}

pub async fn list(
    client: &dyn ManagementClient,
    output: &mut OutputFile,
    format: OutputFormat,
) -> RadCliResult<()> {
    let packs = client.list_recipe_packs().await?;
    write_list(output, format, &packs).await
}

pub async fn show(
    name: &str,
    scope: &str,
    client: &dyn ManagementClient,
    output: &mut OutputFile,
    format: OutputFormat,
) -> RadCliResult<()> {
    let pack = client.get_recipe_pack(&recipe_pack_id(scope, name)?).await?;
    write_object(output, format, &pack).await
}

pub async fn delete(
    name: &str,
    yes: bool,
    scope: &str,
    client: &dyn ManagementClient,
    prompter: &dyn Prompter,
    output: &mut OutputFile,
) -> RadCliResult<()> {
    let id = recipe_pack_id(scope, name)?;
    let display = ResourceId::parse(&id)?.name().to_string();

    let mut message = format!("Are you sure you want to delete recipe pack '{display}'?");
    let users = environments_using(client, &id).await;
    if !users.is_empty() {
        message = format!(
            "Recipe pack '{display}' is used by environment(s) {}. {message}",
            users.join(", ")
        );
    }

    if !confirm_unless(yes, prompter, &message)? {
        async_writeln!(output, "Recipe pack \"{display}\" NOT deleted")?;
        return Ok(());
    }

    if client.delete_recipe_pack(&id).await? {
        async_writeln!(output, "Recipe pack {display} deleted.")?;
    } else {
        async_writeln!(
            output,
            "Recipe pack '{display}' does not exist or has already been deleted."
        )?;
    }
    Ok(())
}

// best effort: a failed lookup only loses the warning
async fn environments_using(client: &dyn ManagementClient, pack_id: &str) -> Vec<String> {
    match client.list_resources_of_type(ENVIRONMENTS).await {
        Ok(environments) => environments
            .into_iter()
            .filter(|env| {
                extract_recipe_pack_ids(&env.properties)
                    .iter()
                    .any(|id| id.eq_ignore_ascii_case(pack_id))
            })
            .filter_map(|env| env.name)
            .collect(),
        Err(e) => {
            tracing::warn!(error = %e, "could not check which environments use the recipe pack");
            Vec::new()
        }
    }
}
