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

use std::path::Path;

use ::ucp::cli::{OutputFormat, RadCliError, RadCliResult};
use ::ucp::models::{EnvironmentProperties, EnvironmentResource, KubernetesCompute, LOCATION_GLOBAL};
use ::ucp::resource_id::resource_id_in_scope;
use ::ucp::resource_types::ENVIRONMENTS;
use ::ucp::{ManagementClient, ResourceId};

use super::args::CreateEnvironment;
use crate::async_writeln;
use crate::config::{Workspace, edit_workspaces};
use crate::output::{OutputFile, write_list, write_object};
use crate::prompt::{Prompter, confirm_unless};
use crate::recipe_pack::packs::{
    create_singleton_recipe_packs, ensure_missing_singletons, format_conflict_error,
    inspect_recipe_packs, recipe_pack_id, recipe_pack_id_exists,
};
use crate::validation::LOCAL_PLANE;

pub async fn create(
    args: CreateEnvironment,
    scope: &str,
    client: &dyn ManagementClient,
    output: &mut OutputFile,
) -> RadCliResult<()> {
    let group = ResourceId::parse_scope(scope)?
        .find_scope("resourceGroups")
        .map(str::to_string)
        .ok_or_else(|| {
            RadCliError::GenericError(format!("'{scope}' is not a resource group scope"))
        })?;

    match client.get_resource_group(LOCAL_PLANE, &group).await {
        Ok(_) => {}
        Err(e) if e.is_not_found() => {
            return Err(RadCliError::GenericError(format!(
                "Resource group \"{group}\" could not be found."
            )));
        }
        Err(e) => return Err(e.into()),
    }

    let mut pack_ids = args
        .recipe_packs
        .iter()
        .filter(|p| !p.is_empty())
        .map(|p| recipe_pack_id(scope, p))
        .collect::<RadCliResult<Vec<_>>>()?;

    if !pack_ids.is_empty() {
        let inspection = inspect_recipe_packs(client, &pack_ids).await?;
        if !inspection.conflicts.is_empty() {
            return Err(format_conflict_error(&inspection.conflicts));
        }
        if args.with_default_packs {
            for id in ensure_missing_singletons(client, &inspection.covered).await? {
                if !recipe_pack_id_exists(&pack_ids, &id) {
                    pack_ids.push(id);
                }
            }
        }
    } else if args.with_default_packs {
        pack_ids = create_singleton_recipe_packs(client).await?;
    }

    let environment = EnvironmentResource {
        location: Some(LOCATION_GLOBAL.to_string()),
        properties: EnvironmentProperties {
            compute: Some(KubernetesCompute::new(&args.namespace)),
            recipe_packs: (!pack_ids.is_empty()).then_some(pack_ids),
            ..Default::default()
        },
        ..Default::default()
    };
    let id = resource_id_in_scope(scope, ENVIRONMENTS, &args.name);
    client.create_or_update_environment(&id, &environment).await?;

    async_writeln!(
        output,
        "Successfully created environment \"{}\" in resource group \"{group}\"",
        args.name
    )?;
    Ok(())
}

/// Lists the environments of the client's resource group, or of every group
/// in its plane when `all_groups` is set.
pub async fn list(
    all_groups: bool,
    client: &dyn ManagementClient,
    output: &mut OutputFile,
    format: OutputFormat,
) -> RadCliResult<()> {
    let environments = if all_groups {
        client.list_environments_all().await?
    } else {
        client.list_environments().await?
    };
    write_list(output, format, &environments).await
}

pub async fn show(
    name: &str,
    scope: &str,
    client: &dyn ManagementClient,
    output: &mut OutputFile,
    format: OutputFormat,
) -> RadCliResult<()> {
    let id = resource_id_in_scope(scope, ENVIRONMENTS, name);
    let environment = match client.get_environment(&id).await {
        Ok(environment) => environment,
        Err(e) if e.is_not_found() => {
            return Err(RadCliError::GenericError(format!(
                "The environment \"{name}\" could not be found in resource group \"{}\".",
                ResourceId::parse_scope(scope)?.name()
            )));
        }
        Err(e) => return Err(e.into()),
    };
    write_object(output, format, &environment).await
}

pub async fn switch(
    name: &str,
    workspace: &Workspace,
    config_path: &Path,
    client: &dyn ManagementClient,
    output: &mut OutputFile,
) -> RadCliResult<()> {
    if !workspace.is_editable() {
        return Err(RadCliError::generic(
            "No editable workspace set. Run `rad workspace create` and try again.",
        ));
    }

    let environment = match client.get_environment(name).await {
        Ok(environment) => environment,
        Err(e) if e.is_not_found() => {
            return Err(RadCliError::GenericError(format!(
                "Unable to switch environments as requested environment {name} does not exist."
            )));
        }
        Err(e) => return Err(e.into()),
    };

    let current = workspace.environment_name()?;
    if current.is_some_and(|c| c.eq_ignore_ascii_case(name)) {
        async_writeln!(output, "Default environment is already set to {name}")?;
        return Ok(());
    }

    let id = match environment.id {
        Some(id) => id,
        None => {
            let scope = workspace.scope.as_deref().unwrap_or_default();
            resource_id_in_scope(scope, ENVIRONMENTS, name)
        }
    };

    async_writeln!(output, "Switching default environment to {name}")?;

    let workspace_name = workspace.name.clone();
    edit_workspaces(config_path, |section| {
        let entry = section.items.get_mut(&workspace_name).ok_or_else(|| {
            RadCliError::GenericError(format!("the workspace '{workspace_name}' does not exist"))
        })?;
        entry.environment = Some(id);
        Ok(())
    })
    .await?;
    Ok(())
}

pub async fn delete(
    name: &str,
    scope: &str,
    yes: bool,
    client: &dyn ManagementClient,
    prompter: &dyn Prompter,
    output: &mut OutputFile,
) -> RadCliResult<()> {
    let message = format!("Are you sure you want to delete the environment '{name}'?");
    if !confirm_unless(yes, prompter, &message)? {
        return Ok(());
    }

    let id = resource_id_in_scope(scope, ENVIRONMENTS, name);
    if client.delete_environment(&id).await? {
        async_writeln!(output, "Environment deleted")?;
    } else {
        async_writeln!(
            output,
            "Environment '{name}' does not exist or has already been deleted."
        )?;
    }
    Ok(())
}
