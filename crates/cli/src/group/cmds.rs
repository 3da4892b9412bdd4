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

use ::ucp::ManagementClient;
use ::ucp::cli::{OutputFormat, RadCliError, RadCliResult};
use ::ucp::models::{LOCATION_GLOBAL, ResourceGroupResource};
use ::ucp::resource_id::resource_group_scope;

use crate::async_writeln;
use crate::config::{Workspace, edit_workspaces};
use crate::output::{OutputFile, write_list, write_object};
use crate::prompt::{Prompter, confirm_unless};
use crate::validation::LOCAL_PLANE;

pub async fn create(
    group: &str,
    workspace: &Workspace,
    client: &dyn ManagementClient,
    output: &mut OutputFile,
) -> RadCliResult<()> {
    async_writeln!(
        output,
        "creating resource group \"{group}\" in workspace \"{}\"...",
        workspace.display_name()
    )?;

    let resource = ResourceGroupResource {
        location: Some(LOCATION_GLOBAL.to_string()),
        ..Default::default()
    };
    client
        .create_or_update_resource_group(LOCAL_PLANE, group, &resource)
        .await?;

    async_writeln!(output, "resource group \"{group}\" created")?;
    Ok(())
}

pub async fn list(
    client: &dyn ManagementClient,
    output: &mut OutputFile,
    format: OutputFormat,
) -> RadCliResult<()> {
    let groups = client.list_resource_groups(LOCAL_PLANE).await?;
    write_list(output, format, &groups).await
}

pub async fn show(
    group: &str,
    client: &dyn ManagementClient,
    output: &mut OutputFile,
    format: OutputFormat,
) -> RadCliResult<()> {
    let resource = client.get_resource_group(LOCAL_PLANE, group).await?;
    write_object(output, format, &resource).await
}

pub async fn switch(
    group: &str,
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

    match client.get_resource_group(LOCAL_PLANE, group).await {
        Ok(_) => {}
        Err(e) if e.is_not_found() => {
            return Err(RadCliError::GenericError(format!(
                "Resource group \"{group}\" does not exist. Run `rad env create` try again."
            )));
        }
        Err(e) => return Err(e.into()),
    }

    async_writeln!(output, "Switching default resource group to {group}")?;

    let name = workspace.name.clone();
    let scope = resource_group_scope(LOCAL_PLANE, group);
    edit_workspaces(config_path, |section| {
        let entry = section.items.get_mut(&name).ok_or_else(|| {
            RadCliError::GenericError(format!("the workspace '{name}' does not exist"))
        })?;
        entry.scope = Some(scope);
        Ok(())
    })
    .await?;
    Ok(())
}

pub async fn delete(
    group: &str,
    yes: bool,
    client: &dyn ManagementClient,
    prompter: &dyn Prompter,
    output: &mut OutputFile,
) -> RadCliResult<()> {
    let resources = match client.list_resources_in_resource_group(LOCAL_PLANE, group).await {
        Ok(resources) => resources,
        Err(e) if e.is_not_found() => Vec::new(),
        Err(e) => {
            return Err(RadCliError::GenericError(format!(
                "unable to verify resource group contents: {e}"
            )));
        }
    };

    let message = if resources.is_empty() {
        format!(
            "The resource group {group} is empty. Are you sure you want to delete the resource group?"
        )
    } else {
        format!(
            "The resource group {group} contains deployed resources. Are you sure you want to delete the resource group and its resources?"
        )
    };
    if !confirm_unless(yes, prompter, &message)? {
        async_writeln!(output, "Resource group \"{group}\" NOT deleted")?;
        return Ok(());
    }

    async_writeln!(output, "Deleting resource group {group}...")?;
    if client.delete_resource_group(LOCAL_PLANE, group).await? {
        async_writeln!(output, "Resource group {group} deleted.")?;
    } else {
        async_writeln!(
            output,
            "Resource group {group} does not exist or has already been deleted."
        )?;
    }
    Ok(())
}
