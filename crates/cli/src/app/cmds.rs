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
use ::ucp::models::{ApplicationProperties, ApplicationResource, LOCATION_GLOBAL};
use ::ucp::resource_id::resource_id_in_scope;
use ::ucp::resource_types::APPLICATIONS;

use crate::async_writeln;
use crate::config::{Workspace, edit_workspaces};
use crate::output::{OutputFile, write_list, write_object};
use crate::prompt::{Prompter, confirm_unless};

pub async fn create(
    name: &str,
    scope: &str,
    environment: &str,
    client: &dyn ManagementClient,
    output: &mut OutputFile,
) -> RadCliResult<()> {
    let application = ApplicationResource {
        location: Some(LOCATION_GLOBAL.to_string()),
        properties: ApplicationProperties {
            environment: environment.to_string(),
            ..Default::default()
        },
        ..Default::default()
    };
    let id = resource_id_in_scope(scope, APPLICATIONS, name);
    client.create_or_update_application(&id, &application).await?;

    async_writeln!(output, "Application {name} created")?;
    Ok(())
}

pub async fn list(
    client: &dyn ManagementClient,
    output: &mut OutputFile,
    format: OutputFormat,
) -> RadCliResult<()> {
    let applications = client.list_applications().await?;
    write_list(output, format, &applications).await
}

pub async fn show(
    name: &str,
    scope: &str,
    client: &dyn ManagementClient,
    output: &mut OutputFile,
    format: OutputFormat,
) -> RadCliResult<()> {
    let id = resource_id_in_scope(scope, APPLICATIONS, name);
    let application = match client.get_application(&id).await {
        Ok(application) => application,
        Err(e) if e.is_not_found() => {
            return Err(RadCliError::GenericError(format!(
                "The application \"{name}\" could not be found."
            )));
        }
        Err(e) => return Err(e.into()),
    };
    write_object(output, format, &application).await
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

    if workspace
        .default_application
        .as_deref()
        .is_some_and(|current| current.eq_ignore_ascii_case(name))
    {
        async_writeln!(output, "Default application is already set to {name}")?;
        return Ok(());
    }

    match client.get_application(name).await {
        Ok(_) => {}
        Err(e) if e.is_not_found() => {
            return Err(RadCliError::GenericError(format!(
                "Unable to switch applications as the requested application {name} does not exist."
            )));
        }
        Err(e) => return Err(e.into()),
    }

    async_writeln!(output, "Switching default application to {name}")?;

    let workspace_name = workspace.name.clone();
    let application = name.to_string();
    edit_workspaces(config_path, |section| {
        let entry = section.items.get_mut(&workspace_name).ok_or_else(|| {
            RadCliError::GenericError(format!("the workspace '{workspace_name}' does not exist"))
        })?;
        entry.default_application = Some(application);
        Ok(())
    })
    .await?;
    Ok(())
}

pub async fn delete(
    name: &str,
    environment: &str,
    scope: &str,
    yes: bool,
    client: &dyn ManagementClient,
    prompter: &dyn Prompter,
    output: &mut OutputFile,
) -> RadCliResult<()> {
    let message = format!(
        "Are you sure you want to delete application '{name}' from environment '{environment}'?"
    );
    if !confirm_unless(yes, prompter, &message)? {
        return Ok(());
    }

    let id = resource_id_in_scope(scope, APPLICATIONS, name);
    if client.delete_application(&id).await? {
        async_writeln!(output, "Application {name} deleted")?;
    } else {
        async_writeln!(
            output,
            "Application '{name}' does not exist or has already been deleted."
        )?;
    }
    Ok(())
}
