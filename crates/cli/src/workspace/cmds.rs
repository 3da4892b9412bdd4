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

use ::ucp::cli::{OutputFormat, RadCliError, RadCliResult};
use ::ucp::resource_id::{resource_group_scope, resource_id_in_scope};
use ::ucp::resource_types::ENVIRONMENTS;
use serde::Serialize;

use super::args::{CreateKubernetesWorkspace, SwitchWorkspace};
use crate::async_writeln;
use crate::config::{
    ConfigFile, ConfigHolder, Connection, FALLBACK_SCOPE, Workspace, edit_workspaces,
};
use crate::connections::{ConnectionFactory, current_kube_context, require_kube_context};
use crate::output::{Column, OutputFile, Tabular, write_list, write_object};
use crate::prompt::{Prompter, confirm_unless};
use crate::validation::LOCAL_PLANE;

/// What `workspace list/show` print. Unlike the config file, this
/// carries the name and where the workspace came from.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceView {
    pub name: String,
    pub connection: Connection,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_application: Option<String>,
    pub source: String,
}

impl From<&Workspace> for WorkspaceView {
    fn from(ws: &Workspace) -> WorkspaceView {
        WorkspaceView {
            name: ws.display_name().to_string(),
            connection: ws.connection.clone(),
            environment: ws.environment.clone(),
            scope: ws.scope.clone(),
            default_application: ws.default_application.clone(),
            source: ws.source.to_string(),
        }
    }
}

impl Tabular for WorkspaceView {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::<Self>::new("WORKSPACE", |w| w.name.clone()),
            Column::<Self>::new("KIND", |_| "kubernetes".to_string()),
            Column::<Self>::new("CONTEXT", |w| {
                let Connection::Kubernetes { context, .. } = &w.connection;
                if context.is_empty() {
                    "(current)".to_string()
                } else {
                    context.clone()
                }
            }),
            Column::<Self>::new("ENVIRONMENT", |w| w.environment.clone().unwrap_or_default()),
        ]
    }
}

/// Looks up a named workspace in the config file.
pub fn find(config: &ConfigFile, name: &str) -> RadCliResult<Workspace> {
    Ok(config
        .workspaces
        .get_workspace(Some(name))?
        .unwrap_or_else(Workspace::fallback))
}

pub async fn create_kubernetes(
    args: CreateKubernetesWorkspace,
    name: &str,
    config_holder: &ConfigHolder,
    connections: &dyn ConnectionFactory,
    output: &mut OutputFile,
) -> RadCliResult<()> {
    let name = name.to_lowercase();
    let context = match args.context.as_deref() {
        Some(context) => require_kube_context(Some(context), None)?,
        None => require_kube_context(None, current_kube_context()?.as_deref())?,
    };

    let scope = match args.group.as_deref() {
        Some(group) => resource_group_scope(LOCAL_PLANE, group),
        None => FALLBACK_SCOPE.to_string(),
    };
    let mut workspace = Workspace {
        name: name.clone(),
        connection: Connection::kubernetes(&context),
        scope: Some(scope.clone()),
        ..Default::default()
    };

    if let Some(group) = args.group.as_deref() {
        let client = connections.management_client(&workspace)?;
        match client.get_resource_group(LOCAL_PLANE, group).await {
            Ok(_) => {}
            Err(e) if e.is_not_found() => {
                return Err(RadCliError::GenericError(format!(
                    "The resource group \"{group}\" does not exist. Run `rad group create` and try again."
                )));
            }
            Err(e) => return Err(e.into()),
        }

        if let Some(environment) = args.environment.as_deref() {
            let environment_id = resource_id_in_scope(&scope, ENVIRONMENTS, environment);
            match client.get_environment(&environment_id).await {
                Ok(_) => {}
                Err(e) if e.is_not_found() => {
                    return Err(RadCliError::GenericError(format!(
                        "The environment \"{environment}\" does not exist in resource group \"{group}\". Run `rad env create` and try again."
                    )));
                }
                Err(e) => return Err(e.into()),
            }
            workspace.environment = Some(environment_id);
        }
    }

    let force = args.force;
    edit_workspaces(&config_holder.path, |section| {
        if section.items.contains_key(&name) && !force {
            return Err(RadCliError::GenericError(format!(
                "the workspace '{name}' already exists, use `--force` to overwrite it"
            )));
        }
        section.items.insert(name.clone(), workspace);
        section.default = Some(name.clone());
        Ok(())
    })
    .await?;

    async_writeln!(
        output,
        "Default workspace set to \"{name}\" using Kubernetes context \"{context}\""
    )?;
    Ok(())
}

pub async fn list(
    config: &ConfigFile,
    output: &mut OutputFile,
    format: OutputFormat,
) -> RadCliResult<()> {
    let views = config
        .workspaces
        .items
        .values()
        .map(WorkspaceView::from)
        .collect::<Vec<_>>();
    write_list(output, format, &views).await
}

pub async fn show(
    workspace: &Workspace,
    output: &mut OutputFile,
    format: OutputFormat,
) -> RadCliResult<()> {
    write_object(output, format, &WorkspaceView::from(workspace)).await
}

pub async fn switch(
    args: SwitchWorkspace,
    config_holder: &ConfigHolder,
    output: &mut OutputFile,
) -> RadCliResult<()> {
    let name = args.name.to_lowercase();
    if config_holder.config.workspaces.default.as_deref() == Some(name.as_str()) {
        async_writeln!(output, "Default workspace is already set to {name}")?;
        return Ok(());
    }

    edit_workspaces(&config_holder.path, |section| {
        if !section.items.contains_key(&name) {
            return Err(RadCliError::GenericError(format!(
                "the workspace '{name}' does not exist. use `rad init` or `rad workspace create` and try again"
            )));
        }
        section.default = Some(name.clone());
        Ok(())
    })
    .await?;

    async_writeln!(output, "Switching default workspace to {name}")?;
    Ok(())
}

pub async fn delete(
    yes: bool,
    workspace: &Workspace,
    config_holder: &ConfigHolder,
    prompter: &dyn Prompter,
    output: &mut OutputFile,
) -> RadCliResult<()> {
    if !workspace.is_editable() {
        return Err(RadCliError::generic(
            "no workspace is configured, there is nothing to delete",
        ));
    }

    let name = workspace.name.clone();
    let message = format!("Are you sure you want to delete workspace '{name}'?");
    if !confirm_unless(yes, prompter, &message)? {
        return Ok(());
    }

    edit_workspaces(&config_holder.path, |section| {
        section.items.remove(&name);
        if section.default.as_deref() == Some(name.as_str()) {
            section.default = None;
        }
        Ok(())
    })
    .await?;

    async_writeln!(output, "Workspace {name} deleted.")?;
    Ok(())
}
