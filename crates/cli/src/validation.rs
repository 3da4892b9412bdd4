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

//! Resolution of the workspace, scope, environment, application and
//! resource type a command operates on. Flags win over positional
//! arguments only where both cannot be given together.

use ::ucp::ResourceId;
use ::ucp::cli::{RadCliError, RadCliResult};
use ::ucp::resource_id::{resource_group_scope, resource_id_in_scope};
use ::ucp::resource_types::{ENVIRONMENTS, RESOURCE_TYPES_LIST, find_by_short_name};

use crate::config::{ConfigFile, DirectoryConfig, Workspace};

pub const LOCAL_PLANE: &str = "local";

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

pub fn require_workspace(
    config: &ConfigFile,
    directory_config: Option<&DirectoryConfig>,
    name: Option<&str>,
) -> RadCliResult<Workspace> {
    let mut workspace = config
        .workspaces
        .get_workspace(name)?
        .unwrap_or_else(Workspace::fallback);

    if non_empty(workspace.default_application.as_deref()).is_none() {
        if let Some(application) = directory_config.and_then(DirectoryConfig::application) {
            workspace.default_application = Some(application.to_string());
        }
    }
    Ok(workspace)
}

/// `-g` wins, then the workspace scope.
pub fn require_scope(group: Option<&str>, workspace: &Workspace) -> RadCliResult<String> {
    if let Some(group) = non_empty(group) {
        return Ok(resource_group_scope(LOCAL_PLANE, group));
    }
    non_empty(workspace.scope.as_deref())
        .map(str::to_string)
        .ok_or_else(|| {
            RadCliError::generic(
                "No resource group set, use `--group` to pass in a resource group name.",
            )
        })
}

pub fn require_environment_name(
    arg: Option<&str>,
    flag: Option<&str>,
    workspace: &Workspace,
) -> RadCliResult<String> {
    let mut name = non_empty(flag).map(str::to_string);
    if let Some(arg) = non_empty(arg) {
        if name.is_some() {
            return Err(RadCliError::generic(
                "cannot specify environment name via both arguments and `-e`",
            ));
        }
        name = Some(arg.to_string());
    }

    if name.is_none() {
        name = workspace.environment_name()?;
    }

    match name {
        Some(name) => Ok(name),
        None if workspace.is_editable() => Err(RadCliError::generic(
            "no environment name provided and no default environment set, either pass in an environment name or set a default environment by using `rad env switch`",
        )),
        None => Err(RadCliError::generic(
            "no environment name provided, pass in an environment name",
        )),
    }
}

/// Full environment id from `-e` (a name in `scope`, or an id), else the
/// workspace environment.
pub fn require_environment_id(
    flag: Option<&str>,
    scope: &str,
    workspace: &Workspace,
) -> RadCliResult<String> {
    if let Some(environment) = non_empty(flag) {
        if environment.starts_with('/') {
            return Ok(ResourceId::parse(environment)?.to_string());
        }
        return Ok(resource_id_in_scope(scope, ENVIRONMENTS, environment));
    }
    // validates the name first so the message matches the name lookup
    require_environment_name(None, None, workspace)?;
    non_empty(workspace.environment.as_deref())
        .map(str::to_string)
        .ok_or_else(|| RadCliError::generic("no environment name provided"))
}

/// `-a`, then the positional argument, then the workspace (or directory)
/// default application.
pub fn require_application(
    arg: Option<&str>,
    flag: Option<&str>,
    workspace: &Workspace,
) -> RadCliResult<String> {
    let mut name = non_empty(flag).map(str::to_string);
    if let Some(arg) = non_empty(arg) {
        if name.is_some() {
            return Err(RadCliError::generic(
                "cannot specify application name via both arguments and `-a`",
            ));
        }
        name = Some(arg.to_string());
    }

    let name = name
        .or_else(|| non_empty(workspace.default_application.as_deref()).map(str::to_string))
        .ok_or_else(|| {
            RadCliError::generic(
                "no application name provided and no default application set, either pass in an application name or set a default application by using `rad application switch`",
            )
        })?;

    if name.ends_with(".bicep") {
        return Err(RadCliError::GenericError(format!(
            "'{name}' is a file name, not an application name. Pass the application name instead"
        )));
    }
    Ok(name)
}

pub fn require_resource_group(arg: Option<&str>, flag: Option<&str>) -> RadCliResult<String> {
    let mut name = non_empty(flag).map(str::to_string);
    if let Some(arg) = non_empty(arg) {
        if name.is_some() {
            return Err(RadCliError::generic(
                "cannot specify resource group name via both arguments and `-g`",
            ));
        }
        name = Some(arg.to_string());
    }
    name.ok_or_else(|| RadCliError::generic("resource group name is not provided or is empty"))
}

pub fn require_recipe_name(arg: Option<&str>) -> RadCliResult<String> {
    non_empty(arg)
        .map(str::to_string)
        .ok_or_else(|| RadCliError::generic("no recipe name provided"))
}

/// Accepts `Namespace/type` as-is, or a short name from the well-known list.
pub fn require_resource_type(resource_type: &str) -> RadCliResult<String> {
    if let Some((namespace, name)) = resource_type.split_once('/') {
        if !namespace.is_empty() && !name.is_empty() {
            return Ok(resource_type.to_string());
        }
    }
    if let Some(known) = find_by_short_name(resource_type) {
        return Ok(known.to_string());
    }

    let available = RESOURCE_TYPES_LIST
        .iter()
        .filter_map(|t| t.split_once('/').map(|(_, name)| name))
        .collect::<Vec<_>>()
        .join("\n");
    Err(RadCliError::GenericError(format!(
        "'{resource_type}' is not a valid resource type. Available Types are: \n\n{available}\n"
    )))
}

pub fn require_resource_type_and_name(args: &[String]) -> RadCliResult<(String, String)> {
    match args {
        [resource_type, name, ..] => Ok((require_resource_type(resource_type)?, name.clone())),
        _ => Err(RadCliError::generic("No resource type or name provided")),
    }
}
