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
use ::ucp::models::GenericResource;
use ::ucp::resource_id::{resource_group_scope, resource_id_in_scope};
use ::ucp::resource_types::{APPLICATIONS, ENVIRONMENTS};
use ::ucp::{ManagementClient, ResourceId};

use crate::async_writeln;
use crate::output::{OutputFile, write_list, write_object};
use crate::prompt::{Prompter, confirm_unless};
use crate::validation::LOCAL_PLANE;

#[derive(Clone, Debug, Default)]
pub struct ListFilter {
    pub resource_type: Option<String>,
    pub group: Option<String>,
    pub environment: Option<String>,
    pub application: Option<String>,
}

impl ListFilter {
    fn is_empty(&self) -> bool {
        self.resource_type.is_none()
            && self.group.is_none()
            && self.environment.is_none()
            && self.application.is_none()
    }
}

// what a name filter refers to
#[derive(Clone, Copy, Debug)]
enum Lookup {
    Environment,
    Application,
}

impl Lookup {
    fn label(self) -> &'static str {
        match self {
            Lookup::Environment => "environment",
            Lookup::Application => "application",
        }
    }

    fn resource_type(self) -> &'static str {
        match self {
            Lookup::Environment => ENVIRONMENTS,
            Lookup::Application => APPLICATIONS,
        }
    }
}

fn not_found(kind: &str, name: &str, workspace: &str) -> RadCliError {
    RadCliError::GenericError(format!(
        "The {kind} \"{name}\" could not be found in workspace \"{workspace}\". Make sure you specify the correct {kind} with the appropriate flag."
    ))
}

fn group_of_id(id: &str) -> Option<String> {
    ResourceId::parse(id)
        .ok()
        .and_then(|id| id.find_scope("resourceGroups").map(str::to_string))
}

fn in_group(id: &str, group: &str) -> bool {
    group_of_id(id).is_some_and(|g| g.eq_ignore_ascii_case(group))
}

fn property_matches(resource: &GenericResource, property: &str, id: &str) -> bool {
    resource
        .properties
        .get(property)
        .and_then(serde_json::Value::as_str)
        .is_some_and(|value| value.eq_ignore_ascii_case(id))
}

struct Resolver<'a> {
    client: &'a dyn ManagementClient,
    plane: &'a str,
    scope: &'a str,
    group: Option<&'a str>,
    workspace: &'a str,
}

impl Resolver<'_> {
    // a name becomes an id in the filter group (or the workspace scope)
    // after checking it exists; an id only has to agree with --group
    async fn resolve(&self, lookup: Lookup, name: &str) -> RadCliResult<String> {
        if name.starts_with('/') {
            if let (Some(group), Some(id_group)) = (self.group, group_of_id(name)) {
                if id_group != group {
                    return Err(RadCliError::GenericError(format!(
                        "The provided {} ID targets resource group \"{id_group}\" but --group is set to \"{group}\".",
                        lookup.label()
                    )));
                }
            }
            return Ok(name.to_string());
        }

        let scope = match self.group {
            Some(group) => resource_group_scope(self.plane, group),
            None => self.scope.to_string(),
        };
        let id = resource_id_in_scope(&scope, lookup.resource_type(), name);
        let found = match lookup {
            Lookup::Environment => self.client.get_environment(&id).await.map(|_| ()),
            Lookup::Application => self.client.get_application(&id).await.map(|_| ()),
        };
        match found {
            Ok(()) => Ok(id),
            Err(e) if e.is_not_found() => Err(not_found(lookup.label(), name, self.workspace)),
            Err(e) => Err(e.into()),
        }
    }
}

pub async fn list(
    mut filter: ListFilter,
    scope: &str,
    workspace: &str,
    client: &dyn ManagementClient,
    output: &mut OutputFile,
    format: OutputFormat,
) -> RadCliResult<()> {
    let scope_id = ResourceId::parse_scope(scope)?;
    let plane = scope_id.plane_name().unwrap_or(LOCAL_PLANE).to_string();

    if filter.is_empty() {
        let group = scope_id.name().to_string();
        async_writeln!(
            output,
            "No filters specified. Listing all resources in workspace's active resource group \"{group}\""
        )?;
        filter.group = Some(group);
    }

    if let Some(group) = &filter.group {
        match client.get_resource_group(&plane, group).await {
            Ok(_) => {}
            Err(e) if e.is_not_found() => return Err(not_found("resource group", group, workspace)),
            Err(e) => return Err(e.into()),
        }
    }

    let resolver = Resolver {
        client,
        plane: &plane,
        scope,
        group: filter.group.as_deref(),
        workspace,
    };

    let environment_id = match &filter.environment {
        Some(name) => {
            let id = resolver.resolve(Lookup::Environment, name).await?;
            if let Some(group) = &filter.group {
                if !in_group(&id, group) {
                    return Err(RadCliError::GenericError(format!(
                        "Environment \"{name}\" not found in resource group \"{group}\"."
                    )));
                }
            }
            Some(id)
        }
        None => None,
    };

    let application_id = match &filter.application {
        Some(name) => {
            let id = resolver.resolve(Lookup::Application, name).await?;
            if let Some(group) = &filter.group {
                if !in_group(&id, group) {
                    return Err(RadCliError::GenericError(format!(
                        "Application \"{name}\" not found in resource group \"{group}\"."
                    )));
                }
            }
            if let Some(environment_id) = &environment_id {
                let application = client.get_application(&id).await?;
                if !application
                    .properties
                    .environment
                    .eq_ignore_ascii_case(environment_id)
                {
                    return Err(RadCliError::GenericError(format!(
                        "Application \"{name}\" does not belong to environment \"{}\".",
                        filter.environment.as_deref().unwrap_or_default()
                    )));
                }
            }
            Some(id)
        }
        None => None,
    };

    let resource_type = filter.resource_type.as_deref();
    let mut resources = match (
        filter.group.as_deref(),
        &environment_id,
        &application_id,
        resource_type,
    ) {
        (None, Some(environment_id), _, _) => match resource_type {
            Some(t) => {
                client
                    .list_resources_of_type_in_environment(environment_id, t)
                    .await?
            }
            None => client.list_resources_in_environment(environment_id).await?,
        },
        (None, None, Some(application_id), _) => match resource_type {
            Some(t) => {
                client
                    .list_resources_of_type_in_application(application_id, t)
                    .await?
            }
            None => client.list_resources_in_application(application_id).await?,
        },
        (None, None, None, Some(t)) => client.list_resources_of_type(t).await?,
        // --group, or no filter at all
        (group, _, _, _) => {
            let group = group.unwrap_or(scope_id.name());
            client
                .list_resources_in_resource_group(&plane, group)
                .await?
                .into_iter()
                .filter(|r| {
                    resource_type.is_none_or(|t| {
                        r.resource_type
                            .as_deref()
                            .is_some_and(|rt| rt.eq_ignore_ascii_case(t))
                    })
                })
                .filter(|r| {
                    environment_id
                        .as_deref()
                        .is_none_or(|id| property_matches(r, "environment", id))
                })
                .collect()
        }
    };

    if let Some(application_id) = &application_id {
        resources.retain(|r| property_matches(r, "application", application_id));
    }

    write_list(output, format, &resources).await
}

pub async fn show(
    resource_type: &str,
    name: &str,
    client: &dyn ManagementClient,
    output: &mut OutputFile,
    format: OutputFormat,
) -> RadCliResult<()> {
    let resource = match client.get_resource(resource_type, name).await {
        Ok(resource) => resource,
        Err(e) if e.is_not_found() => {
            return Err(RadCliError::GenericError(format!(
                "The resource \"{name}\" of type \"{resource_type}\" could not be found."
            )));
        }
        Err(e) => return Err(e.into()),
    };
    write_object(output, format, &resource).await
}

pub async fn delete(
    resource_type: &str,
    name: &str,
    yes: bool,
    client: &dyn ManagementClient,
    prompter: &dyn Prompter,
    output: &mut OutputFile,
) -> RadCliResult<()> {
    let message =
        format!("Are you sure you want to delete resource '{name}' of type '{resource_type}'?");
    if !confirm_unless(yes, prompter, &message)? {
        async_writeln!(output, "Resource \"{name}\" NOT deleted")?;
        return Ok(());
    }

    if client.delete_resource(resource_type, name).await? {
        async_writeln!(output, "Resource deleted")?;
    } else {
        async_writeln!(
            output,
            "Resource '{name}' of type '{resource_type}' does not exist or has already been deleted."
        )?;
    }
    Ok(())
}
