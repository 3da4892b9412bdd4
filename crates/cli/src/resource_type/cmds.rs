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
use ::ucp::models::{ResourceProviderSummary, ResourceTypeSummary};
use serde::Serialize;

use super::manifest;
use crate::async_writeln;
use crate::output::{Column, OutputFile, Tabular, write_list, write_object};
use crate::prompt::{Prompter, confirm_unless};
use crate::validation::LOCAL_PLANE;

/// One resource type of a provider summary.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceTypeView {
    pub name: String,
    pub resource_provider_namespace: String,
    pub api_versions: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub capabilities: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ResourceTypeView {
    fn new(namespace: &str, type_name: &str, summary: &ResourceTypeSummary) -> ResourceTypeView {
        ResourceTypeView {
            name: format!("{namespace}/{type_name}"),
            resource_provider_namespace: namespace.to_string(),
            api_versions: summary.api_versions.keys().cloned().collect(),
            capabilities: summary.capabilities.clone(),
            description: summary.description.clone(),
        }
    }
}

impl Tabular for ResourceTypeView {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::<Self>::new("TYPE", |t| t.name.clone()),
            Column::<Self>::new("NAMESPACE", |t| t.resource_provider_namespace.clone()),
            Column::<Self>::new("APIVERSION", |t| t.api_versions.join(", ")),
        ]
    }
}

fn views_of(summary: &ResourceProviderSummary) -> impl Iterator<Item = ResourceTypeView> + '_ {
    summary
        .resource_types
        .iter()
        .map(|(name, t)| ResourceTypeView::new(&summary.name, name, t))
}

/// Splits `Namespace/type`.
pub fn split_resource_type(resource_type: &str) -> RadCliResult<(&str, &str)> {
    match resource_type.split_once('/') {
        Some((namespace, name)) if !namespace.is_empty() && !name.is_empty() && !name.contains('/') => {
            Ok((namespace, name))
        }
        _ => Err(RadCliError::GenericError(format!(
            "'{resource_type}' is not a valid resource type. Expected <Namespace>/<type>, like `MyCompany.Resources/widgets`"
        ))),
    }
}

pub async fn list(
    client: &dyn ManagementClient,
    output: &mut OutputFile,
    format: OutputFormat,
) -> RadCliResult<()> {
    let summaries = client.list_resource_provider_summaries(LOCAL_PLANE).await?;
    let views: Vec<ResourceTypeView> = summaries.iter().flat_map(views_of).collect();
    write_list(output, format, &views).await
}

fn type_not_found(resource_type: &str) -> RadCliError {
    RadCliError::GenericError(format!(
        "The resource type \"{resource_type}\" was not found or has been deleted."
    ))
}

pub async fn show(
    resource_type: &str,
    client: &dyn ManagementClient,
    output: &mut OutputFile,
    format: OutputFormat,
) -> RadCliResult<()> {
    let (namespace, type_name) = split_resource_type(resource_type)?;
    let summary = match client
        .get_resource_provider_summary(LOCAL_PLANE, namespace)
        .await
    {
        Ok(summary) => summary,
        Err(e) if e.is_not_found() => return Err(type_not_found(resource_type)),
        Err(e) => return Err(e.into()),
    };

    let view = summary
        .resource_types
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(type_name))
        .map(|(name, t)| ResourceTypeView::new(&summary.name, name, t))
        .ok_or_else(|| type_not_found(resource_type))?;
    write_object(output, format, &view).await
}

pub async fn create(
    type_name: Option<&str>,
    path: &Path,
    client: &dyn ManagementClient,
    output: &mut OutputFile,
) -> RadCliResult<()> {
    let provider = manifest::read_file(path)?;

    match type_name {
        Some(type_name) => {
            manifest::register_type(client, LOCAL_PLANE, &provider, type_name).await?;
            async_writeln!(
                output,
                "Resource type {}/{type_name} created.",
                provider.namespace
            )?;
        }
        None => {
            manifest::register_provider(client, LOCAL_PLANE, &provider).await?;
            async_writeln!(
                output,
                "Resource provider {} registered with {} resource type(s).",
                provider.namespace,
                provider.types.len()
            )?;
        }
    }
    Ok(())
}

pub async fn delete(
    resource_type: &str,
    yes: bool,
    client: &dyn ManagementClient,
    prompter: &dyn Prompter,
    output: &mut OutputFile,
) -> RadCliResult<()> {
    let (namespace, type_name) = split_resource_type(resource_type)?;

    let message = format!("Are you sure you want to delete resource type '{resource_type}'?");
    if !confirm_unless(yes, prompter, &message)? {
        async_writeln!(output, "Resource type \"{resource_type}\" NOT deleted")?;
        return Ok(());
    }

    if client
        .delete_resource_type(LOCAL_PLANE, namespace, type_name)
        .await?
    {
        async_writeln!(output, "Resource type {resource_type} deleted.")?;
    } else {
        async_writeln!(
            output,
            "Resource type '{resource_type}' does not exist or has already been deleted."
        )?;
    }
    Ok(())
}
