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

//! Resource provider manifests, the YAML files `rad resource-type create`
//! reads:
//!
//! ```yaml
//! namespace: MyCompany.Resources
//! location:
//!   global: http://widgets.default.svc.cluster.local:8080
//! types:
//!   widgets:
//!     description: A widget
//!     capabilities: ["SupportsRecipes"]
//!     defaultApiVersion: 2025-01-01-preview
//!     apiVersions:
//!       2025-01-01-preview:
//!         schema:
//!           type: object
//!           properties:
//!             environment: { type: string }
//! ```

use std::collections::BTreeMap;
use std::future::Future;
use std::path::Path;
use std::time::Duration;

use ::ucp::cli::{RadCliError, RadCliResult};
use ::ucp::models::{
    ApiVersionProperties, ApiVersionResource, LOCATION_GLOBAL, LocationProperties,
    LocationResource, LocationResourceType, ResourceProviderResource, ResourceTypeProperties,
    ResourceTypeResource,
};
use ::ucp::{ManagementClient, UcpError};
use serde::Deserialize;
use serde_json::{Map, Value};

const INITIAL_BACKOFF: Duration = Duration::from_secs(2);
const MAX_ATTEMPTS: u32 = 5;

const SUPPORTED_SCHEMA_TYPES: &[&str] =
    &["string", "integer", "number", "boolean", "object", "array", "enum"];
const PROHIBITED_SCHEMA_KEYWORDS: &[&str] =
    &["allOf", "anyOf", "oneOf", "not", "discriminator"];

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceProvider {
    #[serde(alias = "name")]
    pub namespace: String,
    // one location per provider; missing means `global` with no address
    #[serde(default)]
    pub location: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub types: BTreeMap<String, ResourceType>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceType {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub capabilities: Vec<String>,
    #[serde(default)]
    pub default_api_version: Option<String>,
    #[serde(default)]
    pub api_versions: BTreeMap<String, ResourceTypeApiVersion>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ResourceTypeApiVersion {
    #[serde(default)]
    pub schema: Value,
}

impl ResourceProvider {
    /// The location name and its optional address.
    pub fn location(&self) -> (String, Option<String>) {
        match self.location.as_ref().and_then(|l| l.iter().next()) {
            Some((name, address)) if address.is_empty() => (name.clone(), None),
            Some((name, address)) => (name.clone(), Some(address.clone())),
            None => (LOCATION_GLOBAL.to_string(), None),
        }
    }
}

pub fn read_file(path: &Path) -> RadCliResult<ResourceProvider> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        RadCliError::GenericError(format!(
            "failed to read manifest file '{}': {e}",
            path.display()
        ))
    })?;
    parse(&text)
}

pub fn parse(text: &str) -> RadCliResult<ResourceProvider> {
    let provider: ResourceProvider = serde_yaml::from_str(text)?;
    validate(&provider)?;
    Ok(provider)
}

fn is_pascal_word(value: &str) -> bool {
    let mut chars = value.chars();
    chars.next().is_some_and(|c| c.is_ascii_uppercase()) && chars.all(|c| c.is_ascii_alphanumeric())
}

fn is_camel_word(value: &str) -> bool {
    let mut chars = value.chars();
    chars.next().is_some_and(|c| c.is_ascii_lowercase()) && chars.all(|c| c.is_ascii_alphanumeric())
}

// yyyy-mm-dd with an optional -preview suffix
fn is_api_version(value: &str) -> bool {
    let date = value.strip_suffix("-preview").unwrap_or(value);
    let parts: Vec<&str> = date.split('-').collect();
    matches!(parts.as_slice(), [y, m, d]
        if y.len() == 4 && m.len() == 2 && d.len() == 2
            && parts.iter().all(|p| p.chars().all(|c| c.is_ascii_digit())))
}

/// Checks names and schemas. Every problem is reported, one per line.
pub fn validate(provider: &ResourceProvider) -> RadCliResult<()> {
    let mut errors = Vec::new();

    match provider.namespace.split_once('.') {
        Some((company, group)) if is_pascal_word(company) && is_pascal_word(group) => {}
        _ => errors.push(format!(
            "'{}' is not a valid resource provider namespace, expected <Company>.<Group>",
            provider.namespace
        )),
    }

    for (type_name, resource_type) in &provider.types {
        if !is_camel_word(type_name) {
            errors.push(format!(
                "'{type_name}' is not a valid resource type name, expected camelCase"
            ));
        }
        for capability in &resource_type.capabilities {
            if !is_pascal_word(capability) {
                errors.push(format!("'{capability}' is not a valid capability"));
            }
        }
        for (version, api_version) in &resource_type.api_versions {
            let location = format!("{}/{type_name}@{version}", provider.namespace);
            if !is_api_version(version) {
                errors.push(format!("{location}: '{version}' is not a valid api version"));
            }
            let mut problems = Vec::new();
            validate_schema(&api_version.schema, "", &mut problems);
            errors.extend(problems.into_iter().map(|p| format!("{location}: {p}")));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(RadCliError::GenericError(format!(
            "the manifest is not valid:\n{}",
            errors.join("\n")
        )))
    }
}

/// Walks a schema collecting unsupported constructs. A null schema is
/// skipped.
pub fn validate_schema(schema: &Value, path: &str, problems: &mut Vec<String>) {
    let object = match schema {
        Value::Null => return,
        Value::Object(object) => object,
        _ => {
            problems.push(format!("{}: schema must be an object", display_path(path)));
            return;
        }
    };

    for keyword in PROHIBITED_SCHEMA_KEYWORDS {
        if object.contains_key(*keyword) {
            problems.push(format!("{}: {keyword} is not supported", display_path(path)));
        }
    }

    if let Some(reference) = object.get("$ref") {
        match reference.as_str() {
            Some(r) if r.starts_with("#/") => {}
            _ => problems.push(format!(
                "{}: external $ref references are not supported, only internal references starting with '#/' are allowed",
                display_path(path)
            )),
        }
    }

    if let Some(schema_type) = object.get("type") {
        match schema_type.as_str() {
            Some(t) if SUPPORTED_SCHEMA_TYPES.contains(&t) => {}
            Some(t) => problems.push(format!("{}: unsupported type: {t}", display_path(path))),
            None => problems.push(format!("{}: type must be a string", display_path(path))),
        }
    }

    if let Some(Value::Object(properties)) = object.get("properties") {
        for (name, property) in properties {
            validate_schema(property, &format!("{path}.{name}"), problems);
        }
    }
    if let Some(items) = object.get("items") {
        validate_schema(items, &format!("{path}[]"), problems);
    }
    if let Some(additional @ Value::Object(_)) = object.get("additionalProperties") {
        validate_schema(additional, &format!("{path}.*"), problems);
    }
}

fn display_path(path: &str) -> &str {
    if path.is_empty() { "$" } else { path }
}

/// Runs `operation`, retrying 409 conflicts with exponential backoff.
pub async fn retry_on_conflict<T, F, Fut>(what: &str, mut operation: F) -> RadCliResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, UcpError>>,
{
    let mut backoff = INITIAL_BACKOFF;
    let mut attempt = 1;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(e) if e.is_conflict() && attempt < MAX_ATTEMPTS => {
                tracing::info!(
                    %what,
                    attempt,
                    max_attempts = MAX_ATTEMPTS,
                    error = %e,
                    ?backoff,
                    "got a conflict, retrying"
                );
                tokio::time::sleep(backoff).await;
                backoff *= 2;
                attempt += 1;
            }
            Err(e) if e.is_conflict() => {
                return Err(RadCliError::GenericError(format!(
                    "exceeded {MAX_ATTEMPTS} retries, err: {e}"
                )));
            }
            Err(e) => return Err(e.into()),
        }
    }
}

fn location_type(resource_type: &ResourceType) -> LocationResourceType {
    LocationResourceType {
        api_versions: resource_type
            .api_versions
            .keys()
            .map(|v| (v.clone(), Map::new()))
            .collect(),
    }
}

async fn create_type(
    client: &dyn ManagementClient,
    plane: &str,
    namespace: &str,
    type_name: &str,
    resource_type: &ResourceType,
) -> RadCliResult<()> {
    tracing::info!(%namespace, %type_name, "creating resource type");
    let resource = ResourceTypeResource {
        properties: ResourceTypeProperties {
            capabilities: resource_type.capabilities.clone(),
            default_api_version: resource_type.default_api_version.clone(),
            description: resource_type.description.clone(),
        },
        ..Default::default()
    };
    retry_on_conflict("resource type", || {
        client.create_or_update_resource_type(plane, namespace, type_name, &resource)
    })
    .await?;

    for (version, api_version) in &resource_type.api_versions {
        tracing::info!(%namespace, %type_name, %version, "creating api version");
        let resource = ApiVersionResource {
            properties: ApiVersionProperties {
                schema: api_version.schema.clone(),
            },
        };
        retry_on_conflict("api version", || {
            client.create_or_update_api_version(plane, namespace, type_name, version, &resource)
        })
        .await?;
    }
    Ok(())
}

/// Registers a whole provider: the provider, each type with its api
/// versions, then the location listing all of them.
pub async fn register_provider(
    client: &dyn ManagementClient,
    plane: &str,
    provider: &ResourceProvider,
) -> RadCliResult<()> {
    let (location_name, address) = provider.location();
    let resource = ResourceProviderResource {
        location: Some(location_name.clone()),
        ..Default::default()
    };
    retry_on_conflict("resource provider", || {
        client.create_or_update_resource_provider(plane, &provider.namespace, &resource)
    })
    .await?;

    let mut location = LocationResource {
        properties: LocationProperties {
            address,
            resource_types: BTreeMap::new(),
        },
    };
    for (type_name, resource_type) in &provider.types {
        create_type(client, plane, &provider.namespace, type_name, resource_type).await?;
        location
            .properties
            .resource_types
            .insert(type_name.clone(), location_type(resource_type));
    }

    retry_on_conflict("location", || {
        client.create_or_update_location(plane, &provider.namespace, &location_name, &location)
    })
    .await?;
    Ok(())
}

/// Registers one type of a provider, keeping the types the provider
/// already has in its location.
pub async fn register_type(
    client: &dyn ManagementClient,
    plane: &str,
    provider: &ResourceProvider,
    type_name: &str,
) -> RadCliResult<()> {
    let resource_type = provider.types.get(type_name).ok_or_else(|| {
        RadCliError::GenericError(format!(
            "type {type_name} not found in manifest for {}",
            provider.namespace
        ))
    })?;

    let existing = match client
        .get_resource_provider_summary(plane, &provider.namespace)
        .await
    {
        Ok(summary) => Some(summary),
        Err(e) if e.is_not_found() => None,
        Err(e) => return Err(e.into()),
    };

    let (location_name, address) = provider.location();
    let mut location = LocationResource {
        properties: LocationProperties {
            address,
            resource_types: BTreeMap::new(),
        },
    };

    match existing {
        Some(summary) => {
            for (name, summary_type) in summary.resource_types {
                location.properties.resource_types.insert(
                    name,
                    LocationResourceType {
                        api_versions: summary_type
                            .api_versions
                            .into_keys()
                            .map(|v| (v, Map::new()))
                            .collect(),
                    },
                );
            }
        }
        None => {
            let resource = ResourceProviderResource {
                location: Some(location_name.clone()),
                ..Default::default()
            };
            retry_on_conflict("resource provider", || {
                client.create_or_update_resource_provider(plane, &provider.namespace, &resource)
            })
            .await?;
        }
    }

    create_type(client, plane, &provider.namespace, type_name, resource_type).await?;
    location
        .properties
        .resource_types
        .insert(type_name.to_string(), location_type(resource_type));

    retry_on_conflict("location", || {
        client.create_or_update_location(plane, &provider.namespace, &location_name, &location)
    })
    .await?;
    Ok(())
}
