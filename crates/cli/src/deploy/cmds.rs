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

//! Client-side deployment of ARM JSON templates: the template is evaluated
//! locally and each resource is PUT to the control plane in dependency
//! order. The state returned for a resource is what later `reference()`
//! expressions see.

use std::collections::BTreeMap;
use std::path::PathBuf;

use ::armtemplate::{DeploymentEvaluator, DeploymentTemplate, TemplateError, TemplateOptions};
use ::ucp::cli::{RadCliError, RadCliResult};
use ::ucp::models::{ApplicationProperties, ApplicationResource, GenericResource, LOCATION_GLOBAL};
use ::ucp::{ManagementClient, ResourceId};
use serde_json::{Map, Value};

use crate::async_writeln;
use crate::output::OutputFile;
use crate::parameters::Parameters;

const ENVIRONMENT_PARAMETER: &str = "environment";
const APPLICATION_PARAMETER: &str = "application";

pub struct DeployRequest {
    pub file: PathBuf,
    pub parameters: Parameters,
    pub scope: String,
    pub environment_id: String,
    pub application_id: Option<String>,
    pub workspace: String,
}

fn template_error(e: TemplateError) -> RadCliError {
    RadCliError::GenericError(e.to_string())
}

// the declared spelling of a parameter name
fn declared<'a>(template: &'a DeploymentTemplate, name: &str) -> Option<&'a str> {
    template
        .parameters
        .keys()
        .find(|declared| declared.eq_ignore_ascii_case(name))
        .map(String::as_str)
}

fn provided(parameters: &Parameters, name: &str) -> bool {
    parameters
        .keys()
        .any(|provided| provided.eq_ignore_ascii_case(name))
}

/// Fills the `environment` and `application` parameters from the command
/// line when the template declares them and the user did not pass them.
pub fn inject_automatic_parameters(
    template: &DeploymentTemplate,
    parameters: &mut Parameters,
    environment_id: &str,
    application_id: Option<&str>,
) {
    let automatic = [
        (ENVIRONMENT_PARAMETER, Some(environment_id)),
        (APPLICATION_PARAMETER, application_id),
    ];
    for (name, value) in automatic {
        let (Some(value), Some(declared)) = (value, declared(template, name)) else {
            continue;
        };
        if !provided(parameters, name) {
            let mut wrapped = Map::new();
            wrapped.insert("value".to_string(), Value::String(value.to_string()));
            parameters.insert(declared.to_string(), wrapped);
        }
    }
}

/// Every declared parameter needs a provided value or a default.
pub fn report_missing_parameters(
    template: &DeploymentTemplate,
    parameters: &Parameters,
    file: &str,
) -> RadCliResult<()> {
    let mut errors = BTreeMap::new();
    for (name, declaration) in &template.parameters {
        if provided(parameters, name) || declaration.contains_key("defaultValue") {
            continue;
        }
        let message = if name.eq_ignore_ascii_case(ENVIRONMENT_PARAMETER) {
            "The template requires an environment. Use --environment to specify the environment name.".to_string()
        } else if name.eq_ignore_ascii_case(APPLICATION_PARAMETER) {
            "The template requires an application. Use --application to specify the application name.".to_string()
        } else {
            format!(
                "The template requires a parameter \"{name}\". Use --parameters {name}=<value> to specify the value."
            )
        };
        errors.insert(name.clone(), message);
    }

    if errors.is_empty() {
        return Ok(());
    }
    let details = errors
        .values()
        .map(|message| format!("  - {message}"))
        .collect::<Vec<_>>()
        .join("\n");
    Err(RadCliError::GenericError(format!(
        "The template \"{file}\" could not be deployed because of the following errors:\n\n{details}"
    )))
}

// the state the evaluator sees for a deployed resource
fn deployed_state(resource: &GenericResource) -> RadCliResult<Value> {
    Ok(serde_json::to_value(resource)?)
}

pub async fn deploy(
    request: DeployRequest,
    client: &dyn ManagementClient,
    output: &mut OutputFile,
) -> RadCliResult<()> {
    let file = request.file.display().to_string();
    let text = tokio::fs::read_to_string(&request.file)
        .await
        .map_err(|e| RadCliError::GenericError(format!("failed to read template '{file}': {e}")))?;
    let template = armtemplate::parse(&text).map_err(|e| {
        RadCliError::GenericError(format!("'{file}' is not a valid deployment template: {e}"))
    })?;

    let mut parameters = request.parameters;
    inject_automatic_parameters(
        &template,
        &mut parameters,
        &request.environment_id,
        request.application_id.as_deref(),
    );
    report_missing_parameters(&template, &parameters, &file)?;

    let scope = ResourceId::parse_scope(&request.scope)?;
    let mut resource_group = Map::new();
    resource_group.insert("id".to_string(), Value::String(request.scope.clone()));
    resource_group.insert("name".to_string(), Value::String(scope.name().to_string()));
    let options = TemplateOptions {
        scope: request.scope.clone(),
        parameters,
        evaluate_properties: false,
        resource_group: Some(resource_group),
    };

    // properties stay unevaluated here; they are resolved one resource at a
    // time below, once the resources they reference exist
    let resources = armtemplate::eval(&template, &options).map_err(template_error)?;

    let environment = ResourceId::parse(&request.environment_id)?;
    async_writeln!(
        output,
        "Deploying template '{file}' into environment '{}' from workspace '{}'...",
        environment.name(),
        request.workspace
    )?;

    if let Some(application_id) = &request.application_id {
        let application = ApplicationResource {
            location: Some(LOCATION_GLOBAL.to_string()),
            properties: ApplicationProperties {
                environment: request.environment_id.clone(),
                ..Default::default()
            },
            ..Default::default()
        };
        client
            .create_application_if_not_found(application_id, &application)
            .await?;
    }

    let mut evaluator = DeploymentEvaluator::new(&template, &options);
    let mut deployed = Vec::with_capacity(resources.len());
    for resource in &resources {
        let body = evaluator
            .visit_value(&Value::Object(resource.body.clone()))
            .map_err(template_error)?;
        let mut payload: GenericResource = serde_json::from_value(body)?;
        payload.name = Some(resource.name.clone());
        payload.resource_type = Some(resource.resource_type.clone());
        if payload.location.is_none() {
            payload.location = Some(LOCATION_GLOBAL.to_string());
        }

        tracing::debug!(id = %resource.id, api_version = %resource.api_version, "deploying resource");
        let state = client
            .create_or_update_resource(&resource.resource_type, &resource.id, &payload)
            .await?;
        evaluator.record_deployed(&resource.id, deployed_state(&state)?);
        deployed.push(resource);
    }

    let outputs = evaluator.evaluate_outputs().map_err(template_error)?;

    async_writeln!(output, "Deployment Complete")?;
    async_writeln!(output)?;
    async_writeln!(output, "Resources:")?;
    for resource in deployed {
        async_writeln!(output, "    {:<30} {}", resource.name, resource.resource_type)?;
    }
    if !outputs.is_empty() {
        async_writeln!(output)?;
        async_writeln!(output, "Outputs:")?;
        for (name, value) in outputs {
            async_writeln!(output, "    {name}: {value}")?;
        }
    }
    Ok(())
}
