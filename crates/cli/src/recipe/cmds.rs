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
use ::ucp::models::{
    EnvironmentRecipe, EnvironmentResource, RecipeGetMetadataRequest, RecipeParameter,
    RecipeProperties,
};
use ::ucp::{ManagementClient, ResourceId};
use serde_json::{Map, Value};

use crate::async_writeln;
use crate::output::{OutputFile, write_list, write_object};
use crate::parameters::{self, Parameters};

const MISSING: &str = "-";

pub struct NewRecipe {
    pub name: String,
    pub resource_type: String,
    pub template_kind: String,
    pub template_path: String,
    pub template_version: Option<String>,
    pub parameters: Parameters,
    pub plain_http: bool,
}

fn environment_name(environment_id: &str) -> RadCliResult<String> {
    Ok(ResourceId::parse(environment_id)?.name().to_string())
}

pub async fn list(
    environment_id: &str,
    client: &dyn ManagementClient,
    output: &mut OutputFile,
    format: OutputFormat,
) -> RadCliResult<()> {
    let environment = client.get_environment(environment_id).await?;
    let recipes = environment_recipes(&environment);
    write_list(output, format, &recipes).await
}

pub fn environment_recipes(environment: &EnvironmentResource) -> Vec<EnvironmentRecipe> {
    environment
        .properties
        .recipes
        .iter()
        .flat_map(|(resource_type, recipes)| {
            recipes.iter().map(move |(name, recipe)| EnvironmentRecipe {
                name: name.clone(),
                resource_type: resource_type.clone(),
                template_kind: recipe.template_kind.clone(),
                template_path: recipe.template_path.clone(),
                template_version: recipe.template_version.clone().unwrap_or_default(),
            })
        })
        .collect()
}

pub async fn show(
    name: &str,
    resource_type: &str,
    environment_id: &str,
    client: &dyn ManagementClient,
    output: &mut OutputFile,
    format: OutputFormat,
) -> RadCliResult<()> {
    let request = RecipeGetMetadataRequest {
        name: name.to_string(),
        resource_type: resource_type.to_string(),
    };
    let metadata = client.get_recipe_metadata(environment_id, &request).await?;

    // values set on the environment win over the template defaults
    let configured = match client.get_environment(environment_id).await {
        Ok(environment) => environment
            .properties
            .recipes
            .get(resource_type)
            .and_then(|recipes| recipes.get(name))
            .and_then(|recipe| recipe.parameters.clone())
            .unwrap_or_default(),
        Err(e) => {
            tracing::warn!(environment = %environment_id, error = %e, "could not read recipe parameters from the environment");
            Map::new()
        }
    };

    let recipe = EnvironmentRecipe {
        name: name.to_string(),
        resource_type: resource_type.to_string(),
        template_kind: metadata.template_kind.clone(),
        template_path: metadata.template_path.clone(),
        template_version: metadata.template_version.clone().unwrap_or_default(),
    };
    let parameters = parameter_rows(&metadata.parameters, &configured);

    write_object(output, format, &recipe).await?;
    async_writeln!(output)?;
    write_list(output, format, &parameters).await
}

pub fn parameter_rows(
    metadata: &Map<String, Value>,
    configured: &Map<String, Value>,
) -> Vec<RecipeParameter> {
    metadata
        .iter()
        .map(|(name, details)| {
            let field = |key: &str| {
                details
                    .get(key)
                    .map(display_value)
                    .unwrap_or_else(|| MISSING.to_string())
            };
            RecipeParameter {
                name: name.clone(),
                parameter_type: field("type"),
                default_value: configured
                    .get(name)
                    .map(display_value)
                    .unwrap_or_else(|| field("defaultValue")),
                max_value: field("maxValue"),
                min_value: field("minValue"),
            }
        })
        .collect()
}

// 800.0 prints as 800
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => i.to_string(),
            (None, Some(f)) if f.fract() == 0.0 => format!("{f:.0}"),
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}

pub async fn register(
    recipe: NewRecipe,
    environment_id: &str,
    client: &dyn ManagementClient,
    output: &mut OutputFile,
) -> RadCliResult<()> {
    let mut environment = client.get_environment(environment_id).await?;

    let parameters = parameters::values(recipe.parameters);
    let properties = RecipeProperties {
        template_kind: recipe.template_kind,
        template_path: recipe.template_path,
        template_version: recipe.template_version,
        parameters: (!parameters.is_empty()).then_some(parameters),
        plain_http: recipe.plain_http.then_some(true),
    };
    environment
        .properties
        .recipes
        .entry(recipe.resource_type)
        .or_default()
        .insert(recipe.name.clone(), properties);

    let target = environment.id.clone().unwrap_or_else(|| environment_id.to_string());
    if let Err(e) = client.create_or_update_environment(&target, &environment).await {
        return Err(RadCliError::GenericError(format!(
            "Failed to register the recipe \"{}\" to the environment \"{target}\". Cause: {e}.",
            recipe.name
        )));
    }

    async_writeln!(
        output,
        "Successfully linked recipe \"{}\" to environment \"{}\" ",
        recipe.name,
        environment_name(environment_id)?
    )?;
    Ok(())
}

pub async fn unregister(
    name: &str,
    resource_type: &str,
    environment_id: &str,
    client: &dyn ManagementClient,
    output: &mut OutputFile,
) -> RadCliResult<()> {
    let mut environment = client.get_environment(environment_id).await?;
    let environment_name = environment_name(environment_id)?;

    let recipes = &mut environment.properties.recipes;
    let removed = recipes
        .get_mut(resource_type)
        .and_then(|named| named.remove(name))
        .is_some();
    if !removed {
        return Err(RadCliError::GenericError(format!(
            "recipe \"{name}\" is not part of the environment \"{environment_name}\" "
        )));
    }
    if recipes.get(resource_type).is_some_and(|named| named.is_empty()) {
        recipes.remove(resource_type);
    }

    let target = environment.id.clone().unwrap_or_else(|| environment_id.to_string());
    if let Err(e) = client.create_or_update_environment(&target, &environment).await {
        return Err(RadCliError::GenericError(format!(
            "Failed to unregister the recipe {name} from the environment {target}. Cause: {e}."
        )));
    }

    async_writeln!(
        output,
        "Successfully unregistered recipe \"{name}\" from environment \"{environment_name}\" "
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn parameter_rows_fill_missing_fields() {
        let metadata = json!({"size": {"type": "float64", "maxValue": 800.0}});
        let rows = parameter_rows(metadata.as_object().expect("object"), &Map::new());

        assert_eq!(
            rows,
            vec![RecipeParameter {
                name: "size".to_string(),
                parameter_type: "float64".to_string(),
                default_value: "-".to_string(),
                max_value: "800".to_string(),
                min_value: "-".to_string(),
            }]
        );
    }

    #[test]
    fn configured_values_override_defaults() {
        let metadata = json!({"location": {"type": "string", "defaultValue": "null"}});
        let configured = json!({"location": "eastus"});
        let rows = parameter_rows(
            metadata.as_object().expect("object"),
            configured.as_object().expect("object"),
        );

        assert_eq!(rows[0].default_value, "eastus");
    }
}
