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

//! Evaluator for ARM-style deployment templates.
//!
//! A template is a static JSON document whose string values may contain
//! expressions of the form `[functionName(args...)]`. Evaluating a
//! template resolves those expressions against the supplied parameters,
//! the template's own variables and (at deployment time) the state of the
//! resources that have already been deployed, then returns the resources
//! in an order that satisfies every `dependsOn` edge.

// these are not visible outside of this crate
mod eval;
mod order;

pub mod expr;

use std::collections::BTreeMap;

pub use eval::{CustomActionCallback, DeploymentEvaluator};
pub use order::order_resources;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("'{input}' is not a valid expression: {message}")]
    Parse { input: String, message: String },
    #[error("{0}")]
    Evaluation(String),
    #[error("unsupported function '{0}'")]
    UnsupportedFunction(String),
    #[error("could not find resource with id: {0}")]
    MissingDependency(String),
    #[error("dependency cycle detected at resource with id: {0}")]
    DependencyCycle(String),
    #[error("Error Serialising/Deserialising template: {0}")]
    Serde(String),
}

impl From<serde_json::Error> for TemplateError {
    fn from(value: serde_json::Error) -> TemplateError {
        TemplateError::Serde(value.to_string())
    }
}

/// DeploymentTemplate is the document produced by the template compiler.
/// Parameters keep the shape they have inside the template (`type`,
/// `defaultValue`, ...); everything else is evaluated lazily.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentTemplate {
    #[serde(rename = "$schema", default)]
    pub schema: String,
    #[serde(default)]
    pub content_version: String,
    #[serde(default)]
    pub parameters: BTreeMap<String, Map<String, Value>>,
    #[serde(default)]
    pub variables: Map<String, Value>,
    #[serde(default)]
    pub resources: Vec<Map<String, Value>>,
    #[serde(default)]
    pub outputs: Map<String, Value>,
}

/// Resource is a parsed resource entry of a template.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    pub api_version: String,
    pub name: String,
    pub depends_on: Vec<String>,
    // the payload submitted to the control plane; name, type, apiVersion
    // and dependsOn are stripped from it
    pub body: Map<String, Value>,
}

impl Resource {
    /// Converts the body into a typed object.
    pub fn convert<T: serde::de::DeserializeOwned>(&self) -> Result<T, TemplateError> {
        Ok(serde_json::from_value(Value::Object(self.body.clone()))?)
    }
}

#[derive(Clone, Debug, Default)]
pub struct TemplateOptions {
    /// Scope used by `resourceId()`, for example
    /// `/planes/radius/local/resourceGroups/default`.
    pub scope: String,
    /// The `parameters` node of a parameter file: name -> `{ "value": ... }`.
    pub parameters: BTreeMap<String, Map<String, Value>>,
    /// Evaluate expressions inside `properties` as well. When unset the
    /// properties node is kept verbatim so it can be evaluated at
    /// deployment time, once referenced resources exist.
    pub evaluate_properties: bool,
    /// Value returned by `resourceGroup()`.
    pub resource_group: Option<Map<String, Value>>,
}

pub fn parse(template: &str) -> Result<DeploymentTemplate, TemplateError> {
    Ok(serde_json::from_str(template)?)
}

/// Evaluates every resource of the template without deployed state and
/// returns them in dependency order.
pub fn eval(
    template: &DeploymentTemplate,
    options: &TemplateOptions,
) -> Result<Vec<Resource>, TemplateError> {
    let mut evaluator = DeploymentEvaluator::new(template, options);

    let mut resources = BTreeMap::new();
    for raw in &template.resources {
        let resource = evaluator.visit_resource(raw)?;
        resources.insert(resource.id.clone(), resource);
    }

    order_resources(&resources)
}
