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

use std::collections::{BTreeMap, BTreeSet};

use base64::Engine;
use serde_json::{Map, Value};
use sha1::{Digest, Sha1};

use crate::expr::{self, Accessor, Expression};
use crate::{DeploymentTemplate, Resource, TemplateError, TemplateOptions};

/// Invoked for `list*` functions: (resource id, api version, action name, payload).
pub type CustomActionCallback =
    Box<dyn Fn(&str, &str, &str, Option<&Value>) -> Result<Value, TemplateError> + Send + Sync>;

// keys that describe a resource entry rather than its payload
const NON_BODY_KEYS: [&str; 4] = ["name", "type", "apiVersion", "dependsOn"];

pub struct DeploymentEvaluator<'a> {
    template: &'a DeploymentTemplate,
    options: &'a TemplateOptions,
    // resource id -> last known state returned by the control plane
    deployed: BTreeMap<String, Value>,
    variables: BTreeMap<String, Value>,
    resolving_variables: BTreeSet<String>,
    custom_action: Option<CustomActionCallback>,
    preserve_expressions: bool,
}

impl<'a> DeploymentEvaluator<'a> {
    pub fn new(template: &'a DeploymentTemplate, options: &'a TemplateOptions) -> Self {
        DeploymentEvaluator {
            template,
            options,
            deployed: BTreeMap::new(),
            variables: BTreeMap::new(),
            resolving_variables: BTreeSet::new(),
            custom_action: None,
            preserve_expressions: false,
        }
    }

    pub fn with_custom_action(mut self, callback: CustomActionCallback) -> Self {
        self.custom_action = Some(callback);
        self
    }

    /// Records the state of a deployed resource so later `reference()`
    /// calls can read it.
    pub fn record_deployed(&mut self, id: &str, state: Value) {
        self.deployed.insert(id.to_string(), state);
    }

    pub fn visit_resource(&mut self, input: &Map<String, Value>) -> Result<Resource, TemplateError> {
        let mut evaluated = Map::new();
        for (key, value) in input {
            self.preserve_expressions = !self.options.evaluate_properties && key == "properties";
            let result = self.visit_value(value);
            self.preserve_expressions = false;
            evaluated.insert(key.clone(), result?);
        }

        let name = evaluated
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| TemplateError::Evaluation("resource does not contain a name".to_string()))?
            .to_string();

        let mut resource_type = evaluated
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| TemplateError::Evaluation("resource does not contain a type".to_string()))?
            .to_string();

        let api_version = match evaluated.get("apiVersion").and_then(Value::as_str) {
            Some(v) => v.to_string(),
            // kubernetes resources carry the version in the type: "kubernetes.core/Service@v1"
            None => match resource_type.split_once('@') {
                Some((t, v)) => {
                    let v = v.to_string();
                    resource_type = t.to_string();
                    v
                }
                None => {
                    return Err(TemplateError::Evaluation(format!(
                        "resource {name} does not contain an apiVersion"
                    )));
                }
            },
        };

        let mut depends_on = Vec::new();
        if let Some(value) = evaluated.get("dependsOn") {
            let entries = value
                .as_array()
                .ok_or_else(|| TemplateError::Evaluation("dependsOn is the wrong type".to_string()))?;
            for entry in entries {
                let id = entry.as_str().ok_or_else(|| {
                    TemplateError::Evaluation("dependsOn is the wrong type".to_string())
                })?;
                depends_on.push(id.to_string());
            }
        }

        let names: Vec<Value> = name.split('/').map(|n| Value::String(n.to_string())).collect();
        let id = self.resource_id(&resource_type, &names)?;

        let body = evaluated
            .into_iter()
            .filter(|(k, _)| !NON_BODY_KEYS.contains(&k.as_str()))
            .collect();

        Ok(Resource {
            id,
            resource_type,
            api_version,
            name,
            depends_on,
            body,
        })
    }

    pub fn visit_value(&mut self, input: &Value) -> Result<Value, TemplateError> {
        match input {
            Value::String(s) => self.visit_string(s),
            Value::Array(items) => items
                .iter()
                .map(|v| self.visit_value(v))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array),
            Value::Object(map) => {
                let mut output = Map::new();
                for (key, value) in map {
                    let key = match self.visit_string(key)? {
                        Value::String(s) => s,
                        other => {
                            return Err(TemplateError::Evaluation(format!(
                                "map key must evaluate to a string, was: {other}"
                            )));
                        }
                    };
                    output.insert(key, self.visit_value(value)?);
                }
                Ok(Value::Object(output))
            }
            // null, bool and numbers need no evaluation
            other => Ok(other.clone()),
        }
    }

    fn visit_string(&mut self, input: &str) -> Result<Value, TemplateError> {
        if self.preserve_expressions {
            return Ok(Value::String(input.to_string()));
        }
        if !expr::is_expression(input) {
            return Ok(Value::String(expr::unescape_literal(input).to_string()));
        }

        let tree = expr::parse(input)?;
        self.evaluate(&tree.expression)
    }

    /// Evaluates the template's outputs, typically after deployment.
    pub fn evaluate_outputs(&mut self) -> Result<Map<String, Value>, TemplateError> {
        let mut outputs = Map::new();
        for (name, output) in &self.template.outputs {
            let value = match output.get("value") {
                Some(v) => self.visit_value(v)?,
                None => Value::Null,
            };
            outputs.insert(name.clone(), value);
        }
        Ok(outputs)
    }

    fn evaluate(&mut self, expression: &Expression) -> Result<Value, TemplateError> {
        match expression {
            Expression::StringLiteral { value, .. } => Ok(Value::String(value.clone())),
            Expression::IntegerLiteral { value, .. } => Ok(Value::from(*value)),
            Expression::PropertyAccess { base, accessor, .. } => {
                let base = self.evaluate(base)?;
                match accessor {
                    Accessor::Property(identifier) => access_property(&base, &identifier.text),
                    Accessor::Index(index) => match self.evaluate(index)? {
                        Value::String(key) => access_property(&base, &key),
                        Value::Number(n) => {
                            let items = base.as_array().ok_or_else(|| {
                                TemplateError::Evaluation(format!(
                                    "value to index should be an array, was: {base}"
                                ))
                            })?;
                            n.as_u64()
                                .and_then(|i| items.get(i as usize))
                                .cloned()
                                .ok_or_else(|| {
                                    TemplateError::Evaluation(format!("index {n} is out of range"))
                                })
                        }
                        other => Err(TemplateError::Evaluation(format!(
                            "index must be a string or an integer, was: {other}"
                        ))),
                    },
                }
            }
            Expression::FunctionCall { name, args, .. } => {
                let args = args
                    .iter()
                    .map(|a| self.evaluate(a))
                    .collect::<Result<Vec<_>, _>>()?;
                self.call(&name.text, args)
            }
        }
    }

    fn call(&mut self, name: &str, args: Vec<Value>) -> Result<Value, TemplateError> {
        if name.starts_with("list") {
            require_at_least(name, &args, 2)?;
            return self.custom_action(name, &args);
        }

        match name {
            "base64" => {
                require_exactly(name, &args, 1)?;
                Ok(Value::String(
                    base64::engine::general_purpose::STANDARD.encode(value_to_string(&args[0])),
                ))
            }
            "base64ToString" => {
                require_exactly(name, &args, 1)?;
                let decoded = base64::engine::general_purpose::STANDARD
                    .decode(value_to_string(&args[0]))
                    .map_err(|e| TemplateError::Evaluation(format!("base64ToString: {e}")))?;
                Ok(Value::String(String::from_utf8_lossy(&decoded).into_owned()))
            }
            "concat" => {
                if args.iter().all(Value::is_array) {
                    let joined = args
                        .into_iter()
                        .flat_map(|a| match a {
                            Value::Array(items) => items,
                            _ => Vec::new(),
                        })
                        .collect();
                    Ok(Value::Array(joined))
                } else {
                    Ok(Value::String(args.iter().map(value_to_string).collect()))
                }
            }
            "createObject" => {
                if args.len() % 2 != 0 {
                    return Err(TemplateError::Evaluation(
                        "an even number of arguments is required for createObject".to_string(),
                    ));
                }
                let mut object = Map::new();
                for pair in args.chunks(2) {
                    let key = pair[0].as_str().ok_or_else(|| {
                        TemplateError::Evaluation(format!("key must be a string, was: {}", pair[0]))
                    })?;
                    object.insert(key.to_string(), pair[1].clone());
                }
                Ok(Value::Object(object))
            }
            "format" => {
                require_at_least(name, &args, 1)?;
                let format = expect_str(name, &args[0])?;
                Ok(Value::String(format_string(format, &args[1..])))
            }
            "guid" => {
                require_at_least(name, &args, 1)?;
                Ok(Value::String(guid(&args)))
            }
            "parameters" => {
                require_exactly(name, &args, 1)?;
                self.parameter(expect_str(name, &args[0])?)
            }
            "reference" => match args.len() {
                1 | 2 | 3 => self.reference(expect_str(name, &args[0])?),
                _ => Err(TemplateError::Evaluation(
                    "between 1 and 3 arguments are required for reference".to_string(),
                )),
            },
            "resourceGroup" => {
                require_exactly(name, &args, 0)?;
                self.options
                    .resource_group
                    .clone()
                    .map(Value::Object)
                    .ok_or_else(|| {
                        TemplateError::Evaluation("no resource group data found".to_string())
                    })
            }
            "resourceId" => {
                require_at_least(name, &args, 2)?;
                let resource_type = expect_str(name, &args[0])?;
                self.resource_id(resource_type, &args[1..]).map(Value::String)
            }
            "string" => {
                require_exactly(name, &args, 1)?;
                Ok(Value::String(value_to_string(&args[0])))
            }
            "variables" => {
                require_exactly(name, &args, 1)?;
                self.variable(expect_str(name, &args[0])?)
            }
            _ => Err(TemplateError::UnsupportedFunction(name.to_string())),
        }
    }

    fn custom_action(&self, name: &str, args: &[Value]) -> Result<Value, TemplateError> {
        let id = args[0].as_str().ok_or_else(|| {
            TemplateError::Evaluation(format!("resource id must be a string, was: {}", args[0]))
        })?;
        let api_version = args[1].as_str().ok_or_else(|| {
            TemplateError::Evaluation(format!("API Version must be a string, was: {}", args[1]))
        })?;

        let Some(callback) = &self.custom_action else {
            return Err(TemplateError::Evaluation(
                "custom actions are not supported by this host".to_string(),
            ));
        };
        callback(id, api_version, name, args.get(2))
    }

    fn parameter(&self, name: &str) -> Result<Value, TemplateError> {
        if let Some(parameter) = self.options.parameters.get(name) {
            return parameter.get("value").cloned().ok_or_else(|| {
                TemplateError::Evaluation(format!("parameter \"{name}\" has no value"))
            });
        }

        match self.template.parameters.get(name) {
            Some(parameter) => parameter.get("defaultValue").cloned().ok_or_else(|| {
                TemplateError::Evaluation(format!("parameter \"{name}\" has no default value"))
            }),
            None => Err(TemplateError::Evaluation(format!(
                "parameter \"{name}\" is not defined by the template"
            ))),
        }
    }

    fn variable(&mut self, name: &str) -> Result<Value, TemplateError> {
        if let Some(value) = self.variables.get(name) {
            return Ok(value.clone());
        }
        let Some(raw) = self.template.variables.get(name) else {
            return Err(TemplateError::Evaluation(format!("no variable matches: {name}")));
        };
        if !self.resolving_variables.insert(name.to_string()) {
            return Err(TemplateError::Evaluation(format!(
                "variable \"{name}\" refers to itself"
            )));
        }

        // variables are always evaluated, even inside a preserved properties node
        let preserve = std::mem::replace(&mut self.preserve_expressions, false);
        let result = self.visit_value(raw);
        self.preserve_expressions = preserve;
        self.resolving_variables.remove(name);

        let value = result?;
        self.variables.insert(name.to_string(), value.clone());
        Ok(value)
    }

    // reference() always behaves as if 'full' had been requested and
    // returns the properties of the deployed resource
    fn reference(&self, id: &str) -> Result<Value, TemplateError> {
        let state = self
            .deployed
            .get(id)
            .ok_or_else(|| TemplateError::Evaluation(format!("no resource matches id: {id}")))?;

        state.get("properties").cloned().ok_or_else(|| {
            TemplateError::Evaluation(format!(
                "value did not contain property 'properties', was: {state}"
            ))
        })
    }

    fn resource_id(&self, resource_type: &str, names: &[Value]) -> Result<String, TemplateError> {
        let segments: Vec<&str> = resource_type.split('/').collect();
        if segments.len() < 2 || segments.len() - 1 != names.len() {
            return Err(TemplateError::Evaluation(
                "invalid arguments: wrong number of names".to_string(),
            ));
        }

        let names = names
            .iter()
            .map(|n| expect_str("resourceId", n))
            .collect::<Result<Vec<_>, _>>()?;

        let mut id = format!(
            "{}/providers/{}/{}/{}",
            self.options.scope.trim_end_matches('/'),
            segments[0],
            segments[1],
            names[0]
        );
        for (segment, name) in segments[2..].iter().zip(&names[1..]) {
            id.push('/');
            id.push_str(segment);
            id.push('/');
            id.push_str(name);
        }
        Ok(id)
    }
}

fn access_property(base: &Value, key: &str) -> Result<Value, TemplateError> {
    match base {
        Value::Null => Err(TemplateError::Evaluation("value to access is null".to_string())),
        Value::Object(map) => map.get(key).cloned().ok_or_else(|| {
            TemplateError::Evaluation(format!(
                "value did not contain property '{key}', was: {base}"
            ))
        }),
        other => Err(TemplateError::Evaluation(format!(
            "value to access should be a map, was: {other}"
        ))),
    }
}

fn format_string(format: &str, args: &[Value]) -> String {
    let mut output = String::with_capacity(format.len());
    let mut rest = format;
    while let Some(open) = rest.find('{') {
        output.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let placeholder = after
            .find('}')
            .and_then(|close| after[..close].parse::<usize>().ok().map(|i| (i, close)));
        match placeholder {
            Some((index, close)) => {
                if let Some(arg) = args.get(index) {
                    output.push_str(&value_to_string(arg));
                }
                rest = &after[close + 1..];
            }
            None => {
                output.push('{');
                rest = after;
            }
        }
    }
    output.push_str(rest);
    output
}

// sha1 over the concatenated arguments, then a name-based uuid in the nil namespace
fn guid(args: &[Value]) -> String {
    let mut hasher = Sha1::new();
    for arg in args {
        hasher.update(value_to_string(arg).as_bytes());
    }
    let digest = hasher.finalize();
    uuid::Uuid::new_v5(&uuid::Uuid::nil(), &digest).to_string()
}

fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn expect_str<'v>(function: &str, value: &'v Value) -> Result<&'v str, TemplateError> {
    value.as_str().ok_or_else(|| {
        TemplateError::Evaluation(format!(
            "argument to {function} must be a string, was: {value}"
        ))
    })
}

fn require_exactly(function: &str, args: &[Value], count: usize) -> Result<(), TemplateError> {
    if args.len() != count {
        return Err(TemplateError::Evaluation(format!(
            "exactly {count} argument(s) required for {function}"
        )));
    }
    Ok(())
}

fn require_at_least(function: &str, args: &[Value], count: usize) -> Result<(), TemplateError> {
    if args.len() < count {
        return Err(TemplateError::Evaluation(format!(
            "at least {count} argument(s) required for {function}"
        )));
    }
    Ok(())
}
