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

//! `--parameters` values, shared by `deploy` and `recipe register`.
//!
//! Each argument is one of:
//! - `name=value`, a string value;
//! - `name=@file.json`, the JSON content of the file;
//! - `@file.json`, an ARM parameter file (`{"parameters": {name: {"value": ...}}}`)
//!   or a plain object of parameters.
//!
//! Later arguments override earlier ones.

use std::collections::BTreeMap;
use std::path::Path;

use ::ucp::cli::{RadCliError, RadCliResult};
use serde_json::{Map, Value};

/// Parameters in ARM parameter-file shape: name -> `{ "value": ... }`.
pub type Parameters = BTreeMap<String, Map<String, Value>>;

pub fn parse(args: &[String]) -> RadCliResult<Parameters> {
    let mut parameters = Parameters::new();
    for arg in args {
        if let Some(path) = arg.strip_prefix('@') {
            for (name, value) in read_parameter_file(Path::new(path))? {
                parameters.insert(name, value);
            }
            continue;
        }

        let Some((name, value)) = arg.split_once('=').filter(|(name, _)| !name.is_empty()) else {
            return Err(RadCliError::GenericError(format!(
                "'{arg}' is not a valid parameter, use name=value, name=@file.json or @file.json"
            )));
        };
        let value = match value.strip_prefix('@') {
            Some(path) => read_json(Path::new(path))?,
            None => Value::String(value.to_string()),
        };
        parameters.insert(name.to_string(), wrap(value));
    }
    Ok(parameters)
}

/// Drops the `{ "value": ... }` wrapper, as stored on recipes.
pub fn values(parameters: Parameters) -> Map<String, Value> {
    parameters
        .into_iter()
        .map(|(name, mut wrapped)| (name, wrapped.remove("value").unwrap_or(Value::Null)))
        .collect()
}

fn wrap(value: Value) -> Map<String, Value> {
    let mut wrapped = Map::new();
    wrapped.insert("value".to_string(), value);
    wrapped
}

fn read_json(path: &Path) -> RadCliResult<Value> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        RadCliError::GenericError(format!("failed to read '{}': {e}", path.display()))
    })?;
    serde_json::from_str(&text).map_err(|e| {
        RadCliError::GenericError(format!("'{}' is not valid JSON: {e}", path.display()))
    })
}

fn read_parameter_file(path: &Path) -> RadCliResult<Parameters> {
    let content = read_json(path)?;
    let Value::Object(mut content) = content else {
        return Err(RadCliError::GenericError(format!(
            "'{}' must contain a JSON object",
            path.display()
        )));
    };

    // a deployment parameter file nests everything under "parameters"
    let entries = match content.remove("parameters") {
        Some(Value::Object(entries)) => entries,
        Some(other) => {
            content.insert("parameters".to_string(), other);
            content
        }
        None => content,
    };

    Ok(entries
        .into_iter()
        .map(|(name, value)| match value {
            Value::Object(map) if map.contains_key("value") => (name, map),
            other => (name, wrap(other)),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serde_json::json;

    use super::*;

    fn temp_json(content: &Value) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "{content}").expect("write temp file");
        file
    }

    #[test]
    fn name_value_pairs() {
        let parameters = parse(&["a=b".to_string(), "empty=".to_string()]).expect("should parse");
        assert_eq!(Value::Object(values(parameters)), json!({"a": "b", "empty": ""}));
    }

    #[test]
    fn later_arguments_override() {
        let parameters = parse(&["a=1".to_string(), "a=2".to_string()]).expect("should parse");
        assert_eq!(parameters["a"]["value"], json!("2"));
    }

    #[test]
    fn value_from_file() {
        let file = temp_json(&json!({"size": 3}));
        let arg = format!("config=@{}", file.path().display());
        let parameters = parse(&[arg]).expect("should parse");
        assert_eq!(parameters["config"]["value"], json!({"size": 3}));
    }

    #[test]
    fn parameter_file() {
        let file = temp_json(&json!({
            "$schema": "https://schema.management.azure.com/schemas/2019-04-01/deploymentParameters.json#",
            "parameters": {
                "location": {"value": "eastus"},
                "replicas": {"value": 2}
            }
        }));
        let arg = format!("@{}", file.path().display());
        let parameters = parse(&[arg, "location=westus".to_string()]).expect("should parse");
        assert_eq!(parameters["location"]["value"], json!("westus"));
        assert_eq!(parameters["replicas"]["value"], json!(2));
    }

    #[test]
    fn plain_object_file() {
        let file = temp_json(&json!({"location": "eastus"}));
        let parameters = parse(&[format!("@{}", file.path().display())]).expect("should parse");
        assert_eq!(parameters["location"]["value"], json!("eastus"));
    }

    #[test]
    fn invalid_arguments() {
        assert!(parse(&["novalue".to_string()]).is_err());
        assert!(parse(&["=x".to_string()]).is_err());
        assert!(parse(&["@/nonexistent/params.json".to_string()]).is_err());
    }
}
