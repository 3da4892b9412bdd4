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

//! Recipe pack bookkeeping shared by `recipe-pack` and `env create`.

use std::collections::BTreeMap;

use ::ucp::cli::{RadCliError, RadCliResult};
use ::ucp::models::{
    LOCATION_GLOBAL, RecipeDefinition, RecipePackProperties, RecipePackResource,
};
use ::ucp::resource_id::resource_id_in_scope;
use ::ucp::resource_types::RECIPE_PACKS;
use ::ucp::{ManagementClient, ResourceId};
use serde_json::{Map, Value};

use crate::config::FALLBACK_SCOPE;

pub const DEFAULT_RECIPE_PACK_NAME: &str = "local-dev";
pub const RECIPE_KIND_BICEP: &str = "bicep";

/// A resource type that every environment needs exactly one recipe for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SingletonDefinition {
    pub name: &'static str,
    pub resource_type: &'static str,
    pub recipe_location: &'static str,
}

const SINGLETONS: &[SingletonDefinition] = &[
    SingletonDefinition {
        name: "containers",
        resource_type: "Radius.Compute/containers",
        recipe_location: "ghcr.io/radius-project/kube-recipes/containers:latest",
    },
    SingletonDefinition {
        name: "persistentvolumes",
        resource_type: "Radius.Compute/persistentVolumes",
        recipe_location: "ghcr.io/radius-project/kube-recipes/persistentvolumes:latest",
    },
    SingletonDefinition {
        name: "routes",
        resource_type: "Radius.Compute/routes",
        recipe_location: "ghcr.io/radius-project/kube-recipes/routes:latest",
    },
    SingletonDefinition {
        name: "secrets",
        resource_type: "Radius.Security/secrets",
        recipe_location: "ghcr.io/radius-project/kube-recipes/secrets:latest",
    },
];

pub fn singleton_definitions() -> &'static [SingletonDefinition] {
    SINGLETONS
}

/// A pack holding a single bicep recipe for `resource_type`.
pub fn new_singleton_recipe_pack(resource_type: &str, recipe_location: &str) -> RecipePackResource {
    let recipe = RecipeDefinition {
        recipe_kind: RECIPE_KIND_BICEP.to_string(),
        recipe_location: recipe_location.to_string(),
        ..Default::default()
    };
    RecipePackResource {
        location: Some(LOCATION_GLOBAL.to_string()),
        properties: RecipePackProperties {
            recipes: [(resource_type.to_string(), recipe)].into_iter().collect(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Creates one pack per singleton type in the default resource group and
/// returns their ids.
pub async fn create_singleton_recipe_packs(
    client: &dyn ManagementClient,
) -> RadCliResult<Vec<String>> {
    let mut ids = Vec::with_capacity(SINGLETONS.len());
    for definition in SINGLETONS {
        ids.push(create_singleton(client, definition).await?);
    }
    Ok(ids)
}

async fn create_singleton(
    client: &dyn ManagementClient,
    definition: &SingletonDefinition,
) -> RadCliResult<String> {
    let id = resource_id_in_scope(FALLBACK_SCOPE, RECIPE_PACKS, definition.name);
    let pack = new_singleton_recipe_pack(definition.resource_type, definition.recipe_location);
    client.create_or_update_recipe_pack(&id, &pack).await?;
    Ok(id)
}

/// Resource types covered by a set of packs. `covered` maps a type to
/// the pack providing it; `conflicts` lists every type more than one pack
/// provides, with all the packs that do.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PackInspection {
    pub covered: BTreeMap<String, String>,
    pub conflicts: BTreeMap<String, Vec<String>>,
}

pub async fn inspect_recipe_packs(
    client: &dyn ManagementClient,
    pack_ids: &[String],
) -> RadCliResult<PackInspection> {
    let mut inspection = PackInspection::default();
    for pack_id in pack_ids {
        let name = match ResourceId::parse(pack_id) {
            Ok(id) => id.name().to_string(),
            Err(e) => {
                tracing::warn!(%pack_id, error = %e, "skipping recipe pack with invalid id");
                continue;
            }
        };

        let pack = client.get_recipe_pack(pack_id).await?;
        for resource_type in pack.properties.recipes.keys() {
            match inspection.covered.get(resource_type) {
                Some(existing) => {
                    let packs = inspection
                        .conflicts
                        .entry(resource_type.clone())
                        .or_insert_with(|| vec![existing.clone()]);
                    packs.push(name.clone());
                }
                None => {
                    inspection
                        .covered
                        .insert(resource_type.clone(), name.clone());
                }
            }
        }
    }
    Ok(inspection)
}

/// Creates singleton packs for the types `covered` lacks and returns the
/// new ids.
pub async fn ensure_missing_singletons(
    client: &dyn ManagementClient,
    covered: &BTreeMap<String, String>,
) -> RadCliResult<Vec<String>> {
    let mut ids = Vec::new();
    for definition in SINGLETONS {
        if covered.contains_key(definition.resource_type) {
            continue;
        }
        ids.push(create_singleton(client, definition).await?);
    }
    Ok(ids)
}

pub fn format_conflict_error(conflicts: &BTreeMap<String, Vec<String>>) -> RadCliError {
    let mut message = String::from(
        "Recipe pack conflict detected. Each resource type may only be provided by one recipe pack:\n",
    );
    for (resource_type, packs) in conflicts {
        message.push_str(&format!("  {resource_type}: {}\n", packs.join(", ")));
    }
    message.push_str("Remove the conflicting recipe packs and try again.");
    RadCliError::GenericError(message)
}

pub fn recipe_pack_id_exists(packs: &[String], id: &str) -> bool {
    packs.iter().any(|pack| pack.eq_ignore_ascii_case(id))
}

/// The `recipePacks` ids of an untyped resource's properties.
pub fn extract_recipe_pack_ids(properties: &Map<String, Value>) -> Vec<String> {
    properties
        .get("recipePacks")
        .and_then(Value::as_array)
        .map(|packs| {
            packs
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// A pack name or id as a full id in `scope`.
pub fn recipe_pack_id(scope: &str, name_or_id: &str) -> RadCliResult<String> {
    if name_or_id.starts_with('/') {
        Ok(ResourceId::parse(name_or_id)?.to_string())
    } else {
        Ok(resource_id_in_scope(scope, RECIPE_PACKS, name_or_id))
    }
}
