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

use std::collections::{BTreeMap, HashSet};

use crate::{Resource, TemplateError};

/// Returns the resources ordered so that every resource comes after the
/// resources it depends on. Resources without a relative order keep the
/// order of their ids.
pub fn order_resources(
    resources: &BTreeMap<String, Resource>,
) -> Result<Vec<Resource>, TemplateError> {
    let mut ordered = Vec::with_capacity(resources.len());
    let mut placed = HashSet::new();
    let mut visiting = HashSet::new();

    // BTreeMap iteration gives the id order
    for resource in resources.values() {
        ensure_present(resources, resource, &mut ordered, &mut placed, &mut visiting)?;
    }

    Ok(ordered)
}

fn ensure_present<'a>(
    resources: &'a BTreeMap<String, Resource>,
    resource: &'a Resource,
    ordered: &mut Vec<Resource>,
    placed: &mut HashSet<&'a str>,
    visiting: &mut HashSet<&'a str>,
) -> Result<(), TemplateError> {
    if placed.contains(resource.id.as_str()) {
        return Ok(());
    }
    if !visiting.insert(resource.id.as_str()) {
        return Err(TemplateError::DependencyCycle(resource.id.clone()));
    }

    for id in &resource.depends_on {
        let dependency = resources
            .get(id)
            .ok_or_else(|| TemplateError::MissingDependency(id.clone()))?;
        ensure_present(resources, dependency, ordered, placed, visiting)?;
    }

    visiting.remove(resource.id.as_str());
    placed.insert(resource.id.as_str());
    ordered.push(resource.clone());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resource(id: &str, depends_on: &[&str]) -> (String, Resource) {
        (
            id.to_string(),
            Resource {
                id: id.to_string(),
                depends_on: depends_on.iter().map(|d| d.to_string()).collect(),
                ..Default::default()
            },
        )
    }

    fn ids(resources: &[Resource]) -> Vec<&str> {
        resources.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn independent_resources_keep_id_order() {
        let resources = BTreeMap::from([resource("c", &[]), resource("a", &[]), resource("b", &[])]);

        let ordered = order_resources(&resources).expect("should order");

        assert_eq!(ids(&ordered), ["a", "b", "c"]);
    }

    #[test]
    fn dependencies_come_first() {
        let resources = BTreeMap::from([
            resource("a", &["c"]),
            resource("b", &[]),
            resource("c", &["b"]),
        ]);

        let ordered = order_resources(&resources).expect("should order");

        assert_eq!(ids(&ordered), ["b", "c", "a"]);
    }

    #[test]
    fn missing_dependency_is_reported() {
        let resources = BTreeMap::from([resource("a", &["nope"])]);

        let err = order_resources(&resources).expect_err("should fail");

        assert_eq!(err, TemplateError::MissingDependency("nope".to_string()));
        assert_eq!(err.to_string(), "could not find resource with id: nope");
    }

    #[test]
    fn cycles_are_detected() {
        let resources = BTreeMap::from([
            resource("a", &["b"]),
            resource("b", &["c"]),
            resource("c", &["a"]),
        ]);

        let err = order_resources(&resources).expect_err("should fail");

        assert!(matches!(err, TemplateError::DependencyCycle(_)));
    }
}
