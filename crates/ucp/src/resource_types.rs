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

pub const APPLICATIONS: &str = "Applications.Core/applications";
pub const ENVIRONMENTS: &str = "Applications.Core/environments";
pub const RECIPE_PACKS: &str = "Radius.Core/recipePacks";

pub const CORE_API_VERSION: &str = "2023-10-01-preview";
pub const UCP_API_VERSION: &str = "2023-10-01-preview";
pub const RECIPE_PACK_API_VERSION: &str = "2025-08-01-preview";

/// Resource types that can live inside an application or environment.
/// Listing "everything" in an application walks this list.
pub const RESOURCE_TYPES_LIST: &[&str] = &[
    "Applications.Datastores/mongoDatabases",
    "Applications.Messaging/rabbitMQQueues",
    "Applications.Datastores/redisCaches",
    "Applications.Datastores/sqlDatabases",
    "Applications.Dapr/stateStores",
    "Applications.Dapr/secretStores",
    "Applications.Dapr/pubSubBrokers",
    "Applications.Dapr/configurationStores",
    "Applications.Core/extenders",
    "Applications.Core/gateways",
    "Applications.Core/containers",
    "Applications.Core/secretStores",
    "Applications.Core/volumes",
];

/// Returns the API version to use for a resource type. Everything that
/// is not a recipe pack is served by the same version today.
pub fn api_version_for(resource_type: &str) -> &'static str {
    if resource_type.eq_ignore_ascii_case(RECIPE_PACKS) {
        RECIPE_PACK_API_VERSION
    } else if resource_type.starts_with("System.") {
        UCP_API_VERSION
    } else {
        CORE_API_VERSION
    }
}

/// Looks up a short type name ("containers") in the well-known list.
pub fn find_by_short_name(short_name: &str) -> Option<&'static str> {
    RESOURCE_TYPES_LIST.iter().copied().find(|t| {
        t.split_once('/')
            .is_some_and(|(_, name)| name.eq_ignore_ascii_case(short_name))
    })
}
