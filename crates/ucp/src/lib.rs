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

// these are not visible outside of this crate
mod client;
mod poller;

pub mod models;
pub mod resource_id;
pub mod resource_types;

#[cfg(feature = "cli")]
pub mod cli;

// re-exports
pub use client::{ManagementClient, MockManagementClient, UcpManagementClient};
pub use resource_id::ResourceId;
use serde::{Deserialize, Serialize};

/// Path under the Kubernetes API server where the control plane is served.
pub const UCP_API_PATH: &str = "/apis/api.ucp.dev/v1alpha3";

pub const DEFAULT_PLANE: &str = "/planes/radius/local";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    // e.g. https://127.0.0.1:6443/apis/api.ucp.dev/v1alpha3
    pub base_url: String,
    // e.g. /planes/radius/local/resourceGroups/default
    pub root_scope: String,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            base_url: format!("http://localhost:9443{UCP_API_PATH}"),
            root_scope: format!("{DEFAULT_PLANE}/resourceGroups/default"),
        }
    }
}

#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum UcpError {
    #[error("Error talking to the control plane: {0}")]
    Communication(String),
    #[error("{code}: {message}")]
    Response {
        status: u16,
        code: String,
        message: String,
    },
    #[error("Error Serialising/Deserialising: {0}")]
    Serde(String),
    #[error("'{0}' is not a valid resource id")]
    InvalidResourceId(String),
    #[error("long running operation failed: {0}")]
    OperationFailed(String),
}

impl UcpError {
    pub fn status(&self) -> Option<u16> {
        match self {
            UcpError::Response { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    pub fn is_conflict(&self) -> bool {
        self.status() == Some(409)
    }

    pub fn not_found(message: impl Into<String>) -> UcpError {
        UcpError::Response {
            status: 404,
            code: "NotFound".to_string(),
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for UcpError {
    fn from(value: reqwest::Error) -> UcpError {
        UcpError::Communication(format!("Communication error: {}", value))
    }
}

impl From<serde_json::Error> for UcpError {
    fn from(value: serde_json::Error) -> UcpError {
        UcpError::Serde(value.to_string())
    }
}
