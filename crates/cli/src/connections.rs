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

//! Turns a workspace into a management client.

use std::path::PathBuf;
use std::sync::Arc;

use ::ucp::cli::{RadCliError, RadCliResult};
use ::ucp::{Config, ManagementClient, UCP_API_PATH, UcpManagementClient};
use kube::config::Kubeconfig;

use crate::config::{Connection, FALLBACK_SCOPE, Workspace};

pub trait ConnectionFactory {
    fn management_client(&self, workspace: &Workspace) -> RadCliResult<Arc<dyn ManagementClient>>;
}

/// Connects through the Kubernetes API server of the workspace's kube
/// context, or straight to `overrides.ucp` when one is configured.
#[derive(Debug, Default)]
pub struct KubernetesConnectionFactory {
    // None reads $KUBECONFIG or ~/.kube/config
    pub kubeconfig: Option<PathBuf>,
}

impl KubernetesConnectionFactory {
    pub fn base_url(&self, workspace: &Workspace) -> RadCliResult<String> {
        let Connection::Kubernetes { context, overrides } = &workspace.connection;

        if let Some(ucp) = overrides
            .as_ref()
            .and_then(|o| o.ucp.as_deref())
            .filter(|u| !u.is_empty())
        {
            return ucp_base_url(ucp);
        }

        let kubeconfig = match &self.kubeconfig {
            Some(path) => Kubeconfig::read_from(path),
            None => Kubeconfig::read(),
        }
        .map_err(|e| RadCliError::GenericError(format!("failed to read kubeconfig: {e}")))?;

        server_for_context(&kubeconfig, context)
    }
}

impl ConnectionFactory for KubernetesConnectionFactory {
    fn management_client(&self, workspace: &Workspace) -> RadCliResult<Arc<dyn ManagementClient>> {
        let base_url = self.base_url(workspace)?;
        let root_scope = workspace
            .scope
            .clone()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| FALLBACK_SCOPE.to_string());

        tracing::debug!(%base_url, %root_scope, workspace = workspace.display_name(), "connecting to control plane");
        Ok(Arc::new(UcpManagementClient::new_with_config(&Config {
            base_url,
            root_scope,
        })))
    }
}

/// Appends the control plane API path to a bare `scheme://host[:port]`.
pub fn ucp_base_url(url: &str) -> RadCliResult<String> {
    let parsed = url::Url::parse(url).map_err(|e| {
        RadCliError::GenericError(format!("'{url}' is not a valid control plane URL: {e}"))
    })?;
    let trimmed = url.trim_end_matches('/');
    if parsed.path().trim_matches('/').is_empty() {
        Ok(format!("{trimmed}{UCP_API_PATH}"))
    } else {
        Ok(trimmed.to_string())
    }
}

/// The current context of the default kubeconfig, if it has one.
pub fn current_kube_context() -> RadCliResult<Option<String>> {
    let kubeconfig = Kubeconfig::read()
        .map_err(|e| RadCliError::GenericError(format!("failed to read kubeconfig: {e}")))?;
    Ok(kubeconfig.current_context)
}

/// Picks the explicitly configured context, then the kubeconfig's current one.
pub fn require_kube_context(flag: Option<&str>, current: Option<&str>) -> RadCliResult<String> {
    flag.filter(|c| !c.is_empty())
        .or(current.filter(|c| !c.is_empty()))
        .map(str::to_string)
        .ok_or_else(|| RadCliError::generic("the kubeconfig has no current context"))
}

fn server_for_context(kubeconfig: &Kubeconfig, context: &str) -> RadCliResult<String> {
    let name = require_kube_context(Some(context), kubeconfig.current_context.as_deref())?;

    let cluster = kubeconfig
        .contexts
        .iter()
        .find(|c| c.name == name)
        .and_then(|c| c.context.as_ref())
        .map(|c| c.cluster.clone())
        .ok_or_else(|| {
            RadCliError::GenericError(format!("the kubeconfig does not contain context '{name}'"))
        })?;

    let server = kubeconfig
        .clusters
        .iter()
        .find(|c| c.name == cluster)
        .and_then(|c| c.cluster.as_ref())
        .and_then(|c| c.server.as_deref())
        .ok_or_else(|| {
            RadCliError::GenericError(format!(
                "cluster '{cluster}' of context '{name}' has no server address"
            ))
        })?;

    Ok(format!("{}{}", server.trim_end_matches('/'), UCP_API_PATH))
}
