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

use std::pin::Pin;
use std::sync::Arc;

use ::ucp::ManagementClient;
use ::ucp::cli::{OutputFormat, RadCliResult};

use crate::config::{ConfigHolder, Workspace};
use crate::connections::ConnectionFactory;
use crate::prompt::Prompter;
use crate::validation;

// RuntimeContext is context passed to all subcommand
// dispatch handlers. This is built at the beginning of
// runtime and then passed to the appropriate dispatcher.
pub struct RuntimeContext {
    pub config: RuntimeConfig,
    pub config_holder: ConfigHolder,
    pub connections: Arc<dyn ConnectionFactory>,
    pub prompter: Box<dyn Prompter>,
    pub output_file: Pin<Box<dyn tokio::io::AsyncWrite>>,
}

// RuntimeConfig contains runtime configuration parameters extracted
// from CLI options.
pub struct RuntimeConfig {
    pub format: OutputFormat,
    // -w/--workspace
    pub workspace: Option<String>,
}

impl RuntimeContext {
    /// The workspace selected by `-w`, the config default, or the fallback.
    pub fn workspace(&self) -> RadCliResult<Workspace> {
        validation::require_workspace(
            &self.config_holder.config,
            self.config_holder.directory_config.as_ref(),
            self.config.workspace.as_deref(),
        )
    }

    pub fn client(&self, workspace: &Workspace) -> RadCliResult<Arc<dyn ManagementClient>> {
        self.connections.management_client(workspace)
    }

    /// A client rooted at `scope` instead of the workspace scope, for
    /// commands that take `--group`.
    pub fn client_in_scope(
        &self,
        workspace: &Workspace,
        scope: &str,
    ) -> RadCliResult<Arc<dyn ManagementClient>> {
        if workspace.scope.as_deref() == Some(scope) {
            return self.client(workspace);
        }
        let mut scoped = workspace.clone();
        scoped.scope = Some(scope.to_string());
        self.client(&scoped)
    }
}
