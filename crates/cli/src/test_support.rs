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

//! Runtime contexts backed by mocks for command tests.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use ::ucp::cli::{OutputFormat, RadCliResult};
use ::ucp::{ManagementClient, MockManagementClient};
use tokio::io::AsyncReadExt;

use crate::cfg::dispatch::Dispatch;
use crate::cfg::runtime::{RuntimeConfig, RuntimeContext};
use crate::config::{ConfigFile, ConfigHolder, Connection, Workspace, WorkspaceSection};
use crate::connections::ConnectionFactory;
use crate::prompt::MockPrompter;

pub const TEST_SCOPE: &str = "/planes/radius/local/resourceGroups/test-group";
pub const TEST_ENVIRONMENT: &str =
    "/planes/radius/local/resourceGroups/test-group/providers/Applications.Core/environments/test-env";

pub fn test_workspace() -> Workspace {
    Workspace {
        name: "test".to_string(),
        connection: Connection::kubernetes("kind-test"),
        environment: Some(TEST_ENVIRONMENT.to_string()),
        scope: Some(TEST_SCOPE.to_string()),
        ..Default::default()
    }
}

pub fn config_with(workspace: Workspace) -> ConfigFile {
    ConfigFile {
        workspaces: WorkspaceSection {
            default: Some(workspace.name.clone()),
            items: [(workspace.name.clone(), workspace)].into_iter().collect(),
        },
        ..Default::default()
    }
}

// hands out the same client for every workspace, remembering the scopes
struct StaticConnections {
    client: Arc<dyn ManagementClient>,
    scopes: Arc<Mutex<Vec<String>>>,
}

impl ConnectionFactory for StaticConnections {
    fn management_client(&self, workspace: &Workspace) -> RadCliResult<Arc<dyn ManagementClient>> {
        if let Ok(mut scopes) = self.scopes.lock() {
            scopes.push(workspace.scope.clone().unwrap_or_default());
        }
        Ok(self.client.clone())
    }
}

pub struct TestContext {
    pub client: MockManagementClient,
    pub prompter: MockPrompter,
    pub config: ConfigFile,
    pub config_path: PathBuf,
    pub format: OutputFormat,
    pub workspace: Option<String>,
    pub scopes: Arc<Mutex<Vec<String>>>,
}

pub struct TestRun {
    pub result: RadCliResult<()>,
    pub output: String,
}

impl TestContext {
    pub fn new(client: MockManagementClient) -> TestContext {
        TestContext {
            client,
            prompter: MockPrompter::new(),
            config: config_with(test_workspace()),
            config_path: PathBuf::from("/nonexistent/config.yaml"),
            format: OutputFormat::Table,
            workspace: None,
            scopes: Arc::default(),
        }
    }

    pub fn with_prompter(mut self, prompter: MockPrompter) -> TestContext {
        self.prompter = prompter;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> TestContext {
        self.format = format;
        self
    }

    pub fn with_config(mut self, path: PathBuf, config: ConfigFile) -> TestContext {
        self.config_path = path;
        self.config = config;
        self
    }

    pub async fn run<D: Dispatch>(self, cmd: D) -> TestRun {
        let (writer, mut reader) = tokio::io::duplex(1 << 20);
        let ctx = RuntimeContext {
            config: RuntimeConfig {
                format: self.format,
                workspace: self.workspace,
            },
            config_holder: ConfigHolder {
                path: self.config_path,
                config: self.config,
                directory_config: None,
            },
            connections: Arc::new(StaticConnections {
                client: Arc::new(self.client),
                scopes: self.scopes,
            }),
            prompter: Box::new(self.prompter),
            output_file: Box::pin(writer),
        };

        let result = cmd.dispatch(ctx).await;

        let mut output = String::new();
        reader
            .read_to_string(&mut output)
            .await
            .expect("output should be utf-8");
        TestRun { result, output }
    }
}
