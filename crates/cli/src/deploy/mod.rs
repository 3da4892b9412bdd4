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

pub mod args;
pub mod cmds;


use ::ucp::cli::RadCliResult;
use ::ucp::resource_id::resource_id_in_scope;
use ::ucp::resource_types::APPLICATIONS;
pub use args::Cmd;

use crate::cfg::dispatch::Dispatch;
use crate::cfg::runtime::RuntimeContext;
use crate::parameters;
use crate::validation::{require_environment_id, require_scope};

impl Dispatch for Cmd {
    async fn dispatch(self, mut ctx: RuntimeContext) -> RadCliResult<()> {
        let workspace = ctx.workspace()?;
        let scope = require_scope(self.group.as_deref(), &workspace)?;
        let environment_id = require_environment_id(self.environment.as_deref(), &scope, &workspace)?;

        // -a, then the workspace default; deploying without one is allowed
        let application_id = self
            .application
            .as_deref()
            .or(workspace.default_application.as_deref())
            .filter(|name| !name.is_empty())
            .map(|name| resource_id_in_scope(&scope, APPLICATIONS, name));

        let request = cmds::DeployRequest {
            file: self.file,
            parameters: parameters::parse(&self.parameters)?,
            scope: scope.clone(),
            environment_id,
            application_id,
            workspace: workspace.display_name().to_string(),
        };
        let client = ctx.client_in_scope(&workspace, &scope)?;
        cmds::deploy(request, client.as_ref(), &mut ctx.output_file).await
    }
}
