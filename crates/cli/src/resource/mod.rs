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
pub use args::Cmd;

use crate::cfg::dispatch::Dispatch;
use crate::cfg::runtime::RuntimeContext;
use crate::validation::{require_resource_type, require_resource_type_and_name, require_scope};

impl Dispatch for Cmd {
    async fn dispatch(self, mut ctx: RuntimeContext) -> RadCliResult<()> {
        let workspace = ctx.workspace()?;

        match self {
            Cmd::List(args) => {
                let scope = require_scope(args.group.as_deref(), &workspace)?;
                let filter = cmds::ListFilter {
                    resource_type: args
                        .resource_type
                        .as_deref()
                        .map(require_resource_type)
                        .transpose()?,
                    group: args.group,
                    environment: args.environment,
                    application: args.application,
                };
                let client = ctx.client_in_scope(&workspace, &scope)?;
                cmds::list(
                    filter,
                    &scope,
                    workspace.display_name(),
                    client.as_ref(),
                    &mut ctx.output_file,
                    ctx.config.format,
                )
                .await
            }
            Cmd::Show(args) => {
                let (resource_type, name) = require_resource_type_and_name(&args.args)?;
                let scope = require_scope(args.group.as_deref(), &workspace)?;
                let client = ctx.client_in_scope(&workspace, &scope)?;
                cmds::show(
                    &resource_type,
                    &name,
                    client.as_ref(),
                    &mut ctx.output_file,
                    ctx.config.format,
                )
                .await
            }
            Cmd::Delete(args) => {
                let (resource_type, name) = require_resource_type_and_name(&args.resource.args)?;
                let scope = require_scope(args.resource.group.as_deref(), &workspace)?;
                let client = ctx.client_in_scope(&workspace, &scope)?;
                cmds::delete(
                    &resource_type,
                    &name,
                    args.yes,
                    client.as_ref(),
                    ctx.prompter.as_ref(),
                    &mut ctx.output_file,
                )
                .await
            }
        }
    }
}
