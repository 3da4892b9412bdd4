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
use crate::validation::{require_environment_name, require_scope};

impl Dispatch for Cmd {
    async fn dispatch(self, mut ctx: RuntimeContext) -> RadCliResult<()> {
        let workspace = ctx.workspace()?;

        match self {
            Cmd::Create(args) => {
                let scope = require_scope(args.group.as_deref(), &workspace)?;
                let client = ctx.client_in_scope(&workspace, &scope)?;
                cmds::create(args, &scope, client.as_ref(), &mut ctx.output_file).await
            }
            Cmd::List(args) => {
                let scope = require_scope(args.group.as_deref(), &workspace)?;
                let client = ctx.client_in_scope(&workspace, &scope)?;
                cmds::list(
                    args.group.is_none(),
                    client.as_ref(),
                    &mut ctx.output_file,
                    ctx.config.format,
                )
                .await
            }
            Cmd::Show(args) => {
                let name = require_environment_name(
                    args.name.as_deref(),
                    args.environment.as_deref(),
                    &workspace,
                )?;
                let scope = require_scope(args.group.as_deref(), &workspace)?;
                let client = ctx.client(&workspace)?;
                cmds::show(
                    &name,
                    &scope,
                    client.as_ref(),
                    &mut ctx.output_file,
                    ctx.config.format,
                )
                .await
            }
            Cmd::Switch(args) => {
                let client = ctx.client(&workspace)?;
                cmds::switch(
                    &args.name,
                    &workspace,
                    &ctx.config_holder.path,
                    client.as_ref(),
                    &mut ctx.output_file,
                )
                .await
            }
            Cmd::Delete(args) => {
                let name = require_environment_name(
                    args.environment.name.as_deref(),
                    args.environment.environment.as_deref(),
                    &workspace,
                )?;
                let scope = require_scope(args.environment.group.as_deref(), &workspace)?;
                let client = ctx.client(&workspace)?;
                cmds::delete(
                    &name,
                    &scope,
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
