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

#[cfg(test)]
mod tests;

use ::ucp::cli::RadCliResult;
pub use args::Cmd;

use crate::cfg::dispatch::Dispatch;
use crate::cfg::runtime::RuntimeContext;
use crate::validation::require_resource_group;

impl Dispatch for Cmd {
    async fn dispatch(self, mut ctx: RuntimeContext) -> RadCliResult<()> {
        let workspace = ctx.workspace()?;
        let client = ctx.client(&workspace)?;

        match self {
            Cmd::Create(args) => {
                let group = require_resource_group(args.name.as_deref(), args.group.as_deref())?;
                cmds::create(&group, &workspace, client.as_ref(), &mut ctx.output_file).await
            }
            Cmd::List => {
                cmds::list(client.as_ref(), &mut ctx.output_file, ctx.config.format).await
            }
            Cmd::Show(args) => {
                let group = require_resource_group(args.name.as_deref(), args.group.as_deref())?;
                cmds::show(&group, client.as_ref(), &mut ctx.output_file, ctx.config.format).await
            }
            Cmd::Switch(args) => {
                let group = require_resource_group(args.name.as_deref(), args.group.as_deref())?;
                cmds::switch(
                    &group,
                    &workspace,
                    &ctx.config_holder.path,
                    client.as_ref(),
                    &mut ctx.output_file,
                )
                .await
            }
            Cmd::Delete(args) => {
                let group = require_resource_group(
                    args.group.name.as_deref(),
                    args.group.group.as_deref(),
                )?;
                cmds::delete(
                    &group,
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
