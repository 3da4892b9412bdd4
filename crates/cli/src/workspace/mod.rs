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

impl Dispatch for Cmd {
    async fn dispatch(self, mut ctx: RuntimeContext) -> RadCliResult<()> {
        match self {
            Cmd::Create(args::CreateWorkspace::Kubernetes(args)) => {
                let name = args
                    .name
                    .clone()
                    .or_else(|| ctx.config.workspace.clone())
                    .unwrap_or_else(|| "default".to_string());
                cmds::create_kubernetes(
                    args,
                    &name,
                    &ctx.config_holder,
                    ctx.connections.as_ref(),
                    &mut ctx.output_file,
                )
                .await
            }
            Cmd::List => {
                cmds::list(
                    &ctx.config_holder.config,
                    &mut ctx.output_file,
                    ctx.config.format,
                )
                .await
            }
            Cmd::Show(args) => {
                let workspace = match args.name.as_deref() {
                    Some(name) => cmds::find(&ctx.config_holder.config, name)?,
                    None => ctx.workspace()?,
                };
                cmds::show(&workspace, &mut ctx.output_file, ctx.config.format).await
            }
            Cmd::Switch(args) => {
                cmds::switch(args, &ctx.config_holder, &mut ctx.output_file).await
            }
            Cmd::Delete(args) => {
                let workspace = match args.name.as_deref() {
                    Some(name) => cmds::find(&ctx.config_holder.config, name)?,
                    None => ctx.workspace()?,
                };
                cmds::delete(
                    args.yes,
                    &workspace,
                    &ctx.config_holder,
                    ctx.prompter.as_ref(),
                    &mut ctx.output_file,
                )
                .await
            }
        }
    }
}
